//! External build tool invocation.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::platform::Toolchain;
use crate::version::Version;

/// The external build steps, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolStep {
    /// Minify and bundle the library and its packs
    Minify,

    /// Generate API documentation
    Jsdoc,

    /// Generate the visual-test table of contents
    VisualToc,

    /// Generate the examples table of contents
    ExamplesToc,
}

impl ToolStep {
    /// All steps in execution order.
    pub const ALL: [ToolStep; 4] = [
        ToolStep::Minify,
        ToolStep::Jsdoc,
        ToolStep::VisualToc,
        ToolStep::ExamplesToc,
    ];

    /// Subcommand passed to the tool.
    pub fn subcommand(self) -> &'static str {
        match self {
            ToolStep::Minify => "minify",
            ToolStep::Jsdoc => "jsdoc",
            ToolStep::VisualToc => "visualtoc",
            ToolStep::ExamplesToc => "examplestoc",
        }
    }

    /// Build the invocation for this step.
    pub fn invocation(self, toolchain: &Toolchain, version: &Version) -> ToolInvocation {
        match self {
            ToolStep::Minify => ToolInvocation {
                step: self,
                program: toolchain.minifier.clone(),
                args: vec![self.subcommand().to_string(), version.minify_flag()],
            },
            _ => ToolInvocation {
                step: self,
                program: toolchain.build_tool.clone(),
                args: vec![self.subcommand().to_string()],
            },
        }
    }
}

impl fmt::Display for ToolStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.subcommand())
    }
}

/// A fully specified tool command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub step: ToolStep,
    pub program: String,
    pub args: Vec<String>,
}

impl ToolInvocation {
    /// Resolve the program against `root`.
    ///
    /// Multi-component relative paths such as `node_modules/grunt-cli/bin/grunt`
    /// are joined onto the root; bare names are left for `PATH` lookup.
    pub fn resolve_program(&self, root: &Path) -> PathBuf {
        let program = Path::new(&self.program);
        if program.is_absolute() || program.components().count() <= 1 {
            program.to_path_buf()
        } else {
            root.join(program)
        }
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// How a tool process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolStatus {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
}

impl ToolStatus {
    pub fn success(self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external tools to completion.
pub trait ToolRunner {
    /// Run `invocation` with `root` as the working directory and block until
    /// it exits.
    fn run(&self, invocation: &ToolInvocation, root: &Path) -> io::Result<ToolStatus>;
}

/// Runs tools as child processes with inherited stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ToolRunner for ProcessRunner {
    fn run(&self, invocation: &ToolInvocation, root: &Path) -> io::Result<ToolStatus> {
        let status = Command::new(invocation.resolve_program(root))
            .args(&invocation.args)
            .current_dir(root)
            .status()?;

        Ok(ToolStatus {
            code: status.code(),
        })
    }
}
