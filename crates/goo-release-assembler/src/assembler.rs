//! Release directory assembly.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::config::ReleaseConfig;
use crate::copy::{copy_file, copy_tree, CopyError};
use crate::manifest::ReleaseManifest;
use crate::tools::{ProcessRunner, ToolRunner, ToolStep};

/// Name of the library subdirectory inside a release.
pub const LIB_DIR: &str = "lib";

/// Result of a release run.
#[derive(Debug)]
pub struct ReleaseReport {
    /// Release name, e.g. `goo-15.0.0`
    pub release_name: String,

    /// Release directory that was populated
    pub release_dir: PathBuf,

    /// Whether the release directory existed before the run
    pub reused_existing_dir: bool,

    /// Number of directory trees copied
    pub directories: usize,

    /// Number of files written, including those inside copied trees
    pub files: usize,

    /// Total run time in milliseconds
    pub duration_ms: u64,
}

/// Errors that abort a release run.
#[derive(Debug, thiserror::Error)]
pub enum ReleaseError {
    #[error("Failed to remove build output {}", .path.display())]
    Clean {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to start {step} ({program})")]
    ToolSpawn {
        step: ToolStep,
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{step} ({program}) exited with {}", exit_description(.code))]
    ToolFailed {
        step: ToolStep,
        program: String,
        code: Option<i32>,
    },

    #[error("Failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Copy(#[from] CopyError),
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Drives a release run: clean, build tools, directory setup, copy.
pub struct ReleaseAssembler<R = ProcessRunner> {
    config: ReleaseConfig,
    manifest: ReleaseManifest,
    runner: R,
}

impl ReleaseAssembler<ProcessRunner> {
    /// Create an assembler that spawns real tool processes.
    pub fn new(config: ReleaseConfig, manifest: ReleaseManifest) -> Self {
        Self::with_runner(config, manifest, ProcessRunner)
    }
}

impl<R: ToolRunner> ReleaseAssembler<R> {
    /// Create an assembler with a custom tool runner.
    pub fn with_runner(config: ReleaseConfig, manifest: ReleaseManifest, runner: R) -> Self {
        Self {
            config,
            manifest,
            runner,
        }
    }

    /// Run every step in order, stopping at the first error.
    pub fn assemble(&self) -> Result<ReleaseReport, ReleaseError> {
        let start = Instant::now();
        let release_name = self.config.version.release_name();

        tracing::info!("Creating release {}", release_name);

        self.clean_build_output()?;
        self.run_tools()?;

        let (release_dir, reused_existing_dir) = self.prepare_release_dir()?;
        let (directories, files) = self.copy_manifest(&release_dir)?;

        Ok(ReleaseReport {
            release_name,
            release_dir,
            reused_existing_dir,
            directories,
            files,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Remove the previous build output, if any.
    fn clean_build_output(&self) -> Result<(), ReleaseError> {
        let out = self.config.resolve(&self.config.build_output_dir);
        if out.is_dir() {
            tracing::debug!("Removing stale build output {}", out.display());
            fs::remove_dir_all(&out)
                .map_err(|source| ReleaseError::Clean { path: out, source })?;
        }
        Ok(())
    }

    /// Run the minifier and documentation tools in order.
    fn run_tools(&self) -> Result<(), ReleaseError> {
        for step in ToolStep::ALL {
            let invocation = step.invocation(&self.config.tools, &self.config.version);
            tracing::debug!("Running {}", invocation);

            let status = self
                .runner
                .run(&invocation, &self.config.root)
                .map_err(|source| ReleaseError::ToolSpawn {
                    step,
                    program: invocation.program.clone(),
                    source,
                })?;

            if !status.success() {
                return Err(ReleaseError::ToolFailed {
                    step,
                    program: invocation.program,
                    code: status.code,
                });
            }
        }
        Ok(())
    }

    /// Create the release directory and its `lib` subdirectory.
    ///
    /// An existing release directory is reused. `lib` is created
    /// unconditionally and fails if it is already there.
    fn prepare_release_dir(&self) -> Result<(PathBuf, bool), ReleaseError> {
        let release_dir = self.config.resolve(self.config.release_dir());
        let existed = release_dir.is_dir();

        if existed {
            tracing::info!("Release directory already exists: {}", release_dir.display());
        } else {
            tracing::info!("Creating directory for release: {}", release_dir.display());
            fs::create_dir_all(&release_dir).map_err(|source| ReleaseError::CreateDir {
                path: release_dir.clone(),
                source,
            })?;
        }

        let lib = release_dir.join(LIB_DIR);
        fs::create_dir(&lib).map_err(|source| ReleaseError::CreateDir { path: lib, source })?;

        Ok((release_dir, existed))
    }

    /// Copy every manifest entry into the release directory.
    fn copy_manifest(&self, release_dir: &Path) -> Result<(usize, usize), ReleaseError> {
        let mut files = 0;

        for entry in &self.manifest.directories {
            let source = self.config.resolve(&entry.source);
            let destination = release_dir.join(&entry.destination);
            files += copy_tree(&source, &destination)?;
        }

        for entry in &self.manifest.files {
            let source = self.config.resolve(&entry.source);
            let destination = release_dir.join(&entry.destination);
            copy_file(&source, &destination)?;
            files += 1;
        }

        Ok((self.manifest.directories.len(), files))
    }
}
