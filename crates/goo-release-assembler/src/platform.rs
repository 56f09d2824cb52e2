//! Platform-dependent tool names.

/// Default minifier, relative to the working root.
pub const DEFAULT_MINIFIER: &str = "node_modules/grunt-cli/bin/grunt";

/// Base name of the documentation build tool.
pub const BUILD_TOOL: &str = "cake";

/// Host platform category, as far as executable naming is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Windows command interpreter conventions (`.cmd` shims)
    Windows,

    /// Everything else
    Unix,
}

impl Platform {
    /// Platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// Suffix appended to script-shim executables.
    pub fn executable_suffix(self) -> &'static str {
        match self {
            Platform::Windows => ".cmd",
            Platform::Unix => "",
        }
    }
}

/// Executables the release run shells out to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    /// Minification/bundling tool
    pub minifier: String,

    /// Documentation and table-of-contents tool
    pub build_tool: String,
}

impl Toolchain {
    /// Look up the default toolchain for a platform.
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            minifier: DEFAULT_MINIFIER.to_string(),
            build_tool: format!("{}{}", BUILD_TOOL, platform.executable_suffix()),
        }
    }
}

impl Default for Toolchain {
    fn default() -> Self {
        Self::for_platform(Platform::current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_uses_cmd_shim() {
        let toolchain = Toolchain::for_platform(Platform::Windows);

        assert_eq!(toolchain.build_tool, "cake.cmd");
        assert_eq!(toolchain.minifier, DEFAULT_MINIFIER);
    }

    #[test]
    fn unix_uses_bare_name() {
        let toolchain = Toolchain::for_platform(Platform::Unix);

        assert_eq!(toolchain.build_tool, "cake");
    }

    #[test]
    fn default_follows_current_platform() {
        assert_eq!(
            Toolchain::default(),
            Toolchain::for_platform(Platform::current())
        );
    }
}
