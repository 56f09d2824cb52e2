//! Release run configuration.

use std::path::{Path, PathBuf};

use crate::platform::Toolchain;
use crate::version::Version;

/// Environment variable overriding the release directory.
pub const RELEASE_DIR_ENV: &str = "RELEASE_DIR";

/// Configuration for a single release run.
///
/// Everything the assembler would otherwise read from the process
/// (working directory, environment) is carried here.
#[derive(Debug, Clone)]
pub struct ReleaseConfig {
    /// Version being released
    pub version: Version,

    /// Working root; all relative paths resolve against it
    pub root: PathBuf,

    /// Release directory override (`RELEASE_DIR`)
    pub release_dir_override: Option<PathBuf>,

    /// Build output written by the minifier, removed at the start of a run
    pub build_output_dir: PathBuf,

    /// Parent of computed release directories
    pub release_root: PathBuf,

    /// External tools to invoke
    pub tools: Toolchain,
}

impl ReleaseConfig {
    /// Create a configuration with default paths rooted at `root`.
    pub fn new(version: impl Into<Version>, root: impl Into<PathBuf>) -> Self {
        Self {
            version: version.into(),
            root: root.into(),
            release_dir_override: None,
            build_output_dir: PathBuf::from("out"),
            release_root: PathBuf::from("out/release"),
            tools: Toolchain::default(),
        }
    }

    /// Set the release directory override.
    pub fn with_release_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.release_dir_override = dir;
        self
    }

    /// Release directory as configured, before resolving against the root.
    pub fn release_dir(&self) -> PathBuf {
        match &self.release_dir_override {
            Some(dir) => dir.clone(),
            None => self.release_root.join(self.version.release_name()),
        }
    }

    /// Resolve a path against the working root. Absolute paths pass through.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }
}
