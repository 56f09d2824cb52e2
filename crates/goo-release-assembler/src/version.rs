//! Release version identifiers.

use std::fmt;

/// Prefix of every release directory name.
pub const RELEASE_NAME_PREFIX: &str = "goo-";

/// Flag the minifier receives the version through.
pub const VERSION_FLAG: &str = "--goo-version=";

/// Opaque version token supplied on the command line.
///
/// No format is enforced; the value is only interpolated into the release
/// name and handed to the minifier verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version(String);

impl Version {
    /// Wrap a version string.
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    /// The raw version string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Release name, e.g. `goo-15.0.0`.
    pub fn release_name(&self) -> String {
        format!("{}{}", RELEASE_NAME_PREFIX, self.0)
    }

    /// Minifier argument, e.g. `--goo-version=15.0.0`.
    pub fn minify_flag(&self) -> String {
        format!("{}{}", VERSION_FLAG, self.0)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Version {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Version {
    fn from(value: String) -> Self {
        Self(value)
    }
}
