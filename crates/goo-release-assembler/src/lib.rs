//! Release assembler for the goo engine.
//!
//! Runs the external minification and documentation tools, then lays out a
//! versioned release directory from a static manifest of copy instructions.

pub mod assembler;
pub mod config;
pub mod copy;
pub mod manifest;
pub mod platform;
pub mod tools;
pub mod version;

pub use assembler::{ReleaseAssembler, ReleaseError, ReleaseReport};
pub use config::ReleaseConfig;
pub use copy::{copy_file, copy_tree, CopyError};
pub use manifest::{DirCopy, FileCopy, ReleaseManifest};
pub use platform::{Platform, Toolchain};
pub use tools::{ProcessRunner, ToolInvocation, ToolRunner, ToolStatus, ToolStep};
pub use version::Version;
