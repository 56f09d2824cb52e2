//! The release manifest: what gets copied where.

use std::path::{Path, PathBuf};

/// Third-party library trees bundled under `lib/`.
const LIBRARY_TREES: &[&str] = &[
    "lib/p2",
    "lib/box2d",
    "lib/cannon",
    "lib/soundmanager2",
    "lib/howler",
    "lib/crunch",
    "lib/hammerv2",
];

/// Bundles produced by the minifier, copied into `lib/`.
const BUNDLES: &[&str] = &[
    "goo.js",
    "fsmpack.js",
    "geometrypack.js",
    "quadpack.js",
    "timelinepack.js",
];

/// Single-file third-party scripts copied into `lib/`.
const LIBRARY_FILES: &[&str] = &["lib/require.js", "lib/ammo.small.js", "lib/polyk.js"];

/// License and changelog files copied to the release root.
const NOTICE_FILES: &[&str] = &["COPYING", "LICENSE", "CHANGES"];

/// A recursive directory copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirCopy {
    /// Source directory, relative to the working root
    pub source: PathBuf,

    /// Destination, relative to the release directory
    pub destination: PathBuf,
}

impl DirCopy {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Copy to the same relative path inside the release.
    pub fn same(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            source: path.clone(),
            destination: path,
        }
    }
}

/// A single file copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCopy {
    /// Source file, relative to the working root
    pub source: PathBuf,

    /// Destination, relative to the release directory
    pub destination: PathBuf,
}

impl FileCopy {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    pub fn same(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            source: path.clone(),
            destination: path,
        }
    }
}

/// Ordered copy instructions defining the release layout.
///
/// Directory trees are copied first, then individual files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseManifest {
    pub directories: Vec<DirCopy>,
    pub files: Vec<FileCopy>,
}

impl ReleaseManifest {
    /// The goo release layout, reading bundles from `build_output`.
    pub fn goo(build_output: &Path) -> Self {
        let mut directories: Vec<DirCopy> =
            LIBRARY_TREES.iter().map(|p| DirCopy::same(*p)).collect();
        directories.push(DirCopy::new("goojs-jsdoc", "docs"));
        directories.push(DirCopy::same("visual-test"));
        directories.push(DirCopy::same("examples"));

        let mut files: Vec<FileCopy> = BUNDLES
            .iter()
            .map(|name| FileCopy::new(build_output.join(name), Path::new("lib").join(name)))
            .collect();
        files.extend(LIBRARY_FILES.iter().map(|p| FileCopy::same(*p)));
        files.extend(NOTICE_FILES.iter().map(|p| FileCopy::same(*p)));

        Self { directories, files }
    }
}
