//! Copy primitives used to populate the release directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Errors that can occur while copying release content.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    #[error("Source not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Source is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Destination already exists: {0}")]
    DestinationExists(PathBuf),

    #[error("Failed to copy {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CopyError {
    fn io(path: &Path, source: io::Error) -> Self {
        CopyError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Recursively copy `source` to `destination`, returning the number of
/// files written.
///
/// The destination must not exist; trees are never merged. Missing parents
/// of the destination are created and symlinks are followed.
pub fn copy_tree(source: &Path, destination: &Path) -> Result<usize, CopyError> {
    if !source.exists() {
        return Err(CopyError::SourceNotFound(source.to_path_buf()));
    }
    if !source.is_dir() {
        return Err(CopyError::NotADirectory(source.to_path_buf()));
    }
    if fs::symlink_metadata(destination).is_ok() {
        return Err(CopyError::DestinationExists(destination.to_path_buf()));
    }

    fs::create_dir_all(destination).map_err(|e| CopyError::io(destination, e))?;

    let mut files = 0;
    for entry in WalkDir::new(source).follow_links(true).min_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(source).to_path_buf();
            CopyError::io(&path, io::Error::from(e))
        })?;

        let Ok(relative) = entry.path().strip_prefix(source) else {
            continue;
        };
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir(&target).map_err(|e| CopyError::io(&target, e))?;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| CopyError::io(entry.path(), e))?;
            files += 1;
        }
    }

    tracing::debug!(
        "Copied {} files from {} to {}",
        files,
        source.display(),
        destination.display()
    );

    Ok(files)
}

/// Copy a single file, overwriting any existing destination.
pub fn copy_file(source: &Path, destination: &Path) -> Result<(), CopyError> {
    if !source.is_file() {
        return Err(CopyError::SourceNotFound(source.to_path_buf()));
    }

    fs::copy(source, destination).map_err(|e| CopyError::io(destination, e))?;
    tracing::debug!("Copied {} to {}", source.display(), destination.display());

    Ok(())
}
