//! Depth-first enumeration of regular files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{WalkError, WalkResult};

/// Iterator over the regular files under a root directory.
///
/// Yields one item per regular file, depth-first. Directories and symlinks
/// are not yielded, and symlinks are not followed. An unreadable directory
/// produces a single `Err` item and the walk continues with its siblings,
/// so one bad subtree never aborts a scan.
///
/// Paths are yielded exactly as walkdir builds them: rooted at the path the
/// walk was started from. Start the walk from an absolute root to get
/// absolute file paths.
pub struct FileWalk {
    inner: walkdir::IntoIter,
}

impl FileWalk {
    /// Start a walk at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            inner: WalkDir::new(root).follow_links(false).into_iter(),
        }
    }
}

impl Iterator for FileWalk {
    type Item = WalkResult<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        for entry in self.inner.by_ref() {
            match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    return Some(Ok(entry.into_path()));
                }
                Ok(entry) => {
                    tracing::trace!(path = %entry.path().display(), "skipping non-regular entry");
                }
                Err(e) => {
                    tracing::debug!(error = %e, "unreadable entry during walk");
                    return Some(Err(WalkError::Entry(e)));
                }
            }
        }
        None
    }
}
