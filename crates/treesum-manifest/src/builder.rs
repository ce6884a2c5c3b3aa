//! One-pass manifest construction.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::Utc;
use treesum_hash::digest_file;
use treesum_types::Digest;
use treesum_walk::FileWalk;

use crate::error::{ManifestError, ManifestResult};
use crate::model::{Manifest, ManifestEntry};

/// Accumulates `(absolute path, digest)` pairs into a [`Manifest`].
///
/// The builder derives each entry's relative path from the scan root,
/// suppresses duplicate `(digest, path)` pairs, and counts per-file digest
/// failures without aborting. Feed it from any source of already-hashed
/// files; [`scan_directory`] wires it to the walker and hasher.
pub struct ManifestBuilder {
    root: PathBuf,
    entries: Vec<ManifestEntry>,
    seen: HashSet<(Digest, String)>,
    error_count: usize,
}

impl ManifestBuilder {
    /// Create a builder for the given scan root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
            seen: HashSet::new(),
            error_count: 0,
        }
    }

    /// Record one scanned file.
    ///
    /// The relative path is derived from the builder's root: a
    /// segment-aligned prefix match strips the root (an empty remainder
    /// becomes `"."`); a path not under the root is recorded unchanged.
    /// A `(digest, path)` pair already recorded for this manifest is
    /// skipped silently and does not count as a file.
    pub fn record(&mut self, absolute_path: &Path, digest: Digest) {
        let path = relative_path(&self.root, absolute_path);
        if self.seen.insert((digest, path.clone())) {
            self.entries.push(ManifestEntry::new(path, digest));
        }
    }

    /// Record a file that could not be digested. The scan continues.
    pub fn record_error(&mut self) {
        self.error_count += 1;
    }

    /// Number of entries recorded so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finish the scan and produce the immutable manifest.
    pub fn finish(self) -> Manifest {
        let file_count = self.entries.len();
        Manifest {
            root: self.root,
            generated_at: Utc::now(),
            file_count,
            error_count: self.error_count,
            entries: self.entries,
        }
    }
}

/// Derive a slash-separated path relative to `root`.
fn relative_path(root: &Path, absolute: &Path) -> String {
    match absolute.strip_prefix(root) {
        Ok(rest) if rest.as_os_str().is_empty() => ".".to_string(),
        Ok(rest) => rest
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => absolute.to_string_lossy().into_owned(),
    }
}

/// Scan a directory tree into a manifest.
///
/// Walks every regular file under `root`, digests each one, and builds the
/// manifest in a single sequential pass. An unreadable file or directory
/// entry is counted in `error_count` and skipped; it never aborts the scan.
pub fn scan_directory(root: &Path) -> ManifestResult<Manifest> {
    let root = root
        .canonicalize()
        .map_err(|_| ManifestError::NotADirectory(root.to_path_buf()))?;
    if !root.is_dir() {
        return Err(ManifestError::NotADirectory(root));
    }

    let mut builder = ManifestBuilder::new(&root);
    for item in FileWalk::new(&root) {
        match item {
            Ok(path) => match digest_file(&path) {
                Ok(digest) => {
                    tracing::debug!(path = %path.display(), digest = %digest, "hashed file");
                    builder.record(&path, digest);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable file");
                    builder.record_error();
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                builder.record_error();
            }
        }
    }

    Ok(builder.finish())
}
