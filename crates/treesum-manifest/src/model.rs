//! The manifest data model.

use std::collections::HashSet;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use treesum_types::Digest;

/// One scanned file: its path relative to the scan root and its content
/// digest.
///
/// The path is slash-separated. The literal value `"."` denotes the root
/// itself (a scanned file whose absolute path equals the root).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Slash-separated path relative to the manifest's scan root.
    pub path: String,
    /// Content digest of the file.
    pub digest: Digest,
}

impl ManifestEntry {
    /// Create a new entry.
    pub fn new(path: impl Into<String>, digest: Digest) -> Self {
        Self {
            path: path.into(),
            digest,
        }
    }
}

/// An ordered collection of manifest entries plus scan metadata.
///
/// Invariants: `file_count == entries.len()`, and entries are unique by
/// `(digest, path)`. Both are upheld at construction; a `Manifest` is never
/// mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Manifest {
    /// Absolute path of the scanned root directory.
    pub root: PathBuf,
    /// When the scan produced this manifest.
    pub generated_at: DateTime<Utc>,
    /// Number of files recorded (always `entries.len()`).
    pub file_count: usize,
    /// Number of files skipped because their digest could not be computed.
    pub error_count: usize,
    /// The recorded files, in scan order.
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Build a manifest directly from entries.
    ///
    /// Duplicate `(digest, path)` pairs are suppressed, keeping the first
    /// occurrence, so the uniqueness invariant holds for any input.
    pub fn from_entries(root: impl Into<PathBuf>, entries: Vec<ManifestEntry>) -> Self {
        let mut seen: HashSet<(Digest, String)> = HashSet::with_capacity(entries.len());
        let mut unique = Vec::with_capacity(entries.len());
        for entry in entries {
            if seen.insert((entry.digest, entry.path.clone())) {
                unique.push(entry);
            }
        }
        Self {
            root: root.into(),
            generated_at: Utc::now(),
            file_count: unique.len(),
            error_count: 0,
            entries: unique,
        }
    }

    /// Number of recorded files.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no files were recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The recorded entries, in scan order.
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }
}
