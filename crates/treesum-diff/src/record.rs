//! The diff result data model.

use treesum_types::Digest;

/// Which side(s) of the comparison a digest was found on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiffStatus {
    /// The digest exists in both manifests.
    Matched,
    /// The digest exists only in the first manifest.
    OnlyInA,
    /// The digest exists only in the second manifest.
    OnlyInB,
}

/// One comparison outcome: a digest and the path carrying it on each side.
///
/// Exactly one of `path_a`/`path_b` is absent when the status is
/// `OnlyInA`/`OnlyInB`; both are present when `Matched`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiffRecord {
    /// The content digest this record is about.
    pub digest: Digest,
    /// Path of the digest's first carrier in manifest A, if any.
    pub path_a: Option<String>,
    /// Path of the digest's first carrier in manifest B, if any.
    pub path_b: Option<String>,
    /// Which side(s) the digest was found on.
    pub status: DiffStatus,
}

impl DiffRecord {
    /// A digest present in both manifests.
    pub fn matched(digest: Digest, path_a: impl Into<String>, path_b: impl Into<String>) -> Self {
        Self {
            digest,
            path_a: Some(path_a.into()),
            path_b: Some(path_b.into()),
            status: DiffStatus::Matched,
        }
    }

    /// A digest present only in manifest A.
    pub fn only_in_a(digest: Digest, path_a: impl Into<String>) -> Self {
        Self {
            digest,
            path_a: Some(path_a.into()),
            path_b: None,
            status: DiffStatus::OnlyInA,
        }
    }

    /// A digest present only in manifest B.
    pub fn only_in_b(digest: Digest, path_b: impl Into<String>) -> Self {
        Self {
            digest,
            path_a: None,
            path_b: Some(path_b.into()),
            status: DiffStatus::OnlyInB,
        }
    }
}

/// The three-way partition produced by comparing two manifests.
///
/// Records appear in first-seen order of the manifest that contributed
/// them. Produced once by [`crate::diff`] and never mutated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Digests present in both manifests.
    pub matched: Vec<DiffRecord>,
    /// Digests present only in manifest A.
    pub only_in_a: Vec<DiffRecord>,
    /// Digests present only in manifest B.
    pub only_in_b: Vec<DiffRecord>,
}

impl DiffResult {
    /// Number of matched digests.
    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    /// Number of digests present on only one side.
    pub fn differing_count(&self) -> usize {
        self.only_in_a.len() + self.only_in_b.len()
    }

    /// Returns `true` if no digest is unique to either side.
    pub fn is_identical(&self) -> bool {
        self.only_in_a.is_empty() && self.only_in_b.is_empty()
    }
}
