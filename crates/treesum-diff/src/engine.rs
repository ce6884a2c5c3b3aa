//! Digest-keyed symmetric difference between two manifests.

use std::collections::HashMap;

use treesum_manifest::{Manifest, ManifestEntry};
use treesum_types::Digest;

use crate::record::{DiffRecord, DiffResult};

/// Index a manifest's entries by digest, keeping the first path seen for
/// each digest.
fn digest_index(entries: &[ManifestEntry]) -> HashMap<Digest, &str> {
    let mut index = HashMap::with_capacity(entries.len());
    for entry in entries {
        index.entry(entry.digest).or_insert(entry.path.as_str());
    }
    index
}

/// Returns `true` if `entry` is the first carrier of its digest in the
/// indexed manifest. Later same-digest entries are invisible to the diff.
fn is_first_carrier(index: &HashMap<Digest, &str>, entry: &ManifestEntry) -> bool {
    index.get(&entry.digest).copied() == Some(entry.path.as_str())
}

/// Compare two manifests by content digest.
///
/// Produces the three-way partition of digests: present in both (with the
/// carrying path from each side), only in `a`, and only in `b`. Pure and
/// deterministic: entry order does not affect the result sets, and records
/// are emitted in first-seen order within each category.
///
/// When one manifest carries the same digest at several paths, only the
/// first path participates; the remaining same-digest entries produce no
/// records. Runs in O(|a| + |b|) with no I/O, and never fails on
/// well-formed manifests (empty manifests included).
pub fn diff(a: &Manifest, b: &Manifest) -> DiffResult {
    let index_a = digest_index(a.entries());
    let index_b = digest_index(b.entries());

    let mut matched = Vec::new();
    let mut only_in_a = Vec::new();
    for entry in a.entries() {
        if !is_first_carrier(&index_a, entry) {
            continue;
        }
        match index_b.get(&entry.digest) {
            Some(&path_b) => matched.push(DiffRecord::matched(
                entry.digest,
                entry.path.as_str(),
                path_b,
            )),
            None => only_in_a.push(DiffRecord::only_in_a(entry.digest, entry.path.as_str())),
        }
    }

    let mut only_in_b = Vec::new();
    for entry in b.entries() {
        if !is_first_carrier(&index_b, entry) {
            continue;
        }
        if !index_a.contains_key(&entry.digest) {
            only_in_b.push(DiffRecord::only_in_b(entry.digest, entry.path.as_str()));
        }
    }

    DiffResult {
        matched,
        only_in_a,
        only_in_b,
    }
}
