//! The comparison interchange formats.
//!
//! A comparison produces up to two JSON documents: the diff document
//! (digests unique to one side) and the same document (digests present on
//! both sides). Both carry a `comparison_info` metadata block and a `files`
//! array. Paths absent on one side serialize as empty strings, which is
//! what downstream consumers of the format expect.

use std::fs;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use treesum_types::Digest;

use crate::error::DiffError;
use crate::record::{DiffRecord, DiffResult};

/// Description line used in diff documents.
const DIFF_DESCRIPTION: &str = "Files with different or unique MD5 hashes";
/// Description line used in same documents.
const SAME_DESCRIPTION: &str = "Files with matching MD5 hashes";

/// Metadata block shared by both comparison documents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonInfo {
    /// Wall-clock time of the comparison, RFC 3339.
    pub comparison_time: String,
    /// Label of the first compared manifest (its document path).
    pub file1: String,
    /// Label of the second compared manifest.
    pub file2: String,
    /// Human-readable description of the document's contents.
    pub description: String,
    /// Digests unique to one side. Only present in diff documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_differences: Option<usize>,
    /// Digests present on both sides. Only present in same documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_matches: Option<usize>,
}

/// Which manifest a one-sided digest belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SideStatus {
    OnlyInFile1,
    OnlyInFile2,
}

/// One record of a diff document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffFileRecord {
    pub md5: Digest,
    /// Carrying path in the first manifest, or empty if absent there.
    pub file1_path: String,
    /// Carrying path in the second manifest, or empty if absent there.
    pub file2_path: String,
    pub status: SideStatus,
}

/// One record of a same document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SameFileRecord {
    pub md5: Digest,
    pub file1_path: String,
    pub file2_path: String,
}

/// JSON document listing digests unique to one side of a comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffDocument {
    pub comparison_info: ComparisonInfo,
    pub files: Vec<DiffFileRecord>,
}

/// JSON document listing digests present on both sides of a comparison.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SameDocument {
    pub comparison_info: ComparisonInfo,
    pub files: Vec<SameFileRecord>,
}

fn path_or_empty(path: &Option<String>) -> String {
    path.clone().unwrap_or_default()
}

impl DiffDocument {
    /// Build the diff document for a comparison result.
    ///
    /// `file1`/`file2` label the compared manifest documents. Records keep
    /// the engine's order: all only-in-A records, then all only-in-B.
    pub fn from_result(
        result: &DiffResult,
        file1: &str,
        file2: &str,
        at: DateTime<Utc>,
    ) -> Self {
        let files: Vec<DiffFileRecord> = result
            .only_in_a
            .iter()
            .map(|r| side_record(r, SideStatus::OnlyInFile1))
            .chain(
                result
                    .only_in_b
                    .iter()
                    .map(|r| side_record(r, SideStatus::OnlyInFile2)),
            )
            .collect();

        Self {
            comparison_info: ComparisonInfo {
                comparison_time: at.to_rfc3339_opts(SecondsFormat::Secs, true),
                file1: file1.to_string(),
                file2: file2.to_string(),
                description: DIFF_DESCRIPTION.to_string(),
                total_differences: Some(result.differing_count()),
                total_matches: None,
            },
            files,
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, DiffError> {
        serde_json::to_string_pretty(self).map_err(|e| DiffError::Serialization(e.to_string()))
    }

    /// Write the document to a file as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), DiffError> {
        let mut json = self.to_json_pretty()?;
        json.push('\n');
        fs::write(path, json)?;
        Ok(())
    }
}

fn side_record(record: &DiffRecord, status: SideStatus) -> DiffFileRecord {
    DiffFileRecord {
        md5: record.digest,
        file1_path: path_or_empty(&record.path_a),
        file2_path: path_or_empty(&record.path_b),
        status,
    }
}

impl SameDocument {
    /// Build the same document for a comparison result.
    pub fn from_result(
        result: &DiffResult,
        file1: &str,
        file2: &str,
        at: DateTime<Utc>,
    ) -> Self {
        let files: Vec<SameFileRecord> = result
            .matched
            .iter()
            .map(|r| SameFileRecord {
                md5: r.digest,
                file1_path: path_or_empty(&r.path_a),
                file2_path: path_or_empty(&r.path_b),
            })
            .collect();

        Self {
            comparison_info: ComparisonInfo {
                comparison_time: at.to_rfc3339_opts(SecondsFormat::Secs, true),
                file1: file1.to_string(),
                file2: file2.to_string(),
                description: SAME_DESCRIPTION.to_string(),
                total_differences: None,
                total_matches: Some(result.matched_count()),
            },
            files,
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, DiffError> {
        serde_json::to_string_pretty(self).map_err(|e| DiffError::Serialization(e.to_string()))
    }

    /// Write the document to a file as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), DiffError> {
        let mut json = self.to_json_pretty()?;
        json.push('\n');
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digest(b: u8) -> Digest {
        Digest::from_hash([b; 16])
    }

    fn sample_result() -> DiffResult {
        DiffResult {
            matched: vec![DiffRecord::matched(digest(1), "kept.txt", "kept-too.txt")],
            only_in_a: vec![DiffRecord::only_in_a(digest(2), "gone.txt")],
            only_in_b: vec![DiffRecord::only_in_b(digest(3), "new.txt")],
        }
    }

    #[test]
    fn diff_document_lists_one_sided_records() {
        let document =
            DiffDocument::from_result(&sample_result(), "old.json", "new.json", Utc::now());

        assert_eq!(document.comparison_info.total_differences, Some(2));
        assert_eq!(document.comparison_info.total_matches, None);
        assert_eq!(document.files.len(), 2);

        assert_eq!(document.files[0].status, SideStatus::OnlyInFile1);
        assert_eq!(document.files[0].file1_path, "gone.txt");
        assert_eq!(document.files[0].file2_path, "");

        assert_eq!(document.files[1].status, SideStatus::OnlyInFile2);
        assert_eq!(document.files[1].file1_path, "");
        assert_eq!(document.files[1].file2_path, "new.txt");
    }

    #[test]
    fn same_document_lists_matched_records() {
        let document =
            SameDocument::from_result(&sample_result(), "old.json", "new.json", Utc::now());

        assert_eq!(document.comparison_info.total_matches, Some(1));
        assert_eq!(document.files.len(), 1);
        assert_eq!(document.files[0].file1_path, "kept.txt");
        assert_eq!(document.files[0].file2_path, "kept-too.txt");
    }

    #[test]
    fn status_serializes_as_snake_case_strings() {
        let document =
            DiffDocument::from_result(&sample_result(), "old.json", "new.json", Utc::now());
        let json = document.to_json_pretty().unwrap();
        assert!(json.contains("\"only_in_file1\""));
        assert!(json.contains("\"only_in_file2\""));
        assert!(json.contains("\"total_differences\": 2"));
        assert!(!json.contains("total_matches"));
    }

    #[test]
    fn documents_roundtrip_through_json() {
        let now = Utc::now();
        let diff_doc = DiffDocument::from_result(&sample_result(), "a.json", "b.json", now);
        let json = diff_doc.to_json_pretty().unwrap();
        let reparsed: DiffDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(diff_doc, reparsed);

        let same_doc = SameDocument::from_result(&sample_result(), "a.json", "b.json", now);
        let json = same_doc.to_json_pretty().unwrap();
        let reparsed: SameDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(same_doc, reparsed);
    }

    #[test]
    fn save_writes_the_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diff.json");

        let document =
            DiffDocument::from_result(&sample_result(), "a.json", "b.json", Utc::now());
        document.save(&path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let reparsed: DiffDocument = serde_json::from_str(&text).unwrap();
        assert_eq!(document, reparsed);
    }
}
