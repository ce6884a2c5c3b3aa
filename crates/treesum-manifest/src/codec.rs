//! The manifest interchange format.
//!
//! Manifests persist as JSON documents with a `scan_info` metadata block and
//! a `files` array of `{path, md5}` records. Parse failures are fatal to the
//! operation that needed the document; a well-formed JSON document missing
//! its `files` array is rejected separately so callers can tell the two
//! apart.

use std::fs;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use treesum_types::Digest;

use crate::error::{ManifestError, ManifestResult};
use crate::model::{Manifest, ManifestEntry};

/// Scan metadata block of a manifest document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanInfo {
    /// Absolute path of the scanned root.
    pub scanned_directory: String,
    /// Wall-clock time of the scan, RFC 3339.
    pub scan_time: String,
    /// Number of files recorded.
    pub total_files: usize,
    /// Number of files skipped due to read failures.
    pub errors: usize,
}

/// One file record of a manifest document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Slash-separated path relative to the scanned root.
    pub path: String,
    /// Content digest, 32 lowercase hex characters.
    pub md5: Digest,
}

/// The on-disk form of a [`Manifest`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestDocument {
    pub scan_info: ScanInfo,
    pub files: Vec<FileRecord>,
}

impl ManifestDocument {
    /// Build the document form of a manifest.
    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self {
            scan_info: ScanInfo {
                scanned_directory: manifest.root.to_string_lossy().into_owned(),
                scan_time: manifest
                    .generated_at
                    .to_rfc3339_opts(SecondsFormat::Secs, true),
                total_files: manifest.file_count,
                errors: manifest.error_count,
            },
            files: manifest
                .entries()
                .iter()
                .map(|e| FileRecord {
                    path: e.path.clone(),
                    md5: e.digest,
                })
                .collect(),
        }
    }

    /// Convert into the in-memory manifest form.
    ///
    /// Entry uniqueness is re-established on the way in (first occurrence
    /// wins) and `file_count` is recomputed from the surviving entries, so
    /// a hand-edited document cannot hand the diff engine a manifest that
    /// violates its invariants. An unparseable `scan_time` is not an error;
    /// the timestamp is informational and falls back to the UNIX epoch.
    pub fn into_manifest(self) -> Manifest {
        let entries = self
            .files
            .into_iter()
            .map(|f| ManifestEntry::new(f.path, f.md5))
            .collect();
        let mut manifest = Manifest::from_entries(self.scan_info.scanned_directory, entries);
        manifest.generated_at = DateTime::parse_from_rfc3339(&self.scan_info.scan_time)
            .map(|t| t.with_timezone(&Utc))
            .unwrap_or(DateTime::UNIX_EPOCH);
        manifest.error_count = self.scan_info.errors;
        manifest
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> ManifestResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ManifestError::Parse(e.to_string()))
    }

    /// Parse a manifest document from JSON text.
    ///
    /// Distinguishes malformed JSON ([`ManifestError::Parse`]) from a
    /// document that parses but lacks a valid `files` array
    /// ([`ManifestError::Structure`]).
    pub fn from_json(text: &str) -> ManifestResult<Self> {
        let raw: serde_json::Value =
            serde_json::from_str(text).map_err(|e| ManifestError::Parse(e.to_string()))?;

        match raw.get("files") {
            None => {
                return Err(ManifestError::Structure(
                    "missing `files` array".to_string(),
                ))
            }
            Some(files) if !files.is_array() => {
                return Err(ManifestError::Structure(
                    "`files` is not an array".to_string(),
                ))
            }
            Some(_) => {}
        }

        serde_json::from_value(raw).map_err(|e| ManifestError::Structure(e.to_string()))
    }

    /// Load a manifest document from a file.
    pub fn load(path: &Path) -> ManifestResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Write the document to a file as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> ManifestResult<()> {
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

    fn sample_manifest() -> Manifest {
        Manifest::from_entries(
            "/scan/root",
            vec![
                ManifestEntry::new("a.txt", digest(1)),
                ManifestEntry::new("sub/b.txt", digest(2)),
            ],
        )
    }

    #[test]
    fn document_roundtrip() {
        let manifest = sample_manifest();
        let document = ManifestDocument::from_manifest(&manifest);
        let json = document.to_json_pretty().unwrap();
        let reparsed = ManifestDocument::from_json(&json).unwrap();
        assert_eq!(document, reparsed);

        let back = reparsed.into_manifest();
        assert_eq!(back.entries(), manifest.entries());
        assert_eq!(back.file_count, manifest.file_count);
    }

    #[test]
    fn document_uses_interchange_field_names() {
        let document = ManifestDocument::from_manifest(&sample_manifest());
        let json = document.to_json_pretty().unwrap();
        assert!(json.contains("\"scan_info\""));
        assert!(json.contains("\"scanned_directory\""));
        assert!(json.contains("\"total_files\""));
        assert!(json.contains("\"md5\""));
        assert!(json.contains(&format!("\"{}\"", "01".repeat(16))));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = ManifestDocument::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ManifestError::Parse(_)));
    }

    #[test]
    fn missing_files_array_is_a_structure_error() {
        let err = ManifestDocument::from_json("{\"scan_info\": {}}").unwrap_err();
        assert!(matches!(err, ManifestError::Structure(_)));
    }

    #[test]
    fn non_array_files_is_a_structure_error() {
        let err = ManifestDocument::from_json("{\"files\": 42}").unwrap_err();
        assert!(matches!(err, ManifestError::Structure(_)));
    }

    #[test]
    fn into_manifest_restores_uniqueness() {
        let json = format!(
            "{{\"scan_info\":{{\"scanned_directory\":\"/r\",\"scan_time\":\"x\",\
             \"total_files\":2,\"errors\":0}},\
             \"files\":[{{\"path\":\"a\",\"md5\":\"{d}\"}},{{\"path\":\"a\",\"md5\":\"{d}\"}}]}}",
            d = "01".repeat(16)
        );
        let manifest = ManifestDocument::from_json(&json).unwrap().into_manifest();
        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.file_count, 1);
    }

    #[test]
    fn load_and_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.json");

        let document = ManifestDocument::from_manifest(&sample_manifest());
        document.save(&path).unwrap();
        let loaded = ManifestDocument::load(&path).unwrap();
        assert_eq!(document, loaded);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = ManifestDocument::load(Path::new("/nonexistent/m.json")).unwrap_err();
        assert!(matches!(err, ManifestError::Io(_)));
    }
}
