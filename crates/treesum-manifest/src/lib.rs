//! Manifest model, builder, and interchange codec for treesum.
//!
//! A manifest records `(relative path, content digest)` for every regular
//! file under a scan root, plus scan metadata. Manifests are built once and
//! never mutated; the diff engine consumes them as plain values.
//!
//! # Key Types
//!
//! - [`Manifest`] / [`ManifestEntry`] -- the in-memory data model
//! - [`ManifestBuilder`] -- one-pass construction with dedup and error counting
//! - [`ManifestDocument`] -- the on-disk JSON interchange form
//! - [`scan_directory`] -- walker + hasher + builder composed end to end

pub mod builder;
pub mod codec;
pub mod error;
pub mod model;

pub use builder::{scan_directory, ManifestBuilder};
pub use codec::{FileRecord, ManifestDocument, ScanInfo};
pub use error::{ManifestError, ManifestResult};
pub use model::{Manifest, ManifestEntry};
