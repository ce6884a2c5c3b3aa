//! Manifest diff engine for treesum.
//!
//! Answers "what changed between two snapshots of a directory" by computing
//! a digest-keyed symmetric difference between two manifests: entries whose
//! content exists in both (matched), only in the first (only in A), or only
//! in the second (only in B). Identity is the content digest; paths are
//! carried through for reporting.
//!
//! # Key Types
//!
//! - [`diff`] -- the engine: a pure function from two manifests to a result
//! - [`DiffResult`] / [`DiffRecord`] / [`DiffStatus`] -- the partition
//! - [`DiffDocument`] / [`SameDocument`] -- the comparison interchange forms

pub mod codec;
pub mod engine;
pub mod error;
pub mod record;

pub use codec::{
    ComparisonInfo, DiffDocument, DiffFileRecord, SameDocument, SameFileRecord, SideStatus,
};
pub use engine::diff;
pub use error::DiffError;
pub use record::{DiffRecord, DiffResult, DiffStatus};
