//! Tree walker for treesum.
//!
//! Enumerates the regular files under a root directory as a lazy iterator,
//! so the per-file processing policy (hashing, filtering) stays decoupled
//! from traversal.
//!
//! # Key Types
//!
//! - [`FileWalk`] -- iterator over regular-file paths, depth-first
//! - [`WalkError`] -- per-entry traversal failure (the walk continues)

pub mod error;
pub mod walk;

pub use error::{WalkError, WalkResult};
pub use walk::FileWalk;
