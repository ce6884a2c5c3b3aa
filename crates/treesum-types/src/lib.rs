//! Foundation types for treesum.
//!
//! Provides the content digest type used as the identity key throughout the
//! system. Every other treesum crate depends on `treesum-types`.
//!
//! # Key Types
//!
//! - [`Digest`] -- 128-bit content fingerprint, compared by exact byte equality
//! - [`TypeError`] -- errors from digest parsing

pub mod digest;
pub mod error;

pub use digest::Digest;
pub use error::TypeError;
