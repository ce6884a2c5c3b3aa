//! Digest provider for treesum.
//!
//! Computes the 128-bit content digest that identifies a file's bytes. The
//! rest of the system treats this as an opaque `hash(bytes) -> Digest`
//! primitive; only this crate knows the algorithm is MD5.
//!
//! All hashing wraps the RustCrypto implementation -- no custom cryptography.

pub mod hasher;

pub use hasher::{digest_bytes, digest_file, HashError, Md5Hasher};
