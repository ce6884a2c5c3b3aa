use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use md5::{Digest as _, Md5};
use treesum_types::Digest;

/// Read buffer size for file hashing.
const CHUNK_SIZE: usize = 64 * 1024;

/// Errors from digest computation.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    /// The file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Compute the digest of a byte slice.
pub fn digest_bytes(data: &[u8]) -> Digest {
    let mut hasher = Md5::new();
    hasher.update(data);
    Digest::from_hash(hasher.finalize().into())
}

/// Compute the digest of a file's content.
///
/// Reads the file in fixed-size chunks so large files are never held in
/// memory whole.
pub fn digest_file(path: &Path) -> Result<Digest, HashError> {
    let mut file = File::open(path).map_err(|source| HashError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut hasher = Md5Hasher::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];
    loop {
        let read = file.read(&mut buffer).map_err(|source| HashError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }

    Ok(hasher.finish())
}

/// Streaming hasher for incremental digest computation.
///
/// Use this when content arrives in pieces, such as when hashing while
/// copying a stream.
pub struct Md5Hasher {
    inner: Md5,
}

impl Md5Hasher {
    /// Create a new streaming hasher.
    pub fn new() -> Self {
        Self { inner: Md5::new() }
    }

    /// Feed more bytes into the hasher.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Finish hashing and produce the digest.
    pub fn finish(self) -> Digest {
        Digest::from_hash(self.inner.finalize().into())
    }
}

impl Default for Md5Hasher {
    fn default() -> Self {
        Self::new()
    }
}
