/// Errors from tree traversal.
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    /// A directory entry could not be read. The walk skips it and continues.
    #[error("failed to read directory entry: {0}")]
    Entry(#[from] walkdir::Error),
}

/// Convenience alias for walk results.
pub type WalkResult<T> = Result<T, WalkError>;
