use std::path::PathBuf;

/// Errors from manifest construction and codec operations.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The scan root does not exist or is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// I/O failure reading or writing a manifest document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The manifest document is not valid JSON.
    #[error("malformed manifest document: {0}")]
    Parse(String),

    /// The manifest document parsed but is missing required structure.
    #[error("invalid manifest document: {0}")]
    Structure(String),
}

/// Convenience alias for manifest results.
pub type ManifestResult<T> = Result<T, ManifestError>;
