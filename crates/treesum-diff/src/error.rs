/// Errors from comparison-document codec operations.
///
/// The diff engine itself is total over well-formed manifests and raises no
/// errors; only serializing and writing its output can fail.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// I/O failure writing a comparison document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization failure producing a comparison document.
    #[error("serialization error: {0}")]
    Serialization(String),
}
