//! Codegen error types.

/// Errors that can occur while emitting a server.
#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    /// Filesystem I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
