//! Error types for the stmtx-core library.

use thiserror::Error;

/// Main error type for the stmtx library.
#[derive(Error, Debug)]
pub enum StmtxError {
    /// Text acquisition error.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while turning a document into linearized text.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The document produced no usable text.
    #[error("Could not extract text from PDF")]
    Empty,

    /// The file extension is not on the allow-list.
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),

    /// The file exceeds the configured size limit.
    #[error("file is {size} bytes, limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },

    /// The PDF could not be parsed or linearized.
    #[error("{0}")]
    Pdf(String),

    /// Failed to read the underlying file.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for the stmtx library.
pub type Result<T> = std::result::Result<T, StmtxError>;
