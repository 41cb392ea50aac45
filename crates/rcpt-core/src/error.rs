//! Error types for the rcpt-core library.

use thiserror::Error;

/// Main error type for the rcpt library.
#[derive(Error, Debug)]
pub enum RcptError {
    /// Receipt extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to receipt field extraction.
///
/// Ordinary missing data is never an error: every field has a documented
/// default and the parser always assembles a complete [`crate::Receipt`].
/// The only hard failure is the boundary timeout a caller imposes against
/// pathological input, which must be treated as "no fields extracted".
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Extraction exceeded the per-document deadline.
    #[error("extraction timed out after {0} ms")]
    Timeout(u64),

    /// The document contained no recognized text at all.
    #[error("no OCR text in document")]
    EmptyDocument,
}

/// Result type for the rcpt library.
pub type Result<T> = std::result::Result<T, RcptError>;
