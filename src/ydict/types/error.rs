//! Custom error types for the ydict-reader crate.

use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum YdictError {
    /// An error originating from I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required path was left empty in the configuration.
    #[error("Missing {0} path in configuration")]
    MissingPath(&'static str),

    /// The index file does not start with the expected magic value.
    #[error("Bad index magic: expected {expected:#010x}, found {found:#010x}")]
    BadMagic { expected: u32, found: u32 },

    /// The word table ended (or failed to read) before the declared entry count was reached.
    #[error("Word table truncated at entry {index} of {declared}")]
    TruncatedTable { index: usize, declared: usize },

    /// A definition blob could not be extracted from the data file.
    #[error("Invalid definition blob: {0}")]
    InvalidBlob(String),
}

/// A convenience `Result` type alias using the crate's `YdictError` type.
pub type Result<T> = std::result::Result<T, YdictError>;
