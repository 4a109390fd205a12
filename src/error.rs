//! Error types for the lexitrie library.
//!
//! All errors are represented by the [`LexitrieError`] enum, which provides
//! detailed information about what went wrong. Dictionary operations on the
//! trie itself are total and report absence through their return values; the
//! errors here come from the surrounding layers (word list loading, output
//! formatting).
//!
//! # Examples
//!
//! ```
//! use lexitrie::error::{LexitrieError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(LexitrieError::invalid_input("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for lexitrie operations.
///
/// It uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for creating specific error
/// types.
#[derive(Error, Debug)]
pub enum LexitrieError {
    /// I/O errors (word list files, terminal output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dictionary-related errors (loading, malformed word lists)
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Invalid input from the caller
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexitrieError.
pub type Result<T> = std::result::Result<T, LexitrieError>;

impl LexitrieError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        LexitrieError::Dictionary(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        LexitrieError::InvalidInput(msg.into())
    }

    /// Create a generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexitrieError::Other(msg.into())
    }
}
