//! Error types for Calluna.

use thiserror::Error;

/// Result type alias using [`CallunaError`].
pub type Result<T> = std::result::Result<T, CallunaError>;

/// Errors raised while loading a corpus or processing a query.
///
/// Query-level failures are local to the offending query; the index is never
/// mutated by a failed search and the engine stays usable afterwards.
#[derive(Error, Debug)]
pub enum CallunaError {
    /// Malformed query expression (unbalanced parentheses, dangling
    /// operators, or an unknown-term shape the elision policy does not
    /// cover).
    #[error("Syntax error: {0}")]
    Syntax(String),

    /// I/O error while reading a corpus file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CallunaError {
    /// Create a syntax error.
    pub fn syntax<S: Into<String>>(message: S) -> Self {
        CallunaError::Syntax(message.into())
    }
}
