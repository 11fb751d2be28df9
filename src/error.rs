//! Error types for the parenlex scanner

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of a lexical failure
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LexErrorKind {
    /// String literal without a closing quote
    ///
    /// **Triggered by:** A lexeme starting with `"` that is a lone quote or
    /// whose last byte is not `"`
    /// **Example:** `(print "hello)`
    #[error("unmatched quotes for string")]
    UnmatchedQuotes,

    /// Numeric-looking lexeme that is not a valid floating point literal
    ///
    /// **Triggered by:** A lexeme starting with a digit, or a signed lexeme
    /// longer than one byte, that does not parse as `f64`
    /// **Example:** `1.2.3`, `-x`, `1e400`
    #[error("invalid number")]
    InvalidNumber,
}

/// A lexical failure anchored at the start of the offending lexeme
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[error("{kind} at pos {position}")]
pub struct LexError {
    /// Byte offset of the first byte of the failing lexeme
    pub position: usize,
    /// What went wrong
    pub kind: LexErrorKind,
}

impl LexError {
    /// Creates a lexical error at the given byte offset
    pub fn new(kind: LexErrorKind, position: usize) -> Self {
        LexError { position, kind }
    }
}

/// Errors that terminate a scan
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed lexeme (unmatched quotes, invalid number)
    #[error(transparent)]
    Lex(#[from] LexError),

    /// A single lexeme did not fit in the scanner's maximum buffer
    ///
    /// **Triggered by:** Unterminated strings or long identifiers exceeding
    /// [`ScannerConfig::max_lexeme_size`](crate::ScannerConfig::max_lexeme_size)
    #[error("lexeme too long at pos {position} (limit: {limit} bytes)")]
    LexemeTooLong {
        /// Byte offset where the oversized lexeme starts
        position: usize,
        /// Configured limit in bytes
        limit: usize,
    },

    /// The underlying reader failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Byte offset the error points at, if it has one
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::Lex(err) => Some(err.position),
            Error::LexemeTooLong { position, .. } => Some(*position),
            Error::Io(_) => None,
        }
    }

    /// The lexical error, if this is one
    pub fn as_lex(&self) -> Option<&LexError> {
        match self {
            Error::Lex(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type for parenlex operations
pub type Result<T> = std::result::Result<T, Error>;
