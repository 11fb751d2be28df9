//! Lexical analysis for parenlex
//!
//! Splits a byte stream into lexemes ([`boundary`]) and turns each lexeme
//! into a typed token ([`classifier`]). [`Scanner`] drives both over any
//! [`std::io::Read`].

pub mod boundary;
pub mod classifier;
mod config;
mod scanner;
mod token;

use std::io::Read;

pub use boundary::{find_boundary, Boundary, ScanMode};
pub use classifier::classify;
pub use config::{ScannerConfig, DEFAULT_BUFFER_SIZE, DEFAULT_MAX_LEXEME_SIZE};
pub use scanner::{ScanOutput, Scanner};
pub use token::{Token, TokenKind, TokenType, TokenValue};

/// Scans `reader` to the end or to the first error
pub fn scan<R: Read>(reader: R) -> ScanOutput {
    Scanner::new(reader).tokens()
}

/// Scans an in-memory string
pub fn scan_str(source: &str) -> ScanOutput {
    scan(source.as_bytes())
}
