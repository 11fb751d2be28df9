//! # Parenlex - a lexical scanner for minimal S-expressions
//!
//! Parenlex turns S-expression text (parenthesized lists of identifiers,
//! numbers, and quoted strings separated by whitespace) into a flat
//! sequence of positioned tokens.
//!
//! ## Quick Start
//!
//! ```rust
//! use parenlex::{scan_str, TokenKind};
//!
//! let output = scan_str(r#"(a b 123 1.8e3 "a b")"#);
//! assert!(output.is_ok());
//!
//! let tokens = output.tokens;
//! assert_eq!(tokens.len(), 11);
//! assert_eq!(tokens[5].kind, TokenKind::Number(123.0));
//! assert_eq!(tokens[7].kind, TokenKind::Number(1800.0));
//! assert_eq!(tokens[9].kind, TokenKind::String("a b".to_string()));
//! ```
//!
//! ## Streaming
//!
//! [`Scanner`] reads from any [`std::io::Read`] and yields tokens lazily.
//! Lexemes may be split across reads; the scanner waits for more input
//! before finalizing a lexeme that reaches the end of its buffer.
//!
//! ```rust
//! use parenlex::{Scanner, TokenType};
//!
//! # fn main() -> parenlex::Result<()> {
//! let input = std::io::Cursor::new("(x \"y z\")");
//! let mut types = Vec::new();
//! for token in Scanner::new(input) {
//!     types.push(token?.token_type());
//! }
//! assert_eq!(
//!     types,
//!     vec![
//!         TokenType::OpenParen,
//!         TokenType::Ident,
//!         TokenType::Space,
//!         TokenType::String,
//!         TokenType::CloseParen,
//!     ]
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Errors are terminal. The scan keeps every token produced before the
//! failing lexeme and reports the error with its byte offset:
//!
//! ```rust
//! use parenlex::{scan_str, LexErrorKind};
//!
//! let output = scan_str("(a 1.2.3 b)");
//! assert_eq!(output.tokens.len(), 3);
//!
//! let err = output.error.unwrap();
//! let lex = err.as_lex().unwrap();
//! assert_eq!(lex.kind, LexErrorKind::InvalidNumber);
//! assert_eq!(lex.position, 3);
//! assert_eq!(err.to_string(), "invalid number at pos 3");
//! ```
//!
//! Bracket balance is never checked: `)(` scans to two tokens.

/// Version of the parenlex crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;

// Re-export main types
pub use error::{Error, LexError, LexErrorKind, Result};
pub use lexer::{
    scan, scan_str, Boundary, ScanMode, ScanOutput, Scanner, ScannerConfig, Token, TokenKind,
    TokenType, TokenValue,
};
