use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A single classified lexeme from the input stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Byte offset of the lexeme's first byte in the original stream
    pub position: usize,
    /// Byte length of the raw lexeme
    pub len: usize,
    /// The type of token, carrying its decoded value
    pub kind: TokenKind,
}

impl Token {
    /// Creates a new token with the given properties
    pub fn new(kind: TokenKind, position: usize, len: usize) -> Self {
        Token {
            position,
            len,
            kind,
        }
    }

    /// Byte range of the raw lexeme in the original stream
    pub fn span(&self) -> Range<usize> {
        self.position..self.position + self.len
    }

    /// Type of the token without its payload
    pub fn token_type(&self) -> TokenType {
        self.kind.token_type()
    }

    /// Decoded value; `None` for parentheses and whitespace
    pub fn value(&self) -> Option<TokenValue<'_>> {
        match &self.kind {
            TokenKind::Ident(text) | TokenKind::String(text) => Some(TokenValue::Text(text)),
            TokenKind::Number(n) => Some(TokenValue::Number(*n)),
            TokenKind::OpenParen | TokenKind::CloseParen | TokenKind::Space => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{{{} {} {}}}", self.position, self.token_type(), value),
            None => write!(f, "{{{} {}}}", self.position, self.token_type()),
        }
    }
}

/// All token kinds with their decoded payloads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TokenKind {
    // Delimiters
    /// Left parenthesis (
    OpenParen,
    /// Right parenthesis )
    CloseParen,
    /// Maximal run of whitespace
    Space,

    // Literals
    /// Bare symbol, taken verbatim
    Ident(String),
    /// Quoted string body without the delimiters
    String(String),
    /// Numeric literal
    Number(f64),
}

impl TokenKind {
    /// Payload-free type of this kind
    pub fn token_type(&self) -> TokenType {
        match self {
            TokenKind::OpenParen => TokenType::OpenParen,
            TokenKind::CloseParen => TokenType::CloseParen,
            TokenKind::Space => TokenType::Space,
            TokenKind::Ident(_) => TokenType::Ident,
            TokenKind::String(_) => TokenType::String,
            TokenKind::Number(_) => TokenType::Number,
        }
    }
}

/// Token type tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    /// Left parenthesis (
    OpenParen,
    /// Right parenthesis )
    CloseParen,
    /// Bare symbol
    Ident,
    /// Quoted string
    String,
    /// Numeric literal
    Number,
    /// Whitespace run
    Space,
}

impl TokenType {
    /// Lowercase name used when printing tokens
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::OpenParen => "openparen",
            TokenType::CloseParen => "closeparen",
            TokenType::Ident => "ident",
            TokenType::String => "string",
            TokenType::Number => "number",
            TokenType::Space => "space",
        }
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Borrowed view of a token's decoded value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenValue<'a> {
    /// Identifier text or string body
    Text(&'a str),
    /// Numeric value
    Number(f64),
}

impl std::fmt::Display for TokenValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            TokenValue::Text(text) => write!(f, "{}", text),
            TokenValue::Number(n) => write!(f, "{}", n),
        }
    }
}
