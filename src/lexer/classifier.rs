//! Token classification
//!
//! Turns one raw lexeme into a typed [`Token`]. Classification is a pure
//! function of the lexeme bytes, its offset, and its first code point.

use super::token::{Token, TokenKind};
use crate::error::{LexError, LexErrorKind};

/// Classifies a lexeme found at byte offset `position`.
///
/// `first` is the lexeme's first decoded code point. Rules are tried in
/// order: parentheses, whitespace, quoted string, number, identifier.
pub fn classify(lexeme: &[u8], position: usize, first: char) -> Result<Token, LexError> {
    let kind = match first {
        '(' => TokenKind::OpenParen,
        ')' => TokenKind::CloseParen,
        c if c.is_whitespace() => TokenKind::Space,
        _ if lexeme.first() == Some(&b'"') => classify_string(lexeme, position)?,
        c if looks_numeric(c, lexeme.len()) => classify_number(lexeme, position)?,
        _ => TokenKind::Ident(String::from_utf8_lossy(lexeme).into_owned()),
    };

    Ok(Token::new(kind, position, lexeme.len()))
}

/// A lone `+` or `-` is an identifier; a signed lexeme of two or more bytes
/// is parsed as a number.
fn looks_numeric(first: char, len: usize) -> bool {
    is_decimal_digit(first) || (len > 1 && (first == '+' || first == '-'))
}

/// Code points of the zero digit of every Unicode decimal digit (Nd) run.
/// Each run is ten consecutive code points, zero through nine.
const DECIMAL_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Unicode decimal digit (general category Nd), not just ASCII `0-9`
fn is_decimal_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    let cp = c as u32;
    DECIMAL_ZEROS.iter().any(|&zero| (zero..zero + 10).contains(&cp))
}

fn classify_string(lexeme: &[u8], position: usize) -> Result<TokenKind, LexError> {
    if lexeme.len() == 1 || lexeme.last() != Some(&b'"') {
        return Err(LexError::new(LexErrorKind::UnmatchedQuotes, position));
    }

    let body = &lexeme[1..lexeme.len() - 1];
    Ok(TokenKind::String(String::from_utf8_lossy(body).into_owned()))
}

fn classify_number(lexeme: &[u8], position: usize) -> Result<TokenKind, LexError> {
    let invalid = || LexError::new(LexErrorKind::InvalidNumber, position);

    let text = std::str::from_utf8(lexeme).map_err(|_| invalid())?;
    let value: f64 = text.parse().map_err(|_| invalid())?;

    // Finite literals that overflow are out of range, not infinity.
    if value.is_infinite() && !is_infinity_literal(text) {
        return Err(invalid());
    }

    Ok(TokenKind::Number(value))
}

fn is_infinity_literal(text: &str) -> bool {
    let unsigned = text.trim_start_matches(|c| c == '+' || c == '-');
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}
