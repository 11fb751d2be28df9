//! Lexeme boundary detection
//!
//! Decides how many leading bytes of the unconsumed input belong to the next
//! lexeme. Works on raw bytes so it can run over a partially filled buffer:
//! when the answer depends on bytes that have not arrived yet it asks for
//! more input instead of guessing.

/// Result of looking for the end of the next lexeme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// The next lexeme is the first `len` bytes and starts with `first`
    Lexeme {
        /// Byte length of the lexeme
        len: usize,
        /// First decoded code point of the lexeme
        first: char,
    },
    /// The lexeme may continue past the available bytes
    NeedMore,
    /// No input left and none will arrive
    End,
}

/// Scan state picked from the first code point of a lexeme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// `(` or `)`, always a single code point
    Paren,
    /// Quoted string, runs through the closing `"`
    Quote,
    /// Maximal whitespace run
    Space,
    /// Identifier or number, runs until a separator or a quote
    General,
}

impl ScanMode {
    /// Picks the scan mode for a lexeme starting with `first`
    pub fn for_first(first: char) -> Self {
        match first {
            '(' | ')' => ScanMode::Paren,
            '"' => ScanMode::Quote,
            c if c.is_whitespace() => ScanMode::Space,
            _ => ScanMode::General,
        }
    }

    /// Whether `c` ends the lexeme and is included in it
    pub fn closes_with(self, c: char) -> bool {
        self == ScanMode::Quote && c == '"'
    }

    /// Whether `c` ends the lexeme and starts the next one
    pub fn ends_before(self, c: char) -> bool {
        match self {
            ScanMode::Paren => true,
            ScanMode::Quote => false,
            ScanMode::Space => !c.is_whitespace(),
            ScanMode::General => is_separator(c) || c == '"',
        }
    }
}

/// Whitespace or a parenthesis
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '(' || c == ')'
}

/// Finds the next lexeme in `data`.
///
/// `at_eof` tells whether more bytes may follow `data`. Without it a lexeme
/// that reaches the end of `data` is never finalized, since the next read
/// could extend it.
pub fn find_boundary(data: &[u8], at_eof: bool) -> Boundary {
    if data.is_empty() {
        return if at_eof {
            Boundary::End
        } else {
            Boundary::NeedMore
        };
    }

    let (first, width) = match decode_char(data, at_eof) {
        Decoded::Char(c, width) => (c, width),
        Decoded::Incomplete => return Boundary::NeedMore,
    };

    let mode = ScanMode::for_first(first);
    if mode == ScanMode::Paren {
        return Boundary::Lexeme { len: width, first };
    }

    let mut cursor = width;
    while cursor < data.len() {
        let (c, width) = match decode_char(&data[cursor..], at_eof) {
            Decoded::Char(c, width) => (c, width),
            Decoded::Incomplete => return Boundary::NeedMore,
        };
        if mode.closes_with(c) {
            return Boundary::Lexeme {
                len: cursor + width,
                first,
            };
        }
        if mode.ends_before(c) {
            return Boundary::Lexeme { len: cursor, first };
        }
        cursor += width;
    }

    if at_eof {
        Boundary::Lexeme {
            len: data.len(),
            first,
        }
    } else {
        Boundary::NeedMore
    }
}

/// One decoded code point at the start of a byte slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decoded {
    /// Code point and its width in bytes
    Char(char, usize),
    /// Valid prefix of a multi-byte sequence cut off by the end of the slice
    Incomplete,
}

/// Decodes the first UTF-8 code point of `data` (which must be non-empty).
///
/// Invalid sequences, and truncated ones once `at_eof` is set, come back as
/// U+FFFD with a width of one byte so scanning always makes progress.
pub(crate) fn decode_char(data: &[u8], at_eof: bool) -> Decoded {
    const INVALID: Decoded = Decoded::Char(char::REPLACEMENT_CHARACTER, 1);

    let lead = data[0];
    let width = match lead {
        0x00..=0x7F => return Decoded::Char(lead as char, 1),
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return INVALID,
    };

    if data.len() < width {
        let continuation = data[1..].iter().all(|b| (0x80..=0xBF).contains(b));
        return if continuation && !at_eof {
            Decoded::Incomplete
        } else {
            INVALID
        };
    }

    match std::str::from_utf8(&data[..width]) {
        Ok(s) => s
            .chars()
            .next()
            .map_or(INVALID, |c| Decoded::Char(c, width)),
        Err(_) => INVALID,
    }
}
