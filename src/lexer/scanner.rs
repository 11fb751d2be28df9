use std::io::{ErrorKind, Read};
use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::boundary::{find_boundary, Boundary};
use super::classifier::classify;
use super::config::ScannerConfig;
use super::token::Token;
use crate::error::{Error, Result};

/// Streaming scanner for S-expression text
///
/// Reads from any [`Read`] through a growable window and yields tokens
/// lazily. The scan stops for good at end of input or at the first error.
pub struct Scanner<R> {
    /// Source of input bytes
    reader: R,
    /// Buffering limits
    config: ScannerConfig,
    /// Read window; `buf[start..end]` is read but not yet consumed
    buf: Vec<u8>,
    start: usize,
    end: usize,
    /// Stream offset of `buf[start]`
    offset: usize,
    /// Reader reported end of input
    at_eof: bool,
    /// No more tokens will be produced
    done: bool,
}

impl<R: Read> Scanner<R> {
    /// Creates a scanner with the default buffer limits
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, ScannerConfig::default())
    }

    /// Creates a scanner with custom buffer limits
    pub fn with_config(reader: R, config: ScannerConfig) -> Self {
        let config = config.normalized();
        Scanner {
            reader,
            config,
            buf: vec![0; config.initial_buffer_size],
            start: 0,
            end: 0,
            offset: 0,
            at_eof: false,
            done: false,
        }
    }

    /// Number of input bytes consumed by tokens so far
    pub fn position(&self) -> usize {
        self.offset
    }

    /// Scans the rest of the input, collecting tokens up to the first error
    pub fn tokens(mut self) -> ScanOutput {
        let mut tokens = Vec::new();
        let mut error = None;

        for item in &mut self {
            match item {
                Ok(token) => tokens.push(token),
                Err(err) => {
                    error = Some(err);
                    break;
                }
            }
        }

        debug!(
            tokens = tokens.len(),
            consumed = self.offset,
            error = ?error,
            "scan finished"
        );

        ScanOutput { tokens, error }
    }

    fn next_token(&mut self) -> Result<Option<Token>> {
        loop {
            match find_boundary(&self.buf[self.start..self.end], self.at_eof) {
                Boundary::Lexeme { len, first } => {
                    let lexeme = &self.buf[self.start..self.start + len];
                    let token = classify(lexeme, self.offset, first)?;
                    trace!(position = token.position, len, kind = ?token.kind, "token");

                    self.start += len;
                    self.offset += len;
                    return Ok(Some(token));
                }
                Boundary::End => return Ok(None),
                Boundary::NeedMore => self.fill()?,
            }
        }
    }

    /// Makes room in the window and reads more input into it
    fn fill(&mut self) -> Result<()> {
        if self.start > 0 {
            self.buf.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
        }

        if self.end == self.buf.len() {
            let limit = self.config.max_lexeme_size;
            // One byte past the limit so a lexeme of exactly `limit` bytes
            // can see the code point that ends it.
            let capacity = limit + 1;
            if self.buf.len() >= capacity {
                return Err(Error::LexemeTooLong {
                    position: self.offset,
                    limit,
                });
            }
            let grown = (self.buf.len() * 2).min(capacity);
            trace!(from = self.buf.len(), to = grown, "growing scan buffer");
            self.buf.resize(grown, 0);
        }

        loop {
            match self.reader.read(&mut self.buf[self.end..]) {
                Ok(0) => {
                    self.at_eof = true;
                    return Ok(());
                }
                Ok(n) => {
                    trace!(bytes = n, offset = self.offset, "read input");
                    self.end += n;
                    return Ok(());
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            }
        }
    }
}

impl<R: Read> Iterator for Scanner<R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<R: Read> FusedIterator for Scanner<R> {}

/// Tokens produced by a scan, plus the error that stopped it, if any
#[derive(Debug)]
pub struct ScanOutput {
    /// Every token produced before the scan ended
    pub tokens: Vec<Token>,
    /// Terminal error; `None` on a clean end of input
    pub error: Option<Error>,
}

impl ScanOutput {
    /// True when the scan reached end of input without error
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Converts to a `Result`, dropping the partial tokens on error
    pub fn into_result(self) -> Result<Vec<Token>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.tokens),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LexError, LexErrorKind};
    use crate::lexer::token::{TokenKind, TokenType};
    use std::io;

    /// Reader that hands out at most `chunk` bytes per call
    struct ChunkedReader<'a> {
        data: &'a [u8],
        chunk: usize,
    }

    impl Read for ChunkedReader<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.chunk.min(buf.len()).min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    /// Reader that fails after yielding its data
    struct FailingReader<'a> {
        data: &'a [u8],
    }

    impl Read for FailingReader<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.data.is_empty() {
                return Err(io::Error::other("disk on fire"));
            }
            let n = buf.len().min(self.data.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    /// Reader that is interrupted before every successful read
    struct InterruptingReader<'a> {
        data: &'a [u8],
        interrupt: bool,
    }

    impl Read for InterruptingReader<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::Error::from(ErrorKind::Interrupted));
            }
            let n = buf.len().min(self.data.len()).min(2);
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    fn types(tokens: &[Token]) -> Vec<TokenType> {
        tokens.iter().map(Token::token_type).collect()
    }

    #[test]
    fn test_simple_sexpr() {
        let output = Scanner::new("(+ 1 2)".as_bytes()).tokens();
        assert!(output.is_ok());

        let tokens = output.tokens;
        assert_eq!(tokens.len(), 7);
        assert_eq!(tokens[0].kind, TokenKind::OpenParen);
        assert_eq!(tokens[1].kind, TokenKind::Ident("+".to_string()));
        assert_eq!(tokens[2].kind, TokenKind::Space);
        assert_eq!(tokens[3].kind, TokenKind::Number(1.0));
        assert_eq!(tokens[5].kind, TokenKind::Number(2.0));
        assert_eq!(tokens[6].kind, TokenKind::CloseParen);
        assert_eq!(tokens[6].position, 6);
    }

    #[test]
    fn test_one_byte_reads_match_whole_input() {
        let source = "(define \"日本語 ( x\"\t\n -12.5e1 λx)";
        let whole = Scanner::new(source.as_bytes()).tokens();
        let chunked = Scanner::new(ChunkedReader {
            data: source.as_bytes(),
            chunk: 1,
        })
        .tokens();

        assert!(whole.is_ok());
        assert!(chunked.is_ok());
        assert_eq!(whole.tokens, chunked.tokens);
    }

    #[test]
    fn test_tiny_buffer_grows_to_fit_lexeme() {
        let config = ScannerConfig::default().with_initial_buffer_size(2);
        let output = Scanner::with_config("(abcdefghij)".as_bytes(), config).tokens();

        assert!(output.is_ok());
        assert_eq!(
            output.tokens[1].kind,
            TokenKind::Ident("abcdefghij".to_string())
        );
    }

    #[test]
    fn test_lexeme_too_long_keeps_prefix() {
        let config = ScannerConfig::default()
            .with_initial_buffer_size(4)
            .with_max_lexeme_size(8);
        let output = Scanner::with_config("(a \"unterminated string".as_bytes(), config).tokens();

        assert_eq!(
            types(&output.tokens),
            vec![TokenType::OpenParen, TokenType::Ident, TokenType::Space]
        );
        match output.error {
            Some(Error::LexemeTooLong { position, limit }) => {
                assert_eq!(position, 3);
                assert_eq!(limit, 8);
            }
            other => panic!("expected LexemeTooLong, got {:?}", other),
        }
    }

    #[test]
    fn test_lexeme_of_exactly_max_size_fits() {
        let config = ScannerConfig::default().with_max_lexeme_size(8);

        let output = Scanner::with_config("abcdefgh".as_bytes(), config).tokens();
        assert!(output.is_ok(), "{:?}", output.error);
        assert_eq!(
            output.tokens,
            vec![Token::new(TokenKind::Ident("abcdefgh".to_string()), 0, 8)]
        );

        let output = Scanner::with_config("abcdefgh)".as_bytes(), config).tokens();
        assert!(output.is_ok(), "{:?}", output.error);
        assert_eq!(
            types(&output.tokens),
            vec![TokenType::Ident, TokenType::CloseParen]
        );

        let output = Scanner::with_config("\"abcdef\"".as_bytes(), config).tokens();
        assert!(output.is_ok(), "{:?}", output.error);
        assert_eq!(output.tokens[0].kind, TokenKind::String("abcdef".to_string()));

        // whitespace runs are lexemes too
        let output = Scanner::with_config("        x".as_bytes(), config).tokens();
        assert!(output.is_ok(), "{:?}", output.error);
        assert_eq!(types(&output.tokens), vec![TokenType::Space, TokenType::Ident]);
    }

    #[test]
    fn test_lexeme_one_past_max_size_fails() {
        let config = ScannerConfig::default().with_max_lexeme_size(8);
        let output = Scanner::with_config("(abcdefghi)".as_bytes(), config).tokens();

        assert_eq!(types(&output.tokens), vec![TokenType::OpenParen]);
        match output.error {
            Some(Error::LexemeTooLong { position, limit }) => {
                assert_eq!(position, 1);
                assert_eq!(limit, 8);
            }
            other => panic!("expected LexemeTooLong, got {:?}", other),
        }
    }

    #[test]
    fn test_io_error_is_terminal() {
        let output = Scanner::new(FailingReader { data: b"(a b" }).tokens();

        // "b" could continue, so it is never finalized before the failure
        assert_eq!(
            types(&output.tokens),
            vec![TokenType::OpenParen, TokenType::Ident, TokenType::Space]
        );
        assert!(matches!(output.error, Some(Error::Io(_))));
    }

    #[test]
    fn test_interrupted_reads_are_retried() {
        let output = Scanner::new(InterruptingReader {
            data: b"(x 1)",
            interrupt: false,
        })
        .tokens();

        assert!(output.is_ok());
        assert_eq!(output.tokens.len(), 5);
    }

    #[test]
    fn test_iterator_is_fused_after_error() {
        let mut scanner = Scanner::new("a 1.2.3 b".as_bytes());

        assert!(matches!(scanner.next(), Some(Ok(_))));
        assert!(matches!(scanner.next(), Some(Ok(_))));
        match scanner.next() {
            Some(Err(Error::Lex(err))) => {
                assert_eq!(err, LexError::new(LexErrorKind::InvalidNumber, 2))
            }
            other => panic!("expected lex error, got {:?}", other),
        }
        assert!(scanner.next().is_none());
        assert!(scanner.next().is_none());
        assert_eq!(scanner.position(), 2);
    }

    #[test]
    fn test_empty_input() {
        let output = Scanner::new(io::empty()).tokens();
        assert!(output.is_ok());
        assert!(output.tokens.is_empty());
    }

    #[test]
    fn test_into_result() {
        let tokens = Scanner::new("()".as_bytes()).tokens().into_result().unwrap();
        assert_eq!(tokens.len(), 2);

        let err = Scanner::new("(\"".as_bytes())
            .tokens()
            .into_result()
            .unwrap_err();
        assert_eq!(err.to_string(), "unmatched quotes for string at pos 1");
    }
}
