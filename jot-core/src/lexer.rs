//! Tokenizer: turns a byte cursor into discrete tokens.
//!
//! The lexer owns the cursor position and the line counter for one parse
//! session, so independent sessions never share state. It both leads and
//! trails every token with a whitespace skip, counting each `\n` or `\r`
//! as one line (a CRLF pair counts twice, matching the diagnostics of the
//! reference behavior).
//!
//! String payloads are copied into the session arena; everything else is
//! carried inline in the token kind.

use log::warn;
use memchr::memchr;
use phf::phf_map;

use crate::arena::Arena;
use crate::error::{ParseError, ParseErrorCode};
use crate::token::{Token, TokenKind};

/// Keyword table for the three literals. Lookup is case-sensitive.
static LITERALS: phf::Map<&'static str, TokenKind> = phf_map! {
    "true" => TokenKind::True,
    "false" => TokenKind::False,
    "null" => TokenKind::Null,
};

/// Lexical scanner over one input buffer.
pub struct Lexer<'src> {
    input: &'src [u8],
    pos: usize,
    line: u32,
}

impl<'src> Lexer<'src> {
    pub fn new(input: &'src [u8]) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
        }
    }

    /// Current 1-based line, for diagnostics.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Produce the next token, advancing the cursor past the consumed
    /// characters and any surrounding whitespace.
    pub fn next_token(&mut self, arena: &mut Arena) -> Result<Token, ParseError> {
        self.skip_whitespace();
        let line = self.line;
        let kind = match self.peek() {
            None => TokenKind::Eof,
            Some(b'{') => self.single(TokenKind::Object),
            Some(b'}') => self.single(TokenKind::ObjectClose),
            Some(b'[') => self.single(TokenKind::Array),
            Some(b']') => self.single(TokenKind::ArrayClose),
            Some(b',') => self.single(TokenKind::Comma),
            Some(b':') => self.single(TokenKind::Colon),
            Some(b'"') => self.scan_string(arena)?,
            Some(c) if c.is_ascii_digit() || c == b'+' || c == b'-' => self.scan_number(),
            Some(b'f' | b't' | b'n') => self.scan_literal(),
            Some(_) => self.scan_unknown(),
        };
        self.skip_whitespace();
        Ok(Token { kind, line })
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.pos += 1;
        kind
    }

    /// Scan from past the opening quote to the next quote. No escape
    /// handling: a backslash has no special meaning and an embedded quote
    /// always terminates the string.
    fn scan_string(&mut self, arena: &mut Arena) -> Result<TokenKind, ParseError> {
        self.pos += 1;
        let rest = &self.input[self.pos..];
        let Some(len) = memchr(b'"', rest) else {
            return Err(ParseError::new(ParseErrorCode::UnclosedString, self.line));
        };
        let payload = arena.alloc_str(&rest[..len], self.line)?;
        self.pos += len + 1;
        Ok(TokenKind::Str(payload))
    }

    /// Greedy run of digits, `.`, `+` and `-`, converted with longest-
    /// valid-prefix semantics: `1-2.3+4` yields 1.0 and a run with no
    /// convertible prefix yields 0.0. Any trailing alphanumerics are
    /// skipped afterwards.
    fn scan_number(&mut self) -> TokenKind {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || c == b'.' || c == b'+' || c == b'-' {
                self.pos += 1;
            } else {
                break;
            }
        }
        let run = &self.input[start..self.pos];
        let value = match lexical_core::parse_partial::<f32>(run) {
            Ok((value, _)) => value,
            Err(_) => 0.0,
        };
        self.skip_alnum();
        TokenKind::Number(value)
    }

    /// Candidate `false` / `true` / `null` literal.
    ///
    /// A run that matches no keyword is a non-fatal `UnknownLiteral`:
    /// the diagnostic goes to the log and lexing continues, but the token
    /// cannot satisfy any grammar rule, so the parser reports a syntax
    /// error right after.
    fn scan_literal(&mut self) -> TokenKind {
        let run = self.take_alnum_run();
        match std::str::from_utf8(run).ok().and_then(|s| LITERALS.get(s)) {
            Some(kind) => *kind,
            None => {
                warn!(
                    "unknown literal at line {}: {:?}",
                    self.line,
                    String::from_utf8_lossy(run)
                );
                TokenKind::UnknownLiteral
            }
        }
    }

    /// Any byte with no other dispatch. Same diagnostic path as a failed
    /// literal, with the run extended over an alphanumeric tail so the
    /// message names something readable.
    fn scan_unknown(&mut self) -> TokenKind {
        let start = self.pos;
        self.pos += 1;
        self.skip_alnum();
        warn!(
            "unknown literal at line {}: {:?}",
            self.line,
            String::from_utf8_lossy(&self.input[start..self.pos])
        );
        TokenKind::UnknownLiteral
    }

    fn take_alnum_run(&mut self) -> &'src [u8] {
        let start = self.pos;
        self.skip_alnum();
        &self.input[start..self.pos]
    }

    fn skip_alnum(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric()) {
            self.pos += 1;
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                b' ' | b'\t' => self.pos += 1,
                b'\n' | b'\r' => {
                    self.line += 1;
                    self.pos += 1;
                }
                _ => break,
            }
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }
}
