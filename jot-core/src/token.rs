//! Lexical tokens.
//!
//! A [`Token`] is the atomic unit handed from the lexer to the parser:
//! constructed once per `next_token` call, consumed immediately (copied into
//! a tree node or discarded), never mutated. Payloads ride the [`TokenKind`]
//! variants that carry one; string payloads live in the parse arena and are
//! addressed through [`StrRef`] handles.

use std::fmt;
use std::mem;

use crate::arena::StrRef;

/// The atomic lexical unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// 1-based input line at which the token began. Diagnostics only.
    pub line: u32,
}

/// Token kinds.
///
/// `Object` and `Array` name the opening brackets because the same kinds
/// double as the node kinds of the corresponding tree vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    Object,
    ObjectClose,
    Array,
    ArrayClose,
    Colon,
    Comma,
    /// Raw characters between quotes, copied into the arena. No escape
    /// decoding: an embedded quote always terminates the string.
    Str(StrRef),
    /// Single-precision value converted from the numeric character run.
    Number(f32),
    True,
    False,
    Null,
    /// An `f`/`t`/`n`-led run that is not `false`/`true`/`null`, or any
    /// byte with no other dispatch. Never a valid grammar value, so it
    /// surfaces as a syntax error one rule up.
    UnknownLiteral,
    Eof,
}

impl TokenKind {
    /// Kind equality ignoring payloads, for the parser's expect points.
    #[inline]
    pub fn matches(&self, other: &TokenKind) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Object => f.write_str("'{'"),
            TokenKind::ObjectClose => f.write_str("'}'"),
            TokenKind::Array => f.write_str("'['"),
            TokenKind::ArrayClose => f.write_str("']'"),
            TokenKind::Colon => f.write_str("':'"),
            TokenKind::Comma => f.write_str("','"),
            TokenKind::Str(_) => f.write_str("string"),
            TokenKind::Number(n) => write!(f, "number ({n})"),
            TokenKind::True => f.write_str("true"),
            TokenKind::False => f.write_str("false"),
            TokenKind::Null => f.write_str("null"),
            TokenKind::UnknownLiteral => f.write_str("unknown literal"),
            TokenKind::Eof => f.write_str("end of input"),
        }
    }
}
