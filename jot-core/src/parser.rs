//! Recursive-descent grammar parser.
//!
//! Grammar:
//!
//! ```text
//! document := object | array
//! object   := '{' ( member ( ',' member )* )? '}'
//! member   := STRING ':' value
//! array    := '[' ( value ( ',' value )* )? ']'
//! value    := object | array | STRING | NUMBER | TRUE | FALSE | NULL
//! ```
//!
//! Classic single-token-lookahead predictive descent: each rule inspects
//! the lookahead to pick a branch, and `expect` consumes it or fails the
//! whole session. There is no resynchronization — the first mismatch
//! propagates out as a [`ParseError`] and no partial tree escapes.
//!
//! Every rule allocates exactly one arena node for the construct it
//! parses, carrying the token consumed by its leading expect; children and
//! siblings are linked as the rules recurse.

use crate::arena::{Arena, NodeId, StrRef};
use crate::error::{ParseError, ParseErrorCode};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};
use crate::tree::NodeRecord;

/// One parse session.
///
/// The lexer cursor, the one-token lookahead and the arena all live here,
/// so independent sessions never share state and can run concurrently.
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    arena: Arena,
    lookahead: Token,
}

impl<'src> Parser<'src> {
    /// Set up a session over `input` with the given arena byte budget.
    pub fn new(input: &'src [u8], arena_capacity: usize) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(input);
        let mut arena = Arena::with_capacity(arena_capacity);
        let lookahead = lexer.next_token(&mut arena)?;
        Ok(Self {
            lexer,
            arena,
            lookahead,
        })
    }

    /// Parse one document, consuming the session.
    ///
    /// Returns the arena together with the root node id; the caller wraps
    /// them into a `Document`. A document may start only with `{` or `[`.
    pub fn parse_document(mut self) -> Result<(Arena, NodeId), ParseError> {
        let root = match self.lookahead.kind {
            TokenKind::Object => self.object()?,
            TokenKind::Array => self.array()?,
            _ => {
                let found = self.describe(&self.lookahead.kind);
                return Err(ParseError::with_found(
                    ParseErrorCode::InvalidDocumentStart,
                    self.lookahead.line,
                    found,
                ));
            }
        };
        Ok((self.arena, root))
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    fn object(&mut self) -> Result<NodeId, ParseError> {
        let id = self.node()?;
        self.expect(TokenKind::Object)?;
        // Anything other than a member key here means an empty object; a
        // stray token is caught by the closing expect below.
        if matches!(self.lookahead.kind, TokenKind::Str(_)) {
            let mut tail = self.member()?;
            self.arena.node_mut(id).first_child = Some(tail);
            while self.lookahead.kind.matches(&TokenKind::Comma) {
                self.expect(TokenKind::Comma)?;
                let next = self.member()?;
                self.arena.node_mut(tail).next_sibling = Some(next);
                tail = next;
            }
        }
        self.expect(TokenKind::ObjectClose)?;
        Ok(id)
    }

    /// A member node carries its key string token; the value subtree hangs
    /// off `first_child`.
    fn member(&mut self) -> Result<NodeId, ParseError> {
        let id = self.node()?;
        self.expect(TokenKind::Str(StrRef::empty()))?;
        self.expect(TokenKind::Colon)?;
        let value = self.value()?;
        self.arena.node_mut(id).first_child = Some(value);
        Ok(id)
    }

    fn array(&mut self) -> Result<NodeId, ParseError> {
        let id = self.node()?;
        self.expect(TokenKind::Array)?;
        if !self.lookahead.kind.matches(&TokenKind::ArrayClose) {
            let mut tail = self.value()?;
            self.arena.node_mut(id).first_child = Some(tail);
            while self.lookahead.kind.matches(&TokenKind::Comma) {
                self.expect(TokenKind::Comma)?;
                let next = self.value()?;
                self.arena.node_mut(tail).next_sibling = Some(next);
                tail = next;
            }
        }
        self.expect(TokenKind::ArrayClose)?;
        Ok(id)
    }

    fn value(&mut self) -> Result<NodeId, ParseError> {
        match self.lookahead.kind {
            TokenKind::Object => self.object(),
            TokenKind::Array => self.array(),
            TokenKind::Str(_)
            | TokenKind::Number(_)
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Null => {
                let id = self.node()?;
                self.advance()?;
                Ok(id)
            }
            _ => Err(self.unexpected("value")),
        }
    }

    // =========================================================================
    // Token handling
    // =========================================================================

    /// Compare the lookahead against `expected`; on match consume it and
    /// pull the next token. A mismatch is fatal for the session.
    fn expect(&mut self, expected: TokenKind) -> Result<(), ParseError> {
        if self.lookahead.kind.matches(&expected) {
            self.advance()
        } else {
            Err(self.unexpected(&expected.to_string()))
        }
    }

    /// Consume the lookahead unconditionally.
    fn advance(&mut self) -> Result<(), ParseError> {
        self.lookahead = self.lexer.next_token(&mut self.arena)?;
        Ok(())
    }

    /// Allocate the node for the construct the current lookahead opens.
    fn node(&mut self) -> Result<NodeId, ParseError> {
        self.arena.alloc_node(NodeRecord::new(self.lookahead))
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::with_found(
            ParseErrorCode::UnexpectedToken,
            self.lookahead.line,
            format!(
                "expected {expected}, found {}",
                self.describe(&self.lookahead.kind)
            ),
        )
    }

    /// Render a token kind for diagnostics, including the literal text
    /// where one is available.
    fn describe(&self, kind: &TokenKind) -> String {
        match kind {
            TokenKind::Str(s) => format!(
                "string ({:?})",
                String::from_utf8_lossy(self.arena.resolve(*s))
            ),
            other => other.to_string(),
        }
    }
}
