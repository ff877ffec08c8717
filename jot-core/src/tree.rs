//! Document tree and read-only query API.
//!
//! The tree uses an index-based arena pattern: node records live in the
//! parse arena and point at each other through [`NodeId`] handles, so
//! navigation is bounds-checked index following with no reference cycles.
//! Every vertex keeps the token it was built from; an object's children
//! are its member nodes (string-keyed, each holding the member's value as
//! its first child) and an array's children are its element nodes.
//!
//! # Example
//!
//! ```
//! use jot_core::Document;
//!
//! let doc = Document::parse(br#"{"stuff": [1, 2, 3]}"#).unwrap();
//! let stuff = doc.root().get("stuff").unwrap();
//!
//! let mut values = Vec::new();
//! for element in stuff.children() {
//!     values.push(element.as_number().unwrap());
//! }
//! assert_eq!(values, vec![1.0, 2.0, 3.0]);
//! ```

use std::fmt;
use std::fmt::Write as _;

use crate::arena::{Arena, NodeId};
use crate::error::ParseError;
use crate::parser::Parser;
use crate::token::{Token, TokenKind};

/// Default arena byte budget for [`Document::parse`].
///
/// Generous for configuration-sized documents; callers parsing large
/// inputs size the budget themselves via [`Document::parse_with_capacity`].
pub const DEFAULT_ARENA_CAPACITY: usize = 64 * 1024 * 1024;

/// One tree vertex, owned by the arena for the lifetime of the document.
#[derive(Debug, Clone, Copy)]
pub struct NodeRecord {
    pub(crate) token: Token,
    pub(crate) first_child: Option<NodeId>,
    pub(crate) next_sibling: Option<NodeId>,
}

impl NodeRecord {
    pub(crate) fn new(token: Token) -> Self {
        Self {
            token,
            first_child: None,
            next_sibling: None,
        }
    }
}

/// A parsed document.
///
/// Owns the arena holding every node record and string payload produced by
/// the parse; dropping the document releases the whole region at once.
/// The root is always an object or an array node.
#[derive(Debug)]
pub struct Document {
    arena: Arena,
    root: NodeId,
}

impl Document {
    /// Parse one document with the default arena budget.
    pub fn parse(input: &[u8]) -> Result<Self, ParseError> {
        Self::parse_with_capacity(input, DEFAULT_ARENA_CAPACITY)
    }

    /// Parse one document, carving every allocation out of an arena of
    /// `arena_capacity` bytes. Exceeding the budget fails the parse with
    /// [`crate::ParseErrorCode::ArenaExhausted`].
    pub fn parse_with_capacity(input: &[u8], arena_capacity: usize) -> Result<Self, ParseError> {
        let (arena, root) = Parser::new(input, arena_capacity)?.parse_document()?;
        Ok(Document { arena, root })
    }

    /// Get the root node.
    pub fn root(&self) -> Node<'_> {
        Node {
            doc: self,
            id: self.root,
        }
    }

    /// Bytes the parse carved out of the arena budget.
    pub fn arena_used(&self) -> usize {
        self.arena.used()
    }

    /// Indented rendering of the whole tree, for debugging.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        dump_chain(&mut out, Some(self.root()), 0);
        out
    }

    fn record(&self, id: NodeId) -> &NodeRecord {
        self.arena.node(id)
    }
}

/// A handle for navigating the document tree.
///
/// Lightweight and copyable; borrows the document and stays valid for as
/// long as the document (and with it the arena) is alive.
#[derive(Clone, Copy)]
pub struct Node<'doc> {
    doc: &'doc Document,
    id: NodeId,
}

impl<'doc> Node<'doc> {
    /// Get the node's ID.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The token this vertex was built from.
    pub fn token(&self) -> Token {
        self.doc.record(self.id).token
    }

    /// Token kind of this vertex.
    pub fn kind(&self) -> TokenKind {
        self.token().kind
    }

    /// 1-based source line of the token this node was built from.
    pub fn line(&self) -> u32 {
        self.token().line
    }

    /// Get the first child: an object's first member, an array's first
    /// element, or a member's value node.
    pub fn first_child(&self) -> Option<Node<'doc>> {
        self.doc.record(self.id).first_child.map(|id| Node {
            doc: self.doc,
            id,
        })
    }

    /// Get the next node on the same sibling chain.
    pub fn next_sibling(&self) -> Option<Node<'doc>> {
        self.doc.record(self.id).next_sibling.map(|id| Node {
            doc: self.doc,
            id,
        })
    }

    /// Iterate the sibling chain under this node: member nodes for an
    /// object, element nodes for an array.
    pub fn children(&self) -> Children<'doc> {
        Children {
            next: self.first_child(),
        }
    }

    /// Iterate an object's members as `(key bytes, value)` pairs.
    ///
    /// Empty for every other node kind.
    pub fn members(&self) -> impl Iterator<Item = (&'doc [u8], Node<'doc>)> + 'doc {
        let doc = self.doc;
        let chain = match self.kind() {
            TokenKind::Object => self.first_child(),
            _ => None,
        };
        Children { next: chain }.filter_map(move |member| {
            let TokenKind::Str(key) = member.kind() else {
                return None;
            };
            member
                .first_child()
                .map(|value| (doc.arena.resolve(key), value))
        })
    }

    /// Look up a member's value by key.
    ///
    /// Linear scan over the member chain in source order, byte-exact
    /// comparison, first match wins. `None` when this node is not an
    /// object or no member matches.
    pub fn get(&self, key: &str) -> Option<Node<'doc>> {
        self.members()
            .find(|(k, _)| *k == key.as_bytes())
            .map(|(_, value)| value)
    }

    /// Numeric payload, or `None` when this is not a number node.
    pub fn as_number(&self) -> Option<f32> {
        match self.kind() {
            TokenKind::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Boolean payload, or `None` when this is not a `true`/`false` node.
    pub fn as_bool(&self) -> Option<bool> {
        match self.kind() {
            TokenKind::True => Some(true),
            TokenKind::False => Some(false),
            _ => None,
        }
    }

    /// Raw string payload bytes, or `None` when this is not a string node.
    pub fn as_bytes(&self) -> Option<&'doc [u8]> {
        match self.kind() {
            TokenKind::Str(s) => Some(self.doc.arena.resolve(s)),
            _ => None,
        }
    }

    /// String payload as UTF-8 text. `None` for non-string nodes and for
    /// payloads that are not valid UTF-8.
    pub fn as_str(&self) -> Option<&'doc str> {
        self.as_bytes().and_then(|b| std::str::from_utf8(b).ok())
    }

    /// Check if this is an object node.
    pub fn is_object(&self) -> bool {
        matches!(self.kind(), TokenKind::Object)
    }

    /// Check if this is an array node.
    pub fn is_array(&self) -> bool {
        matches!(self.kind(), TokenKind::Array)
    }

    /// Check if this is a null node.
    pub fn is_null(&self) -> bool {
        matches!(self.kind(), TokenKind::Null)
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("kind", &self.kind())
            .finish()
    }
}

/// Iterator over a sibling chain.
pub struct Children<'doc> {
    next: Option<Node<'doc>>,
}

impl<'doc> Iterator for Children<'doc> {
    type Item = Node<'doc>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.next_sibling();
        Some(current)
    }
}

fn dump_chain(out: &mut String, first: Option<Node<'_>>, depth: usize) {
    let mut cursor = first;
    while let Some(node) = cursor {
        for _ in 0..depth {
            out.push_str("  ");
        }
        match node.kind() {
            TokenKind::Str(_) => {
                let _ = writeln!(
                    out,
                    "string {:?}",
                    String::from_utf8_lossy(node.as_bytes().unwrap_or(b""))
                );
            }
            TokenKind::Number(n) => {
                let _ = writeln!(out, "number {n}");
            }
            other => {
                let _ = writeln!(out, "{other}");
            }
        }
        dump_chain(out, node.first_child(), depth + 1);
        cursor = node.next_sibling();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_object_member_lookup() {
        let doc = Document::parse(br#"{"name": "jot", "major": 2, "beta": false}"#).unwrap();
        let root = doc.root();
        assert!(root.is_object());

        assert_eq!(root.get("name").unwrap().as_str(), Some("jot"));
        assert_eq!(root.get("major").unwrap().as_number(), Some(2.0));
        assert_eq!(root.get("beta").unwrap().as_bool(), Some(false));
        assert!(root.get("absent").is_none());
    }

    #[test]
    fn accessors_return_none_on_type_mismatch() {
        let doc = Document::parse(br#"{"n": 1, "s": "x", "b": true, "z": null}"#).unwrap();
        let root = doc.root();

        assert_eq!(root.get("s").unwrap().as_number(), None);
        assert_eq!(root.get("n").unwrap().as_bool(), None);
        assert_eq!(root.get("b").unwrap().as_str(), None);
        assert!(root.get("z").unwrap().is_null());
        assert_eq!(root.get("z").unwrap().as_number(), None);
    }

    #[test]
    fn sibling_chain_is_finite_and_ordered() {
        let doc = Document::parse(br#"["a", "b", "c"]"#).unwrap();
        let root = doc.root();
        assert!(root.is_array());

        let a = root.first_child().unwrap();
        let b = a.next_sibling().unwrap();
        let c = b.next_sibling().unwrap();
        assert_eq!(a.as_str(), Some("a"));
        assert_eq!(b.as_str(), Some("b"));
        assert_eq!(c.as_str(), Some("c"));
        assert!(c.next_sibling().is_none());
    }

    #[test]
    fn members_iterates_keys_in_source_order() {
        let doc = Document::parse(br#"{"x": 1, "y": 2}"#).unwrap();
        let keys: Vec<&[u8]> = doc.root().members().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![b"x".as_slice(), b"y".as_slice()]);
    }

    #[test]
    fn first_match_wins_for_duplicate_keys() {
        let doc = Document::parse(br#"{"k": 1, "k": 2}"#).unwrap();
        assert_eq!(doc.root().get("k").unwrap().as_number(), Some(1.0));
    }

    #[test]
    fn member_value_hangs_off_first_child() {
        let doc = Document::parse(br#"{"inner": {"leaf": 7}}"#).unwrap();
        let member = doc.root().first_child().unwrap();
        assert!(matches!(member.kind(), TokenKind::Str(_)));

        let inner = member.first_child().unwrap();
        assert!(inner.is_object());
        assert_eq!(inner.get("leaf").unwrap().as_number(), Some(7.0));
    }

    #[test]
    fn empty_containers() {
        let doc = Document::parse(b"{}").unwrap();
        assert!(doc.root().first_child().is_none());
        assert_eq!(doc.root().children().count(), 0);

        let doc = Document::parse(b"[]").unwrap();
        assert!(doc.root().is_array());
        assert!(doc.root().first_child().is_none());
    }

    #[test]
    fn non_utf8_payload_is_reachable_as_bytes() {
        let doc = Document::parse(b"{\"k\": \"\xff\xfe\"}").unwrap();
        let value = doc.root().get("k").unwrap();
        assert_eq!(value.as_str(), None);
        assert_eq!(value.as_bytes(), Some(b"\xff\xfe".as_slice()));
    }

    #[test]
    fn dump_renders_indented_tree() {
        let doc = Document::parse(br#"{"a": [1, true]}"#).unwrap();
        let dump = doc.dump();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(
            lines,
            vec![
                "'{'",
                "  string \"a\"",
                "    '['",
                "      number 1",
                "      true",
            ]
        );
    }
}
