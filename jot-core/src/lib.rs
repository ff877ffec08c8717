//! JOT Core Parser
//!
//! Arena-backed JSON object trees: a tokenizer, a recursive-descent grammar
//! parser and a navigation API over the resulting document tree. One parse
//! is a single synchronous call from buffer-in to tree-out; every node
//! record and string payload lives in a per-session arena that is released
//! as a whole when the document is dropped.
//!
//! # Architecture
//!
//! - **arena.rs** - budgeted per-parse arena, NodeId/StrRef handles
//! - **token.rs** - lexical tokens and line tracking
//! - **lexer.rs** - byte-cursor tokenizer
//! - **parser.rs** - single-lookahead recursive descent, tree construction
//! - **tree.rs** - Document, node handles, query accessors
//! - **error.rs** - error codes and the ParseError type
//!
//! # Example
//!
//! ```
//! use jot_core::Document;
//!
//! let doc = Document::parse(br#"{"stuff": [1, 2, 3]}"#).unwrap();
//! let stuff = doc.root().get("stuff").unwrap();
//! let first = stuff.first_child().unwrap();
//!
//! assert_eq!(first.as_number(), Some(1.0));
//! assert_eq!(first.next_sibling().unwrap().as_number(), Some(2.0));
//! ```

pub mod arena;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod tree;

pub use arena::{Arena, NodeId, StrRef};
pub use error::{ParseError, ParseErrorCode};
pub use lexer::Lexer;
pub use parser::Parser;
pub use token::{Token, TokenKind};
pub use tree::{Children, Document, Node, DEFAULT_ARENA_CAPACITY};
