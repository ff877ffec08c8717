//! Example: print the indented tree rendering, for debugging.
//!
//! Reads a document from stdin, or dumps a built-in sample when stdin is
//! empty.
//!
//! Run with: cargo run --example dump_ast < input.json

use std::io::Read;

use jot_core::Document;

fn main() {
    let mut input = Vec::new();
    std::io::stdin().read_to_end(&mut input).unwrap();
    if input.is_empty() {
        input = br#"{"stuff": [1, 2.5, "three", true, null]}"#.to_vec();
    }

    match Document::parse(&input) {
        Ok(doc) => print!("{}", doc.dump()),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
