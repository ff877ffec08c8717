//! Example: load a file and parse it.
//!
//! File reading stays on the caller side; the core only ever sees the
//! in-memory buffer.
//!
//! Run with: cargo run --example file_parse -- path/to/input.json [capacity]

use jot_core::{Document, DEFAULT_ARENA_CAPACITY};

fn main() {
    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: file_parse <path> [arena-capacity-bytes]");
        std::process::exit(2);
    };
    let capacity = args
        .next()
        .map(|s| s.parse().expect("capacity must be a byte count"))
        .unwrap_or(DEFAULT_ARENA_CAPACITY);

    let buffer = std::fs::read(&path).unwrap_or_else(|e| {
        eprintln!("cannot read {path}: {e}");
        std::process::exit(1);
    });

    match Document::parse_with_capacity(&buffer, capacity) {
        Ok(doc) => {
            let root = doc.root();
            let kind = if root.is_object() { "object" } else { "array" };
            println!(
                "parsed {}: {} root, {} top-level entries, {} arena bytes",
                path,
                kind,
                root.children().count(),
                doc.arena_used()
            );
        }
        Err(e) => {
            eprintln!("{path}: {e}");
            std::process::exit(1);
        }
    }
}
