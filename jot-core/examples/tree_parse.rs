//! Example: parse a document and navigate the tree.
//!
//! Run with: cargo run --example tree_parse

use jot_core::Document;

fn main() {
    let input = br#"
        {
            "name": "inventory",
            "revision": 4,
            "stuff": [1, 2, 3],
            "owner": {"team": "tools", "oncall": true}
        }
    "#;

    let doc = Document::parse(input).expect("parse failed");
    let root = doc.root();

    println!("=== Members ===\n");
    for (key, value) in root.members() {
        println!("{}: {:?}", String::from_utf8_lossy(key), value);
    }

    println!("\n=== Walking \"stuff\" ===\n");
    let stuff = root.get("stuff").expect("missing \"stuff\"");
    let mut element = stuff.first_child();
    while let Some(node) = element {
        println!("element at line {}: {:?}", node.line(), node.as_number());
        element = node.next_sibling();
    }

    println!("\n=== Typed access ===\n");
    let owner = root.get("owner").unwrap();
    println!("team   = {:?}", owner.get("team").unwrap().as_str());
    println!("oncall = {:?}", owner.get("oncall").unwrap().as_bool());
    println!("arena  = {} bytes", doc.arena_used());
}
