//! Node documents as authors write them

use keg::fs::read_node;
use keg::parser::{parse_include_ids, parse_title};

use super::helpers::{create_keg, write_node};

const DOCUMENT: &str = "\
# Rust ownership

Every value has one owner.

Related:

* [Borrowing](../12)
* [Lifetimes](../13) (advanced)
* [External](https://doc.rust-lang.org/book/)
* [Moves](14)

That is all.
";

#[test]
fn test_title_and_includes_of_full_document() {
    assert_eq!(parse_title(DOCUMENT).as_deref(), Some("Rust ownership"));
    assert_eq!(parse_include_ids(DOCUMENT), ["12", "13", "14"]);
}

#[test]
fn test_crlf_document() {
    let doc = DOCUMENT.replace('\n', "\r\n");
    assert_eq!(parse_title(&doc).as_deref(), Some("Rust ownership"));
    assert_eq!(parse_include_ids(&doc), ["12", "13", "14"]);
}

#[test]
fn test_read_node_uses_directory_name() {
    let keg = create_keg();
    let dir = write_node(keg.path(), "11", DOCUMENT);

    let node = read_node(&dir).unwrap();
    assert_eq!(node.id, "11");
    assert_eq!(node.title, "Rust ownership");
    assert_eq!(node.include_ids(), ["12", "13", "14"]);
}

#[test]
fn test_overlong_title_is_not_a_title() {
    let doc = format!("# {}\n\nBody\n", "word ".repeat(20));
    assert_eq!(parse_title(&doc), None);
}

#[test]
fn test_large_document_parses() {
    let mut doc = String::from("# Big\n\n");
    for i in 0..500 {
        doc.push_str(&format!("Paragraph {i} with some text.\n\n* [Item](../{i})\n"));
    }

    let ids = parse_include_ids(&doc);
    assert_eq!(ids.len(), 500);
    assert_eq!(ids[499], "499");
}
