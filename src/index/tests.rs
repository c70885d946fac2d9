//! Tests for the index, its maps and its sources

use std::cell::RefCell;
use std::fs;

use tempfile::TempDir;

use super::*;
use crate::error::KegError;
use crate::net::HttpGet;

const SAMPLE: &str = "\
1\t2023-01-02 00:00:00Z\tFirst\t2,3
2\t2023-03-01 12:00:00Z\tSecond\t3
3\t2022-12-31 23:59:59Z\tThird
10\t2023-02-01 00:00:00Z\tTenth\t1
";

fn sample() -> Index {
    parse_index(SAMPLE)
}

fn ids(index: &Index) -> Vec<&str> {
    index.nodes.iter().map(|n| n.id.as_str()).collect()
}

#[test]
fn test_parse_index_keeps_line_order() {
    let index = sample();
    assert_eq!(ids(&index), ["1", "2", "3", "10"]);
    assert_eq!(index.nodes[0].include_ids(), ["2", "3"]);
    assert_eq!(index.nodes[2].includes, None);
    assert!(index.file.is_none());
    assert!(index.url.is_none());
}

#[test]
fn test_parse_index_is_total() {
    let index = parse_index("garbage\n\n1\tnot a time\tTitle\r\n");
    assert_eq!(index.len(), 3);
    assert_eq!(index.nodes[0].id, "garbage");
    assert_eq!(index.nodes[1], Node::default());
    assert_eq!(index.nodes[2].title, "Title");
    assert!(parse_index("").is_empty());
}

#[test]
fn test_sort_by_id_is_lexicographic() {
    let mut index = sample();
    index.nodes.reverse();
    index.sort_by_id();
    assert_eq!(ids(&index), ["1", "10", "2", "3"]);
}

#[test]
fn test_sort_by_changes_newest_first() {
    let mut index = sample();
    index.sort_by_changes();
    assert_eq!(ids(&index), ["2", "10", "1", "3"]);
}

#[test]
fn test_encode_appends_newline_per_node() {
    assert_eq!(sample().encode(), SAMPLE);
    assert_eq!(sample().to_string(), SAMPLE);
    assert_eq!(Index::new().encode(), "");
}

#[test]
fn test_add_appends_in_order() {
    let mut index = Index::new();
    index.add([Node::decode("5"), Node::decode("4")]);
    index.add(vec![Node::decode("6")]);
    assert_eq!(ids(&index), ["5", "4", "6"]);
}

#[test]
fn test_map_ids_and_titles() {
    let index = sample();

    let by_id = index.map_ids();
    assert_eq!(by_id.len(), 4);
    assert_eq!(by_id["10"].title, "Tenth");

    let by_title = index.map_titles();
    assert_eq!(by_title["Second"].id, "2");
    assert!(!by_title.contains_key("Nope"));
}

#[test]
fn test_maps_later_duplicate_wins() {
    let index = parse_index("1\t\tOld\n1\t\tNew\n");
    assert_eq!(index.map_ids()["1"].title, "New");
}

#[test]
fn test_map_includes_reverse_edges() {
    let index = sample();
    let includes = index.map_includes();

    let mut into_three: Vec<&str> = includes["3"].keys().copied().collect();
    into_three.sort();
    assert_eq!(into_three, ["1", "2"]);

    assert_eq!(includes["1"].len(), 1);
    assert_eq!(includes["1"]["10"].title, "Tenth");

    // nothing includes 10 but it still has an entry
    assert!(includes["10"].is_empty());
}

#[test]
fn test_map_includes_keeps_edges_to_earlier_nodes() {
    // node 2 is listed after node 1, which already includes it
    let index = parse_index("1\t\tA\t2\n2\t\tB\n");
    let includes = index.map_includes();
    assert_eq!(includes["2"].len(), 1);
    assert!(includes["2"].contains_key("1"));
}

#[test]
fn test_map_includes_dangling_target() {
    let index = parse_index("1\t\tA\t99\n");
    let includes = index.map_includes();
    assert_eq!(includes.len(), 2);
    assert!(includes["99"].contains_key("1"));
}

#[test]
fn test_maps_rebuilt_after_change() {
    let mut index = sample();
    assert!(!index.map_ids().contains_key("42"));

    index.add([Node::decode("42\t\tLate")]);
    assert_eq!(index.map_ids()["42"].title, "Late");
}

#[test]
fn test_index_url() {
    assert_eq!(index_url("http://keg.test"), "http://keg.test/kegdex");
    assert_eq!(index_url("http://keg.test/"), "http://keg.test/kegdex");
    assert_eq!(index_url("http://keg.test/kegdex"), "http://keg.test/kegdex");
    assert_eq!(index_url("http://keg.test/kegdex/"), "http://keg.test/kegdex");
}

struct StaticGet {
    body: &'static str,
    requested: RefCell<Vec<String>>,
}

impl HttpGet for StaticGet {
    fn get(&self, url: &str) -> Result<Vec<u8>, KegError> {
        self.requested.borrow_mut().push(url.to_string());
        Ok(self.body.as_bytes().to_vec())
    }
}

struct RejectingGet;

impl HttpGet for RejectingGet {
    fn get(&self, url: &str) -> Result<Vec<u8>, KegError> {
        Err(KegError::FetchFailed {
            url: url.to_string(),
            status: "400 Bad Request".into(),
        })
    }
}

#[test]
fn test_fetch_index_with_decodes_body() {
    let client = StaticGet {
        body: SAMPLE,
        requested: RefCell::new(Vec::new()),
    };

    let index = fetch_index_with(&client, "http://keg.test/").unwrap();
    assert_eq!(index.len(), 4);
    assert_eq!(index.url.as_deref(), Some("http://keg.test/kegdex"));
    assert_eq!(*client.requested.borrow(), ["http://keg.test/kegdex"]);
}

#[test]
fn test_fetch_index_with_passes_status_error() {
    let err = fetch_index_with(&RejectingGet, "http://keg.test").unwrap_err();
    assert_eq!(err.to_string(), "failed to fetch: 400 Bad Request");
}

#[test]
fn test_read_index_from_keg() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("kegdex"), SAMPLE).unwrap();

    let index = read_index(temp.path()).unwrap();
    assert_eq!(index.len(), 4);
    assert_eq!(index.file, Some(temp.path().join("kegdex")));
}

#[test]
fn test_read_index_with_invalid_utf8() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("kegdex"), b"1\t2023-01-01 00:00:00Z\tCaf\xe9\n").unwrap();

    let index = read_index(temp.path()).unwrap();
    assert_eq!(index.len(), 1);
    assert_eq!(index.nodes[0].title, "Caf\u{FFFD}");
}

#[test]
fn test_scan_index_keeps_node_with_invalid_utf8() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("1");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("README.md"), b"# Caf\xe9\n").unwrap();

    let index = scan_index(temp.path()).unwrap();
    assert_eq!(ids(&index), ["1"]);
    assert_eq!(index.nodes[0].title, "Caf\u{FFFD}");
}

#[test]
fn test_read_index_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = read_index(temp.path()).unwrap_err();
    assert!(matches!(err, KegError::NotFound { .. }));
}

#[test]
fn test_write_then_read_index() {
    let temp = TempDir::new().unwrap();
    let mut index = sample();
    index.sort_by_changes();

    let file = write_index(temp.path(), &index).unwrap();
    assert_eq!(fs::read_to_string(&file).unwrap(), index.encode());

    let back = read_index(temp.path()).unwrap();
    assert_eq!(back.nodes, index.nodes);
}

#[test]
fn test_scan_index_reads_node_dirs() {
    let temp = TempDir::new().unwrap();
    for (id, doc) in [
        ("0", "# Sorry, planned but not yet available\n"),
        ("2", "# Second\n\n* [Zero](../0)\n"),
        ("10", "# Tenth\n\nBody\n\n* [Second](../2)\n* [Zero](0)\n"),
    ] {
        let dir = temp.path().join(id);
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("README.md"), doc).unwrap();
    }
    // not node directories
    fs::create_dir(temp.path().join("docs")).unwrap();
    fs::write(temp.path().join("7"), "a file, not a directory").unwrap();
    // a node directory without a document is skipped
    fs::create_dir(temp.path().join("5")).unwrap();

    let index = scan_index(temp.path()).unwrap();
    assert_eq!(ids(&index), ["0", "2", "10"]);
    assert_eq!(index.nodes[0].title, "Sorry, planned but not yet available");
    assert_eq!(index.nodes[0].includes, None);
    assert_eq!(index.nodes[2].include_ids(), ["2", "0"]);
    assert!(crate::validation::validate_index(&index).is_empty());
}

#[test]
fn test_scan_index_missing_keg() {
    let temp = TempDir::new().unwrap();
    let err = scan_index(&temp.path().join("absent")).unwrap_err();
    assert!(matches!(err, KegError::NotFound { .. }));
}
