//! Scan a keg, store its index, read it back, and query it

use keg::index::{read_index, scan_index, write_index};
use keg::validation::validate_index;
use keg::KegError;

use super::helpers::{create_keg, create_sample_keg, write_node};

#[test]
fn test_scan_write_read_round_trip() {
    let keg = create_sample_keg();

    let mut scanned = scan_index(keg.path()).unwrap();
    scanned.sort_by_changes();
    write_index(keg.path(), &scanned).unwrap();

    let read = read_index(keg.path()).unwrap();
    assert_eq!(read.nodes, scanned.nodes);
    assert_eq!(read.file, Some(keg.path().join("kegdex")));
    assert!(validate_index(&read).is_empty());
}

#[test]
fn test_reverse_includes_of_scanned_keg() {
    let keg = create_sample_keg();
    let index = scan_index(keg.path()).unwrap();
    let includes = index.map_includes();

    let mut into_two: Vec<&str> = includes["2"].keys().copied().collect();
    into_two.sort();
    assert_eq!(into_two, ["1", "3"]);
    assert_eq!(includes["0"].len(), 1);
    assert!(includes["1"].is_empty());
}

#[test]
fn test_lookup_maps_of_scanned_keg() {
    let keg = create_sample_keg();
    let index = scan_index(keg.path()).unwrap();

    assert_eq!(index.map_ids()["3"].title, "Indexes");
    assert_eq!(index.map_titles()["Nodes"].id, "2");
}

#[test]
fn test_rescan_sees_new_node() {
    let keg = create_sample_keg();
    let before = scan_index(keg.path()).unwrap();
    assert!(!before.map_ids().contains_key("4"));

    write_node(keg.path(), "4", "# Later\n\n* [Nodes](2)\n");
    let after = scan_index(keg.path()).unwrap();
    assert_eq!(after.len(), before.len() + 1);
    assert!(after.map_includes()["2"].contains_key("4"));
}

#[test]
fn test_validation_flags_untitled_node() {
    let keg = create_sample_keg();
    write_node(keg.path(), "5", "no title line\n");

    let index = scan_index(keg.path()).unwrap();
    let errors = validate_index(&index);
    assert_eq!(errors, [keg::ValidationError::EmptyTitle]);
}

#[test]
fn test_read_index_of_unscanned_keg() {
    let keg = create_keg();
    assert!(matches!(
        read_index(keg.path()),
        Err(KegError::NotFound { .. })
    ));
}
