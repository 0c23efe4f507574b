// tests/unit_loaders.rs
mod common;

use campusroute_core::buildings::{load_buildings, DuplicatePolicy};
use campusroute_core::graph::load_graph;
use campusroute_core::types::Edge;
use campusroute_core::CampusError;
use common::{campus_dir, EXAMPLE_GRAPH, EXAMPLE_MAPPINGS};

#[test]
fn test_load_graph_from_disk() {
    let d = campus_dir(EXAMPLE_GRAPH, EXAMPLE_MAPPINGS);
    let g = load_graph(&d.path().join("graph.txt")).unwrap();
    assert_eq!(g.vertex_count(), 5);
    assert_eq!(g.edges()[0], Edge::new(0, 1, 10));
    assert_eq!(g.isolated(), vec![4]);
}

#[test]
fn test_load_buildings_from_disk() {
    let d = campus_dir(EXAMPLE_GRAPH, EXAMPLE_MAPPINGS);
    let b = load_buildings(&d.path().join("mappings.txt"), DuplicatePolicy::Reject).unwrap();
    assert_eq!(b.codes(), ["A", "B", "C", "D", "E"]);
    assert_eq!(b.vertex("E"), Some(4));
}

#[test]
fn test_windows_line_endings_and_trailing_blank_lines() {
    let d = campus_dir("3\r\n0 1 4\r\n1 2 4\r\n\r\n", "2\r\n0 X\r\n2 Y\r\n\r\n");
    let g = load_graph(&d.path().join("graph.txt")).unwrap();
    assert_eq!(g.edges().len(), 2);
    let b = load_buildings(&d.path().join("mappings.txt"), DuplicatePolicy::Reject).unwrap();
    assert_eq!(b.code(2), Some("Y"));
}

#[test]
fn test_parse_error_names_the_file() {
    let d = campus_dir("3\n0 1 x\n", EXAMPLE_MAPPINGS);
    let path = d.path().join("graph.txt");
    let err = load_graph(&path).unwrap_err();
    let CampusError::Parse { origin, line, .. } = &err else {
        panic!("expected parse error, got {err}");
    };
    assert_eq!(origin, &path.display().to_string());
    assert_eq!(*line, 2);
}

#[test]
fn test_missing_file_is_io_error() {
    let d = tempfile::tempdir().unwrap();
    let err = load_graph(&d.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, CampusError::Io { .. }));
}
