// tests/integration_route.rs
mod common;

use campusroute_core::config::Config;
use campusroute_core::graph::AdjacencyLayout;
use campusroute_core::reporting;
use campusroute_core::types::RouteOutcome;
use campusroute_core::{Campus, CampusError};
use common::{campus_dir, write, EXAMPLE_GRAPH, EXAMPLE_MAPPINGS};
use std::path::Path;

fn load(dir: &Path) -> Campus {
    let config = Config::load_from(dir).unwrap();
    Campus::load(&config).unwrap()
}

#[test]
fn test_cheapest_route_beats_fewest_hops() {
    let d = campus_dir(EXAMPLE_GRAPH, EXAMPLE_MAPPINGS);
    let campus = load(d.path());

    let outcome = campus.route("A", "D").unwrap();
    let route = outcome.route().expect("A reaches D");
    assert_eq!(route.describe(" -> "), "A -> B -> C -> D");
    assert_eq!(route.distance, 16);
    assert_eq!(route.legs().count(), 3);
}

#[test]
fn test_disconnected_building_reports_no_path() {
    let d = campus_dir(EXAMPLE_GRAPH, EXAMPLE_MAPPINGS);
    let campus = load(d.path());

    let outcome = campus.route("A", "E").unwrap();
    assert_eq!(outcome, RouteOutcome::NoPath { from: "A".into(), to: "E".into() });
    assert!(outcome.route().is_none());
}

#[test]
fn test_same_start_and_end() {
    let d = campus_dir(EXAMPLE_GRAPH, EXAMPLE_MAPPINGS);
    let campus = load(d.path());

    let route = campus.route("A", "A").unwrap().route().cloned().unwrap();
    assert_eq!(route.describe(" -> "), "A");
    assert_eq!(route.distance, 0);
}

#[test]
fn test_reverse_query_has_same_distance() {
    let d = campus_dir(EXAMPLE_GRAPH, EXAMPLE_MAPPINGS);
    let campus = load(d.path());

    let there = campus.route("A", "D").unwrap();
    let back = campus.route("D", "A").unwrap();
    assert_eq!(there.route().unwrap().distance, back.route().unwrap().distance);
    assert_eq!(back.route().unwrap().describe(","), "D,C,B,A");
}

#[test]
fn test_unlabeled_junctions_render_as_numbers() {
    let d = campus_dir("4\n0 2 7\n2 3 7\n0 3 20\n1 3 1\n", "2\n0 LIB\n1 GYM\n");
    let campus = load(d.path());

    let route = campus.route("LIB", "GYM").unwrap().route().cloned().unwrap();
    assert_eq!(route.describe(" -> "), "LIB -> 2 -> 3 -> GYM");
    assert_eq!(route.distance, 15);
}

#[test]
fn test_unknown_building_is_an_error() {
    let d = campus_dir(EXAMPLE_GRAPH, EXAMPLE_MAPPINGS);
    let campus = load(d.path());
    assert!(matches!(campus.route("A", "Q"), Err(CampusError::UnknownBuilding(_))));
}

#[test]
fn test_json_outcome_shape() {
    let d = campus_dir(EXAMPLE_GRAPH, EXAMPLE_MAPPINGS);
    let campus = load(d.path());

    let json = reporting::outcome_json(&campus.route("A", "D").unwrap()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["status"], "found");
    assert_eq!(value["distance"], 16);
    assert_eq!(value["stops"][3]["label"], "D");

    let json = reporting::outcome_json(&campus.route("B", "E").unwrap()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["status"], "no_path");
    assert_eq!(value["to"], "E");
}

#[test]
fn test_malformed_graph_aborts_load() {
    let d = campus_dir("4\n0 1 10\n1 2\n", EXAMPLE_MAPPINGS);
    let config = Config::load_from(d.path()).unwrap();
    let err = Campus::load(&config).unwrap_err();
    assert!(matches!(err, CampusError::Parse { line: 3, .. }), "{err}");
}

#[test]
fn test_missing_mapping_file_is_io_error() {
    let d = tempfile::tempdir().unwrap();
    write(d.path(), "graph.txt", EXAMPLE_GRAPH);
    let config = Config::load_from(d.path()).unwrap();
    let err = Campus::load(&config).unwrap_err();
    assert!(matches!(err, CampusError::Io { .. }));
    assert!(!err.is_invalid_input());
}

#[test]
fn test_duplicate_codes_follow_configured_policy() {
    let mappings = "3\n0 A\n1 B\n3 A\n";
    let d = campus_dir(EXAMPLE_GRAPH, mappings);
    let config = Config::load_from(d.path()).unwrap();
    assert!(matches!(Campus::load(&config), Err(CampusError::DuplicateCode { .. })));

    write(d.path(), "campusroute.toml", "[engine]\nduplicate_codes = \"last-wins\"\n");
    let campus = load(d.path());
    assert_eq!(campus.resolve("A").unwrap(), 3);
    assert_eq!(campus.route("B", "A").unwrap().route().unwrap().distance, 6);
}

#[test]
fn test_list_layout_from_config() {
    let d = campus_dir(EXAMPLE_GRAPH, EXAMPLE_MAPPINGS);
    write(d.path(), "campusroute.toml", "[engine]\nadjacency = \"list\"\n");
    let campus = load(d.path());
    assert_eq!(campus.adjacency().layout(), AdjacencyLayout::List);
    assert_eq!(campus.route("A", "D").unwrap().route().unwrap().distance, 16);
}
