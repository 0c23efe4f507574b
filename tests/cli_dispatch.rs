// tests/cli_dispatch.rs - Command parsing and exit code tests
mod common;

use campusroute_core::cli::dispatch::{execute, exit_for_error};
use campusroute_core::cli::{Cli, Commands, GlobalArgs};
use campusroute_core::exit::RouteExit;
use clap::Parser;
use common::{campus_dir, EXAMPLE_GRAPH, EXAMPLE_MAPPINGS};
use std::fs;
use std::path::Path;

fn globals(dir: &Path) -> GlobalArgs {
    GlobalArgs {
        config: None,
        graph: Some(dir.join("graph.txt")),
        mappings: Some(dir.join("mappings.txt")),
        verbose: false,
    }
}

fn route(start: &str, end: &str) -> Commands {
    Commands::Route { start: start.into(), end: end.into(), json: false }
}

#[test]
fn test_parse_route_with_global_flags() {
    let cli = Cli::try_parse_from([
        "campusroute", "route", "CUR", "SNL", "--json", "--graph", "g.txt", "-v",
    ])
    .unwrap();
    assert!(cli.global.verbose);
    assert_eq!(cli.global.graph.as_deref(), Some(Path::new("g.txt")));
    assert!(matches!(
        cli.command,
        Some(Commands::Route { ref start, ref end, json: true }) if start == "CUR" && end == "SNL"
    ));
}

#[test]
fn test_route_requires_two_codes() {
    assert!(Cli::try_parse_from(["campusroute", "route", "CUR"]).is_err());
}

#[test]
fn test_exit_0_when_path_found() {
    let d = campus_dir(EXAMPLE_GRAPH, EXAMPLE_MAPPINGS);
    let exit = execute(route("A", "D"), &globals(d.path())).unwrap();
    assert_eq!(exit, RouteExit::Success);
}

#[test]
fn test_exit_3_when_no_path() {
    let d = campus_dir(EXAMPLE_GRAPH, EXAMPLE_MAPPINGS);
    let exit = execute(route("A", "E"), &globals(d.path())).unwrap();
    assert_eq!(exit, RouteExit::NoPath);
}

#[test]
fn test_exit_2_for_unknown_building() {
    let d = campus_dir(EXAMPLE_GRAPH, EXAMPLE_MAPPINGS);
    let err = execute(route("A", "NOPE"), &globals(d.path())).unwrap_err();
    assert_eq!(exit_for_error(&err), RouteExit::InvalidInput);
}

#[test]
fn test_exit_2_for_malformed_data() {
    let d = campus_dir("five\n", EXAMPLE_MAPPINGS);
    let err = execute(Commands::Buildings { json: true }, &globals(d.path())).unwrap_err();
    assert_eq!(exit_for_error(&err), RouteExit::InvalidInput);
}

#[test]
fn test_exit_1_for_missing_data() {
    let d = tempfile::tempdir().unwrap();
    let err = execute(route("A", "D"), &globals(d.path())).unwrap_err();
    assert_eq!(exit_for_error(&err), RouteExit::Error);
}

#[test]
fn test_render_writes_dot_file() {
    let d = campus_dir(EXAMPLE_GRAPH, EXAMPLE_MAPPINGS);
    let out = d.path().join("campus.dot");
    let cmd = Commands::Render { start: "A".into(), end: "D".into(), output: Some(out.clone()) };
    assert_eq!(execute(cmd, &globals(d.path())).unwrap(), RouteExit::Success);

    let dot = fs::read_to_string(out).unwrap();
    assert!(dot.contains("1 -- 2 [label=\"5\""));
    assert_eq!(dot.matches("penwidth=2").count(), 3 + 4);
}

#[test]
fn test_exit_2_for_oversized_vertex_count() {
    let d = campus_dir("4294967296\n0 1 2\n", "1\n0 A\n");
    let err = execute(Commands::Buildings { json: false }, &globals(d.path())).unwrap_err();
    assert_eq!(exit_for_error(&err), RouteExit::InvalidInput);
    assert!(format!("{err:#}").contains("graph.txt:1: vertex count 4294967296 exceeds"));
}

#[test]
fn test_large_campus_needs_list_layout() {
    let d = campus_dir("5000\n0 1 2\n1 4999 3\n", "2\n0 A\n4999 B\n");
    let err = execute(route("A", "B"), &globals(d.path())).unwrap_err();
    assert_eq!(exit_for_error(&err), RouteExit::InvalidInput);
    assert!(format!("{err:#}").contains("matrix layout"));

    common::write(d.path(), "campusroute.toml", "[engine]\nadjacency = \"list\"\n");
    let list = GlobalArgs {
        config: Some(d.path().join("campusroute.toml")),
        ..GlobalArgs::default()
    };
    assert_eq!(execute(route("A", "B"), &list).unwrap(), RouteExit::Success);
}
