// tests/common/mod.rs
#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const EXAMPLE_GRAPH: &str = "5\n0 1 10\n1 2 5\n0 2 20\n2 3 1\n";
pub const EXAMPLE_MAPPINGS: &str = "5\n0 A\n1 B\n2 C\n3 D\n4 E\n";

/// Temp dir holding `graph.txt` and `mappings.txt`.
pub fn campus_dir(graph: &str, mappings: &str) -> TempDir {
    let d = tempfile::tempdir().unwrap();
    write(d.path(), "graph.txt", graph);
    write(d.path(), "mappings.txt", mappings);
    d
}

pub fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

/// Deterministic pseudo-random campus: a random spanning tree over the first
/// `vertices - isolated` vertices plus `extra_edges` random edges. The last
/// `isolated` vertices have no edges.
pub fn random_graph_text(vertices: usize, extra_edges: usize, isolated: usize, seed: u64) -> String {
    let mut state = seed;
    let mut next = move |bound: u64| {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (state >> 33) % bound
    };

    let connected = vertices - isolated;
    let mut out = format!("{vertices}\n");
    for v in 1..connected {
        let parent = next(v as u64);
        out.push_str(&format!("{parent} {v} {}\n", 1 + next(300)));
    }
    for _ in 0..extra_edges {
        let a = next(connected as u64);
        let b = next(connected as u64);
        out.push_str(&format!("{a} {b} {}\n", next(400)));
    }
    out
}
