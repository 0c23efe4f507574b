// src/render/mod.rs
//! Graphviz rendering of the campus with a route highlighted.
//!
//! Pipe the output through `dot -Tpng` (or `neato`, which lays out by edge
//! length and suits walking maps) to get an image.

use std::collections::HashSet;
use std::fmt::Write;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::campus::Campus;
use crate::types::{Route, VertexId};

const PATH_COLOR: &str = "red";
const EDGE_COLOR: &str = "gray";
const NODE_COLOR: &str = "skyblue";

/// Renders the whole campus as an undirected DOT graph. Legs of `route`, if
/// given, are drawn red and thicker.
///
/// # Errors
/// Returns error if writing to the string buffer fails.
pub fn to_dot(campus: &Campus, route: Option<&Route>) -> Result<String> {
    let highlighted: HashSet<(VertexId, VertexId)> = route
        .map(|r| r.legs().map(|(a, b)| (a.min(b), a.max(b))).collect())
        .unwrap_or_default();
    let on_route: HashSet<VertexId> = route
        .map(|r| r.stops.iter().map(|s| s.vertex).collect())
        .unwrap_or_default();

    let mut out = String::new();
    writeln!(out, "graph campus {{")?;
    writeln!(out, "  node [fontsize=8, fontname=\"Helvetica-Bold\"];")?;
    writeln!(out, "  edge [fontsize=10, color={EDGE_COLOR}];")?;
    write_nodes(&mut out, campus, &on_route)?;
    write_edges(&mut out, campus, &highlighted)?;
    writeln!(out, "}}")?;
    Ok(out)
}

fn write_nodes(out: &mut String, campus: &Campus, on_route: &HashSet<VertexId>) -> Result<()> {
    for vertex in 0..campus.graph().vertex_count() {
        let outline = if on_route.contains(&vertex) {
            format!(", color={PATH_COLOR}, penwidth=2")
        } else {
            String::new()
        };
        match campus.buildings().code(vertex) {
            Some(code) => writeln!(
                out,
                "  {vertex} [label=\"{}\", shape=circle, style=filled, fillcolor={NODE_COLOR}{outline}];",
                escape(code)
            )?,
            None => writeln!(out, "  {vertex} [label=\"\", shape=point, width=0.08{outline}];")?,
        }
    }
    Ok(())
}

fn write_edges(
    out: &mut String,
    campus: &Campus,
    highlighted: &HashSet<(VertexId, VertexId)>,
) -> Result<()> {
    let adjacency = campus.adjacency();
    for u in 0..adjacency.vertex_count() {
        for (v, cost) in adjacency.neighbors(u).filter(|&(v, _)| u < v) {
            let style = if highlighted.contains(&(u, v)) {
                format!(", color={PATH_COLOR}, penwidth=2")
            } else {
                String::new()
            };
            writeln!(out, "  {u} -- {v} [label=\"{cost}\", len={}{style}];", edge_len(cost))?;
        }
    }
    Ok(())
}

/// `neato` edge length hint, compressed so long walks do not dominate.
#[allow(clippy::cast_precision_loss)]
fn edge_len(cost: u64) -> String {
    format!("{:.2}", 1.0 + (cost as f64).ln_1p() / 4.0)
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Renders to `path`, or to stdout when `path` is `None`.
///
/// # Errors
/// Returns error if rendering or the file write fails.
pub fn write_dot(campus: &Campus, route: Option<&Route>, path: Option<&Path>) -> Result<()> {
    let dot = to_dot(campus, route)?;
    match path {
        Some(p) => fs::write(p, dot).with_context(|| format!("Failed to write {}", p.display())),
        None => {
            print!("{dot}");
            Ok(())
        }
    }
}
