// src/graph/loader.rs
//! Reads the campus edge list.
//!
//! ```text
//! 4          <- vertex count
//! 0 1 10     <- vertex1 vertex2 distance (feet)
//! 1 2 5
//! ```

use std::fs;
use std::path::Path;

use super::{Graph, MAX_VERTICES};
use crate::error::{CampusError, Result};
use crate::records::{self, Record};
use crate::types::{Distance, Edge, VertexId};

/// Loads a graph file from disk.
///
/// # Errors
/// Returns `Io` if the file cannot be read, or `Parse` if it is malformed.
pub fn load_graph(path: &Path) -> Result<Graph> {
    let source = fs::read_to_string(path).map_err(|source| CampusError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse_graph(&source, &path.display().to_string())
}

/// Parses graph text. `origin` names the source in error messages.
///
/// # Errors
/// Returns `Parse` if the count header is missing or above [`MAX_VERTICES`],
/// a line does not hold exactly three non-negative integers, or an endpoint
/// is out of range.
pub fn parse_graph(source: &str, origin: &str) -> Result<Graph> {
    let (header, lines) = records::split_header(source, origin, "vertex")?;
    let vertex_count = header.count;
    if vertex_count > MAX_VERTICES {
        return Err(CampusError::parse(
            origin,
            header.line,
            format!("vertex count {vertex_count} exceeds the limit of {MAX_VERTICES}"),
        ));
    }

    let edges = lines
        .iter()
        .map(|record| parse_edge(record, origin, vertex_count))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(origin, vertex_count, edges = edges.len(), "graph parsed");
    Graph::new(vertex_count, edges)
}

fn parse_edge(record: &Record<'_>, origin: &str, vertex_count: usize) -> Result<Edge> {
    let [a, b, d] = record.fields::<3>(origin)?;
    let from = parse_endpoint(a, record.line, origin, vertex_count)?;
    let to = parse_endpoint(b, record.line, origin, vertex_count)?;
    let distance: Distance = records::number(d, "distance", origin, record.line)?;
    Ok(Edge::new(from, to, distance))
}

fn parse_endpoint(token: &str, line: usize, origin: &str, vertex_count: usize) -> Result<VertexId> {
    let vertex: VertexId = records::number(token, "vertex", origin, line)?;
    if vertex >= vertex_count {
        return Err(CampusError::parse(
            origin,
            line,
            format!("vertex {vertex} out of range (vertex count is {vertex_count})"),
        ));
    }
    Ok(vertex)
}
