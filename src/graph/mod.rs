// src/graph/mod.rs
pub mod adjacency;
pub mod loader;

pub use adjacency::{Adjacency, AdjacencyLayout, Neighbors, MATRIX_VERTEX_LIMIT};
pub use loader::{load_graph, parse_graph};

use crate::error::{CampusError, Result};
use crate::types::{Edge, VertexId};

/// Largest vertex count a graph may declare.
pub const MAX_VERTICES: usize = 1 << 20;

/// The campus graph as read from disk: a vertex count and an undirected edge list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Builds a graph, checking that every edge endpoint is a valid vertex.
    ///
    /// # Errors
    /// Returns `TooManyVertices` above [`MAX_VERTICES`], or `InvalidVertex`
    /// for the first endpoint outside `[0, vertex_count)`.
    pub fn new(vertex_count: usize, edges: Vec<Edge>) -> Result<Self> {
        if vertex_count > MAX_VERTICES {
            return Err(CampusError::TooManyVertices {
                vertex_count,
                limit: MAX_VERTICES,
            });
        }
        for edge in &edges {
            for vertex in [edge.from, edge.to] {
                check_vertex(vertex, vertex_count)?;
            }
        }
        Ok(Self { vertex_count, edges })
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Vertices with no incident edge.
    #[must_use]
    pub fn isolated(&self) -> Vec<VertexId> {
        let mut touched = vec![false; self.vertex_count];
        for edge in &self.edges {
            touched[edge.from] = true;
            touched[edge.to] = true;
        }
        touched
            .iter()
            .enumerate()
            .filter_map(|(v, &t)| (!t).then_some(v))
            .collect()
    }
}

/// Fails with `InvalidVertex` unless `vertex < vertex_count`.
///
/// # Errors
/// Returns `InvalidVertex` when out of range.
pub fn check_vertex(vertex: VertexId, vertex_count: usize) -> Result<()> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(CampusError::InvalidVertex { vertex, vertex_count })
    }
}
