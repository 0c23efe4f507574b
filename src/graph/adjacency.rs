// src/graph/adjacency.rs
//! Lookup structures derived from the edge list.
//!
//! A dense cost matrix suits a campus-sized graph; the adjacency list is there
//! for larger inputs. Both answer the same queries, so the engine does not
//! care which one it is handed.

use serde::{Deserialize, Serialize};
use std::iter::Enumerate;
use std::slice;

use super::Graph;
use crate::error::{CampusError, Result};
use crate::types::{Distance, VertexId, UNREACHABLE};

/// Largest graph the dense layout will allocate for (128 MiB of costs).
pub const MATRIX_VERTEX_LIMIT: usize = 4096;

/// Storage layout for [`Adjacency`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdjacencyLayout {
    #[default]
    Matrix,
    List,
}

/// Symmetric, read-only neighbor and cost lookup.
#[derive(Debug, Clone)]
pub enum Adjacency {
    /// Row-major `V x V` costs, `UNREACHABLE` where no edge exists.
    Matrix { size: usize, costs: Vec<Distance> },
    /// Per-vertex `(neighbor, cost)` pairs, sorted by neighbor.
    List(Vec<Vec<(VertexId, Distance)>>),
}

impl Adjacency {
    /// Derives the lookup structure from `graph`.
    ///
    /// Each edge is stored in both directions. Parallel edges keep the
    /// shortest distance; self-loops are dropped.
    ///
    /// # Errors
    /// Returns `MatrixTooLarge` if the matrix layout is asked for more than
    /// [`MATRIX_VERTEX_LIMIT`] vertices.
    pub fn build(graph: &Graph, layout: AdjacencyLayout) -> Result<Self> {
        let size = graph.vertex_count();
        let edges = graph.edges().iter().filter(|edge| {
            if edge.is_self_loop() {
                tracing::warn!(vertex = edge.from, "ignoring self-loop");
            }
            !edge.is_self_loop()
        });

        match layout {
            AdjacencyLayout::Matrix => {
                let cells = size
                    .checked_mul(size)
                    .filter(|_| size <= MATRIX_VERTEX_LIMIT)
                    .ok_or(CampusError::MatrixTooLarge {
                        vertex_count: size,
                        limit: MATRIX_VERTEX_LIMIT,
                    })?;
                let mut costs = vec![UNREACHABLE; cells];
                for edge in edges {
                    for (u, v) in [(edge.from, edge.to), (edge.to, edge.from)] {
                        let cell = &mut costs[u * size + v];
                        *cell = (*cell).min(edge.distance);
                    }
                }
                Ok(Self::Matrix { size, costs })
            }
            AdjacencyLayout::List => {
                let mut lists: Vec<Vec<(VertexId, Distance)>> = vec![Vec::new(); size];
                for edge in edges {
                    lists[edge.from].push((edge.to, edge.distance));
                    lists[edge.to].push((edge.from, edge.distance));
                }
                for row in &mut lists {
                    row.sort_unstable();
                    row.dedup_by_key(|&mut (n, _)| n);
                }
                Ok(Self::List(lists))
            }
        }
    }

    #[must_use]
    pub fn layout(&self) -> AdjacencyLayout {
        match self {
            Self::Matrix { .. } => AdjacencyLayout::Matrix,
            Self::List(_) => AdjacencyLayout::List,
        }
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        match self {
            Self::Matrix { size, .. } => *size,
            Self::List(lists) => lists.len(),
        }
    }

    /// Edge cost between `u` and `v`, `UNREACHABLE` if they are not adjacent
    /// or either vertex is out of range.
    #[must_use]
    pub fn cost(&self, u: VertexId, v: VertexId) -> Distance {
        match self {
            Self::Matrix { size, costs } if u < *size && v < *size => costs[u * size + v],
            Self::Matrix { .. } => UNREACHABLE,
            Self::List(lists) => lists
                .get(u)
                .and_then(|row| row.binary_search_by_key(&v, |&(n, _)| n).ok().map(|i| row[i].1))
                .unwrap_or(UNREACHABLE),
        }
    }

    /// Neighbors of `vertex` with their edge costs. Empty for out-of-range
    /// or isolated vertices.
    #[must_use]
    pub fn neighbors(&self, vertex: VertexId) -> Neighbors<'_> {
        match self {
            Self::Matrix { size, costs } => {
                let row: &[Distance] = if vertex < *size {
                    &costs[vertex * size..(vertex + 1) * size]
                } else {
                    &[]
                };
                Neighbors::Row(row.iter().enumerate())
            }
            Self::List(lists) => {
                Neighbors::List(lists.get(vertex).map_or(&[][..], Vec::as_slice).iter())
            }
        }
    }

    /// Number of undirected edges stored (after merging parallels).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let directed: usize = (0..self.vertex_count()).map(|v| self.neighbors(v).count()).sum();
        directed / 2
    }
}

/// Iterator over `(neighbor, cost)` pairs of one vertex.
pub enum Neighbors<'a> {
    Row(Enumerate<slice::Iter<'a, Distance>>),
    List(slice::Iter<'a, (VertexId, Distance)>),
}

impl Iterator for Neighbors<'_> {
    type Item = (VertexId, Distance);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Row(row) => row.find(|&(_, &c)| c != UNREACHABLE).map(|(v, &c)| (v, c)),
            Self::List(list) => list.next().copied(),
        }
    }
}
