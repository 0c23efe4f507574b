// src/engine/dijkstra.rs
//! Dijkstra's algorithm with a lazily pruned binary heap.
//!
//! Improved distances push a fresh frontier entry instead of decreasing the
//! old one; superseded entries are skipped when popped. Edge costs must be
//! non-negative, which the loaders guarantee.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::path::reconstruct_path;
use crate::error::Result;
use crate::graph::{check_vertex, Adjacency};
use crate::types::{Distance, VertexId, UNREACHABLE};

/// Distances and predecessor links from one source to every vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: VertexId,
    distances: Vec<Distance>,
    predecessors: Vec<Option<VertexId>>,
}

impl ShortestPaths {
    #[must_use]
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// One entry per vertex; `UNREACHABLE` where no path exists.
    #[must_use]
    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    /// One entry per vertex; `None` for the source and unreached vertices.
    #[must_use]
    pub fn predecessors(&self) -> &[Option<VertexId>] {
        &self.predecessors
    }

    /// Finite distance to `target`, or `None` if unreachable or out of range.
    #[must_use]
    pub fn distance_to(&self, target: VertexId) -> Option<Distance> {
        self.distances.get(target).copied().filter(|&d| d != UNREACHABLE)
    }

    #[must_use]
    pub fn is_reachable(&self, target: VertexId) -> bool {
        self.distance_to(target).is_some()
    }

    /// Vertices from the source to `target`, both inclusive.
    ///
    /// Returns `None` when `target` was never reached, so a caller can never
    /// mistake a dangling predecessor chain for a route.
    #[must_use]
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        self.is_reachable(target)
            .then(|| reconstruct_path(&self.predecessors, target))
    }
}

/// Runs Dijkstra from `start` over `adjacency`.
///
/// Frontier ties are broken by the lower vertex id, so repeated runs give
/// identical predecessors.
///
/// # Errors
/// Returns `InvalidVertex` if `start` is not a vertex of the graph.
pub fn dijkstra(adjacency: &Adjacency, start: VertexId) -> Result<ShortestPaths> {
    let n = adjacency.vertex_count();
    check_vertex(start, n)?;

    let mut distances = vec![UNREACHABLE; n];
    let mut predecessors: Vec<Option<VertexId>> = vec![None; n];
    let mut frontier: BinaryHeap<Reverse<(Distance, VertexId)>> = BinaryHeap::new();
    let mut pops = 0usize;

    distances[start] = 0;
    frontier.push(Reverse((0, start)));

    while let Some(Reverse((dist, vertex))) = frontier.pop() {
        pops += 1;
        if dist > distances[vertex] {
            continue;
        }

        for (neighbor, cost) in adjacency.neighbors(vertex) {
            let candidate = dist.saturating_add(cost);
            if candidate < distances[neighbor] {
                distances[neighbor] = candidate;
                predecessors[neighbor] = Some(vertex);
                frontier.push(Reverse((candidate, neighbor)));
            }
        }
    }

    tracing::debug!(start, vertices = n, pops, "dijkstra finished");
    Ok(ShortestPaths {
        source: start,
        distances,
        predecessors,
    })
}
