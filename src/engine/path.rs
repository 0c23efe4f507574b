// src/engine/path.rs
use crate::types::VertexId;

/// Walks predecessor links back from `target` and returns the vertices in
/// source-to-target order.
///
/// The walk stops at the first vertex without a predecessor. If `target` was
/// never reached that is `target` itself, so check reachability first;
/// [`ShortestPaths::path_to`](super::ShortestPaths::path_to) does.
#[must_use]
pub fn reconstruct_path(predecessors: &[Option<VertexId>], target: VertexId) -> Vec<VertexId> {
    let mut path = vec![target];
    let mut current = target;

    // A valid predecessor chain never revisits a vertex; the bound stops a
    // corrupted one from looping.
    while let Some(prev) = predecessors.get(current).copied().flatten() {
        if path.len() > predecessors.len() {
            break;
        }
        path.push(prev);
        current = prev;
    }

    path.reverse();
    path
}
