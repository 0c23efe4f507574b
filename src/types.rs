// src/types.rs
use serde::Serialize;

/// Index of a vertex in the campus graph, in `[0, vertex_count)`.
pub type VertexId = usize;

/// Walking distance in feet.
pub type Distance = u64;

/// Sentinel for "no finite path". Larger than any achievable path sum.
pub const UNREACHABLE: Distance = Distance::MAX;

/// An undirected, weighted connection between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub distance: Distance,
}

impl Edge {
    #[must_use]
    pub fn new(from: VertexId, to: VertexId, distance: Distance) -> Self {
        Self { from, to, distance }
    }

    #[must_use]
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// One stop along a computed route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stop {
    pub vertex: VertexId,
    /// Building code, or the decimal vertex id for unlabeled junctions.
    pub label: String,
}

/// A shortest route between two buildings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub stops: Vec<Stop>,
    pub distance: Distance,
}

impl Route {
    #[must_use]
    pub fn start(&self) -> Option<&Stop> {
        self.stops.first()
    }

    #[must_use]
    pub fn end(&self) -> Option<&Stop> {
        self.stops.last()
    }

    /// Consecutive vertex pairs along the route.
    pub fn legs(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.stops.windows(2).filter_map(|pair| match pair {
            [a, b] => Some((a.vertex, b.vertex)),
            _ => None,
        })
    }

    /// Joins stop labels with `separator`.
    #[must_use]
    pub fn describe(&self, separator: &str) -> String {
        self.stops
            .iter()
            .map(|s| s.label.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// Result of a route query. An unreachable target is an answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteOutcome {
    Found(Route),
    NoPath { from: String, to: String },
}

impl RouteOutcome {
    #[must_use]
    pub fn route(&self) -> Option<&Route> {
        match self {
            Self::Found(route) => Some(route),
            Self::NoPath { .. } => None,
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}
