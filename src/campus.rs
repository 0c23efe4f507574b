// src/campus.rs
//! The loaded campus: graph, building index and adjacency, built once and
//! shared read-only by every query.

use crate::buildings::{load_buildings, BuildingIndex};
use crate::config::Config;
use crate::engine::{dijkstra, ShortestPaths};
use crate::error::{CampusError, Result};
use crate::graph::{check_vertex, load_graph, Adjacency, AdjacencyLayout, Graph};
use crate::types::{Route, RouteOutcome, Stop, VertexId};

/// Immutable query context.
#[derive(Debug, Clone)]
pub struct Campus {
    graph: Graph,
    buildings: BuildingIndex,
    adjacency: Adjacency,
}

impl Campus {
    /// Assembles a campus from parsed parts.
    ///
    /// # Errors
    /// Returns `InvalidVertex` if a building is mapped to a vertex the graph
    /// does not have.
    pub fn new(graph: Graph, buildings: BuildingIndex, layout: AdjacencyLayout) -> Result<Self> {
        for (_, vertex) in buildings.entries() {
            check_vertex(vertex, graph.vertex_count())?;
        }
        let adjacency = Adjacency::build(&graph, layout)?;

        let isolated = graph.isolated();
        for &vertex in &isolated {
            if let Some(code) = buildings.code(vertex) {
                tracing::warn!(code, vertex, "building has no walkways; every route to it fails");
            }
        }
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = adjacency.edge_count(),
            isolated = isolated.len(),
            buildings = buildings.len(),
            ?layout,
            "campus ready"
        );
        Ok(Self { graph, buildings, adjacency })
    }

    /// Loads both data files named by `config`.
    ///
    /// # Errors
    /// Returns the first load or validation error; nothing is partially loaded.
    pub fn load(config: &Config) -> Result<Self> {
        let graph = load_graph(&config.data.graph)?;
        let buildings = load_buildings(&config.data.mappings, config.engine.duplicate_codes)?;
        Self::new(graph, buildings, config.engine.adjacency)
    }

    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    #[must_use]
    pub fn buildings(&self) -> &BuildingIndex {
        &self.buildings
    }

    #[must_use]
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Resolves a building code to its vertex.
    ///
    /// # Errors
    /// Returns `UnknownBuilding` if no building has that code.
    pub fn resolve(&self, code: &str) -> Result<VertexId> {
        self.buildings
            .vertex(code)
            .ok_or_else(|| CampusError::UnknownBuilding(code.to_string()))
    }

    /// Shortest route between two building codes.
    ///
    /// # Errors
    /// Returns `UnknownBuilding` for an unresolvable code.
    pub fn route(&self, start: &str, end: &str) -> Result<RouteOutcome> {
        let from = self.resolve(start)?;
        let to = self.resolve(end)?;
        self.route_between(from, to)
    }

    /// Shortest route between two raw vertices.
    ///
    /// # Errors
    /// Returns `InvalidVertex` if either vertex is out of range.
    pub fn route_between(&self, from: VertexId, to: VertexId) -> Result<RouteOutcome> {
        check_vertex(to, self.graph.vertex_count())?;
        let paths = self.shortest_paths(from)?;
        Ok(self.outcome(&paths, to))
    }

    /// Full single-source result from `from`.
    ///
    /// # Errors
    /// Returns `InvalidVertex` if `from` is out of range.
    pub fn shortest_paths(&self, from: VertexId) -> Result<ShortestPaths> {
        dijkstra(&self.adjacency, from)
    }

    fn outcome(&self, paths: &ShortestPaths, to: VertexId) -> RouteOutcome {
        match (paths.path_to(to), paths.distance_to(to)) {
            (Some(vertices), Some(distance)) => RouteOutcome::Found(Route {
                stops: vertices.into_iter().map(|v| self.stop(v)).collect(),
                distance,
            }),
            _ => RouteOutcome::NoPath {
                from: self.buildings.label(paths.source()),
                to: self.buildings.label(to),
            },
        }
    }

    fn stop(&self, vertex: VertexId) -> Stop {
        Stop {
            vertex,
            label: self.buildings.label(vertex),
        }
    }
}
