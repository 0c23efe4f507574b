// src/engine/mod.rs
//! Single-source shortest paths over an [`Adjacency`](crate::graph::Adjacency).

pub mod dijkstra;
pub mod path;

pub use dijkstra::{dijkstra, ShortestPaths};
pub use path::reconstruct_path;
