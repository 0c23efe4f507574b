// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

use crate::types::VertexId;

#[derive(Debug, Error)]
pub enum CampusError {
    #[error("{origin}:{line}: {message}")]
    Parse {
        origin: String,
        line: usize,
        message: String,
    },

    #[error("vertex {vertex} is out of range (graph has {vertex_count} vertices)")]
    InvalidVertex {
        vertex: VertexId,
        vertex_count: usize,
    },

    #[error("graph declares {vertex_count} vertices, more than the supported {limit}")]
    TooManyVertices { vertex_count: usize, limit: usize },

    #[error(
        "{vertex_count} vertices is too many for the matrix layout (limit {limit}); \
         set engine.adjacency = \"list\""
    )]
    MatrixTooLarge { vertex_count: usize, limit: usize },

    #[error("unknown building code '{0}'")]
    UnknownBuilding(String),

    #[error("building code '{code}' is mapped to both vertex {first} and vertex {second}")]
    DuplicateCode {
        code: String,
        first: VertexId,
        second: VertexId,
    },

    #[error("vertex {vertex} is labeled both '{first}' and '{second}'")]
    DuplicateVertex {
        vertex: VertexId,
        first: String,
        second: String,
    },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },
}

impl CampusError {
    pub(crate) fn parse(origin: &str, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            origin: origin.to_string(),
            line,
            message: message.into(),
        }
    }

    /// True for errors caused by bad input data or a bad query, as opposed to
    /// the environment (unreadable files).
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}

pub type Result<T> = std::result::Result<T, CampusError>;
