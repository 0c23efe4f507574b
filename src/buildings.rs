// src/buildings.rs
//! Building code index: which vertices are buildings, and what they are called.
//!
//! ```text
//! 3          <- building count
//! 0 CUR      <- vertex code
//! 4 SNL
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{CampusError, Result};
use crate::records::{self, Record};
use crate::types::VertexId;

/// How repeated codes or vertices in the mapping file are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Fail the load.
    #[default]
    Reject,
    /// Later lines replace earlier ones.
    LastWins,
}

/// Bijective mapping between labeled vertices and building codes.
#[derive(Debug, Clone, Default)]
pub struct BuildingIndex {
    by_vertex: HashMap<VertexId, String>,
    by_code: HashMap<String, VertexId>,
    /// Codes in file order.
    order: Vec<String>,
}

impl BuildingIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `vertex <-> code` pair under `policy`.
    ///
    /// # Errors
    /// Under `Reject`, returns `DuplicateCode` or `DuplicateVertex` when either
    /// side is already mapped to something else.
    pub fn insert(&mut self, vertex: VertexId, code: &str, policy: DuplicatePolicy) -> Result<()> {
        let prev_vertex = self.by_code.get(code).copied();
        let prev_code = self.by_vertex.get(&vertex).cloned();

        if prev_vertex == Some(vertex) {
            return Ok(());
        }

        if policy == DuplicatePolicy::Reject {
            if let Some(first) = prev_vertex {
                return Err(CampusError::DuplicateCode {
                    code: code.to_string(),
                    first,
                    second: vertex,
                });
            }
            if let Some(first) = prev_code {
                return Err(CampusError::DuplicateVertex {
                    vertex,
                    first,
                    second: code.to_string(),
                });
            }
        }

        if let Some(stale) = prev_vertex {
            tracing::warn!(code, stale, vertex, "building code remapped");
            self.by_vertex.remove(&stale);
        }
        if let Some(stale) = prev_code {
            tracing::warn!(vertex, %stale, code, "vertex relabeled");
            self.by_code.remove(&stale);
            self.order.retain(|c| c != &stale);
        }

        if prev_vertex.is_none() {
            self.order.push(code.to_string());
        }
        self.by_vertex.insert(vertex, code.to_string());
        self.by_code.insert(code.to_string(), vertex);
        Ok(())
    }

    /// Code of `vertex`, if it is a building.
    #[must_use]
    pub fn code(&self, vertex: VertexId) -> Option<&str> {
        self.by_vertex.get(&vertex).map(String::as_str)
    }

    /// Vertex carrying `code`.
    #[must_use]
    pub fn vertex(&self, code: &str) -> Option<VertexId> {
        self.by_code.get(code).copied()
    }

    /// Display label: the code, or the vertex number for unlabeled junctions.
    #[must_use]
    pub fn label(&self, vertex: VertexId) -> String {
        self.code(vertex).map_or_else(|| vertex.to_string(), str::to_string)
    }

    /// Codes in the order they appeared in the mapping file.
    #[must_use]
    pub fn codes(&self) -> &[String] {
        &self.order
    }

    /// `(code, vertex)` pairs in file order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, VertexId)> + '_ {
        self.order
            .iter()
            .filter_map(|c| self.by_code.get(c).map(|&v| (c.as_str(), v)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Loads a building mapping file from disk.
///
/// # Errors
/// Returns `Io` if the file cannot be read, otherwise see [`parse_buildings`].
pub fn load_buildings(path: &Path, policy: DuplicatePolicy) -> Result<BuildingIndex> {
    let source = fs::read_to_string(path).map_err(|source| CampusError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse_buildings(&source, &path.display().to_string(), policy)
}

/// Parses building mapping text.
///
/// # Errors
/// Returns `Parse` for a missing count or a malformed line, and the
/// duplicate errors of [`BuildingIndex::insert`] under `Reject`.
pub fn parse_buildings(source: &str, origin: &str, policy: DuplicatePolicy) -> Result<BuildingIndex> {
    let (header, lines) = records::split_header(source, origin, "building")?;
    let declared = header.count;

    let mut index = BuildingIndex::new();
    for record in &lines {
        let (vertex, code) = parse_entry(record, origin)?;
        index.insert(vertex, code, policy)?;
    }

    if declared != lines.len() {
        tracing::warn!(origin, declared, found = lines.len(), "building count does not match entries");
    }
    tracing::debug!(origin, buildings = index.len(), "building index parsed");
    Ok(index)
}

fn parse_entry<'a>(record: &Record<'a>, origin: &str) -> Result<(VertexId, &'a str)> {
    let [vertex, code] = record.fields::<2>(origin)?;
    let vertex = records::number(vertex, "vertex", origin, record.line)?;
    Ok((vertex, code))
}
