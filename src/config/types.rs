use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::buildings::DuplicatePolicy;
use crate::graph::AdjacencyLayout;

/// Where the two campus data files live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_graph")]
    pub graph: PathBuf,
    #[serde(default = "default_mappings")]
    pub mappings: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            graph: default_graph(),
            mappings: default_mappings(),
        }
    }
}

fn default_graph() -> PathBuf {
    PathBuf::from("graph.txt")
}

fn default_mappings() -> PathBuf {
    PathBuf::from("mappings.txt")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub adjacency: AdjacencyLayout,
    #[serde(default)]
    pub duplicate_codes: DuplicatePolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            unit: default_unit(),
            separator: default_separator(),
        }
    }
}

fn default_unit() -> String {
    "ft".to_string()
}

fn default_separator() -> String {
    " -> ".to_string()
}

/// On-disk shape of `campusroute.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CampusToml {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub data: DataConfig,
    pub engine: EngineConfig,
    pub display: DisplayConfig,
    /// Config file that was read, if any.
    pub source: Option<PathBuf>,
}
