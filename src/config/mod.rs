// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{CampusToml, Config, DataConfig, DisplayConfig, EngineConfig};

use crate::error::Result;
use std::path::{Path, PathBuf};

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `campusroute.toml` from `dir`, or defaults if there is none.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            return io::load_file(&path);
        }
        let mut config = Self::new();
        config.data.graph = dir.join(&config.data.graph);
        config.data.mappings = dir.join(&config.data.mappings);
        Ok(config)
    }

    /// Loads an explicit config file, or falls back to the working directory.
    ///
    /// # Errors
    /// Returns error if the chosen file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => io::load_file(path),
            None => Self::load_from(Path::new("")),
        }
    }

    /// Applies command-line overrides for the data files.
    #[must_use]
    pub fn with_overrides(mut self, graph: Option<PathBuf>, mappings: Option<PathBuf>) -> Self {
        if let Some(graph) = graph {
            self.data.graph = graph;
        }
        if let Some(mappings) = mappings {
            self.data.mappings = mappings;
        }
        self
    }

    /// Writes a default `campusroute.toml` into `dir`.
    ///
    /// # Errors
    /// Returns error if the file write fails.
    pub fn save_default(dir: &Path) -> Result<PathBuf> {
        io::write_default(dir)
    }
}
