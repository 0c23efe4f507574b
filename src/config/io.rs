// src/config/io.rs
use std::fs;
use std::path::{Path, PathBuf};

use super::types::{CampusToml, Config};
use crate::error::{CampusError, Result};

pub const CONFIG_FILE: &str = "campusroute.toml";

/// Parses TOML content into the file model.
///
/// # Errors
/// Returns `Config` with the TOML error message if the content is invalid.
pub fn parse_toml(content: &str, path: &Path) -> Result<CampusToml> {
    toml::from_str(content).map_err(|e| CampusError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Reads `path` and builds a config whose data paths are relative to the
/// file's directory.
///
/// # Errors
/// Returns `Io` if the file cannot be read, `Config` if it is invalid.
pub fn load_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|source| CampusError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let file = parse_toml(&content, path)?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));

    let mut config = Config {
        data: file.data,
        engine: file.engine,
        display: file.display,
        source: Some(path.to_path_buf()),
    };
    config.data.graph = resolve(base, &config.data.graph);
    config.data.mappings = resolve(base, &config.data.mappings);
    Ok(config)
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() || base.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Writes the default configuration to `dir/campusroute.toml`.
///
/// # Errors
/// Returns `Config` if serialization fails, `Io` if the write fails.
pub fn write_default(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE);
    let content = toml::to_string_pretty(&CampusToml::default()).map_err(|e| CampusError::Config {
        path: path.clone(),
        message: e.to_string(),
    })?;
    fs::write(&path, content).map_err(|source| CampusError::Io {
        source,
        path: path.clone(),
    })?;
    Ok(path)
}
