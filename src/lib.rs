pub mod buildings;
pub mod campus;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod exit;
pub mod graph;
pub mod records;
pub mod render;
pub mod reporting;
#[cfg(feature = "tui")]
pub mod tui;
pub mod types;

pub use campus::Campus;
pub use error::{CampusError, Result};
