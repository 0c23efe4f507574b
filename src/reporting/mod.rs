// src/reporting/mod.rs
//! Human and machine output for route queries.

pub mod console;
pub mod shared;

pub use console::{print_buildings, print_outcome};

use crate::buildings::BuildingIndex;
use crate::types::RouteOutcome;
use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Serialize)]
struct BuildingEntry<'a> {
    code: &'a str,
    vertex: usize,
}

/// Prints an outcome as pretty JSON on stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_outcome_json(outcome: &RouteOutcome) -> Result<()> {
    println!("{}", outcome_json(outcome)?);
    Ok(())
}

/// Serializes an outcome to pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn outcome_json(outcome: &RouteOutcome) -> Result<String> {
    serde_json::to_string_pretty(outcome).context("Failed to serialize route")
}

/// Prints the building list as JSON on stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_buildings_json(buildings: &BuildingIndex) -> Result<()> {
    let entries: Vec<BuildingEntry<'_>> = buildings
        .entries()
        .map(|(code, vertex)| BuildingEntry { code, vertex })
        .collect();
    let json = serde_json::to_string_pretty(&entries).context("Failed to serialize buildings")?;
    println!("{json}");
    Ok(())
}
