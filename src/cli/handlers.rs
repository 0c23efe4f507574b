// src/cli/handlers.rs
use crate::campus::Campus;
use crate::cli::args::GlobalArgs;
use crate::config::{Config, CONFIG_FILE};
use crate::exit::RouteExit;
use crate::render;
use crate::reporting;
use crate::types::RouteOutcome;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

/// Resolves configuration from the config file and CLI overrides.
///
/// # Errors
/// Returns error if the config file is unreadable or invalid.
pub fn load_config(global: &GlobalArgs) -> Result<Config> {
    let config = Config::load(global.config.as_deref())?
        .with_overrides(global.graph.clone(), global.mappings.clone());
    tracing::debug!(
        graph = %config.data.graph.display(),
        mappings = %config.data.mappings.display(),
        source = ?config.source,
        "config resolved"
    );
    Ok(config)
}

/// Loads config and campus data. Any failure here aborts the command.
///
/// # Errors
/// Returns error if config or either data file fails to load.
pub fn load_campus(global: &GlobalArgs) -> Result<(Config, Campus)> {
    let config = load_config(global)?;
    let campus = Campus::load(&config).context("Failed to load campus data")?;
    Ok((config, campus))
}

fn exit_for(outcome: &RouteOutcome) -> RouteExit {
    if outcome.is_found() {
        RouteExit::Success
    } else {
        RouteExit::NoPath
    }
}

/// Handles the route command.
///
/// # Errors
/// Returns error if loading fails or a building code is unknown.
pub fn handle_route(global: &GlobalArgs, start: &str, end: &str, json: bool) -> Result<RouteExit> {
    let (config, campus) = load_campus(global)?;
    let outcome = campus.route(start, end)?;

    if json {
        reporting::print_outcome_json(&outcome)?;
    } else {
        reporting::print_outcome(&outcome, &config.display);
    }
    Ok(exit_for(&outcome))
}

/// Handles the buildings command.
///
/// # Errors
/// Returns error if loading fails.
pub fn handle_buildings(global: &GlobalArgs, json: bool) -> Result<RouteExit> {
    let (_, campus) = load_campus(global)?;
    if json {
        reporting::print_buildings_json(campus.buildings())?;
    } else {
        reporting::print_buildings(campus.buildings());
    }
    Ok(RouteExit::Success)
}

/// Handles the render command. With no path the map is still written,
/// without highlights.
///
/// # Errors
/// Returns error if loading, routing or writing fails.
pub fn handle_render(
    global: &GlobalArgs,
    start: &str,
    end: &str,
    output: Option<&Path>,
) -> Result<RouteExit> {
    let (_, campus) = load_campus(global)?;
    let outcome = campus.route(start, end)?;

    render::write_dot(&campus, outcome.route(), output)?;
    if let Some(path) = output {
        eprintln!("{} {}", "Wrote".green(), path.display());
    }
    if !outcome.is_found() {
        eprintln!("{}", reporting::shared::NO_PATH_MESSAGE.yellow());
    }
    Ok(exit_for(&outcome))
}

/// Handles the interactive picker.
///
/// # Errors
/// Returns error if loading fails or the terminal cannot be driven.
#[cfg(feature = "tui")]
pub fn handle_pick(global: &GlobalArgs) -> Result<RouteExit> {
    let (config, campus) = load_campus(global)?;
    crate::tui::run(&campus, &config.display)?;
    Ok(RouteExit::Success)
}

/// Handles the init command.
///
/// # Errors
/// Returns error if the file cannot be written.
pub fn handle_init(force: bool) -> Result<RouteExit> {
    let dir = Path::new(".");
    if dir.join(CONFIG_FILE).exists() && !force {
        eprintln!(
            "{} {CONFIG_FILE} already exists (use --force to overwrite)",
            "warn:".yellow().bold()
        );
        return Ok(RouteExit::Error);
    }
    let path = Config::save_default(dir)?;
    println!("{} {}", "Created".green(), path.display());
    Ok(RouteExit::Success)
}
