use crate::buildings::BuildingIndex;
use crate::config::DisplayConfig;
use crate::reporting::shared::{outcome_lines, pluralize, NO_PATH_MESSAGE};
use crate::types::RouteOutcome;
use colored::Colorize;

/// Prints a route outcome to stdout, or the no-path message to stderr.
pub fn print_outcome(outcome: &RouteOutcome, display: &DisplayConfig) {
    match outcome {
        RouteOutcome::Found(_) => {
            let mut lines = outcome_lines(outcome, display).into_iter();
            if let Some(header) = lines.next() {
                println!("{}", header.green().bold());
            }
            for line in lines {
                println!("{line}");
            }
        }
        RouteOutcome::NoPath { from, to } => {
            eprintln!("{}", NO_PATH_MESSAGE.red().bold());
            eprintln!("  {} {from} -> {to}", "-->".blue());
        }
    }
}

/// Prints building codes in file order with their vertex ids.
pub fn print_buildings(buildings: &BuildingIndex) {
    if buildings.is_empty() {
        println!("{}", "No buildings defined.".yellow());
        return;
    }
    let width = buildings.codes().iter().map(String::len).max().unwrap_or(0);
    for (code, vertex) in buildings.entries() {
        let padded = format!("{code:<width$}");
        println!("  {}  {}", padded.bold(), format!("vertex {vertex}").dimmed());
    }
    println!(
        "{}",
        format!("{} {}", buildings.len(), pluralize("building", buildings.len())).dimmed()
    );
}
