use crate::config::DisplayConfig;
use crate::types::{Distance, Route, RouteOutcome};

pub const NO_PATH_MESSAGE: &str = "No path found between the selected buildings.";

pub(crate) fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// `16 ft`
#[must_use]
pub fn format_distance(distance: Distance, display: &DisplayConfig) -> String {
    format!("{distance} {}", display.unit)
}

/// Plain-text lines for an outcome: header, path, total. Shared by the
/// console printer and the TUI result panel.
#[must_use]
pub fn outcome_lines(outcome: &RouteOutcome, display: &DisplayConfig) -> Vec<String> {
    match outcome {
        RouteOutcome::Found(route) => route_lines(route, display),
        RouteOutcome::NoPath { .. } => vec![NO_PATH_MESSAGE.to_string()],
    }
}

fn route_lines(route: &Route, display: &DisplayConfig) -> Vec<String> {
    let from = route.start().map_or("?", |s| s.label.as_str());
    let to = route.end().map_or("?", |s| s.label.as_str());
    vec![
        format!("Shortest path from {from} to {to}:"),
        route.describe(&display.separator),
        format!("Total distance: {}", format_distance(route.distance, display)),
    ]
}
