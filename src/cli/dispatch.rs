//! Command dispatch logic extracted from the binary to keep `main` small.

use super::args::{Commands, GlobalArgs};
use super::handlers;
use crate::exit::RouteExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(command: Commands, global: &GlobalArgs) -> Result<RouteExit> {
    match command {
        Commands::Route { start, end, json } => handlers::handle_route(global, &start, &end, json),
        Commands::Buildings { json } => handlers::handle_buildings(global, json),
        Commands::Render { start, end, output } => {
            handlers::handle_render(global, &start, &end, output.as_deref())
        }
        #[cfg(feature = "tui")]
        Commands::Pick => handlers::handle_pick(global),
        Commands::Init { force } => handlers::handle_init(force),
    }
}

/// Maps a failed command to its exit code.
#[must_use]
pub fn exit_for_error(err: &anyhow::Error) -> RouteExit {
    match err.downcast_ref::<crate::error::CampusError>() {
        Some(e) if e.is_invalid_input() => RouteExit::InvalidInput,
        _ => RouteExit::Error,
    }
}
