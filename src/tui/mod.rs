// src/tui/mod.rs
pub mod runner;
pub mod state;
pub mod view;

use crate::campus::Campus;
use crate::config::DisplayConfig;
use anyhow::Result;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io;

/// Runs the interactive building picker until the user quits.
///
/// # Errors
/// Returns error if terminal setup fails or drawing errors.
pub fn run(campus: &Campus, display: &DisplayConfig) -> Result<()> {
    runner::setup_terminal()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = state::PickerApp::new(campus, display);
    let result = app.run(&mut terminal);

    runner::restore_terminal()?;
    result
}
