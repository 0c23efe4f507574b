// src/tui/runner.rs
use anyhow::Result;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use std::io;

/// Switches the terminal into raw mode on the alternate screen.
///
/// # Errors
/// Returns error if the terminal refuses either mode.
pub fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    Ok(())
}

/// Undoes [`setup_terminal`].
///
/// # Errors
/// Returns error if the terminal cannot be restored.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}
