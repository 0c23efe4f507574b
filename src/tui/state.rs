// src/tui/state.rs
use crate::campus::Campus;
use crate::config::DisplayConfig;
use crate::reporting::shared::outcome_lines;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Start,
    End,
}

/// What the result panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Hint,
    Route(Vec<String>),
    NoPath,
    Error(String),
}

pub struct PickerApp<'a> {
    pub campus: &'a Campus,
    pub display: &'a DisplayConfig,
    pub codes: Vec<String>,
    pub start: usize,
    pub end: usize,
    pub focus: Pane,
    pub panel: Panel,
    pub running: bool,
}

impl<'a> PickerApp<'a> {
    #[must_use]
    pub fn new(campus: &'a Campus, display: &'a DisplayConfig) -> Self {
        Self {
            campus,
            display,
            codes: campus.buildings().codes().to_vec(),
            start: 0,
            end: 0,
            focus: Pane::Start,
            panel: Panel::Hint,
            running: true,
        }
    }

    /// Runs the event loop.
    ///
    /// # Errors
    /// Returns error if drawing to terminal fails or event polling errors.
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut ratatui::Terminal<B>,
    ) -> anyhow::Result<()> {
        while self.running {
            terminal.draw(|f| crate::tui::view::draw(f, self))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => self.toggle_focus(),
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Enter => self.compute(),
            _ => {}
        }
    }

    #[must_use]
    pub fn selected(&self, pane: Pane) -> Option<&str> {
        let idx = match pane {
            Pane::Start => self.start,
            Pane::End => self.end,
        };
        self.codes.get(idx).map(String::as_str)
    }

    /// Routes between the two selected buildings into the result panel.
    /// Errors are shown, never propagated: the session keeps going.
    pub fn compute(&mut self) {
        let (Some(start), Some(end)) = (self.selected(Pane::Start), self.selected(Pane::End))
        else {
            self.panel = Panel::Error("No buildings to choose from".to_string());
            return;
        };
        self.panel = match self.campus.route(start, end) {
            Ok(outcome) if outcome.is_found() => Panel::Route(outcome_lines(&outcome, self.display)),
            Ok(_) => Panel::NoPath,
            Err(e) => Panel::Error(e.to_string()),
        };
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Pane::Start => Pane::End,
            Pane::End => Pane::Start,
        };
    }

    fn cursor(&mut self) -> &mut usize {
        match self.focus {
            Pane::Start => &mut self.start,
            Pane::End => &mut self.end,
        }
    }

    fn move_up(&mut self) {
        let cursor = self.cursor();
        *cursor = cursor.saturating_sub(1);
    }

    fn move_down(&mut self) {
        let last = self.codes.len().saturating_sub(1);
        let cursor = self.cursor();
        if *cursor < last {
            *cursor += 1;
        }
    }
}
