use crate::tui::state::{Pane, Panel, PickerApp};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(f: &mut Frame, app: &PickerApp) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(50),
            ]
            .as_ref(),
        )
        .split(rows[0]);

    draw_codes(f, app, Pane::Start, chunks[0]);
    draw_codes(f, app, Pane::End, chunks[1]);
    draw_result(f, app, chunks[2]);
    draw_help(f, rows[1]);
}

fn draw_codes(f: &mut Frame, app: &PickerApp, pane: Pane, area: Rect) {
    let (title, selected) = match pane {
        Pane::Start => ("Start Building", app.start),
        Pane::End => ("End Building", app.end),
    };
    let border = if app.focus == pane {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let items: Vec<ListItem> = app
        .codes
        .iter()
        .map(|code| ListItem::new(Line::from(code.as_str())))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).border_style(border).title(title))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let mut state = ListState::default();
    state.select(Some(selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_result(f: &mut Frame, app: &PickerApp, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Shortest Path");

    let text: Vec<Line> = match &app.panel {
        Panel::Hint => vec![Line::from(Span::styled(
            "Choose two buildings and press Enter.",
            Style::default().fg(Color::DarkGray),
        ))],
        Panel::Route(lines) => lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let style = if i == 0 {
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(line.clone(), style))
            })
            .collect(),
        Panel::NoPath => vec![Line::from(Span::styled(
            crate::reporting::shared::NO_PATH_MESSAGE,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))],
        Panel::Error(message) => vec![Line::from(Span::styled(
            format!("error: {message}"),
            Style::default().fg(Color::Red),
        ))],
    };

    f.render_widget(Paragraph::new(text).block(block).wrap(Wrap { trim: true }), area);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let help = Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(" switch  "),
        Span::styled("j/k", Style::default().fg(Color::Yellow)),
        Span::raw(" move  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(" find path  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" quit"),
    ]);
    f.render_widget(Paragraph::new(help), area);
}
