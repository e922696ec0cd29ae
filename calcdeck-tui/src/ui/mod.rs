//! UI rendering
//!
//! Pure rendering functions that draw the state into a terminal frame.

mod forms;
mod history;
mod keypad;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{AppState, Mode};

/// Render the application UI
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Mode tabs
            Constraint::Min(8),    // Body
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    render_tabs(frame, chunks[0], state);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    if state.mode.is_expression() {
        let panel = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(3)])
            .split(body[0]);
        render_display(frame, panel[0], state);
        keypad::render(frame, panel[1], state);
    } else {
        forms::render(frame, body[0], state);
    }

    history::render(frame, body[1], state);
    render_status_bar(frame, chunks[2], state);

    if state.help_visible {
        render_help_overlay(frame, area, state);
    }
}

/// Foreground color, or the plain style when colors are disabled
pub(crate) fn fg(state: &AppState, color: Color) -> Style {
    if state.config.colors_enabled {
        Style::default().fg(color)
    } else {
        Style::default()
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, state: &AppState) {
    let divider = if state.config.unicode_enabled { " │ " } else { " | " };

    let mut spans = Vec::new();
    for (i, mode) in Mode::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(divider, fg(state, Color::DarkGray)));
        }
        let label = format!("F{} {}", i + 2, mode.title());
        if *mode == state.mode {
            spans.push(Span::styled(
                label,
                fg(state, Color::Cyan).add_modifier(Modifier::BOLD | Modifier::REVERSED),
            ));
        } else {
            spans.push(Span::raw(label));
        }
    }

    let tabs = Paragraph::new(Line::from(spans))
        .block(Block::default().title(" Calcdeck ").borders(Borders::ALL));
    frame.render_widget(tabs, area);
}

/// Expression (or `0`) with the result underneath
fn render_display(frame: &mut Frame, area: Rect, state: &AppState) {
    let expression = state.calculator.expression();
    let expression = if expression.is_empty() { "0" } else { expression };

    let result_line = match state.calculator.result() {
        Some(res) if res == libcalcdeck::ERROR_MARKER => {
            Line::from(Span::styled(format!("= {}", res), fg(state, Color::Red)))
        }
        Some(res) => Line::from(Span::styled(
            format!("= {}", res),
            fg(state, Color::Green).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(""),
    };

    let display = Paragraph::new(vec![Line::from(expression.to_string()), result_line])
        .block(Block::default().title(" Display ").borders(Borders::ALL))
        .alignment(Alignment::Right);
    frame.render_widget(display, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = match state.status.message {
        Some(ref message) => Line::from(Span::styled(message.clone(), fg(state, Color::Yellow))),
        None => {
            let hints = if state.mode.is_expression() {
                "Enter: Evaluate | Esc: Clear | F1: Help | q: Quit"
            } else {
                "Tab: Next field | Left/Right: Change | Enter: Calculate | Esc: Reset | F1: Help"
            };
            Line::from(Span::styled(hints, fg(state, Color::Gray)))
        }
    };

    let status = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let popup_area = centered_rect(70, 80, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  Ctrl+C/Ctrl+Q - Quit"),
        Line::from("  F1            - Toggle help"),
        Line::from("  F2-F7         - Basic, Scientific, EMI, Converter, Age, Date"),
        Line::from(""),
        Line::from("Basic and Scientific:"),
        Line::from("  0-9 + - * / ( ) . % ^ e - Type"),
        Line::from("  Enter or =    - Evaluate"),
        Line::from("  Backspace/Esc - Delete / clear"),
        Line::from("  Up/Down u d X - Select, reuse, delete, clear history"),
        Line::from("  P E x C       - Insert pi, insert e, example, clear all"),
        Line::from("  s c t l g w r ! - sin cos tan ln log square sqrt factorial"),
        Line::from("  p             - Append pi (Scientific)"),
        Line::from(""),
        Line::from("Forms:"),
        Line::from("  Tab/Shift+Tab - Move between fields"),
        Line::from("  Left/Right    - Change unit or calendar"),
        Line::from("  Enter         - Calculate"),
        Line::from("  Esc           - Reset"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(fg(state, Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
