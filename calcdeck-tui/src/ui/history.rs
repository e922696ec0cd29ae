//! History panel: newest entry first, with the quick actions underneath

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use libcalcdeck::Constant;

use super::fg;
use crate::app::AppState;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let history = state.calculator.history();

    let block = Block::default()
        .title(format!(" History ({}) ", history.len()))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(inner);

    if history.is_empty() {
        let empty = Paragraph::new(Span::styled("No calculations yet", fg(state, Color::DarkGray)));
        frame.render_widget(empty, chunks[0]);
    } else {
        let lines: Vec<Line> = history
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let text = format!("{} = {}", entry.expr, entry.res);
                if state.history_cursor == Some(i) {
                    Line::from(Span::styled(
                        text,
                        Style::default().add_modifier(Modifier::REVERSED),
                    ))
                } else {
                    Line::from(text)
                }
            })
            .collect();

        // Keep the selected entry visible
        let visible = usize::from(chunks[0].height.max(1));
        let offset = state
            .history_cursor
            .map(|cursor| cursor.saturating_sub(visible - 1))
            .unwrap_or(0);

        let list = Paragraph::new(lines).scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));
        frame.render_widget(list, chunks[0]);
    }

    let (up, down, pi) = if state.config.unicode_enabled {
        ("↑", "↓", Constant::Pi.symbol())
    } else {
        ("Up", "Down", "pi")
    };
    let hints = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{}/{} select  u reuse  d delete  X clear", up, down),
            fg(state, Color::Gray),
        )),
        Line::from(Span::styled(
            format!("P {}  E {}  x example  C clear all", pi, Constant::E.symbol()),
            fg(state, Color::Gray),
        )),
    ]);
    frame.render_widget(hints, chunks[1]);
}
