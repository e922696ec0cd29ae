//! Keypad panel for the basic and scientific modes

use ratatui::{
    layout::Rect,
    style::{Color, Modifier},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::fg;
use crate::app::reducer::scientific_function;
use crate::app::{AppState, Mode};
use libcalcdeck::Constant;

const KEYPAD_ROWS: [[&str; 4]; 5] = [
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    ["0", ".", "%", "+"],
    ["(", ")", "^", "="],
];

const FUNCTION_KEYS: &str = "sctlgwr!";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines: Vec<Line> = KEYPAD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|key| {
                    let style = if key.chars().all(|c| c.is_ascii_digit() || c == '.') {
                        fg(state, Color::White)
                    } else {
                        fg(state, Color::Yellow)
                    };
                    Span::styled(format!(" [{}] ", key), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    if state.mode == Mode::Scientific {
        lines.push(Line::from(""));
        let mut spans: Vec<Span> = FUNCTION_KEYS
            .chars()
            .filter_map(|key| scientific_function(key).map(|function| (key, function)))
            .flat_map(|(key, function)| {
                let label = if state.config.unicode_enabled {
                    function.label()
                } else {
                    function.history_name()
                };
                [
                    Span::styled(key.to_string(), fg(state, Color::Cyan).add_modifier(Modifier::BOLD)),
                    Span::raw(format!(" {}  ", label)),
                ]
            })
            .collect();
        let pi = if state.config.unicode_enabled {
            Constant::Pi.symbol()
        } else {
            "pi"
        };
        spans.push(Span::styled("p", fg(state, Color::Cyan).add_modifier(Modifier::BOLD)));
        spans.push(Span::raw(format!(" {}", pi)));
        lines.push(Line::from(spans));
    }

    let title = format!(" {} ", state.mode.title());
    let keypad = Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(keypad, area);
}
