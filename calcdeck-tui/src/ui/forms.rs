//! Form panels: loan, length converter, age and calendar conversion

use ratatui::{
    layout::Rect,
    style::{Color, Modifier},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use libcalcdeck::domain::ConversionResult;
use libcalcdeck::format_number;

use super::fg;
use crate::app::{AppState, Mode};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let lines = match state.mode {
        Mode::Emi => emi_lines(state),
        Mode::Converter => converter_lines(state),
        Mode::Age => age_lines(state),
        Mode::Date => date_lines(state),
        Mode::Basic | Mode::Scientific => Vec::new(),
    };

    let title = format!(" {} ", state.mode.title());
    let panel = Paragraph::new(lines)
        .block(Block::default().title(title).borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    frame.render_widget(panel, area);
}

/// A text field; the focused one carries a marker and a cursor
fn text_field(state: &AppState, label: &str, value: &str, focused: bool) -> Line<'static> {
    let marker = focus_marker(state, focused);
    let cursor = if focused { "_" } else { "" };
    Line::from(vec![
        Span::styled(marker, fg(state, Color::Cyan)),
        Span::raw(format!("{:<14}", label)),
        Span::styled(
            format!("{}{}", value, cursor),
            if focused {
                fg(state, Color::White).add_modifier(Modifier::BOLD)
            } else {
                fg(state, Color::White)
            },
        ),
    ])
}

/// A selector field cycled with Left/Right
fn selector_field(state: &AppState, label: &str, value: &str, focused: bool) -> Line<'static> {
    let marker = focus_marker(state, focused);
    let (left, right) = if state.config.unicode_enabled {
        ("◀", "▶")
    } else {
        ("<", ">")
    };
    let text = if focused {
        format!("{} {} {}", left, value, right)
    } else {
        format!("  {}  ", value)
    };
    Line::from(vec![
        Span::styled(marker, fg(state, Color::Cyan)),
        Span::raw(format!("{:<14}", label)),
        Span::styled(text, fg(state, Color::Yellow)),
    ])
}

fn focus_marker(state: &AppState, focused: bool) -> String {
    match (focused, state.config.unicode_enabled) {
        (true, true) => "▸ ".to_string(),
        (true, false) => "> ".to_string(),
        (false, _) => "  ".to_string(),
    }
}

fn result_line(state: &AppState, label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("  {:<14}", label)),
        Span::styled(value, fg(state, Color::Green).add_modifier(Modifier::BOLD)),
    ])
}

fn error_line(state: &AppState, message: &str) -> Line<'static> {
    Line::from(Span::styled(format!("  {}", message), fg(state, Color::Red)))
}

fn emi_lines(state: &AppState) -> Vec<Line<'static>> {
    let form = &state.emi;
    let mut lines = vec![
        text_field(state, "Loan amount", &form.principal, form.focus == 0),
        text_field(state, "Rate (% p.a.)", &form.rate, form.focus == 1),
        text_field(state, "Tenure (months)", &form.tenure, form.focus == 2),
        Line::from(""),
    ];

    if let Some(result) = form.result {
        lines.push(result_line(state, "Monthly EMI", format_number(result.emi)));
        lines.push(result_line(state, "Total payment", format_number(result.total)));
        lines.push(result_line(state, "Interest", format_number(result.interest)));
    } else if let Some(ref error) = form.error {
        lines.push(error_line(state, error));
    }
    lines
}

fn converter_lines(state: &AppState) -> Vec<Line<'static>> {
    let form = &state.converter;
    let mut lines = vec![
        text_field(state, "Value", &form.value, form.focus == 0),
        selector_field(state, "From", form.from.symbol(), form.focus == 1),
        selector_field(state, "To", form.to.symbol(), form.focus == 2),
        Line::from(""),
    ];

    if let Some(result) = form.result {
        let text = match result {
            ConversionResult::Value(_) => format!("{} {}", result, form.to),
            ConversionResult::NotANumber => result.to_string(),
        };
        lines.push(result_line(state, "Result", text));
    }
    lines
}

fn age_lines(state: &AppState) -> Vec<Line<'static>> {
    let form = &state.age;
    let mut lines = vec![
        text_field(state, "Birth date", &form.birth, form.focus == 0),
        Line::from(Span::styled("  YYYY-MM-DD", fg(state, Color::DarkGray))),
        Line::from(""),
    ];

    if form.pending {
        lines.push(Line::from("  Calculating..."));
    } else if let Some(age) = form.result {
        lines.push(result_line(
            state,
            "Age",
            format!("{} years, {} months, {} days", age.years, age.months, age.days),
        ));
    } else if let Some(ref error) = form.error {
        lines.push(error_line(state, error));
    }
    lines
}

fn date_lines(state: &AppState) -> Vec<Line<'static>> {
    let form = &state.date;
    let mut lines = vec![
        text_field(state, "Date", &form.input, form.focus == 0),
        selector_field(state, "Calendar", form.system.name(), form.focus == 1),
        Line::from(Span::styled("  YYYY-MM-DD", fg(state, Color::DarkGray))),
        Line::from(""),
    ];

    if let Some(ref result) = form.result {
        lines.push(result_line(state, "Result", result.clone()));
    }
    lines
}
