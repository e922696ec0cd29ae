//! Pure reducer function for state transitions
//!
//! `(State, Action) -> State`. The reducer performs no I/O and never reads
//! the clock: age calculations are requested with `AgeRequested` and
//! answered by the main loop with `AgeCalculate { today }`.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libcalcdeck::domain::{
    calculate_age, convert_date_input, convert_length_input, parse_date, ConversionResult,
};
use libcalcdeck::{format_number, CalcError, Constant, ParseError, UnaryFunction, INVALID_DATE_MARKER};
use tracing::debug;

use super::actions::{Action, Mode};
use super::state::{AgeForm, AppState, ConverterForm, DateForm, EmiForm, StatusBarState};

/// Characters typed straight into the expression
const EXPRESSION_CHARS: &str = "0123456789+-*/().%^e";

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Tick => state,
        Action::Resize(_, _) => state,

        // === Navigation ===
        Action::SwitchMode(mode) => AppState { mode, ..state },

        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        // === Expression ===
        Action::Append(token) => edit_expression(state, |calc| calc.append(&token)),
        Action::Backspace => edit_expression(state, |calc| calc.backspace()),
        Action::ClearExpression => edit_expression(state, |calc| calc.clear()),
        Action::Evaluate => evaluate(state),
        Action::ApplyFunction(function) => apply_function(state, function),
        Action::InsertConstant(constant) => {
            with_calculator(state, |calc| calc.insert_constant(constant))
        }
        Action::AppendConstant(constant) => {
            edit_expression(state, |calc| calc.append(&constant.literal()))
        }
        Action::LoadExample => with_calculator(state, |calc| calc.load_example()),
        Action::ClearAll => {
            let mut state = with_calculator(state, |calc| calc.clear_all());
            state.history_cursor = None;
            state
        }

        // === History ===
        Action::HistoryUp => {
            let len = state.calculator.history().len();
            let history_cursor = match state.history_cursor {
                _ if len == 0 => None,
                None => Some(0),
                Some(i) => Some(i.saturating_sub(1)),
            };
            AppState {
                history_cursor,
                ..state
            }
        }

        Action::HistoryDown => {
            let len = state.calculator.history().len();
            let history_cursor = match state.history_cursor {
                _ if len == 0 => None,
                None => Some(0),
                Some(i) => Some((i + 1).min(len - 1)),
            };
            AppState {
                history_cursor,
                ..state
            }
        }

        Action::ReuseHistory => reuse_history(state),
        Action::DeleteHistory => delete_history(state),
        Action::ClearHistory => {
            let mut state = with_calculator(state, |calc| calc.clear_history());
            state.history_cursor = None;
            state
        }

        // === Forms ===
        Action::FocusNext => move_focus(state, true),
        Action::FocusPrev => move_focus(state, false),
        Action::FieldInput(ch) => edit_field(state, |field| field.push(ch)),
        Action::FieldBackspace => edit_field(state, |field| {
            field.pop();
        }),
        Action::CycleOption { forward } => cycle_option(state, forward),
        Action::Submit => submit(state),
        Action::ResetForm => reset_form(state),

        // === Age ===
        Action::AgeRequested => AppState {
            age: AgeForm {
                pending: true,
                ..state.age
            },
            ..state
        },

        Action::AgeCalculate { today } => calculate_age_form(state, today),

        // === Status Bar ===
        Action::SetStatus(message) => AppState {
            status: StatusBarState {
                message: Some(message),
            },
            ..state
        },

        Action::ClearStatus => AppState {
            status: StatusBarState { message: None },
            ..state
        },
    }
}

fn with_calculator(
    mut state: AppState,
    edit: impl FnOnce(&mut libcalcdeck::Calculator),
) -> AppState {
    edit(&mut state.calculator);
    state
}

/// Buffer edits drop any status left by the previous evaluation
fn edit_expression(
    state: AppState,
    edit: impl FnOnce(&mut libcalcdeck::Calculator),
) -> AppState {
    let mut state = with_calculator(state, edit);
    state.status.message = None;
    state
}

fn evaluate(mut state: AppState) -> AppState {
    match state.calculator.evaluate() {
        Ok(_) => {
            // Indices shifted by the new entry
            state.history_cursor = None;
            state.status.message = None;
        }
        Err(CalcError::Malformed(ParseError::Empty)) => {}
        Err(e) => state.status.message = Some(e.to_string()),
    }
    state
}

fn apply_function(mut state: AppState, function: UnaryFunction) -> AppState {
    match state.calculator.apply_function(function) {
        Ok(_) => {
            state.history_cursor = None;
            state.status.message = None;
        }
        Err(e) => state.status.message = Some(format!("{}: {}", function.history_name(), e)),
    }
    state
}

fn reuse_history(mut state: AppState) -> AppState {
    let reused = state
        .history_cursor
        .map(|index| state.calculator.reuse(index))
        .unwrap_or(false);
    if !reused {
        state.status.message = Some("Select a history entry first".to_string());
    }
    state
}

fn delete_history(mut state: AppState) -> AppState {
    let index = match state.history_cursor {
        Some(index) => index,
        None => {
            state.status.message = Some("Select a history entry first".to_string());
            return state;
        }
    };

    state.calculator.remove_history(index);
    let len = state.calculator.history().len();
    state.history_cursor = if len == 0 {
        None
    } else {
        Some(index.min(len - 1))
    };
    state
}

/// Record a form result in history when configured to
fn record_result(state: &mut AppState, expr: String, res: String) {
    if state.config.record_domain_results {
        state.calculator.record(expr, res);
        state.history_cursor = None;
    }
}

fn move_focus(mut state: AppState, forward: bool) -> AppState {
    let (focus, fields) = match state.form_focus() {
        Some(focus) => focus,
        None => return state,
    };

    let next = if forward {
        (focus + 1) % fields
    } else {
        (focus + fields - 1) % fields
    };

    match state.mode {
        Mode::Emi => state.emi.focus = next,
        Mode::Converter => state.converter.focus = next,
        Mode::Age => state.age.focus = next,
        Mode::Date => state.date.focus = next,
        Mode::Basic | Mode::Scientific => {}
    }
    state
}

fn edit_field(mut state: AppState, edit: impl FnOnce(&mut String)) -> AppState {
    let field = match state.mode {
        Mode::Emi => state.emi.focused_field(),
        Mode::Converter => state.converter.focused_field(),
        Mode::Age => state.age.focused_field(),
        Mode::Date => state.date.focused_field(),
        Mode::Basic | Mode::Scientific => None,
    };
    if let Some(field) = field {
        edit(field);
    }
    state
}

fn cycle_option(mut state: AppState, forward: bool) -> AppState {
    match (state.mode, state.form_focus()) {
        (Mode::Converter, Some((1, _))) => {
            let unit = state.converter.from;
            state.converter.from = if forward { unit.next() } else { unit.prev() };
        }
        (Mode::Converter, Some((2, _))) => {
            let unit = state.converter.to;
            state.converter.to = if forward { unit.next() } else { unit.prev() };
        }
        (Mode::Date, Some((1, _))) => {
            let system = state.date.system;
            state.date.system = if forward { system.next() } else { system.prev() };
        }
        _ => {}
    }
    state
}

fn submit(state: AppState) -> AppState {
    match state.mode {
        Mode::Emi => submit_emi(state),
        Mode::Converter => submit_conversion(state),
        Mode::Age => reduce(state, Action::AgeRequested),
        Mode::Date => submit_date(state),
        Mode::Basic | Mode::Scientific => state,
    }
}

fn submit_emi(mut state: AppState) -> AppState {
    let outcome = state.emi.inputs().and_then(|inputs| {
        inputs
            .calculate()
            .map(|result| (inputs, result))
            .map_err(|e| e.to_string())
    });

    match outcome {
        Ok((inputs, result)) => {
            debug!(
                principal = inputs.principal,
                rate = inputs.rate,
                tenure = inputs.tenure,
                emi = result.emi,
                "loan calculated"
            );
            state.emi.result = Some(result);
            state.emi.error = None;
            let expr = format!(
                "EMI({}, {}%, {}m)",
                format_number(inputs.principal),
                format_number(inputs.rate),
                inputs.tenure
            );
            record_result(&mut state, expr, format_number(result.emi));
        }
        Err(message) => {
            state.emi.result = None;
            state.emi.error = Some(message);
        }
    }
    state
}

fn submit_conversion(mut state: AppState) -> AppState {
    let (from, to) = (state.converter.from, state.converter.to);
    let result = convert_length_input(&state.converter.value, from, to);
    state.converter.result = Some(result);

    if let ConversionResult::Value(_) = result {
        let arrow = if state.config.unicode_enabled { "→" } else { "->" };
        let expr = format!("{} {} {} {}", state.converter.value.trim(), from, arrow, to);
        record_result(&mut state, expr, result.to_string());
    }
    state
}

fn submit_date(mut state: AppState) -> AppState {
    let system = state.date.system;
    let result = convert_date_input(&state.date.input, system);

    if result != INVALID_DATE_MARKER {
        let expr = format!("{}({})", system.name(), state.date.input.trim());
        record_result(&mut state, expr, result.clone());
    }
    state.date.result = Some(result);
    state
}

fn calculate_age_form(mut state: AppState, today: NaiveDate) -> AppState {
    state.age.pending = false;

    match parse_date(&state.age.birth).and_then(|birth| calculate_age(birth, today)) {
        Ok(age) => {
            state.age.result = Some(age);
            state.age.error = None;
            let expr = format!("age({})", state.age.birth.trim());
            let res = format!("{}y {}m {}d", age.years, age.months, age.days);
            record_result(&mut state, expr, res);
        }
        Err(e) => {
            state.age.result = None;
            state.age.error = Some(e.to_string());
        }
    }
    state
}

fn reset_form(state: AppState) -> AppState {
    match state.mode {
        Mode::Emi => AppState {
            emi: EmiForm::from_inputs(&state.config.emi_defaults),
            ..state
        },
        Mode::Converter => AppState {
            converter: ConverterForm::from_defaults(&state.config.converter_defaults),
            ..state
        },
        Mode::Age => AppState {
            age: AgeForm::default(),
            ..state
        },
        Mode::Date => AppState {
            date: DateForm::default(),
            ..state
        },
        Mode::Basic | Mode::Scientific => state,
    }
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        (KeyCode::Char('c') | KeyCode::Char('q'), modifiers)
            if modifiers.contains(KeyModifiers::CONTROL) =>
        {
            return reduce(state, Action::Quit);
        }

        (KeyCode::F(1), _) => {
            let action = if state.help_visible {
                Action::HideHelp
            } else {
                Action::ShowHelp
            };
            return reduce(state, action);
        }

        (KeyCode::F(n), _) => {
            return match Mode::from_function_key(n) {
                Some(mode) => reduce(state, Action::SwitchMode(mode)),
                None => state,
            };
        }

        (KeyCode::Esc, _) if state.help_visible => {
            return reduce(state, Action::HideHelp);
        }

        _ => {}
    }

    if state.help_visible {
        return state;
    }

    if state.mode.is_expression() {
        handle_expression_key(state, key)
    } else {
        handle_form_key(state, key)
    }
}

/// Basic and scientific modes
fn handle_expression_key(state: AppState, key: KeyEvent) -> AppState {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return state;
    }

    let action = match key.code {
        KeyCode::Char(c) if EXPRESSION_CHARS.contains(c) => Action::Append(c.to_string()),
        KeyCode::Enter | KeyCode::Char('=') => Action::Evaluate,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Esc => Action::ClearExpression,
        KeyCode::Char('q') => Action::Quit,

        KeyCode::Up => Action::HistoryUp,
        KeyCode::Down => Action::HistoryDown,
        KeyCode::Char('u') => Action::ReuseHistory,
        KeyCode::Delete | KeyCode::Char('d') => Action::DeleteHistory,
        KeyCode::Char('X') => Action::ClearHistory,

        KeyCode::Char('P') => Action::InsertConstant(Constant::Pi),
        KeyCode::Char('E') => Action::InsertConstant(Constant::E),
        KeyCode::Char('x') => Action::LoadExample,
        KeyCode::Char('C') => Action::ClearAll,

        KeyCode::Char('p') if state.mode == Mode::Scientific => {
            Action::AppendConstant(Constant::Pi)
        }
        KeyCode::Char(c) if state.mode == Mode::Scientific => match scientific_function(c) {
            Some(function) => Action::ApplyFunction(function),
            None => return state,
        },

        _ => return state,
    };

    reduce(state, action)
}

/// Scientific function bound to a key
pub fn scientific_function(key: char) -> Option<UnaryFunction> {
    match key {
        's' => Some(UnaryFunction::Sin),
        'c' => Some(UnaryFunction::Cos),
        't' => Some(UnaryFunction::Tan),
        'l' => Some(UnaryFunction::Ln),
        'g' => Some(UnaryFunction::Log10),
        'w' => Some(UnaryFunction::Square),
        'r' => Some(UnaryFunction::Sqrt),
        '!' => Some(UnaryFunction::Factorial),
        _ => None,
    }
}

/// EMI, converter, age and date modes
fn handle_form_key(state: AppState, key: KeyEvent) -> AppState {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return state;
    }

    let action = match key.code {
        KeyCode::Tab | KeyCode::Down => Action::FocusNext,
        KeyCode::BackTab | KeyCode::Up => Action::FocusPrev,
        KeyCode::Left => Action::CycleOption { forward: false },
        KeyCode::Right => Action::CycleOption { forward: true },
        KeyCode::Enter => Action::Submit,
        KeyCode::Esc => Action::ResetForm,
        KeyCode::Backspace => Action::FieldBackspace,
        KeyCode::Char(c) => Action::FieldInput(c),
        _ => return state,
    };

    reduce(state, action)
}
