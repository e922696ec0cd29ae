//! Calculator flow through the reducer
//!
//! Expression editing, evaluation, scientific functions and history
//! bookkeeping as seen from the application state.

use calcdeck_tui::app::{reduce, Action, AppState, Mode};
use libcalcdeck::{Constant, UnaryFunction, HISTORY_CAPACITY};

fn evaluate(state: AppState, expr: &str) -> AppState {
    let state = reduce(state, Action::ClearExpression);
    let state = reduce(state, Action::Append(expr.to_string()));
    reduce(state, Action::Evaluate)
}

#[test]
fn test_append_clears_previous_result() {
    let state = evaluate(AppState::new(), "2*21");
    assert_eq!(state.calculator.result(), Some("42"));

    let state = reduce(state, Action::Append("+1".to_string()));
    assert!(state.calculator.result().is_none());
    assert_eq!(state.calculator.expression(), "2*21+1");
}

#[test]
fn test_error_marker_and_no_history() {
    let state = evaluate(AppState::new(), "2+*3");
    assert_eq!(state.calculator.result(), Some("Error"));
    assert!(state.calculator.history().is_empty());
    assert!(state.status.message.is_some());
}

#[test]
fn test_successful_evaluation_clears_status() {
    let state = evaluate(AppState::new(), "1/0");
    assert!(state.status.message.is_some());

    let state = evaluate(state, "1/4");
    assert_eq!(state.calculator.result(), Some("0.25"));
    assert!(state.status.message.is_none());
}

#[test]
fn test_history_is_capped() {
    let mut state = AppState::new();
    for i in 0..(HISTORY_CAPACITY + 5) {
        state = evaluate(state, &format!("{}+0", i));
    }

    assert_eq!(state.calculator.history().len(), HISTORY_CAPACITY);
    assert_eq!(state.calculator.history().get(0).unwrap().expr, "54+0");
}

#[test]
fn test_apply_function_on_empty_buffer_uses_zero() {
    let state = reduce(AppState::new(), Action::SwitchMode(Mode::Scientific));
    let state = reduce(state, Action::ApplyFunction(UnaryFunction::Cos));

    assert_eq!(state.calculator.expression(), "1");
    let entry = state.calculator.history().get(0).unwrap();
    assert_eq!(entry.expr, "cos(0)");
    assert_eq!(entry.res, "1");
}

#[test]
fn test_factorial_of_negative_is_error() {
    let state = reduce(AppState::new(), Action::Append("-3".to_string()));
    let state = reduce(state, Action::ApplyFunction(UnaryFunction::Factorial));

    assert_eq!(state.calculator.result(), Some("Error"));
    assert_eq!(state.calculator.expression(), "-3");
    assert!(state.calculator.history().is_empty());
    assert!(state.status.message.unwrap().starts_with("fact"));
}

#[test]
fn test_factorial_floors_input() {
    let state = reduce(AppState::new(), Action::Append("5.7".to_string()));
    let state = reduce(state, Action::ApplyFunction(UnaryFunction::Factorial));

    assert_eq!(state.calculator.result(), Some("120"));
    assert_eq!(state.calculator.history().get(0).unwrap().expr, "fact(5.7)");
}

#[test]
fn test_constant_then_evaluate_is_stable() {
    let state = reduce(AppState::new(), Action::InsertConstant(Constant::Pi));
    let shown = state.calculator.result().unwrap().to_string();

    let state = reduce(state, Action::Evaluate);
    assert_eq!(state.calculator.result(), Some(shown.as_str()));
}

#[test]
fn test_reused_entry_reevaluates_to_same_result() {
    let state = evaluate(AppState::new(), "0.1+0.2");
    let stored = state.calculator.history().get(0).unwrap().res.clone();

    let state = reduce(state, Action::ClearExpression);
    let state = reduce(state, Action::HistoryDown);
    let state = reduce(state, Action::ReuseHistory);
    assert_eq!(state.calculator.expression(), "0.1+0.2");

    let state = reduce(state, Action::Evaluate);
    assert_eq!(state.calculator.result(), Some(stored.as_str()));
}

#[test]
fn test_load_example_then_clear_all() {
    let state = evaluate(AppState::new(), "3*3");
    let state = reduce(state, Action::LoadExample);
    assert_eq!(state.calculator.expression(), "(1+1)/2");
    assert!(state.calculator.result().is_none());

    let state = reduce(state, Action::ClearAll);
    assert_eq!(state.calculator.expression(), "");
    assert!(state.calculator.history().is_empty());
}

#[test]
fn test_mode_switch_keeps_expression() {
    let state = reduce(AppState::new(), Action::Append("12".to_string()));
    let state = reduce(state, Action::SwitchMode(Mode::Age));
    let state = reduce(state, Action::SwitchMode(Mode::Basic));
    assert_eq!(state.calculator.expression(), "12");
}
