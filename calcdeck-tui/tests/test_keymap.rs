//! Test keybinding mappings to actions
//!
//! Verifies that keyboard input is correctly mapped to actions
//! through the reducer.

use calcdeck_tui::app::{reduce, Action, AppState, Mode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

fn press(state: AppState, code: KeyCode) -> AppState {
    reduce(state, Action::Key(key_event(code, KeyModifiers::NONE)))
}

fn type_chars(state: AppState, text: &str) -> AppState {
    text.chars().fold(state, |state, c| press(state, KeyCode::Char(c)))
}

#[test]
fn test_ctrl_c_and_ctrl_q_quit() {
    for c in ['c', 'q'] {
        let key = key_event(KeyCode::Char(c), KeyModifiers::CONTROL);
        let state = reduce(AppState::new(), Action::Key(key));
        assert!(state.should_quit);
    }
}

#[test]
fn test_q_quits_in_expression_mode() {
    let state = press(AppState::new(), KeyCode::Char('q'));
    assert!(state.should_quit);
}

#[test]
fn test_q_is_typed_in_form_mode() {
    let state = reduce(AppState::new(), Action::SwitchMode(Mode::Converter));
    let state = press(state, KeyCode::Char('q'));

    assert!(!state.should_quit);
    assert_eq!(state.converter.value, "1q");
}

#[test]
fn test_f1_toggles_help() {
    let state = AppState::new();
    assert!(!state.help_visible);

    let state = press(state, KeyCode::F(1));
    assert!(state.help_visible);

    let state = press(state, KeyCode::F(1));
    assert!(!state.help_visible);
}

#[test]
fn test_function_keys_select_modes() {
    let expected = [
        (2, Mode::Basic),
        (3, Mode::Scientific),
        (4, Mode::Emi),
        (5, Mode::Converter),
        (6, Mode::Age),
        (7, Mode::Date),
    ];
    for (n, mode) in expected {
        let state = press(AppState::new(), KeyCode::F(n));
        assert_eq!(state.mode, mode);
    }

    let state = press(AppState::new(), KeyCode::F(9));
    assert_eq!(state.mode, Mode::Basic);
}

#[test]
fn test_esc_hides_help_before_clearing() {
    let state = type_chars(AppState::new(), "12");
    let state = reduce(state, Action::ShowHelp);

    let state = press(state, KeyCode::Esc);
    assert!(!state.help_visible);
    assert_eq!(state.calculator.expression(), "12");

    let state = press(state, KeyCode::Esc);
    assert_eq!(state.calculator.expression(), "");
}

#[test]
fn test_keys_ignored_while_help_is_open() {
    let state = reduce(AppState::new(), Action::ShowHelp);
    let state = type_chars(state, "12");
    assert_eq!(state.calculator.expression(), "");
}

#[test]
fn test_typing_and_enter_evaluates() {
    let state = type_chars(AppState::new(), "(1+2)*3^2");
    assert_eq!(state.calculator.expression(), "(1+2)*3^2");

    let state = press(state, KeyCode::Enter);
    assert_eq!(state.calculator.result(), Some("27"));
}

#[test]
fn test_equals_key_evaluates() {
    let state = type_chars(AppState::new(), "7%4=");
    assert_eq!(state.calculator.result(), Some("3"));
}

#[test]
fn test_exponent_marker_is_typed() {
    let state = type_chars(AppState::new(), "1e3+1=");
    assert_eq!(state.calculator.result(), Some("1001"));
}

#[test]
fn test_backspace_removes_last_character() {
    let state = type_chars(AppState::new(), "123");
    let state = press(state, KeyCode::Backspace);
    assert_eq!(state.calculator.expression(), "12");
}

#[test]
fn test_letters_are_not_typed_into_expression() {
    let state = type_chars(AppState::new(), "1a");
    assert_eq!(state.calculator.expression(), "1");
}

#[test]
fn test_scientific_keys_only_in_scientific_mode() {
    let state = type_chars(AppState::new(), "9r");
    assert_eq!(state.calculator.expression(), "9");
    assert!(state.calculator.history().is_empty());

    let state = press(state, KeyCode::F(3));
    let state = press(state, KeyCode::Char('r'));
    assert_eq!(state.calculator.expression(), "3");
    assert_eq!(state.calculator.history().get(0).unwrap().expr, "sqrt(9)");
}

#[test]
fn test_quick_action_keys() {
    let state = press(AppState::new(), KeyCode::Char('x'));
    assert_eq!(state.calculator.expression(), "(1+1)/2");

    let state = press(state, KeyCode::Char('P'));
    assert_eq!(state.calculator.expression(), "3.141592653589793");

    let state = press(state, KeyCode::Char('E'));
    assert_eq!(state.calculator.expression(), "2.718281828459045");

    let state = press(state, KeyCode::Enter);
    assert_eq!(state.calculator.history().len(), 1);

    let state = press(state, KeyCode::Char('C'));
    assert_eq!(state.calculator.expression(), "");
    assert!(state.calculator.history().is_empty());
}

#[test]
fn test_history_keys() {
    let state = type_chars(AppState::new(), "1+1=");
    let state = press(state, KeyCode::Esc);
    let state = type_chars(state, "2*3=");
    let state = press(state, KeyCode::Esc);

    // Newest first: select the older entry and reuse it
    let state = press(state, KeyCode::Down);
    let state = press(state, KeyCode::Down);
    assert_eq!(state.history_cursor, Some(1));

    let state = press(state, KeyCode::Char('u'));
    assert_eq!(state.calculator.expression(), "1+1");
    assert_eq!(state.calculator.result(), Some("2"));

    let state = press(state, KeyCode::Char('d'));
    assert_eq!(state.calculator.history().len(), 1);
    assert_eq!(state.calculator.history().get(0).unwrap().expr, "2*3");

    let state = press(state, KeyCode::Char('X'));
    assert!(state.calculator.history().is_empty());
    assert_eq!(state.history_cursor, None);
}

#[test]
fn test_delete_key_removes_selected_entry() {
    let state = type_chars(AppState::new(), "4=");
    let state = press(state, KeyCode::Up);
    let state = press(state, KeyCode::Delete);
    assert!(state.calculator.history().is_empty());
}

#[test]
fn test_reuse_without_selection_sets_status() {
    let state = type_chars(AppState::new(), "4=");
    let state = press(state, KeyCode::Char('u'));
    assert!(state.status.message.is_some());
}

#[test]
fn test_form_keys() {
    let state = reduce(AppState::new(), Action::SwitchMode(Mode::Date));

    let state = type_chars(state, "2026-10-19");
    let state = press(state, KeyCode::Tab);
    assert_eq!(state.date.focus, 1);

    let state = press(state, KeyCode::Right);
    let state = press(state, KeyCode::Enter);
    assert_eq!(
        state.date.result.as_deref(),
        Some("Monday, Jumada al-Awwal 7, 1448 AH")
    );

    let state = press(state, KeyCode::BackTab);
    let state = press(state, KeyCode::Backspace);
    assert_eq!(state.date.input, "2026-10-1");

    let state = press(state, KeyCode::Esc);
    assert_eq!(state.date.input, "");
    assert!(state.date.result.is_none());
}

#[test]
fn test_expression_keys_ignored_in_form_modes() {
    let state = reduce(AppState::new(), Action::SwitchMode(Mode::Emi));
    let state = press(state, KeyCode::Char('x'));
    assert_eq!(state.calculator.expression(), "");
}

#[test]
fn test_p_appends_pi_in_scientific_mode() {
    let state = reduce(AppState::new(), Action::SwitchMode(Mode::Scientific));
    let state = type_chars(state, "2*");
    let state = press(state, KeyCode::Char('p'));
    assert_eq!(state.calculator.expression(), "2*3.141592653589793");

    let state = press(state, KeyCode::Enter);
    assert_eq!(state.calculator.result(), Some("6.283185307179586"));
}

#[test]
fn test_p_is_ignored_in_basic_mode() {
    let state = type_chars(AppState::new(), "2*p");
    assert_eq!(state.calculator.expression(), "2*");
}
