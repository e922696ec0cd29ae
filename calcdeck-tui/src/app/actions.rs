//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. Key events are mapped to
//! the higher-level actions below by the reducer's keymap.

use chrono::NaiveDate;
use crossterm::event::KeyEvent;
use libcalcdeck::{Constant, UnaryFunction};

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Switch the active calculator mode
    SwitchMode(Mode),

    Quit,

    ShowHelp,

    HideHelp,

    // === Expression ===
    /// Append a token to the expression
    Append(String),

    /// Delete the last character of the expression
    Backspace,

    /// Empty the expression and the displayed result
    ClearExpression,

    /// Evaluate the expression
    Evaluate,

    /// Apply a scientific function to the current value
    ApplyFunction(UnaryFunction),

    /// Replace the expression with a constant
    InsertConstant(Constant),

    /// Append a constant's digits to the expression
    AppendConstant(Constant),

    /// Load the sample expression
    LoadExample,

    /// Clear expression, result and history
    ClearAll,

    // === History ===
    /// Move the selection towards newer entries
    HistoryUp,

    /// Move the selection towards older entries
    HistoryDown,

    /// Copy the selected entry back onto the display
    ReuseHistory,

    /// Delete the selected entry
    DeleteHistory,

    /// Delete every entry
    ClearHistory,

    // === Forms ===
    FocusNext,

    FocusPrev,

    /// Type a character into the focused text field
    FieldInput(char),

    /// Delete the last character of the focused text field
    FieldBackspace,

    /// Step the focused selector field
    CycleOption { forward: bool },

    /// Calculate the active form
    Submit,

    /// Restore the active form's initial values
    ResetForm,

    // === Age ===
    /// Age calculation requested; the caller answers with `AgeCalculate`
    AgeRequested,

    /// Calculate the age relative to `today`
    AgeCalculate { today: NaiveDate },

    // === Status Bar ===
    SetStatus(String),

    ClearStatus,
}

/// Calculator mode, one panel per mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Basic,
    Scientific,
    Emi,
    Converter,
    Age,
    Date,
}

impl Mode {
    pub const ALL: [Mode; 6] = [
        Mode::Basic,
        Mode::Scientific,
        Mode::Emi,
        Mode::Converter,
        Mode::Age,
        Mode::Date,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Mode::Basic => "Basic",
            Mode::Scientific => "Scientific",
            Mode::Emi => "EMI",
            Mode::Converter => "Converter",
            Mode::Age => "Age",
            Mode::Date => "Date",
        }
    }

    /// Modes that edit the expression buffer
    pub fn is_expression(self) -> bool {
        matches!(self, Mode::Basic | Mode::Scientific)
    }

    /// Mode selected by function key `F<n>`, F2 through F7
    pub fn from_function_key(n: u8) -> Option<Mode> {
        match n {
            2..=7 => Some(Self::ALL[usize::from(n - 2)]),
            _ => None,
        }
    }
}
