//! Application state
//!
//! Plain data owned by the main loop. All state transitions happen through
//! the reducer (see `reducer.rs`).

use libcalcdeck::config::{Config, ConverterDefaults};
use libcalcdeck::domain::{
    AgeResult, CalendarSystem, ConversionResult, EmiInputs, EmiResult, LengthUnit,
};
use libcalcdeck::{format_number, Calculator};

use super::actions::Mode;

/// Root application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Active calculator mode
    pub mode: Mode,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Expression buffer, displayed result and history
    pub calculator: Calculator,

    /// Selected history entry, 0 is the newest
    pub history_cursor: Option<usize>,

    pub emi: EmiForm,

    pub converter: ConverterForm,

    pub age: AgeForm,

    pub date: DateForm,

    pub status: StatusBarState,

    pub config: UiConfig,
}

/// Loan form: principal, annual rate and tenure in months
#[derive(Debug, Clone, PartialEq)]
pub struct EmiForm {
    pub principal: String,
    pub rate: String,
    pub tenure: String,
    pub focus: usize,
    pub result: Option<EmiResult>,
    pub error: Option<String>,
}

/// Length converter form: value text plus two unit selectors
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterForm {
    pub value: String,
    pub from: LengthUnit,
    pub to: LengthUnit,
    pub focus: usize,
    pub result: Option<ConversionResult>,
}

/// Age form: birth date as `YYYY-MM-DD`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgeForm {
    pub birth: String,
    pub focus: usize,
    /// Waiting for today's date from the main loop
    pub pending: bool,
    pub result: Option<AgeResult>,
    pub error: Option<String>,
}

/// Calendar conversion form: date text plus a calendar selector
#[derive(Debug, Clone, PartialEq)]
pub struct DateForm {
    pub input: String,
    pub system: CalendarSystem,
    pub focus: usize,
    pub result: Option<String>,
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    pub message: Option<String>,
}

/// UI configuration resolved from the config file and environment
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Use unicode symbols (false = ASCII fallback)
    pub unicode_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,

    /// Also record form results in history
    pub record_domain_results: bool,

    /// Loan form values restored on reset
    pub emi_defaults: EmiInputs,

    /// Converter form values restored on reset
    pub converter_defaults: ConverterDefaults,
}

impl EmiForm {
    pub const FIELDS: usize = 3;

    pub fn from_inputs(inputs: &EmiInputs) -> Self {
        Self {
            principal: format_number(inputs.principal),
            rate: format_number(inputs.rate),
            tenure: inputs.tenure.to_string(),
            focus: 0,
            result: None,
            error: None,
        }
    }

    /// Focused text field
    pub fn focused_field(&mut self) -> Option<&mut String> {
        match self.focus {
            0 => Some(&mut self.principal),
            1 => Some(&mut self.rate),
            2 => Some(&mut self.tenure),
            _ => None,
        }
    }

    /// Parse the typed values
    pub fn inputs(&self) -> Result<EmiInputs, String> {
        let principal = parse_field(&self.principal, "Loan amount")?;
        let rate = parse_field(&self.rate, "Interest rate")?;
        let tenure = self
            .tenure
            .trim()
            .parse::<u32>()
            .map_err(|_| format!("Tenure '{}' is not a whole number of months", self.tenure.trim()))?;
        Ok(EmiInputs {
            principal,
            rate,
            tenure,
        })
    }
}

fn parse_field(text: &str, name: &str) -> Result<f64, String> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| format!("{} '{}' is not a number", name, text.trim()))
}

impl ConverterForm {
    pub const FIELDS: usize = 3;

    pub fn from_defaults(defaults: &ConverterDefaults) -> Self {
        Self {
            value: format_number(defaults.value),
            from: defaults.from,
            to: defaults.to,
            focus: 0,
            result: None,
        }
    }

    pub fn focused_field(&mut self) -> Option<&mut String> {
        match self.focus {
            0 => Some(&mut self.value),
            _ => None,
        }
    }
}

impl AgeForm {
    pub const FIELDS: usize = 1;

    pub fn focused_field(&mut self) -> Option<&mut String> {
        match self.focus {
            0 => Some(&mut self.birth),
            _ => None,
        }
    }
}

impl DateForm {
    pub const FIELDS: usize = 2;

    pub fn focused_field(&mut self) -> Option<&mut String> {
        match self.focus {
            0 => Some(&mut self.input),
            _ => None,
        }
    }
}

impl Default for DateForm {
    fn default() -> Self {
        Self {
            input: String::new(),
            system: CalendarSystem::Gregorian,
            focus: 0,
            result: None,
        }
    }
}

impl UiConfig {
    /// Resolve from the config file, letting environment variables win
    ///
    /// Respects `NO_COLOR`, `CALCDECK_NO_COLOR` and `CALCDECK_TICK_MS`.
    pub fn from_config(config: &Config) -> Self {
        let no_color =
            std::env::var("NO_COLOR").is_ok() || std::env::var("CALCDECK_NO_COLOR").is_ok();
        let colors_enabled = config.ui.colors && !no_color;

        let tick_rate_ms = std::env::var("CALCDECK_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(config.ui.tick_rate_ms);

        Self {
            colors_enabled,
            unicode_enabled: config.ui.unicode,
            tick_rate_ms,
            record_domain_results: config.history.record_domain_results,
            emi_defaults: config.emi,
            converter_defaults: config.converter.clone(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        let ui = UiConfig::from_config(config);
        Self {
            should_quit: false,
            mode: Mode::Basic,
            help_visible: false,
            calculator: Calculator::new(),
            history_cursor: None,
            emi: EmiForm::from_inputs(&ui.emi_defaults),
            converter: ConverterForm::from_defaults(&ui.converter_defaults),
            age: AgeForm::default(),
            date: DateForm::default(),
            status: StatusBarState::default(),
            config: ui,
        }
    }

    /// Focused field index and field count of the active form
    pub fn form_focus(&self) -> Option<(usize, usize)> {
        match self.mode {
            Mode::Emi => Some((self.emi.focus, EmiForm::FIELDS)),
            Mode::Converter => Some((self.converter.focus, ConverterForm::FIELDS)),
            Mode::Age => Some((self.age.focus, AgeForm::FIELDS)),
            Mode::Date => Some((self.date.focus, DateForm::FIELDS)),
            Mode::Basic | Mode::Scientific => None,
        }
    }
}
