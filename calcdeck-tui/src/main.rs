//! calcdeck-tui - Terminal UI for Calcdeck
//!
//! Basic and scientific calculator with history, plus loan, length, age and
//! calendar tools, all driven from the keyboard.

use anyhow::Context;
use calcdeck_tui::{
    app::{event::EventHandler, reduce, Action, AppState},
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};
use libcalcdeck::config::Config;
use libcalcdeck::logging::LoggingConfig;

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    // The UI owns the terminal, so logs only go to a configured file
    let logging = LoggingConfig::from_config(&config).context("Invalid logging configuration")?;
    if logging.file.is_some() {
        logging.init().context("Failed to initialize logging")?;
    }

    install_panic_hook();

    let mut terminal = setup_terminal().context("Failed to set up terminal")?;
    let result = run_app(&mut terminal, &config);
    restore_terminal(terminal).context("Failed to restore terminal")?;

    result?;
    Ok(())
}

fn run_app(terminal: &mut Tui, config: &Config) -> calcdeck_tui::Result<()> {
    let mut state = AppState::from_config(config);
    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    tracing::info!(
        tick_rate_ms = state.config.tick_rate_ms,
        colors = state.config.colors_enabled,
        "calcdeck started"
    );

    loop {
        terminal.draw(|frame| ui::render(frame, &state))?;

        let event = event_handler.next()?;
        state = reduce(state, event.into());

        // The reducer never reads the clock
        if state.age.pending {
            let today = chrono::Local::now().date_naive();
            state = reduce(state, Action::AgeCalculate { today });
        }

        if state.should_quit {
            break;
        }
    }

    tracing::info!(entries = state.calculator.history().len(), "calcdeck exiting");
    Ok(())
}
