//! TUI application state
//!
//! A thin shell around the core state machine: it adds nothing but the quit
//! flag and a pressed-key highlight for the keypad widget.

use crate::core::{ButtonEvent, CalculatorState, DisplaySnapshot};

/// Calculator application state for the terminal frontend
#[derive(Debug, Default)]
pub struct CalculatorApp {
    state: CalculatorState,
    /// Label of the most recently pressed button, for keypad highlighting
    last_pressed: Option<String>,
    should_quit: bool,
}

impl CalculatorApp {
    /// Creates an app in the all-clear configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatches one button event into the calculator
    pub fn handle_event(&mut self, event: ButtonEvent) {
        self.last_pressed = Some(event.label());
        self.state.handle(event);
    }

    /// The underlying calculator state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// The two display lines to render
    #[must_use]
    pub fn snapshot(&self) -> DisplaySnapshot {
        self.state.snapshot()
    }

    /// Label of the last button pressed, if any
    #[must_use]
    pub fn last_pressed(&self) -> Option<&str> {
        self.last_pressed.as_deref()
    }

    /// Clears the pressed-button highlight
    pub fn release_keys(&mut self) {
        self.last_pressed = None;
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
