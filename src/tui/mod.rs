//! Terminal frontend for the calculator panel
//!
//! Wires the core state machine to a ratatui interface: a two-line
//! display, a clickable keypad grid, and keyboard shortcuts.

pub mod app;
pub mod input;
pub mod keypad;
pub mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{Keypad, KeypadButton, KeypadWidget};
pub use ui::{render, CalculatorUi};
