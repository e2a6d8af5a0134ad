//! Keypad calculator: a button-panel state machine with a text display
//!
//! The calculator accumulates operands as text, one button press at a
//! time, and renders a two-line display: the pending equation on top and
//! the operand being typed below. Invalid presses are silent no-ops, so
//! any button sequence is safe to feed in.
//!
//! # Example
//!
//! ```
//! use keypad_calculator::prelude::*;
//!
//! let mut state = CalculatorState::new();
//! state.handle(ButtonEvent::Digit(2));
//! state.handle(ButtonEvent::Operator(Operator::Add));
//! state.handle(ButtonEvent::Digit(3));
//! state.handle(ButtonEvent::Equals);
//!
//! let snapshot = state.snapshot();
//! assert_eq!(snapshot.previous_line, "2 + 3 =");
//! assert_eq!(state.previous_operand(), "5");
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod core;
pub mod driver;
pub mod panel;

#[cfg(feature = "tui")]
pub mod tui;

pub use crate::core::{
    format_operand, stringify_number, ButtonEvent, CalculatorState, DisplaySnapshot, Operator,
};
pub use crate::driver::PanelDriver;
pub use crate::panel::{PanelAdapter, ScriptError, TextPanel};

/// Common imports for building on the calculator
pub mod prelude {
    pub use crate::core::{
        format_operand, stringify_number, ButtonEvent, CalculatorState, DisplaySnapshot, Operator,
    };
    pub use crate::driver::PanelDriver;
    pub use crate::panel::{PanelAdapter, ScriptError, TextPanel};

    #[cfg(feature = "tui")]
    pub use crate::tui::{CalculatorApp, InputHandler, KeyAction, Keypad};
}
