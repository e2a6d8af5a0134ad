//! Core calculator state machine
//!
//! Everything here is synchronous, allocation-light, and free of I/O: the
//! state machine consumes button events and produces display text, nothing
//! else.

mod event;
mod format;
mod operator;
mod state;

pub use event::ButtonEvent;
pub use format::{format_operand, stringify_number};
pub use operator::Operator;
pub use state::{CalculatorState, DisplaySnapshot};
