//! Unified panel driver
//!
//! One abstract trait over "press a button, read the display" lets the same
//! verification suite run against the plain panel adapter and the TUI app.

use crate::core::{ButtonEvent, DisplaySnapshot, Operator};
use crate::panel::PanelAdapter;

/// Abstract driver for button-panel interactions.
///
/// Implementations route presses into a calculator however their frontend
/// does and expose the resulting display snapshot.
pub trait PanelDriver {
    /// Presses one button
    fn press(&mut self, event: ButtonEvent);

    /// Reads the current two-line display
    fn snapshot(&self) -> DisplaySnapshot;

    /// Presses a digit button
    fn press_digit(&mut self, digit: u8) {
        self.press(ButtonEvent::Digit(digit));
    }

    /// Presses an operator button
    fn press_operator(&mut self, op: Operator) {
        self.press(ButtonEvent::Operator(op));
    }

    /// Presses a sequence of buttons by label, ignoring unknown labels
    fn press_labels(&mut self, labels: &[&str]) {
        for label in labels {
            if let Some(event) = ButtonEvent::from_label(label) {
                self.press(event);
            }
        }
    }
}

impl PanelDriver for PanelAdapter {
    fn press(&mut self, event: ButtonEvent) {
        Self::press(self, event);
    }

    fn snapshot(&self) -> DisplaySnapshot {
        self.state().snapshot()
    }
}

#[cfg(feature = "tui")]
impl PanelDriver for crate::tui::CalculatorApp {
    fn press(&mut self, event: ButtonEvent) {
        self.handle_event(event);
    }

    fn snapshot(&self) -> DisplaySnapshot {
        crate::tui::CalculatorApp::snapshot(self)
    }
}

// ===== Unified verification suite =====
// These run against ANY PanelDriver implementation.

/// Verifies the four operators through simple two-operand expressions
pub fn verify_basic_arithmetic<D: PanelDriver>(driver: &mut D) {
    driver.press_labels(&["AC", "2", "+", "3", "="]);
    assert_eq!(driver.snapshot().previous_line, "2 + 3 =");

    driver.press_labels(&["AC", "1", "0", "-", "4", "+"]);
    assert_eq!(driver.snapshot().previous_line, "6 +");

    driver.press_labels(&["AC", "6", "*", "7", "="]);
    driver.press_labels(&["+", "0", "="]);
    assert_eq!(driver.snapshot().previous_line, "42 + 0 =");

    driver.press_labels(&["AC", "2", "0", "/", "4", "+"]);
    assert_eq!(driver.snapshot().previous_line, "5 +");
    driver.press_labels(&["AC"]);
}

/// Verifies that a chained `a op b op` computes before the new operator
pub fn verify_chained_operations<D: PanelDriver>(driver: &mut D) {
    driver.press_labels(&["AC", "5", "*", "4", "+"]);
    assert_eq!(driver.snapshot().previous_line, "20 +");
    assert_eq!(driver.snapshot().current_line, "");
    driver.press_labels(&["AC"]);
}

/// Verifies that premature operator/equals presses leave the display blank
pub fn verify_premature_input_noops<D: PanelDriver>(driver: &mut D) {
    driver.press_labels(&["AC", "/", "="]);
    let snap = driver.snapshot();
    assert_eq!(snap.previous_line, "");
    assert_eq!(snap.current_line, "");
}

/// Verifies single-character delete including the empty no-op
pub fn verify_delete<D: PanelDriver>(driver: &mut D) {
    driver.press_labels(&["AC", "7", "DEL", "DEL"]);
    assert_eq!(driver.snapshot().current_line, "");
    driver.press_labels(&["AC"]);
}

/// Verifies thousands-separator display formatting
pub fn verify_display_formatting<D: PanelDriver>(driver: &mut D) {
    driver.press_labels(&["AC", "1", "2", "3", "4", ".", "5"]);
    assert_eq!(driver.snapshot().current_line, "1,234.5");
    driver.press_labels(&["AC"]);
}

/// Complete verification pass over the panel contract
pub fn run_full_verification<D: PanelDriver>(driver: &mut D) {
    verify_basic_arithmetic(driver);
    verify_chained_operations(driver);
    verify_premature_input_noops(driver);
    verify_delete(driver);
    verify_display_formatting(driver);
}
