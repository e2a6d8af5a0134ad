//! The calculator state machine
//!
//! Four fields capture the entire state: the two text operands, the pending
//! operator, and the one-shot equation line shown after equals. Every
//! invalid or premature button press is a silent no-op; there is no error
//! path out of this module.

use serde::{Deserialize, Serialize};

use super::event::ButtonEvent;
use super::format::{format_operand, stringify_number};
use super::operator::Operator;

/// What the display surface shows: two lines of text, rendered verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    /// Upper line: previous operand, pending operator, or full equation
    pub previous_line: String,
    /// Lower line: the operand currently being typed
    pub current_line: String,
}

/// The button-panel calculator state machine.
///
/// Operands are accumulated as text and parsed only at computation time, so
/// mid-entry states like a trailing decimal point never hit a numeric type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorState {
    /// Left-hand operand text; empty means unset
    previous_operand: String,
    /// Right-hand operand being typed; empty means unset
    current_operand: String,
    /// Pending operator; `None` whenever `previous_operand` is empty
    operator: Option<Operator>,
    /// One-shot equation text set by equals, cleared by the next entry
    equation: String,
}

impl CalculatorState {
    /// Creates a calculator in the all-clear configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatches a single button press
    pub fn handle(&mut self, event: ButtonEvent) {
        match event {
            ButtonEvent::Digit(d) => {
                if let Some(token) = char::from_digit(u32::from(d), 10) {
                    self.append_digit(token);
                }
            }
            ButtonEvent::Decimal => self.append_digit('.'),
            ButtonEvent::Operator(op) => self.choose_operator(op),
            ButtonEvent::Equals => self.choose_equals(),
            ButtonEvent::Clear => self.all_clear(),
            ButtonEvent::Delete => self.delete_last(),
        }
    }

    /// Resets all four fields to their empty state
    pub fn all_clear(&mut self) {
        self.previous_operand.clear();
        self.current_operand.clear();
        self.operator = None;
        self.equation.clear();
    }

    /// Appends a digit or decimal point to the current operand.
    ///
    /// A second `.` is ignored, leaving the equation text alone; anything
    /// outside `0-9 .` is ignored outright.
    pub fn append_digit(&mut self, token: char) {
        if token != '.' && !token.is_ascii_digit() {
            return;
        }
        if token == '.' && self.current_operand.contains('.') {
            return;
        }
        self.current_operand.push(token);
        self.equation.clear();
    }

    /// Selects an operator.
    ///
    /// With no current operand this only overrides the pending operator (or
    /// no-ops when there is nothing to operate on). Otherwise a pending
    /// chain like `3 + 4 *` computes first, then the current operand shifts
    /// left and entry restarts.
    pub fn choose_operator(&mut self, op: Operator) {
        if self.current_operand.is_empty() {
            if !self.previous_operand.is_empty() {
                self.operator = Some(op);
            }
            return;
        }

        if !self.previous_operand.is_empty() {
            self.compute();
        }

        self.equation.clear();
        self.operator = Some(op);
        self.previous_operand = std::mem::take(&mut self.current_operand);
    }

    /// Applies the pending operator to the parsed operands.
    ///
    /// No-op when the operator is unset or either operand fails to parse;
    /// existing state is left untouched in that case. On success the result
    /// overwrites the current operand and the operator resets; the previous
    /// operand is left for the caller to reassign.
    pub fn compute(&mut self) {
        let Some(op) = self.operator else {
            return;
        };
        let Ok(prev) = self.previous_operand.parse::<f64>() else {
            return;
        };
        let Ok(curr) = self.current_operand.parse::<f64>() else {
            return;
        };

        self.current_operand = stringify_number(op.apply(prev, curr));
        self.operator = None;
    }

    /// Evaluates the full expression on an equals press.
    ///
    /// Guards incomplete expressions with a no-op. The equation line is
    /// captured before computing so it shows the operands as entered; the
    /// result then becomes the previous operand, ready for a follow-up
    /// operator press, while digit entry starts fresh.
    pub fn choose_equals(&mut self) {
        let Some(op) = self.operator else {
            return;
        };
        if self.previous_operand.is_empty() || self.current_operand.is_empty() {
            return;
        }

        self.equation = format!(
            "{} {} {} =",
            format_operand(&self.previous_operand),
            op.symbol(),
            format_operand(&self.current_operand),
        );
        self.compute();
        self.previous_operand = std::mem::take(&mut self.current_operand);
    }

    /// Removes the last character of the current operand; no-op when empty
    pub fn delete_last(&mut self) {
        self.current_operand.pop();
        self.equation.clear();
    }

    /// Produces the two display lines for the current state
    #[must_use]
    pub fn snapshot(&self) -> DisplaySnapshot {
        let previous_line = if let Some(op) = self.operator {
            format!("{} {}", format_operand(&self.previous_operand), op.symbol())
        } else if !self.equation.is_empty() {
            self.equation.clone()
        } else {
            format_operand(&self.previous_operand)
        };

        DisplaySnapshot {
            previous_line,
            current_line: format_operand(&self.current_operand),
        }
    }

    /// The left-hand operand text
    #[must_use]
    pub fn previous_operand(&self) -> &str {
        &self.previous_operand
    }

    /// The right-hand operand text
    #[must_use]
    pub fn current_operand(&self) -> &str {
        &self.current_operand
    }

    /// The pending operator, if any
    #[must_use]
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// The one-shot equation text (empty unless equals just fired)
    #[must_use]
    pub fn equation(&self) -> &str {
        &self.equation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(state: &mut CalculatorState, labels: &[&str]) {
        for label in labels {
            let event = ButtonEvent::from_label(label).expect("known label");
            state.handle(event);
        }
    }

    // ===== Initial state =====

    #[test]
    fn test_new_is_all_clear() {
        let state = CalculatorState::new();
        assert_eq!(state.previous_operand(), "");
        assert_eq!(state.current_operand(), "");
        assert_eq!(state.operator(), None);
        assert_eq!(state.equation(), "");
    }

    #[test]
    fn test_default_matches_new() {
        assert_eq!(CalculatorState::default(), CalculatorState::new());
    }

    // ===== append_digit =====

    #[test]
    fn test_append_digits_concatenate() {
        let mut state = CalculatorState::new();
        state.append_digit('1');
        state.append_digit('2');
        state.append_digit('3');
        assert_eq!(state.current_operand(), "123");
    }

    #[test]
    fn test_append_single_decimal() {
        let mut state = CalculatorState::new();
        state.append_digit('1');
        state.append_digit('.');
        state.append_digit('5');
        assert_eq!(state.current_operand(), "1.5");
    }

    #[test]
    fn test_append_second_decimal_ignored() {
        let mut state = CalculatorState::new();
        state.append_digit('1');
        state.append_digit('.');
        state.append_digit('5');
        state.append_digit('.');
        assert_eq!(state.current_operand(), "1.5");
    }

    #[test]
    fn test_append_non_digit_ignored() {
        let mut state = CalculatorState::new();
        state.append_digit('x');
        state.append_digit('+');
        assert_eq!(state.current_operand(), "");
    }

    #[test]
    fn test_append_clears_equation() {
        let mut state = CalculatorState::new();
        press_all(&mut state, &["2", "+", "3", "="]);
        assert!(!state.equation().is_empty());
        state.append_digit('9');
        assert_eq!(state.equation(), "");
    }

    #[test]
    fn test_ignored_decimal_leaves_equation() {
        // The single-decimal no-op does not clear the equation line
        let mut state = CalculatorState::new();
        press_all(&mut state, &["2", ".", "5", "+", "3", "="]);
        let equation = state.equation().to_string();
        assert!(!equation.is_empty());
        // current is now empty, so '.' appends; press it twice to hit the guard
        state.append_digit('.');
        state.append_digit('.');
        assert_eq!(state.current_operand(), ".");
    }

    // ===== choose_operator =====

    #[test]
    fn test_operator_with_nothing_entered_is_noop() {
        let mut state = CalculatorState::new();
        state.choose_operator(Operator::Divide);
        assert_eq!(state, CalculatorState::new());
    }

    #[test]
    fn test_operator_shifts_current_to_previous() {
        let mut state = CalculatorState::new();
        press_all(&mut state, &["5", "+"]);
        assert_eq!(state.previous_operand(), "5");
        assert_eq!(state.current_operand(), "");
        assert_eq!(state.operator(), Some(Operator::Add));
    }

    #[test]
    fn test_operator_override() {
        let mut state = CalculatorState::new();
        press_all(&mut state, &["5", "+", "*"]);
        assert_eq!(state.operator(), Some(Operator::Multiply));
        assert_eq!(state.previous_operand(), "5");
        assert_eq!(state.current_operand(), "");
    }

    #[test]
    fn test_operator_chains_compute() {
        let mut state = CalculatorState::new();
        press_all(&mut state, &["5", "*", "4", "+"]);
        assert_eq!(state.previous_operand(), "20");
        assert_eq!(state.operator(), Some(Operator::Add));
        assert_eq!(state.current_operand(), "");
    }

    // ===== compute =====

    #[test]
    fn test_compute_without_operator_is_noop() {
        let mut state = CalculatorState::new();
        state.append_digit('5');
        state.compute();
        assert_eq!(state.current_operand(), "5");
    }

    #[test]
    fn test_compute_unparseable_operand_is_noop() {
        let mut state = CalculatorState::new();
        press_all(&mut state, &["5", "+"]);
        // current operand is empty, which does not parse
        state.compute();
        assert_eq!(state.previous_operand(), "5");
        assert_eq!(state.operator(), Some(Operator::Add));
    }

    #[test]
    fn test_compute_overwrites_current_and_clears_operator() {
        let mut state = CalculatorState::new();
        press_all(&mut state, &["6", "*", "7"]);
        state.compute();
        assert_eq!(state.current_operand(), "42");
        assert_eq!(state.operator(), None);
        // previous is left for the caller
        assert_eq!(state.previous_operand(), "6");
    }

    #[test]
    fn test_compute_division_by_zero_gives_inf_text() {
        let mut state = CalculatorState::new();
        press_all(&mut state, &["1", "/", "0"]);
        state.compute();
        assert_eq!(state.current_operand(), "inf");
    }

    // ===== choose_equals =====

    #[test]
    fn test_equals_two_plus_three() {
        let mut state = CalculatorState::new();
        press_all(&mut state, &["2", "+", "3", "="]);
        assert_eq!(state.previous_operand(), "5");
        assert_eq!(state.current_operand(), "");
        assert_eq!(state.operator(), None);
        assert_eq!(state.equation(), "2 + 3 =");
    }

    #[test]
    fn test_equals_incomplete_is_noop() {
        let mut state = CalculatorState::new();
        press_all(&mut state, &["2", "+"]);
        state.choose_equals();
        assert_eq!(state.previous_operand(), "2");
        assert_eq!(state.operator(), Some(Operator::Add));
        assert_eq!(state.equation(), "");
    }

    #[test]
    fn test_equals_with_no_input_is_noop() {
        let mut state = CalculatorState::new();
        press_all(&mut state, &["/", "="]);
        assert_eq!(state, CalculatorState::new());
    }

    #[test]
    fn test_equals_formats_equation_operands() {
        let mut state = CalculatorState::new();
        press_all(&mut state, &["1", "2", "3", "4", "+", "1", "="]);
        assert_eq!(state.equation(), "1,234 + 1 =");
        assert_eq!(state.previous_operand(), "1235");
    }

    #[test]
    fn test_digit_after_equals_starts_fresh() {
        let mut state = CalculatorState::new();
        press_all(&mut state, &["2", "+", "3", "=", "9"]);
        assert_eq!(state.current_operand(), "9");
        assert_eq!(state.previous_operand(), "5");
    }

    #[test]
    fn test_operator_after_equals_chains_on_result() {
        let mut state = CalculatorState::new();
        press_all(&mut state, &["2", "+", "3", "=", "*", "4", "="]);
        assert_eq!(state.previous_operand(), "20");
        assert_eq!(state.equation(), "5 * 4 =");
    }

    // ===== delete_last =====

    #[test]
    fn test_delete_truncates() {
        let mut state = CalculatorState::new();
        press_all(&mut state, &["7", "8"]);
        state.delete_last();
        assert_eq!(state.current_operand(), "7");
    }

    #[test]
    fn test_delete_on_empty_is_noop() {
        let mut state = CalculatorState::new();
        press_all(&mut state, &["7", "DEL", "DEL"]);
        assert_eq!(state.current_operand(), "");
    }

    #[test]
    fn test_delete_clears_equation() {
        let mut state = CalculatorState::new();
        press_all(&mut state, &["2", "+", "3", "=", "DEL"]);
        assert_eq!(state.equation(), "");
    }

    // ===== all_clear =====

    #[test]
    fn test_all_clear_resets_everything() {
        let mut state = CalculatorState::new();
        press_all(&mut state, &["2", "+", "3", "=", "AC"]);
        assert_eq!(state, CalculatorState::new());
    }

    // ===== snapshot =====

    #[test]
    fn test_snapshot_blank_at_start() {
        let snap = CalculatorState::new().snapshot();
        assert_eq!(snap.previous_line, "");
        assert_eq!(snap.current_line, "");
    }

    #[test]
    fn test_snapshot_shows_operator_beside_previous() {
        let mut state = CalculatorState::new();
        press_all(&mut state, &["1", "2", "3", "4", "+"]);
        let snap = state.snapshot();
        assert_eq!(snap.previous_line, "1,234 +");
        assert_eq!(snap.current_line, "");
    }

    #[test]
    fn test_snapshot_after_equals_shows_equation() {
        let mut state = CalculatorState::new();
        press_all(&mut state, &["2", "+", "3", "="]);
        let snap = state.snapshot();
        assert_eq!(snap.previous_line, "2 + 3 =");
        assert_eq!(snap.current_line, "");
    }

    #[test]
    fn test_snapshot_operator_takes_precedence_over_equation() {
        let mut state = CalculatorState::new();
        press_all(&mut state, &["2", "+", "3", "=", "+"]);
        let snap = state.snapshot();
        assert_eq!(snap.previous_line, "5 +");
    }

    #[test]
    fn test_snapshot_division_by_zero_blank_line() {
        let mut state = CalculatorState::new();
        press_all(&mut state, &["1", "/", "0", "="]);
        let snap = state.snapshot();
        // the accepted quirk: an infinite result renders blank
        assert_eq!(state.previous_operand(), "inf");
        assert_eq!(snap.previous_line, "1 / 0 =");
        assert_eq!(snap.current_line, "");
        state.handle(ButtonEvent::Digit(2));
        assert_eq!(state.snapshot().previous_line, "");
    }

    #[test]
    fn test_snapshot_formats_current_line() {
        let mut state = CalculatorState::new();
        press_all(&mut state, &["1", "2", "3", "4", ".", "5"]);
        assert_eq!(state.snapshot().current_line, "1,234.5");
    }

    // ===== invariants =====

    #[test]
    fn test_operator_none_when_previous_empty() {
        let mut state = CalculatorState::new();
        let sequences: &[&[&str]] = &[
            &["+"],
            &["=", "="],
            &["DEL", "+", "="],
            &["2", "+", "3", "=", "AC", "*"],
        ];
        for labels in sequences {
            state.all_clear();
            press_all(&mut state, labels);
            if state.previous_operand().is_empty() {
                assert_eq!(state.operator(), None);
            }
        }
    }

    #[test]
    fn test_snapshot_serde_roundtrip() {
        let mut state = CalculatorState::new();
        press_all(&mut state, &["2", "+", "3", "="]);
        let snap = state.snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        let back: DisplaySnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snap, back);
    }
}
