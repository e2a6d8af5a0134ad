//! Display surface and rendering adapter
//!
//! The calculator core knows nothing about where its two display lines end
//! up. `TextPanel` is the surface: two owned text fields plus a write log so
//! tests can observe every render. `PanelAdapter` is the thin wiring layer
//! that dispatches button events into the state and re-renders after each
//! one, the same subscribe-after-mutate flow the panel buttons drive.

use thiserror::Error;

use crate::core::{ButtonEvent, CalculatorState, DisplaySnapshot};

/// Errors from replaying a JSON button script
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The script was not a valid JSON array of button events
    #[error("malformed button script: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A two-line text display surface.
///
/// Stands in for whatever medium renders the calculator (text fields,
/// terminal, log). Writes are recorded so tests can assert on render
/// history, not just the final state.
#[derive(Debug, Clone, Default)]
pub struct TextPanel {
    previous_text: String,
    current_text: String,
    writes: Vec<DisplaySnapshot>,
}

impl TextPanel {
    /// Creates an empty panel
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes both display lines, recording the snapshot
    pub fn write(&mut self, snapshot: DisplaySnapshot) {
        self.previous_text.clone_from(&snapshot.previous_line);
        self.current_text.clone_from(&snapshot.current_line);
        self.writes.push(snapshot);
    }

    /// The text currently on the upper line
    #[must_use]
    pub fn previous_text(&self) -> &str {
        &self.previous_text
    }

    /// The text currently on the lower line
    #[must_use]
    pub fn current_text(&self) -> &str {
        &self.current_text
    }

    /// Every snapshot ever written, oldest first
    #[must_use]
    pub fn writes(&self) -> &[DisplaySnapshot] {
        &self.writes
    }

    /// Clears the write log (display text is left as-is)
    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }
}

/// Owns a calculator and a panel; every button press re-renders.
#[derive(Debug, Default)]
pub struct PanelAdapter {
    state: CalculatorState,
    panel: TextPanel,
}

impl PanelAdapter {
    /// Creates an adapter with a fresh calculator and panel
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an adapter around an existing state and panel
    #[must_use]
    pub fn with_parts(state: CalculatorState, panel: TextPanel) -> Self {
        Self { state, panel }
    }

    /// Dispatches one button event and re-renders the panel
    pub fn press(&mut self, event: ButtonEvent) {
        self.state.handle(event);
        self.panel.write(self.state.snapshot());
    }

    /// Dispatches a raw button label; unknown labels are ignored
    pub fn press_label(&mut self, label: &str) {
        if let Some(event) = ButtonEvent::from_label(label) {
            self.press(event);
        }
    }

    /// Replays a JSON array of button events, e.g.
    /// `[{"Digit":2},{"Operator":"Add"},{"Digit":3},"Equals"]`.
    pub fn run_script(&mut self, script: &str) -> Result<(), ScriptError> {
        let events: Vec<ButtonEvent> = serde_json::from_str(script)?;
        for event in events {
            self.press(event);
        }
        Ok(())
    }

    /// The underlying calculator state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// The display surface
    #[must_use]
    pub fn panel(&self) -> &TextPanel {
        &self.panel
    }

    /// Mutable access to the display surface
    pub fn panel_mut(&mut self) -> &mut TextPanel {
        &mut self.panel
    }
}
