//! UI State - Focus, alert, and status line
//!
//! This module contains UI state that is independent of rendering.
//! Frontends read from these structures.

use crate::core::keypad::{COLS, ROWS};

/// Application UI state
#[derive(Clone, Debug)]
pub struct UiState {
    /// Keypad button with keyboard focus (row, col)
    pub focused_button: (usize, usize),

    /// Modal alert; while set, all input other than dismissal is ignored
    pub alert: Option<Alert>,

    /// Status bar text
    pub status_text: String,
}

/// Blocking notification shown over the whole screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusMove {
    Up,
    Down,
    Left,
    Right,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    pub fn new() -> Self {
        Self {
            focused_button: (0, 0),
            alert: None,
            status_text: String::new(),
        }
    }

    /// Move keypad focus, clamped to the grid edges
    pub fn move_focus(&mut self, direction: FocusMove) {
        let (row, col) = self.focused_button;
        self.focused_button = match direction {
            FocusMove::Up => (row.saturating_sub(1), col),
            FocusMove::Down => ((row + 1).min(ROWS - 1), col),
            FocusMove::Left => (row, col.saturating_sub(1)),
            FocusMove::Right => (row, (col + 1).min(COLS - 1)),
        };
    }

    pub fn show_alert(&mut self, alert: Alert) {
        self.alert = Some(alert);
    }

    /// Returns true if an alert was open
    pub fn dismiss_alert(&mut self) -> bool {
        self.alert.take().is_some()
    }

    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status_text = text.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_clamps_to_grid() {
        let mut ui = UiState::new();
        ui.move_focus(FocusMove::Up);
        ui.move_focus(FocusMove::Left);
        assert_eq!(ui.focused_button, (0, 0));

        for _ in 0..10 {
            ui.move_focus(FocusMove::Down);
            ui.move_focus(FocusMove::Right);
        }
        assert_eq!(ui.focused_button, (ROWS - 1, COLS - 1));
    }

    #[test]
    fn test_alert_lifecycle() {
        let mut ui = UiState::new();
        assert!(!ui.dismiss_alert());
        ui.show_alert(Alert::error("boom"));
        assert!(ui.has_alert());
        assert!(ui.dismiss_alert());
        assert!(!ui.has_alert());
    }
}
