//! Input routing for keyboard events
//!
//! Keys never type digits or operators; they only drive navigation and the
//! focused keypad button. An open alert swallows everything but dismissal.

use crate::core::actions::UiAction;
use crate::data::{FocusMove, UiState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Route a key event to a UiAction based on current context
pub fn route_key(key: KeyEvent, ui: &UiState, on_calculator: bool) -> UiAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return UiAction::Quit;
    }

    if ui.has_alert() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => UiAction::DismissAlert,
            _ => UiAction::None,
        };
    }

    match key.code {
        KeyCode::Char('q') => UiAction::Quit,
        KeyCode::Tab => UiAction::NextSection,
        KeyCode::BackTab => UiAction::PrevSection,
        _ if !on_calculator => UiAction::None,
        KeyCode::Up => UiAction::MoveFocus(FocusMove::Up),
        KeyCode::Down => UiAction::MoveFocus(FocusMove::Down),
        KeyCode::Left => UiAction::MoveFocus(FocusMove::Left),
        KeyCode::Right => UiAction::MoveFocus(FocusMove::Right),
        KeyCode::Enter | KeyCode::Char(' ') => UiAction::PressFocused,
        KeyCode::Char('y') => UiAction::CopyResult,
        _ => UiAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Alert;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        let ui = UiState::new();
        assert_eq!(route_key(key(KeyCode::Tab), &ui, false), UiAction::NextSection);
        assert_eq!(route_key(key(KeyCode::BackTab), &ui, true), UiAction::PrevSection);
        assert_eq!(route_key(key(KeyCode::Char('q')), &ui, true), UiAction::Quit);
    }

    #[test]
    fn test_keypad_keys_only_on_calculator() {
        let ui = UiState::new();
        assert_eq!(
            route_key(key(KeyCode::Left), &ui, true),
            UiAction::MoveFocus(FocusMove::Left)
        );
        assert_eq!(route_key(key(KeyCode::Enter), &ui, true), UiAction::PressFocused);
        assert_eq!(route_key(key(KeyCode::Enter), &ui, false), UiAction::None);
        assert_eq!(route_key(key(KeyCode::Char('y')), &ui, false), UiAction::None);
    }

    #[test]
    fn test_digits_are_not_typed() {
        let ui = UiState::new();
        assert_eq!(route_key(key(KeyCode::Char('7')), &ui, true), UiAction::None);
        assert_eq!(route_key(key(KeyCode::Char('+')), &ui, true), UiAction::None);
    }

    #[test]
    fn test_alert_blocks_input() {
        let mut ui = UiState::new();
        ui.show_alert(Alert::error("nope"));
        assert_eq!(route_key(key(KeyCode::Tab), &ui, true), UiAction::None);
        assert_eq!(route_key(key(KeyCode::Char('q')), &ui, true), UiAction::None);
        assert_eq!(route_key(key(KeyCode::Esc), &ui, true), UiAction::DismissAlert);

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(route_key(ctrl_c, &ui, true), UiAction::Quit);
    }
}
