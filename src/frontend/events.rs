//! Frontend-agnostic input events.
//!
//! Frontends translate their native event streams (crossterm, etc.) into this
//! enum so the main loop only handles one event shape.

use crossterm::event::{KeyCode, KeyModifiers, MouseEventKind};

#[derive(Debug, Clone, PartialEq)]
pub enum FrontendEvent {
    /// Keyboard input
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Mouse input
    Mouse {
        kind: MouseEventKind,
        x: u16,
        y: u16,
        modifiers: KeyModifiers,
    },
    /// Terminal resize
    Resize { width: u16, height: u16 },
}

impl FrontendEvent {
    /// True for a left-button press, the only click the UI reacts to
    pub fn left_click(&self) -> Option<(u16, u16)> {
        match self {
            Self::Mouse {
                kind: MouseEventKind::Down(crossterm::event::MouseButton::Left),
                x,
                y,
                ..
            } => Some((*x, *y)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::MouseButton;

    fn mouse(kind: MouseEventKind) -> FrontendEvent {
        FrontendEvent::Mouse {
            kind,
            x: 4,
            y: 7,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_key_is_not_a_click() {
        let key_event = FrontendEvent::Key {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(key_event.left_click(), None);
    }

    #[test]
    fn test_left_click() {
        assert_eq!(mouse(MouseEventKind::Down(MouseButton::Left)).left_click(), Some((4, 7)));
        assert_eq!(mouse(MouseEventKind::Down(MouseButton::Right)).left_click(), None);
        assert_eq!(mouse(MouseEventKind::Up(MouseButton::Left)).left_click(), None);
    }
}
