//! Shared action vocabulary for keyboard and mouse input.
//!
//! Raw key events are translated into semantic `UiAction`s by the input
//! router; mouse clicks are resolved by the frontend into `HitTarget`s.
//! `AppCore` reacts to both without knowing which device produced them.

use crate::data::FocusMove;

/// All possible application-level actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Quit,

    // Navigation
    NextSection,
    PrevSection,

    // Keypad
    MoveFocus(FocusMove),
    PressFocused,

    CopyResult,
    DismissAlert,

    // No action (key not bound or not applicable in this context)
    None,
}

/// What a mouse click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Tab in the navigation bar
    Tab(usize),
    /// Keypad button (row, col)
    Button { row: usize, col: usize },
    /// Primary calculator display
    Display,
    /// Anywhere else on screen
    Screen,
}
