//! Calculator keypad layout
//!
//! Buttons come in two kinds, mirroring the classic markup: number buttons
//! (digits and the decimal point) and operator buttons. Operator buttons may
//! carry an action tag; untagged operator buttons pass their label through as
//! the operator symbol.

/// Action tag carried by an operator button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Clear,
    Delete,
    Equals,
    Sqrt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Number,
    Operator { action: Option<ButtonAction> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub kind: ButtonKind,
}

impl Button {
    const fn number(label: &'static str) -> Self {
        Self {
            label,
            kind: ButtonKind::Number,
        }
    }

    const fn operator(label: &'static str) -> Self {
        Self {
            label,
            kind: ButtonKind::Operator { action: None },
        }
    }

    const fn action(label: &'static str, action: ButtonAction) -> Self {
        Self {
            label,
            kind: ButtonKind::Operator {
                action: Some(action),
            },
        }
    }

    #[cfg(test)]
    pub fn is_number(&self) -> bool {
        matches!(self.kind, ButtonKind::Number)
    }
}

pub const ROWS: usize = 5;
pub const COLS: usize = 4;

pub static KEYPAD: [[Button; COLS]; ROWS] = [
    [
        Button::action("C", ButtonAction::Clear),
        Button::action("DEL", ButtonAction::Delete),
        Button::action("√", ButtonAction::Sqrt),
        Button::operator("÷"),
    ],
    [
        Button::number("7"),
        Button::number("8"),
        Button::number("9"),
        Button::operator("×"),
    ],
    [
        Button::number("4"),
        Button::number("5"),
        Button::number("6"),
        Button::operator("-"),
    ],
    [
        Button::number("1"),
        Button::number("2"),
        Button::number("3"),
        Button::operator("+"),
    ],
    [
        Button::number("0"),
        Button::number("."),
        Button::operator("%"),
        Button::action("=", ButtonAction::Equals),
    ],
];

/// Look up a button by grid position
pub fn button_at(row: usize, col: usize) -> Option<&'static Button> {
    KEYPAD.get(row).and_then(|r| r.get(col))
}
