//! Calculator display model
//!
//! The engine never touches the screen; it writes into this model through the
//! `DisplaySink` capability and frontends render whatever it holds.

use crate::core::calculator::DisplaySink;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CalculatorDisplay {
    /// Primary line
    pub current: String,
    /// Secondary line (`"12 +"`), empty when no operator is pending
    pub previous: String,
}

impl DisplaySink for CalculatorDisplay {
    fn show_current(&mut self, text: &str) {
        self.current.clear();
        self.current.push_str(text);
    }

    fn show_previous(&mut self, text: &str) {
        self.previous.clear();
        self.previous.push_str(text);
    }
}
