//! Calculator engine - two operand buffers and a pending operator
//!
//! Operands are kept as decimal strings so they redisplay exactly as typed.
//! They are parsed to `f64` only when an operation needs their value.
//! Binary operations chain left-to-right: choosing a new operator while one is
//! pending evaluates the pending one first.

use std::fmt;
use thiserror::Error;

/// Errors raised by calculator operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Cannot divide by zero!")]
    DivisionByZero,

    #[error("Cannot take the square root of a negative number!")]
    NegativeSquareRoot,

    /// An operand could not be read as a number. Handled inside the engine as
    /// a no-op; never returned from a public operation.
    #[error("Invalid numeric input")]
    InvalidNumericInput,
}

/// Binary operator awaiting its right-hand operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Remainder,
}

impl Operator {
    /// Parse a button label. Accepts the display symbols plus `*` and `/`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol.trim() {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "×" | "*" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            "%" => Some(Self::Remainder),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Remainder => "%",
        }
    }

    /// Apply to two operands. `%` is the truncated remainder (sign follows the dividend).
    fn apply(&self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
            Self::Remainder => Ok(lhs % rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Where the engine writes its output
pub trait DisplaySink {
    /// Primary line: the operand being typed or the last result
    fn show_current(&mut self, text: &str);

    /// Secondary line: `"{previous} {operator}"`, or empty when nothing is pending
    fn show_previous(&mut self, text: &str);
}

/// Raw engine state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    /// Never empty; `"0"` when cleared
    pub current_operand: String,
    /// Empty when there is no pending left-hand operand
    pub previous_operand: String,
    pub pending_operator: Option<Operator>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_operand: "0".to_string(),
            previous_operand: String::new(),
            pending_operator: None,
        }
    }
}

/// Calculator state machine
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn current_operand(&self) -> &str {
        &self.state.current_operand
    }

    #[cfg(test)]
    pub fn previous_operand(&self) -> &str {
        &self.state.previous_operand
    }

    #[cfg(test)]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.state.pending_operator
    }

    pub fn clear(&mut self) {
        self.state = CalculatorState::default();
    }

    pub fn delete_last_digit(&mut self) {
        if self.state.current_operand == "0" {
            return;
        }
        self.state.current_operand.pop();
        if self.state.current_operand.is_empty() {
            self.state.current_operand.push('0');
        }
    }

    /// Append a digit or the decimal point
    pub fn append_digit(&mut self, token: char) {
        if token == '.' && self.state.current_operand.contains('.') {
            return;
        }
        if self.state.current_operand == "0" && token != '.' {
            self.state.current_operand = token.to_string();
        } else {
            self.state.current_operand.push(token);
        }
    }

    /// Select the next binary operator, evaluating any pending one first.
    ///
    /// A failed evaluation does not stop the switch: the new operator is still
    /// taken with the current operand as its left side, and the error is
    /// returned afterwards so the caller can report it.
    pub fn choose_operator(&mut self, op: Operator) -> Result<(), CalcError> {
        if self.state.current_operand.is_empty() {
            return Ok(());
        }
        let chained = if self.state.previous_operand.is_empty() {
            Ok(())
        } else {
            self.compute()
        };
        self.state.pending_operator = Some(op);
        self.state.previous_operand =
            std::mem::replace(&mut self.state.current_operand, "0".to_string());
        chained
    }

    /// Evaluate the pending operation.
    ///
    /// Unparsable operands or a missing operator leave the state untouched.
    pub fn compute(&mut self) -> Result<(), CalcError> {
        let (lhs, rhs) = match (
            parse_operand(&self.state.previous_operand),
            parse_operand(&self.state.current_operand),
        ) {
            (Ok(lhs), Ok(rhs)) => (lhs, rhs),
            _ => {
                tracing::trace!(
                    previous = %self.state.previous_operand,
                    current = %self.state.current_operand,
                    "compute skipped: operand not numeric"
                );
                return Ok(());
            }
        };
        let Some(op) = self.state.pending_operator else {
            return Ok(());
        };

        let result = op.apply(lhs, rhs)?;
        tracing::debug!("{} {} {} = {}", lhs, op, rhs, result);

        self.state.current_operand = format_number(result);
        self.state.pending_operator = None;
        self.state.previous_operand.clear();
        Ok(())
    }

    pub fn square_root(&mut self) -> Result<(), CalcError> {
        let Ok(value) = parse_operand(&self.state.current_operand) else {
            return Ok(());
        };
        if value < 0.0 {
            return Err(CalcError::NegativeSquareRoot);
        }
        self.state.current_operand = format_number(value.sqrt());
        Ok(())
    }

    /// Push the current state to a display
    pub fn render(&self, sink: &mut dyn DisplaySink) {
        sink.show_current(&self.state.current_operand);
        match self.state.pending_operator {
            Some(op) => sink.show_previous(&format!("{} {}", self.state.previous_operand, op)),
            None => sink.show_previous(""),
        }
    }
}

/// Read an operand buffer as a number. NaN counts as unparsable.
fn parse_operand(text: &str) -> Result<f64, CalcError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
        .ok_or(CalcError::InvalidNumericInput)
}

/// Magnitudes at or above this print in exponent form
const EXPONENT_UPPER: f64 = 1e21;
/// Nonzero magnitudes below this print in exponent form
const EXPONENT_LOWER: f64 = 1e-6;

/// Shortest round-trippable form; integral values have no fractional part.
///
/// Very large and very small magnitudes switch to exponent notation with an
/// explicit exponent sign (`1e+21`, `1.5e-7`), which parses back unchanged.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        // Covers -0.0
        "0".to_string()
    } else if value.abs() >= EXPONENT_UPPER || value.abs() < EXPONENT_LOWER {
        let formatted = format!("{:e}", value);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        value.to_string()
    }
}
