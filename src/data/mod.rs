//! Data layer - Pure state without UI coupling
//!
//! This module contains UI state and the calculator display model as plain
//! data structures. NO imports from frontend/ or any rendering code.
//! Frontends read from these structures to render.

pub mod display;
pub mod ui_state;

pub use display::*;
pub use ui_state::*;
