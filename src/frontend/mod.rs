//! Frontend abstraction layer
//!
//! This module defines the `Frontend` trait. It provides a unified interface
//! for event polling, rendering, hit testing, and cleanup so the main loop
//! never touches a rendering library directly.

pub mod events;
pub mod tui;

use crate::core::{AppCore, HitTarget};
use anyhow::Result;
pub use events::FrontendEvent;
pub use tui::TuiFrontend;

/// Frontend trait
///
/// Separates rendering concerns from the application core. The core is the
/// single source of truth; a frontend reads it to draw and reports what the
/// user did.
pub trait Frontend {
    /// Poll for user input events
    ///
    /// Returns all pending events converted to `FrontendEvent` (empty if none).
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>>;

    /// Render the current application state
    ///
    /// Called once per loop iteration. Also records where things were drawn so
    /// that `hit_test` can resolve later clicks.
    fn render(&mut self, core: &AppCore) -> Result<()>;

    /// Resolve a screen position against the last rendered frame
    fn hit_test(&self, x: u16, y: u16) -> HitTarget;

    /// Restore the terminal and release resources
    fn cleanup(&mut self) -> Result<()>;

    /// Current rendering area `(width, height)`
    fn size(&self) -> (u16, u16);
}
