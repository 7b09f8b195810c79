//! TUI Frontend (ratatui-based)
//!
//! Implements the Frontend trait using ratatui for terminal rendering and
//! crossterm for event handling and terminal management.

pub mod alert;
pub mod app;
pub mod calculator_panel;
pub mod colors;
pub mod nav_tabs;
pub mod text_panel;

pub use app::TuiFrontend;
