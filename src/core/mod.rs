//! Core business logic layer
//!
//! This module contains the calculator engine, keypad, navigation and input
//! routing. NO imports from frontend/ or rendering code.
//! Core updates data structures in the data layer, frontends read and render.

pub mod actions;
pub mod app_core;
pub mod calculator;
pub mod input_router;
pub mod keypad;
pub mod navigation;

pub use actions::HitTarget;
pub use app_core::AppCore;
