//! TUI (Terminal User Interface) module
//!
//! This module contains all TUI logic separated from the binary for better testability.
//! The binary only owns the terminal and maps key presses onto [`App`] methods.

pub mod types;
pub mod screens;
pub mod app;
pub mod ui;

// Re-export main types for convenience
pub use types::{Focus, Screen, Tab};
pub use screens::*;
pub use app::{App, AuthTask};
