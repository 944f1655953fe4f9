//! Presentation layer handling terminal UI and user input.
//!
//! This module derives a view from the application state, draws it with
//! ratatui and maps keyboard input onto the form's handlers.

pub mod ui;
pub mod input;
pub mod view;

pub use ui::*;
pub use input::*;
pub use view::*;
