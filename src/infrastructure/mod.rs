//! Infrastructure layer providing system integrations.
//!
//! This module contains the pieces that talk to the host system, such as
//! the clipboard.

pub mod clipboard;

pub use clipboard::*;
