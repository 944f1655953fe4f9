//! timestable - Terminal Multiplication Table
//!
//! A terminal form that validates a number and an upper bound and shows the
//! matching multiplication table.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;
pub mod config;

pub use domain::*;
pub use application::*;
