//! Application layer managing state and workflows.
//!
//! This module coordinates between the domain layer and presentation layer,
//! holding the form state and driving it from user actions or from the
//! command line.

pub mod state;
pub mod batch;

pub use state::*;
pub use batch::*;
