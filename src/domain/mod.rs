pub mod models;
pub mod services;
pub mod errors;
pub mod export;

pub use models::*;
pub use services::*;
pub use errors::*;
pub use export::*;
