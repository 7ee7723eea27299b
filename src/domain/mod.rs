//! Domain types for the jokes application.

pub mod joke;
pub mod validation;

pub use joke::Joke;
pub use validation::{validate_joke, ValidationResult};
