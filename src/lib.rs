pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{Action, ActionResult, JokesController, View, ViewModel};
pub use domain::{validate_joke, Joke, ValidationResult};
pub use storage::{InMemoryJokeStore, JokeStore, PostgresJokeStore};
