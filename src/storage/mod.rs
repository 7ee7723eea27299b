//! Joke persistence.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryJokeStore;
pub use postgres::PostgresJokeStore;

use crate::domain::Joke;
use async_trait::async_trait;

/// Repository contract for joke records.
///
/// Each call is a single unit of work; implementations provide whatever atomicity
/// their backend gives a single statement.
#[async_trait]
pub trait JokeStore: Send + Sync {
    /// Returns every joke in the order the backend yields them.
    async fn get_all(&self) -> anyhow::Result<Vec<Joke>>;

    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Joke>>;

    /// Inserts a new record under `joke.id`. A duplicate id is an error.
    async fn add(&self, joke: Joke) -> anyhow::Result<()>;

    /// Overwrites all fields of the record matching `joke.id`.
    /// Returns `false` if no such record exists.
    async fn update(&self, joke: Joke) -> anyhow::Result<bool>;

    /// Deletes the record matching `id`. Returns `false` if it was already absent.
    async fn remove(&self, id: i32) -> anyhow::Result<bool>;

    /// Cheap reachability probe used by `/health`.
    async fn ping(&self) -> anyhow::Result<()> {
        Ok(())
    }
}
