//! In-memory joke store, used for tests and `JOKE_STORE=memory`.

use crate::domain::Joke;
use crate::storage::JokeStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryJokeStore {
    jokes: RwLock<BTreeMap<i32, Joke>>,
}

impl InMemoryJokeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-populated with `jokes`. Later duplicates replace earlier ones.
    pub fn with_jokes(jokes: impl IntoIterator<Item = Joke>) -> Self {
        let map = jokes.into_iter().map(|j| (j.id, j)).collect();
        Self {
            jokes: RwLock::new(map),
        }
    }

    pub async fn len(&self) -> usize {
        self.jokes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.jokes.read().await.is_empty()
    }
}

#[async_trait]
impl JokeStore for InMemoryJokeStore {
    async fn get_all(&self) -> anyhow::Result<Vec<Joke>> {
        Ok(self.jokes.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Joke>> {
        Ok(self.jokes.read().await.get(&id).cloned())
    }

    async fn add(&self, joke: Joke) -> anyhow::Result<()> {
        let mut jokes = self.jokes.write().await;
        if jokes.contains_key(&joke.id) {
            anyhow::bail!("A joke with id {} already exists", joke.id);
        }
        jokes.insert(joke.id, joke);
        Ok(())
    }

    async fn update(&self, joke: Joke) -> anyhow::Result<bool> {
        let mut jokes = self.jokes.write().await;
        match jokes.get_mut(&joke.id) {
            Some(existing) => {
                *existing = joke;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, id: i32) -> anyhow::Result<bool> {
        Ok(self.jokes.write().await.remove(&id).is_some())
    }
}
