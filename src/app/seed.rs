//! Sample data for an empty store.

use crate::domain::Joke;
use crate::storage::JokeStore;

pub fn sample_jokes() -> Vec<Joke> {
    vec![
        Joke::new(
            1,
            "Why did the chicken cross the road?",
            "To get to the other side.",
        ),
        Joke::new(2, "Best dev joke?", "It works on my machine."),
        Joke::new(3, "What contains a 'SearchTerm' inside?", "This one does!"),
    ]
}

/// Inserts the sample jokes if the store holds none. Returns how many were inserted.
pub async fn seed_if_empty(store: &dyn JokeStore) -> anyhow::Result<usize> {
    if !store.get_all().await?.is_empty() {
        return Ok(0);
    }
    let jokes = sample_jokes();
    let n = jokes.len();
    for joke in jokes {
        store.add(joke).await?;
    }
    Ok(n)
}
