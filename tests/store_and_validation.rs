use jokes_web_app::app::seed::{sample_jokes, seed_if_empty};
use jokes_web_app::{validate_joke, InMemoryJokeStore, Joke, JokeStore};

#[test]
fn complete_joke_is_valid() {
    assert!(validate_joke(&Joke::new(1, "Q?", "A!")).is_valid());
}

#[test]
fn blank_fields_are_reported_per_field() {
    let result = validate_joke(&Joke::new(1, "   ", ""));

    assert!(!result.is_valid());
    let fields: Vec<&str> = result.errors().keys().map(String::as_str).collect();
    assert_eq!(fields, vec!["joke_answer", "joke_question"]);
}

#[test]
fn missing_answer_alone_fails_validation() {
    let result = validate_joke(&Joke::new(1, "Q?", ""));

    assert!(!result.is_valid());
    assert!(result.errors().contains_key("joke_answer"));
    assert!(!result.errors().contains_key("joke_question"));
}

#[tokio::test]
async fn memory_store_rejects_duplicate_ids() {
    let store = InMemoryJokeStore::new();
    store.add(Joke::new(7, "Q", "A")).await.unwrap();

    assert!(store.add(Joke::new(7, "Other", "Other")).await.is_err());
    assert_eq!(store.find_by_id(7).await.unwrap().unwrap().joke_question, "Q");
}

#[tokio::test]
async fn memory_store_update_and_remove_report_absent_ids() {
    let store = InMemoryJokeStore::with_jokes(sample_jokes());

    assert!(!store.update(Joke::new(50, "Q", "A")).await.unwrap());
    assert!(!store.remove(50).await.unwrap());
    assert!(store.remove(3).await.unwrap());
    assert!(!store.remove(3).await.unwrap());
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn memory_store_update_overwrites_all_fields() {
    let store = InMemoryJokeStore::with_jokes(sample_jokes());

    assert!(store.update(Joke::new(1, "New Q", "New A")).await.unwrap());
    assert_eq!(
        store.find_by_id(1).await.unwrap(),
        Some(Joke::new(1, "New Q", "New A"))
    );
}

#[tokio::test]
async fn seeding_only_fills_an_empty_store() {
    let store = InMemoryJokeStore::new();

    assert_eq!(seed_if_empty(&store).await.unwrap(), 3);
    assert_eq!(seed_if_empty(&store).await.unwrap(), 0);
    assert_eq!(store.get_all().await.unwrap(), sample_jokes());
}
