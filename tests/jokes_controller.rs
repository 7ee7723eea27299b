//! Controller behavior against the in-memory store seeded with three jokes.

use jokes_web_app::app::seed::sample_jokes;
use jokes_web_app::{
    Action, ActionResult, InMemoryJokeStore, Joke, JokeStore, JokesController, ValidationResult,
    View, ViewModel,
};
use std::sync::Arc;

fn seeded() -> (Arc<InMemoryJokeStore>, JokesController) {
    let store = Arc::new(InMemoryJokeStore::with_jokes(sample_jokes()));
    let controller = JokesController::new(store.clone());
    (store, controller)
}

fn empty() -> (Arc<InMemoryJokeStore>, JokesController) {
    let store = Arc::new(InMemoryJokeStore::new());
    let controller = JokesController::new(store.clone());
    (store, controller)
}

fn invalid_question() -> ValidationResult {
    let mut validation = ValidationResult::valid();
    validation.add_error("joke_question", "Required");
    validation
}

fn expect_view(result: ActionResult) -> (View, ViewModel) {
    match result {
        ActionResult::View { view, model } => (view, model),
        other => panic!("expected a view result, got {:?}", other),
    }
}

fn expect_single_joke(model: ViewModel) -> Joke {
    match model {
        ViewModel::Joke(joke) => joke,
        other => panic!("expected a single joke model, got {:?}", other),
    }
}

#[tokio::test]
async fn index_returns_view_with_all_jokes() {
    let (_store, controller) = seeded();

    let (view, model) = expect_view(controller.index().await.unwrap());

    assert_eq!(view, View::Index);
    match model {
        ViewModel::Jokes(jokes) => assert_eq!(jokes.len(), 3),
        other => panic!("expected a joke list, got {:?}", other),
    }
}

#[tokio::test]
async fn show_search_form_returns_blank_view() {
    let (_store, controller) = empty();

    let (view, model) = expect_view(controller.show_search_form().await.unwrap());

    assert_eq!(view, View::ShowSearchForm);
    assert_eq!(model, ViewModel::None);
}

#[tokio::test]
async fn search_filters_by_question_substring() {
    let (_store, controller) = seeded();

    let (view, model) = expect_view(controller.show_search_results("SearchTerm").await.unwrap());

    assert_eq!(view, View::Index);
    match model {
        ViewModel::Jokes(jokes) => {
            assert_eq!(jokes.len(), 1);
            assert_eq!(jokes[0].id, 3);
        }
        other => panic!("expected a joke list, got {:?}", other),
    }
}

#[tokio::test]
async fn search_is_case_sensitive_and_ignores_answers() {
    let (_store, controller) = seeded();

    for term in ["searchterm", "machine"] {
        let (_, model) = expect_view(controller.show_search_results(term).await.unwrap());
        assert_eq!(model, ViewModel::Jokes(vec![]), "term {:?}", term);
    }
}

#[tokio::test]
async fn search_is_idempotent() {
    let (_store, controller) = seeded();

    let first = controller.show_search_results("?").await.unwrap();
    let second = controller.show_search_results("?").await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn details_without_id_is_not_found() {
    let (_store, controller) = empty();

    assert!(controller.details(None).await.unwrap().is_not_found());
}

#[tokio::test]
async fn details_unknown_id_is_not_found() {
    let (_store, controller) = seeded();

    assert!(controller.details(Some(999)).await.unwrap().is_not_found());
}

#[tokio::test]
async fn details_known_id_returns_view_with_joke() {
    let (_store, controller) = seeded();

    let (view, model) = expect_view(controller.details(Some(2)).await.unwrap());

    assert_eq!(view, View::Details);
    assert_eq!(expect_single_joke(model).id, 2);
}

#[tokio::test]
async fn create_form_returns_blank_view() {
    let (_store, controller) = empty();

    assert_eq!(controller.create_form(), ActionResult::blank(View::Create));
}

#[tokio::test]
async fn create_valid_joke_saves_and_redirects() {
    let (store, controller) = empty();
    let new_joke = Joke::new(100, "Q?", "A!");

    let result = controller
        .create(new_joke.clone(), &ValidationResult::valid())
        .await
        .unwrap();

    assert_eq!(result, ActionResult::Redirect(Action::Index));
    assert_eq!(store.find_by_id(100).await.unwrap(), Some(new_joke));
}

#[tokio::test]
async fn create_invalid_joke_returns_same_view_with_submission() {
    let (store, controller) = empty();
    let new_joke = Joke::new(101, "", "A!");

    let (view, model) = expect_view(
        controller
            .create(new_joke.clone(), &invalid_question())
            .await
            .unwrap(),
    );

    assert_eq!(view, View::Create);
    assert_eq!(expect_single_joke(model), new_joke);
    assert_eq!(store.find_by_id(101).await.unwrap(), None);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn create_duplicate_id_is_an_error() {
    let (store, controller) = seeded();

    let result = controller
        .create(Joke::new(1, "Again?", "Again."), &ValidationResult::valid())
        .await;

    assert!(result.is_err());
    let original = store.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(original.joke_answer, "To get to the other side.");
}

#[tokio::test]
async fn edit_form_without_id_is_not_found() {
    let (_store, controller) = empty();

    assert!(controller.edit_form(None).await.unwrap().is_not_found());
}

#[tokio::test]
async fn edit_form_unknown_id_is_not_found() {
    let (_store, controller) = seeded();

    assert!(controller.edit_form(Some(999)).await.unwrap().is_not_found());
}

#[tokio::test]
async fn edit_form_known_id_returns_view_with_joke() {
    let (_store, controller) = seeded();

    let (view, model) = expect_view(controller.edit_form(Some(1)).await.unwrap());

    assert_eq!(view, View::Edit);
    assert_eq!(expect_single_joke(model).id, 1);
}

#[tokio::test]
async fn edit_id_mismatch_is_not_found_and_leaves_store_untouched() {
    let (store, controller) = seeded();
    let before = store.get_all().await.unwrap();

    let result = controller
        .edit(999, Joke::new(1, "Q", "A"), &ValidationResult::valid())
        .await
        .unwrap();

    assert!(result.is_not_found());
    assert_eq!(store.get_all().await.unwrap(), before);
}

#[tokio::test]
async fn edit_id_mismatch_is_checked_before_validation() {
    let (_store, controller) = seeded();

    let result = controller
        .edit(2, Joke::new(1, "", "A"), &invalid_question())
        .await
        .unwrap();

    assert!(result.is_not_found());
}

#[tokio::test]
async fn edit_invalid_joke_returns_same_view_with_submission() {
    let (store, controller) = seeded();
    let joke = Joke::new(1, "", "A");

    let (view, model) = expect_view(
        controller
            .edit(1, joke.clone(), &invalid_question())
            .await
            .unwrap(),
    );

    assert_eq!(view, View::Edit);
    assert_eq!(expect_single_joke(model), joke);
    let stored = store.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.joke_question, "Why did the chicken cross the road?");
}

#[tokio::test]
async fn edit_valid_joke_updates_and_redirects() {
    let (store, controller) = seeded();
    let mut joke = store.find_by_id(2).await.unwrap().unwrap();
    joke.joke_answer = "Updated".to_string();

    let result = controller
        .edit(2, joke, &ValidationResult::valid())
        .await
        .unwrap();

    assert_eq!(result, ActionResult::Redirect(Action::Index));
    let updated = store.find_by_id(2).await.unwrap().unwrap();
    assert_eq!(updated.joke_answer, "Updated");
    assert_eq!(updated.joke_question, "Best dev joke?");
}

#[tokio::test]
async fn edit_of_missing_record_is_not_found() {
    let (store, controller) = seeded();

    let result = controller
        .edit(42, Joke::new(42, "Q", "A"), &ValidationResult::valid())
        .await
        .unwrap();

    assert!(result.is_not_found());
    assert_eq!(store.find_by_id(42).await.unwrap(), None);
}

#[tokio::test]
async fn delete_form_without_id_is_not_found() {
    let (_store, controller) = empty();

    assert!(controller.delete_form(None).await.unwrap().is_not_found());
}

#[tokio::test]
async fn delete_form_unknown_id_is_not_found() {
    let (_store, controller) = seeded();

    assert!(controller.delete_form(Some(999)).await.unwrap().is_not_found());
}

#[tokio::test]
async fn delete_form_known_id_returns_view_with_joke() {
    let (_store, controller) = seeded();

    let (view, model) = expect_view(controller.delete_form(Some(1)).await.unwrap());

    assert_eq!(view, View::Delete);
    assert_eq!(expect_single_joke(model).id, 1);
}

#[tokio::test]
async fn delete_confirmed_removes_joke_and_redirects() {
    let (store, controller) = seeded();

    let result = controller.delete_confirmed(1).await.unwrap();

    assert_eq!(result, ActionResult::Redirect(Action::Index));
    assert_eq!(store.find_by_id(1).await.unwrap(), None);
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn delete_confirmed_on_absent_id_still_redirects() {
    let (store, controller) = seeded();

    let result = controller.delete_confirmed(999).await.unwrap();

    assert_eq!(result, ActionResult::Redirect(Action::Index));
    assert_eq!(store.len().await, 3);
}
