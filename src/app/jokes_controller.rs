//! The jokes controller.
//!
//! Every action takes its inputs explicitly (optional ids as `Option<i32>`, validation
//! state as a [`ValidationResult`]) and returns an [`ActionResult`] for the transport
//! layer to render. Absent ids are a `NotFound` result, never an error; only store
//! failures surface as `Err`.

use crate::app::action_result::{ActionResult, View, ViewModel};
use crate::domain::{Joke, ValidationResult};
use crate::storage::JokeStore;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Clone)]
pub struct JokesController {
    store: Arc<dyn JokeStore>,
}

impl JokesController {
    pub fn new(store: Arc<dyn JokeStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<dyn JokeStore> {
        &self.store
    }

    /// Lists all jokes.
    pub async fn index(&self) -> anyhow::Result<ActionResult> {
        let jokes = self.store.get_all().await?;
        debug!(count = jokes.len(), "listing jokes");
        Ok(ActionResult::view(View::Index, ViewModel::Jokes(jokes)))
    }

    pub async fn show_search_form(&self) -> anyhow::Result<ActionResult> {
        Ok(ActionResult::blank(View::ShowSearchForm))
    }

    /// Renders the index view with the jokes whose question contains `search_phrase`.
    pub async fn show_search_results(&self, search_phrase: &str) -> anyhow::Result<ActionResult> {
        let jokes: Vec<Joke> = self
            .store
            .get_all()
            .await?
            .into_iter()
            .filter(|j| j.question_contains(search_phrase))
            .collect();
        debug!(search_phrase, matches = jokes.len(), "searched jokes");
        Ok(ActionResult::view(View::Index, ViewModel::Jokes(jokes)))
    }

    pub async fn details(&self, id: Option<i32>) -> anyhow::Result<ActionResult> {
        self.render_existing(View::Details, id).await
    }

    pub fn create_form(&self) -> ActionResult {
        ActionResult::blank(View::Create)
    }

    /// Persists `joke` if `validation` passed; otherwise hands the submission back to the form.
    pub async fn create(
        &self,
        joke: Joke,
        validation: &ValidationResult,
    ) -> anyhow::Result<ActionResult> {
        if !validation.is_valid() {
            debug!(id = joke.id, errors = ?validation.errors(), "create rejected by validation");
            return Ok(ActionResult::view(View::Create, ViewModel::Joke(joke)));
        }
        let id = joke.id;
        self.store.add(joke).await?;
        info!(id, "joke created");
        Ok(ActionResult::redirect_to_index())
    }

    pub async fn edit_form(&self, id: Option<i32>) -> anyhow::Result<ActionResult> {
        self.render_existing(View::Edit, id).await
    }

    /// Overwrites joke `id` with `joke`.
    ///
    /// The route id must match the submitted body id; that is checked before validation.
    pub async fn edit(
        &self,
        id: i32,
        joke: Joke,
        validation: &ValidationResult,
    ) -> anyhow::Result<ActionResult> {
        if id != joke.id {
            debug!(id, body_id = joke.id, "edit id mismatch");
            return Ok(ActionResult::NotFound);
        }
        if !validation.is_valid() {
            debug!(id, errors = ?validation.errors(), "edit rejected by validation");
            return Ok(ActionResult::view(View::Edit, ViewModel::Joke(joke)));
        }
        if !self.store.update(joke).await? {
            debug!(id, "edit target no longer exists");
            return Ok(ActionResult::NotFound);
        }
        info!(id, "joke updated");
        Ok(ActionResult::redirect_to_index())
    }

    pub async fn delete_form(&self, id: Option<i32>) -> anyhow::Result<ActionResult> {
        self.render_existing(View::Delete, id).await
    }

    /// Removes joke `id`. Already-absent ids still redirect.
    pub async fn delete_confirmed(&self, id: i32) -> anyhow::Result<ActionResult> {
        let removed = self.store.remove(id).await?;
        info!(id, removed, "joke delete confirmed");
        Ok(ActionResult::redirect_to_index())
    }

    async fn render_existing(&self, view: View, id: Option<i32>) -> anyhow::Result<ActionResult> {
        let Some(id) = id else {
            debug!(view = view.name(), "no id given");
            return Ok(ActionResult::NotFound);
        };
        match self.store.find_by_id(id).await? {
            Some(joke) => Ok(ActionResult::view(view, ViewModel::Joke(joke))),
            None => {
                debug!(view = view.name(), id, "joke not found");
                Ok(ActionResult::NotFound)
            }
        }
    }
}
