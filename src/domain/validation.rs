//! Field validation for submitted jokes.

use crate::domain::Joke;
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of validating a submitted joke: field name -> error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationResult {
    /// A result with no errors.
    pub fn valid() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }
}

/// Checks the required fields of a joke.
pub fn validate_joke(joke: &Joke) -> ValidationResult {
    let mut result = ValidationResult::valid();
    if joke.joke_question.trim().is_empty() {
        result.add_error("joke_question", "The joke question is required.");
    }
    if joke.joke_answer.trim().is_empty() {
        result.add_error("joke_answer", "The joke answer is required.");
    }
    result
}
