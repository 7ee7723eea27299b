use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A question/answer pair addressed by a caller-supplied integer id.
///
/// Text fields default to empty strings when absent from a submitted form so that
/// [`validate_joke`](crate::domain::validate_joke) rejects them instead of the extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Joke {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub joke_question: String,
    #[serde(default)]
    pub joke_answer: String,
}

impl Joke {
    pub fn new(id: i32, joke_question: impl Into<String>, joke_answer: impl Into<String>) -> Self {
        Self {
            id,
            joke_question: joke_question.into(),
            joke_answer: joke_answer.into(),
        }
    }

    /// Case-sensitive substring match against the question only.
    pub fn question_contains(&self, term: &str) -> bool {
        self.joke_question.contains(term)
    }
}
