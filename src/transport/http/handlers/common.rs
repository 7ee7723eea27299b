use crate::app::{Action, ActionResult, ViewModel};
use crate::transport::http::types::ApiResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde_json::Value as JsonValue;

/// Where redirects to the index action land.
pub const INDEX_PATH: &str = "/jokes";

/// Parses a route id. Anything that is not an `i32` counts as "no id".
pub fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok()
}

pub fn redirect_path(action: Action) -> &'static str {
    match action {
        Action::Index => INDEX_PATH,
    }
}

pub fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::failure("Joke not found")),
    )
        .into_response()
}

pub fn internal_error(e: impl std::fmt::Display) -> Response {
    tracing::error!(error = %e, "request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::failure(e.to_string())),
    )
        .into_response()
}

fn model_to_json(model: ViewModel) -> serde_json::Result<Option<JsonValue>> {
    match model {
        ViewModel::None => Ok(None),
        ViewModel::Joke(joke) => serde_json::to_value(joke).map(Some),
        ViewModel::Jokes(jokes) => serde_json::to_value(jokes).map(Some),
    }
}

/// Turns a controller outcome into an HTTP response.
pub fn render(result: anyhow::Result<ActionResult>) -> Response {
    match result {
        Ok(ActionResult::View { view, model }) => match model_to_json(model) {
            Ok(data) => (StatusCode::OK, Json(ApiResponse::view(view.name(), data))).into_response(),
            Err(e) => internal_error(e),
        },
        Ok(ActionResult::Redirect(action)) => Redirect::to(redirect_path(action)).into_response(),
        Ok(ActionResult::NotFound) => not_found(),
        Err(e) => internal_error(e),
    }
}
