use crate::app::JokesController;
use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub controller: JokesController,
}

/// Response envelope for every JSON body the service returns.
#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    /// Name of the rendered view, for view results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn view(name: &str, data: Option<JsonValue>) -> Self {
        Self {
            success: true,
            view: Some(name.to_string()),
            data,
            error: None,
        }
    }

    pub fn data(data: JsonValue) -> Self {
        Self {
            success: true,
            view: None,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            view: None,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct SearchRequest {
    /// Case-sensitive substring matched against joke questions.
    #[serde(default)]
    pub search_phrase: String,
}

pub fn form_422(err: FormRejection, expected: &str) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse::failure(format!(
            "Invalid form body: {} (expected: {})",
            err, expected
        ))),
    )
}
