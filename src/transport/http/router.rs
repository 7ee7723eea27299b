use crate::domain::Joke;
use crate::transport::http::handlers::{health, jokes};
use crate::transport::http::types::{ApiResponse, SearchRequest};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        jokes::index_handler,
        jokes::show_search_form_handler,
        jokes::show_search_results_handler,
        jokes::details_handler,
        jokes::details_without_id_handler,
        jokes::create_form_handler,
        jokes::create_handler,
        jokes::edit_form_handler,
        jokes::edit_form_without_id_handler,
        jokes::edit_handler,
        jokes::delete_form_handler,
        jokes::delete_form_without_id_handler,
        jokes::delete_confirmed_handler
    ),
    components(schemas(ApiResponse, Joke, SearchRequest))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/jokes", get(jokes::index_handler))
        .route(
            "/jokes/search",
            get(jokes::show_search_form_handler).post(jokes::show_search_results_handler),
        )
        .route("/jokes/details", get(jokes::details_without_id_handler))
        .route("/jokes/details/:id", get(jokes::details_handler))
        .route(
            "/jokes/create",
            get(jokes::create_form_handler).post(jokes::create_handler),
        )
        .route("/jokes/edit", get(jokes::edit_form_without_id_handler))
        .route(
            "/jokes/edit/:id",
            get(jokes::edit_form_handler).post(jokes::edit_handler),
        )
        .route("/jokes/delete", get(jokes::delete_form_without_id_handler))
        .route(
            "/jokes/delete/:id",
            get(jokes::delete_form_handler).post(jokes::delete_confirmed_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
