use crate::domain::{validate_joke, Joke};
use crate::transport::http::handlers::common::{not_found, parse_id, render};
use crate::transport::http::types::{form_422, ApiResponse, AppState, SearchRequest};
use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Form;

const JOKE_FORM: &str = "id=<int>&joke_question=<text>&joke_answer=<text>";

#[utoipa::path(
    get,
    path = "/jokes",
    responses(
        (status = 200, description = "Index view with all jokes", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn index_handler(State(state): State<AppState>) -> Response {
    render(state.controller.index().await)
}

#[utoipa::path(
    get,
    path = "/jokes/search",
    responses(
        (status = 200, description = "Blank search form view", body = ApiResponse)
    )
)]
pub async fn show_search_form_handler(State(state): State<AppState>) -> Response {
    render(state.controller.show_search_form().await)
}

#[utoipa::path(
    post,
    path = "/jokes/search",
    request_body(content = SearchRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Index view with matching jokes", body = ApiResponse),
        (status = 422, description = "Malformed form body", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn show_search_results_handler(
    State(state): State<AppState>,
    request: Result<Form<SearchRequest>, FormRejection>,
) -> Response {
    let Form(request) = match request {
        Ok(v) => v,
        Err(e) => return form_422(e, "search_phrase=<text>").into_response(),
    };
    render(
        state
            .controller
            .show_search_results(&request.search_phrase)
            .await,
    )
}

#[utoipa::path(
    get,
    path = "/jokes/details/{id}",
    params(("id" = i32, Path, description = "Joke id")),
    responses(
        (status = 200, description = "Details view", body = ApiResponse),
        (status = 404, description = "Id is not an integer or no such joke", body = ApiResponse)
    )
)]
pub async fn details_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    render(state.controller.details(parse_id(&raw_id)).await)
}

#[utoipa::path(
    get,
    path = "/jokes/details",
    responses(
        (status = 404, description = "No id given", body = ApiResponse)
    )
)]
pub async fn details_without_id_handler(State(state): State<AppState>) -> Response {
    render(state.controller.details(None).await)
}

#[utoipa::path(
    get,
    path = "/jokes/create",
    responses(
        (status = 200, description = "Blank create form view", body = ApiResponse)
    )
)]
pub async fn create_form_handler(State(state): State<AppState>) -> Response {
    render(Ok(state.controller.create_form()))
}

#[utoipa::path(
    post,
    path = "/jokes/create",
    request_body(content = Joke, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Created, redirect to index"),
        (status = 200, description = "Validation failed, create view with the submission", body = ApiResponse),
        (status = 422, description = "Malformed form body", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn create_handler(
    State(state): State<AppState>,
    request: Result<Form<Joke>, FormRejection>,
) -> Response {
    let Form(joke) = match request {
        Ok(v) => v,
        Err(e) => return form_422(e, JOKE_FORM).into_response(),
    };
    let validation = validate_joke(&joke);
    render(state.controller.create(joke, &validation).await)
}

#[utoipa::path(
    get,
    path = "/jokes/edit/{id}",
    params(("id" = i32, Path, description = "Joke id")),
    responses(
        (status = 200, description = "Edit form view", body = ApiResponse),
        (status = 404, description = "Id is not an integer or no such joke", body = ApiResponse)
    )
)]
pub async fn edit_form_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    render(state.controller.edit_form(parse_id(&raw_id)).await)
}

#[utoipa::path(
    get,
    path = "/jokes/edit",
    responses(
        (status = 404, description = "No id given", body = ApiResponse)
    )
)]
pub async fn edit_form_without_id_handler(State(state): State<AppState>) -> Response {
    render(state.controller.edit_form(None).await)
}

#[utoipa::path(
    post,
    path = "/jokes/edit/{id}",
    params(("id" = i32, Path, description = "Joke id")),
    request_body(content = Joke, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Updated, redirect to index"),
        (status = 200, description = "Validation failed, edit view with the submission", body = ApiResponse),
        (status = 404, description = "Id mismatch or no such joke", body = ApiResponse),
        (status = 422, description = "Malformed form body", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn edit_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    request: Result<Form<Joke>, FormRejection>,
) -> Response {
    let Some(id) = parse_id(&raw_id) else {
        return not_found();
    };
    let Form(joke) = match request {
        Ok(v) => v,
        Err(e) => return form_422(e, JOKE_FORM).into_response(),
    };
    let validation = validate_joke(&joke);
    render(state.controller.edit(id, joke, &validation).await)
}

#[utoipa::path(
    get,
    path = "/jokes/delete/{id}",
    params(("id" = i32, Path, description = "Joke id")),
    responses(
        (status = 200, description = "Delete confirmation view", body = ApiResponse),
        (status = 404, description = "Id is not an integer or no such joke", body = ApiResponse)
    )
)]
pub async fn delete_form_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    render(state.controller.delete_form(parse_id(&raw_id)).await)
}

#[utoipa::path(
    get,
    path = "/jokes/delete",
    responses(
        (status = 404, description = "No id given", body = ApiResponse)
    )
)]
pub async fn delete_form_without_id_handler(State(state): State<AppState>) -> Response {
    render(state.controller.delete_form(None).await)
}

#[utoipa::path(
    post,
    path = "/jokes/delete/{id}",
    params(("id" = i32, Path, description = "Joke id")),
    responses(
        (status = 303, description = "Deleted (or already absent), redirect to index"),
        (status = 404, description = "Id is not an integer", body = ApiResponse),
        (status = 500, description = "Internal server error", body = ApiResponse)
    )
)]
pub async fn delete_confirmed_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    let Some(id) = parse_id(&raw_id) else {
        return not_found();
    };
    render(state.controller.delete_confirmed(id).await)
}
