// src/main.rs

use jokes_web_app::app::seed;
use jokes_web_app::infra::config::{self, StoreBackend};
use jokes_web_app::infra::logging;
use jokes_web_app::transport;
use jokes_web_app::{InMemoryJokeStore, JokeStore, JokesController, PostgresJokeStore};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    // --- Store Initialization ---
    let store: Arc<dyn JokeStore> = match config::store_backend()? {
        StoreBackend::Postgres => {
            info!("> Connecting to Postgres joke store...");
            Arc::new(PostgresJokeStore::connect().await?)
        }
        StoreBackend::Memory => {
            info!("> Using in-memory joke store (data is lost on exit)");
            Arc::new(InMemoryJokeStore::new())
        }
    };

    if config::seed_sample_jokes() {
        let inserted = seed::seed_if_empty(store.as_ref()).await?;
        info!(inserted, "> Sample jokes seeded");
    }

    let app_state = transport::http::AppState {
        controller: JokesController::new(store),
    };

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(cors);
    let bind_addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("> API server listening on http://{}", bind_addr);
    info!("> Swagger UI available at http://{}/swagger-ui", bind_addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            if let Err(e) = result {
                error!(error = %e, "> Server error");
                return Err(e.into());
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("> Shutdown signal received (Ctrl+C), exiting.");
        }
    }

    Ok(())
}
