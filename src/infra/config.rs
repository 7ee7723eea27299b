//! Centralized configuration (environment variables + defaults).
//!
//! Call `dotenv::dotenv()` before reading any of these so a local `.env` is honored.

use anyhow::Context;

/// Which `JokeStore` implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

/// `JOKE_STORE`: `postgres` (default) or `memory`.
pub fn store_backend() -> anyhow::Result<StoreBackend> {
    match std::env::var("JOKE_STORE") {
        Err(_) => Ok(StoreBackend::Postgres),
        Ok(v) => match v.trim().to_lowercase().as_str() {
            "" | "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            other => anyhow::bail!("JOKE_STORE must be 'postgres' or 'memory', got '{}'", other),
        },
    }
}

/// Database URL must be provided (no default) for safety.
pub fn database_url() -> anyhow::Result<String> {
    std::env::var("DATABASE_URL").context("DATABASE_URL must be set")
}

/// Pool size for the Postgres store (default 5, at least 1).
pub fn db_max_connections() -> u32 {
    std::env::var("DB_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(5)
        .max(1)
}

/// Socket address the HTTP server binds to.
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}

/// Seed the sample jokes into an empty store on startup.
///
/// Unrecognised values are logged and treated as `false`.
pub fn seed_sample_jokes() -> bool {
    let raw = std::env::var("SEED_SAMPLE_JOKES").unwrap_or_default();
    parse_flag(&raw).unwrap_or_else(|| {
        tracing::warn!(value = %raw, "SEED_SAMPLE_JOKES is not a boolean, ignoring");
        false
    })
}

/// Case-insensitive boolean: `true/1/yes/on`, `false/0/no/off`, empty is `false`.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "" | "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
