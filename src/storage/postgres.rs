//! Persistent joke store implementation using PostgreSQL.

use crate::domain::Joke;
use crate::infra::config;
use crate::storage::JokeStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

/// A joke store backed by the `jokes` table.
#[derive(Clone)]
pub struct PostgresJokeStore {
    pool: PgPool,
}

impl PostgresJokeStore {
    /// Connects using `DATABASE_URL` / `DB_MAX_CONNECTIONS` and ensures the schema exists.
    pub async fn connect() -> Result<Self> {
        let database_url = config::database_url()?;
        let pool = PgPoolOptions::new()
            .max_connections(config::db_max_connections())
            .connect(&database_url)
            .await
            .context("Failed to connect to Postgres")?;
        Self::new_with_pool(pool).await
    }

    pub async fn new_with_pool(pool: PgPool) -> Result<Self> {
        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS jokes (
                id INTEGER PRIMARY KEY,
                joke_question TEXT NOT NULL,
                joke_answer TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create jokes table")?;
        Ok(())
    }

    /// Number of stored jokes.
    pub async fn count(&self) -> Result<i64> {
        let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jokes")
            .fetch_one(&self.pool)
            .await?;
        Ok(n)
    }
}

fn row_to_joke(row: &PgRow) -> Result<Joke> {
    Ok(Joke {
        id: row.try_get("id")?,
        joke_question: row.try_get("joke_question")?,
        joke_answer: row.try_get("joke_answer")?,
    })
}

#[async_trait]
impl JokeStore for PostgresJokeStore {
    async fn get_all(&self) -> Result<Vec<Joke>> {
        let rows = sqlx::query("SELECT id, joke_question, joke_answer FROM jokes ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_joke).collect()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Joke>> {
        let row = sqlx::query("SELECT id, joke_question, joke_answer FROM jokes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_joke).transpose()
    }

    async fn add(&self, joke: Joke) -> Result<()> {
        sqlx::query("INSERT INTO jokes (id, joke_question, joke_answer) VALUES ($1, $2, $3)")
            .bind(joke.id)
            .bind(&joke.joke_question)
            .bind(&joke.joke_answer)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to insert joke {}", joke.id))?;
        Ok(())
    }

    async fn update(&self, joke: Joke) -> Result<bool> {
        let result =
            sqlx::query("UPDATE jokes SET joke_question = $2, joke_answer = $3 WHERE id = $1")
                .bind(joke.id)
                .bind(&joke.joke_question)
                .bind(&joke.joke_answer)
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn remove(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM jokes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
