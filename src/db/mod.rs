//! Database module for PostgreSQL persistence

pub mod models;
pub mod repository;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    #[error("Record not found: {0}")]
    NotFound(String),
}

/// Create a new database connection pool
pub async fn create_pool(database_url: &str) -> Result<PgPool, DbError> {
    tracing::debug!("Connecting to PostgreSQL");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    tracing::info!("PostgreSQL connection established");

    Ok(pool)
}

/// Initialize database schema
pub async fn init_schema(pool: &PgPool) -> Result<(), DbError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id BIGSERIAL PRIMARY KEY,
            username VARCHAR(80) UNIQUE NOT NULL,
            email VARCHAR(120) UNIQUE NOT NULL,
            phone VARCHAR(15),
            preferences TEXT,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS excuses (
            id BIGSERIAL PRIMARY KEY,
            user_id BIGINT NOT NULL REFERENCES users(id),
            category VARCHAR(50) NOT NULL,
            scenario VARCHAR(200) NOT NULL,
            excuse_text TEXT NOT NULL,
            believability_score DOUBLE PRECISION NOT NULL DEFAULT 0,
            urgency_level VARCHAR(20) NOT NULL DEFAULT 'medium',
            language VARCHAR(10) NOT NULL DEFAULT 'en',
            proof_generated BOOLEAN NOT NULL DEFAULT FALSE,
            times_used INTEGER NOT NULL DEFAULT 0,
            effectiveness_rating DOUBLE PRECISION NOT NULL DEFAULT 0,
            is_favorite BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            last_used TIMESTAMPTZ
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS proof_documents (
            id BIGSERIAL PRIMARY KEY,
            excuse_id BIGINT NOT NULL REFERENCES excuses(id),
            document_type VARCHAR(50) NOT NULL,
            file_path VARCHAR(200) NOT NULL,
            generated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_excuses_user_created ON excuses(user_id, created_at DESC)",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_proof_documents_excuse ON proof_documents(excuse_id)",
    )
    .execute(pool)
    .await?;

    tracing::info!("Database schema initialized");

    Ok(())
}
