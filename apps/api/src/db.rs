use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Ensures the engineers table exists. Runs once at boot, before the router
/// starts serving. `GENERATED BY DEFAULT` keeps the identity column able to
/// accept the explicit ids the store's upsert writes.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS engineers (
            id INTEGER GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
            name TEXT NOT NULL,
            tech_stack TEXT NOT NULL,
            learning_path_recommendation TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("Schema ready (engineers table)");
    Ok(())
}
