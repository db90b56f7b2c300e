use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::engineer::{EngineerRecord, EngineerRow};
use crate::store::EngineerStore;

/// `EngineerStore` backed by PostgreSQL.
///
/// Row operations are atomic per key; no transaction spans more than one
/// statement, matching the workflow's last-writer-wins concurrency model.
#[derive(Clone)]
pub struct PgEngineerStore {
    pool: PgPool,
}

impl PgEngineerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EngineerStore for PgEngineerStore {
    async fn upsert(&self, record: EngineerRecord) -> Result<EngineerRow, AppError> {
        let row = match record.id {
            // Explicit key: overwrite whatever is there
            Some(id) => {
                sqlx::query_as::<_, EngineerRow>(
                    r#"
                    INSERT INTO engineers (id, name, tech_stack, learning_path_recommendation)
                    VALUES ($1, $2, $3, $4)
                    ON CONFLICT (id) DO UPDATE
                        SET name = EXCLUDED.name,
                            tech_stack = EXCLUDED.tech_stack,
                            learning_path_recommendation = EXCLUDED.learning_path_recommendation
                    RETURNING id, name, tech_stack, learning_path_recommendation
                    "#,
                )
                .bind(id)
                .bind(&record.name)
                .bind(&record.tech_stack)
                .bind(&record.learning_path_recommendation)
                .fetch_one(&self.pool)
                .await?
            }
            // No key: let the identity column assign one
            None => {
                sqlx::query_as::<_, EngineerRow>(
                    r#"
                    INSERT INTO engineers (name, tech_stack, learning_path_recommendation)
                    VALUES ($1, $2, $3)
                    RETURNING id, name, tech_stack, learning_path_recommendation
                    "#,
                )
                .bind(&record.name)
                .bind(&record.tech_stack)
                .bind(&record.learning_path_recommendation)
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(row)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<EngineerRow>, AppError> {
        Ok(
            sqlx::query_as::<_, EngineerRow>("SELECT * FROM engineers WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn find_all(&self) -> Result<Vec<EngineerRow>, AppError> {
        Ok(
            sqlx::query_as::<_, EngineerRow>("SELECT * FROM engineers ORDER BY id")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        // Zero rows affected is still success: delete is idempotent.
        sqlx::query("DELETE FROM engineers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
