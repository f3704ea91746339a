//! Repositório do catálogo de checkpoints

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::checkpoint::Checkpoint;
use crate::utils::errors::AppError;

pub struct CheckpointRepository {
    pool: PgPool,
}

impl CheckpointRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        address: String,
        lat: f64,
        lng: f64,
    ) -> Result<Checkpoint, AppError> {
        let checkpoint = sqlx::query_as::<_, Checkpoint>(
            r#"
            INSERT INTO checkpoints (id, name, address, lat, lng, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(address)
        .bind(lat)
        .bind(lng)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(checkpoint)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Checkpoint>, AppError> {
        let checkpoint =
            sqlx::query_as::<_, Checkpoint>("SELECT * FROM checkpoints WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(checkpoint)
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM checkpoints WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn list(&self) -> Result<Vec<Checkpoint>, AppError> {
        let checkpoints =
            sqlx::query_as::<_, Checkpoint>("SELECT * FROM checkpoints ORDER BY name")
                .fetch_all(&self.pool)
                .await?;

        Ok(checkpoints)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        address: Option<String>,
        lat: Option<f64>,
        lng: Option<f64>,
    ) -> Result<Checkpoint, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Checkpoint not found".to_string()))?;

        let checkpoint = sqlx::query_as::<_, Checkpoint>(
            r#"
            UPDATE checkpoints
            SET name = $2, address = $3, lat = $4, lng = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(address.unwrap_or(current.address))
        .bind(lat.unwrap_or(current.lat))
        .bind(lng.unwrap_or(current.lng))
        .fetch_one(&self.pool)
        .await?;

        Ok(checkpoint)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM checkpoints WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Checkpoint not found".to_string()));
        }

        Ok(())
    }
}
