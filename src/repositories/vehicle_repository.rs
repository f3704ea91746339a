//! Repositório de veículos
//!
//! Veículos nascem via coleta (criação implícita) e têm o status movido
//! exclusivamente pelo motor de ciclo de vida; não há criação direta pela API.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::utils::errors::AppError;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_chassis(&self, chassis: &str) -> Result<Option<Vehicle>, AppError> {
        let vehicle =
            sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE chassis = $1")
                .bind(chassis)
                .fetch_optional(&self.pool)
                .await?;

        Ok(vehicle)
    }

    pub async fn list(
        &self,
        status: Option<VehicleStatus>,
        yard_id: Option<Uuid>,
        client_id: Option<Uuid>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            r#"
            SELECT * FROM vehicles
            WHERE ($1::vehicle_status IS NULL OR status = $1)
              AND ($2::uuid IS NULL OR current_yard_id = $2)
              AND ($3::uuid IS NULL OR client_id = $3)
            ORDER BY created_at DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(status)
        .bind(yard_id)
        .bind(client_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    /// Criar o veículo em pre_estoque caso o chassi ainda não exista
    pub async fn ensure_exists(
        &self,
        chassis: &str,
        brand: Option<String>,
        model: Option<String>,
        color: Option<String>,
        client_id: Option<Uuid>,
    ) -> Result<Vehicle, AppError> {
        if let Some(vehicle) = self.find_by_chassis(chassis).await? {
            return Ok(vehicle);
        }

        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (id, chassis, brand, model, color, status, client_id, created_at)
            VALUES ($1, $2, $3, $4, $5, 'pre_estoque', $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(chassis)
        .bind(brand)
        .bind(model)
        .bind(color)
        .bind(client_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }
}
