//! Repositório de coletas
//!
//! As escritas de ciclo de vida (check-out, cancelamento) rodam em uma única
//! transação com lock da linha da coleta, para serializar finalizações
//! concorrentes e impedir transição dupla do veículo.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::collect::{Collect, CollectStatus};
use crate::utils::errors::AppError;

/// Valores resolvidos de um sub-registro de check-in/check-out
#[derive(Debug, Clone)]
pub struct CheckRecord {
    pub timestamp: DateTime<Utc>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub photos: Vec<String>,
    pub notes: Option<String>,
}

/// Guard da finalização: coleta em trânsito com check-in registrado
pub(crate) fn ensure_can_finalize(current: &Collect) -> Result<(), AppError> {
    match current.status {
        CollectStatus::Finalizada => {
            Err(AppError::Conflict("Collect already finalized".to_string()))
        }
        CollectStatus::Cancelado => {
            Err(AppError::Conflict("Collect is cancelled".to_string()))
        }
        CollectStatus::EmTransito if !current.has_checkin() => Err(AppError::Conflict(
            "Check-out requires a prior check-in".to_string(),
        )),
        CollectStatus::EmTransito => Ok(()),
    }
}

pub struct CollectRepository {
    pool: PgPool,
}

impl CollectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        vehicle_chassis: String,
        manufacturer_id: Uuid,
        yard_id: Uuid,
        driver_id: Option<Uuid>,
        collect_date: NaiveDate,
        notes: Option<String>,
    ) -> Result<Collect, AppError> {
        let collect = sqlx::query_as::<_, Collect>(
            r#"
            INSERT INTO collects
                (id, vehicle_chassis, manufacturer_id, yard_id, driver_id, collect_date, notes, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'em_transito', $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(vehicle_chassis)
        .bind(manufacturer_id)
        .bind(yard_id)
        .bind(driver_id)
        .bind(collect_date)
        .bind(notes)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(collect)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Collect>, AppError> {
        let collect = sqlx::query_as::<_, Collect>("SELECT * FROM collects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(collect)
    }

    pub async fn list(
        &self,
        status: Option<CollectStatus>,
        yard_id: Option<Uuid>,
        manufacturer_id: Option<Uuid>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Collect>, AppError> {
        let collects = sqlx::query_as::<_, Collect>(
            r#"
            SELECT * FROM collects
            WHERE ($1::collect_status IS NULL OR status = $1)
              AND ($2::uuid IS NULL OR yard_id = $2)
              AND ($3::uuid IS NULL OR manufacturer_id = $3)
            ORDER BY created_at DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(status)
        .bind(yard_id)
        .bind(manufacturer_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(collects)
    }

    /// Registrar os campos de check-in; não altera o status
    pub async fn record_checkin(
        &self,
        id: Uuid,
        record: CheckRecord,
    ) -> Result<Collect, AppError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Collect>(
            "SELECT * FROM collects WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Collect '{}' not found", id)))?;

        if current.status.is_terminal() {
            return Err(AppError::Conflict(
                "Collect already finalized or cancelled".to_string(),
            ));
        }

        let collect = sqlx::query_as::<_, Collect>(
            r#"
            UPDATE collects
            SET checkin_at = $2, checkin_lat = $3, checkin_lng = $4,
                checkin_photos = $5, checkin_notes = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(record.timestamp)
        .bind(record.lat)
        .bind(record.lng)
        .bind(record.photos)
        .bind(record.notes)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(collect)
    }

    /// Finalizar a coleta com check-out e mover o veículo para em_estoque.
    ///
    /// Exige check-in prévio; a autorização da portaria passa pelo mesmo
    /// caminho, só com os campos preenchidos pelo servidor.
    pub async fn finalize_checkout(
        &self,
        id: Uuid,
        record: CheckRecord,
    ) -> Result<Collect, AppError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Collect>(
            "SELECT * FROM collects WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Collect '{}' not found", id)))?;

        ensure_can_finalize(&current)?;

        let collect = sqlx::query_as::<_, Collect>(
            r#"
            UPDATE collects
            SET status = 'finalizada',
                checkout_at = $2, checkout_lat = $3, checkout_lng = $4,
                checkout_photos = $5, checkout_notes = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(record.timestamp)
        .bind(record.lat)
        .bind(record.lng)
        .bind(record.photos)
        .bind(record.notes)
        .fetch_one(&mut *tx)
        .await?;

        // Entrada em estoque: pátio da coleta e timestamp para o faturamento
        sqlx::query(
            r#"
            UPDATE vehicles
            SET status = 'em_estoque', current_yard_id = $2, stock_entry_at = $3
            WHERE chassis = $1
            "#,
        )
        .bind(&collect.vehicle_chassis)
        .bind(collect.yard_id)
        .bind(record.timestamp)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(collect)
    }

    /// Cancelar uma coleta em trânsito
    pub async fn cancel(&self, id: Uuid) -> Result<Collect, AppError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Collect>(
            "SELECT * FROM collects WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Collect '{}' not found", id)))?;

        if current.status.is_terminal() {
            return Err(AppError::Conflict(
                "Collect already finalized or cancelled".to_string(),
            ));
        }

        let collect = sqlx::query_as::<_, Collect>(
            "UPDATE collects SET status = 'cancelado' WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(collect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn collect(status: CollectStatus, with_checkin: bool) -> Collect {
        Collect {
            id: Uuid::new_v4(),
            vehicle_chassis: "9BWZZZ377VT004251".to_string(),
            manufacturer_id: Uuid::new_v4(),
            yard_id: Uuid::new_v4(),
            driver_id: None,
            collect_date: NaiveDate::from_ymd_opt(2026, 8, 1).unwrap(),
            notes: None,
            status,
            checkin_at: with_checkin.then(Utc::now),
            checkin_lat: None,
            checkin_lng: None,
            checkin_photos: Vec::new(),
            checkin_notes: None,
            checkout_at: None,
            checkout_lat: None,
            checkout_lng: None,
            checkout_photos: Vec::new(),
            checkout_notes: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_finalize_requires_prior_checkin() {
        // vale também para a autorização de entrada da portaria
        let result = ensure_can_finalize(&collect(CollectStatus::EmTransito, false));
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[test]
    fn test_finalize_twice_conflicts() {
        let result = ensure_can_finalize(&collect(CollectStatus::Finalizada, true));
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[test]
    fn test_finalize_cancelled_conflicts() {
        let result = ensure_can_finalize(&collect(CollectStatus::Cancelado, true));
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[test]
    fn test_finalize_in_transit_with_checkin() {
        assert!(ensure_can_finalize(&collect(CollectStatus::EmTransito, true)).is_ok());
    }
}
