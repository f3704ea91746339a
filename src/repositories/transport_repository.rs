//! Repositório de transportes
//!
//! Concentra as transições de status do transporte e a manutenção da
//! timeline de checkpoints. As transições que também movem o veículo
//! (saída do pátio, entrega, cancelamento) rodam em transação única com
//! lock da linha do transporte.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::checkpoint::{CheckpointProgressStatus, TransportCheckpoint};
use crate::models::transport::{Transport, TransportStatus};
use crate::utils::errors::AppError;

/// Linha da timeline com o checkpoint de catálogo resolvido
#[derive(Debug, FromRow)]
pub struct TransportCheckpointJoined {
    pub id: Uuid,
    pub transport_id: Uuid,
    pub order_index: i32,
    pub status: CheckpointProgressStatus,
    pub reached_at: Option<DateTime<Utc>>,
    pub checkpoint_id: Uuid,
    pub checkpoint_name: String,
    pub checkpoint_address: String,
    pub checkpoint_lat: f64,
    pub checkpoint_lng: f64,
    pub checkpoint_created_at: DateTime<Utc>,
}

/// Pares (order_index, checkpoint_id) da nova timeline, na ordem recebida
pub(crate) fn checkpoint_assignments(checkpoint_ids: &[Uuid]) -> Vec<(i32, Uuid)> {
    checkpoint_ids
        .iter()
        .enumerate()
        .map(|(index, id)| (index as i32, *id))
        .collect()
}

pub struct TransportRepository {
    pool: PgPool,
}

impl TransportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        request_number: String,
        vehicle_chassis: String,
        client_id: Uuid,
        origin_yard_id: Uuid,
        delivery_location_id: Uuid,
        driver_id: Option<Uuid>,
        delivery_date: Option<NaiveDate>,
    ) -> Result<Transport, AppError> {
        let transport = sqlx::query_as::<_, Transport>(
            r#"
            INSERT INTO transports
                (id, request_number, vehicle_chassis, client_id, origin_yard_id,
                 delivery_location_id, driver_id, status, delivery_date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'pendente', $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request_number)
        .bind(vehicle_chassis)
        .bind(client_id)
        .bind(origin_yard_id)
        .bind(delivery_location_id)
        .bind(driver_id)
        .bind(delivery_date)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(transport)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Transport>, AppError> {
        let transport =
            sqlx::query_as::<_, Transport>("SELECT * FROM transports WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(transport)
    }

    pub async fn request_number_exists(&self, request_number: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM transports WHERE request_number = $1)",
        )
        .bind(request_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn list(
        &self,
        status: Option<TransportStatus>,
        client_id: Option<Uuid>,
        origin_yard_id: Option<Uuid>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Transport>, AppError> {
        let transports = sqlx::query_as::<_, Transport>(
            r#"
            SELECT * FROM transports
            WHERE ($1::transport_status IS NULL OR status = $1)
              AND ($2::uuid IS NULL OR client_id = $2)
              AND ($3::uuid IS NULL OR origin_yard_id = $3)
            ORDER BY created_at DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(status)
        .bind(client_id)
        .bind(origin_yard_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(transports)
    }

    /// Marcar o transporte como pronto para despacho (pendente → aguardando_saida)
    pub async fn mark_ready_for_exit(&self, id: Uuid) -> Result<Transport, AppError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Transport>(
            "SELECT * FROM transports WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Transport '{}' not found", id)))?;

        if current.status != TransportStatus::Pendente {
            return Err(AppError::Conflict(format!(
                "Transport cannot be marked ready from status '{:?}'",
                current.status
            )));
        }

        let transport = sqlx::query_as::<_, Transport>(
            "UPDATE transports SET status = 'aguardando_saida' WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(transport)
    }

    /// Autorizar a saída do pátio (ação da portaria).
    ///
    /// Exige status aguardando liberação (pendente ou aguardando_saida);
    /// grava o horário de saída e move o veículo para em_transito na mesma
    /// transação. Falha sem tocar o veículo em qualquer outro status.
    pub async fn authorize_exit(&self, id: Uuid) -> Result<Transport, AppError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Transport>(
            "SELECT * FROM transports WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Transport '{}' not found", id)))?;

        if !current.status.awaiting_gate_release() {
            return Err(AppError::Conflict(format!(
                "Transport is not awaiting gate release (status '{:?}')",
                current.status
            )));
        }

        let now = Utc::now();

        let transport = sqlx::query_as::<_, Transport>(
            r#"
            UPDATE transports
            SET status = 'em_transito', checkin_datetime = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE vehicles SET status = 'em_transito' WHERE chassis = $1")
            .bind(&transport.vehicle_chassis)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(transport)
    }

    /// Registrar a entrega no cliente (em_transito → entregue)
    pub async fn record_delivery(
        &self,
        id: Uuid,
        checkout_datetime: DateTime<Utc>,
    ) -> Result<Transport, AppError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Transport>(
            "SELECT * FROM transports WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Transport '{}' not found", id)))?;

        if current.status != TransportStatus::EmTransito {
            return Err(AppError::Conflict(format!(
                "Delivery can only be recorded for a transport in transit (status '{:?}')",
                current.status
            )));
        }

        let transport = sqlx::query_as::<_, Transport>(
            r#"
            UPDATE transports
            SET status = 'entregue', checkout_datetime = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(checkout_datetime)
        .fetch_one(&mut *tx)
        .await?;

        // O transporte é o registro terminal; o veículo acompanha com o
        // cliente carimbado como dono
        sqlx::query(
            r#"
            UPDATE vehicles
            SET status = 'entregue', client_id = $2, current_yard_id = NULL
            WHERE chassis = $1
            "#,
        )
        .bind(&transport.vehicle_chassis)
        .bind(transport.client_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(transport)
    }

    /// Cancelar um transporte não terminal.
    ///
    /// Se o veículo já havia saído do pátio, ele retorna para em_estoque no
    /// pátio de origem com nova data de entrada.
    pub async fn cancel(&self, id: Uuid) -> Result<Transport, AppError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Transport>(
            "SELECT * FROM transports WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Transport '{}' not found", id)))?;

        if current.status.is_terminal() {
            return Err(AppError::Conflict(
                "Transport already delivered or cancelled".to_string(),
            ));
        }

        let was_in_transit = current.status == TransportStatus::EmTransito;

        let transport = sqlx::query_as::<_, Transport>(
            "UPDATE transports SET status = 'cancelado' WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        if was_in_transit {
            sqlx::query(
                r#"
                UPDATE vehicles
                SET status = 'em_estoque', current_yard_id = $2, stock_entry_at = $3
                WHERE chassis = $1
                "#,
            )
            .bind(&transport.vehicle_chassis)
            .bind(transport.origin_yard_id)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(transport)
    }

    /// Substituir integralmente a sequência de checkpoints do transporte.
    ///
    /// Apaga as linhas existentes e insere a nova lista com order_index
    /// seguindo a posição; todos os status voltam a pendente.
    pub async fn replace_checkpoints(
        &self,
        transport_id: Uuid,
        checkpoint_ids: &[Uuid],
    ) -> Result<Vec<TransportCheckpoint>, AppError> {
        let mut tx = self.pool.begin().await?;

        let current = sqlx::query_as::<_, Transport>(
            "SELECT * FROM transports WHERE id = $1 FOR UPDATE",
        )
        .bind(transport_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("Transport '{}' not found", transport_id))
        })?;

        if current.status.is_terminal() {
            return Err(AppError::Conflict(
                "Cannot assign checkpoints to a finished transport".to_string(),
            ));
        }

        sqlx::query("DELETE FROM transport_checkpoints WHERE transport_id = $1")
            .bind(transport_id)
            .execute(&mut *tx)
            .await?;

        let mut assigned = Vec::with_capacity(checkpoint_ids.len());
        for (order_index, checkpoint_id) in checkpoint_assignments(checkpoint_ids) {
            let row = sqlx::query_as::<_, TransportCheckpoint>(
                r#"
                INSERT INTO transport_checkpoints
                    (id, transport_id, checkpoint_id, order_index, status)
                VALUES ($1, $2, $3, $4, 'pendente')
                RETURNING *
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(transport_id)
            .bind(checkpoint_id)
            .bind(order_index)
            .fetch_one(&mut *tx)
            .await?;

            assigned.push(row);
        }

        tx.commit().await?;

        Ok(assigned)
    }

    /// Marcar um checkpoint como alcançado ou concluído.
    ///
    /// Chegadas fora de ordem são aceitas: pings de GPS não chegam em ordem.
    pub async fn mark_checkpoint_reached(
        &self,
        transport_checkpoint_id: Uuid,
        finalized: bool,
    ) -> Result<TransportCheckpoint, AppError> {
        let status = if finalized {
            CheckpointProgressStatus::Concluido
        } else {
            CheckpointProgressStatus::Alcancado
        };

        let row = sqlx::query_as::<_, TransportCheckpoint>(
            r#"
            UPDATE transport_checkpoints
            SET status = $2, reached_at = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(transport_checkpoint_id)
        .bind(status)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Transport checkpoint '{}' not found",
                transport_checkpoint_id
            ))
        })?;

        Ok(row)
    }

    /// Timeline do transporte com os checkpoints de catálogo resolvidos
    pub async fn list_checkpoints(
        &self,
        transport_id: Uuid,
    ) -> Result<Vec<TransportCheckpointJoined>, AppError> {
        let rows = sqlx::query_as::<_, TransportCheckpointJoined>(
            r#"
            SELECT tc.id, tc.transport_id, tc.order_index, tc.status, tc.reached_at,
                   c.id AS checkpoint_id, c.name AS checkpoint_name,
                   c.address AS checkpoint_address, c.lat AS checkpoint_lat,
                   c.lng AS checkpoint_lng, c.created_at AS checkpoint_created_at
            FROM transport_checkpoints tc
            JOIN checkpoints c ON c.id = tc.checkpoint_id
            WHERE tc.transport_id = $1
            ORDER BY tc.order_index
            "#,
        )
        .bind(transport_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::VehicleStatus;

    #[test]
    fn test_reassignment_replaces_the_whole_timeline() {
        let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

        let first = checkpoint_assignments(&[a, b, c]);
        assert_eq!(first, vec![(0, a), (1, b), (2, c)]);

        // a segunda atribuição não é aditiva: só as novas linhas existem
        let second = checkpoint_assignments(&[c, a]);
        assert_eq!(second.len(), 2);
        assert_eq!(second, vec![(0, c), (1, a)]);
    }

    #[test]
    fn test_assignments_empty_list() {
        assert!(checkpoint_assignments(&[]).is_empty());
    }

    #[test]
    fn test_vehicle_flow_from_collect_to_delivery() {
        // recém-criado pela coleta: ainda não pode sair para entrega
        assert!(!VehicleStatus::PreEstoque.can_start_transport());

        // check-out da coleta coloca o veículo em estoque
        assert!(VehicleStatus::EmEstoque.can_start_transport());

        // transporte criado pendente aguarda a liberação da portaria
        assert!(TransportStatus::Pendente.awaiting_gate_release());

        // após a liberação o veículo em trânsito não inicia outro transporte
        assert!(!VehicleStatus::EmTransito.can_start_transport());
        assert!(!TransportStatus::EmTransito.awaiting_gate_release());

        // a entrega encerra o transporte
        assert!(TransportStatus::Entregue.is_terminal());
        assert!(!VehicleStatus::Entregue.can_start_transport());
    }
}
