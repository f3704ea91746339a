//! DTOs de transporte

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::checkpoint::{Checkpoint, CheckpointProgressStatus};
use crate::models::transport::{Transport, TransportProgress};

/// Request para criar um transporte
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTransportRequest {
    #[validate(custom = "crate::utils::validation::validate_chassis")]
    pub vehicle_chassis: String,

    pub client_id: Uuid,
    pub origin_yard_id: Uuid,
    pub delivery_location_id: Uuid,
    pub driver_id: Option<Uuid>,
    /// Data prevista de entrega (ETA)
    pub delivery_date: Option<NaiveDate>,
}

/// Request para substituir a sequência de checkpoints de um transporte
///
/// A lista é ordenada: order_index segue a posição no array. A chamada
/// substitui integralmente a atribuição anterior (não é aditiva).
#[derive(Debug, Deserialize)]
pub struct AssignCheckpointsRequest {
    pub checkpoint_ids: Vec<Uuid>,
}

/// Request para marcar a chegada em um checkpoint
#[derive(Debug, Deserialize)]
pub struct MarkCheckpointReachedRequest {
    /// false = alcancado, true = concluido
    pub finalized: bool,
}

/// Request para registrar a entrega no cliente
#[derive(Debug, Deserialize)]
pub struct RecordDeliveryRequest {
    /// Quando omitido, o servidor preenche com o horário atual
    pub checkout_datetime: Option<DateTime<Utc>>,
}

/// Checkpoint de um transporte com o dado de catálogo resolvido
#[derive(Debug, Serialize)]
pub struct TransportCheckpointDetail {
    pub id: Uuid,
    pub order_index: i32,
    pub status: CheckpointProgressStatus,
    pub reached_at: Option<DateTime<Utc>>,
    pub checkpoint: Checkpoint,
}

/// Response de transporte com timeline e progresso
#[derive(Debug, Serialize)]
pub struct TransportDetailResponse {
    #[serde(flatten)]
    pub transport: Transport,
    pub checkpoints: Vec<TransportCheckpointDetail>,
    pub progress: TransportProgress,
}

/// Filtros de listagem de transportes
#[derive(Debug, Deserialize)]
pub struct TransportFilters {
    pub status: Option<crate::models::transport::TransportStatus>,
    pub client_id: Option<Uuid>,
    pub origin_yard_id: Option<Uuid>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
