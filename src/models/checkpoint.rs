//! Modelos de Checkpoint e TransportCheckpoint
//!
//! Checkpoint é um ponto de passagem reutilizável (catálogo). O vínculo com um
//! transporte específico, com ordem e acompanhamento de chegada, fica em
//! TransportCheckpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Checkpoint do catálogo - mapeia a tabela checkpoints
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Checkpoint {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub created_at: DateTime<Utc>,
}

/// Progresso de um checkpoint - mapeia o ENUM checkpoint_progress_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "checkpoint_progress_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CheckpointProgressStatus {
    Pendente,
    Alcancado,
    Concluido,
}

/// Vínculo ordenado entre transporte e checkpoint
///
/// order_index é único por transporte. Chegadas fora de ordem são permitidas:
/// pings de GPS chegam fora de ordem em campo.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TransportCheckpoint {
    pub id: Uuid,
    pub transport_id: Uuid,
    pub checkpoint_id: Uuid,
    pub order_index: i32,
    pub status: CheckpointProgressStatus,
    pub reached_at: Option<DateTime<Utc>>,
}
