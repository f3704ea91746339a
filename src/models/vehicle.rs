//! Modelo de Vehicle
//!
//! Veículos são identificados pelo chassi (único) e criados implicitamente
//! na primeira coleta que referencia um chassi desconhecido.
//! Mapeia a tabela vehicles e o ENUM vehicle_status do Postgres.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado do veículo - mapeia o ENUM vehicle_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "vehicle_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    PreEstoque,
    EmEstoque,
    EmTransito,
    Entregue,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::PreEstoque => "pre_estoque",
            VehicleStatus::EmEstoque => "em_estoque",
            VehicleStatus::EmTransito => "em_transito",
            VehicleStatus::Entregue => "entregue",
        }
    }

    /// Um transporte só pode ser criado para veículo em estoque
    pub fn can_start_transport(&self) -> bool {
        matches!(self, VehicleStatus::EmEstoque)
    }
}

/// Vehicle principal - mapeia a tabela vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub chassis: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
    pub status: VehicleStatus,
    pub current_yard_id: Option<Uuid>,
    pub client_id: Option<Uuid>,
    pub stock_entry_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}
