//! Modelo de Collect
//!
//! Uma coleta representa a retirada de um veículo na montadora e a entrega
//! no pátio. Os sub-registros de check-in e check-out (timestamp, geolocalização,
//! fotos, observações) são opcionais e independentes entre si, mas o check-out
//! só pode ser registrado após o check-in.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado da coleta - mapeia o ENUM collect_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "collect_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CollectStatus {
    EmTransito,
    Finalizada,
    Cancelado,
}

impl CollectStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, CollectStatus::Finalizada | CollectStatus::Cancelado)
    }
}

/// Collect principal - mapeia a tabela collects
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Collect {
    pub id: Uuid,
    pub vehicle_chassis: String,
    pub manufacturer_id: Uuid,
    pub yard_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub collect_date: NaiveDate,
    pub notes: Option<String>,
    pub status: CollectStatus,
    pub checkin_at: Option<DateTime<Utc>>,
    pub checkin_lat: Option<f64>,
    pub checkin_lng: Option<f64>,
    pub checkin_photos: Vec<String>,
    pub checkin_notes: Option<String>,
    pub checkout_at: Option<DateTime<Utc>>,
    pub checkout_lat: Option<f64>,
    pub checkout_lng: Option<f64>,
    pub checkout_photos: Vec<String>,
    pub checkout_notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Collect {
    pub fn has_checkin(&self) -> bool {
        self.checkin_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_terminal() {
        assert!(CollectStatus::Finalizada.is_terminal());
        assert!(CollectStatus::Cancelado.is_terminal());
        assert!(!CollectStatus::EmTransito.is_terminal());
    }
}
