//! DTOs de coleta

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Request para criar uma coleta
///
/// brand/model/color alimentam a criação implícita do veículo quando o
/// chassi ainda não é conhecido.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCollectRequest {
    #[validate(custom = "crate::utils::validation::validate_chassis")]
    pub vehicle_chassis: String,

    pub manufacturer_id: Uuid,
    pub yard_id: Uuid,
    pub driver_id: Option<Uuid>,
    /// Cliente dono do veículo (alimenta o faturamento de pátio)
    pub client_id: Option<Uuid>,
    pub collect_date: NaiveDate,

    #[validate(length(max = 500))]
    pub notes: Option<String>,

    #[validate(length(min = 2, max = 50))]
    pub brand: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub model: Option<String>,

    #[validate(length(min = 2, max = 30))]
    pub color: Option<String>,
}

/// Sub-registro de check-in/check-out de uma coleta
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CheckFields {
    /// Quando omitido, o servidor preenche com o horário atual
    pub timestamp: Option<DateTime<Utc>>,

    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: Option<f64>,

    pub photos: Option<Vec<String>>,

    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

/// Request de atualização de coleta (PATCH)
///
/// Aplica campos de check-in e/ou check-out. O check-out dispara a
/// finalização da coleta e a entrada do veículo em estoque.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCollectRequest {
    #[validate]
    pub checkin: Option<CheckFields>,

    #[validate]
    pub checkout: Option<CheckFields>,
}

/// Filtros de listagem de coletas
#[derive(Debug, Deserialize)]
pub struct CollectFilters {
    pub status: Option<crate::models::collect::CollectStatus>,
    pub yard_id: Option<Uuid>,
    pub manufacturer_id: Option<Uuid>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
