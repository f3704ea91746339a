//! DTOs de veículo

use serde::Deserialize;
use uuid::Uuid;

use crate::models::vehicle::VehicleStatus;

/// Filtros de listagem de veículos
#[derive(Debug, Deserialize)]
pub struct VehicleFilters {
    pub status: Option<VehicleStatus>,
    pub yard_id: Option<Uuid>,
    pub client_id: Option<Uuid>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
