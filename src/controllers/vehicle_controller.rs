//! Controller de veículos
//!
//! Somente leitura: o status do veículo é movido pelo motor de ciclo de
//! vida (coleta e transporte), nunca por escrita direta.

use sqlx::PgPool;

use crate::dto::vehicle_dto::VehicleFilters;
use crate::models::vehicle::Vehicle;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::normalize_chassis;

const DEFAULT_LIMIT: i64 = 100;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn get_by_chassis(&self, chassis: &str) -> Result<Vehicle, AppError> {
        let chassis = normalize_chassis(chassis);

        self.repository
            .find_by_chassis(&chassis)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Veículo com chassi '{}' não encontrado", chassis))
            })
    }

    pub async fn list(&self, filters: VehicleFilters) -> Result<Vec<Vehicle>, AppError> {
        self.repository
            .list(
                filters.status,
                filters.yard_id,
                filters.client_id,
                filters.limit.unwrap_or(DEFAULT_LIMIT),
                filters.offset.unwrap_or(0),
            )
            .await
    }
}
