//! Controller de coletas
//!
//! Motor de ciclo de vida da coleta: criação (com veículo implícito em
//! pre_estoque), check-in, check-out (finaliza e coloca o veículo em
//! estoque) e a autorização de entrada da portaria.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::collect_dto::{
    CheckFields, CollectFilters, CreateCollectRequest, UpdateCollectRequest,
};
use crate::models::collect::Collect;
use crate::repositories::cadastro_repository::{
    ClientRepository, DriverRepository, ManufacturerRepository, YardRepository,
};
use crate::repositories::collect_repository::{CheckRecord, CollectRepository};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{invalid_reference_error, AppError};
use crate::utils::validation::normalize_chassis;

const DEFAULT_LIMIT: i64 = 100;

impl CheckFields {
    /// Resolver os campos com defaults do servidor (timestamp = agora)
    fn into_record(self) -> CheckRecord {
        CheckRecord {
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
            lat: self.lat,
            lng: self.lng,
            photos: self.photos.unwrap_or_default(),
            notes: self.notes,
        }
    }
}

pub struct CollectController {
    collects: CollectRepository,
    vehicles: VehicleRepository,
    manufacturers: ManufacturerRepository,
    yards: YardRepository,
    drivers: DriverRepository,
    clients: ClientRepository,
}

impl CollectController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            collects: CollectRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            manufacturers: ManufacturerRepository::new(pool.clone()),
            yards: YardRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool.clone()),
            clients: ClientRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateCollectRequest) -> Result<Collect, AppError> {
        request.validate()?;

        let chassis = normalize_chassis(&request.vehicle_chassis);

        if self
            .manufacturers
            .find_by_id(request.manufacturer_id)
            .await?
            .is_none()
        {
            return Err(invalid_reference_error(
                "Manufacturer",
                &request.manufacturer_id.to_string(),
            ));
        }

        if self.yards.find_by_id(request.yard_id).await?.is_none() {
            return Err(invalid_reference_error("Yard", &request.yard_id.to_string()));
        }

        if let Some(driver_id) = request.driver_id {
            if self.drivers.find_by_id(driver_id).await?.is_none() {
                return Err(invalid_reference_error("Driver", &driver_id.to_string()));
            }
        }

        if let Some(client_id) = request.client_id {
            if self.clients.find_by_id(client_id).await?.is_none() {
                return Err(invalid_reference_error("Client", &client_id.to_string()));
            }
        }

        // Primeiro contato com o chassi cria o veículo em pre_estoque
        self.vehicles
            .ensure_exists(
                &chassis,
                request.brand,
                request.model,
                request.color,
                request.client_id,
            )
            .await?;

        let collect = self
            .collects
            .create(
                chassis,
                request.manufacturer_id,
                request.yard_id,
                request.driver_id,
                request.collect_date,
                request.notes,
            )
            .await?;

        log::info!(
            "📋 Coleta {} criada para o chassi {}",
            collect.id,
            collect.vehicle_chassis
        );

        Ok(collect)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Collect, AppError> {
        self.collects
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Coleta '{}' não encontrada", id)))
    }

    pub async fn list(&self, filters: CollectFilters) -> Result<Vec<Collect>, AppError> {
        self.collects
            .list(
                filters.status,
                filters.yard_id,
                filters.manufacturer_id,
                filters.limit.unwrap_or(DEFAULT_LIMIT),
                filters.offset.unwrap_or(0),
            )
            .await
    }

    /// Aplicar campos de check-in e/ou check-out (PATCH).
    ///
    /// O check-out finaliza a coleta e move o veículo para em_estoque; exige
    /// check-in prévio (registrado nesta mesma chamada ou antes).
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateCollectRequest,
    ) -> Result<Collect, AppError> {
        request.validate()?;

        let (checkin, checkout) = (request.checkin, request.checkout);

        if checkin.is_none() && checkout.is_none() {
            return Err(AppError::Validation(
                "Informe os campos de check-in ou check-out".to_string(),
            ));
        }

        let mut collect = None;

        if let Some(fields) = checkin {
            collect = Some(self.collects.record_checkin(id, fields.into_record()).await?);
        }

        if let Some(fields) = checkout {
            collect = Some(self.collects.finalize_checkout(id, fields.into_record()).await?);
            log::info!("✅ Coleta {} finalizada (check-out)", id);
        }

        // Um dos dois ramos sempre executou
        collect.ok_or_else(|| AppError::Internal("Update produced no result".to_string()))
    }

    /// Autorização de entrada pela portaria: check-out com campos
    /// preenchidos pelo servidor. Os invariantes são os mesmos do
    /// check-out do motorista, incluindo o check-in prévio.
    pub async fn authorize_entry(&self, id: Uuid) -> Result<Collect, AppError> {
        let record = CheckRecord {
            timestamp: Utc::now(),
            lat: None,
            lng: None,
            photos: Vec::new(),
            notes: Some("Entrada autorizada pela portaria".to_string()),
        };

        let collect = self.collects.finalize_checkout(id, record).await?;

        log::info!(
            "🚪 Portaria autorizou a entrada da coleta {} (chassi {})",
            id,
            collect.vehicle_chassis
        );

        Ok(collect)
    }

    pub async fn cancel(&self, id: Uuid) -> Result<Collect, AppError> {
        let collect = self.collects.cancel(id).await?;
        log::info!("🚫 Coleta {} cancelada", id);
        Ok(collect)
    }
}
