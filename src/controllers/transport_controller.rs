//! Controller de transportes
//!
//! Motor de ciclo de vida do transporte: criação (exige veículo em
//! estoque), timeline de checkpoints, liberação de saída pela portaria,
//! registro de entrega e cancelamento.

use chrono::Utc;
use rand::Rng;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::transport_dto::{
    AssignCheckpointsRequest, CreateTransportRequest, RecordDeliveryRequest,
    TransportCheckpointDetail, TransportDetailResponse, TransportFilters,
};
use crate::models::checkpoint::{Checkpoint, CheckpointProgressStatus, TransportCheckpoint};
use crate::models::transport::{compute_progress, Transport, TransportProgress};
use crate::repositories::cadastro_repository::{ClientRepository, DriverRepository, YardRepository};
use crate::repositories::checkpoint_repository::CheckpointRepository;
use crate::repositories::transport_repository::{TransportCheckpointJoined, TransportRepository};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{invalid_reference_error, AppError};
use crate::utils::validation::normalize_chassis;

const DEFAULT_LIMIT: i64 = 100;
const REQUEST_NUMBER_ATTEMPTS: u32 = 5;

pub struct TransportController {
    transports: TransportRepository,
    vehicles: VehicleRepository,
    clients: ClientRepository,
    yards: YardRepository,
    drivers: DriverRepository,
    checkpoints: CheckpointRepository,
}

impl TransportController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            transports: TransportRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            clients: ClientRepository::new(pool.clone()),
            yards: YardRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool.clone()),
            checkpoints: CheckpointRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateTransportRequest) -> Result<Transport, AppError> {
        request.validate()?;

        let chassis = normalize_chassis(&request.vehicle_chassis);

        let vehicle = self
            .vehicles
            .find_by_chassis(&chassis)
            .await?
            .ok_or_else(|| invalid_reference_error("Vehicle", &chassis))?;

        // Só veículo em estoque pode sair para entrega
        if !vehicle.status.can_start_transport() {
            return Err(AppError::Validation(format!(
                "Veículo '{}' não está em estoque (status atual: {})",
                chassis,
                vehicle.status.as_str()
            )));
        }

        if self.clients.find_by_id(request.client_id).await?.is_none() {
            return Err(invalid_reference_error(
                "Client",
                &request.client_id.to_string(),
            ));
        }

        if self.yards.find_by_id(request.origin_yard_id).await?.is_none() {
            return Err(invalid_reference_error(
                "Yard",
                &request.origin_yard_id.to_string(),
            ));
        }

        if self
            .yards
            .find_by_id(request.delivery_location_id)
            .await?
            .is_none()
        {
            return Err(invalid_reference_error(
                "Delivery location",
                &request.delivery_location_id.to_string(),
            ));
        }

        if let Some(driver_id) = request.driver_id {
            if self.drivers.find_by_id(driver_id).await?.is_none() {
                return Err(invalid_reference_error("Driver", &driver_id.to_string()));
            }
        }

        let request_number = self.generate_request_number().await?;

        let transport = self
            .transports
            .create(
                request_number,
                chassis,
                request.client_id,
                request.origin_yard_id,
                request.delivery_location_id,
                request.driver_id,
                request.delivery_date,
            )
            .await?;

        log::info!(
            "🚚 Transporte {} criado para o chassi {}",
            transport.request_number,
            transport.vehicle_chassis
        );

        Ok(transport)
    }

    /// Número de solicitação legível, único por restrição da base
    async fn generate_request_number(&self) -> Result<String, AppError> {
        for _ in 0..REQUEST_NUMBER_ATTEMPTS {
            let suffix: u32 = rand::thread_rng().gen_range(0..10_000);
            let candidate = format!("TR-{}-{:04}", Utc::now().format("%Y%m%d"), suffix);

            if !self.transports.request_number_exists(&candidate).await? {
                return Ok(candidate);
            }
        }

        Err(AppError::Internal(
            "Could not generate a unique request number".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Transport, AppError> {
        self.transports
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Transporte '{}' não encontrado", id)))
    }

    pub async fn list(&self, filters: TransportFilters) -> Result<Vec<Transport>, AppError> {
        self.transports
            .list(
                filters.status,
                filters.client_id,
                filters.origin_yard_id,
                filters.limit.unwrap_or(DEFAULT_LIMIT),
                filters.offset.unwrap_or(0),
            )
            .await
    }

    /// Transporte com timeline de checkpoints e progresso calculado
    pub async fn get_detail(&self, id: Uuid) -> Result<TransportDetailResponse, AppError> {
        let transport = self.get_by_id(id).await?;
        let rows = self.transports.list_checkpoints(id).await?;

        let progress = progress_for(&transport, &rows);
        let checkpoints = rows.into_iter().map(detail_from_row).collect();

        Ok(TransportDetailResponse {
            transport,
            checkpoints,
            progress,
        })
    }

    pub async fn get_progress(&self, id: Uuid) -> Result<TransportProgress, AppError> {
        let transport = self.get_by_id(id).await?;
        let rows = self.transports.list_checkpoints(id).await?;

        Ok(progress_for(&transport, &rows))
    }

    /// Substituir a sequência de checkpoints (replace completo, não aditivo)
    pub async fn assign_checkpoints(
        &self,
        transport_id: Uuid,
        request: AssignCheckpointsRequest,
    ) -> Result<Vec<TransportCheckpoint>, AppError> {
        for checkpoint_id in &request.checkpoint_ids {
            if !self.checkpoints.exists(*checkpoint_id).await? {
                return Err(invalid_reference_error(
                    "Checkpoint",
                    &checkpoint_id.to_string(),
                ));
            }
        }

        self.transports
            .replace_checkpoints(transport_id, &request.checkpoint_ids)
            .await
    }

    pub async fn mark_checkpoint_reached(
        &self,
        transport_checkpoint_id: Uuid,
        finalized: bool,
    ) -> Result<TransportCheckpoint, AppError> {
        self.transports
            .mark_checkpoint_reached(transport_checkpoint_id, finalized)
            .await
    }

    pub async fn mark_ready_for_exit(&self, id: Uuid) -> Result<Transport, AppError> {
        let transport = self.transports.mark_ready_for_exit(id).await?;
        log::info!("📦 Transporte {} pronto para despacho", transport.request_number);
        Ok(transport)
    }

    pub async fn authorize_exit(&self, id: Uuid) -> Result<Transport, AppError> {
        let transport = self.transports.authorize_exit(id).await?;
        log::info!(
            "🚪 Portaria liberou a saída do transporte {} (chassi {})",
            transport.request_number,
            transport.vehicle_chassis
        );
        Ok(transport)
    }

    pub async fn record_delivery(
        &self,
        id: Uuid,
        request: RecordDeliveryRequest,
    ) -> Result<Transport, AppError> {
        let checkout_datetime = request.checkout_datetime.unwrap_or_else(Utc::now);
        let transport = self.transports.record_delivery(id, checkout_datetime).await?;

        log::info!("✅ Transporte {} entregue", transport.request_number);

        Ok(transport)
    }

    pub async fn cancel(&self, id: Uuid) -> Result<Transport, AppError> {
        let transport = self.transports.cancel(id).await?;
        log::info!("🚫 Transporte {} cancelado", transport.request_number);
        Ok(transport)
    }
}

fn progress_for(transport: &Transport, rows: &[TransportCheckpointJoined]) -> TransportProgress {
    let concluded = rows
        .iter()
        .filter(|r| r.status == CheckpointProgressStatus::Concluido)
        .count() as u32;

    compute_progress(
        rows.len() as u32,
        concluded,
        transport.checkin_datetime.is_some(),
        transport.checkout_datetime.is_some(),
    )
}

fn detail_from_row(row: TransportCheckpointJoined) -> TransportCheckpointDetail {
    TransportCheckpointDetail {
        id: row.id,
        order_index: row.order_index,
        status: row.status,
        reached_at: row.reached_at,
        checkpoint: Checkpoint {
            id: row.checkpoint_id,
            name: row.checkpoint_name,
            address: row.checkpoint_address,
            lat: row.checkpoint_lat,
            lng: row.checkpoint_lng,
            created_at: row.checkpoint_created_at,
        },
    }
}
