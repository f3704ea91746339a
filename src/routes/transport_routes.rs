//! Rotas de transportes
//!
//! Ciclo de vida do transporte: criação, timeline de checkpoints,
//! preparação para despacho, entrega e cancelamento. A liberação de
//! saída em si fica nas rotas de portaria.

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::transport_controller::TransportController;
use crate::dto::transport_dto::{
    AssignCheckpointsRequest, CreateTransportRequest, MarkCheckpointReachedRequest,
    RecordDeliveryRequest, TransportDetailResponse, TransportFilters,
};
use crate::middleware::auth::{require_write_role, AuthUser};
use crate::models::checkpoint::TransportCheckpoint;
use crate::models::transport::{Transport, TransportProgress};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_transport_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_transport))
        .route("/", get(list_transports))
        .route("/:id", get(get_transport))
        .route("/:id/progress", get(get_progress))
        .route("/:id/checkpoints", post(assign_checkpoints))
        .route("/:id/ready", post(mark_ready))
        .route("/:id/delivery", post(record_delivery))
        .route("/:id/cancel", post(cancel_transport))
        .route("/checkpoints/:tc_id/reached", post(mark_checkpoint_reached))
}

async fn create_transport(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateTransportRequest>,
) -> Result<Json<Transport>, AppError> {
    require_write_role(&user)?;
    let controller = TransportController::new(state.pool.clone());
    Ok(Json(controller.create(request).await?))
}

async fn list_transports(
    State(state): State<AppState>,
    Query(filters): Query<TransportFilters>,
) -> Result<Json<Vec<Transport>>, AppError> {
    let controller = TransportController::new(state.pool.clone());
    Ok(Json(controller.list(filters).await?))
}

async fn get_transport(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TransportDetailResponse>, AppError> {
    let controller = TransportController::new(state.pool.clone());
    Ok(Json(controller.get_detail(id).await?))
}

async fn get_progress(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TransportProgress>, AppError> {
    let controller = TransportController::new(state.pool.clone());
    Ok(Json(controller.get_progress(id).await?))
}

async fn assign_checkpoints(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<AssignCheckpointsRequest>,
) -> Result<Json<Vec<TransportCheckpoint>>, AppError> {
    require_write_role(&user)?;
    let controller = TransportController::new(state.pool.clone());
    Ok(Json(controller.assign_checkpoints(id, request).await?))
}

async fn mark_ready(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Transport>, AppError> {
    require_write_role(&user)?;
    let controller = TransportController::new(state.pool.clone());
    Ok(Json(controller.mark_ready_for_exit(id).await?))
}

async fn record_delivery(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<RecordDeliveryRequest>,
) -> Result<Json<Transport>, AppError> {
    require_write_role(&user)?;
    let controller = TransportController::new(state.pool.clone());
    Ok(Json(controller.record_delivery(id, request).await?))
}

async fn cancel_transport(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Transport>, AppError> {
    require_write_role(&user)?;
    let controller = TransportController::new(state.pool.clone());
    Ok(Json(controller.cancel(id).await?))
}

async fn mark_checkpoint_reached(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(tc_id): Path<Uuid>,
    Json(request): Json<MarkCheckpointReachedRequest>,
) -> Result<Json<TransportCheckpoint>, AppError> {
    require_write_role(&user)?;
    let controller = TransportController::new(state.pool.clone());
    Ok(Json(
        controller
            .mark_checkpoint_reached(tc_id, request.finalized)
            .await?,
    ))
}
