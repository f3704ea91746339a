use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::checkpoint_controller::CheckpointController;
use crate::dto::checkpoint_dto::{CreateCheckpointRequest, UpdateCheckpointRequest};
use crate::middleware::auth::{require_write_role, AuthUser};
use crate::models::checkpoint::Checkpoint;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_checkpoint_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_checkpoint))
        .route("/", get(list_checkpoints))
        .route("/:id", get(get_checkpoint))
        .route("/:id", put(update_checkpoint))
        .route("/:id", delete(delete_checkpoint))
}

async fn create_checkpoint(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateCheckpointRequest>,
) -> Result<Json<Checkpoint>, AppError> {
    require_write_role(&user)?;
    let controller = CheckpointController::new(state.pool.clone());
    Ok(Json(controller.create(request).await?))
}

async fn list_checkpoints(
    State(state): State<AppState>,
) -> Result<Json<Vec<Checkpoint>>, AppError> {
    let controller = CheckpointController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_checkpoint(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Checkpoint>, AppError> {
    let controller = CheckpointController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn update_checkpoint(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCheckpointRequest>,
) -> Result<Json<Checkpoint>, AppError> {
    require_write_role(&user)?;
    let controller = CheckpointController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_checkpoint(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    require_write_role(&user)?;
    let controller = CheckpointController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}
