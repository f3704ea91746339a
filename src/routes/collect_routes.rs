//! Rotas de coletas
//!
//! Ciclo de vida da coleta: criação, listagem, check-in/check-out (PATCH)
//! e cancelamento.

use axum::{
    extract::{Path, Query, State},
    routing::{get, patch, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::collect_controller::CollectController;
use crate::dto::collect_dto::{CollectFilters, CreateCollectRequest, UpdateCollectRequest};
use crate::middleware::auth::{require_write_role, AuthUser};
use crate::models::collect::Collect;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_collect_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_collect))
        .route("/", get(list_collects))
        .route("/:id", get(get_collect))
        .route("/:id", patch(update_collect))
        .route("/:id/cancel", post(cancel_collect))
}

async fn create_collect(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateCollectRequest>,
) -> Result<Json<Collect>, AppError> {
    require_write_role(&user)?;
    let controller = CollectController::new(state.pool.clone());
    Ok(Json(controller.create(request).await?))
}

async fn list_collects(
    State(state): State<AppState>,
    Query(filters): Query<CollectFilters>,
) -> Result<Json<Vec<Collect>>, AppError> {
    let controller = CollectController::new(state.pool.clone());
    Ok(Json(controller.list(filters).await?))
}

async fn get_collect(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Collect>, AppError> {
    let controller = CollectController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn update_collect(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCollectRequest>,
) -> Result<Json<Collect>, AppError> {
    require_write_role(&user)?;
    let controller = CollectController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn cancel_collect(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<Collect>, AppError> {
    require_write_role(&user)?;
    let controller = CollectController::new(state.pool.clone());
    Ok(Json(controller.cancel(id).await?))
}
