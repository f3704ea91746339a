//! Rotas de cadastro (motoristas, montadoras, pátios e clientes)
//!
//! CRUD padrão; escrita vetada ao perfil visualizador.

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::cadastro_controller::{
    ClientController, DriverController, ManufacturerController, YardController,
};
use crate::dto::cadastro_dto::{
    CreateClientRequest, CreateDriverRequest, CreateManufacturerRequest, CreateYardRequest,
    UpdateClientRequest, UpdateDriverRequest, UpdateManufacturerRequest, UpdateYardRequest,
};
use crate::middleware::auth::{require_write_role, AuthUser};
use crate::models::client::Client;
use crate::models::driver::Driver;
use crate::models::manufacturer::Manufacturer;
use crate::models::yard::Yard;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_driver))
        .route("/", get(list_drivers))
        .route("/:id", get(get_driver))
        .route("/:id", put(update_driver))
        .route("/:id", delete(delete_driver))
}

pub fn create_manufacturer_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_manufacturer))
        .route("/", get(list_manufacturers))
        .route("/:id", get(get_manufacturer))
        .route("/:id", put(update_manufacturer))
        .route("/:id", delete(delete_manufacturer))
}

pub fn create_yard_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_yard))
        .route("/", get(list_yards))
        .route("/:id", get(get_yard))
        .route("/:id", put(update_yard))
        .route("/:id", delete(delete_yard))
}

pub fn create_client_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_client))
        .route("/", get(list_clients))
        .route("/:id", get(get_client))
        .route("/:id", put(update_client))
        .route("/:id", delete(delete_client))
}

async fn create_driver(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateDriverRequest>,
) -> Result<Json<Driver>, AppError> {
    require_write_role(&user)?;
    let controller = DriverController::new(state.pool.clone());
    Ok(Json(controller.create(request).await?))
}

async fn list_drivers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Driver>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_driver(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Driver>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn update_driver(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateDriverRequest>,
) -> Result<Json<Driver>, AppError> {
    require_write_role(&user)?;
    let controller = DriverController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_driver(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    require_write_role(&user)?;
    let controller = DriverController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

async fn create_manufacturer(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateManufacturerRequest>,
) -> Result<Json<Manufacturer>, AppError> {
    require_write_role(&user)?;
    let controller = ManufacturerController::new(state.pool.clone());
    Ok(Json(controller.create(request).await?))
}

async fn list_manufacturers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Manufacturer>>, AppError> {
    let controller = ManufacturerController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_manufacturer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Manufacturer>, AppError> {
    let controller = ManufacturerController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn update_manufacturer(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateManufacturerRequest>,
) -> Result<Json<Manufacturer>, AppError> {
    require_write_role(&user)?;
    let controller = ManufacturerController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_manufacturer(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    require_write_role(&user)?;
    let controller = ManufacturerController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

async fn create_yard(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateYardRequest>,
) -> Result<Json<Yard>, AppError> {
    require_write_role(&user)?;
    let controller = YardController::new(state.pool.clone());
    Ok(Json(controller.create(request).await?))
}

async fn list_yards(State(state): State<AppState>) -> Result<Json<Vec<Yard>>, AppError> {
    let controller = YardController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_yard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Yard>, AppError> {
    let controller = YardController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn update_yard(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateYardRequest>,
) -> Result<Json<Yard>, AppError> {
    require_write_role(&user)?;
    let controller = YardController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_yard(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    require_write_role(&user)?;
    let controller = YardController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

async fn create_client(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateClientRequest>,
) -> Result<Json<Client>, AppError> {
    require_write_role(&user)?;
    let controller = ClientController::new(state.pool.clone());
    Ok(Json(controller.create(request).await?))
}

async fn list_clients(State(state): State<AppState>) -> Result<Json<Vec<Client>>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Client>, AppError> {
    let controller = ClientController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn update_client(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateClientRequest>,
) -> Result<Json<Client>, AppError> {
    require_write_role(&user)?;
    let controller = ClientController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_client(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    require_write_role(&user)?;
    let controller = ClientController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}
