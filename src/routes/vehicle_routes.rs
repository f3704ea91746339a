use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::VehicleFilters;
use crate::models::vehicle::Vehicle;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/:chassis", get(get_vehicle))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(filters): Query<VehicleFilters>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    Ok(Json(controller.list(filters).await?))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(chassis): Path<String>,
) -> Result<Json<Vehicle>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    Ok(Json(controller.get_by_chassis(&chassis).await?))
}
