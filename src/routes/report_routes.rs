use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::report_controller::ReportController;
use crate::dto::report_dto::{DashboardSummary, YardBillingReport};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/yard-billing", get(yard_billing))
        .route("/dashboard", get(dashboard))
}

async fn yard_billing(
    State(state): State<AppState>,
) -> Result<Json<YardBillingReport>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    Ok(Json(controller.yard_billing().await?))
}

async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardSummary>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    Ok(Json(controller.dashboard().await?))
}
