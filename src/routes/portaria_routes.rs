//! Rotas da portaria
//!
//! Autorização de entrada (coletas chegando ao pátio), liberação de
//! saída (transportes despachados) e a fila de pendências do guichê.
//! Todas exigem perfil admin ou portaria.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::collect_controller::CollectController;
use crate::controllers::transport_controller::TransportController;
use crate::dto::collect_dto::CollectFilters;
use crate::dto::portaria_dto::GatePendingResponse;
use crate::dto::transport_dto::TransportFilters;
use crate::middleware::auth::{require_gate_role, AuthUser};
use crate::models::collect::{Collect, CollectStatus};
use crate::models::transport::{Transport, TransportStatus};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_portaria_router() -> Router<AppState> {
    Router::new()
        .route("/authorize/:collect_id", post(authorize_entry))
        .route("/authorize-exit/:transport_id", post(authorize_exit))
        .route("/pending", get(list_pending))
}

async fn authorize_entry(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(collect_id): Path<Uuid>,
) -> Result<Json<Collect>, AppError> {
    require_gate_role(&user)?;
    let controller = CollectController::new(state.pool.clone());
    Ok(Json(controller.authorize_entry(collect_id).await?))
}

async fn authorize_exit(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(transport_id): Path<Uuid>,
) -> Result<Json<Transport>, AppError> {
    require_gate_role(&user)?;
    let controller = TransportController::new(state.pool.clone());
    Ok(Json(controller.authorize_exit(transport_id).await?))
}

async fn list_pending(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<GatePendingResponse>, AppError> {
    require_gate_role(&user)?;

    let collects = CollectController::new(state.pool.clone());
    let transports = TransportController::new(state.pool.clone());

    let incoming_collects = collects
        .list(CollectFilters {
            status: Some(CollectStatus::EmTransito),
            yard_id: None,
            manufacturer_id: None,
            limit: None,
            offset: None,
        })
        .await?;

    let mut outgoing_transports = transports
        .list(TransportFilters {
            status: Some(TransportStatus::AguardandoSaida),
            client_id: None,
            origin_yard_id: None,
            limit: None,
            offset: None,
        })
        .await?;

    let pending = transports
        .list(TransportFilters {
            status: Some(TransportStatus::Pendente),
            client_id: None,
            origin_yard_id: None,
            limit: None,
            offset: None,
        })
        .await?;
    outgoing_transports.extend(pending);

    Ok(Json(GatePendingResponse {
        incoming_collects,
        outgoing_transports,
    }))
}
