use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{LoginRequest, LoginResponse, RefreshRequest, RefreshResponse};
use crate::dto::user_dto::UserResponse;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rotas de autenticação abertas (sem token)
pub fn create_public_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/refresh", post(refresh))
}

/// Rotas de autenticação protegidas (exigem token de acesso)
pub fn create_protected_auth_router() -> Router<AppState> {
    Router::new()
        .route("/logout", post(logout))
        .route("/me", get(me))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone(), state.jwt.clone());
    let response = controller.login(request).await?;
    Ok(Json(response))
}

async fn refresh(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone(), state.jwt.clone());
    let response = controller.refresh(request).await?;
    Ok(Json(response))
}

async fn logout(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = AuthController::new(state.pool.clone(), state.jwt.clone());
    controller.logout(user.id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Logout efetuado"
    })))
}

async fn me(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<UserResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone(), state.jwt.clone());
    let response = controller.me(user.id).await?;
    Ok(Json(response))
}
