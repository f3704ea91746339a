use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::user_controller::UserController;
use crate::dto::user_dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::dto::ApiResponse;
use crate::middleware::auth::{require_admin_role, AuthUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/", get(list_users))
        .route("/:id", get(get_user))
        .route("/:id", put(update_user))
        .route("/:id", delete(delete_user))
}

async fn create_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    require_admin_role(&user)?;
    let controller = UserController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Usuário criado".to_string(),
    )))
}

async fn list_users(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    require_admin_role(&user)?;
    let controller = UserController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, AppError> {
    require_admin_role(&user)?;
    let controller = UserController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    require_admin_role(&user)?;
    let controller = UserController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        response,
        "Usuário atualizado".to_string(),
    )))
}

async fn delete_user(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    require_admin_role(&user)?;
    let controller = UserController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Usuário removido"
    })))
}
