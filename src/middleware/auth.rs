//! Middleware de autenticação
//!
//! Valida o token de acesso do header Authorization e injeta o usuário
//! autenticado como extensão do request. Os guards de papel ficam junto.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::models::user::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{extract_token_from_header, verify_access_token};

/// Usuário autenticado do request corrente
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub role: UserRole,
}

/// Middleware que exige um token de acesso válido
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Header Authorization ausente".to_string()))?;

    let token = extract_token_from_header(auth_header)?;
    let claims = verify_access_token(token, &state.jwt)?;

    let id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Jwt("Subject inválido no token".to_string()))?;
    let role = UserRole::parse(&claims.role)
        .ok_or_else(|| AppError::Jwt("Papel desconhecido no token".to_string()))?;

    request.extensions_mut().insert(AuthUser { id, role });

    Ok(next.run(request).await)
}

/// Exigir papel autorizado a operar a portaria (portaria ou admin)
pub fn require_gate_role(user: &AuthUser) -> Result<(), AppError> {
    if user.role.can_operate_gate() {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Ação restrita à portaria".to_string(),
        ))
    }
}

/// Exigir papel com permissão de escrita (qualquer um exceto visualizador)
pub fn require_write_role(user: &AuthUser) -> Result<(), AppError> {
    if user.role.can_write() {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Perfil somente leitura".to_string(),
        ))
    }
}

/// Exigir papel de administrador
pub fn require_admin_role(user: &AuthUser) -> Result<(), AppError> {
    if user.role == UserRole::Admin {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Ação restrita ao administrador".to_string(),
        ))
    }
}
