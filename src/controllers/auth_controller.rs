//! Controller de autenticação
//!
//! Login com bcrypt, par de tokens access/refresh e rotação do refresh
//! token a cada uso. O jti do refresh vigente fica no registro do usuário;
//! um refresh com jti antigo é rejeitado.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::auth_dto::{LoginRequest, LoginResponse, RefreshRequest, RefreshResponse};
use crate::dto::user_dto::UserResponse;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{
    generate_access_token, generate_refresh_token, verify_refresh_token, JwtConfig,
};

pub struct AuthController {
    repository: UserRepository,
    jwt: JwtConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, jwt: JwtConfig) -> Self {
        Self {
            repository: UserRepository::new(pool),
            jwt,
        }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        request.validate()?;

        let user = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciais inválidas".to_string()))?;

        if !user.active {
            return Err(AppError::Unauthorized("Usuário desativado".to_string()));
        }

        let valid = bcrypt::verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(format!("Erro verificando senha: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciais inválidas".to_string()));
        }

        let access_token = generate_access_token(user.id, user.role.as_str(), &self.jwt)?;
        let (refresh_token, jti, expires_at) =
            generate_refresh_token(user.id, user.role.as_str(), &self.jwt)?;

        self.repository
            .set_refresh_token(user.id, jti, expires_at)
            .await?;

        log::info!("🔐 Login: usuário '{}' ({})", user.email, user.role.as_str());

        Ok(LoginResponse {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: self.jwt.access_expiration,
            user: UserResponse::from(user),
        })
    }

    pub async fn refresh(&self, request: RefreshRequest) -> Result<RefreshResponse, AppError> {
        request.validate()?;

        let claims = verify_refresh_token(&request.refresh_token, &self.jwt)?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Jwt("Subject inválido no token".to_string()))?;
        let token_jti = claims
            .jti
            .as_deref()
            .and_then(|j| Uuid::parse_str(j).ok())
            .ok_or_else(|| AppError::Jwt("Refresh token sem jti".to_string()))?;

        let user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Usuário não encontrado".to_string()))?;

        if !user.active {
            return Err(AppError::Unauthorized("Usuário desativado".to_string()));
        }

        // Rotação: só o refresh token mais recente é aceito
        match (user.refresh_token_jti, user.refresh_token_expires_at) {
            (Some(jti), Some(expires_at)) if jti == token_jti && expires_at > Utc::now() => {}
            _ => {
                return Err(AppError::Unauthorized(
                    "Refresh token inválido ou revogado".to_string(),
                ));
            }
        }

        let access_token = generate_access_token(user.id, user.role.as_str(), &self.jwt)?;
        let (refresh_token, new_jti, expires_at) =
            generate_refresh_token(user.id, user.role.as_str(), &self.jwt)?;

        self.repository
            .set_refresh_token(user.id, new_jti, expires_at)
            .await?;

        Ok(RefreshResponse {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: self.jwt.access_expiration,
        })
    }

    pub async fn logout(&self, user_id: Uuid) -> Result<(), AppError> {
        self.repository.clear_refresh_token(user_id).await?;
        log::info!("👋 Logout: usuário '{}'", user_id);
        Ok(())
    }

    pub async fn me(&self, user_id: Uuid) -> Result<UserResponse, AppError> {
        let user = self
            .repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuário não encontrado".to_string()))?;

        Ok(UserResponse::from(user))
    }
}
