//! Controller de usuários (administração)

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::user_dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;

const BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;

pub struct UserController {
    repository: UserRepository,
}

impl UserController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateUserRequest) -> Result<UserResponse, AppError> {
        request.validate()?;

        if self.repository.email_exists(&request.email).await? {
            return Err(AppError::Conflict(
                "E-mail já cadastrado".to_string(),
            ));
        }

        let password_hash = bcrypt::hash(&request.password, BCRYPT_COST)
            .map_err(|e| AppError::Hash(format!("Erro gerando hash: {}", e)))?;

        let user = self
            .repository
            .create(request.name, request.email, password_hash, request.role)
            .await?;

        Ok(UserResponse::from(user))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<UserResponse, AppError> {
        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuário não encontrado".to_string()))?;

        Ok(UserResponse::from(user))
    }

    pub async fn list(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.repository.list().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateUserRequest,
    ) -> Result<UserResponse, AppError> {
        request.validate()?;

        let password_hash = match &request.password {
            Some(password) => Some(
                bcrypt::hash(password, BCRYPT_COST)
                    .map_err(|e| AppError::Hash(format!("Erro gerando hash: {}", e)))?,
            ),
            None => None,
        };

        let user = self
            .repository
            .update(
                id,
                request.name,
                request.email,
                password_hash,
                request.role,
                request.active,
            )
            .await?;

        Ok(UserResponse::from(user))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
