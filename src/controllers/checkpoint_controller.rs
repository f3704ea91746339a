//! Controller do catálogo de checkpoints

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::checkpoint_dto::{CreateCheckpointRequest, UpdateCheckpointRequest};
use crate::models::checkpoint::Checkpoint;
use crate::repositories::checkpoint_repository::CheckpointRepository;
use crate::utils::errors::AppError;

pub struct CheckpointController {
    repository: CheckpointRepository,
}

impl CheckpointController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CheckpointRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateCheckpointRequest) -> Result<Checkpoint, AppError> {
        request.validate()?;

        self.repository
            .create(request.name, request.address, request.lat, request.lng)
            .await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Checkpoint, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Checkpoint não encontrado".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Checkpoint>, AppError> {
        self.repository.list().await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateCheckpointRequest,
    ) -> Result<Checkpoint, AppError> {
        request.validate()?;

        self.repository
            .update(id, request.name, request.address, request.lat, request.lng)
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
