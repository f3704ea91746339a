//! Controllers de cadastro (motoristas, montadoras, pátios e clientes)

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::cadastro_dto::{
    CreateClientRequest, CreateDriverRequest, CreateManufacturerRequest, CreateYardRequest,
    UpdateClientRequest, UpdateDriverRequest, UpdateManufacturerRequest, UpdateYardRequest,
};
use crate::models::client::Client;
use crate::models::driver::Driver;
use crate::models::manufacturer::Manufacturer;
use crate::models::yard::Yard;
use crate::repositories::cadastro_repository::{
    ClientRepository, DriverRepository, ManufacturerRepository, YardRepository,
};
use crate::utils::errors::AppError;

pub struct DriverController {
    repository: DriverRepository,
}

impl DriverController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DriverRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateDriverRequest) -> Result<Driver, AppError> {
        request.validate()?;

        if self.repository.cpf_exists(&request.cpf).await? {
            return Err(AppError::Conflict("CPF já cadastrado".to_string()));
        }

        self.repository
            .create(
                request.name,
                request.cpf,
                request.cnh,
                request.cnh_category,
                request.phone,
            )
            .await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Driver, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Motorista não encontrado".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Driver>, AppError> {
        self.repository.list().await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateDriverRequest,
    ) -> Result<Driver, AppError> {
        request.validate()?;

        self.repository
            .update(
                id,
                request.name,
                request.cnh,
                request.cnh_category,
                request.phone,
                request.active,
            )
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}

pub struct ManufacturerController {
    repository: ManufacturerRepository,
}

impl ManufacturerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ManufacturerRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateManufacturerRequest,
    ) -> Result<Manufacturer, AppError> {
        request.validate()?;

        if self.repository.cnpj_exists(&request.cnpj).await? {
            return Err(AppError::Conflict("CNPJ já cadastrado".to_string()));
        }

        self.repository
            .create(request.name, request.cnpj, request.address, request.contact)
            .await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Manufacturer, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Montadora não encontrada".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Manufacturer>, AppError> {
        self.repository.list().await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateManufacturerRequest,
    ) -> Result<Manufacturer, AppError> {
        request.validate()?;

        self.repository
            .update(id, request.name, request.address, request.contact)
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}

pub struct YardController {
    repository: YardRepository,
}

impl YardController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: YardRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateYardRequest) -> Result<Yard, AppError> {
        request.validate()?;

        self.repository
            .create(request.name, request.address, request.capacity)
            .await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Yard, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Pátio não encontrado".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Yard>, AppError> {
        self.repository.list().await
    }

    pub async fn update(&self, id: Uuid, request: UpdateYardRequest) -> Result<Yard, AppError> {
        request.validate()?;

        self.repository
            .update(id, request.name, request.address, request.capacity)
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}

pub struct ClientController {
    repository: ClientRepository,
}

impl ClientController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClientRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateClientRequest) -> Result<Client, AppError> {
        request.validate()?;

        if self.repository.cnpj_exists(&request.cnpj).await? {
            return Err(AppError::Conflict("CNPJ já cadastrado".to_string()));
        }

        self.repository
            .create(request.name, request.cnpj, request.address, request.daily_cost)
            .await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Client, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente não encontrado".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Client>, AppError> {
        self.repository.list().await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateClientRequest,
    ) -> Result<Client, AppError> {
        request.validate()?;

        self.repository
            .update(id, request.name, request.address, request.daily_cost)
            .await
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
