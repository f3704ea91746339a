//! Repositórios de cadastro (motoristas, montadoras, pátios e clientes)

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::client::Client;
use crate::models::driver::Driver;
use crate::models::manufacturer::Manufacturer;
use crate::models::yard::Yard;
use crate::utils::errors::AppError;

pub struct DriverRepository {
    pool: PgPool,
}

impl DriverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        cpf: String,
        cnh: String,
        cnh_category: String,
        phone: Option<String>,
    ) -> Result<Driver, AppError> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            INSERT INTO drivers (id, name, cpf, cnh, cnh_category, phone, active, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, TRUE, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(cpf)
        .bind(cnh)
        .bind(cnh_category)
        .bind(phone)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(driver)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Driver>, AppError> {
        let driver = sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(driver)
    }

    pub async fn cpf_exists(&self, cpf: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM drivers WHERE cpf = $1)")
                .bind(cpf)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn list(&self) -> Result<Vec<Driver>, AppError> {
        let drivers =
            sqlx::query_as::<_, Driver>("SELECT * FROM drivers ORDER BY name")
                .fetch_all(&self.pool)
                .await?;

        Ok(drivers)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        cnh: Option<String>,
        cnh_category: Option<String>,
        phone: Option<String>,
        active: Option<bool>,
    ) -> Result<Driver, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;

        let driver = sqlx::query_as::<_, Driver>(
            r#"
            UPDATE drivers
            SET name = $2, cnh = $3, cnh_category = $4, phone = $5, active = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(cnh.unwrap_or(current.cnh))
        .bind(cnh_category.unwrap_or(current.cnh_category))
        .bind(phone.or(current.phone))
        .bind(active.unwrap_or(current.active))
        .fetch_one(&self.pool)
        .await?;

        Ok(driver)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM drivers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Driver not found".to_string()));
        }

        Ok(())
    }
}

pub struct ManufacturerRepository {
    pool: PgPool,
}

impl ManufacturerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        cnpj: String,
        address: Option<String>,
        contact: Option<String>,
    ) -> Result<Manufacturer, AppError> {
        let manufacturer = sqlx::query_as::<_, Manufacturer>(
            r#"
            INSERT INTO manufacturers (id, name, cnpj, address, contact, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(cnpj)
        .bind(address)
        .bind(contact)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(manufacturer)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Manufacturer>, AppError> {
        let manufacturer =
            sqlx::query_as::<_, Manufacturer>("SELECT * FROM manufacturers WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(manufacturer)
    }

    pub async fn cnpj_exists(&self, cnpj: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM manufacturers WHERE cnpj = $1)")
                .bind(cnpj)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn list(&self) -> Result<Vec<Manufacturer>, AppError> {
        let manufacturers =
            sqlx::query_as::<_, Manufacturer>("SELECT * FROM manufacturers ORDER BY name")
                .fetch_all(&self.pool)
                .await?;

        Ok(manufacturers)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        address: Option<String>,
        contact: Option<String>,
    ) -> Result<Manufacturer, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Manufacturer not found".to_string()))?;

        let manufacturer = sqlx::query_as::<_, Manufacturer>(
            r#"
            UPDATE manufacturers
            SET name = $2, address = $3, contact = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(address.or(current.address))
        .bind(contact.or(current.contact))
        .fetch_one(&self.pool)
        .await?;

        Ok(manufacturer)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM manufacturers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Manufacturer not found".to_string()));
        }

        Ok(())
    }
}

pub struct YardRepository {
    pool: PgPool,
}

impl YardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        address: String,
        capacity: Option<i32>,
    ) -> Result<Yard, AppError> {
        let yard = sqlx::query_as::<_, Yard>(
            r#"
            INSERT INTO yards (id, name, address, capacity, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(address)
        .bind(capacity)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(yard)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Yard>, AppError> {
        let yard = sqlx::query_as::<_, Yard>("SELECT * FROM yards WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(yard)
    }

    pub async fn list(&self) -> Result<Vec<Yard>, AppError> {
        let yards = sqlx::query_as::<_, Yard>("SELECT * FROM yards ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(yards)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        address: Option<String>,
        capacity: Option<i32>,
    ) -> Result<Yard, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Yard not found".to_string()))?;

        let yard = sqlx::query_as::<_, Yard>(
            r#"
            UPDATE yards
            SET name = $2, address = $3, capacity = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(address.unwrap_or(current.address))
        .bind(capacity.or(current.capacity))
        .fetch_one(&self.pool)
        .await?;

        Ok(yard)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM yards WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Yard not found".to_string()));
        }

        Ok(())
    }
}

pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        cnpj: String,
        address: Option<String>,
        daily_cost: Option<Decimal>,
    ) -> Result<Client, AppError> {
        let client = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (id, name, cnpj, address, daily_cost, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(cnpj)
        .bind(address)
        .bind(daily_cost)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(client)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>, AppError> {
        let client = sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(client)
    }

    pub async fn cnpj_exists(&self, cnpj: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM clients WHERE cnpj = $1)")
                .bind(cnpj)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn list(&self) -> Result<Vec<Client>, AppError> {
        let clients = sqlx::query_as::<_, Client>("SELECT * FROM clients ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(clients)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        address: Option<String>,
        daily_cost: Option<Decimal>,
    ) -> Result<Client, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Client not found".to_string()))?;

        let client = sqlx::query_as::<_, Client>(
            r#"
            UPDATE clients
            SET name = $2, address = $3, daily_cost = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(address.or(current.address))
        .bind(daily_cost.or(current.daily_cost))
        .fetch_one(&self.pool)
        .await?;

        Ok(client)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Client not found".to_string()));
        }

        Ok(())
    }
}
