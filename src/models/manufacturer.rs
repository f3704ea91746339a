//! Modelo de Manufacturer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Montadora - mapeia a tabela manufacturers
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Manufacturer {
    pub id: Uuid,
    pub name: String,
    pub cnpj: String,
    pub address: Option<String>,
    pub contact: Option<String>,
    pub created_at: DateTime<Utc>,
}
