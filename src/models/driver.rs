//! Modelo de Driver

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Motorista - mapeia a tabela drivers
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Driver {
    pub id: Uuid,
    pub name: String,
    pub cpf: String,
    pub cnh: String,
    pub cnh_category: String,
    pub phone: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}
