//! Modelo de Yard

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Pátio de armazenagem - mapeia a tabela yards
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Yard {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub capacity: Option<i32>,
    pub created_at: DateTime<Utc>,
}
