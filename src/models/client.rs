//! Modelo de Client
//!
//! O cliente é o dono do veículo enquanto estocado e carrega o daily_cost
//! (diária de pátio) usado pelo relatório de faturamento.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Cliente - mapeia a tabela clients
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub cnpj: String,
    pub address: Option<String>,
    pub daily_cost: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}
