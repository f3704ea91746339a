//! Repositório de relatórios
//!
//! Consultas de leitura para o faturamento de pátio e o dashboard. O
//! agregado em si é computado em memória pelo controller, em uma passada.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::report_dto::DashboardSummary;
use crate::utils::errors::AppError;

/// Veículo em estoque com dono e pátio resolvidos
#[derive(Debug, Clone, FromRow)]
pub struct StockBillingRow {
    pub chassis: String,
    pub stock_entry_at: Option<DateTime<Utc>>,
    pub yard_id: Option<Uuid>,
    pub yard_name: Option<String>,
    pub client_id: Uuid,
    pub client_name: String,
    pub daily_cost: Option<Decimal>,
}

pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Veículos em estoque com cliente dono atribuído, insumo do faturamento
    pub async fn stock_billing_rows(&self) -> Result<Vec<StockBillingRow>, AppError> {
        let rows = sqlx::query_as::<_, StockBillingRow>(
            r#"
            SELECT v.chassis, v.stock_entry_at,
                   v.current_yard_id AS yard_id, y.name AS yard_name,
                   c.id AS client_id, c.name AS client_name, c.daily_cost
            FROM vehicles v
            JOIN clients c ON c.id = v.client_id
            LEFT JOIN yards y ON y.id = v.current_yard_id
            WHERE v.status = 'em_estoque'
            ORDER BY c.name, v.chassis
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Contagens operacionais do dashboard, uma passada por tabela
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, AppError> {
        let vehicles: (i64, i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FILTER (WHERE status = 'pre_estoque'),
                   COUNT(*) FILTER (WHERE status = 'em_estoque'),
                   COUNT(*) FILTER (WHERE status = 'em_transito'),
                   COUNT(*) FILTER (WHERE status = 'entregue')
            FROM vehicles
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        let collects: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM collects WHERE status = 'em_transito'",
        )
        .fetch_one(&self.pool)
        .await?;

        let transports: (i64, i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FILTER (WHERE status = 'pendente'),
                   COUNT(*) FILTER (WHERE status = 'aguardando_saida'),
                   COUNT(*) FILTER (WHERE status = 'em_transito'),
                   COUNT(*) FILTER (WHERE status = 'entregue')
            FROM transports
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(DashboardSummary {
            vehicles_pre_estoque: vehicles.0,
            vehicles_em_estoque: vehicles.1,
            vehicles_em_transito: vehicles.2,
            vehicles_entregue: vehicles.3,
            collects_em_transito: collects.0,
            transports_pendente: transports.0,
            transports_aguardando_saida: transports.1,
            transports_em_transito: transports.2,
            transports_entregue: transports.3,
        })
    }
}
