//! DTOs de relatórios (faturamento de pátio e dashboard)

use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// Linha de faturamento de um veículo em estoque
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VehicleBillingEntry {
    pub chassis: String,
    pub yard_id: Option<Uuid>,
    pub yard_name: Option<String>,
    pub days_in_stock: i64,
    pub daily_cost: Decimal,
    pub total_cost: Decimal,
}

/// Grupo de faturamento por cliente
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClientBillingGroup {
    pub client_id: Uuid,
    pub client_name: String,
    pub vehicles: Vec<VehicleBillingEntry>,
    pub total_days: i64,
    pub total_cost: Decimal,
}

/// Resumo geral do faturamento
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BillingSummary {
    pub total_vehicles: usize,
    pub total_days: i64,
    pub grand_total: Decimal,
}

/// Relatório completo de faturamento de pátio
#[derive(Debug, Serialize)]
pub struct YardBillingReport {
    pub client_groups: Vec<ClientBillingGroup>,
    pub summary: BillingSummary,
}

/// Contagens operacionais para o dashboard
#[derive(Debug, Serialize, Default)]
pub struct DashboardSummary {
    pub vehicles_pre_estoque: i64,
    pub vehicles_em_estoque: i64,
    pub vehicles_em_transito: i64,
    pub vehicles_entregue: i64,
    pub collects_em_transito: i64,
    pub transports_pendente: i64,
    pub transports_aguardando_saida: i64,
    pub transports_em_transito: i64,
    pub transports_entregue: i64,
}
