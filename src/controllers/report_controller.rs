//! Controller de relatórios
//!
//! Faturamento de pátio: diárias em estoque × custo diário do cliente,
//! agrupado por cliente. Recomputado integralmente a cada chamada (modelo
//! pull, uma passada sobre os veículos em estoque).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::dto::report_dto::{
    BillingSummary, ClientBillingGroup, DashboardSummary, VehicleBillingEntry, YardBillingReport,
};
use crate::repositories::report_repository::{ReportRepository, StockBillingRow};
use crate::utils::errors::AppError;

pub struct ReportController {
    repository: ReportRepository,
}

impl ReportController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ReportRepository::new(pool),
        }
    }

    pub async fn yard_billing(&self) -> Result<YardBillingReport, AppError> {
        let rows = self.repository.stock_billing_rows().await?;
        Ok(aggregate_yard_billing(rows, Utc::now()))
    }

    pub async fn dashboard(&self) -> Result<DashboardSummary, AppError> {
        self.repository.dashboard_summary().await
    }
}

/// Diárias em estoque: ceil((agora − entrada) / 1 dia)
fn days_in_stock(entry: Option<DateTime<Utc>>, now: DateTime<Utc>) -> i64 {
    match entry {
        Some(entry) if entry < now => {
            let seconds = (now - entry).num_seconds();
            (seconds as f64 / 86_400.0).ceil() as i64
        }
        _ => 0,
    }
}

/// Agregar o faturamento em uma passada, agrupando por cliente.
///
/// As linhas chegam ordenadas por cliente; veículos sem custo diário
/// configurado entram com custo zero.
pub fn aggregate_yard_billing(
    rows: Vec<StockBillingRow>,
    now: DateTime<Utc>,
) -> YardBillingReport {
    let mut client_groups: Vec<ClientBillingGroup> = Vec::new();
    let mut total_vehicles = 0usize;
    let mut total_days = 0i64;
    let mut grand_total = Decimal::ZERO;

    for row in rows {
        let days = days_in_stock(row.stock_entry_at, now);
        let daily_cost = row.daily_cost.unwrap_or(Decimal::ZERO);
        let total_cost = daily_cost * Decimal::from(days);

        total_vehicles += 1;
        total_days += days;
        grand_total += total_cost;

        let entry = VehicleBillingEntry {
            chassis: row.chassis,
            yard_id: row.yard_id,
            yard_name: row.yard_name,
            days_in_stock: days,
            daily_cost,
            total_cost,
        };

        match client_groups.iter_mut().find(|g| g.client_id == row.client_id) {
            Some(group) => {
                group.total_days += days;
                group.total_cost += total_cost;
                group.vehicles.push(entry);
            }
            None => {
                client_groups.push(ClientBillingGroup {
                    client_id: row.client_id,
                    client_name: row.client_name,
                    total_days: days,
                    total_cost,
                    vehicles: vec![entry],
                });
            }
        }
    }

    YardBillingReport {
        client_groups,
        summary: BillingSummary {
            total_vehicles,
            total_days,
            grand_total,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn row(
        chassis: &str,
        client_id: Uuid,
        client_name: &str,
        days_ago: i64,
        daily_cost: Option<Decimal>,
    ) -> StockBillingRow {
        StockBillingRow {
            chassis: chassis.to_string(),
            stock_entry_at: Some(Utc::now() - Duration::days(days_ago)),
            yard_id: None,
            yard_name: None,
            client_id,
            client_name: client_name.to_string(),
            daily_cost,
        }
    }

    #[test]
    fn test_days_in_stock_ceils_partial_days() {
        let now = Utc::now();

        // 2 horas em estoque contam como 1 diária
        assert_eq!(days_in_stock(Some(now - Duration::hours(2)), now), 1);
        // 25 horas contam como 2 diárias
        assert_eq!(days_in_stock(Some(now - Duration::hours(25)), now), 2);
        // sem data de entrada não há diária
        assert_eq!(days_in_stock(None, now), 0);
    }

    #[test]
    fn test_billing_groups_by_client() {
        let now = Utc::now();
        let client = Uuid::new_v4();

        let rows = vec![
            row("9BWZZZ377VT004251", client, "Transportadora Alfa", 3, Some(dec!(100.00))),
            row("9BWZZZ377VT004252", client, "Transportadora Alfa", 5, Some(dec!(100.00))),
        ];

        let report = aggregate_yard_billing(rows, now);

        assert_eq!(report.client_groups.len(), 1);
        let group = &report.client_groups[0];
        assert_eq!(group.total_days, 8);
        assert_eq!(group.total_cost, dec!(800.00));
        assert_eq!(group.vehicles.len(), 2);

        assert_eq!(report.summary.total_vehicles, 2);
        assert_eq!(report.summary.total_days, 8);
        assert_eq!(report.summary.grand_total, dec!(800.00));
    }

    #[test]
    fn test_billing_multiple_clients_and_missing_rate() {
        let now = Utc::now();
        let alfa = Uuid::new_v4();
        let beta = Uuid::new_v4();

        let rows = vec![
            row("9BWZZZ377VT004251", alfa, "Alfa", 2, Some(dec!(50.00))),
            row("9BWZZZ377VT004252", beta, "Beta", 4, None),
        ];

        let report = aggregate_yard_billing(rows, now);

        assert_eq!(report.client_groups.len(), 2);
        assert_eq!(report.summary.total_vehicles, 2);
        assert_eq!(report.summary.total_days, 6);
        // cliente sem diária configurada fatura zero
        assert_eq!(report.summary.grand_total, dec!(100.00));
    }

    #[test]
    fn test_billing_empty() {
        let report = aggregate_yard_billing(Vec::new(), Utc::now());

        assert!(report.client_groups.is_empty());
        assert_eq!(report.summary.total_vehicles, 0);
        assert_eq!(report.summary.total_days, 0);
        assert_eq!(report.summary.grand_total, Decimal::ZERO);
    }
}
