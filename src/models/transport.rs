//! Modelo de Transport
//!
//! Um transporte representa a entrega de um veículo estocado no pátio até o
//! local do cliente. O status avança de forma monotônica (exceto cancelamento):
//! pendente → aguardando_saida → em_transito → entregue. O campo
//! checkin_datetime guarda a saída do pátio e checkout_datetime a entrega no
//! cliente (nomenclatura herdada do fluxo de coleta).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado do transporte - mapeia o ENUM transport_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "transport_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TransportStatus {
    Pendente,
    AguardandoSaida,
    EmTransito,
    Entregue,
    Cancelado,
}

impl TransportStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, TransportStatus::Entregue | TransportStatus::Cancelado)
    }

    /// Pendente e aguardando_saida significam "aguardando liberação da portaria"
    pub fn awaiting_gate_release(&self) -> bool {
        matches!(self, TransportStatus::Pendente | TransportStatus::AguardandoSaida)
    }
}

/// Transport principal - mapeia a tabela transports
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transport {
    pub id: Uuid,
    pub request_number: String,
    pub vehicle_chassis: String,
    pub client_id: Uuid,
    pub origin_yard_id: Uuid,
    pub delivery_location_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub status: TransportStatus,
    pub checkin_datetime: Option<DateTime<Utc>>,
    pub checkout_datetime: Option<DateTime<Utc>>,
    pub delivery_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Progresso do transporte (calculado, não persistido)
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TransportProgress {
    pub total_steps: u32,
    pub completed_steps: u32,
    pub percentage: u32,
}

/// Calcular o progresso de um transporte.
///
/// Total de etapas = checkpoints + 2 (saída do pátio + entrega no cliente).
/// Concluídas = checkpoints concluídos + saída registrada + entrega registrada,
/// limitado ao total.
pub fn compute_progress(
    checkpoint_count: u32,
    concluded_checkpoints: u32,
    yard_exit_recorded: bool,
    delivery_recorded: bool,
) -> TransportProgress {
    let total_steps = checkpoint_count + 2;
    let mut completed = concluded_checkpoints;
    if yard_exit_recorded {
        completed += 1;
    }
    if delivery_recorded {
        completed += 1;
    }
    let completed_steps = completed.min(total_steps);
    let percentage =
        ((completed_steps as f64 / total_steps as f64) * 100.0).round() as u32;

    TransportProgress {
        total_steps,
        completed_steps,
        percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_half_way() {
        // 2 checkpoints, saída registrada, entrega pendente, 1 concluído ⇒ 2/4 = 50%
        let progress = compute_progress(2, 1, true, false);
        assert_eq!(progress.total_steps, 4);
        assert_eq!(progress.completed_steps, 2);
        assert_eq!(progress.percentage, 50);
    }

    #[test]
    fn test_progress_without_checkpoints() {
        let progress = compute_progress(0, 0, true, true);
        assert_eq!(progress.total_steps, 2);
        assert_eq!(progress.percentage, 100);
    }

    #[test]
    fn test_progress_rounding() {
        // 1 checkpoint, só a saída registrada ⇒ 1/3 ≈ 33%
        let progress = compute_progress(1, 0, true, false);
        assert_eq!(progress.percentage, 33);

        // 2 de 3 etapas ⇒ 67%
        let progress = compute_progress(1, 1, true, false);
        assert_eq!(progress.percentage, 67);
    }

    #[test]
    fn test_progress_capped_at_total() {
        // Concluídos acima do total não passam de 100%
        let progress = compute_progress(1, 5, true, true);
        assert_eq!(progress.completed_steps, 3);
        assert_eq!(progress.percentage, 100);
    }

    #[test]
    fn test_status_awaiting_gate_release() {
        assert!(TransportStatus::Pendente.awaiting_gate_release());
        assert!(TransportStatus::AguardandoSaida.awaiting_gate_release());
        assert!(!TransportStatus::EmTransito.awaiting_gate_release());
        assert!(!TransportStatus::Entregue.awaiting_gate_release());
        assert!(!TransportStatus::Cancelado.awaiting_gate_release());
    }

    #[test]
    fn test_status_terminal() {
        assert!(TransportStatus::Entregue.is_terminal());
        assert!(TransportStatus::Cancelado.is_terminal());
        assert!(!TransportStatus::Pendente.is_terminal());
        assert!(!TransportStatus::AguardandoSaida.is_terminal());
        assert!(!TransportStatus::EmTransito.is_terminal());
    }
}
