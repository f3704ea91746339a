use serde::Serialize;

use crate::models::collect::Collect;
use crate::models::transport::Transport;

/// Fila da portaria: coletas a caminho do pátio e transportes
/// aguardando liberação de saída
#[derive(Debug, Serialize)]
pub struct GatePendingResponse {
    pub incoming_collects: Vec<Collect>,
    pub outgoing_transports: Vec<Transport>,
}
