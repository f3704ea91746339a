//! Modelo de User
//!
//! Principal de autenticação com papel (role) que governa o acesso às rotas.
//! O estado do refresh token (jti + expiração) fica no próprio registro e é
//! rotacionado a cada refresh.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Papel do usuário - mapeia o ENUM user_role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Operador,
    Visualizador,
    Motorista,
    Portaria,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Operador => "operador",
            UserRole::Visualizador => "visualizador",
            UserRole::Motorista => "motorista",
            UserRole::Portaria => "portaria",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(UserRole::Admin),
            "operador" => Some(UserRole::Operador),
            "visualizador" => Some(UserRole::Visualizador),
            "motorista" => Some(UserRole::Motorista),
            "portaria" => Some(UserRole::Portaria),
            _ => None,
        }
    }

    /// Papéis autorizados a executar ações de portaria
    pub fn can_operate_gate(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Portaria)
    }

    /// Visualizador não pode executar operações de escrita
    pub fn can_write(&self) -> bool {
        !matches!(self, UserRole::Visualizador)
    }
}

/// Usuário - mapeia a tabela users
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: UserRole,
    pub active: bool,
    #[serde(skip_serializing)]
    pub refresh_token_jti: Option<Uuid>,
    #[serde(skip_serializing)]
    pub refresh_token_expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [
            UserRole::Admin,
            UserRole::Operador,
            UserRole::Visualizador,
            UserRole::Motorista,
            UserRole::Portaria,
        ] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(UserRole::parse("gerente"), None);
    }

    #[test]
    fn test_gate_permissions() {
        assert!(UserRole::Portaria.can_operate_gate());
        assert!(UserRole::Admin.can_operate_gate());
        assert!(!UserRole::Operador.can_operate_gate());
        assert!(!UserRole::Visualizador.can_write());
        assert!(UserRole::Motorista.can_write());
    }
}
