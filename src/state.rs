//! Estado compartilhado da aplicação
//!
//! Este módulo define o estado que é passado através do router do Axum.

use crate::config::environment::EnvironmentConfig;
use crate::utils::jwt::JwtConfig;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub jwt: JwtConfig,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        let jwt = JwtConfig::from(&config);
        Self { pool, config, jwt }
    }
}
