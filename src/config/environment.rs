//! Configuração de variáveis de ambiente
//!
//! Este módulo concentra a leitura das variáveis de configuração do processo.

use std::env;

/// Configuração do ambiente
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub jwt_secret: String,
    /// TTL do token de acesso em segundos (15 minutos por padrão)
    pub jwt_access_expiration: u64,
    /// TTL do refresh token em segundos (7 dias por padrão)
    pub jwt_refresh_expiration: u64,
    pub cors_origins: Vec<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            jwt_access_expiration: env::var("JWT_ACCESS_EXPIRATION")
                .unwrap_or_else(|_| "900".to_string())
                .parse()
                .expect("JWT_ACCESS_EXPIRATION must be a valid number"),
            jwt_refresh_expiration: env::var("JWT_REFRESH_EXPIRATION")
                .unwrap_or_else(|_| "604800".to_string())
                .parse()
                .expect("JWT_REFRESH_EXPIRATION must be a valid number"),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.trim().to_string())
                .collect(),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar se estamos em modo de produção
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obter o endereço do servidor
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
