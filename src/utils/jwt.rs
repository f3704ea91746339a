//! Utilidades JWT
//!
//! Este módulo contém as funções helper para emissão e verificação dos
//! tokens de acesso e de refresh. O refresh token carrega um jti que é
//! persistido no usuário e rotacionado a cada uso.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{config::environment::EnvironmentConfig, utils::errors::AppError};

pub const TOKEN_TYPE_ACCESS: &str = "access";
pub const TOKEN_TYPE_REFRESH: &str = "refresh";

/// Claims do JWT
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,  // user_id
    pub role: String, // papel do usuário
    pub typ: String,  // "access" | "refresh"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>, // id do refresh token (rotação)
    pub exp: usize,   // expiration timestamp
    pub iat: usize,   // issued at timestamp
}

/// Configuração de JWT
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_expiration: u64,
    pub refresh_expiration: u64,
}

impl From<&EnvironmentConfig> for JwtConfig {
    fn from(config: &EnvironmentConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            access_expiration: config.jwt_access_expiration,
            refresh_expiration: config.jwt_refresh_expiration,
        }
    }
}

/// Gerar token de acesso para um usuário
pub fn generate_access_token(
    user_id: Uuid,
    role: &str,
    config: &JwtConfig,
) -> Result<String, AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::seconds(config.access_expiration as i64);

    let claims = JwtClaims {
        sub: user_id.to_string(),
        role: role.to_string(),
        typ: TOKEN_TYPE_ACCESS.to_string(),
        jti: None,
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let encoding_key = EncodingKey::from_secret(config.secret.as_ref());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Jwt(format!("Erro gerando token: {}", e)))
}

/// Gerar refresh token com jti próprio; retorna (token, jti, expires_at)
pub fn generate_refresh_token(
    user_id: Uuid,
    role: &str,
    config: &JwtConfig,
) -> Result<(String, Uuid, chrono::DateTime<chrono::Utc>), AppError> {
    let now = chrono::Utc::now();
    let expires_at = now + chrono::Duration::seconds(config.refresh_expiration as i64);
    let jti = Uuid::new_v4();

    let claims = JwtClaims {
        sub: user_id.to_string(),
        role: role.to_string(),
        typ: TOKEN_TYPE_REFRESH.to_string(),
        jti: Some(jti.to_string()),
        exp: expires_at.timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    let encoding_key = EncodingKey::from_secret(config.secret.as_ref());
    let token = encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| AppError::Jwt(format!("Erro gerando refresh token: {}", e)))?;

    Ok((token, jti, expires_at))
}

/// Verificar e decodificar um JWT
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<JwtClaims, AppError> {
    let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

    let token_data = decode::<JwtClaims>(token, &decoding_key, &Validation::default())
        .map_err(|e| AppError::Jwt(format!("Token inválido: {}", e)))?;

    Ok(token_data.claims)
}

/// Verificar um token de acesso (rejeita refresh tokens)
pub fn verify_access_token(token: &str, config: &JwtConfig) -> Result<JwtClaims, AppError> {
    let claims = verify_token(token, config)?;
    if claims.typ != TOKEN_TYPE_ACCESS {
        return Err(AppError::Jwt("Token de acesso esperado".to_string()));
    }
    Ok(claims)
}

/// Verificar um refresh token (rejeita tokens de acesso)
pub fn verify_refresh_token(token: &str, config: &JwtConfig) -> Result<JwtClaims, AppError> {
    let claims = verify_token(token, config)?;
    if claims.typ != TOKEN_TYPE_REFRESH {
        return Err(AppError::Jwt("Refresh token esperado".to_string()));
    }
    Ok(claims)
}

/// Extrair token do header Authorization
pub fn extract_token_from_header(auth_header: &str) -> Result<&str, AppError> {
    if !auth_header.starts_with("Bearer ") {
        return Err(AppError::Jwt(
            "Header Authorization deve começar com 'Bearer '".to_string(),
        ));
    }

    let token = &auth_header[7..];
    if token.is_empty() {
        return Err(AppError::Jwt("Token não pode estar vazio".to_string()));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            access_expiration: 900,
            refresh_expiration: 604800,
        }
    }

    #[test]
    fn test_access_token_round_trip() {
        let config = test_config();
        let user_id = Uuid::new_v4();

        let token = generate_access_token(user_id, "operador", &config).unwrap();
        let claims = verify_access_token(&token, &config).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.role, "operador");
        assert_eq!(claims.typ, TOKEN_TYPE_ACCESS);
        assert!(claims.jti.is_none());
    }

    #[test]
    fn test_refresh_token_carries_jti() {
        let config = test_config();
        let user_id = Uuid::new_v4();

        let (token, jti, _expires_at) =
            generate_refresh_token(user_id, "admin", &config).unwrap();
        let claims = verify_refresh_token(&token, &config).unwrap();

        assert_eq!(claims.jti, Some(jti.to_string()));
        assert_eq!(claims.typ, TOKEN_TYPE_REFRESH);
    }

    #[test]
    fn test_refresh_token_rejected_as_access() {
        let config = test_config();
        let (token, _, _) =
            generate_refresh_token(Uuid::new_v4(), "motorista", &config).unwrap();

        assert!(verify_access_token(&token, &config).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let config = test_config();
        let other = JwtConfig {
            secret: "other-secret".to_string(),
            ..test_config()
        };

        let token = generate_access_token(Uuid::new_v4(), "admin", &config).unwrap();
        assert!(verify_token(&token, &other).is_err());
    }

    #[test]
    fn test_extract_token_from_header() {
        assert_eq!(extract_token_from_header("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(extract_token_from_header("Basic abc").is_err());
        assert!(extract_token_from_header("Bearer ").is_err());
    }
}
