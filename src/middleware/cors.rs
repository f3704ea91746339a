//! Middleware de CORS
//!
//! Configuração de CORS para permitir requests do frontend.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// CORS permissivo para desenvolvimento
/// NOTA: permite qualquer origem - apenas para desenvolvimento
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Origens válidas como header values; entradas inválidas são descartadas
fn parse_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect()
}

/// CORS com origens específicas (produção)
pub fn cors_middleware_with_origins(origins: Vec<String>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parse_origins(&origins)))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([
            HeaderName::from_static("authorization"),
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_credentials(true)
        .max_age(std::time::Duration::from_secs(3600))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_keeps_all_valid_entries() {
        let origins = vec![
            "https://app.example.com".to_string(),
            "https://admin.example.com".to_string(),
        ];

        let parsed = parse_origins(&origins);

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0], "https://app.example.com");
        assert_eq!(parsed[1], "https://admin.example.com");
    }

    #[test]
    fn test_parse_origins_drops_invalid_entries() {
        let origins = vec![
            "https://app.example.com".to_string(),
            "inv\u{e1}lido\n".to_string(),
        ];

        assert_eq!(parse_origins(&origins).len(), 1);
    }
}
