pub mod auth_dto;
pub mod cadastro_dto;
pub mod checkpoint_dto;
pub mod collect_dto;
pub mod portaria_dto;
pub mod report_dto;
pub mod transport_dto;
pub mod user_dto;
pub mod vehicle_dto;

use serde::Serialize;

/// Resposta genérica da API
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            message: Some(message),
            data: None,
        }
    }
}
