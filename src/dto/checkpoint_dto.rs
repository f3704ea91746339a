//! DTOs do catálogo de checkpoints

use serde::Deserialize;
use validator::Validate;

/// Request para cadastrar um checkpoint
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCheckpointRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(length(min = 5, max = 200))]
    pub address: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
}

/// Request para atualizar um checkpoint
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCheckpointRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 5, max = 200))]
    pub address: Option<String>,

    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: Option<f64>,
}
