//! DTOs de cadastro (motoristas, montadoras, pátios e clientes)

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

/// Request para cadastrar um motorista
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDriverRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(custom = "crate::utils::validation::validate_cpf")]
    pub cpf: String,

    #[validate(length(min = 5, max = 20))]
    pub cnh: String,

    #[validate(length(min = 1, max = 5))]
    pub cnh_category: String,

    #[validate(length(min = 8, max = 20))]
    pub phone: Option<String>,
}

/// Request para atualizar um motorista
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDriverRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 5, max = 20))]
    pub cnh: Option<String>,

    #[validate(length(min = 1, max = 5))]
    pub cnh_category: Option<String>,

    #[validate(length(min = 8, max = 20))]
    pub phone: Option<String>,

    pub active: Option<bool>,
}

/// Request para cadastrar uma montadora
#[derive(Debug, Deserialize, Validate)]
pub struct CreateManufacturerRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(custom = "crate::utils::validation::validate_cnpj")]
    pub cnpj: String,

    #[validate(length(min = 5, max = 200))]
    pub address: Option<String>,

    #[validate(length(min = 2, max = 100))]
    pub contact: Option<String>,
}

/// Request para atualizar uma montadora
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateManufacturerRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 5, max = 200))]
    pub address: Option<String>,

    #[validate(length(min = 2, max = 100))]
    pub contact: Option<String>,
}

/// Request para cadastrar um pátio
#[derive(Debug, Deserialize, Validate)]
pub struct CreateYardRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(length(min = 5, max = 200))]
    pub address: String,

    #[validate(range(min = 1))]
    pub capacity: Option<i32>,
}

/// Request para atualizar um pátio
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateYardRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 5, max = 200))]
    pub address: Option<String>,

    #[validate(range(min = 1))]
    pub capacity: Option<i32>,
}

/// Request para cadastrar um cliente
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClientRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(custom = "crate::utils::validation::validate_cnpj")]
    pub cnpj: String,

    #[validate(length(min = 5, max = 200))]
    pub address: Option<String>,

    /// Diária de pátio usada pelo faturamento
    pub daily_cost: Option<Decimal>,
}

/// Request para atualizar um cliente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateClientRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 5, max = 200))]
    pub address: Option<String>,

    pub daily_cost: Option<Decimal>,
}
