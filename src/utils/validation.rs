//! Utilidades de validação
//!
//! Este módulo contém funções helper para validação de dados
//! de cadastro (chassi/VIN, CPF e CNPJ).

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    // VIN de 17 posições, sem I, O e Q
    static ref CHASSIS_RE: Regex = Regex::new(r"^[A-HJ-NPR-Z0-9]{17}$").unwrap();
    static ref CPF_RE: Regex = Regex::new(r"^\d{11}$").unwrap();
    static ref CNPJ_RE: Regex = Regex::new(r"^\d{14}$").unwrap();
}

/// Validar formato de chassi (VIN)
pub fn validate_chassis(value: &str) -> Result<(), ValidationError> {
    let normalized = value.trim().to_uppercase();
    if !CHASSIS_RE.is_match(&normalized) {
        let mut error = ValidationError::new("chassis");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"17 caracteres alfanuméricos, sem I/O/Q".to_string());
        return Err(error);
    }
    Ok(())
}

/// Normalizar chassi para armazenamento (maiúsculas, sem espaços)
pub fn normalize_chassis(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Validar CPF (apenas dígitos)
pub fn validate_cpf(value: &str) -> Result<(), ValidationError> {
    if !CPF_RE.is_match(value) {
        let mut error = ValidationError::new("cpf");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar CNPJ (apenas dígitos)
pub fn validate_cnpj(value: &str) -> Result<(), ValidationError> {
    if !CNPJ_RE.is_match(value) {
        let mut error = ValidationError::new("cnpj");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_chassis() {
        assert!(validate_chassis("9BWZZZ377VT004251").is_ok());
        assert!(validate_chassis("  9bwzzz377vt004251 ").is_ok()); // normalizado
        assert!(validate_chassis("9BWZZZ377VT00425").is_err()); // 16 chars
        assert!(validate_chassis("9BWZZZ377VT00425I").is_err()); // contém I
        assert!(validate_chassis("").is_err());
    }

    #[test]
    fn test_normalize_chassis() {
        assert_eq!(normalize_chassis(" 9bwzzz377vt004251 "), "9BWZZZ377VT004251");
    }

    #[test]
    fn test_validate_cpf_cnpj() {
        assert!(validate_cpf("12345678901").is_ok());
        assert!(validate_cpf("1234567890").is_err());
        assert!(validate_cnpj("12345678000195").is_ok());
        assert!(validate_cnpj("123").is_err());
    }
}
