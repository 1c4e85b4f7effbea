//! Utilidades de validación
//!
//! Este módulo contiene los helpers de validación del colaborador que
//! captura la entrada (formularios). El contenedor de estado no valida: un
//! request malformado debe rechazarse aquí, antes de llegar a `add_*`.

use chrono::NaiveDate;
use validator::{Validate, ValidationError};

use crate::utils::errors::AppError;

/// Validar un request de alta completo
pub fn validate_request<T: Validate>(request: &T) -> Result<(), AppError> {
    request.validate()?;
    Ok(())
}

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar que un número sea estrictamente positivo
pub fn validate_positive(value: f64) -> Result<(), ValidationError> {
    if value <= 0.0 {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}
