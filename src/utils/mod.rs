//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores y validación
//! de entradas de formulario.

pub mod errors;
pub mod validation;
