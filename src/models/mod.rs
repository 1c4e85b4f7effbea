//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos del dominio de fletes: registros
//! tipados sin comportamiento más sus requests de alta con validación.

pub mod client;
pub mod cost;
pub mod driver;
pub mod occurrence;
pub mod trip;
pub mod vehicle;
