//! Configuración del sistema

pub mod environment;
