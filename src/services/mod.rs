//! Services module
//!
//! Este módulo contiene las integraciones externas de la aplicación. Hoy la
//! única es el servicio de insights generativos.

pub mod insight_service;

pub use insight_service::*;
