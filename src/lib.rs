//! Núcleo del dashboard de logística de fletes
//!
//! Registros tipados de dominio (viagens, conductores, vehículos, clientes,
//! gastos, ocurrencias), un contenedor de estado en memoria append-only
//! sembrado desde fixtures, funciones puras de agregación financiera y
//! operacional, el resumen geográfico del mapa y el servicio de insights
//! generativos. La capa de presentación es un consumidor externo de este
//! crate.

pub mod config;
pub mod fixtures;
pub mod metrics;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
