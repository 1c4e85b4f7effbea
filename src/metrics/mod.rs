//! Métricas derivadas
//!
//! Este módulo contiene las funciones puras que derivan los resúmenes del
//! dashboard a partir de las colecciones actuales: totales financieros,
//! agrupaciones por destino y por mes, y el resumen geográfico del mapa.
//! No hay caché: todo se recomputa bajo demanda sobre la entrada recibida.

pub mod aggregator;
pub mod filters;
pub mod geo;

pub use aggregator::*;
pub use filters::*;
pub use geo::*;
