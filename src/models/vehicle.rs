//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y su request de alta.
//! Los vehículos se referencian desde Trip por vehicle_id (FK no forzada).

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Estado del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Available,
    Maintenance,
    Busy,
}

/// Vehicle principal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub model: String,
    pub plate: String,
    /// Capacidad de carga en kilogramos
    pub capacity: f64,
    pub status: VehicleStatus,
}

/// Request para registrar un nuevo vehículo
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1))]
    pub model: String,

    #[validate(length(min = 1))]
    pub plate: String,

    #[validate(custom = "crate::utils::validation::validate_positive")]
    pub capacity: f64,

    pub status: VehicleStatus,
}
