//! Modelo de Driver
//!
//! Este módulo contiene el struct Driver y su request de alta.
//! Los conductores se referencian desde Trip por driver_id (FK no forzada).

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Estado del conductor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DriverStatus {
    Active,
    Inactive,
}

/// Driver principal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    pub id: Uuid,
    pub name: String,
    pub license: String,
    pub phone: String,
    pub status: DriverStatus,
}

/// Request para registrar un nuevo conductor
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDriverRequest {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(min = 1))]
    pub license: String,

    #[validate(length(min = 1))]
    pub phone: String,

    pub status: DriverStatus,
}
