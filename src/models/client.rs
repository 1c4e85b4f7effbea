//! Modelo de Client
//!
//! Este módulo contiene el struct Client y su request de alta.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Client principal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub address: String,
}

/// Request para registrar un nuevo cliente
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateClientRequest {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub address: String,
}
