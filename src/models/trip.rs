//! Modelo de Trip
//!
//! Este módulo contiene el struct Trip, su estado y su request de alta.
//! Una viagem referencia conductor, vehículo y cliente por id; esas FKs no
//! se validan contra existencia y los lectores toleran referencias colgantes.

use chrono::NaiveDate;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Estado de la viagem
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Planned,
    InTransit,
    Delivered,
    Cancelled,
}

impl TripStatus {
    /// Etiqueta de presentación en pt-BR
    pub fn label(&self) -> &'static str {
        match self {
            TripStatus::Planned => "Planejada",
            TripStatus::InTransit => "Em Trânsito",
            TripStatus::Delivered => "Entregue",
            TripStatus::Cancelled => "Cancelada",
        }
    }
}

/// Trip principal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: Uuid,
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub arrival_date: NaiveDate,
    pub status: TripStatus,
    pub driver_id: Uuid,
    pub vehicle_id: Uuid,
    pub client_id: Uuid,
    /// Peso de la carga en kilogramos
    pub cargo_weight: f64,
    /// Valor pactado por tonelada, si la receita se deriva del peso
    pub value_per_ton: Option<Decimal>,
    pub revenue: Decimal,
    pub distance_km: f64,
}

/// Request para registrar una nueva viagem
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTripRequest {
    #[validate(length(min = 1))]
    pub origin: String,

    #[validate(length(min = 1))]
    pub destination: String,

    pub departure_date: NaiveDate,

    pub arrival_date: NaiveDate,

    pub status: TripStatus,

    pub driver_id: Uuid,

    pub vehicle_id: Uuid,

    pub client_id: Uuid,

    #[validate(range(min = 0.0))]
    pub cargo_weight: f64,

    pub value_per_ton: Option<Decimal>,

    /// Receita informada directamente; si falta se deriva de value_per_ton
    pub revenue: Option<Decimal>,

    #[validate(range(min = 0.0))]
    pub distance_km: f64,
}

impl CreateTripRequest {
    /// Receita efectiva al crear la viagem.
    ///
    /// Ambas vías de entrada son válidas: el valor directo tiene precedencia;
    /// si falta, se deriva como (cargo_weight / 1000) × value_per_ton.
    pub fn resolved_revenue(&self) -> Decimal {
        if let Some(revenue) = self.revenue {
            return revenue;
        }
        match (Decimal::from_f64(self.cargo_weight), self.value_per_ton) {
            (Some(weight_kg), Some(value_per_ton)) => {
                (weight_kg / Decimal::from(1000)) * value_per_ton
            }
            _ => Decimal::ZERO,
        }
    }
}
