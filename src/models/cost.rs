//! Modelo de Cost
//!
//! Este módulo contiene el struct Cost y su request de alta. Un costo puede
//! quedar sin asignar (trip_id = None) o apuntar a una viagem por id.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Categoría del costo operacional
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CostCategory {
    Fuel,
    Maintenance,
    Toll,
    Salary,
    Other,
}

impl CostCategory {
    /// Etiqueta de presentación en pt-BR
    pub fn label(&self) -> &'static str {
        match self {
            CostCategory::Fuel => "Combustível",
            CostCategory::Maintenance => "Manutenção",
            CostCategory::Toll => "Pedágio",
            CostCategory::Salary => "Salário",
            CostCategory::Other => "Outros",
        }
    }
}

/// Cost principal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cost {
    pub id: Uuid,
    /// None cuando el gasto no está asignado a ninguna viagem
    pub trip_id: Option<Uuid>,
    pub category: CostCategory,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub description: String,
}

/// Request para lanzar un nuevo gasto
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCostRequest {
    pub trip_id: Option<Uuid>,

    pub category: CostCategory,

    pub amount: Decimal,

    pub date: NaiveDate,

    #[validate(length(min = 1))]
    pub description: String,
}
