//! Modelo de Occurrence
//!
//! Este módulo contiene el struct Occurrence y su request de alta. Una
//! ocurrencia es un incidente operacional ligado a exactamente una viagem.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Tipo de incidente
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OccurrenceType {
    Accident,
    Delay,
    Breakdown,
    Theft,
    Other,
}

/// Severidad del incidente
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OccurrenceSeverity {
    Low,
    Medium,
    High,
}

/// Occurrence principal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Occurrence {
    pub id: Uuid,
    pub trip_id: Uuid,
    #[serde(rename = "type")]
    pub kind: OccurrenceType,
    pub severity: OccurrenceSeverity,
    pub date: NaiveDate,
    pub description: String,
}

/// Request para registrar una nueva ocurrencia
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOccurrenceRequest {
    pub trip_id: Uuid,

    #[serde(rename = "type")]
    pub kind: OccurrenceType,

    pub severity: OccurrenceSeverity,

    pub date: NaiveDate,

    #[validate(length(min = 1))]
    pub description: String,
}
