//! Resumen geográfico
//!
//! Este módulo deriva el agregado por destino que dimensiona y colorea los
//! marcadores del mapa, a partir de la colección completa (sin filtrar) de
//! viagens y de una tabla fija ciudad → coordenadas. Las ciudades ausentes
//! de la tabla quedan fuera de la vista geográfica pero siguen contando en
//! todos los agregados no geográficos.

use lazy_static::lazy_static;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

use crate::models::trip::Trip;

/// Radio mínimo de marcador (unidad de display)
pub const MIN_MARKER_RADIUS: f64 = 10.0;
/// Radio máximo de marcador (unidad de display)
pub const MAX_MARKER_RADIUS: f64 = 28.0;
/// Receita dividida por este factor da el radio sin acotar
pub const MARKER_RADIUS_DIVISOR: f64 = 400.0;

const SELECTED_FILL: &str = "#d9ff54";
const HIGH_REVENUE_FILL: &str = "#2d6cf6";
const LOW_REVENUE_FILL: &str = "#ff4f9a";

lazy_static! {
    /// Coordenadas fijas (latitud, longitud) de las ciudades atendidas
    pub static ref CITY_COORDS: HashMap<&'static str, (f64, f64)> = {
        let mut coords = HashMap::new();
        coords.insert("São Paulo", (-23.5505, -46.6333));
        coords.insert("Curitiba", (-25.4290, -49.2671));
        coords.insert("Porto Alegre", (-30.0346, -51.2177));
        coords.insert("Cuiabá", (-15.6014, -56.0979));
        coords.insert("Rio de Janeiro", (-22.9068, -43.1729));
        coords.insert("Belo Horizonte", (-19.9167, -43.9345));
        coords.insert("Manaus", (-3.1190, -60.0217));
        coords.insert("Brasília", (-15.7975, -47.8919));
        coords
    };
}

/// Agregado de un destino para el mapa
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DestinationPoint {
    pub destination: String,
    pub latitude: f64,
    pub longitude: f64,
    pub revenue_sum: Decimal,
    pub trip_count: usize,
    pub total_cargo_weight_kg: f64,
}

impl DestinationPoint {
    /// Radio del marcador: clamp(receita / 400, 10, 28).
    pub fn marker_radius(&self) -> f64 {
        let scaled = self.revenue_sum.to_f64().unwrap_or(0.0) / MARKER_RADIUS_DIVISOR;
        scaled.clamp(MIN_MARKER_RADIUS, MAX_MARKER_RADIUS)
    }

    /// Receita media por tonelada transportada hacia este destino.
    /// 0 cuando no hay carga.
    pub fn avg_revenue_per_ton(&self) -> Decimal {
        let tons = self.total_cargo_weight_kg / 1000.0;
        match Decimal::from_f64(tons) {
            Some(tons) if !tons.is_zero() => self.revenue_sum / tons,
            _ => Decimal::ZERO,
        }
    }
}

/// Estilo calculado de un marcador, función pura del punto y de la
/// selección actual
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub radius: f64,
    pub fill_color: &'static str,
    pub border_color: &'static str,
    pub border_weight: f64,
    pub fill_opacity: f64,
    pub selected: bool,
}

/// Agrega las viagens por destino y resuelve coordenadas. Los destinos sin
/// coordenadas conocidas se excluyen en silencio.
pub fn summarize_destinations(trips: &[Trip]) -> Vec<DestinationPoint> {
    let mut order: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, (Decimal, usize, f64)> = HashMap::new();

    for trip in trips {
        if !buckets.contains_key(&trip.destination) {
            order.push(trip.destination.clone());
        }
        let bucket = buckets
            .entry(trip.destination.clone())
            .or_insert((Decimal::ZERO, 0, 0.0));
        bucket.0 += trip.revenue;
        bucket.1 += 1;
        bucket.2 += trip.cargo_weight;
    }

    order
        .into_iter()
        .filter_map(|destination| {
            let &(latitude, longitude) = CITY_COORDS.get(destination.as_str())?;
            let (revenue_sum, trip_count, total_cargo_weight_kg) = buckets
                .remove(&destination)
                .unwrap_or((Decimal::ZERO, 0, 0.0));
            Some(DestinationPoint {
                destination,
                latitude,
                longitude,
                revenue_sum,
                trip_count,
                total_cargo_weight_kg,
            })
        })
        .collect()
}

/// Estilo del marcador según la selección: el destino seleccionado se
/// resalta (radio +4, relleno lima, opacidad plena) y, mientras exista una
/// selección, el resto se atenúa. Sin selección el relleno depende de si la
/// receita supera 8000.
pub fn marker_style(point: &DestinationPoint, selected_destination: Option<&str>) -> MarkerStyle {
    let selected = selected_destination == Some(point.destination.as_str());
    let fill_color = if selected {
        SELECTED_FILL
    } else if point.revenue_sum > Decimal::from(8000) {
        HIGH_REVENUE_FILL
    } else {
        LOW_REVENUE_FILL
    };
    MarkerStyle {
        radius: if selected {
            point.marker_radius() + 4.0
        } else {
            point.marker_radius()
        },
        fill_color,
        border_color: if selected { "#000" } else { "#fff" },
        border_weight: if selected { 4.0 } else { 2.0 },
        fill_opacity: match selected_destination {
            Some(_) if selected => 1.0,
            Some(_) => 0.3,
            None => 0.85,
        },
        selected,
    }
}
