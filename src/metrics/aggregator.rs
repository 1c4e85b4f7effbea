//! Agregador de métricas
//!
//! Funciones puras sobre pares (viagens, gastos); nunca mutan la entrada y
//! son idempotentes. Política de casos borde: toda división con denominador
//! cero devuelve 0, nunca un error ni un NaN.

use chrono::{Datelike, Local};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::collections::HashMap;

use crate::models::cost::{Cost, CostCategory};
use crate::models::occurrence::{Occurrence, OccurrenceSeverity, OccurrenceType};
use crate::models::trip::{Trip, TripStatus};

/// Etiquetas de mes en pt-BR, orden calendario fijo
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

/// Totales financieros del período
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinancialTotals {
    pub total_revenue: Decimal,
    pub total_costs: Decimal,
    pub net_profit: Decimal,
}

/// Receita y gasto acumulados de un destino
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DestinationBreakdown {
    pub destination: String,
    pub revenue_sum: Decimal,
    pub cost_sum: Decimal,
}

/// Receita y gasto de un mes calendario
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyBreakdown {
    /// Mes calendario 1..=12
    pub month: u32,
    pub label: &'static str,
    pub revenue_sum: Decimal,
    pub cost_sum: Decimal,
}

/// Gasto acumulado por categoría
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdown {
    pub category: CostCategory,
    pub total: Decimal,
}

/// Conteos de incidentes para los indicadores de alertas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OccurrenceSummary {
    pub total: usize,
    pub delays: usize,
    pub high_severity: usize,
}

/// Totales del período: Σ receita de viagens, Σ monto de gastos y su resta.
pub fn totals(trips: &[Trip], costs: &[Cost]) -> FinancialTotals {
    let total_revenue: Decimal = trips.iter().map(|trip| trip.revenue).sum();
    let total_costs: Decimal = costs.iter().map(|cost| cost.amount).sum();
    FinancialTotals {
        total_revenue,
        total_costs,
        net_profit: total_revenue - total_costs,
    }
}

/// Margen = lucro líquido / receita × 100, redondeado a 1 decimal.
/// 0 cuando la receita total es 0.
pub fn margin(totals: &FinancialTotals) -> Decimal {
    if totals.total_revenue.is_zero() {
        return Decimal::ZERO;
    }
    (totals.net_profit / totals.total_revenue * Decimal::from(100))
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Costo por kilómetro = gasto total / Σ distancia, redondeado a 2 decimales.
/// 0 cuando la distancia total es 0.
pub fn cost_per_km(totals: &FinancialTotals, trips: &[Trip]) -> Decimal {
    let total_km: f64 = trips.iter().map(|trip| trip.distance_km).sum();
    match Decimal::from_f64(total_km) {
        Some(km) if !km.is_zero() => (totals.total_costs / km)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        _ => Decimal::ZERO,
    }
}

/// Tasa SLA: viagens entregadas / total × 100, redondeada al entero más
/// cercano. 0 con la colección vacía.
pub fn on_time_rate(trips: &[Trip]) -> u32 {
    if trips.is_empty() {
        return 0;
    }
    let delivered = trips
        .iter()
        .filter(|trip| trip.status == TripStatus::Delivered)
        .count();
    ((delivered as f64 / trips.len() as f64) * 100.0).round() as u32
}

/// Agrupa receita y gasto por destino. El gasto de un destino suma los
/// costos cuyo trip_id pertenece a una viagem con ese destino; los costos
/// sin asignar o con referencia colgante no entran en ningún destino.
/// Orden descendente por receita; los empates conservan el orden de
/// aparición (sort estable).
pub fn group_by_destination(trips: &[Trip], costs: &[Cost]) -> Vec<DestinationBreakdown> {
    let mut order: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, (Decimal, Decimal)> = HashMap::new();

    for trip in trips {
        if !buckets.contains_key(&trip.destination) {
            order.push(trip.destination.clone());
            buckets.insert(trip.destination.clone(), (Decimal::ZERO, Decimal::ZERO));
        }
        let trip_costs: Decimal = costs
            .iter()
            .filter(|cost| cost.trip_id == Some(trip.id))
            .map(|cost| cost.amount)
            .sum();
        if let Some(bucket) = buckets.get_mut(&trip.destination) {
            bucket.0 += trip.revenue;
            bucket.1 += trip_costs;
        }
    }

    let mut rows: Vec<DestinationBreakdown> = order
        .into_iter()
        .map(|destination| {
            let (revenue_sum, cost_sum) = buckets
                .remove(&destination)
                .unwrap_or((Decimal::ZERO, Decimal::ZERO));
            DestinationBreakdown {
                destination,
                revenue_sum,
                cost_sum,
            }
        })
        .collect();
    rows.sort_by(|a, b| b.revenue_sum.cmp(&a.revenue_sum));
    rows
}

/// Serie mensual Jan–Dez contra el mes calendario actual.
pub fn group_by_month(trips: &[Trip], costs: &[Cost]) -> Vec<MonthlyBreakdown> {
    group_by_month_at(trips, costs, Local::now().month())
}

/// Serie mensual Jan–Dez. Un mes entra en la salida si tiene receita o
/// gasto distintos de cero, o si su índice es ≤ `current_month`: los meses
/// futuros vacíos se ocultan, los pasados vacíos se muestran.
pub fn group_by_month_at(
    trips: &[Trip],
    costs: &[Cost],
    current_month: u32,
) -> Vec<MonthlyBreakdown> {
    (1..=12u32)
        .filter_map(|month| {
            let revenue_sum: Decimal = trips
                .iter()
                .filter(|trip| trip.departure_date.month() == month)
                .map(|trip| trip.revenue)
                .sum();
            let cost_sum: Decimal = costs
                .iter()
                .filter(|cost| cost.date.month() == month)
                .map(|cost| cost.amount)
                .sum();
            if revenue_sum.is_zero() && cost_sum.is_zero() && month > current_month {
                return None;
            }
            Some(MonthlyBreakdown {
                month,
                label: MONTH_LABELS[(month - 1) as usize],
                revenue_sum,
                cost_sum,
            })
        })
        .collect()
}

/// Gasto total por categoría, en orden de aparición.
pub fn totals_by_category(costs: &[Cost]) -> Vec<CategoryBreakdown> {
    let mut order: Vec<CostCategory> = Vec::new();
    let mut buckets: HashMap<CostCategory, Decimal> = HashMap::new();

    for cost in costs {
        if !buckets.contains_key(&cost.category) {
            order.push(cost.category);
        }
        *buckets.entry(cost.category).or_insert(Decimal::ZERO) += cost.amount;
    }

    order
        .into_iter()
        .map(|category| CategoryBreakdown {
            category,
            total: buckets.remove(&category).unwrap_or(Decimal::ZERO),
        })
        .collect()
}

/// Conteos para el panel de alertas: total, atrasos y severidad alta.
pub fn occurrence_summary(occurrences: &[Occurrence]) -> OccurrenceSummary {
    OccurrenceSummary {
        total: occurrences.len(),
        delays: occurrences
            .iter()
            .filter(|occurrence| occurrence.kind == OccurrenceType::Delay)
            .count(),
        high_severity: occurrences
            .iter()
            .filter(|occurrence| occurrence.severity == OccurrenceSeverity::High)
            .count(),
    }
}
