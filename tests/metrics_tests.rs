use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use freight_dashboard::metrics::aggregator::{
    cost_per_km, group_by_destination, group_by_month_at, margin, occurrence_summary,
    on_time_rate, totals, totals_by_category,
};
use freight_dashboard::metrics::filters::{costs_for_trips, trips_to_destination};
use freight_dashboard::models::cost::{Cost, CostCategory};
use freight_dashboard::models::trip::{Trip, TripStatus};
use freight_dashboard::state::FreightState;

#[test]
fn test_totals_on_empty_collections() {
    let result = totals(&[], &[]);

    assert_eq!(result.total_revenue, Decimal::ZERO);
    assert_eq!(result.total_costs, Decimal::ZERO);
    assert_eq!(result.net_profit, Decimal::ZERO);
    assert_eq!(margin(&result), Decimal::ZERO);
    assert_eq!(cost_per_km(&result, &[]), Decimal::ZERO);
    assert_eq!(on_time_rate(&[]), 0);
}

#[test]
fn test_margin_is_zero_whenever_revenue_is_zero() {
    let no_sales = totals(&[], &[cost(None, CostCategory::Fuel, 900, 3)]);

    assert_eq!(no_sales.total_costs, Decimal::from(900));
    assert_eq!(margin(&no_sales), Decimal::ZERO);
}

#[test]
fn test_totals_and_ratios_on_seeded_network() {
    let state = FreightState::seeded();
    let result = totals(&state.trips, &state.costs);

    assert_eq!(result.total_revenue, Decimal::from(29400));
    assert_eq!(result.total_costs, Decimal::from(6720));
    assert_eq!(result.net_profit, Decimal::from(22680));
    // 22680 / 29400 × 100 = 77.142857… → 77.1
    assert_eq!(margin(&result), Decimal::new(771, 1));
    // 6720 / 3510 km = 1.914529… → 1.91
    assert_eq!(cost_per_km(&result, &state.trips), Decimal::new(191, 2));
    // 4 entregues de 5
    assert_eq!(on_time_rate(&state.trips), 80);
}

#[test]
fn test_on_time_rate_rounds_to_nearest_integer() {
    let trips = vec![
        trip("São Paulo", "Curitiba", 1000, 400.0, TripStatus::Delivered),
        trip("São Paulo", "Curitiba", 1000, 400.0, TripStatus::Delivered),
        trip("São Paulo", "Curitiba", 1000, 400.0, TripStatus::InTransit),
    ];

    // round(100 × 2 / 3) = 67, dentro de [0, 100]
    assert_eq!(on_time_rate(&trips), 67);
}

#[test]
fn test_group_by_destination_merges_trips_to_same_city() {
    let trips = vec![
        trip("São Paulo", "Curitiba", 5200, 400.0, TripStatus::Delivered),
        trip("Santos", "Curitiba", 4800, 430.0, TripStatus::Delivered),
    ];

    let rows = group_by_destination(&trips, &[]);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].destination, "Curitiba");
    assert_eq!(rows[0].revenue_sum, Decimal::from(10000));
    assert_eq!(rows[0].cost_sum, Decimal::ZERO);
}

#[test]
fn test_group_by_destination_sorts_descending_with_stable_ties() {
    let trips = vec![
        trip("X", "Alfa", 100, 100.0, TripStatus::Delivered),
        trip("X", "Bravo", 200, 100.0, TripStatus::Delivered),
        trip("X", "Charlie", 100, 100.0, TripStatus::Delivered),
    ];

    let rows = group_by_destination(&trips, &[]);
    let order: Vec<&str> = rows.iter().map(|row| row.destination.as_str()).collect();

    // Empate 100/100: Alfa conserva su orden de aparición frente a Charlie
    assert_eq!(order, vec!["Bravo", "Alfa", "Charlie"]);
}

#[test]
fn test_destination_revenue_conservation_law() {
    let state = FreightState::seeded();

    let grouped_revenue: Decimal = group_by_destination(&state.trips, &state.costs)
        .iter()
        .map(|row| row.revenue_sum)
        .sum();

    assert_eq!(
        grouped_revenue,
        totals(&state.trips, &state.costs).total_revenue
    );
}

#[test]
fn test_dangling_and_unassigned_costs_stay_out_of_destination_buckets() {
    let trips = vec![trip("São Paulo", "Curitiba", 5200, 400.0, TripStatus::Delivered)];
    let costs = vec![
        cost(Some(trips[0].id), CostCategory::Fuel, 850, 3),
        // Referencia colgante: la viagem no existe
        cost(Some(Uuid::new_v4()), CostCategory::Toll, 120, 3),
        // Sin asignar
        cost(None, CostCategory::Other, 50, 3),
    ];

    let rows = group_by_destination(&trips, &costs);
    assert_eq!(rows[0].cost_sum, Decimal::from(850));

    // Pero ambos siguen contando en los totales globales
    assert_eq!(totals(&trips, &costs).total_costs, Decimal::from(1020));
}

#[test]
fn test_group_by_month_hides_empty_future_months() {
    let state = FreightState::seeded();

    // Todo el movimiento sembrado es de marzo; con mayo como mes actual se
    // muestran los meses pasados vacíos y se ocultan los futuros
    let rows = group_by_month_at(&state.trips, &state.costs, 5);

    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].label, "Jan");
    assert_eq!(rows[2].label, "Mar");
    assert_eq!(rows[2].revenue_sum, Decimal::from(29400));
    assert_eq!(rows[2].cost_sum, Decimal::from(6720));
    assert_eq!(rows[4].label, "Mai");
    assert_eq!(rows[4].revenue_sum, Decimal::ZERO);
}

#[test]
fn test_group_by_month_keeps_nonzero_future_months() {
    let state = FreightState::seeded();

    // Con enero como mes actual, marzo sólo aparece por tener movimiento
    let rows = group_by_month_at(&state.trips, &state.costs, 1);

    let labels: Vec<&str> = rows.iter().map(|row| row.label).collect();
    assert_eq!(labels, vec!["Jan", "Mar"]);
}

#[test]
fn test_aggregator_functions_are_idempotent() {
    let state = FreightState::seeded();

    assert_eq!(
        totals(&state.trips, &state.costs),
        totals(&state.trips, &state.costs)
    );
    assert_eq!(
        group_by_destination(&state.trips, &state.costs),
        group_by_destination(&state.trips, &state.costs)
    );
    assert_eq!(
        group_by_month_at(&state.trips, &state.costs, 6),
        group_by_month_at(&state.trips, &state.costs, 6)
    );
}

#[test]
fn test_totals_by_category_in_encounter_order() {
    let state = FreightState::seeded();

    let rows = totals_by_category(&state.costs);

    // Combustível es la primera categoría que aparece en los gastos
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].category, CostCategory::Fuel);
    assert_eq!(rows[0].total, Decimal::from(6150));
    let toll = rows
        .iter()
        .find(|row| row.category == CostCategory::Toll)
        .expect("categoría pedágio presente");
    assert_eq!(toll.total, Decimal::from(120));
}

#[test]
fn test_occurrence_summary_counts() {
    let state = FreightState::seeded();

    let summary = occurrence_summary(&state.occurrences);

    assert_eq!(summary.total, 1);
    assert_eq!(summary.delays, 1);
    assert_eq!(summary.high_severity, 0);
}

#[test]
fn test_destination_filter_restricts_trips_and_costs() {
    let state = FreightState::seeded();

    let curitiba_trips = trips_to_destination(&state.trips, "Curitiba");
    let curitiba_costs = costs_for_trips(&state.costs, &curitiba_trips);

    assert_eq!(curitiba_trips.len(), 1);
    // Diesel inicial + pedágios de la viagem a Curitiba
    assert_eq!(curitiba_costs.len(), 2);
    let filtered = totals(&curitiba_trips, &curitiba_costs);
    assert_eq!(filtered.total_revenue, Decimal::from(5200));
    assert_eq!(filtered.total_costs, Decimal::from(970));
}

// Helpers para construir colecciones de test

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fecha válida")
}

fn trip(origin: &str, destination: &str, revenue: i64, distance_km: f64, status: TripStatus) -> Trip {
    Trip {
        id: Uuid::new_v4(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        departure_date: date(2025, 3, 1),
        arrival_date: date(2025, 3, 2),
        status,
        driver_id: Uuid::new_v4(),
        vehicle_id: Uuid::new_v4(),
        client_id: Uuid::new_v4(),
        cargo_weight: 10000.0,
        value_per_ton: None,
        revenue: Decimal::from(revenue),
        distance_km,
    }
}

fn cost(trip_id: Option<Uuid>, category: CostCategory, amount: i64, month: u32) -> Cost {
    Cost {
        id: Uuid::new_v4(),
        trip_id,
        category,
        amount: Decimal::from(amount),
        date: date(2025, month, 1),
        description: "gasto de test".to_string(),
    }
}
