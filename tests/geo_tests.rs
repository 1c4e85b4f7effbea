use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use freight_dashboard::metrics::aggregator::group_by_destination;
use freight_dashboard::metrics::geo::{
    marker_style, summarize_destinations, CITY_COORDS, MAX_MARKER_RADIUS, MIN_MARKER_RADIUS,
};
use freight_dashboard::models::trip::{Trip, TripStatus};
use freight_dashboard::state::FreightState;

#[test]
fn test_summarize_destinations_on_seeded_network() {
    let state = FreightState::seeded();

    let points = summarize_destinations(&state.trips);

    // Los cinco destinos sembrados tienen coordenadas conocidas
    assert_eq!(points.len(), 5);
    let curitiba = points
        .iter()
        .find(|point| point.destination == "Curitiba")
        .expect("Curitiba presente");
    assert_eq!(curitiba.revenue_sum, Decimal::from(5200));
    assert_eq!(curitiba.trip_count, 1);
    assert_eq!(curitiba.total_cargo_weight_kg, 15000.0);
    let expected = CITY_COORDS.get("Curitiba").expect("coordenadas fijas");
    assert_eq!((curitiba.latitude, curitiba.longitude), *expected);
}

#[test]
fn test_unknown_city_excluded_from_geo_but_not_from_aggregates() {
    let trips = vec![
        trip("São Paulo", "Curitiba", 5200, 15000.0),
        trip("São Paulo", "Springfield", 900, 2000.0),
    ];

    let points = summarize_destinations(&trips);
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].destination, "Curitiba");

    // El destino sin coordenadas sigue contando fuera de la vista geográfica
    let rows = group_by_destination(&trips, &[]);
    assert!(rows.iter().any(|row| row.destination == "Springfield"));
}

#[test]
fn test_marker_radius_is_clamped() {
    let mut point = summarize_destinations(&[trip("São Paulo", "Curitiba", 100, 1000.0)])
        .into_iter()
        .next()
        .expect("un punto");

    // 100 / 400 quedaría por debajo del mínimo
    assert_eq!(point.marker_radius(), MIN_MARKER_RADIUS);

    point.revenue_sum = Decimal::from(1_000_000);
    assert_eq!(point.marker_radius(), MAX_MARKER_RADIUS);

    // 5200 / 400 = 13, dentro del rango
    point.revenue_sum = Decimal::from(5200);
    assert_eq!(point.marker_radius(), 13.0);
}

#[test]
fn test_avg_revenue_per_ton() {
    let points = summarize_destinations(&[trip("São Paulo", "Cuiabá", 12500, 20000.0)]);

    // 12500 / 20 toneladas = 625
    assert_eq!(points[0].avg_revenue_per_ton(), Decimal::from(625));

    let empty_load = summarize_destinations(&[trip("São Paulo", "Cuiabá", 12500, 0.0)]);
    assert_eq!(empty_load[0].avg_revenue_per_ton(), Decimal::ZERO);
}

#[test]
fn test_marker_style_highlights_selection() {
    let points = summarize_destinations(&[
        trip("São Paulo", "Cuiabá", 12500, 20000.0),
        trip("São Paulo", "Curitiba", 5200, 15000.0),
    ]);
    let cuiaba = &points[0];
    let curitiba = &points[1];

    let selected = marker_style(cuiaba, Some("Cuiabá"));
    assert!(selected.selected);
    assert_eq!(selected.fill_color, "#d9ff54");
    assert_eq!(selected.radius, cuiaba.marker_radius() + 4.0);
    assert_eq!(selected.fill_opacity, 1.0);
    assert_eq!(selected.border_weight, 4.0);

    // Con una selección activa el resto se atenúa
    let dimmed = marker_style(curitiba, Some("Cuiabá"));
    assert!(!dimmed.selected);
    assert_eq!(dimmed.fill_opacity, 0.3);
}

#[test]
fn test_marker_fill_depends_on_revenue_without_selection() {
    let points = summarize_destinations(&[
        trip("São Paulo", "Cuiabá", 12500, 20000.0),
        trip("São Paulo", "Curitiba", 5200, 15000.0),
    ]);

    // Receita > 8000 → azul; si no → rosa
    assert_eq!(marker_style(&points[0], None).fill_color, "#2d6cf6");
    assert_eq!(marker_style(&points[1], None).fill_color, "#ff4f9a");
    assert_eq!(marker_style(&points[0], None).fill_opacity, 0.85);
}

// Helper para construir viagens de test

fn trip(origin: &str, destination: &str, revenue: i64, cargo_weight: f64) -> Trip {
    Trip {
        id: Uuid::new_v4(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        departure_date: NaiveDate::from_ymd_opt(2025, 3, 1).expect("fecha válida"),
        arrival_date: NaiveDate::from_ymd_opt(2025, 3, 2).expect("fecha válida"),
        status: TripStatus::Delivered,
        driver_id: Uuid::new_v4(),
        vehicle_id: Uuid::new_v4(),
        client_id: Uuid::new_v4(),
        cargo_weight,
        value_per_ton: None,
        revenue: Decimal::from(revenue),
        distance_km: 400.0,
    }
}
