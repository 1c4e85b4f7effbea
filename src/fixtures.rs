//! Fixtures iniciales
//!
//! Este módulo construye el dataset estático con el que arranca el estado:
//! una malla pequeña de marzo 2025 con viagens entre capitales brasileñas.
//! Las referencias cruzadas (viagem → conductor/vehículo/cliente, gasto y
//! ocurrencia → viagem) se cablean con los UUIDs generados al sembrar.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::client::Client;
use crate::models::cost::{Cost, CostCategory};
use crate::models::driver::{Driver, DriverStatus};
use crate::models::occurrence::{Occurrence, OccurrenceSeverity, OccurrenceType};
use crate::models::trip::{Trip, TripStatus};
use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::state::FreightState;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fecha de fixture válida")
}

/// Construye el estado inicial sembrado: 3 conductores, 3 vehículos,
/// 2 clientes, 5 viagens, 5 gastos y 1 ocurrencia.
pub fn seed() -> FreightState {
    let d1 = Uuid::new_v4();
    let d2 = Uuid::new_v4();
    let d3 = Uuid::new_v4();
    let v1 = Uuid::new_v4();
    let v2 = Uuid::new_v4();
    let v3 = Uuid::new_v4();
    let c1 = Uuid::new_v4();
    let c2 = Uuid::new_v4();
    let t1 = Uuid::new_v4();
    let t2 = Uuid::new_v4();
    let t3 = Uuid::new_v4();
    let t4 = Uuid::new_v4();
    let t5 = Uuid::new_v4();

    let drivers = vec![
        Driver {
            id: d1,
            name: "João Silva".to_string(),
            license: "ABC-1234".to_string(),
            phone: "(11) 98765-4321".to_string(),
            status: DriverStatus::Active,
        },
        Driver {
            id: d2,
            name: "Ana Souza".to_string(),
            license: "XYZ-5678".to_string(),
            phone: "(21) 91234-5678".to_string(),
            status: DriverStatus::Active,
        },
        Driver {
            id: d3,
            name: "Marcos Oliveira".to_string(),
            license: "DEF-9012".to_string(),
            phone: "(31) 99876-5432".to_string(),
            status: DriverStatus::Inactive,
        },
    ];

    let vehicles = vec![
        Vehicle {
            id: v1,
            model: "Volvo FH16".to_string(),
            plate: "LOG-0001".to_string(),
            capacity: 25000.0,
            status: VehicleStatus::Available,
        },
        Vehicle {
            id: v2,
            model: "Scania R500".to_string(),
            plate: "LOG-0002".to_string(),
            capacity: 22000.0,
            status: VehicleStatus::Busy,
        },
        Vehicle {
            id: v3,
            model: "Mercedes Actros".to_string(),
            plate: "LOG-0003".to_string(),
            capacity: 28000.0,
            status: VehicleStatus::Maintenance,
        },
    ];

    let clients = vec![
        Client {
            id: c1,
            name: "Varejo Global S.A.".to_string(),
            email: "logistica@global.com.br".to_string(),
            address: "Av. Paulista, 1000, SP".to_string(),
        },
        Client {
            id: c2,
            name: "Indústria Direta".to_string(),
            email: "expedicao@industria.com.br".to_string(),
            address: "Distrito Industrial, Manaus".to_string(),
        },
    ];

    let trips = vec![
        Trip {
            id: t1,
            origin: "São Paulo".to_string(),
            destination: "Curitiba".to_string(),
            departure_date: date(2025, 3, 1),
            arrival_date: date(2025, 3, 2),
            status: TripStatus::Delivered,
            driver_id: d1,
            vehicle_id: v1,
            client_id: c1,
            cargo_weight: 15000.0,
            value_per_ton: None,
            revenue: Decimal::from(5200),
            distance_km: 400.0,
        },
        Trip {
            id: t2,
            origin: "Rio de Janeiro".to_string(),
            destination: "Belo Horizonte".to_string(),
            departure_date: date(2025, 3, 5),
            arrival_date: date(2025, 3, 6),
            status: TripStatus::Delivered,
            driver_id: d2,
            vehicle_id: v2,
            client_id: c2,
            cargo_weight: 8000.0,
            value_per_ton: None,
            revenue: Decimal::from(3100),
            distance_km: 440.0,
        },
        Trip {
            id: t3,
            origin: "Curitiba".to_string(),
            destination: "Porto Alegre".to_string(),
            departure_date: date(2025, 3, 10),
            arrival_date: date(2025, 3, 12),
            status: TripStatus::Delivered,
            driver_id: d1,
            vehicle_id: v1,
            client_id: c1,
            cargo_weight: 12000.0,
            value_per_ton: None,
            revenue: Decimal::from(4800),
            distance_km: 730.0,
        },
        Trip {
            id: t4,
            origin: "São Paulo".to_string(),
            destination: "Cuiabá".to_string(),
            departure_date: date(2025, 3, 15),
            arrival_date: date(2025, 3, 19),
            status: TripStatus::Delivered,
            driver_id: d3,
            vehicle_id: v3,
            client_id: c1,
            cargo_weight: 20000.0,
            value_per_ton: None,
            revenue: Decimal::from(12500),
            distance_km: 1500.0,
        },
        Trip {
            id: t5,
            origin: "Belo Horizonte".to_string(),
            destination: "Rio de Janeiro".to_string(),
            departure_date: date(2025, 3, 20),
            arrival_date: date(2025, 3, 21),
            status: TripStatus::InTransit,
            driver_id: d2,
            vehicle_id: v2,
            client_id: c2,
            cargo_weight: 10000.0,
            value_per_ton: None,
            revenue: Decimal::from(3800),
            distance_km: 440.0,
        },
    ];

    let costs = vec![
        Cost {
            id: Uuid::new_v4(),
            trip_id: Some(t1),
            category: CostCategory::Fuel,
            amount: Decimal::from(850),
            date: date(2025, 3, 1),
            description: "Diesel inicial".to_string(),
        },
        Cost {
            id: Uuid::new_v4(),
            trip_id: Some(t1),
            category: CostCategory::Toll,
            amount: Decimal::from(120),
            date: date(2025, 3, 1),
            description: "Pedágios".to_string(),
        },
        Cost {
            id: Uuid::new_v4(),
            trip_id: Some(t3),
            category: CostCategory::Fuel,
            amount: Decimal::from(1100),
            date: date(2025, 3, 10),
            description: "Diesel S10".to_string(),
        },
        Cost {
            id: Uuid::new_v4(),
            trip_id: Some(t4),
            category: CostCategory::Fuel,
            amount: Decimal::from(4200),
            date: date(2025, 3, 15),
            description: "Diesel longa distância".to_string(),
        },
        Cost {
            id: Uuid::new_v4(),
            trip_id: Some(t2),
            category: CostCategory::Maintenance,
            amount: Decimal::from(450),
            date: date(2025, 3, 5),
            description: "Troca de Óleo".to_string(),
        },
    ];

    let occurrences = vec![Occurrence {
        id: Uuid::new_v4(),
        trip_id: t2,
        kind: OccurrenceType::Delay,
        severity: OccurrenceSeverity::Low,
        date: date(2025, 3, 5),
        description: "Congestionamento na saída do Rio".to_string(),
    }];

    FreightState {
        trips,
        drivers,
        vehicles,
        clients,
        costs,
        occurrences,
    }
}
