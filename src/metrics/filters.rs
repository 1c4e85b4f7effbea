//! Filtros de vista
//!
//! El agregador es agnóstico al filtro: restringir las colecciones a un
//! destino es responsabilidad del llamador, con estos helpers puros.

use std::collections::HashSet;
use uuid::Uuid;

use crate::models::cost::Cost;
use crate::models::trip::Trip;

/// Viagens con el destino dado.
pub fn trips_to_destination(trips: &[Trip], destination: &str) -> Vec<Trip> {
    trips
        .iter()
        .filter(|trip| trip.destination == destination)
        .cloned()
        .collect()
}

/// Gastos cuyo trip_id pertenece al subconjunto de viagens dado. Los gastos
/// sin asignar quedan fuera de cualquier vista filtrada.
pub fn costs_for_trips(costs: &[Cost], trips: &[Trip]) -> Vec<Cost> {
    let trip_ids: HashSet<Uuid> = trips.iter().map(|trip| trip.id).collect();
    costs
        .iter()
        .filter(|cost| cost.trip_id.map_or(false, |id| trip_ids.contains(&id)))
        .cloned()
        .collect()
}
