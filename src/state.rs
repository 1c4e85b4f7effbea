//! Estado de la aplicación
//!
//! Este módulo define el contenedor de estado en memoria que posee las seis
//! colecciones del dominio durante la vida del proceso. Las mutaciones son
//! append-only: cada `add_*` genera un id nuevo y antepone el registro, de
//! modo que el orden de lectura por defecto es el más reciente primero.
//! No existen operaciones de actualización ni de borrado.

use uuid::Uuid;

use crate::models::client::{Client, CreateClientRequest};
use crate::models::cost::{Cost, CreateCostRequest};
use crate::models::driver::{CreateDriverRequest, Driver};
use crate::models::occurrence::{CreateOccurrenceRequest, Occurrence};
use crate::models::trip::{CreateTripRequest, Trip};
use crate::models::vehicle::{CreateVehicleRequest, Vehicle};

/// Contenedor de estado del dashboard.
///
/// Es un valor poseído que se pasa por referencia; las mutaciones entran por
/// `&mut self` desde un único actor lógico, así que no requiere locking.
/// Las operaciones `add_*` no validan nada: la validación estructural es
/// responsabilidad del colaborador que captura la entrada (ver
/// `utils::validation`).
#[derive(Debug, Clone, Default)]
pub struct FreightState {
    pub trips: Vec<Trip>,
    pub drivers: Vec<Driver>,
    pub vehicles: Vec<Vehicle>,
    pub clients: Vec<Client>,
    pub costs: Vec<Cost>,
    pub occurrences: Vec<Occurrence>,
}

impl FreightState {
    /// Estado vacío
    pub fn new() -> Self {
        Self::default()
    }

    /// Estado sembrado con los fixtures estáticos iniciales
    pub fn seeded() -> Self {
        crate::fixtures::seed()
    }

    /// Registrar una viagem. La receita se resuelve al crear: valor directo
    /// si fue informado, si no derivada del peso × valor por tonelada.
    pub fn add_trip(&mut self, request: CreateTripRequest) -> &Trip {
        let revenue = request.resolved_revenue();
        let trip = Trip {
            id: Uuid::new_v4(),
            origin: request.origin,
            destination: request.destination,
            departure_date: request.departure_date,
            arrival_date: request.arrival_date,
            status: request.status,
            driver_id: request.driver_id,
            vehicle_id: request.vehicle_id,
            client_id: request.client_id,
            cargo_weight: request.cargo_weight,
            value_per_ton: request.value_per_ton,
            revenue,
            distance_km: request.distance_km,
        };
        self.trips.insert(0, trip);
        &self.trips[0]
    }

    /// Lanzar un gasto, opcionalmente asignado a una viagem
    pub fn add_cost(&mut self, request: CreateCostRequest) -> &Cost {
        let cost = Cost {
            id: Uuid::new_v4(),
            trip_id: request.trip_id,
            category: request.category,
            amount: request.amount,
            date: request.date,
            description: request.description,
        };
        self.costs.insert(0, cost);
        &self.costs[0]
    }

    /// Registrar un conductor
    pub fn add_driver(&mut self, request: CreateDriverRequest) -> &Driver {
        let driver = Driver {
            id: Uuid::new_v4(),
            name: request.name,
            license: request.license,
            phone: request.phone,
            status: request.status,
        };
        self.drivers.insert(0, driver);
        &self.drivers[0]
    }

    /// Registrar un vehículo
    pub fn add_vehicle(&mut self, request: CreateVehicleRequest) -> &Vehicle {
        let vehicle = Vehicle {
            id: Uuid::new_v4(),
            model: request.model,
            plate: request.plate,
            capacity: request.capacity,
            status: request.status,
        };
        self.vehicles.insert(0, vehicle);
        &self.vehicles[0]
    }

    /// Registrar un cliente
    pub fn add_client(&mut self, request: CreateClientRequest) -> &Client {
        let client = Client {
            id: Uuid::new_v4(),
            name: request.name,
            email: request.email,
            address: request.address,
        };
        self.clients.insert(0, client);
        &self.clients[0]
    }

    /// Registrar una ocurrencia
    pub fn add_occurrence(&mut self, request: CreateOccurrenceRequest) -> &Occurrence {
        let occurrence = Occurrence {
            id: Uuid::new_v4(),
            trip_id: request.trip_id,
            kind: request.kind,
            severity: request.severity,
            date: request.date,
            description: request.description,
        };
        self.occurrences.insert(0, occurrence);
        &self.occurrences[0]
    }

    /// Buscar una viagem por id. Los ids colgantes se resuelven como
    /// ausentes, nunca como error.
    pub fn find_trip(&self, id: Uuid) -> Option<&Trip> {
        self.trips.iter().find(|trip| trip.id == id)
    }

    /// Buscar un conductor por id
    pub fn find_driver(&self, id: Uuid) -> Option<&Driver> {
        self.drivers.iter().find(|driver| driver.id == id)
    }

    /// Buscar un vehículo por id
    pub fn find_vehicle(&self, id: Uuid) -> Option<&Vehicle> {
        self.vehicles.iter().find(|vehicle| vehicle.id == id)
    }

    /// Buscar un cliente por id
    pub fn find_client(&self, id: Uuid) -> Option<&Client> {
        self.clients.iter().find(|client| client.id == id)
    }
}
