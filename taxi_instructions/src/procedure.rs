use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartureProcedure {
    pub gate: String,
    pub taxi_route: String,
    pub runway: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalProcedure {
    pub runway: String,
    pub exit_taxiway: String,
    pub taxi_route: String,
}

/// Taxi procedures for both directions of traffic at one airport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirportEntry {
    pub departure: DepartureProcedure,
    pub arrival: ArrivalProcedure,
}
