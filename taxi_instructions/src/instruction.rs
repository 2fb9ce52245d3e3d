use crate::procedure::{ArrivalProcedure, DepartureProcedure};

pub fn format_departure(identifier: &str, procedure: &DepartureProcedure) -> String {
    format!(
        "Pushback approved from {}. Taxi {} to runway {} at {}. Hold short and contact tower when ready for departure.",
        procedure.gate,
        procedure.taxi_route,
        procedure.runway,
        identifier.to_uppercase(),
    )
}

pub fn format_arrival(identifier: &str, procedure: &ArrivalProcedure) -> String {
    format!(
        "Cleared to land on runway {} at {}. After landing, exit via taxiway {}, then taxi {}. Welcome!",
        procedure.runway,
        identifier.to_uppercase(),
        procedure.exit_taxiway,
        procedure.taxi_route,
    )
}
