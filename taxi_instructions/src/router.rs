use itertools::Itertools;
use tracing::{debug, info};

use crate::{
    catalog::AirportCatalog,
    instruction::{format_arrival, format_departure},
    operation::OperationKind,
};

/// How many catalog identifiers the airport prompt offers as examples.
const AIRPORT_PROMPT_EXAMPLES: usize = 9;

/// Where the panel reads answers from. `None` means the prompt was cancelled.
pub trait InputPort {
    fn prompt(&mut self, message: &str) -> Option<String>;
}

/// Where the panel writes its current message.
pub trait DisplayPort {
    fn show(&mut self, message: &str);
}

/// Ties the catalog and the phrasing together behind the panel ports.
#[derive(Debug, Clone, Copy)]
pub struct AtcRouter<'a> {
    catalog: &'a AirportCatalog,
}

impl Default for AtcRouter<'static> {
    fn default() -> Self {
        Self::new(AirportCatalog::builtin())
    }
}

impl<'a> AtcRouter<'a> {
    pub fn new(catalog: &'a AirportCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a AirportCatalog {
        self.catalog
    }

    pub fn route(&self, identifier: &str, operation: OperationKind) -> String {
        match operation {
            OperationKind::Departing => {
                format_departure(identifier, &self.catalog.resolve(identifier).departure)
            }
            OperationKind::Landing => {
                format_arrival(identifier, &self.catalog.resolve(identifier).arrival)
            }
            OperationKind::Unspecified => {
                format!("Requested: {identifier} (operation not specified)")
            }
        }
    }

    pub fn airport_prompt(&self) -> String {
        if self.catalog.is_empty() {
            "Which airport do you require?".to_string()
        } else {
            format!(
                "Which airport do you require? (e.g. {})",
                self.catalog
                    .identifiers()
                    .take(AIRPORT_PROMPT_EXAMPLES)
                    .join(", ")
            )
        }
    }

    pub fn operation_prompt(airport: &str) -> String {
        format!(r#"Are you departing or landing at {airport}? (Type "departing" or "landing")"#)
    }

    /// One click on the panel: ask for an airport, then for the operation.
    /// A cancelled or empty airport answer leaves the display untouched.
    pub fn handle_click<I, D>(&self, input: &mut I, display: &mut D)
    where
        I: InputPort + ?Sized,
        D: DisplayPort + ?Sized,
    {
        match input.prompt(&self.airport_prompt()) {
            Some(airport) if !airport.is_empty() => self.handle_request(&airport, input, display),
            _ => debug!("No airport requested"),
        }
    }

    pub fn handle_request<I, D>(&self, airport: &str, input: &mut I, display: &mut D)
    where
        I: InputPort + ?Sized,
        D: DisplayPort + ?Sized,
    {
        if !self.catalog.contains(airport) {
            debug!(airport, "No taxi procedures on file, handing out default instructions");
        }
        let answer = input.prompt(&Self::operation_prompt(airport));
        let operation = OperationKind::from_input(answer.as_deref());
        info!(airport, operation = operation.as_str(), "Handing out ATC instructions");
        display.show(&self.route(airport, operation));
    }
}
