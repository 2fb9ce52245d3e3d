use std::io::Write;

use indexmap::IndexMap;
use itertools::Itertools;
use serde::Serialize;
use taxi_instructions::{AirportCatalog, procedure::AirportEntry};

use crate::error::ApplicationResult;

#[derive(Serialize)]
struct CatalogListing<'a> {
    default: &'a AirportEntry,
    airports: IndexMap<&'a str, &'a AirportEntry>,
}

pub(crate) fn write_catalog_json<W: Write>(
    catalog: &AirportCatalog,
    writer: &mut W,
) -> ApplicationResult<()> {
    let listing = CatalogListing {
        default: catalog.default_entry(),
        airports: catalog.iter().collect(),
    };
    serde_json::to_writer_pretty(&mut *writer, &listing)?;
    writeln!(writer)?;
    Ok(())
}

pub(crate) fn write_catalog_table<W: Write>(
    catalog: &AirportCatalog,
    writer: &mut W,
) -> ApplicationResult<()> {
    let rows = catalog
        .iter()
        .chain(std::iter::once(("(other)", catalog.default_entry())))
        .map(|(icao, entry)| {
            format!(
                "{icao:<8} Dep: {} {} rwy {:<18} Arr: rwy {} exit {} {}",
                entry.departure.gate,
                entry.departure.taxi_route,
                entry.departure.runway,
                entry.arrival.runway,
                entry.arrival.exit_taxiway,
                entry.arrival.taxi_route,
            )
        })
        .join("\n");
    writeln!(writer, "{rows}")?;
    Ok(())
}
