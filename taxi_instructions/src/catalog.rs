use std::sync::LazyLock;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::{CatalogError, CatalogResult},
    procedure::AirportEntry,
};

/// Fixed mapping from airport identifier to its taxi procedures.
///
/// Lookups never fail: identifiers that are not in the catalog resolve to the
/// default entry.
#[derive(Debug, Clone)]
pub struct AirportCatalog {
    airports: IndexMap<String, AirportEntry>,
    default: AirportEntry,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    default: Option<AirportEntry>,
    #[serde(default)]
    airports: IndexMap<String, AirportEntry>,
}

static BUILTIN: LazyLock<AirportCatalog> = LazyLock::new(|| {
    AirportCatalog::from_toml(include_str!("../airports.toml"))
        .expect("Failed to load bundled airport catalog")
});

pub fn normalize_identifier(raw: &str) -> String {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_uppercase()
}

impl AirportCatalog {
    /// The catalog compiled into the crate, loaded on first use.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    pub fn from_toml(document: &str) -> CatalogResult<Self> {
        let CatalogDocument { default, airports } = toml::from_str(document)?;
        let default = default.ok_or(CatalogError::MissingDefault)?;
        if let Some(key) = airports
            .keys()
            .find(|key| key.is_empty() || normalize_identifier(key) != **key)
        {
            return Err(CatalogError::UnnormalizedKey(key.clone()));
        }
        Ok(Self { airports, default })
    }

    pub fn resolve(&self, raw_identifier: &str) -> &AirportEntry {
        let icao = normalize_identifier(raw_identifier);
        match self.airports.get(&icao) {
            Some(entry) => {
                debug!(icao, "Resolved airport from catalog");
                entry
            }
            None => {
                debug!(icao, "Airport not in catalog, using default procedures");
                &self.default
            }
        }
    }

    pub fn contains(&self, raw_identifier: &str) -> bool {
        self.airports
            .contains_key(&normalize_identifier(raw_identifier))
    }

    pub fn default_entry(&self) -> &AirportEntry {
        &self.default
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.airports.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AirportEntry)> {
        self.airports.iter().map(|(icao, entry)| (icao.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    const SMALL_CATALOG: &str = r#"
[default.departure]
gate = "A1"
taxi_route = "via Alpha"
runway = "the active runway"

[default.arrival]
runway = "the active runway"
exit_taxiway = "Alpha"
taxi_route = "via Alpha to Gate A1"

[airports.ENGM.departure]
gate = "Gate 7"
taxi_route = "via Alpha and Bravo"
runway = "01L"

[airports.ENGM.arrival]
runway = "01R"
exit_taxiway = "Bravo 4"
taxi_route = "via Bravo to Gate 7"
"#;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = AirportCatalog::builtin();
        assert_eq!(catalog.len(), 16);
        assert_eq!(catalog.identifiers().next(), Some("KLAX"));
        assert_eq!(catalog.identifiers().last(), Some("KSEA"));
        for (icao, entry) in catalog.iter() {
            assert_eq!(normalize_identifier(icao), icao);
            assert_eq!(entry.departure.runway, entry.arrival.runway, "{icao}");
        }
    }

    #[test]
    fn test_resolve_ignores_case_and_whitespace() {
        let catalog = AirportCatalog::builtin();
        let exact = catalog.resolve("KLAX");
        assert!(std::ptr::eq(exact, catalog.resolve("klax")));
        assert!(std::ptr::eq(exact, catalog.resolve(" KLAX ")));
        assert!(std::ptr::eq(exact, catalog.resolve("\tkLaX\n")));
        assert!(std::ptr::eq(exact, catalog.resolve("\u{feff}KLAX")));
        assert!(std::ptr::eq(exact, catalog.resolve("klax\u{feff} ")));
        assert_eq!(exact.departure.gate, "Gate 60");
        assert_eq!(exact.arrival.exit_taxiway, "Echo");
    }

    #[test]
    #[traced_test]
    fn test_unknown_airport_falls_back_to_default() {
        let catalog = AirportCatalog::builtin();
        let entry = catalog.resolve("zzzz");
        assert!(std::ptr::eq(entry, catalog.default_entry()));
        assert_eq!(entry.departure.gate, "A1");
        assert_eq!(entry.departure.taxi_route, "via Alpha");
        assert_eq!(entry.departure.runway, "the active runway");
        assert_eq!(entry.arrival.runway, "the active runway");
        assert_eq!(entry.arrival.exit_taxiway, "Alpha");
        assert_eq!(entry.arrival.taxi_route, "via Alpha to Gate A1");
        assert!(logs_contain("using default procedures"));
        assert!(logs_contain("ZZZZ"));
    }

    #[test]
    fn test_empty_identifier_falls_back_to_default() {
        let catalog = AirportCatalog::builtin();
        assert!(std::ptr::eq(catalog.resolve("   "), catalog.default_entry()));
        assert!(!catalog.contains(""));
    }

    #[test]
    fn test_resolve_is_repeatable() {
        let catalog = AirportCatalog::builtin();
        assert_eq!(catalog.resolve("egll"), catalog.resolve("egll"));
        assert_eq!(catalog.resolve("nowhere"), catalog.resolve("nowhere"));
    }

    #[test]
    fn test_contains() {
        let catalog = AirportCatalog::builtin();
        assert!(catalog.contains(" egkk"));
        assert!(!catalog.contains("ENGM"));
    }

    #[test]
    fn test_from_toml() {
        let catalog = AirportCatalog::from_toml(SMALL_CATALOG).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.resolve("engm").arrival.exit_taxiway, "Bravo 4");
        assert_eq!(catalog.resolve("KLAX"), catalog.default_entry());
    }

    #[test]
    fn test_missing_default_is_rejected() {
        let document = SMALL_CATALOG.replace("[default.", "[fallback.");
        assert!(matches!(
            AirportCatalog::from_toml(&document),
            Err(CatalogError::MissingDefault)
        ));
    }

    #[test]
    fn test_lowercase_key_is_rejected() {
        let document = SMALL_CATALOG.replace("airports.ENGM", "airports.engm");
        match AirportCatalog::from_toml(&document) {
            Err(CatalogError::UnnormalizedKey(key)) => assert_eq!(key, "engm"),
            other => panic!("Expected unnormalized key error, got {other:?}"),
        }
    }

    #[test]
    fn test_incomplete_record_is_rejected() {
        let document = SMALL_CATALOG.replace("exit_taxiway = \"Bravo 4\"\n", "");
        assert!(matches!(
            AirportCatalog::from_toml(&document),
            Err(CatalogError::Toml(_))
        ));
    }
}
