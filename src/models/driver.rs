//! Driver roster records.
//!
//! A driver hauls loads out of the terminals they are carded at. The
//! `carded` map records, per terminal location, which rack operators
//! have issued the driver a loading card.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A driver on the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    /// Unique roster id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact phone.
    pub phone: String,
    /// Home terminal location.
    pub home: String,
    /// Carded rack operators per terminal location.
    pub carded: HashMap<String, Vec<String>>,
}

impl Driver {
    /// Creates a driver with the given id and name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: String::new(),
            home: String::new(),
            carded: HashMap::new(),
        }
    }

    /// Sets the contact phone.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the home terminal location.
    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = home.into();
        self
    }

    /// Records the rack operators the driver is carded with at a location.
    pub fn with_carded(
        mut self,
        location: impl Into<String>,
        operators: Vec<String>,
    ) -> Self {
        self.carded.insert(location.into(), operators);
        self
    }

    /// Whether the driver holds any card at the given location.
    pub fn is_carded_at(&self, location: &str) -> bool {
        self.carded
            .get(location)
            .is_some_and(|ops| !ops.is_empty())
    }

    /// Rack operators the driver is carded with at a location.
    pub fn operators_at(&self, location: &str) -> &[String] {
        self.carded.get(location).map_or(&[], |ops| ops.as_slice())
    }

    /// Compact summary of carded locations for one-line display,
    /// abbreviated and joined with " • ". Locations are sorted so the
    /// summary is stable across runs.
    pub fn carded_locations(&self) -> String {
        let mut locations: Vec<&str> = self.carded.keys().map(String::as_str).collect();
        locations.sort_unstable();
        locations
            .into_iter()
            .map(abbreviate_location)
            .collect::<Vec<_>>()
            .join(" • ")
    }
}

/// Abbreviates a terminal location name for compact display.
///
/// Unknown locations pass through unchanged.
pub fn abbreviate_location(location: &str) -> &str {
    match location {
        "Charleston" => "CHS",
        "Charlotte" => "CLT",
        "N.Augusta" => "NAG",
        "Sparty" => "SPTY",
        "Belton" => "BLT",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_driver() -> Driver {
        Driver::new("d-07", "DEWAYNE")
            .with_phone("(864) 555-0188")
            .with_home("Sparty")
            .with_carded("Charleston", vec!["Buckeye".into(), "Kinder Morgan".into()])
            .with_carded("Sparty", vec!["Magellan".into()])
    }

    #[test]
    fn test_driver_builder() {
        let d = sample_driver();
        assert_eq!(d.id, "d-07");
        assert_eq!(d.name, "DEWAYNE");
        assert_eq!(d.home, "Sparty");
        assert!(d.is_carded_at("Charleston"));
        assert_eq!(d.operators_at("Sparty"), ["Magellan".to_string()]);
    }

    #[test]
    fn test_not_carded() {
        let d = sample_driver();
        assert!(!d.is_carded_at("Belton"));
        assert!(d.operators_at("Belton").is_empty());

        let empty = Driver::new("d-00", "X").with_carded("Belton", Vec::new());
        assert!(!empty.is_carded_at("Belton"));
    }

    #[test]
    fn test_abbreviations() {
        assert_eq!(abbreviate_location("Charleston"), "CHS");
        assert_eq!(abbreviate_location("Charlotte"), "CLT");
        assert_eq!(abbreviate_location("N.Augusta"), "NAG");
        assert_eq!(abbreviate_location("Sparty"), "SPTY");
        assert_eq!(abbreviate_location("Belton"), "BLT");
    }

    #[test]
    fn test_unknown_location_passes_through() {
        assert_eq!(abbreviate_location("Savannah"), "Savannah");
    }

    #[test]
    fn test_carded_locations_summary() {
        let d = sample_driver();
        // Sorted: Charleston before Sparty.
        assert_eq!(d.carded_locations(), "CHS • SPTY");
    }

    #[test]
    fn test_carded_locations_empty() {
        let d = Driver::new("d-01", "ADAM");
        assert_eq!(d.carded_locations(), "");
    }

    #[test]
    fn test_decode_from_json() {
        let json = r#"{
            "id": "d-03",
            "name": "CLARENCE",
            "phone": "(803) 555-0121",
            "home": "N.Augusta",
            "carded": {"N.Augusta": ["Motiva"]}
        }"#;
        let d: Driver = serde_json::from_str(json).unwrap();
        assert_eq!(d.name, "CLARENCE");
        assert_eq!(d.operators_at("N.Augusta"), ["Motiva".to_string()]);
    }
}
