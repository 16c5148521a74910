//! Station records.
//!
//! A station is one row in the station book: where the load goes, which
//! brand it flies, and which terminal it normally pulls from. Records
//! come from the bundled JSON sample data; every field except `address`
//! tolerates absence and defaults to empty/zero.

use serde::{Deserialize, Serialize};

/// A gas station in the station book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Display name (e.g. "Quick Stop #4").
    #[serde(default)]
    pub name: String,
    /// Street address. The only field required in the data.
    pub address: String,
    /// City.
    #[serde(default)]
    pub city: String,
    /// Brand code (BP, EXXON, SHELL, ...). Unknown codes render with the
    /// default badge.
    #[serde(default)]
    pub brand: String,
    /// Supplying terminal code ("N. AUG", "CLT", "SPARTY").
    #[serde(default)]
    pub terminal: String,
    /// Contact phone.
    #[serde(default)]
    pub phone: String,
    /// Standing delivery notes.
    #[serde(default)]
    pub notes: String,
    /// Free-form comments.
    #[serde(default)]
    pub comments: String,
    /// Latitude in decimal degrees.
    #[serde(default)]
    pub latitude: f64,
    /// Longitude in decimal degrees.
    #[serde(default)]
    pub longitude: f64,
}

impl Station {
    /// Creates a station with the given name and address.
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            city: String::new(),
            brand: String::new(),
            terminal: String::new(),
            phone: String::new(),
            notes: String::new(),
            comments: String::new(),
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    /// Sets the city.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Sets the brand code.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    /// Sets the supplying terminal code.
    pub fn with_terminal(mut self, terminal: impl Into<String>) -> Self {
        self.terminal = terminal.into();
        self
    }

    /// Sets the contact phone.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the standing delivery notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Working identity within a book.
    ///
    /// Station records carry no id field; name plus address is what
    /// distinguishes two rows.
    pub fn key(&self) -> String {
        format!("{} @ {}", self.name, self.address)
    }

    /// Case-insensitive search across name, brand, address, and city.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q)
            || self.brand.to_lowercase().contains(&q)
            || self.address.to_lowercase().contains(&q)
            || self.city.to_lowercase().contains(&q)
    }
}

/// Filters a station book by a search query.
///
/// An empty query returns every station.
pub fn filter_stations<'a>(stations: &'a [Station], query: &str) -> Vec<&'a Station> {
    if query.is_empty() {
        return stations.iter().collect();
    }
    stations.iter().filter(|s| s.matches(query)).collect()
}
