//! Bundled sample data and JSON loading.
//!
//! Stations and drivers ship as read-only JSON files embedded in the
//! crate, and can also be loaded from disk. Loading comes in two
//! flavors: strict loaders that return a typed error, and lenient
//! loaders that log the failure and hand back an empty collection —
//! the app never crashes, retries, or surfaces a data error beyond an
//! empty list.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{Driver, Station};

/// Embedded station sample data.
pub const SAMPLE_STATIONS_JSON: &str = include_str!("../data/stations.json");

/// Embedded driver sample data.
pub const SAMPLE_DRIVERS_JSON: &str = include_str!("../data/drivers.json");

/// Errors from the strict loaders.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| DataError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Loads a station book from a JSON file.
pub fn load_stations(path: impl AsRef<Path>) -> Result<Vec<Station>, DataError> {
    load_json(path.as_ref())
}

/// Loads a driver roster from a JSON file.
pub fn load_drivers(path: impl AsRef<Path>) -> Result<Vec<Driver>, DataError> {
    load_json(path.as_ref())
}

/// Loads a station book, degrading to an empty book on failure.
pub fn load_stations_or_empty(path: impl AsRef<Path>) -> Vec<Station> {
    load_stations(path).unwrap_or_else(|e| {
        tracing::warn!("station data unavailable: {e}");
        Vec::new()
    })
}

/// Loads a driver roster, degrading to an empty roster on failure.
pub fn load_drivers_or_empty(path: impl AsRef<Path>) -> Vec<Driver> {
    load_drivers(path).unwrap_or_else(|e| {
        tracing::warn!("driver data unavailable: {e}");
        Vec::new()
    })
}

/// The embedded station sample, decoded.
pub fn sample_stations() -> Vec<Station> {
    serde_json::from_str(SAMPLE_STATIONS_JSON).unwrap_or_else(|e| {
        tracing::warn!("embedded station sample failed to decode: {e}");
        Vec::new()
    })
}

/// The embedded driver sample, decoded.
pub fn sample_drivers() -> Vec<Driver> {
    serde_json::from_str(SAMPLE_DRIVERS_JSON).unwrap_or_else(|e| {
        tracing::warn!("embedded driver sample failed to decode: {e}");
        Vec::new()
    })
}
