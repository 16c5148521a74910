//! Roster integrity checks.
//!
//! Structural checks over a loaded station book and driver roster
//! before a dispatch day starts. Detects:
//! - Duplicate driver ids
//! - Drivers with blank names
//! - Stations with no address
//! - Duplicate station entries (same name and address)
//!
//! Unknown brand or terminal codes are deliberately NOT errors — they
//! degrade to the fallback badge at display time.

use std::collections::HashSet;

use crate::models::{Driver, Station};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two drivers share the same roster id.
    DuplicateDriverId,
    /// A driver record has an empty name.
    BlankDriverName,
    /// A station record has an empty address.
    MissingAddress,
    /// Two station records share the same name and address.
    DuplicateStation,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a station book and driver roster.
///
/// Collects every problem in one pass.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(stations: &[Station], drivers: &[Driver]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut driver_ids = HashSet::new();
    for d in drivers {
        if !driver_ids.insert(d.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateDriverId,
                format!("Duplicate driver id: {}", d.id),
            ));
        }
        if d.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::BlankDriverName,
                format!("Driver '{}' has no name", d.id),
            ));
        }
    }

    let mut station_keys = HashSet::new();
    for s in stations {
        if s.address.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingAddress,
                format!("Station '{}' has no address", s.name),
            ));
        }
        if !station_keys.insert(s.key()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateStation,
                format!("Duplicate station entry: {}", s.key()),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
