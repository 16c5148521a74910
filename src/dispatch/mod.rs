//! Dispatch entries and amount validation.
//!
//! A dispatch entry is the per-station unit of work: four amount slots
//! positionally paired with fuel types, a selected driver, notes, and an
//! optional delivery window. Edits flow through
//! [`DispatchEntry::amount_changed`]; totals and validity are derived on
//! demand and never cached.
//!
//! # Usage
//!
//! ```
//! use fuel_dispatch::dispatch::DispatchEntry;
//! use fuel_dispatch::models::Station;
//!
//! let mut entry = DispatchEntry::new(Station::new("Quick Stop #4", "1207 Augusta Rd"));
//!
//! // Slot 0 defaults to UNL; 3000 gallons is low enough to warn.
//! let signals = entry.amount_changed(0, "3000");
//! assert!(signals.low_amount_warning);
//! assert_eq!(entry.total_amount(), 3000);
//! assert!(!entry.has_excess_amount());
//! ```

mod entry;
mod sheet;

pub use entry::{AmountSignals, DispatchEntry};
pub use sheet::{DispatchSheet, DEFAULT_DRIVER_BOARD};

use crate::models::FuelType;

/// Number of amount/fuel-type slots on a dispatch row.
pub const SLOT_COUNT: usize = 4;

/// Aggregate gallons across all slots above which a load exceeds what a
/// single trailer hauls.
pub const EXCESS_TOTAL_THRESHOLD: u32 = 8500;

/// Largest unleaded drop that still warns the dispatcher the station may
/// run short before the next delivery.
pub const LOW_UNLEADED_MAX: u32 = 3500;

/// Slot fuel layout used when a station has no configuration of its own.
pub const DEFAULT_SLOT_FUELS: [FuelType; SLOT_COUNT] = [
    FuelType::Unl,
    FuelType::Prem,
    FuelType::Ulsd,
    FuelType::Hsd,
];

/// Whether a slot value is a complete, valid amount.
///
/// `"0"` means "no delivery for this fuel type" and is the single
/// length-exempt value; every other valid amount is exactly four ASCII
/// digits.
pub fn is_valid_amount(value: &str) -> bool {
    value == "0" || (value.chars().count() == 4 && value.chars().all(|c| c.is_ascii_digit()))
}
