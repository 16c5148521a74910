//! Fuel delivery dispatching domain core.
//!
//! UI-free state and rules for dispatching fuel deliveries to gas
//! stations: the station book, the driver roster, per-station dispatch
//! entries with four amount/fuel-type slots, amount validation and
//! aggregation, and delivery windows against terminal rack hours.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Station`, `Driver`, `FuelType`,
//!   `DeliveryWindow`, `RackSchedule`
//! - **`dispatch`**: Dispatch entries, the amount validation rules,
//!   and the day's dispatch sheet
//! - **`badge`**: Brand/terminal badge colors and the accent palette
//! - **`data`**: Bundled sample data and JSON loading
//! - **`validation`**: Roster integrity checks
//!
//! # Architecture
//!
//! This crate contains no view code. A consuming UI layer owns one
//! `DispatchEntry` per station row, forwards every text edit through
//! `DispatchEntry::amount_changed`, and re-reads the derived values
//! (`total_amount`, `has_excess_amount`, `is_all_fields_valid`) after
//! each mutation — they are computed on demand and can never go stale.
//! Warnings are returned as signals from the mutating call, not stored
//! as flags, so every qualifying edit re-fires them.

pub mod badge;
pub mod data;
pub mod dispatch;
pub mod models;
pub mod validation;
