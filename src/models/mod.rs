//! Fuel dispatch domain models.
//!
//! Core data types for the dispatching workflow: the stations being
//! supplied, the drivers hauling the loads, the fuel products on a
//! truck, and the delivery windows a load must land in.
//!
//! | Type | Role |
//! |------|------|
//! | `Station` | A gas station in the station book |
//! | `Driver` | A roster entry with terminal card records |
//! | `FuelType` | One of the five product codes on a dispatch row |
//! | `DeliveryWindow` | A half-open time interval within the dispatch day |
//! | `RackSchedule` | Loading-rack hours and closures for one terminal |

mod driver;
mod fuel;
mod station;
mod window;

pub use driver::{abbreviate_location, Driver};
pub use fuel::{FuelType, UnknownFuelType};
pub use station::{filter_stations, Station};
pub use window::{DeliveryWindow, RackSchedule};
