//! Per-station dispatch entry and the amount validation rules.

use crate::models::{DeliveryWindow, FuelType, Station};

use super::{
    is_valid_amount, DEFAULT_SLOT_FUELS, EXCESS_TOTAL_THRESHOLD, LOW_UNLEADED_MAX, SLOT_COUNT,
};

/// Signals raised by an amount edit.
///
/// Signals are one-shot: they describe this edit only and carry no
/// "already shown" memory, so every qualifying edit re-fires them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AmountSignals {
    /// The edited slot is unleaded and the entered amount is low but
    /// nonzero — the station may need gas before the next delivery.
    pub low_amount_warning: bool,
}

/// One station row on the dispatch sheet.
///
/// Owns the four amount/fuel-type slots, the selected driver, free-form
/// notes, and an optional delivery window. Created per dispatch-entry
/// session and discarded when the row is dismissed; nothing persists.
#[derive(Debug, Clone)]
pub struct DispatchEntry {
    /// The station this entry dispatches to.
    pub station: Station,
    amounts: [String; SLOT_COUNT],
    fuel_types: [FuelType; SLOT_COUNT],
    /// Driver the load is assigned to, if one has been picked.
    pub selected_driver: Option<String>,
    /// Free-form notes for this delivery.
    pub notes: String,
    /// Requested delivery window, if scheduled.
    pub window: Option<DeliveryWindow>,
}

impl DispatchEntry {
    /// Creates an entry for a station with the default slot layout.
    pub fn new(station: Station) -> Self {
        Self {
            station,
            amounts: Default::default(),
            fuel_types: DEFAULT_SLOT_FUELS,
            selected_driver: None,
            notes: String::new(),
            window: None,
        }
    }

    /// Overrides the per-slot fuel layout.
    pub fn with_fuel_types(mut self, fuel_types: [FuelType; SLOT_COUNT]) -> Self {
        self.fuel_types = fuel_types;
        self
    }

    /// Sets the requested delivery window.
    pub fn with_window(mut self, window: DeliveryWindow) -> Self {
        self.window = Some(window);
        self
    }

    /// Current slot values.
    pub fn amounts(&self) -> &[String] {
        &self.amounts
    }

    /// Value of one slot.
    ///
    /// # Panics
    /// Panics if `slot >= SLOT_COUNT`.
    pub fn amount(&self, slot: usize) -> &str {
        &self.amounts[slot]
    }

    /// Fuel type bound to one slot.
    ///
    /// # Panics
    /// Panics if `slot >= SLOT_COUNT`.
    pub fn fuel_type(&self, slot: usize) -> FuelType {
        self.fuel_types[slot]
    }

    /// Per-slot fuel layout.
    pub fn fuel_types(&self) -> &[FuelType] {
        &self.fuel_types
    }

    /// Applies a text edit to one slot.
    ///
    /// Values shorter than four characters are stored as-is so typing is
    /// never disrupted. Once the value reaches four characters it must
    /// be `"0"` or exactly four digits; anything else clears the edited
    /// slot back to empty — rejected, not truncated, and never reported
    /// as an error.
    ///
    /// A valid four-digit amount on an unleaded slot that parses to
    /// `1..=3500` raises the low-amount warning signal.
    ///
    /// # Panics
    /// Panics if `slot >= SLOT_COUNT`.
    pub fn amount_changed(&mut self, slot: usize, new_value: impl Into<String>) -> AmountSignals {
        let value = new_value.into();
        let mut signals = AmountSignals::default();

        if value.chars().count() < 4 {
            self.amounts[slot] = value;
            return signals;
        }

        if is_valid_amount(&value) {
            if self.fuel_types[slot] == FuelType::Unl {
                if let Ok(gallons) = value.parse::<u32>() {
                    if gallons > 0 && gallons <= LOW_UNLEADED_MAX {
                        signals.low_amount_warning = true;
                    }
                }
            }
            self.amounts[slot] = value;
        } else {
            // Clear the edited slot, not the first slot holding an equal
            // value; two slots may hold the same string.
            self.amounts[slot].clear();
        }

        signals
    }

    /// Sum of all slots that parse as whole gallons.
    ///
    /// Empty and unparseable slots contribute 0.
    pub fn total_amount(&self) -> u32 {
        self.amounts
            .iter()
            .filter_map(|a| a.parse::<u32>().ok())
            .sum()
    }

    /// Whether the aggregate load exceeds a single trailer.
    pub fn has_excess_amount(&self) -> bool {
        self.total_amount() > EXCESS_TOTAL_THRESHOLD
    }

    /// Whether every slot holds a complete, valid amount.
    pub fn is_all_fields_valid(&self) -> bool {
        self.amounts.iter().all(|a| is_valid_amount(a))
    }

    /// Selects a driver, or deselects when the same driver is picked again.
    pub fn toggle_driver(&mut self, driver: &str) {
        if self.selected_driver.as_deref() == Some(driver) {
            self.selected_driver = None;
        } else {
            self.selected_driver = Some(driver.to_string());
        }
    }

    /// Whether the entry is ready to dispatch: all amounts complete and
    /// a driver assigned.
    pub fn is_ready(&self) -> bool {
        self.is_all_fields_valid() && self.selected_driver.is_some()
    }
}
