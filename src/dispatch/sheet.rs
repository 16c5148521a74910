//! The day's dispatch sheet.

use std::collections::HashSet;

use crate::models::Station;

use super::DispatchEntry;

/// Quick-select driver names shown on a dispatch row.
pub const DEFAULT_DRIVER_BOARD: [&str; 14] = [
    "ADAM", "ANTHONY", "CLARENCE", "DANIEL", "DEWAYNE", "JERRY", "MARK", "MICHAEL", "TIM",
    "TOBIN", "ALCO", "CLARK", "PETE", "SOMCO",
];

/// Today's dispatch: one entry per station being supplied, the driver
/// board, and which stations have already had their load sent out.
#[derive(Debug, Clone)]
pub struct DispatchSheet {
    entries: Vec<DispatchEntry>,
    dispatched: HashSet<String>,
    driver_board: Vec<String>,
}

impl Default for DispatchSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchSheet {
    /// Creates an empty sheet with the default driver board.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            dispatched: HashSet::new(),
            driver_board: DEFAULT_DRIVER_BOARD.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Creates a sheet with one entry per station.
    pub fn from_stations(stations: impl IntoIterator<Item = Station>) -> Self {
        let mut sheet = Self::new();
        for station in stations {
            sheet.add_station(station);
        }
        sheet
    }

    /// Replaces the driver board.
    pub fn with_driver_board(mut self, drivers: Vec<String>) -> Self {
        self.driver_board = drivers;
        self
    }

    /// Adds an entry for a station and returns it for editing.
    pub fn add_station(&mut self, station: Station) -> &mut DispatchEntry {
        self.entries.push(DispatchEntry::new(station));
        let last = self.entries.len() - 1;
        &mut self.entries[last]
    }

    /// The driver board names.
    pub fn driver_board(&self) -> &[String] {
        &self.driver_board
    }

    /// All entries, in station order.
    pub fn entries(&self) -> &[DispatchEntry] {
        &self.entries
    }

    /// Mutable access to one entry.
    pub fn entry_mut(&mut self, index: usize) -> Option<&mut DispatchEntry> {
        self.entries.get_mut(index)
    }

    /// Number of entries on the sheet.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the sheet has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a station's load has been marked as sent.
    pub fn is_dispatched(&self, station_key: &str) -> bool {
        self.dispatched.contains(station_key)
    }

    /// Flips a station between dispatched and pending.
    ///
    /// Returns the new state: `true` when the station is now dispatched.
    pub fn toggle_dispatched(&mut self, station_key: &str) -> bool {
        if self.dispatched.remove(station_key) {
            false
        } else {
            self.dispatched.insert(station_key.to_string());
            true
        }
    }

    /// Number of entries ready to go out (amounts complete, driver set).
    pub fn ready_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_ready()).count()
    }

    /// Indices of entries whose aggregate load exceeds one trailer.
    pub fn excess_entries(&self) -> Vec<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.has_excess_amount())
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_stations() -> Vec<Station> {
        vec![
            Station::new("Quick Stop #4", "1207 Augusta Rd").with_brand("SHELL"),
            Station::new("Palmetto Express", "88 Rivers Ave").with_brand("BP"),
        ]
    }

    #[test]
    fn test_sheet_from_stations() {
        let sheet = DispatchSheet::from_stations(sample_stations());
        assert_eq!(sheet.len(), 2);
        assert!(!sheet.is_empty());
        assert_eq!(sheet.entries()[0].station.name, "Quick Stop #4");
    }

    #[test]
    fn test_default_driver_board() {
        let sheet = DispatchSheet::new();
        assert_eq!(sheet.driver_board().len(), 14);
        assert!(sheet.driver_board().iter().any(|d| d == "DEWAYNE"));
    }

    #[test]
    fn test_custom_driver_board() {
        let sheet =
            DispatchSheet::new().with_driver_board(vec!["MARK".into(), "TIM".into()]);
        assert_eq!(sheet.driver_board(), ["MARK", "TIM"]);
    }

    #[test]
    fn test_dispatched_toggle_round_trip() {
        let mut sheet = DispatchSheet::from_stations(sample_stations());
        let key = sheet.entries()[0].station.key();

        assert!(!sheet.is_dispatched(&key));
        assert!(sheet.toggle_dispatched(&key));
        assert!(sheet.is_dispatched(&key));
        assert!(!sheet.toggle_dispatched(&key));
        assert!(!sheet.is_dispatched(&key));
    }

    #[test]
    fn test_ready_count() {
        let mut sheet = DispatchSheet::from_stations(sample_stations());
        assert_eq!(sheet.ready_count(), 0);

        let entry = sheet.entry_mut(0).unwrap();
        entry.amount_changed(0, "4000");
        entry.amount_changed(1, "0");
        entry.amount_changed(2, "0");
        entry.amount_changed(3, "0");
        entry.toggle_driver("TIM");
        assert_eq!(sheet.ready_count(), 1);
    }

    #[test]
    fn test_excess_entries() {
        let mut sheet = DispatchSheet::from_stations(sample_stations());
        let entry = sheet.entry_mut(1).unwrap();
        for slot in 0..4 {
            entry.amount_changed(slot, "3000");
        }
        assert_eq!(sheet.excess_entries(), vec![1]);
    }

    #[test]
    fn test_entry_mut_out_of_range() {
        let mut sheet = DispatchSheet::new();
        assert!(sheet.entry_mut(0).is_none());
    }
}
