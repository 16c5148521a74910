//! Delivery windows and rack schedules.
//!
//! Times are minutes from the start of the dispatch day (00:00), so
//! 240 is 4:00 AM and 1320 is 10:00 PM.
//!
//! # Precedence
//! Closures override open windows. A rack is open at a given minute iff
//! the minute falls in at least one open window (or no windows are
//! defined) and does NOT fall in any closure.

use serde::{Deserialize, Serialize};

/// A delivery time interval [start, end).
///
/// Half-open: includes the start minute, excludes the end minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryWindow {
    /// Window start (minutes from day start, inclusive).
    pub start_min: u32,
    /// Window end (minutes from day start, exclusive).
    pub end_min: u32,
}

impl DeliveryWindow {
    /// Creates a delivery window.
    pub fn new(start_min: u32, end_min: u32) -> Self {
        Self { start_min, end_min }
    }

    /// Window length in minutes.
    #[inline]
    pub fn duration_min(&self) -> u32 {
        self.end_min.saturating_sub(self.start_min)
    }

    /// Whether a minute falls within this window.
    #[inline]
    pub fn contains(&self, minute: u32) -> bool {
        minute >= self.start_min && minute < self.end_min
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_min < other.end_min && other.start_min < self.end_min
    }
}

/// Loading-rack hours for one terminal.
///
/// Combines open windows with closure periods (maintenance, allocation
/// outages). No open windows means the rack runs around the clock,
/// subject to closures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RackSchedule {
    /// Terminal code this schedule belongs to.
    pub terminal: String,
    /// Periods when the rack loads trucks. Empty = always open.
    pub open_windows: Vec<DeliveryWindow>,
    /// Periods when the rack is down (overrides open windows).
    pub closures: Vec<DeliveryWindow>,
}

impl RackSchedule {
    /// Creates a schedule with no constraints (always open).
    pub fn new(terminal: impl Into<String>) -> Self {
        Self {
            terminal: terminal.into(),
            open_windows: Vec::new(),
            closures: Vec::new(),
        }
    }

    /// Adds an open window.
    pub fn with_open(mut self, start_min: u32, end_min: u32) -> Self {
        self.open_windows.push(DeliveryWindow::new(start_min, end_min));
        self
    }

    /// Adds a closure period.
    pub fn with_closure(mut self, start_min: u32, end_min: u32) -> Self {
        self.closures.push(DeliveryWindow::new(start_min, end_min));
        self
    }

    /// Whether the rack is loading at the given minute.
    pub fn is_open_at(&self, minute: u32) -> bool {
        if self.closures.iter().any(|w| w.contains(minute)) {
            return false;
        }
        if self.open_windows.is_empty() {
            return true;
        }
        self.open_windows.iter().any(|w| w.contains(minute))
    }

    /// Earliest open minute at or after `from_min`.
    ///
    /// Returns `from_min` itself when the rack is already open, the next
    /// open edge otherwise, or `None` when nothing opens later in the day.
    pub fn next_open_after(&self, from_min: u32) -> Option<u32> {
        if self.is_open_at(from_min) {
            return Some(from_min);
        }

        // Candidate edges: starts of open windows still ahead, and ends
        // of closures (the rack may reopen the minute a closure lifts).
        let mut candidates: Vec<u32> = self
            .open_windows
            .iter()
            .filter(|w| w.end_min > from_min)
            .map(|w| w.start_min.max(from_min))
            .collect();
        candidates.extend(
            self.closures
                .iter()
                .filter(|w| w.contains(from_min) || w.start_min >= from_min)
                .map(|w| w.end_min),
        );
        candidates.sort_unstable();

        candidates.into_iter().find(|&m| self.is_open_at(m))
    }

    /// Whether a delivery window fits entirely inside open rack time.
    pub fn can_load_during(&self, window: &DeliveryWindow) -> bool {
        (window.start_min..window.end_min).all(|m| self.is_open_at(m))
    }
}
