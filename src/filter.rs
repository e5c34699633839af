//! Month/weekday filter state and the filter engine.

use chrono::Weekday;
use tracing::debug;

use crate::calendar::{WEEKDAYS, abbreviate, month_name, weekday_name};
use crate::dataset::{Dataset, TripRecord};
use crate::error::InvalidSelection;

/// Active filters for the session. `None` means "ALL".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterState {
    pub month: Option<u32>,
    pub weekday: Option<Weekday>,
}

impl FilterState {
    pub fn set_month(&mut self, month: Option<u32>) {
        self.month = month;
    }

    pub fn set_weekday(&mut self, weekday: Option<Weekday>) {
        self.weekday = weekday;
    }

    pub fn matches(&self, trip: &TripRecord) -> bool {
        self.weekday.is_none_or(|w| trip.weekday == w) && self.month.is_none_or(|m| trip.month == m)
    }

    /// Menu label for the month filter, e.g. `MAR` or `ALL`.
    pub fn month_label(&self) -> String {
        self.month
            .and_then(month_name)
            .map(abbreviate)
            .unwrap_or_else(|| "ALL".to_string())
    }

    /// Menu label for the weekday filter, e.g. `TUE` or `ALL`.
    pub fn weekday_label(&self) -> String {
        self.weekday
            .map(|w| abbreviate(weekday_name(w)))
            .unwrap_or_else(|| "ALL".to_string())
    }
}

/// The rows of a dataset that pass the current filters, in dataset order.
///
/// Each entry keeps the row's position in the full dataset.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    rows: Vec<(usize, &'a TripRecord)>,
}

impl<'a> FilteredView<'a> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn trips(&self) -> impl Iterator<Item = &'a TripRecord> + '_ {
        self.rows.iter().map(|(_, trip)| *trip)
    }

    /// Rows `start..start + len`, clamped to the view. Empty past the end.
    pub fn window(&self, start: usize, len: usize) -> &[(usize, &'a TripRecord)] {
        let start = start.min(self.rows.len());
        let end = start.saturating_add(len).min(self.rows.len());
        &self.rows[start..end]
    }
}

/// Returns the subset of `dataset` matching `filters`. Not cached; callers
/// re-run it for every report so it always reflects the latest filters.
pub fn apply<'a>(dataset: &'a Dataset, filters: &FilterState) -> FilteredView<'a> {
    let rows: Vec<_> = dataset
        .trips
        .iter()
        .enumerate()
        .filter(|(_, trip)| filters.matches(trip))
        .collect();

    debug!(
        total = dataset.len(),
        matched = rows.len(),
        month = ?filters.month,
        weekday = ?filters.weekday,
        "Applied filters"
    );

    FilteredView { rows }
}

/// Parses a month menu answer: `"0"` clears the filter, `"1"`..`"12"` selects.
pub fn parse_month_choice(raw: &str) -> Result<Option<u32>, InvalidSelection> {
    match raw.trim().parse::<u32>() {
        Ok(0) if raw.trim() == "0" => Ok(None),
        Ok(m @ 1..=12) if raw.trim() == m.to_string() => Ok(Some(m)),
        _ => Err(InvalidSelection::new(raw)),
    }
}

/// Parses a weekday menu answer: `"0"` clears, `"1"`..`"7"` selects Sunday..Saturday.
pub fn parse_weekday_choice(raw: &str) -> Result<Option<Weekday>, InvalidSelection> {
    match raw.trim().parse::<usize>() {
        Ok(0) if raw.trim() == "0" => Ok(None),
        Ok(n @ 1..=7) if raw.trim() == n.to_string() => Ok(Some(WEEKDAYS[n - 1])),
        _ => Err(InvalidSelection::new(raw)),
    }
}
