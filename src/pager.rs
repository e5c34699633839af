//! Sequential paging over the filtered trips.

use tracing::debug;

use crate::dataset::{Dataset, TripRecord};
use crate::error::InvalidSelection;
use crate::filter::{FilterState, apply};

pub const PAGE_SIZE: usize = 5;

/// Cursor over the filtered view. A fresh pager is created for every paging
/// session, so the cursor always starts at row 0.
#[derive(Debug, Default)]
pub struct RowPager {
    cursor: usize,
}

impl RowPager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the next [`PAGE_SIZE`] rows (with their dataset positions) and
    /// advances the cursor. The view is recomputed from `filters` on every
    /// call. Past the end the page is empty.
    pub fn next_page<'a>(
        &mut self,
        dataset: &'a Dataset,
        filters: &FilterState,
    ) -> Vec<(usize, &'a TripRecord)> {
        let view = apply(dataset, filters);
        let page = view.window(self.cursor, PAGE_SIZE).to_vec();

        debug!(cursor = self.cursor, rows = page.len(), "Showing page");
        self.cursor += PAGE_SIZE;
        page
    }
}

/// Parses the answer to "view rows?": `yes` or `no`, case-insensitive.
pub fn parse_yes_no(raw: &str) -> Result<bool, InvalidSelection> {
    match raw.trim().to_lowercase().as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(InvalidSelection::new(raw)),
    }
}

/// Only an explicit `yes` continues paging; anything else stops.
pub fn wants_more(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("yes")
}
