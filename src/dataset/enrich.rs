//! Derivation of the month and weekday columns from each trip's start time.

use chrono::{Datelike, NaiveDateTime};
use tracing::debug;

use super::types::{RawTrip, TripRecord};
use crate::error::{ExplorerError, Result};

/// Accepted start timestamp layouts, tried in order.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Enriches every row or none of them: the first unparseable start time
/// aborts the whole load.
pub fn enrich(rows: Vec<RawTrip>) -> Result<Vec<TripRecord>> {
    let mut trips = Vec::with_capacity(rows.len());

    for (row, raw) in rows.into_iter().enumerate() {
        let start_time =
            parse_timestamp(&raw.start_time).ok_or_else(|| ExplorerError::InvalidTimestamp {
                row,
                value: raw.start_time.clone(),
            })?;

        trips.push(TripRecord {
            month: start_time.month(),
            weekday: start_time.weekday(),
            start_time,
            end_time: raw.end_time,
            trip_duration: raw.trip_duration,
            start_station: raw.start_station,
            end_station: raw.end_station,
            user_type: non_blank(raw.user_type),
            gender: non_blank(raw.gender),
            birth_year: raw.birth_year.filter(|y| y.is_finite()).map(|y| y as i32),
        });
    }

    debug!(rows = trips.len(), "Derived month and weekday columns");
    Ok(trips)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
