//! Data types for a loaded city dataset.

use chrono::{NaiveDateTime, Timelike, Weekday};
use serde::Deserialize;

/// A single row deserialized from a city CSV file, before enrichment.
///
/// `Gender` and `Birth Year` only exist in some cities' files; blank cells
/// deserialize to `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTrip {
    #[serde(rename = "Start Time")]
    pub(crate) start_time: String,
    #[serde(rename = "End Time", default)]
    pub(crate) end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    pub(crate) trip_duration: f64,
    #[serde(rename = "Start Station")]
    pub(crate) start_station: String,
    #[serde(rename = "End Station")]
    pub(crate) end_station: String,
    #[serde(rename = "User Type", default)]
    pub(crate) user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub(crate) gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub(crate) birth_year: Option<f64>,
}

/// An enriched trip. Immutable once the dataset is built.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: Option<String>,
    /// Trip length in seconds; fractional in some cities.
    pub trip_duration: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    // derived from start_time
    pub month: u32,
    pub weekday: Weekday,
}

impl TripRecord {
    pub fn hour(&self) -> u32 {
        self.start_time.hour()
    }
}

/// Which optional columns the source file carried. Resolved once at load time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Schema {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

/// All trips for one city, in file order.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub city: String,
    pub schema: Schema,
    pub trips: Vec<TripRecord>,
}

impl Dataset {
    pub fn new(city: impl Into<String>, schema: Schema, trips: Vec<TripRecord>) -> Self {
        Self {
            city: city.into(),
            schema,
            trips,
        }
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}
