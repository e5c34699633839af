//! Report types produced by the aggregation views.
//!
//! `None` and empty lists mean "no data available" for that statistic.

use serde::Serialize;

use super::utility::DurationBreakdown;

/// Most frequent month, weekday and start hour.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PopularTimes {
    pub month: Option<String>,
    pub weekday: Option<String>,
    pub hour: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StationPair {
    pub start: String,
    pub end: String,
}

/// Most frequent start station, end station and start/end combination.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PopularStations {
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub trip: Option<StationPair>,
}

/// Total and mean trip duration.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TripDuration {
    pub trips: usize,
    pub total: Option<DurationBreakdown>,
    pub average: Option<DurationBreakdown>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BirthYears {
    pub earliest: Option<i32>,
    pub most_recent: Option<i32>,
    pub most_common: Option<i32>,
}

/// User type, gender and birth year breakdown.
///
/// `genders` and `birth_years` are `None` when the city's file has no such
/// column; they are then left out of the report entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserInfo {
    pub user_types: Vec<ValueCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genders: Option<Vec<ValueCount>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_years: Option<BirthYears>,
}

/// Any of the four summary views.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "report", rename_all = "snake_case")]
pub enum Report {
    PopularTimes(PopularTimes),
    PopularStations(PopularStations),
    TripDuration(TripDuration),
    UserInfo(UserInfo),
}
