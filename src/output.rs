//! Console rendering for reports and trip rows.
//!
//! Supports plain text and pretty-printed JSON.

use std::io::Write;

use tracing::debug;

use crate::calendar::{month_name, weekday_name};
use crate::dataset::{Schema, TripRecord};
use crate::error::Result;
use crate::reports::Report;
use crate::reports::types::{
    PopularStations, PopularTimes, TripDuration, UserInfo, ValueCount,
};
use crate::reports::utility::DurationBreakdown;

pub const NO_DATA: &str = "No data available";

/// How reports are written to the console.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn write_report<W: Write>(out: &mut W, report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, report),
        OutputFormat::Json => write_json(out, report),
    }
}

/// Writes a report as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
    Ok(())
}

pub fn write_text<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    debug!("{:?}", report);
    match report {
        Report::PopularTimes(r) => write_popular_times(out, r),
        Report::PopularStations(r) => write_popular_stations(out, r),
        Report::TripDuration(r) => write_trip_duration(out, r),
        Report::UserInfo(r) => write_user_info(out, r),
    }
}

fn or_no_data<T: ToString>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| NO_DATA.to_string())
}

/// e.g. `1 days, 1 hours, 1 minutes, 1 seconds`
pub fn format_breakdown(b: &DurationBreakdown) -> String {
    format!(
        "{} days, {} hours, {} minutes, {} seconds",
        b.days, b.hours, b.minutes, b.seconds
    )
}

fn write_popular_times<W: Write>(out: &mut W, r: &PopularTimes) -> Result<()> {
    writeln!(out, "\n#1 Popular times of travel:")?;
    writeln!(out, "Most common month: {}", or_no_data(r.month.as_deref()))?;
    writeln!(out, "Most common day of week: {}", or_no_data(r.weekday.as_deref()))?;
    writeln!(out, "Most common hour of day: {}", or_no_data(r.hour))?;
    Ok(())
}

fn write_popular_stations<W: Write>(out: &mut W, r: &PopularStations) -> Result<()> {
    writeln!(out, "\n#2 Popular stations and trip:")?;
    writeln!(out, "Most common start station: {}", or_no_data(r.start_station.as_deref()))?;
    writeln!(out, "Most common end station: {}", or_no_data(r.end_station.as_deref()))?;
    let trip = r
        .trip
        .as_ref()
        .map(|pair| format!("{} to {}", pair.start, pair.end));
    writeln!(out, "Most common trip from start to end: {}", or_no_data(trip))?;
    Ok(())
}

fn write_trip_duration<W: Write>(out: &mut W, r: &TripDuration) -> Result<()> {
    writeln!(out, "\n#3 Trip duration:")?;
    writeln!(out, "Total travel time: {}", or_no_data(r.total.as_ref().map(format_breakdown)))?;
    writeln!(
        out,
        "Average travel time: {}",
        or_no_data(r.average.as_ref().map(format_breakdown))
    )?;
    Ok(())
}

fn write_counts<W: Write>(out: &mut W, counts: &[ValueCount]) -> Result<()> {
    if counts.is_empty() {
        writeln!(out, "{NO_DATA}")?;
        return Ok(());
    }
    let width = counts.iter().map(|c| c.label.len()).max().unwrap_or(0);
    for c in counts {
        writeln!(out, "{:<width$}    {}", c.label, c.count)?;
    }
    Ok(())
}

fn write_user_info<W: Write>(out: &mut W, r: &UserInfo) -> Result<()> {
    writeln!(out, "\n#4 User info:")?;
    writeln!(out, "Counts of each user type:")?;
    write_counts(out, &r.user_types)?;

    if let Some(genders) = &r.genders {
        writeln!(out, "\nCounts of each gender:")?;
        write_counts(out, genders)?;
    }

    if let Some(years) = &r.birth_years {
        writeln!(out, "\nEarliest year of birth: {}", or_no_data(years.earliest))?;
        writeln!(out, "Most recent year of birth: {}", or_no_data(years.most_recent))?;
        writeln!(out, "Most common year of birth: {}", or_no_data(years.most_common))?;
    }
    Ok(())
}

/// Writes one page of trips, one line per trip, prefixed by its dataset position.
pub fn write_rows<W: Write>(
    out: &mut W,
    rows: &[(usize, &TripRecord)],
    schema: &Schema,
) -> Result<()> {
    if rows.is_empty() {
        writeln!(out, "No more trip data to display.")?;
        return Ok(());
    }

    for (position, trip) in rows {
        let mut line = format!(
            "[{}] {} | {} -> {} | {}s | {}",
            position,
            trip.start_time.format("%Y-%m-%d %H:%M:%S"),
            trip.start_station,
            trip.end_station,
            trip.trip_duration,
            trip.user_type.as_deref().unwrap_or("-"),
        );
        if schema.has_gender {
            line.push_str(&format!(" | {}", trip.gender.as_deref().unwrap_or("-")));
        }
        if schema.has_birth_year {
            let year = trip
                .birth_year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "-".to_string());
            line.push_str(&format!(" | {}", year));
        }
        line.push_str(&format!(
            " | {} {}",
            month_name(trip.month).unwrap_or("-"),
            weekday_name(trip.weekday)
        ));
        writeln!(out, "{line}")?;
    }
    Ok(())
}
