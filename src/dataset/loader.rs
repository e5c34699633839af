//! Reads a city's trip log from CSV and builds an enriched [`Dataset`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::{debug, info};

use super::city::city_file_name;
use super::enrich::enrich;
use super::types::{Dataset, RawTrip, Schema};
use crate::error::{ExplorerError, Result};

const REQUIRED_COLUMNS: &[&str] = &[
    "Start Time",
    "Trip Duration",
    "Start Station",
    "End Station",
    "User Type",
];

const GENDER_COLUMN: &str = "Gender";
const BIRTH_YEAR_COLUMN: &str = "Birth Year";

/// Loads `<data_dir>/<city file name>`.
///
/// # Errors
///
/// Returns [`ExplorerError::DataNotFound`] naming `city` (not the file) when
/// the file does not exist, and a parse error for malformed content.
#[tracing::instrument(skip(data_dir), fields(data_dir = %data_dir.display()))]
pub fn load_city(data_dir: &Path, city: &str) -> Result<Dataset> {
    let path = data_dir.join(city_file_name(city));
    debug!(path = %path.display(), "Resolved city data file");

    if !path.is_file() {
        return Err(ExplorerError::DataNotFound {
            city: city.to_string(),
        });
    }

    let file = File::open(&path)?;
    let dataset = read_trips(city, file)?;

    info!(
        city,
        rows = dataset.len(),
        has_gender = dataset.schema.has_gender,
        has_birth_year = dataset.schema.has_birth_year,
        "Dataset loaded"
    );
    Ok(dataset)
}

/// Parses CSV trip data from any reader.
pub fn read_trips<R: Read>(city: &str, reader: R) -> Result<Dataset> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let has_column = |name: &str| headers.iter().any(|h| h == name);

    for &column in REQUIRED_COLUMNS {
        if !has_column(column) {
            return Err(ExplorerError::MissingColumn(column));
        }
    }

    let schema = Schema {
        has_gender: has_column(GENDER_COLUMN),
        has_birth_year: has_column(BIRTH_YEAR_COLUMN),
    };

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let record: RawTrip = result?;
        rows.push(record);
    }

    let trips = enrich(rows)?;
    Ok(Dataset::new(city, schema, trips))
}
