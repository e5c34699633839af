//! Error types for loading city data and driving the interactive session.

use thiserror::Error;

/// Errors raised while loading a dataset or talking to the console.
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// The CSV file resolved from the selected city does not exist.
    /// Carries the city name as the user selected it, not the file name.
    #[error("Data for {city} could not be found.")]
    DataNotFound { city: String },

    /// A required column is missing from the CSV header.
    #[error("Required column '{0}' is missing")]
    MissingColumn(&'static str),

    /// A start timestamp could not be parsed. Enrichment is all-or-nothing.
    #[error("Row {row}: invalid start timestamp '{value}'")]
    InvalidTimestamp { row: usize, value: String },

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to encode report as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Standard input reached end-of-file while waiting for an answer.
    #[error("Input closed")]
    InputClosed,
}

/// Type alias for Results using ExplorerError
pub type Result<T> = std::result::Result<T, ExplorerError>;

/// A user answer outside the set of options offered by a prompt.
///
/// Always recoverable: the caller re-displays the prompt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid selection: '{0}'")]
pub struct InvalidSelection(pub String);

impl InvalidSelection {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_string())
    }
}
