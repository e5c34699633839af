//! Trip data: loading, enrichment and the in-memory dataset.
//!
//! ```text
//!  <city>.csv ──► loader ──► enrich ──► Dataset
//! ```

pub mod city;
pub mod enrich;
pub mod loader;
pub mod types;

pub use city::{City, city_file_name};
pub use loader::{load_city, read_trips};
pub use types::{Dataset, Schema, TripRecord};
