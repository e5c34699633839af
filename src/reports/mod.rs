//! Summary views over the filtered trips.
//!
//! Each view is a pure function of a [`FilteredView`](crate::filter::FilteredView)
//! and returns a serializable report. Empty input yields "no data" values
//! rather than errors.

pub mod duration;
pub mod stations;
pub mod times;
pub mod types;
pub mod users;
pub mod utility;

pub use duration::trip_duration;
pub use stations::popular_stations;
pub use times::popular_times;
pub use types::Report;
pub use users::user_info;
