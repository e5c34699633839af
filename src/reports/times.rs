use crate::calendar::{month_name, weekday_name};
use crate::filter::FilteredView;
use crate::reports::types::PopularTimes;
use crate::reports::utility::mode;

/// Most common month, day of week and hour of day among the filtered trips.
pub fn popular_times(view: &FilteredView) -> PopularTimes {
    PopularTimes {
        month: mode(view.trips().map(|t| t.month))
            .and_then(month_name)
            .map(str::to_string),
        weekday: mode(view.trips().map(|t| t.weekday)).map(|w| weekday_name(w).to_string()),
        hour: mode(view.trips().map(|t| t.hour())),
    }
}
