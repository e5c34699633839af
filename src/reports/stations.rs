use crate::filter::FilteredView;
use crate::reports::types::{PopularStations, StationPair};
use crate::reports::utility::mode;

/// Most common start station, end station and trip.
///
/// The trip is the mode over (start, end) pairs, which need not combine the
/// two single-station modes.
pub fn popular_stations(view: &FilteredView) -> PopularStations {
    PopularStations {
        start_station: mode(view.trips().map(|t| t.start_station.as_str())).map(str::to_string),
        end_station: mode(view.trips().map(|t| t.end_station.as_str())).map(str::to_string),
        trip: mode(
            view.trips()
                .map(|t| (t.start_station.as_str(), t.end_station.as_str())),
        )
        .map(|(start, end)| StationPair {
            start: start.to_string(),
            end: end.to_string(),
        }),
    }
}
