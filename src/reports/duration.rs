use crate::filter::FilteredView;
use crate::reports::types::TripDuration;
use crate::reports::utility::{DurationBreakdown, mean};

/// Total and average trip duration, each split into days/hours/minutes/seconds.
pub fn trip_duration(view: &FilteredView) -> TripDuration {
    let durations: Vec<f64> = view.trips().map(|t| t.trip_duration).collect();

    let Some(average) = mean(&durations) else {
        return TripDuration::default();
    };
    let total: f64 = durations.iter().sum();

    TripDuration {
        trips: durations.len(),
        total: Some(DurationBreakdown::from_secs_f64(total)),
        average: Some(DurationBreakdown::from_secs_f64(average)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::read_trips;
    use crate::filter::{FilterState, apply};

    #[test]
    fn test_trip_duration() {
        let csv = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 08:00:00,86400.5,A,B,Subscriber
2017-01-02 08:00:00,3661.7,A,B,Subscriber
";
        let dataset = read_trips("Test", csv.as_bytes()).unwrap();
        let report = trip_duration(&apply(&dataset, &FilterState::default()));

        assert_eq!(report.trips, 2);
        // 90062.2 seconds
        assert_eq!(
            report.total,
            Some(DurationBreakdown {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 2
            })
        );
        // 45031.1 seconds
        assert_eq!(
            report.average,
            Some(DurationBreakdown {
                days: 0,
                hours: 12,
                minutes: 30,
                seconds: 31
            })
        );
    }

    #[test]
    fn test_trip_duration_empty() {
        let csv = "Start Time,Trip Duration,Start Station,End Station,User Type\n";
        let dataset = read_trips("Test", csv.as_bytes()).unwrap();
        let report = trip_duration(&apply(&dataset, &FilterState::default()));

        assert_eq!(report.trips, 0);
        assert_eq!(report.total, None);
        assert_eq!(report.average, None);
    }
}
