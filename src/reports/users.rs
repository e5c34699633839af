use crate::dataset::Schema;
use crate::filter::FilteredView;
use crate::reports::types::{BirthYears, UserInfo, ValueCount};
use crate::reports::utility::{mode, value_counts};

/// User type counts, plus gender counts and birth year extremes when the
/// dataset carries those columns. Blank cells are not counted.
pub fn user_info(view: &FilteredView, schema: &Schema) -> UserInfo {
    let user_types = counts(view.trips().filter_map(|t| t.user_type.as_deref()));

    let genders = schema
        .has_gender
        .then(|| counts(view.trips().filter_map(|t| t.gender.as_deref())));

    let birth_years = schema.has_birth_year.then(|| {
        let years: Vec<i32> = view.trips().filter_map(|t| t.birth_year).collect();
        BirthYears {
            earliest: years.iter().min().copied(),
            most_recent: years.iter().max().copied(),
            most_common: mode(years.iter().copied()),
        }
    });

    UserInfo {
        user_types,
        genders,
        birth_years,
    }
}

fn counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<ValueCount> {
    value_counts(values)
        .into_iter()
        .map(|(label, count)| ValueCount {
            label: label.to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::read_trips;
    use crate::filter::{FilterState, apply};

    const WITH_DEMOGRAPHICS: &str = "\
Start Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-01-02 08:00:00,60,A,B,Subscriber,Male,1985.0
2017-01-02 08:00:00,60,A,B,Customer,,
2017-01-02 08:00:00,60,A,B,Subscriber,Female,1990.0
2017-01-02 08:00:00,60,A,B,Subscriber,Male,1990.0
2017-01-02 08:00:00,60,A,B,,Female,1972.0
";

    #[test]
    fn test_user_info_with_optional_columns() {
        let dataset = read_trips("Chicago", WITH_DEMOGRAPHICS.as_bytes()).unwrap();
        let report = user_info(&apply(&dataset, &FilterState::default()), &dataset.schema);

        assert_eq!(
            report.user_types,
            vec![
                ValueCount {
                    label: "Subscriber".to_string(),
                    count: 3
                },
                ValueCount {
                    label: "Customer".to_string(),
                    count: 1
                },
            ]
        );

        let genders = report.genders.unwrap();
        assert_eq!(genders.len(), 2);
        assert_eq!(genders[0].label, "Male");
        assert_eq!(genders[0].count, 2);

        assert_eq!(
            report.birth_years,
            Some(BirthYears {
                earliest: Some(1972),
                most_recent: Some(1990),
                most_common: Some(1990),
            })
        );
    }

    #[test]
    fn test_user_info_skips_absent_columns() {
        let csv = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 08:00:00,60,A,B,Subscriber
";
        let dataset = read_trips("Washington", csv.as_bytes()).unwrap();
        let report = user_info(&apply(&dataset, &FilterState::default()), &dataset.schema);

        assert_eq!(report.user_types.len(), 1);
        assert_eq!(report.genders, None);
        assert_eq!(report.birth_years, None);
    }

    #[test]
    fn test_user_info_empty_view() {
        let dataset = read_trips("Chicago", WITH_DEMOGRAPHICS.as_bytes()).unwrap();
        let filters = FilterState {
            month: Some(7),
            weekday: None,
        };
        let report = user_info(&apply(&dataset, &filters), &dataset.schema);

        assert!(report.user_types.is_empty());
        assert_eq!(report.genders, Some(vec![]));
        assert_eq!(report.birth_years, Some(BirthYears::default()));
    }
}
