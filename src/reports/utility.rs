use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

/// Most frequent value, or `None` for empty input.
///
/// Among values with the same highest count, the one encountered first wins,
/// so the result does not depend on hash order.
pub fn mode<I, K>(values: I) -> Option<K>
where
    I: IntoIterator<Item = K>,
    K: Eq + Hash + Clone,
{
    value_counts(values).into_iter().next().map(|(value, _)| value)
}

/// Counts occurrences of each value, sorted by descending count. Ties keep
/// first-encounter order.
pub fn value_counts<I, K>(values: I) -> Vec<(K, usize)>
where
    I: IntoIterator<Item = K>,
    K: Eq + Hash + Clone,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for value in values {
        match index.get(&value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    // stable sort preserves encounter order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Computes the arithmetic mean of a slice of values. Returns `None` for empty input.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// A span of seconds split into whole days, hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DurationBreakdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationBreakdown {
    pub fn from_secs(total: u64) -> Self {
        let (days, rem) = (total / 86_400, total % 86_400);
        let (hours, rem) = (rem / 3_600, rem % 3_600);
        let (minutes, seconds) = (rem / 60, rem % 60);
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Fractional seconds are truncated. Negative or non-finite input counts as zero.
    pub fn from_secs_f64(total: f64) -> Self {
        if total.is_finite() && total > 0.0 {
            Self::from_secs(total.trunc() as u64)
        } else {
            Self::from_secs(0)
        }
    }

    pub fn total_secs(&self) -> u64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_empty() {
        assert_eq!(mode(Vec::<u32>::new()), None);
    }

    #[test]
    fn test_mode_clear_plurality_ignores_order() {
        assert_eq!(mode(vec![1, 2, 2, 3, 2]), Some(2));
        assert_eq!(mode(vec![2, 3, 2, 1, 2]), Some(2));
    }

    #[test]
    fn test_mode_tie_prefers_first_encountered() {
        assert_eq!(mode(vec!["b", "a", "a", "b"]), Some("b"));
        assert_eq!(mode(vec!["a", "b", "b", "a"]), Some("a"));
        for _ in 0..10 {
            assert_eq!(mode(vec![9, 4, 4, 9, 7]), Some(9));
        }
    }

    #[test]
    fn test_value_counts_order() {
        let counts = value_counts(vec!["Customer", "Subscriber", "Subscriber", "Dependent"]);
        assert_eq!(
            counts,
            vec![("Subscriber", 2), ("Customer", 1), ("Dependent", 1)]
        );
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
    }

    #[test]
    fn test_breakdown_known_value() {
        let b = DurationBreakdown::from_secs(90_061);
        assert_eq!(
            b,
            DurationBreakdown {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
    }

    #[test]
    fn test_breakdown_reassembles() {
        for total in [0, 59, 60, 3_599, 3_600, 86_399, 86_400, 1_234_567, 98_765_432] {
            let b = DurationBreakdown::from_secs(total);
            assert_eq!(b.total_secs(), total);
            assert!(b.hours < 24);
            assert!(b.minutes < 60);
            assert!(b.seconds < 60);
        }
    }

    #[test]
    fn test_breakdown_truncates_fraction() {
        assert_eq!(DurationBreakdown::from_secs_f64(61.99).seconds, 1);
        assert_eq!(DurationBreakdown::from_secs_f64(-5.0).total_secs(), 0);
        assert_eq!(DurationBreakdown::from_secs_f64(f64::NAN).total_secs(), 0);
    }
}
