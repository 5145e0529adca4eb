use std::collections::BTreeSet;

use super::model::{GameDataset, GameRecord};

// ---------------------------------------------------------------------------
// Constraint set: what the user has selected in the side panel
// ---------------------------------------------------------------------------

/// The four conjunctive predicates a record must satisfy to be shown.
///
/// There is no "unbounded" form: leaving a bound alone means setting it to the
/// dataset's observed extent, and leaving ratings alone means selecting every
/// observed rating. See [`Constraints::observed`].
#[derive(Debug, Clone, PartialEq)]
pub struct Constraints {
    pub score_min: f64,
    pub score_max: f64,
    pub year_min: i32,
    pub year_max: i32,
    /// Exact, case-sensitive labels. A record without a rating never matches.
    pub ratings_allowed: BTreeSet<String>,
}

impl Constraints {
    /// Constraints that admit every record of `dataset` that has a rating.
    pub fn observed(dataset: &GameDataset) -> Self {
        let (score_min, score_max) = dataset.score_range().unwrap_or((0.0, 0.0));
        let (year_min, year_max) = dataset.year_range().unwrap_or((0, 0));
        Constraints {
            score_min,
            score_max,
            year_min,
            year_max,
            ratings_allowed: dataset.ratings.clone(),
        }
    }

    /// Starting selection for a freshly loaded dataset.
    ///
    /// The score range is taken as given (clamped to 0–100). The year range is
    /// clamped to the observed years and falls back to the full observed range
    /// when the two do not overlap. All observed ratings are selected.
    pub fn initial(dataset: &GameDataset, score_range: (f64, f64), year_range: (i32, i32)) -> Self {
        let observed = Self::observed(dataset);

        let year_min = year_range.0.max(observed.year_min);
        let year_max = year_range.1.min(observed.year_max);
        let (year_min, year_max) = if year_min <= year_max {
            (year_min, year_max)
        } else {
            (observed.year_min, observed.year_max)
        };

        Constraints {
            score_min: score_range.0.clamp(0.0, 100.0),
            score_max: score_range.1.clamp(0.0, 100.0),
            year_min,
            year_max,
            ..observed
        }
    }

    /// Whether a single record passes all four predicates.
    pub fn admits(&self, record: &GameRecord) -> bool {
        let score_ok = self.score_min <= record.metascore && record.metascore <= self.score_max;
        let year_ok = self.year_min <= record.year && record.year <= self.year_max;
        let rating_ok = record
            .rating
            .as_ref()
            .is_some_and(|r| self.ratings_allowed.contains(r));
        score_ok && year_ok && rating_ok
    }
}

/// Return the records that pass all constraints, in dataset order.
///
/// Inverted bounds are not an error; they simply admit nothing.
pub fn filter<'a>(dataset: &'a GameDataset, constraints: &Constraints) -> Vec<&'a GameRecord> {
    dataset
        .records
        .iter()
        .filter(|r| constraints.admits(r))
        .collect()
}

/// Return indices of records that pass all constraints.
pub fn filtered_indices(dataset: &GameDataset, constraints: &Constraints) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| constraints.admits(r))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;

    use crate::data::model::decade_of;

    fn record(name: &str, year: i32, metascore: f64, rating: Option<&str>) -> GameRecord {
        GameRecord {
            name: name.to_string(),
            launch_date: NaiveDate::from_ymd_opt(year, 3, 15).unwrap(),
            year,
            metascore,
            rating: rating.map(String::from),
            details: None,
            decade: decade_of(year),
        }
    }

    fn ratings(labels: &[&str]) -> BTreeSet<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> GameDataset {
        GameDataset::from_records(vec![
            record("A", 2000, 90.0, Some("T")),
            record("B", 2000, 95.0, Some("M")),
            record("C", 2001, 70.0, Some("E")),
            record("D", 1994, 88.0, Some("E10+")),
            record("E", 2015, 99.0, None),
            record("F", 2008, 80.0, Some("t")),
            record("G", 2021, 85.0, Some("K-A")),
        ])
    }

    fn names(records: &[&GameRecord]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_scenario_score_year_and_rating() {
        let ds = GameDataset::from_records(vec![
            record("A", 2000, 90.0, Some("T")),
            record("B", 2000, 95.0, Some("M")),
            record("C", 2001, 70.0, Some("E")),
        ]);
        let c = Constraints {
            score_min: 80.0,
            score_max: 100.0,
            year_min: 1990,
            year_max: 2020,
            ratings_allowed: ratings(&["T", "M"]),
        };
        assert_eq!(names(&filter(&ds, &c)), vec!["A", "B"]);
        assert_eq!(filtered_indices(&ds, &c), vec![0, 1]);
    }

    #[test]
    fn test_observed_admits_every_rated_record() {
        let ds = sample();
        let c = Constraints::observed(&ds);
        let result = filter(&ds, &c);
        assert_eq!(names(&result), vec!["A", "B", "C", "D", "F", "G"]);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let ds = sample();
        let c = Constraints {
            score_min: 90.0,
            score_max: 95.0,
            year_min: 2000,
            year_max: 2000,
            ..Constraints::observed(&ds)
        };
        assert_eq!(names(&filter(&ds, &c)), vec!["A", "B"]);
    }

    #[test]
    fn test_rating_match_is_case_sensitive() {
        let ds = sample();
        let c = Constraints {
            ratings_allowed: ratings(&["T"]),
            ..Constraints::observed(&ds)
        };
        assert_eq!(names(&filter(&ds, &c)), vec!["A"]);
    }

    #[test]
    fn test_null_rating_never_passes() {
        let ds = sample();
        let mut c = Constraints::observed(&ds);
        c.ratings_allowed.insert(String::new());
        assert!(filter(&ds, &c).iter().all(|r| r.name != "E"));

        c.ratings_allowed.clear();
        assert!(filter(&ds, &c).is_empty());
    }

    #[test]
    fn test_inverted_bounds_yield_empty() {
        let ds = sample();
        let c = Constraints {
            score_min: 95.0,
            score_max: 80.0,
            ..Constraints::observed(&ds)
        };
        assert!(filter(&ds, &c).is_empty());

        let c = Constraints {
            year_min: 2020,
            year_max: 1990,
            ..Constraints::observed(&ds)
        };
        assert!(filtered_indices(&ds, &c).is_empty());
    }

    #[test]
    fn test_filter_preserves_order_and_source() {
        let ds = sample();
        let before = ds.clone();
        let c = Constraints {
            score_min: 85.0,
            ..Constraints::observed(&ds)
        };
        let idx = filtered_indices(&ds, &c);
        assert!(idx.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ds, before);
    }

    #[test]
    fn test_widening_a_bound_never_removes_records() {
        let ds = sample();
        let narrow = Constraints {
            score_min: 85.0,
            score_max: 92.0,
            year_min: 1995,
            year_max: 2010,
            ratings_allowed: ratings(&["T", "E10+"]),
        };
        let base = filtered_indices(&ds, &narrow);

        let widened = [
            Constraints { score_min: 60.0, ..narrow.clone() },
            Constraints { score_max: 100.0, ..narrow.clone() },
            Constraints { year_min: 1980, ..narrow.clone() },
            Constraints { year_max: 2030, ..narrow.clone() },
            Constraints {
                ratings_allowed: ratings(&["T", "E10+", "M", "E"]),
                ..narrow.clone()
            },
        ];
        for wide in &widened {
            let result = filtered_indices(&ds, wide);
            assert!(base.iter().all(|i| result.contains(i)), "{wide:?}");
        }
    }

    #[test]
    fn test_conjunction_holds_both_ways() {
        let ds = sample();
        let c = Constraints {
            score_min: 80.0,
            score_max: 96.0,
            year_min: 1995,
            year_max: 2025,
            ratings_allowed: ratings(&["T", "M", "E", "K-A"]),
        };
        let passed = filtered_indices(&ds, &c);

        for (i, r) in ds.records.iter().enumerate() {
            let all_hold = c.score_min <= r.metascore
                && r.metascore <= c.score_max
                && c.year_min <= r.year
                && r.year <= c.year_max
                && r.rating.as_ref().is_some_and(|x| c.ratings_allowed.contains(x));
            assert_eq!(passed.contains(&i), all_hold, "record {}", r.name);
        }
    }

    #[test]
    fn test_initial_clamps_years_to_observed() {
        let ds = sample();
        let c = Constraints::initial(&ds, (70.0, 100.0), (1995, 2025));
        assert_eq!((c.year_min, c.year_max), (1995, 2021));
        assert_eq!((c.score_min, c.score_max), (70.0, 100.0));
        assert_eq!(c.ratings_allowed, ds.ratings);

        let c = Constraints::initial(&ds, (-5.0, 120.0), (1900, 1950));
        assert_eq!((c.year_min, c.year_max), (1994, 2021));
        assert_eq!((c.score_min, c.score_max), (0.0, 100.0));
    }

    #[test]
    fn test_empty_dataset_filters_to_empty() {
        let ds = GameDataset::from_records(Vec::new());
        let c = Constraints::observed(&ds);
        assert!(filter(&ds, &c).is_empty());
    }
}
