use std::collections::BTreeMap;

use crate::data::model::GameRecord;

// ---------------------------------------------------------------------------
// Tier – score bucket
// ---------------------------------------------------------------------------

/// Ordered score buckets. Each covers a left-open, right-closed interval:
/// `Good (0,85]`, `Great (85,90]`, `Superb (90,95]`, `Perfect (95,100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Good,
    Great,
    Superb,
    Perfect,
}

impl Tier {
    /// Every tier, lowest first. Always the full column set of a [`CrossTab`].
    pub const ALL: [Tier; 4] = [Tier::Good, Tier::Great, Tier::Superb, Tier::Perfect];

    /// `(lower, upper]` bounds of the tier.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Tier::Good => (0.0, 85.0),
            Tier::Great => (85.0, 90.0),
            Tier::Superb => (90.0, 95.0),
            Tier::Perfect => (95.0, 100.0),
        }
    }

    /// The tier containing `score`, or `None` for scores `<= 0` or `> 100`.
    pub fn of(score: f64) -> Option<Tier> {
        Tier::ALL.into_iter().find(|t| {
            let (lower, upper) = t.bounds();
            score > lower && score <= upper
        })
    }

    fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Good => "Good",
            Tier::Great => "Great",
            Tier::Superb => "Superb",
            Tier::Perfect => "Perfect",
        }
    }
}

// ---------------------------------------------------------------------------
// CrossTab – decade × tier counts
// ---------------------------------------------------------------------------

/// Count of games per decade and tier.
///
/// Only decades with at least one tabulated game appear as rows; every row
/// carries all four tiers, zeros included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrossTab {
    rows: BTreeMap<i32, [usize; 4]>,
}

impl CrossTab {
    /// Decades present, ascending.
    pub fn decades(&self) -> impl Iterator<Item = i32> + '_ {
        self.rows.keys().copied()
    }

    /// Count for one cell; zero for decades not in the table.
    pub fn get(&self, decade: i32, tier: Tier) -> usize {
        self.rows
            .get(&decade)
            .map(|counts| counts[tier.index()])
            .unwrap_or(0)
    }

    /// One decade's counts as `(tier, count)` pairs in tier order.
    pub fn row(&self, decade: i32) -> Option<Vec<(Tier, usize)>> {
        let counts = self.rows.get(&decade)?;
        Some(Tier::ALL.iter().map(|&t| (t, counts[t.index()])).collect())
    }

    /// Sum of every cell.
    pub fn total(&self) -> usize {
        self.rows.values().flat_map(|c| c.iter()).sum()
    }

    /// Largest single cell, for colour scaling.
    pub fn max_count(&self) -> usize {
        self.rows
            .values()
            .flat_map(|c| c.iter().copied())
            .max()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Tabulate the subset by decade and score tier.
/// Records whose score falls outside every tier are left out.
pub fn cross_tab(subset: &[&GameRecord]) -> CrossTab {
    let mut rows: BTreeMap<i32, [usize; 4]> = BTreeMap::new();
    for record in subset {
        if let Some(tier) = Tier::of(record.metascore) {
            rows.entry(record.decade).or_default()[tier.index()] += 1;
        }
    }
    CrossTab { rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;

    use crate::data::model::decade_of;

    fn record(year: i32, metascore: f64) -> GameRecord {
        GameRecord {
            name: format!("{year}/{metascore}"),
            launch_date: NaiveDate::from_ymd_opt(year, 9, 9).unwrap(),
            year,
            metascore,
            rating: None,
            details: None,
            decade: decade_of(year),
        }
    }

    #[test]
    fn test_tier_boundaries_are_left_open_right_closed() {
        assert_eq!(Tier::of(0.0), None);
        assert_eq!(Tier::of(-3.0), None);
        assert_eq!(Tier::of(0.5), Some(Tier::Good));
        assert_eq!(Tier::of(85.0), Some(Tier::Good));
        assert_eq!(Tier::of(85.5), Some(Tier::Great));
        assert_eq!(Tier::of(90.0), Some(Tier::Great));
        assert_eq!(Tier::of(95.0), Some(Tier::Superb));
        assert_eq!(Tier::of(95.1), Some(Tier::Perfect));
        assert_eq!(Tier::of(100.0), Some(Tier::Perfect));
        assert_eq!(Tier::of(100.5), None);
    }

    #[test]
    fn test_scenario_cross_tab() {
        let a = record(2000, 90.0);
        let b = record(2000, 95.0);
        let tab = cross_tab(&[&a, &b]);

        assert_eq!(tab.decades().collect::<Vec<_>>(), vec![2000]);
        assert_eq!(
            tab.row(2000),
            Some(vec![
                (Tier::Good, 0),
                (Tier::Great, 1),
                (Tier::Superb, 1),
                (Tier::Perfect, 0),
            ])
        );
    }

    #[test]
    fn test_cross_tab_total_counts_positive_scores() {
        let records = vec![
            record(1991, 70.0),
            record(1998, 0.0),
            record(2003, 88.0),
            record(2009, 96.0),
            record(2012, 91.0),
            record(2015, 100.0),
            record(1985, 84.9),
        ];
        let subset: Vec<&GameRecord> = records.iter().collect();
        let tab = cross_tab(&subset);

        let positive = records.iter().filter(|r| r.metascore > 0.0).count();
        assert_eq!(tab.total(), positive);
        assert_eq!(tab.decades().collect::<Vec<_>>(), vec![1980, 1990, 2000, 2010]);
        assert_eq!(tab.get(2000, Tier::Great), 1);
        assert_eq!(tab.get(2000, Tier::Perfect), 1);
        assert_eq!(tab.get(2010, Tier::Superb), 1);
        assert_eq!(tab.get(1970, Tier::Good), 0);
        assert_eq!(tab.max_count(), 1);
    }

    #[test]
    fn test_decade_with_only_excluded_scores_is_omitted() {
        let zero = record(1977, 0.0);
        let tab = cross_tab(&[&zero]);
        assert!(tab.is_empty());
        assert_eq!(tab.row(1970), None);
    }

    #[test]
    fn test_empty_subset() {
        let tab = cross_tab(&[]);
        assert!(tab.is_empty());
        assert_eq!(tab.total(), 0);
        assert_eq!(tab.max_count(), 0);
    }
}
