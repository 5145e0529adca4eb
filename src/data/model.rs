use std::collections::BTreeSet;

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// RawTable – untyped rows as read from disk
// ---------------------------------------------------------------------------

/// A tabular file read verbatim: header names plus rows of optional text cells.
///
/// Every storage format (CSV, JSON, Parquet) is flattened into this shape
/// before typing, so the loader only has to deal with one representation.
/// `Hash` is derived so the loader can key its cache on content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RawTable {
    /// Column names in file order.
    pub columns: Vec<String>,
    /// One entry per row; `None` marks a missing cell.
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>) -> Self {
        RawTable {
            columns,
            rows: Vec::new(),
        }
    }

    /// Position of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn push_row(&mut self, row: Vec<Option<String>>) {
        self.rows.push(row);
    }

    /// Number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// GameRecord – one typed row
// ---------------------------------------------------------------------------

/// A single game after typing and derivation.
///
/// `year` and `metascore` are never null here: rows missing either are
/// dropped by the loader before a `GameRecord` is built.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub name: String,
    pub launch_date: NaiveDate,
    /// Calendar year of `launch_date`.
    pub year: i32,
    pub metascore: f64,
    pub rating: Option<String>,
    pub details: Option<String>,
    /// `floor(year / 10) * 10`.
    pub decade: i32,
}

/// Floor-aligned ten-year bucket for a year.
pub fn decade_of(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

// ---------------------------------------------------------------------------
// GameDataset – the complete typed dataset
// ---------------------------------------------------------------------------

/// The full typed dataset with its observed domain pre-computed.
#[derive(Debug, Clone, PartialEq)]
pub struct GameDataset {
    /// All records in source order.
    pub records: Vec<GameRecord>,
    /// Sorted set of non-null ratings present in the data.
    pub ratings: BTreeSet<String>,
}

impl GameDataset {
    /// Build the rating vocabulary from the loaded records.
    pub fn from_records(records: Vec<GameRecord>) -> Self {
        let ratings = records
            .iter()
            .filter_map(|r| r.rating.clone())
            .collect();
        GameDataset { records, ratings }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest and largest `year` observed, `None` for an empty dataset.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|r| r.year).min()?;
        let max = self.records.iter().map(|r| r.year).max()?;
        Some((min, max))
    }

    /// Smallest and largest `metascore` observed, `None` for an empty dataset.
    pub fn score_range(&self) -> Option<(f64, f64)> {
        let mut scores = self.records.iter().map(|r| r.metascore);
        let first = scores.next()?;
        Some(scores.fold((first, first), |(lo, hi), s| (lo.min(s), hi.max(s))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, metascore: f64, rating: Option<&str>) -> GameRecord {
        GameRecord {
            name: format!("game-{year}-{metascore}"),
            launch_date: NaiveDate::from_ymd_opt(year, 6, 1).unwrap(),
            year,
            metascore,
            rating: rating.map(String::from),
            details: None,
            decade: decade_of(year),
        }
    }

    #[test]
    fn test_decade_is_floor_aligned() {
        assert_eq!(decade_of(1998), 1990);
        assert_eq!(decade_of(2000), 2000);
        assert_eq!(decade_of(2009), 2000);
        assert_eq!(decade_of(-5), -10);
        for year in [-21, -1, 0, 7, 1985, 2024] {
            let d = decade_of(year);
            assert_eq!(d % 10, 0);
            assert!(d <= year);
        }
    }

    #[test]
    fn test_observed_domain() {
        let ds = GameDataset::from_records(vec![
            record(2001, 88.0, Some("T")),
            record(1996, 97.0, Some("E")),
            record(2010, 72.0, None),
            record(2004, 91.0, Some("T")),
        ]);

        assert_eq!(ds.year_range(), Some((1996, 2010)));
        assert_eq!(ds.score_range(), Some((72.0, 97.0)));
        let ratings: Vec<&str> = ds.ratings.iter().map(String::as_str).collect();
        assert_eq!(ratings, vec!["E", "T"]);
    }

    #[test]
    fn test_empty_dataset_has_no_ranges() {
        let ds = GameDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.year_range(), None);
        assert_eq!(ds.score_range(), None);
        assert!(ds.ratings.is_empty());
    }

    #[test]
    fn test_raw_table_column_lookup() {
        let table = RawTable::new(vec!["Name".into(), "Metascore".into()]);
        assert_eq!(table.column_index("Metascore"), Some(1));
        assert_eq!(table.column_index("metascore"), None);
        assert!(table.is_empty());
    }
}
