use crate::data::model::GameRecord;

/// Join every present `details` text with a single space, in subset order.
///
/// Records without details add nothing, not even a separator. The result is
/// empty when no record has details.
pub fn concatenate_details(subset: &[&GameRecord]) -> String {
    subset
        .iter()
        .filter_map(|r| r.details.as_deref())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Number of whitespace-separated words in a text blob.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;

    fn record(details: Option<&str>) -> GameRecord {
        GameRecord {
            name: "x".into(),
            launch_date: NaiveDate::from_ymd_opt(2005, 5, 5).unwrap(),
            year: 2005,
            metascore: 80.0,
            rating: None,
            details: details.map(String::from),
            decade: 2000,
        }
    }

    #[test]
    fn test_nulls_contribute_no_separator() {
        let records = vec![
            record(Some("open world")),
            record(None),
            record(Some("stealth")),
            record(None),
        ];
        let subset: Vec<&GameRecord> = records.iter().collect();
        assert_eq!(concatenate_details(&subset), "open world stealth");
    }

    #[test]
    fn test_all_null_or_empty_subset_is_empty_string() {
        let records = vec![record(None), record(None)];
        let subset: Vec<&GameRecord> = records.iter().collect();
        assert_eq!(concatenate_details(&subset), "");
        assert_eq!(concatenate_details(&[]), "");
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_split_length_is_bounded() {
        let details = ["a fast racer", "puzzle", "two  spaces"];
        let records: Vec<GameRecord> = details.iter().map(|d| record(Some(*d))).collect();
        let subset: Vec<&GameRecord> = records.iter().collect();

        let text = concatenate_details(&subset);
        let words: usize = details.iter().map(|d| d.split(' ').count()).sum();
        let bound = words + (details.len() - 1);
        assert!(text.split(' ').count() <= bound);
        assert_eq!(word_count(&text), 6);
    }
}
