use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::data::model::GameRecord;

/// One row of the global ranking table.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedGame {
    pub name: String,
    pub metascore: f64,
}

/// Descending by score. Used with the stable `sort_by`, so equal scores keep
/// their input order.
fn by_score_desc(a: &&GameRecord, b: &&GameRecord) -> Ordering {
    b.metascore.total_cmp(&a.metascore)
}

/// Best `n` records of every year.
///
/// Output is grouped by ascending year; inside a year records run from the
/// highest score down, ties in input order. `n == 0` selects nothing.
pub fn top_n_per_year(subset: &[&GameRecord], n: usize) -> Vec<GameRecord> {
    if n == 0 {
        return Vec::new();
    }

    let mut by_year: BTreeMap<i32, Vec<&GameRecord>> = BTreeMap::new();
    for &record in subset {
        by_year.entry(record.year).or_default().push(record);
    }

    by_year
        .into_values()
        .flat_map(|mut group| {
            group.sort_by(by_score_desc);
            group.into_iter().take(n).cloned()
        })
        .collect()
}

/// The `k` highest-scoring games of the whole subset, ties in input order.
pub fn top_k(subset: &[&GameRecord], k: usize) -> Vec<RankedGame> {
    let mut ranked: Vec<&GameRecord> = subset.to_vec();
    ranked.sort_by(by_score_desc);
    ranked
        .into_iter()
        .take(k)
        .map(|r| RankedGame {
            name: r.name.clone(),
            metascore: r.metascore,
        })
        .collect()
}
