use crate::data::model::GameRecord;

/// Headline figures shown above the charts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub mean_metascore: Option<f64>,
    pub top_metascore: Option<f64>,
}

pub fn summarize<'a>(records: impl IntoIterator<Item = &'a GameRecord>) -> Summary {
    let mut total = 0usize;
    let mut sum = 0.0;
    let mut top: Option<f64> = None;
    for r in records {
        total += 1;
        sum += r.metascore;
        top = Some(top.map_or(r.metascore, |t| t.max(r.metascore)));
    }
    Summary {
        total,
        mean_metascore: (total > 0).then(|| sum / total as f64),
        top_metascore: top,
    }
}
