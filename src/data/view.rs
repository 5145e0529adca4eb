use super::aggregate::{
    CrossTab, DensityGrid, RankedGame, Summary, concatenate_details, cross_tab, density, summarize,
    top_k, top_n_per_year, word_count,
};
use super::filter::{Constraints, filter, filtered_indices};
use super::model::{GameDataset, GameRecord};

/// Knobs of the aggregators that are not part of the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    pub top_n: usize,
    pub top_k: usize,
    pub density_bins_x: usize,
    pub density_bins_y: usize,
}

/// Everything the dashboard draws for one constraint set.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// KPI figures over the whole dataset.
    pub summary: Summary,
    /// Indices into the dataset of records passing the filter, in order.
    pub visible_indices: Vec<usize>,
    pub top_per_year: Vec<GameRecord>,
    pub ranking: Vec<RankedGame>,
    pub tiers: CrossTab,
    pub density: DensityGrid,
    pub details_text: String,
    pub details_words: usize,
}

impl DashboardView {
    /// Run the filter and every aggregator against `dataset`.
    pub fn evaluate(dataset: &GameDataset, constraints: &Constraints, options: ViewOptions) -> Self {
        let subset = filter(dataset, constraints);
        log::debug!(
            "Filter kept {} of {} games (top_n = {})",
            subset.len(),
            dataset.len(),
            options.top_n
        );

        let details_text = concatenate_details(&subset);
        DashboardView {
            summary: summarize(&dataset.records),
            visible_indices: filtered_indices(dataset, constraints),
            top_per_year: top_n_per_year(&subset, options.top_n),
            ranking: top_k(&subset, options.top_k),
            tiers: cross_tab(&subset),
            density: density(&subset, options.density_bins_x, options.density_bins_y),
            details_words: word_count(&details_text),
            details_text,
        }
    }

    /// The visible records with their dataset index, borrowed back out of
    /// the dataset.
    pub fn visible<'a>(
        &'a self,
        dataset: &'a GameDataset,
    ) -> impl Iterator<Item = (usize, &'a GameRecord)> + 'a {
        self.visible_indices
            .iter()
            .filter_map(move |&i| dataset.records.get(i).map(|r| (i, r)))
    }
}
