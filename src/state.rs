use std::path::Path;
use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::data::filter::Constraints;
use crate::data::loader;
use crate::data::model::GameDataset;
use crate::data::view::DashboardView;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Loaded dataset (None until a file has been loaded successfully).
    pub dataset: Option<Arc<GameDataset>>,

    /// Current filter selection.
    pub constraints: Option<Constraints>,

    /// Games shown per year in the top-N chart.
    pub top_n: usize,

    /// Filter and aggregator outputs for the current selection.
    pub view: Option<DashboardView>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            top_n: config.default_top_n,
            config,
            dataset: None,
            constraints: None,
            view: None,
            status_message: None,
        }
    }

    /// Load a dataset from disk, reporting failures in the status line.
    pub fn open(&mut self, path: &Path) {
        match loader::load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "Opened {} with {} games, ratings {:?}",
                    path.display(),
                    dataset.len(),
                    dataset.ratings
                );
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Ingest a newly loaded dataset and initialise the filters.
    pub fn set_dataset(&mut self, dataset: Arc<GameDataset>) {
        self.constraints = Some(Constraints::initial(
            &dataset,
            self.config.default_score_range,
            self.config.default_year_range,
        ));
        self.dataset = Some(dataset);
        self.status_message = None;
        self.refilter();
    }

    /// Recompute the view after any change to constraints or `top_n`.
    pub fn refilter(&mut self) {
        self.view = match (&self.dataset, &self.constraints) {
            (Some(ds), Some(c)) => Some(DashboardView::evaluate(
                ds,
                c,
                self.config.view_options(self.top_n),
            )),
            _ => None,
        };
    }

    /// Toggle a single rating in the filter.
    pub fn toggle_rating(&mut self, rating: &str) {
        if let Some(c) = &mut self.constraints {
            if !c.ratings_allowed.remove(rating) {
                c.ratings_allowed.insert(rating.to_string());
            }
            self.refilter();
        }
    }

    /// Select every observed rating.
    pub fn select_all_ratings(&mut self) {
        if let (Some(ds), Some(c)) = (&self.dataset, &mut self.constraints) {
            c.ratings_allowed = ds.ratings.clone();
            self.refilter();
        }
    }

    /// Deselect every rating (hides everything).
    pub fn select_no_ratings(&mut self) {
        if let Some(c) = &mut self.constraints {
            c.ratings_allowed.clear();
            self.refilter();
        }
    }

    /// Number of games currently passing the filter.
    pub fn visible_count(&self) -> usize {
        self.view.as_ref().map_or(0, |v| v.visible_indices.len())
    }
}
