//! Dashboard configuration.
//!
//! Defaults mirror the published dashboard. Any field can be overridden from
//! a JSON file, and the dataset path also from the first command-line
//! argument.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::data::view::ViewOptions;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "GAMES_DASHBOARD_CONFIG";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "dashboard.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Dataset opened at start-up.
    pub dataset_path: PathBuf,
    /// Initial Metascore selection.
    pub default_score_range: (f64, f64),
    /// Initial year selection, clamped to the years present in the data.
    pub default_year_range: (i32, i32),
    pub default_top_n: usize,
    /// Upper end of the top-N slider.
    pub top_n_max: usize,
    /// Rows in the global ranking table.
    pub top_k: usize,
    pub density_bins_x: usize,
    pub density_bins_y: usize,
    pub window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("Best_Games_of_All_Time.csv"),
            default_score_range: (70.0, 100.0),
            default_year_range: (1995, 2025),
            default_top_n: 3,
            top_n_max: 10,
            top_k: 10,
            density_bins_x: 30,
            density_bins_y: 20,
            window_size: [1280.0, 900.0],
        }
    }
}

impl DashboardConfig {
    /// Parse a JSON document; absent fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing dashboard config")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text)
    }

    /// Resolve the configuration from the process environment.
    pub fn from_env() -> Self {
        let config_file = std::env::var_os(CONFIG_ENV).map(PathBuf::from).or_else(|| {
            let local = PathBuf::from(DEFAULT_CONFIG_FILE);
            local.exists().then_some(local)
        });
        let dataset_arg = std::env::args_os().nth(1).map(PathBuf::from);
        Self::resolve(config_file.as_deref(), dataset_arg)
    }

    /// Layer an optional config file and an optional dataset override over
    /// the defaults. A broken config file is logged and ignored.
    pub fn resolve(config_file: Option<&Path>, dataset_override: Option<PathBuf>) -> Self {
        let mut config = match config_file {
            Some(path) => Self::from_file(path).unwrap_or_else(|e| {
                log::warn!("Ignoring config file: {e:#}");
                Self::default()
            }),
            None => Self::default(),
        };
        if let Some(path) = dataset_override {
            config.dataset_path = path;
        }
        config.top_n_max = config.top_n_max.max(1);
        config.default_top_n = config.default_top_n.clamp(1, config.top_n_max);
        config
    }

    pub fn view_options(&self, top_n: usize) -> ViewOptions {
        ViewOptions {
            top_n,
            top_k: self.top_k,
            density_bins_x: self.density_bins_x,
            density_bins_y: self.density_bins_y,
        }
    }
}
