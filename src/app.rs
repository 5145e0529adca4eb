use eframe::egui::{self, ScrollArea, Ui};

use crate::config::DashboardConfig;
use crate::state::AppState;
use crate::ui::{heatmap, panels, plot, tables};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct GamesDashboardApp {
    pub state: AppState,
}

impl GamesDashboardApp {
    /// Build the app and open the configured dataset if it exists.
    pub fn new(config: DashboardConfig) -> Self {
        let dataset_path = config.dataset_path.clone();
        let mut state = AppState::new(config);
        if dataset_path.exists() {
            state.open(&dataset_path);
        } else {
            log::warn!("Dataset {} not found, waiting for File → Open…", dataset_path.display());
        }
        Self { state }
    }
}

impl eframe::App for GamesDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            dashboard(ui, &self.state);
        });
    }
}

fn dashboard(ui: &mut Ui, state: &AppState) {
    let (Some(dataset), Some(view)) = (&state.dataset, &state.view) else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a games dataset to begin  (File → Open…)");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("🎮 Best Games of All Time");
            tables::kpi_row(ui, &view.summary);
            ui.separator();

            ui.strong("📈 Metascore vs Year (Density)");
            heatmap::density_heatmap(ui, &view.density);
            ui.separator();

            ui.strong("📈 Metascore vs Year (Jittered)");
            plot::strip_plot(ui, dataset, view.visible(dataset));
            ui.separator();

            ui.strong(format!("📈 Metascore vs Year (Top-{} per Year)", state.top_n));
            plot::top_n_plot(ui, &view.top_per_year);
            ui.separator();

            ui.strong(format!("🎯 Top {} Highest Rated", state.config.top_k));
            tables::ranking_table(ui, &view.ranking);
            ui.separator();

            ui.strong("🔥 Games per Decade & Tier");
            heatmap::tier_heatmap(ui, &view.tiers);
            ui.separator();

            ui.strong("💬 Game Details");
            tables::details_blob(ui, &view.details_text, view.details_words);
        });
}
