use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::color::rating_color;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("🔍 Filters");
    ui.separator();

    let Some(dataset) = state.dataset.clone() else {
        ui.label("No dataset loaded.");
        return;
    };
    let (year_lo, year_hi) = dataset.year_range().unwrap_or((0, 0));
    let top_n_max = state.config.top_n_max;

    let mut changed = false;
    let mut rating_action: Option<RatingAction> = None;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let Some(c) = state.constraints.as_mut() else {
                return;
            };

            // ---- Metascore range ----
            ui.strong("Metascore range");
            changed |= ui
                .add(Slider::new(&mut c.score_min, 0.0..=100.0).step_by(1.0).text("min"))
                .changed();
            changed |= ui
                .add(Slider::new(&mut c.score_max, 0.0..=100.0).step_by(1.0).text("max"))
                .changed();
            ui.separator();

            // ---- Year range ----
            ui.strong("Year range");
            changed |= ui
                .add(Slider::new(&mut c.year_min, year_lo..=year_hi).text("from"))
                .changed();
            changed |= ui
                .add(Slider::new(&mut c.year_max, year_lo..=year_hi).text("to"))
                .changed();
            if c.score_min > c.score_max || c.year_min > c.year_max {
                ui.label(RichText::new("Range is inverted: nothing matches.").color(Color32::YELLOW));
            }
            ui.separator();

            // ---- ESRB rating ----
            let n_selected = c.ratings_allowed.len();
            let n_total = dataset.ratings.len();
            let header_text = format!("ESRB Rating  ({n_selected}/{n_total})");

            egui::CollapsingHeader::new(RichText::new(header_text).strong())
                .id_salt("rating_filter")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            rating_action = Some(RatingAction::All);
                        }
                        if ui.small_button("None").clicked() {
                            rating_action = Some(RatingAction::Clear);
                        }
                    });

                    for rating in &dataset.ratings {
                        let mut checked = c.ratings_allowed.contains(rating);
                        let text = RichText::new(rating).color(rating_color(Some(rating)));
                        if ui.checkbox(&mut checked, text).changed() {
                            rating_action = Some(RatingAction::Toggle(rating.clone()));
                        }
                    }
                });
            ui.separator();

            // ---- Top-N ----
            ui.strong("Top-N games per year");
            changed |= ui
                .add(Slider::new(&mut state.top_n, 1..=top_n_max))
                .changed();
        });

    // Rating changes go through the state, which refilters on its own.
    match rating_action {
        Some(RatingAction::All) => state.select_all_ratings(),
        Some(RatingAction::Clear) => state.select_no_ratings(),
        Some(RatingAction::Toggle(rating)) => state.toggle_rating(&rating),
        None if changed => state.refilter(),
        None => {}
    }
}

/// A click in the rating filter, applied once the panel has been drawn.
enum RatingAction {
    All,
    Clear,
    Toggle(String),
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} games loaded, {} visible",
                ds.len(),
                state.visible_count()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open games dataset")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open(&path);
    }
}
