use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::aggregate::{RankedGame, Summary};

/// Background of the best score in the ranking table.
const HIGHLIGHT: Color32 = Color32::from_rgb(0xff, 0x4b, 0x4b);

/// Three headline figures side by side.
pub fn kpi_row(ui: &mut Ui, summary: &Summary) {
    let fmt_score = |v: Option<f64>, decimals: usize| {
        v.map_or_else(|| "–".to_string(), |s| format!("{s:.decimals$}"))
    };

    ui.columns(3, |cols| {
        kpi(&mut cols[0], "Total Games", summary.total.to_string());
        kpi(&mut cols[1], "Avg Metascore", fmt_score(summary.mean_metascore, 1));
        kpi(&mut cols[2], "Top Score", fmt_score(summary.top_metascore, 0));
    });
}

fn kpi(ui: &mut Ui, label: &str, value: String) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).weak());
        ui.label(RichText::new(value).size(28.0).strong());
    });
}

/// Ranking table; every row holding the top score is highlighted.
pub fn ranking_table(ui: &mut Ui, ranking: &[RankedGame]) {
    if ranking.is_empty() {
        ui.label("No games in the current selection.");
        return;
    }
    let best = ranking
        .iter()
        .map(|r| r.metascore)
        .fold(f64::NEG_INFINITY, f64::max);

    ui.push_id("ranking_table", |ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::exact(32.0))
            .column(Column::remainder().at_least(200.0))
            .column(Column::exact(90.0))
            .header(22.0, |mut header| {
                header.col(|ui| {
                    ui.strong("#");
                });
                header.col(|ui| {
                    ui.strong("Name");
                });
                header.col(|ui| {
                    ui.strong("Metascore");
                });
            })
            .body(|mut body| {
                for (i, game) in ranking.iter().enumerate() {
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            ui.label((i + 1).to_string());
                        });
                        row.col(|ui| {
                            ui.label(&game.name);
                        });
                        row.col(|ui| {
                            let mut text = RichText::new(format!("{}", game.metascore));
                            if game.metascore == best {
                                text = text.background_color(HIGHLIGHT).color(Color32::WHITE);
                            }
                            ui.label(text);
                        });
                    });
                }
            });
    });
}

/// The concatenated details handed to word-frequency tools.
pub fn details_blob(ui: &mut Ui, text: &str, words: usize) {
    if text.is_empty() {
        ui.label("No game details in the current selection.");
        return;
    }
    ui.label(format!("{words} words from {} characters", text.chars().count()));
    ScrollArea::vertical()
        .id_salt("details_blob")
        .max_height(160.0)
        .show(ui, |ui| {
            ui.add(egui::Label::new(RichText::new(text).monospace()).wrap());
        });
}
