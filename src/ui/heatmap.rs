use eframe::egui::{self, Align2, Color32, FontId, Sense, Stroke, Ui};
use egui_plot::{Plot, PlotPoints, Polygon};

use crate::color::{ColorScale, contrast_text};
use crate::data::aggregate::{CrossTab, DensityGrid, Tier};

const CELL_HEIGHT: f32 = 48.0;
const LABEL_WIDTH: f32 = 64.0;
const AXIS_HEIGHT: f32 = 20.0;

// ---------------------------------------------------------------------------
// Decade × tier (tiers as rows, decades as columns)
// ---------------------------------------------------------------------------

/// Paint the decade × tier counts as a labelled grid.
pub fn tier_heatmap(ui: &mut Ui, tab: &CrossTab) {
    let decades: Vec<i32> = tab.decades().collect();
    if decades.is_empty() {
        ui.label("No games in the current selection.");
        return;
    }

    let scale = ColorScale::yellow_orange_red();
    let max = tab.max_count();

    let width = ui.available_width().max(LABEL_WIDTH + 40.0);
    let height = CELL_HEIGHT * Tier::ALL.len() as f32 + AXIS_HEIGHT;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), Sense::hover());
    let painter = ui.painter_at(rect);

    let cell_w = (width - LABEL_WIDTH) / decades.len() as f32;
    let text_color = ui.visuals().text_color();
    let font = FontId::proportional(13.0);

    // Highest tier on top, like a y axis.
    for (row, tier) in Tier::ALL.iter().rev().enumerate() {
        let y0 = rect.top() + row as f32 * CELL_HEIGHT;
        painter.text(
            egui::pos2(rect.left() + LABEL_WIDTH - 6.0, y0 + CELL_HEIGHT / 2.0),
            Align2::RIGHT_CENTER,
            tier.label(),
            font.clone(),
            text_color,
        );

        for (col, &decade) in decades.iter().enumerate() {
            let count = tab.get(decade, *tier);
            let cell = egui::Rect::from_min_size(
                egui::pos2(rect.left() + LABEL_WIDTH + col as f32 * cell_w, y0),
                egui::vec2(cell_w, CELL_HEIGHT),
            );
            let fill = scale.for_count(count, max);
            painter.rect_filled(cell.shrink(1.0), 2.0, fill);
            painter.text(
                cell.center(),
                Align2::CENTER_CENTER,
                count.to_string(),
                font.clone(),
                contrast_text(fill),
            );
        }
    }

    for (col, decade) in decades.iter().enumerate() {
        painter.text(
            egui::pos2(
                rect.left() + LABEL_WIDTH + (col as f32 + 0.5) * cell_w,
                rect.bottom() - AXIS_HEIGHT / 2.0,
            ),
            Align2::CENTER_CENTER,
            format!("{decade}s"),
            font.clone(),
            text_color,
        );
    }
}

// ---------------------------------------------------------------------------
// Year × Metascore density
// ---------------------------------------------------------------------------

/// 2-D histogram drawn as filled rectangles on real plot axes.
pub fn density_heatmap(ui: &mut Ui, grid: &DensityGrid) {
    let scale = ColorScale::viridis();
    let max = grid.max_count();

    Plot::new("density_plot")
        .height(400.0)
        .x_axis_label("Year")
        .y_axis_label("Metascore")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for iy in 0..grid.bins_y {
                for ix in 0..grid.bins_x {
                    let count = grid.count(ix, iy);
                    if count == 0 {
                        continue;
                    }
                    let (x0, x1, y0, y1) = grid.cell_bounds(ix, iy);
                    let fill = scale.for_count(count, max);
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::new(vec![[x0, y0], [x1, y0], [x1, y1], [x0, y1]]))
                            .name(format!("{count} games"))
                            .fill_color(fill)
                            .stroke(Stroke::new(0.0, Color32::TRANSPARENT)),
                    );
                }
            }
        });
}
