use std::collections::BTreeMap;

use eframe::egui::Ui;
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::color::rating_color;
use crate::data::model::{GameDataset, GameRecord};

/// Horizontal spread of the strip plot, in years either side of the tick.
const JITTER_WIDTH: f64 = 0.35;

/// Deterministic offset in `[-JITTER_WIDTH, JITTER_WIDTH]` so points do not
/// dance around between frames.
fn jitter(index: usize) -> f64 {
    let h = (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15) >> 40;
    let unit = h as f64 / (1u64 << 24) as f64;
    (unit * 2.0 - 1.0) * JITTER_WIDTH
}

// ---------------------------------------------------------------------------
// Strip plot: every visible game, coloured by rating
// ---------------------------------------------------------------------------

/// Metascore against year with horizontal jitter, one series per rating.
pub fn strip_plot<'a>(
    ui: &mut Ui,
    dataset: &GameDataset,
    visible: impl Iterator<Item = (usize, &'a GameRecord)>,
) {
    let mut series: BTreeMap<Option<&str>, Vec<[f64; 2]>> = BTreeMap::new();
    for (idx, r) in visible {
        series
            .entry(r.rating.as_deref())
            .or_default()
            .push([r.year as f64 + jitter(idx), r.metascore]);
    }

    Plot::new("strip_plot")
        .height(400.0)
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("Metascore")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            // Keep the legend in the dataset's rating order.
            for rating in dataset.ratings.iter().map(|r| Some(r.as_str())).chain([None]) {
                let Some(points) = series.remove(&rating) else {
                    continue;
                };
                plot_ui.points(
                    Points::new(PlotPoints::new(points))
                        .name(rating.unwrap_or("unrated"))
                        .color(rating_color(rating))
                        .radius(3.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Top-N per year: marker size grows with score
// ---------------------------------------------------------------------------

/// Radius for a score, so stronger games stand out.
fn marker_radius(metascore: f64) -> f32 {
    let t = ((metascore - 60.0) / 40.0).clamp(0.0, 1.0);
    (2.5 + t * 7.5) as f32
}

/// Scatter of the per-year selection. Each game is its own item so hovering
/// shows its name.
pub fn top_n_plot(ui: &mut Ui, top_per_year: &[GameRecord]) {
    Plot::new("top_n_plot")
        .height(400.0)
        .x_axis_label("Year")
        .y_axis_label("Metascore")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for r in top_per_year {
                plot_ui.points(
                    Points::new(PlotPoints::new(vec![[r.year as f64, r.metascore]]))
                        .name(&r.name)
                        .color(rating_color(r.rating.as_deref()))
                        .radius(marker_radius(r.metascore)),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jitter_is_bounded_and_stable() {
        for i in 0..1000 {
            let j = jitter(i);
            assert!(j.abs() <= JITTER_WIDTH);
            assert_eq!(j, jitter(i));
        }
    }

    #[test]
    fn test_marker_radius_grows_with_score() {
        assert!(marker_radius(95.0) > marker_radius(80.0));
        assert_eq!(marker_radius(10.0), marker_radius(60.0));
        assert_eq!(marker_radius(100.0), 10.0);
    }
}
