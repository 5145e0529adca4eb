use eframe::egui::Color32;
use palette::{Hsl, IntoColor, LinSrgb, Mix, Srgb};

// ---------------------------------------------------------------------------
// Rating colours
// ---------------------------------------------------------------------------

/// Fixed colours for the common ESRB labels.
const RATING_COLORS: [(&str, Color32); 5] = [
    ("E", Color32::from_rgb(0x4d, 0xaf, 0x4a)),
    ("E10+", Color32::from_rgb(0x37, 0x7e, 0xb8)),
    ("T", Color32::from_rgb(0xff, 0x7f, 0x00)),
    ("M", Color32::from_rgb(0xe4, 0x1a, 0x1c)),
    ("K-A", Color32::from_rgb(0x98, 0x4e, 0xa3)),
];

/// Colour for labels outside the fixed vocabulary, and for missing ratings.
pub const UNRATED_COLOR: Color32 = Color32::GRAY;

/// Look up the colour for a rating. Unknown labels are valid, just grey.
pub fn rating_color(rating: Option<&str>) -> Color32 {
    rating
        .and_then(|r| RATING_COLORS.iter().find(|(label, _)| *label == r))
        .map(|(_, c)| *c)
        .unwrap_or(UNRATED_COLOR)
}

// ---------------------------------------------------------------------------
// Sequential colour scales for heatmaps
// ---------------------------------------------------------------------------

/// A piecewise-linear colour scale, mixed in linear RGB.
#[derive(Debug, Clone)]
pub struct ColorScale {
    stops: Vec<LinSrgb>,
}

impl ColorScale {
    fn from_srgb(stops: &[(u8, u8, u8)]) -> Self {
        let stops = stops
            .iter()
            .map(|&(r, g, b)| Srgb::new(r, g, b).into_format::<f32>().into_linear())
            .collect();
        ColorScale { stops }
    }

    /// Dark purple through teal to yellow.
    pub fn viridis() -> Self {
        Self::from_srgb(&[
            (0x44, 0x01, 0x54),
            (0x3b, 0x52, 0x8b),
            (0x21, 0x90, 0x8d),
            (0x5d, 0xc8, 0x63),
            (0xfd, 0xe7, 0x25),
        ])
    }

    /// Pale yellow through orange to red, built from HSL so hue and lightness
    /// fall together.
    pub fn yellow_orange_red() -> Self {
        let stops = [(55.0, 0.95), (35.0, 0.70), (15.0, 0.55), (0.0, 0.38)]
            .iter()
            .map(|&(hue, lightness)| {
                let rgb: Srgb = Hsl::new(hue, 0.9, lightness).into_color();
                rgb.into_linear()
            })
            .collect();
        ColorScale { stops }
    }

    /// Colour at `t` in `[0, 1]`; values outside are clamped.
    pub fn at(&self, t: f32) -> Color32 {
        let Some(last) = self.stops.len().checked_sub(1) else {
            return UNRATED_COLOR;
        };
        let t = t.clamp(0.0, 1.0) * last as f32;
        let i = (t.floor() as usize).min(last);
        let color = if i == last {
            self.stops[last]
        } else {
            self.stops[i].mix(self.stops[i + 1], t - i as f32)
        };
        to_color32(Srgb::from_linear(color))
    }

    /// Colour for `count` on a `0..=max` scale.
    pub fn for_count(&self, count: usize, max: usize) -> Color32 {
        if max == 0 {
            return self.at(0.0);
        }
        self.at(count as f32 / max as f32)
    }
}

fn to_color32(rgb: Srgb) -> Color32 {
    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}

/// Black or white, whichever reads better on `background`.
pub fn contrast_text(background: Color32) -> Color32 {
    let luma = 0.299 * background.r() as f32
        + 0.587 * background.g() as f32
        + 0.114 * background.b() as f32;
    if luma > 140.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_ratings() {
        assert_eq!(rating_color(Some("M")), Color32::from_rgb(0xe4, 0x1a, 0x1c));
        assert_eq!(rating_color(Some("E10+")), Color32::from_rgb(0x37, 0x7e, 0xb8));
        assert_eq!(rating_color(Some("AO")), UNRATED_COLOR);
        assert_eq!(rating_color(Some("m")), UNRATED_COLOR);
        assert_eq!(rating_color(None), UNRATED_COLOR);
    }

    #[test]
    fn test_scale_endpoints() {
        let scale = ColorScale::viridis();
        assert_eq!(scale.at(0.0), Color32::from_rgb(0x44, 0x01, 0x54));
        assert_eq!(scale.at(1.0), Color32::from_rgb(0xfd, 0xe7, 0x25));
        assert_eq!(scale.at(-2.0), scale.at(0.0));
        assert_eq!(scale.at(7.0), scale.at(1.0));
        assert_eq!(scale.for_count(0, 0), scale.at(0.0));
    }

    #[test]
    fn test_heat_scale_gets_darker() {
        let scale = ColorScale::yellow_orange_red();
        let luma = |c: Color32| c.r() as u32 + c.g() as u32 + c.b() as u32;
        assert!(luma(scale.at(0.0)) > luma(scale.at(0.5)));
        assert!(luma(scale.at(0.5)) > luma(scale.at(1.0)));
    }

    #[test]
    fn test_contrast_text() {
        assert_eq!(contrast_text(Color32::WHITE), Color32::BLACK);
        assert_eq!(contrast_text(Color32::from_rgb(0x44, 0x01, 0x54)), Color32::WHITE);
    }
}
