use crate::data::model::GameRecord;

/// Equal-width 2-D histogram of Year (x) against Metascore (y).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DensityGrid {
    pub bins_x: usize,
    pub bins_y: usize,
    /// Observed `(min, max)` year, as a float axis.
    pub x_range: (f64, f64),
    /// Observed `(min, max)` metascore.
    pub y_range: (f64, f64),
    /// Row-major by y: `counts[iy * bins_x + ix]`.
    counts: Vec<usize>,
}

impl DensityGrid {
    pub fn count(&self, ix: usize, iy: usize) -> usize {
        self.counts.get(iy * self.bins_x + ix).copied().unwrap_or(0)
    }

    /// `(x0, x1, y0, y1)` extent of one cell.
    pub fn cell_bounds(&self, ix: usize, iy: usize) -> (f64, f64, f64, f64) {
        let (x0, x1) = axis_cell(self.x_range, self.bins_x, ix);
        let (y0, y1) = axis_cell(self.y_range, self.bins_y, iy);
        (x0, x1, y0, y1)
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

fn axis_cell(range: (f64, f64), bins: usize, i: usize) -> (f64, f64) {
    let width = (range.1 - range.0) / bins as f64;
    if width > 0.0 {
        (range.0 + width * i as f64, range.0 + width * (i + 1) as f64)
    } else {
        // Degenerate axis: give the single bin a unit extent so it stays visible.
        (range.0 - 0.5, range.0 + 0.5)
    }
}

fn bin_index(value: f64, range: (f64, f64), bins: usize) -> usize {
    let span = range.1 - range.0;
    if span <= 0.0 {
        return 0;
    }
    let i = ((value - range.0) / span * bins as f64).floor() as usize;
    i.min(bins - 1)
}

/// Bin the subset into at most `bins_x` × `bins_y` cells over its own extent.
///
/// An axis whose values are all equal collapses to a single bin. The upper
/// edge belongs to the last bin, so cell counts always sum to the subset size.
pub fn density(subset: &[&GameRecord], bins_x: usize, bins_y: usize) -> DensityGrid {
    let Some(first) = subset.first() else {
        return DensityGrid::default();
    };

    let mut x_range = (first.year as f64, first.year as f64);
    let mut y_range = (first.metascore, first.metascore);
    for r in subset {
        x_range = (x_range.0.min(r.year as f64), x_range.1.max(r.year as f64));
        y_range = (y_range.0.min(r.metascore), y_range.1.max(r.metascore));
    }

    let bins_x = if x_range.1 > x_range.0 { bins_x.max(1) } else { 1 };
    let bins_y = if y_range.1 > y_range.0 { bins_y.max(1) } else { 1 };

    let mut counts = vec![0usize; bins_x * bins_y];
    for r in subset {
        let ix = bin_index(r.year as f64, x_range, bins_x);
        let iy = bin_index(r.metascore, y_range, bins_y);
        counts[iy * bins_x + ix] += 1;
    }

    DensityGrid {
        bins_x,
        bins_y,
        x_range,
        y_range,
        counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;

    use crate::data::model::decade_of;

    fn record(year: i32, metascore: f64) -> GameRecord {
        GameRecord {
            name: String::new(),
            launch_date: NaiveDate::from_ymd_opt(year, 7, 7).unwrap(),
            year,
            metascore,
            rating: None,
            details: None,
            decade: decade_of(year),
        }
    }

    #[test]
    fn test_counts_sum_to_subset_size() {
        let records: Vec<GameRecord> = (0..40)
            .map(|i| record(1990 + i % 30, 70.0 + (i % 31) as f64))
            .collect();
        let subset: Vec<&GameRecord> = records.iter().collect();
        let grid = density(&subset, 30, 20);

        assert_eq!((grid.bins_x, grid.bins_y), (30, 20));
        assert_eq!(grid.total(), records.len());
        assert_eq!(grid.x_range, (1990.0, 2019.0));
        assert_eq!(grid.y_range, (70.0, 100.0));
    }

    #[test]
    fn test_upper_edge_goes_to_last_bin() {
        let lo = record(2000, 80.0);
        let hi = record(2010, 100.0);
        let grid = density(&[&lo, &hi], 5, 4);

        assert_eq!(grid.count(0, 0), 1);
        assert_eq!(grid.count(4, 3), 1);
        assert_eq!(grid.cell_bounds(4, 3), (2008.0, 2010.0, 95.0, 100.0));
    }

    #[test]
    fn test_degenerate_axes_collapse() {
        let a = record(2004, 90.0);
        let b = record(2004, 90.0);
        let grid = density(&[&a, &b], 30, 20);

        assert_eq!((grid.bins_x, grid.bins_y), (1, 1));
        assert_eq!(grid.count(0, 0), 2);
        assert_eq!(grid.max_count(), 2);
        assert_eq!(grid.cell_bounds(0, 0), (2003.5, 2004.5, 89.5, 90.5));
    }

    #[test]
    fn test_empty_subset_is_empty_grid() {
        let grid = density(&[], 30, 20);
        assert!(grid.is_empty());
        assert_eq!(grid.total(), 0);
    }
}
