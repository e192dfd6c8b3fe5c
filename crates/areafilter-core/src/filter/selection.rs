use serde::{Deserialize, Serialize};

use crate::components::{ComponentSizes, ComponentStats, Labeling};
use crate::plane::PlaneMut;
use crate::sample::Sample;

/// Rule deciding which components survive filtering.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum SelectionPolicy {
    /// Keep components with at least `min_area` pixels.
    AbsoluteArea { min_area: usize },
    /// Keep the largest components until they cover `percentage` percent of
    /// the foreground. Components tied with the last one kept are kept too.
    PercentageCoverage { percentage: f64 },
}

impl SelectionPolicy {
    /// Minimum component size that survives, or `None` if nothing survives.
    pub fn size_threshold(&self, stats: &ComponentStats) -> Option<usize> {
        match *self {
            Self::AbsoluteArea { min_area } => Some(min_area),
            Self::PercentageCoverage { percentage } => percentage_threshold(stats, percentage),
        }
    }
}

impl std::fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AbsoluteArea { min_area } => write!(f, "Area >= {min_area} px"),
            Self::PercentageCoverage { percentage } => write!(f, "Largest covering {percentage}%"),
        }
    }
}

/// Pixels to cover for `percentage` of `total_area`, rounded half up.
pub fn area_to_keep(total_area: usize, percentage: f64) -> usize {
    (total_area as f64 * percentage / 100.0 + 0.5).floor() as usize
}

/// Walk the sizes from largest to smallest and return the size at which the
/// running total first reaches [`area_to_keep`].
pub fn percentage_threshold(stats: &ComponentStats, percentage: f64) -> Option<usize> {
    let target = area_to_keep(stats.total_area(), percentage);
    let mut current_area = 0;
    for size in stats.sizes_descending() {
        current_area += size;
        if current_area >= target {
            return Some(size);
        }
    }
    None
}

/// Clear `dst`, then write `fg` for every pixel whose component is at least
/// `threshold` pixels. `labeling` must already be resolved to roots.
pub fn write_back<T: Sample>(
    labeling: &Labeling,
    sizes: &ComponentSizes,
    threshold: Option<usize>,
    dst: &mut PlaneMut<'_, T>,
    fg: T,
) {
    dst.clear();
    let Some(threshold) = threshold else {
        return;
    };

    for y in 0..labeling.height {
        let labels = &labeling.labels[y * labeling.width..(y + 1) * labeling.width];
        let row = dst.row_mut(y);
        for (out, &root) in row.iter_mut().zip(labels) {
            if root != 0 && sizes.get(root) >= threshold {
                *out = fg;
            }
        }
    }
}
