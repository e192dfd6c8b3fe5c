use serde::{Deserialize, Serialize};

use crate::consts::{PERCENTILE_COUNT, PERCENTILE_STEP};

use super::labeling::Labeling;

/// Size summary of the components of one plane, taken before any selection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentStats {
    /// Number of distinct non-empty components.
    pub component_count: usize,
    /// Nearest-rank size percentiles at 0, 5, ..., 100. All zero without components.
    pub size_percentiles: [usize; PERCENTILE_COUNT],
    /// Component sizes in ascending order.
    pub component_sizes: Vec<usize>,
}

impl ComponentStats {
    /// Build the summary from unordered component sizes.
    pub fn from_sizes(mut sizes: Vec<usize>) -> Self {
        sizes.sort_unstable();
        let mut size_percentiles = [0; PERCENTILE_COUNT];
        if !sizes.is_empty() {
            for (i, slot) in size_percentiles.iter_mut().enumerate() {
                *slot = sizes[percentile_index(i * PERCENTILE_STEP, sizes.len())];
            }
        }
        Self {
            component_count: sizes.len(),
            size_percentiles,
            component_sizes: sizes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.component_count == 0
    }

    /// Number of foreground pixels in the plane.
    pub fn total_area(&self) -> usize {
        self.component_sizes.iter().sum()
    }

    /// Percentile value at `percent`, which must be a multiple of 5 up to 100.
    pub fn size_percentile(&self, percent: usize) -> Option<usize> {
        if percent % PERCENTILE_STEP != 0 {
            return None;
        }
        self.size_percentiles.get(percent / PERCENTILE_STEP).copied()
    }

    /// Sizes from largest to smallest.
    pub fn sizes_descending(&self) -> impl Iterator<Item = usize> + '_ {
        self.component_sizes.iter().rev().copied()
    }
}

/// Index into an ascending list of `n > 0` values for the `percent` nearest-rank
/// percentile: `percent / 100 * (n - 1)` rounded half up, clamped to `n - 1`.
///
/// Computed in exact integers, so half-way marks always round up. Single
/// precision float evaluation lands one lower at some of them (n = 91, p = 65).
pub fn percentile_index(percent: usize, n: usize) -> usize {
    debug_assert!(n > 0);
    let last = n - 1;
    ((percent * last + 50) / 100).min(last)
}

/// Pixel count of every component, indexed by root label.
#[derive(Clone, Debug)]
pub struct ComponentSizes {
    by_root: Vec<usize>,
}

impl ComponentSizes {
    /// Size of the component whose root is `root`, `0` for non-roots and background.
    pub fn get(&self, root: u32) -> usize {
        self.by_root.get(root as usize).copied().unwrap_or(0)
    }
}

/// Resolve every label of `labeling` to its root in place, count the pixels of
/// each component and summarize the sizes.
pub fn component_stats(labeling: &mut Labeling) -> (ComponentStats, ComponentSizes) {
    let mut by_root = vec![0usize; labeling.max_label as usize + 1];

    for i in 0..labeling.labels.len() {
        let label = labeling.labels[i];
        if label == 0 {
            continue;
        }
        let root = labeling.forest.find(label);
        labeling.labels[i] = root;
        by_root[root as usize] += 1;
    }

    let sizes: Vec<usize> = by_root.iter().skip(1).copied().filter(|&s| s > 0).collect();
    (ComponentStats::from_sizes(sizes), ComponentSizes { by_root })
}
