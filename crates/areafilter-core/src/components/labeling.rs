use crate::consts::LABEL_SLACK;
use crate::plane::PlaneRef;
use crate::sample::Sample;

use super::connectivity::Connectivity;
use super::disjoint_set::DisjointSet;

/// Provisional labels of one plane and the equivalences found between them.
///
/// `labels` is row-major without padding, `0` marks background. A label is
/// some member of its component's class, not necessarily the root.
#[derive(Clone, Debug)]
pub struct Labeling {
    pub labels: Vec<u32>,
    pub width: usize,
    pub height: usize,
    /// Highest label handed out, `0` if the plane has no foreground.
    pub max_label: u32,
    pub forest: DisjointSet,
}

impl Labeling {
    pub fn label_at(&self, x: usize, y: usize) -> u32 {
        self.labels[y * self.width + x]
    }

    /// Canonical component label of a pixel, `0` for background.
    pub fn root_at(&mut self, x: usize, y: usize) -> u32 {
        match self.label_at(x, y) {
            0 => 0,
            label => self.forest.find(label),
        }
    }
}

/// Single raster pass assigning provisional labels to every pixel equal to `fg`.
///
/// Only neighbors earlier in scan order can already hold a label, so a pixel
/// takes the smallest label among them and merges the others into it.
pub fn label_plane<T: Sample>(
    src: &PlaneRef<'_, T>,
    fg: T,
    connectivity: Connectivity,
) -> Labeling {
    let width = src.width();
    let height = src.height();
    let offsets = connectivity.scan_offsets();

    let mut labels = vec![0u32; width * height];
    let mut forest = DisjointSet::new(width * height + LABEL_SLACK);
    let mut next_label: u32 = 1;

    // At most four scan-order neighbors exist for either connectivity.
    let mut found = [0u32; 4];

    for y in 0..height {
        let row = src.row(y);
        for x in 0..width {
            if row[x] != fg {
                continue;
            }

            let mut count = 0;
            let mut min_label = 0u32;
            for off in offsets {
                let Some(ny) = y.checked_add_signed(off.dy) else {
                    continue;
                };
                let Some(nx) = x.checked_add_signed(off.dx) else {
                    continue;
                };
                if nx >= width {
                    continue;
                }

                let neighbor = labels[ny * width + nx];
                if neighbor > 0 {
                    found[count] = neighbor;
                    count += 1;
                    if min_label == 0 || neighbor < min_label {
                        min_label = neighbor;
                    }
                }
            }

            let idx = y * width + x;
            if min_label == 0 {
                labels[idx] = next_label;
                next_label += 1;
            } else {
                labels[idx] = min_label;
                for &neighbor in &found[..count] {
                    if neighbor != min_label {
                        forest.merge(min_label, neighbor);
                    }
                }
            }
        }
    }

    Labeling {
        labels,
        width,
        height,
        max_label: next_label - 1,
        forest,
    }
}
