use tracing::debug;

use crate::components::{component_stats, label_plane, ComponentStats, Connectivity};
use crate::error::{AreaFilterError, Result};
use crate::plane::{PlaneMut, PlaneRef};
use crate::sample::Sample;

use super::selection::{write_back, SelectionPolicy};

/// Label the components of `src`, summarize their sizes, and write the
/// surviving components into `dst` as `fg` over a zeroed background.
///
/// The returned stats describe `src` before selection.
pub fn filter_plane<T: Sample>(
    src: &PlaneRef<'_, T>,
    dst: &mut PlaneMut<'_, T>,
    connectivity: Connectivity,
    policy: SelectionPolicy,
    fg: T,
) -> Result<ComponentStats> {
    if src.width() != dst.width() || src.height() != dst.height() {
        return Err(AreaFilterError::PlaneMismatch {
            src_width: src.width(),
            src_height: src.height(),
            dst_width: dst.width(),
            dst_height: dst.height(),
        });
    }

    let mut labeling = label_plane(src, fg, connectivity);
    let (stats, sizes) = component_stats(&mut labeling);
    let threshold = policy.size_threshold(&stats);

    debug!(
        width = src.width(),
        height = src.height(),
        provisional_labels = labeling.max_label,
        components = stats.component_count,
        threshold = ?threshold,
        "Plane labeled"
    );

    write_back(&labeling, &sizes, threshold, dst, fg);
    Ok(stats)
}
