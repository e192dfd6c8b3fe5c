use rayon::prelude::*;
use tracing::{debug, info};

use crate::components::ComponentStats;
use crate::consts::{
    COMPONENT_COUNT_KEY, PARALLEL_FRAME_THRESHOLD, PERCENTILE_STEP, SIZE_PERCENTILE_KEY_PREFIX,
};
use crate::error::{AreaFilterError, Result};
use crate::format::VideoInfo;
use crate::frame::{Frame, FrameProps, PlaneData};
use crate::plane::Plane;
use crate::sample::Sample;

use super::config::{FilterArgs, FilterConfig, FilterKind};
use super::process::filter_plane;

/// Output of filtering one frame.
#[derive(Clone, Debug)]
pub struct FilteredFrame {
    pub frame: Frame,
    /// Stats of every plane, in plane order.
    pub plane_stats: Vec<ComponentStats>,
}

/// A configured area or coverage filter applied frame by frame.
///
/// Holds no mutable state, so one instance can filter any number of frames
/// concurrently.
#[derive(Clone, Debug)]
pub struct AreaFilter {
    config: FilterConfig,
}

impl AreaFilter {
    /// Validate `args` for a stream described by `info`.
    pub fn new(kind: FilterKind, info: &VideoInfo, args: &FilterArgs) -> Result<Self> {
        let config = FilterConfig::from_args(kind, info, args)?;
        info!(
            filter = %kind,
            policy = %config.policy,
            connectivity = %config.connectivity,
            foreground = %config.foreground,
            "Filter configured"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Filter every plane of `src` into a new frame.
    ///
    /// Source props are carried over; with `write_props` the first plane's
    /// stats replace `ComponentCount` and `SizePercentile*`.
    pub fn filter_frame(&self, src: &Frame) -> Result<FilteredFrame> {
        if src.format() != &self.config.format {
            return Err(AreaFilterError::FormatMismatch(format!(
                "frame is {:?}, filter expects {:?}",
                src.format(),
                self.config.format
            )));
        }

        let mut planes = Vec::with_capacity(src.planes().len());
        let mut plane_stats = Vec::with_capacity(src.planes().len());
        for plane in src.planes() {
            let (filtered, stats) = self.filter_plane_data(plane)?;
            planes.push(filtered);
            plane_stats.push(stats);
        }

        let mut frame = Frame::new(self.config.format, planes)?;
        frame.props = src.props.clone();
        if self.config.write_props {
            if let Some(first) = plane_stats.first() {
                write_stats_props(&mut frame.props, first);
            }
        }

        debug!(
            planes = plane_stats.len(),
            components = plane_stats.first().map_or(0, |s| s.component_count),
            "Frame filtered"
        );
        Ok(FilteredFrame { frame, plane_stats })
    }

    /// Filter independent frames, in parallel when there are enough of them.
    /// Output order matches input order.
    pub fn filter_frames(&self, frames: &[Frame]) -> Result<Vec<FilteredFrame>> {
        let results = if frames.len() >= PARALLEL_FRAME_THRESHOLD {
            frames
                .par_iter()
                .map(|f| self.filter_frame(f))
                .collect::<Result<Vec<_>>>()?
        } else {
            frames
                .iter()
                .map(|f| self.filter_frame(f))
                .collect::<Result<Vec<_>>>()?
        };
        info!(count = results.len(), filter = %self.config.kind, "Frames filtered");
        Ok(results)
    }

    fn filter_plane_data(&self, plane: &PlaneData) -> Result<(PlaneData, ComponentStats)> {
        Ok(match plane {
            PlaneData::U8(p) => {
                let (out, stats) = self.filter_owned(p)?;
                (PlaneData::U8(out), stats)
            }
            PlaneData::U16(p) => {
                let (out, stats) = self.filter_owned(p)?;
                (PlaneData::U16(out), stats)
            }
            PlaneData::F32(p) => {
                let (out, stats) = self.filter_owned(p)?;
                (PlaneData::F32(out), stats)
            }
        })
    }

    fn filter_owned<T: Sample>(&self, src: &Plane<T>) -> Result<(Plane<T>, ComponentStats)> {
        let fg = T::from_foreground(self.config.foreground).ok_or_else(|| {
            AreaFilterError::FormatMismatch(format!(
                "plane samples do not match foreground value {:?}",
                self.config.foreground
            ))
        })?;

        let mut dst = Plane::zeroed(src.width(), src.height());
        let stats = filter_plane(
            &src.as_plane_ref()?,
            &mut dst.as_plane_mut()?,
            self.config.connectivity,
            self.config.policy,
            fg,
        )?;
        Ok((dst, stats))
    }
}

/// Property key of the `percent` size percentile, e.g. `SizePercentile25`.
pub fn size_percentile_key(percent: usize) -> String {
    format!("{SIZE_PERCENTILE_KEY_PREFIX}{percent}")
}

/// Store `stats` as `ComponentCount` and `SizePercentile0` .. `SizePercentile100`,
/// replacing existing values.
pub fn write_stats_props(props: &mut FrameProps, stats: &ComponentStats) {
    props.insert(COMPONENT_COUNT_KEY.to_string(), stats.component_count as i64);
    for (i, &value) in stats.size_percentiles.iter().enumerate() {
        props.insert(size_percentile_key(i * PERCENTILE_STEP), value as i64);
    }
}
