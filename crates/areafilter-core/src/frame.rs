use std::collections::BTreeMap;

use crate::error::{AreaFilterError, Result};
use crate::format::{SampleStorage, VideoFormat, VideoInfo};
use crate::plane::Plane;

/// Per-frame integer properties, ordered by key.
pub type FrameProps = BTreeMap<String, i64>;

/// One plane of a frame in its native sample representation.
#[derive(Clone, Debug, PartialEq)]
pub enum PlaneData {
    U8(Plane<u8>),
    U16(Plane<u16>),
    F32(Plane<f32>),
}

impl PlaneData {
    pub fn width(&self) -> usize {
        match self {
            Self::U8(p) => p.width(),
            Self::U16(p) => p.width(),
            Self::F32(p) => p.width(),
        }
    }

    pub fn height(&self) -> usize {
        match self {
            Self::U8(p) => p.height(),
            Self::U16(p) => p.height(),
            Self::F32(p) => p.height(),
        }
    }

    pub fn storage(&self) -> SampleStorage {
        match self {
            Self::U8(_) => SampleStorage::U8,
            Self::U16(_) => SampleStorage::U16,
            Self::F32(_) => SampleStorage::F32,
        }
    }
}

/// A frame: one plane per channel plus its properties.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    format: VideoFormat,
    planes: Vec<PlaneData>,
    pub props: FrameProps,
}

impl Frame {
    /// Build a frame, checking plane count, sample storage and plane
    /// dimensions against `format`.
    pub fn new(format: VideoFormat, planes: Vec<PlaneData>) -> Result<Self> {
        if planes.is_empty() || planes.len() != format.num_planes {
            return Err(AreaFilterError::FormatMismatch(format!(
                "expected {} planes, got {}",
                format.num_planes,
                planes.len()
            )));
        }
        let storage = format.sample.storage().ok_or_else(|| {
            AreaFilterError::FormatMismatch(format!(
                "{} bit {} samples cannot be stored",
                format.sample.bits_per_sample, format.sample.sample_type
            ))
        })?;

        let (width, height) = (planes[0].width(), planes[0].height());
        for (i, plane) in planes.iter().enumerate() {
            if plane.storage() != storage {
                return Err(AreaFilterError::FormatMismatch(format!(
                    "plane {i} holds {:?} samples, format requires {:?}",
                    plane.storage(),
                    storage
                )));
            }
            let expected = format.plane_dimensions(i, width, height);
            if (plane.width(), plane.height()) != expected {
                return Err(AreaFilterError::FormatMismatch(format!(
                    "plane {i} is {}x{}, expected {}x{}",
                    plane.width(),
                    plane.height(),
                    expected.0,
                    expected.1
                )));
            }
        }

        Ok(Self {
            format,
            planes,
            props: FrameProps::new(),
        })
    }

    pub fn format(&self) -> &VideoFormat {
        &self.format
    }

    pub fn planes(&self) -> &[PlaneData] {
        &self.planes
    }

    pub fn plane(&self, index: usize) -> Option<&PlaneData> {
        self.planes.get(index)
    }

    pub fn width(&self) -> usize {
        self.planes[0].width()
    }

    pub fn height(&self) -> usize {
        self.planes[0].height()
    }

    pub fn video_info(&self) -> VideoInfo {
        VideoInfo::constant(self.format, self.width(), self.height())
    }
}
