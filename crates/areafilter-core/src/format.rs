use serde::{Deserialize, Serialize};

use crate::consts::FLOAT_FOREGROUND;

/// Numeric kind of a sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleType {
    Integer,
    Float,
}

impl std::fmt::Display for SampleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
        }
    }
}

/// In-memory representation chosen for a sample format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SampleStorage {
    U8,
    U16,
    F32,
}

/// The single sample value treated as foreground for a format.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ForegroundValue {
    U8(u8),
    U16(u16),
    F32(f32),
}

impl ForegroundValue {
    pub fn storage(&self) -> SampleStorage {
        match self {
            Self::U8(_) => SampleStorage::U8,
            Self::U16(_) => SampleStorage::U16,
            Self::F32(_) => SampleStorage::F32,
        }
    }
}

impl std::fmt::Display for ForegroundValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::U8(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::F32(v) => write!(f, "{v}"),
        }
    }
}

/// Sample type plus bit depth of every plane in a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleFormat {
    pub sample_type: SampleType,
    pub bits_per_sample: u8,
}

impl SampleFormat {
    pub fn integer(bits_per_sample: u8) -> Self {
        Self {
            sample_type: SampleType::Integer,
            bits_per_sample,
        }
    }

    pub fn float32() -> Self {
        Self {
            sample_type: SampleType::Float,
            bits_per_sample: 32,
        }
    }

    /// 8-16 bit integer or 32 bit float.
    pub fn is_supported(&self) -> bool {
        match self.sample_type {
            SampleType::Integer => (8..=16).contains(&self.bits_per_sample),
            SampleType::Float => self.bits_per_sample == 32,
        }
    }

    pub fn storage(&self) -> Option<SampleStorage> {
        if !self.is_supported() {
            return None;
        }
        Some(match self.sample_type {
            SampleType::Integer if self.bits_per_sample == 8 => SampleStorage::U8,
            SampleType::Integer => SampleStorage::U16,
            SampleType::Float => SampleStorage::F32,
        })
    }

    /// Foreground value for this format: the maximum code value for integer
    /// formats (`2^bits - 1`) and `1.0` for float. `None` for unsupported formats.
    pub fn foreground_value(&self) -> Option<ForegroundValue> {
        Some(match self.storage()? {
            SampleStorage::U8 => ForegroundValue::U8(u8::MAX),
            SampleStorage::U16 => {
                ForegroundValue::U16(((1u32 << self.bits_per_sample) - 1) as u16)
            }
            SampleStorage::F32 => ForegroundValue::F32(FLOAT_FOREGROUND),
        })
    }
}

/// Layout of a frame: sample format, plane count and chroma sub-sampling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoFormat {
    pub sample: SampleFormat,
    pub num_planes: usize,
    /// log2 horizontal sub-sampling of planes 1 and 2.
    pub sub_sampling_w: u8,
    /// log2 vertical sub-sampling of planes 1 and 2.
    pub sub_sampling_h: u8,
}

impl VideoFormat {
    pub fn gray(sample: SampleFormat) -> Self {
        Self {
            sample,
            num_planes: 1,
            sub_sampling_w: 0,
            sub_sampling_h: 0,
        }
    }

    pub fn rgb(sample: SampleFormat) -> Self {
        Self {
            sample,
            num_planes: 3,
            sub_sampling_w: 0,
            sub_sampling_h: 0,
        }
    }

    pub fn yuv(sample: SampleFormat, sub_sampling_w: u8, sub_sampling_h: u8) -> Self {
        Self {
            sample,
            num_planes: 3,
            sub_sampling_w,
            sub_sampling_h,
        }
    }

    /// Dimensions of `plane` for a frame of `width` x `height`.
    pub fn plane_dimensions(&self, plane: usize, width: usize, height: usize) -> (usize, usize) {
        if plane == 0 {
            (width, height)
        } else {
            (width >> self.sub_sampling_w, height >> self.sub_sampling_h)
        }
    }
}

/// Stream-level description handed to filter construction.
///
/// A missing format or zero dimensions describe a stream whose frames may
/// change format, which the filters reject.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub format: Option<VideoFormat>,
    pub width: usize,
    pub height: usize,
}

impl VideoInfo {
    pub fn constant(format: VideoFormat, width: usize, height: usize) -> Self {
        Self {
            format: Some(format),
            width,
            height,
        }
    }

    pub fn variable() -> Self {
        Self {
            format: None,
            width: 0,
            height: 0,
        }
    }

    pub fn is_constant_format(&self) -> bool {
        self.format.is_some() && self.width > 0 && self.height > 0
    }
}
