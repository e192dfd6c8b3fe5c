use std::fmt::Debug;

use bytemuck::Pod;
use num_traits::Zero;

use crate::format::ForegroundValue;

/// A pixel sample type the component filter can operate on.
///
/// Only equality against the foreground value and the zero (background) value
/// are needed by the algorithm.
pub trait Sample: Copy + PartialEq + Zero + Pod + Send + Sync + Debug + 'static {
    /// Extract the foreground value for this sample type, if `fg` carries one.
    fn from_foreground(fg: ForegroundValue) -> Option<Self>;
}

impl Sample for u8 {
    fn from_foreground(fg: ForegroundValue) -> Option<Self> {
        match fg {
            ForegroundValue::U8(v) => Some(v),
            _ => None,
        }
    }
}

impl Sample for u16 {
    fn from_foreground(fg: ForegroundValue) -> Option<Self> {
        match fg {
            ForegroundValue::U16(v) => Some(v),
            _ => None,
        }
    }
}

impl Sample for f32 {
    fn from_foreground(fg: ForegroundValue) -> Option<Self> {
        match fg {
            ForegroundValue::F32(v) => Some(v),
            _ => None,
        }
    }
}
