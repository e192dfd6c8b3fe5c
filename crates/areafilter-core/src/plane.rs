use ndarray::Array2;

use crate::consts::LABEL_SLACK;
use crate::error::{AreaFilterError, Result};
use crate::sample::Sample;

/// Validate a strided plane layout and return the stride in samples.
///
/// `stride_bytes` is the byte distance between the starts of successive rows.
fn check_layout<T: Sample>(
    len: usize,
    width: usize,
    height: usize,
    stride_bytes: usize,
) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(AreaFilterError::InvalidPlane(format!(
            "dimensions must be positive, got {width}x{height}"
        )));
    }

    let sample_size = std::mem::size_of::<T>();
    if stride_bytes % sample_size != 0 {
        return Err(AreaFilterError::InvalidPlane(format!(
            "stride {stride_bytes} is not a multiple of the sample size {sample_size}"
        )));
    }
    let stride = stride_bytes / sample_size;
    if stride < width {
        return Err(AreaFilterError::InvalidPlane(format!(
            "stride {stride_bytes} bytes is shorter than a row of {width} samples"
        )));
    }

    let needed = (height - 1)
        .checked_mul(stride)
        .and_then(|n| n.checked_add(width))
        .ok_or_else(|| AreaFilterError::InvalidPlane("plane extent overflows".into()))?;
    if len < needed {
        return Err(AreaFilterError::InvalidPlane(format!(
            "buffer holds {len} samples, {needed} required"
        )));
    }

    // Labels are u32 and the forest needs LABEL_SLACK extra slots.
    let fits = width
        .checked_mul(height)
        .and_then(|n| n.checked_add(LABEL_SLACK))
        .is_some_and(|n| n <= u32::MAX as usize);
    if !fits {
        return Err(AreaFilterError::InvalidPlane(format!(
            "{width}x{height} exceeds the label range"
        )));
    }

    Ok(stride)
}

fn cast_bytes<T: Sample>(bytes: &[u8]) -> Result<&[T]> {
    bytemuck::try_cast_slice(bytes)
        .map_err(|e| AreaFilterError::InvalidPlane(format!("cannot view bytes as samples: {e}")))
}

fn cast_bytes_mut<T: Sample>(bytes: &mut [u8]) -> Result<&mut [T]> {
    bytemuck::try_cast_slice_mut(bytes)
        .map_err(|e| AreaFilterError::InvalidPlane(format!("cannot view bytes as samples: {e}")))
}

/// Read-only view of a strided plane.
#[derive(Clone, Copy, Debug)]
pub struct PlaneRef<'a, T> {
    data: &'a [T],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a, T: Sample> PlaneRef<'a, T> {
    pub fn new(data: &'a [T], width: usize, height: usize, stride_bytes: usize) -> Result<Self> {
        let stride = check_layout::<T>(data.len(), width, height, stride_bytes)?;
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// View a raw byte buffer as a plane. The buffer must be aligned for `T`.
    pub fn from_bytes(
        bytes: &'a [u8],
        width: usize,
        height: usize,
        stride_bytes: usize,
    ) -> Result<Self> {
        Self::new(cast_bytes(bytes)?, width, height, stride_bytes)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride_bytes(&self) -> usize {
        self.stride * std::mem::size_of::<T>()
    }

    /// The `width` samples of row `y`, without padding.
    pub fn row(&self, y: usize) -> &'a [T] {
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }

    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[y * self.stride + x]
    }
}

/// Write-only view of a strided plane.
#[derive(Debug)]
pub struct PlaneMut<'a, T> {
    data: &'a mut [T],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a, T: Sample> PlaneMut<'a, T> {
    pub fn new(
        data: &'a mut [T],
        width: usize,
        height: usize,
        stride_bytes: usize,
    ) -> Result<Self> {
        let stride = check_layout::<T>(data.len(), width, height, stride_bytes)?;
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// View a raw byte buffer as a writable plane. The buffer must be aligned for `T`.
    pub fn from_bytes(
        bytes: &'a mut [u8],
        width: usize,
        height: usize,
        stride_bytes: usize,
    ) -> Result<Self> {
        Self::new(cast_bytes_mut(bytes)?, width, height, stride_bytes)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        let start = y * self.stride;
        &mut self.data[start..start + self.width]
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        self.data[y * self.stride + x] = value;
    }

    /// Zero the `width` samples of every row. Row padding is left untouched.
    pub fn clear(&mut self) {
        for y in 0..self.height {
            self.row_mut(y).fill(T::zero());
        }
    }
}

/// An owned plane with a row stride of at least `width` samples.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
    stride: usize,
}

impl<T: Sample> Plane<T> {
    /// All-zero plane with tightly packed rows.
    pub fn zeroed(width: usize, height: usize) -> Self {
        Self {
            data: vec![T::zero(); width * height],
            width,
            height,
            stride: width,
        }
    }

    /// All-zero plane whose rows start `stride_bytes` apart.
    pub fn zeroed_with_stride(width: usize, height: usize, stride_bytes: usize) -> Result<Self> {
        let sample_size = std::mem::size_of::<T>();
        let len = (stride_bytes / sample_size).saturating_mul(height);
        let stride = check_layout::<T>(len, width, height, stride_bytes)?;
        Ok(Self {
            data: vec![T::zero(); stride * height],
            width,
            height,
            stride,
        })
    }

    /// Wrap tightly packed row-major samples.
    pub fn from_samples(data: Vec<T>, width: usize, height: usize) -> Result<Self> {
        if data.len() != width * height {
            return Err(AreaFilterError::InvalidPlane(format!(
                "{} samples do not form a {width}x{height} plane",
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
            stride: width,
        })
    }

    pub fn from_array2(array: &Array2<T>) -> Self {
        let (height, width) = array.dim();
        Self {
            data: array.iter().copied().collect(),
            width,
            height,
            stride: width,
        }
    }

    pub fn to_array2(&self) -> Array2<T> {
        Array2::from_shape_fn((self.height, self.width), |(y, x)| self.get(x, y))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride_bytes(&self) -> usize {
        self.stride * std::mem::size_of::<T>()
    }

    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[y * self.stride + x]
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        self.data[y * self.stride + x] = value;
    }

    /// Raw samples including row padding.
    pub fn samples(&self) -> &[T] {
        &self.data
    }

    pub fn as_plane_ref(&self) -> Result<PlaneRef<'_, T>> {
        PlaneRef::new(&self.data, self.width, self.height, self.stride_bytes())
    }

    pub fn as_plane_mut(&mut self) -> Result<PlaneMut<'_, T>> {
        let stride_bytes = self.stride_bytes();
        PlaneMut::new(&mut self.data, self.width, self.height, stride_bytes)
    }

    /// Number of samples (padding excluded) equal to `fg`.
    pub fn foreground_count(&self, fg: T) -> usize {
        (0..self.height)
            .map(|y| {
                let start = y * self.stride;
                self.data[start..start + self.width]
                    .iter()
                    .filter(|&&v| v == fg)
                    .count()
            })
            .sum()
    }
}
