use std::path::Path;

use image::{ColorType, DynamicImage, ImageBuffer, Pixel};

use crate::error::{AreaFilterError, Result};
use crate::format::{SampleFormat, VideoFormat};
use crate::frame::{Frame, PlaneData};
use crate::plane::Plane;
use crate::sample::Sample;

/// Load an image file as a frame.
///
/// Grayscale images give one plane, color images three (R, G, B). Alpha is
/// dropped. 8 and 16 bit images keep their integer samples; anything else is
/// converted to 32 bit float RGB.
pub fn load_frame(path: &Path) -> Result<Frame> {
    let img = image::open(path)?;
    let (w, h) = (img.width() as usize, img.height() as usize);

    match img.color() {
        ColorType::L8 | ColorType::La8 => build_frame(
            VideoFormat::gray(SampleFormat::integer(8)),
            img.into_luma8().into_raw(),
            w,
            h,
            PlaneData::U8,
        ),
        ColorType::L16 | ColorType::La16 => build_frame(
            VideoFormat::gray(SampleFormat::integer(16)),
            img.into_luma16().into_raw(),
            w,
            h,
            PlaneData::U16,
        ),
        ColorType::Rgb8 | ColorType::Rgba8 => build_frame(
            VideoFormat::rgb(SampleFormat::integer(8)),
            img.into_rgb8().into_raw(),
            w,
            h,
            PlaneData::U8,
        ),
        ColorType::Rgb16 | ColorType::Rgba16 => build_frame(
            VideoFormat::rgb(SampleFormat::integer(16)),
            img.into_rgb16().into_raw(),
            w,
            h,
            PlaneData::U16,
        ),
        _ => build_frame(
            VideoFormat::rgb(SampleFormat::float32()),
            img.into_rgb32f().into_raw(),
            w,
            h,
            PlaneData::F32,
        ),
    }
}

/// Split interleaved samples into one plane per channel.
fn build_frame<T: Sample>(
    format: VideoFormat,
    raw: Vec<T>,
    width: usize,
    height: usize,
    wrap: fn(Plane<T>) -> PlaneData,
) -> Result<Frame> {
    let channels = format.num_planes;
    let planes = if channels == 1 {
        vec![wrap(Plane::from_samples(raw, width, height)?)]
    } else {
        (0..channels)
            .map(|c| {
                let samples = raw.iter().skip(c).step_by(channels).copied().collect();
                Plane::from_samples(samples, width, height).map(wrap)
            })
            .collect::<Result<Vec<_>>>()?
    };
    Frame::new(format, planes)
}

fn interleave<T: Sample>(planes: &[&Plane<T>]) -> Vec<T> {
    let (w, h) = (planes[0].width(), planes[0].height());
    let mut out = Vec::with_capacity(w * h * planes.len());
    for y in 0..h {
        for x in 0..w {
            out.extend(planes.iter().map(|p| p.get(x, y)));
        }
    }
    out
}

fn buffer<P: Pixel>(
    width: usize,
    height: usize,
    data: Vec<P::Subpixel>,
) -> Result<ImageBuffer<P, Vec<P::Subpixel>>> {
    ImageBuffer::from_raw(width as u32, height as u32, data).ok_or_else(|| {
        AreaFilterError::UnsupportedLayout(format!("buffer does not fit {width}x{height}"))
    })
}

/// Save a frame; the file format follows the extension.
///
/// Float frames are written as RGB float, so the target format must
/// support 32 bit float samples (e.g. OpenEXR).
pub fn save_frame(frame: &Frame, path: &Path) -> Result<()> {
    let format = frame.format();
    if format.sub_sampling_w != 0 || format.sub_sampling_h != 0 {
        return Err(AreaFilterError::UnsupportedLayout(
            "sub-sampled frames cannot be written as images".into(),
        ));
    }

    let (w, h) = (frame.width(), frame.height());
    let img = match frame.planes() {
        [PlaneData::U8(p)] => DynamicImage::ImageLuma8(buffer(w, h, interleave(&[p]))?),
        [PlaneData::U16(p)] => DynamicImage::ImageLuma16(buffer(w, h, interleave(&[p]))?),
        [PlaneData::F32(p)] => DynamicImage::ImageRgb32F(buffer(w, h, interleave(&[p, p, p]))?),
        [PlaneData::U8(r), PlaneData::U8(g), PlaneData::U8(b)] => {
            DynamicImage::ImageRgb8(buffer(w, h, interleave(&[r, g, b]))?)
        }
        [PlaneData::U16(r), PlaneData::U16(g), PlaneData::U16(b)] => {
            DynamicImage::ImageRgb16(buffer(w, h, interleave(&[r, g, b]))?)
        }
        [PlaneData::F32(r), PlaneData::F32(g), PlaneData::F32(b)] => {
            DynamicImage::ImageRgb32F(buffer(w, h, interleave(&[r, g, b]))?)
        }
        planes => {
            return Err(AreaFilterError::UnsupportedLayout(format!(
                "{} planes of {:?}",
                planes.len(),
                planes[0].storage()
            )))
        }
    };

    img.save(path)?;
    Ok(())
}
