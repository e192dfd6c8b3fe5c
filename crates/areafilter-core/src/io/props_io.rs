use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{AreaFilterError, Result};
use crate::frame::{Frame, FrameProps};

use super::image_io::save_frame;

/// Sidecar path holding the props of the image at `image_path`:
/// `mask_filtered.png` maps to `mask_filtered.props.toml`.
pub fn props_path(image_path: &Path) -> PathBuf {
    let stem = image_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".into());
    image_path.with_file_name(format!("{stem}.props.toml"))
}

pub fn save_props(props: &FrameProps, path: &Path) -> Result<()> {
    let toml_str = toml::to_string(props).map_err(|e| AreaFilterError::Props(e.to_string()))?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

pub fn load_props(path: &Path) -> Result<FrameProps> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| AreaFilterError::Props(e.to_string()))
}

/// Save `frame` as an image and publish its props next to it.
///
/// A frame without props leaves no sidecar; one left over from an earlier
/// save to the same path is removed. Returns the sidecar path if written.
pub fn save_frame_with_props(frame: &Frame, path: &Path) -> Result<Option<PathBuf>> {
    save_frame(frame, path)?;

    let sidecar = props_path(path);
    if frame.props.is_empty() {
        if sidecar.exists() {
            std::fs::remove_file(&sidecar)?;
        }
        return Ok(None);
    }

    save_props(&frame.props, &sidecar)?;
    debug!(path = %sidecar.display(), count = frame.props.len(), "Props saved");
    Ok(Some(sidecar))
}
