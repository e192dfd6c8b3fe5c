use thiserror::Error;

#[derive(Error, Debug)]
pub enum AreaFilterError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    /// Filter construction was rejected. The message carries the filter name prefix.
    #[error("{0}")]
    Config(String),

    #[error("Invalid plane: {0}")]
    InvalidPlane(String),

    #[error("Plane dimensions differ: source {src_width}x{src_height}, destination {dst_width}x{dst_height}")]
    PlaneMismatch {
        src_width: usize,
        src_height: usize,
        dst_width: usize,
        dst_height: usize,
    },

    #[error("Frame does not match the configured format: {0}")]
    FormatMismatch(String),

    #[error("Unsupported image layout: {0}")]
    UnsupportedLayout(String),

    #[error("Frame props error: {0}")]
    Props(String),
}

pub type Result<T> = std::result::Result<T, AreaFilterError>;
