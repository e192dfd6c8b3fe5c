pub mod image_io;
pub mod props_io;
