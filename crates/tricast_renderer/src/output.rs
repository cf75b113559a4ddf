//! Converting a rendered buffer to 8-bit RGB and writing it to disk.

use std::path::Path;

use image::{Rgb, RgbImage};
use thiserror::Error;
use tricast_math::{Color, Interval};

use crate::ImageBuffer;

/// Errors that can occur while saving a render.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Cannot save an empty {width}x{height} image")]
    EmptyImage { width: u32, height: u32 },
}

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

const CHANNEL_RANGE: Interval = Interval {
    min: 0.0,
    max: 255.0,
};

/// Convert a normalized color to 8-bit RGB.
///
/// Each channel is scaled by 255 and clamped; no gamma is applied.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let scaled = 255.0 * color;
    [
        CHANNEL_RANGE.clamp(scaled.x) as u8,
        CHANNEL_RANGE.clamp(scaled.y) as u8,
        CHANNEL_RANGE.clamp(scaled.z) as u8,
    ]
}

/// Lay the buffer out as a raster.
///
/// Cell `(i, j)` goes to raster pixel `x = i, y = j`, matching the camera
/// convention where `i` drives the horizontal axis. The raster is therefore
/// `height` pixels wide and `width` pixels tall.
pub fn to_rgb_image(buffer: &ImageBuffer) -> RgbImage {
    let mut raster = RgbImage::new(buffer.height, buffer.width);

    for (i, row) in buffer.rows().enumerate() {
        for (j, &color) in row.iter().enumerate() {
            raster.put_pixel(i as u32, j as u32, Rgb(color_to_rgb(color)));
        }
    }

    raster
}

/// Save the buffer to `path`. The file extension picks the format.
pub fn save_image(buffer: &ImageBuffer, path: impl AsRef<Path>) -> OutputResult<()> {
    if buffer.is_empty() {
        return Err(OutputError::EmptyImage {
            width: buffer.width,
            height: buffer.height,
        });
    }

    let path = path.as_ref();
    to_rgb_image(buffer).save(path)?;
    log::info!("Saved {}x{} image to {}", buffer.height, buffer.width, path.display());

    Ok(())
}
