use std::path::Path;

use enough::Stop;
use log::info;

use crate::bmp;
use crate::error::BitmapError;
use crate::image::Image;

/// Builder for encoding an [`Image`] as a 24-bit BMP.
///
/// Channels are scaled by 255, clamped and truncated; see
/// [`crate::Color::to_bgr8`].
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeRequest {
    pixels_per_meter: (i32, i32),
}

impl EncodeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Horizontal and vertical resolution written to the info header.
    /// Defaults to 0 (unspecified).
    pub fn with_pixels_per_meter(mut self, x: i32, y: i32) -> Self {
        self.pixels_per_meter = (x, y);
        self
    }

    pub fn encode(&self, image: &Image, stop: impl Stop) -> Result<Vec<u8>, BitmapError> {
        bmp::encode_bmp(image, self.pixels_per_meter, &stop)
    }

    /// Encode and write to `path`, creating or truncating the file.
    pub fn write_file(
        &self,
        path: impl AsRef<Path>,
        image: &Image,
        stop: impl Stop,
    ) -> Result<(), BitmapError> {
        let path = path.as_ref();
        let bytes = self.encode(image, stop)?;
        std::fs::write(path, &bytes).map_err(|e| BitmapError::io(path, e))?;
        info!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}

/// Encode with default settings.
pub fn encode(image: &Image, stop: impl Stop) -> Result<Vec<u8>, BitmapError> {
    EncodeRequest::new().encode(image, stop)
}

/// Encode with default settings and write to `path`.
pub fn write_file(path: impl AsRef<Path>, image: &Image, stop: impl Stop) -> Result<(), BitmapError> {
    EncodeRequest::new().write_file(path, image, stop)
}
