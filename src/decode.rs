use std::path::Path;

use enough::Stop;
use log::info;

use crate::bmp::{self, Strictness};
use crate::error::BitmapError;
use crate::image::Image;
use crate::limits::Limits;

/// Builder for decoding BMP bytes into an [`Image`].
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    strictness: Strictness,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            strictness: Strictness::default(),
        }
    }

    /// Reject images larger than `limits` before allocating for them.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn decode(self, stop: impl Stop) -> Result<Image, BitmapError> {
        bmp::decode_bmp(self.data, self.limits, self.strictness, &stop)
    }
}

/// Decode BMP bytes with default settings.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<Image, BitmapError> {
    DecodeRequest::new(data).decode(stop)
}

/// Read and decode a BMP file with default settings.
///
/// The file is read whole and closed before decoding starts.
pub fn read_file(path: impl AsRef<Path>, stop: impl Stop) -> Result<Image, BitmapError> {
    read_file_with(path, None, Strictness::default(), stop)
}

/// Read and decode a BMP file with explicit limits and strictness.
pub fn read_file_with(
    path: impl AsRef<Path>,
    limits: Option<&Limits>,
    strictness: Strictness,
    stop: impl Stop,
) -> Result<Image, BitmapError> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| BitmapError::io(path, e))?;
    let image = bmp::decode_bmp(&data, limits, strictness, &stop)?;
    info!(
        "read {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}
