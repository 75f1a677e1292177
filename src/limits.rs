use crate::error::BitmapError;
use crate::pixel::Color;

/// Caps on the geometry a BMP header may declare.
///
/// Checked against the header before any pixel memory is allocated. Every
/// cap is optional and [`Limits::default`] accepts any size.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum `width * height`.
    pub max_pixels: Option<u64>,
    /// Maximum size of the decoded [`crate::Image`] buffer, which holds
    /// three `f32` per pixel (four times the 24-bit payload).
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Decoded buffer size for a `width` x `height` image, saturating.
    pub(crate) fn decoded_bytes(width: u32, height: u32) -> u64 {
        (u64::from(width) * u64::from(height)).saturating_mul(size_of::<Color>() as u64)
    }

    /// Reject a header whose dimensions exceed any cap.
    pub(crate) fn check_header(&self, width: u32, height: u32) -> Result<(), BitmapError> {
        let caps = [
            ("width", u64::from(width), self.max_width),
            ("height", u64::from(height), self.max_height),
            ("pixel count", u64::from(width) * u64::from(height), self.max_pixels),
            ("decoded size", Self::decoded_bytes(width, height), self.max_memory_bytes),
        ];
        for (what, value, cap) in caps {
            match cap {
                Some(cap) if value > cap => {
                    return Err(BitmapError::LimitExceeded(format!(
                        "{width}x{height} image: {what} {value} is over the limit of {cap}"
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }
}
