//! BMP encoder: uncompressed 24-bit, 40-byte info header.

use enough::Stop;

use super::header::{FileHeader, InfoHeader};
use super::{encoded_size, row_padding};
use crate::error::BitmapError;
use crate::image::Image;

/// Encode an [`Image`] to BMP bytes. Rows are written in stored order.
pub(crate) fn encode_bmp(
    image: &Image,
    pixels_per_meter: (i32, i32),
    stop: &dyn Stop,
) -> Result<Vec<u8>, BitmapError> {
    let (width, height) = (image.width(), image.height());
    let signed_width = i32::try_from(width).map_err(|_| too_large_err(width, height))?;
    let signed_height = i32::try_from(height).map_err(|_| too_large_err(width, height))?;
    let file_size = encoded_size(width, height).ok_or_else(|| too_large_err(width, height))?;
    let file_size_field = u32::try_from(file_size).map_err(|_| too_large_err(width, height))?;

    let mut out = Vec::with_capacity(file_size);
    FileHeader::new(file_size_field).write_to(&mut out);
    let mut info = InfoHeader::rgb24(signed_width, signed_height);
    (info.x_pixels_per_meter, info.y_pixels_per_meter) = pixels_per_meter;
    info.write_to(&mut out);

    stop.check()?;

    let pad_bytes = row_padding(width);
    for (row_idx, row) in image.rows().enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for &color in row {
            out.extend_from_slice(&color.to_bgr8());
        }
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }

    debug_assert_eq!(out.len(), file_size);
    Ok(out)
}

fn too_large_err(width: u32, height: u32) -> BitmapError {
    BitmapError::DimensionsTooLarge { width, height }
}
