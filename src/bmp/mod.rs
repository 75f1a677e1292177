//! The 24-bit uncompressed BMP profile.
//!
//! Layout: 14-byte file header, 40-byte `BITMAPINFOHEADER`, then bottom-up
//! rows of B,G,R bytes, each row zero-padded to a multiple of 4 bytes.
//!
//! Use top-level [`crate::decode`], [`crate::encode`], etc.

mod decode;
mod encode;
mod header;

pub use decode::Strictness;
pub use header::{
    BITS_PER_PIXEL, FILE_HEADER_SIZE, FileHeader, INFO_HEADER_SIZE, InfoHeader, PIXEL_DATA_OFFSET,
};

pub(crate) use decode::{decode_bmp, parse_bmp_header};
pub(crate) use encode::encode_bmp;

/// Zero bytes appended to every row of a `width`-pixel image.
pub fn row_padding(width: u32) -> usize {
    ((4 - (u64::from(width) * 3) % 4) % 4) as usize
}

/// Exact size of the encoded file:
/// `14 + 40 + width * height * 3 + padding * height`.
///
/// `None` if it does not fit in `usize`.
pub fn encoded_size(width: u32, height: u32) -> Option<usize> {
    let (w, h) = (width as usize, height as usize);
    w.checked_mul(h)?
        .checked_mul(3)?
        .checked_add(row_padding(width).checked_mul(h)?)?
        .checked_add(PIXEL_DATA_OFFSET as usize)
}
