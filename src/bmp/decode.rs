//! BMP decoder for the uncompressed 24-bit, bottom-up, 40-byte header profile.
//!
//! Rows are copied into the [`Image`] in file order; no vertical flip.

use enough::Stop;
use log::debug;

use super::header::{
    BITS_PER_PIXEL, FILE_HEADER_SIZE, FileHeader, INFO_HEADER_SIZE, InfoHeader, PIXEL_DATA_OFFSET,
};
use super::row_padding;
use crate::error::BitmapError;
use crate::image::Image;
use crate::limits::Limits;
use crate::pixel::Color;

// ── Strictness ──────────────────────────────────────────────────────

/// Controls how strictly the BMP decoder validates input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// [`Strictness::Standard`] plus: planes must be 1, the pixel data
    /// offset must be 54, and a non-zero file size field must match the
    /// input length.
    Strict,

    /// Default behavior. Reject anything other than a 40-byte info header,
    /// 24 bits per pixel and no compression. Truncated pixel data is an
    /// error.
    #[default]
    Standard,

    /// Trust the headers the way simple BMP writers do: assume the 40-byte,
    /// 24-bit layout without checking it, and zero-fill truncated pixel
    /// data. Files outside that profile decode to garbage.
    ///
    /// Input shorter than half the size its header declares is still
    /// [`BitmapError::UnexpectedEof`], so a bare header cannot demand an
    /// arbitrarily large allocation.
    Permissive,
}

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
    /// When true, reads beyond EOF return zeros instead of errors.
    permissive: bool,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8], permissive: bool) -> Self {
        Self {
            data,
            pos: 0,
            permissive,
        }
    }

    fn skip(&mut self, n: usize) -> Result<(), BitmapError> {
        let new_pos = self.pos.checked_add(n).ok_or(BitmapError::UnexpectedEof)?;
        if new_pos > self.data.len() {
            if self.permissive {
                self.pos = self.data.len();
                return Ok(());
            }
            return Err(BitmapError::UnexpectedEof);
        }
        self.pos = new_pos;
        Ok(())
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BitmapError> {
        let mut buf = [0u8; N];
        if self.pos + N > self.data.len() {
            if self.permissive {
                let available = self.data.len().saturating_sub(self.pos);
                buf[..available].copy_from_slice(&self.data[self.pos..self.pos + available]);
                self.pos = self.data.len();
                return Ok(buf);
            }
            return Err(BitmapError::UnexpectedEof);
        }
        buf.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(buf)
    }
}

// ── Header parsing ──────────────────────────────────────────────────

/// Validated headers plus the geometry the pixel loop needs.
pub(crate) struct BmpHeader {
    pub file: FileHeader,
    pub info: InfoHeader,
    pub width: u32,
    pub height: u32,
}

/// Parse and validate both headers, leaving the cursor at the first pixel.
fn read_headers(cursor: &mut Cursor<'_>, strictness: Strictness) -> Result<BmpHeader, BitmapError> {
    // Without the magic there is nothing to be permissive about.
    if cursor.data.len() < 2 || cursor.data[..2] != *b"BM" {
        return Err(BitmapError::NotBitmap);
    }

    let file = FileHeader::parse(&cursor.read_fixed_bytes::<FILE_HEADER_SIZE>()?)?;
    let info = InfoHeader::parse(&cursor.read_fixed_bytes::<INFO_HEADER_SIZE>()?);

    if strictness != Strictness::Permissive {
        if info.header_size != INFO_HEADER_SIZE as u32 {
            return Err(BitmapError::UnsupportedVariant(format!(
                "info header size {} (only the 40-byte BITMAPINFOHEADER is supported)",
                info.header_size
            )));
        }
        if info.bits_per_pixel != BITS_PER_PIXEL {
            return Err(BitmapError::UnsupportedVariant(format!(
                "{} bits per pixel (only 24-bit RGB is supported)",
                info.bits_per_pixel
            )));
        }
        if info.compression != 0 {
            return Err(BitmapError::UnsupportedVariant(format!(
                "compression type {}",
                info.compression
            )));
        }
    }

    if strictness == Strictness::Strict {
        if info.planes != 1 {
            return Err(BitmapError::InvalidHeader(format!(
                "BMP planes field is {}, expected 1",
                info.planes
            )));
        }
        if file.data_offset != PIXEL_DATA_OFFSET {
            return Err(BitmapError::InvalidHeader(format!(
                "pixel data offset {} (expected {PIXEL_DATA_OFFSET})",
                file.data_offset
            )));
        }
        let data_len = cursor.data.len();
        if file.file_size != 0 && file.file_size as usize != data_len {
            return Err(BitmapError::InvalidHeader(format!(
                "BMP file size field ({}) doesn't match actual size ({data_len})",
                file.file_size
            )));
        }
    }

    // Negative dimensions are rejected at every strictness level: a negative
    // width is meaningless and a negative height means top-down rows.
    if info.height < 0 {
        return Err(BitmapError::UnsupportedVariant(
            "top-down row order (negative height)".into(),
        ));
    }
    let width = u32::try_from(info.width)
        .map_err(|_| BitmapError::InvalidHeader(format!("negative width {}", info.width)))?;
    let height = info.height.unsigned_abs();

    debug!(
        "bmp header: {width}x{height}, {} bpp, file size field {}, data offset {}",
        info.bits_per_pixel, file.file_size, file.data_offset
    );

    Ok(BmpHeader {
        file,
        info,
        width,
        height,
    })
}

/// Parse the headers only (for probing).
pub(crate) fn parse_bmp_header(data: &[u8]) -> Result<BmpHeader, BitmapError> {
    // Header probing uses Permissive to avoid rejecting files before
    // the caller has chosen a strictness level.
    read_headers(&mut Cursor::new(data, true), Strictness::Permissive)
}

// ── Full decode ─────────────────────────────────────────────────────

/// How many times its own length a permissive input may claim to be.
const PERMISSIVE_MAX_EXPANSION: usize = 2;

/// Decode a whole BMP into an [`Image`].
pub(crate) fn decode_bmp(
    data: &[u8],
    limits: Option<&Limits>,
    strictness: Strictness,
    stop: &dyn Stop,
) -> Result<Image, BitmapError> {
    let mut cursor = Cursor::new(data, strictness == Strictness::Permissive);
    let header = read_headers(&mut cursor, strictness)?;
    let (width, height) = (header.width, header.height);

    let pixel_count = (width as usize)
        .checked_mul(height as usize)
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    pixel_count
        .checked_mul(size_of::<Color>())
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    if let Some(limits) = limits {
        limits.check_header(width, height)?;
    }

    // Reject truncated input before allocating for it. Permissive decoding
    // zero-fills a short tail, but only while the input holds at least
    // 1/PERMISSIVE_MAX_EXPANSION of the declared file.
    let needed = super::encoded_size(width, height)
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    let available = match strictness {
        Strictness::Permissive => data.len().saturating_mul(PERMISSIVE_MAX_EXPANSION),
        _ => data.len(),
    };
    if available < needed {
        return Err(BitmapError::UnexpectedEof);
    }

    stop.check()?;

    let padding = row_padding(width);
    let mut pixels = Vec::with_capacity(pixel_count);
    for row in 0..height {
        if row % 16 == 0 {
            stop.check()?;
        }
        for _ in 0..width {
            pixels.push(Color::from_bgr8(cursor.read_fixed_bytes::<3>()?));
        }
        cursor.skip(padding)?;
    }

    Image::from_pixels(width, height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use enough::Unstoppable;

    /// 2x1 image: one blue pixel, one white pixel, two padding bytes.
    fn tiny_bmp() -> Vec<u8> {
        let mut out = Vec::new();
        FileHeader::new(62).write_to(&mut out);
        InfoHeader::rgb24(2, 1).write_to(&mut out);
        out.extend_from_slice(&[255, 0, 0, 255, 255, 255, 0, 0]);
        out
    }

    #[test]
    fn decodes_bgr_pixels() {
        let img = decode_bmp(&tiny_bmp(), None, Strictness::Standard, &Unstoppable).unwrap();
        assert_eq!((img.width(), img.height()), (2, 1));
        assert_eq!(img.pixels(), &[Color::new(0.0, 0.0, 1.0), Color::WHITE]);
    }

    #[test]
    fn truncated_is_eof_unless_permissive() {
        let mut data = tiny_bmp();
        data.truncate(data.len() - 5);
        assert!(matches!(
            decode_bmp(&data, None, Strictness::Standard, &Unstoppable),
            Err(BitmapError::UnexpectedEof)
        ));
        let img = decode_bmp(&data, None, Strictness::Permissive, &Unstoppable).unwrap();
        assert_eq!(img.pixels()[1], Color::BLACK);
    }

    #[test]
    fn short_input_without_magic_is_not_bitmap() {
        for data in [&b""[..], b"B", b"MB"] {
            assert!(matches!(
                decode_bmp(data, None, Strictness::Permissive, &Unstoppable),
                Err(BitmapError::NotBitmap)
            ));
        }
    }

    #[test]
    fn standard_rejects_other_depths() {
        let mut data = tiny_bmp();
        data[28] = 32;
        assert!(matches!(
            decode_bmp(&data, None, Strictness::Standard, &Unstoppable),
            Err(BitmapError::UnsupportedVariant(_))
        ));
    }

    #[test]
    fn permissive_ignores_header_size() {
        let mut data = tiny_bmp();
        data[14] = 124;
        let img = decode_bmp(&data, None, Strictness::Permissive, &Unstoppable).unwrap();
        assert_eq!(img.width(), 2);
        assert!(matches!(
            decode_bmp(&data, None, Strictness::Standard, &Unstoppable),
            Err(BitmapError::UnsupportedVariant(_))
        ));
    }

    #[test]
    fn strict_checks_file_size_field() {
        let mut data = tiny_bmp();
        assert!(decode_bmp(&data, None, Strictness::Strict, &Unstoppable).is_ok());
        data.push(0);
        assert!(matches!(
            decode_bmp(&data, None, Strictness::Strict, &Unstoppable),
            Err(BitmapError::InvalidHeader(_))
        ));
        assert!(decode_bmp(&data, None, Strictness::Standard, &Unstoppable).is_ok());
    }

    #[test]
    fn permissive_refuses_header_far_larger_than_input() {
        // Headers only, claiming 1_000_000 x 1_000_000 pixels.
        let mut data = Vec::new();
        FileHeader::new(0).write_to(&mut data);
        InfoHeader::rgb24(1_000_000, 1_000_000).write_to(&mut data);
        assert!(matches!(
            decode_bmp(&data, None, Strictness::Permissive, &Unstoppable),
            Err(BitmapError::UnexpectedEof)
        ));
    }

    #[test]
    fn permissive_zero_fills_up_to_half_missing() {
        // 4x4 needs 54 + 48 bytes; keep the headers and nothing else.
        let mut data = Vec::new();
        FileHeader::new(102).write_to(&mut data);
        InfoHeader::rgb24(4, 4).write_to(&mut data);
        let img = decode_bmp(&data, None, Strictness::Permissive, &Unstoppable).unwrap();
        assert!(img.pixels().iter().all(|&c| c == Color::BLACK));

        // 6x6 needs 54 + 108 + 2 * 6 = 174 > 2 * 54.
        let mut data = Vec::new();
        FileHeader::new(0).write_to(&mut data);
        InfoHeader::rgb24(6, 6).write_to(&mut data);
        assert!(decode_bmp(&data, None, Strictness::Permissive, &Unstoppable).is_err());
    }

    #[test]
    fn negative_height_is_unsupported() {
        let mut data = tiny_bmp();
        data[22..26].copy_from_slice(&(-1i32).to_le_bytes());
        assert!(matches!(
            decode_bmp(&data, None, Strictness::Permissive, &Unstoppable),
            Err(BitmapError::UnsupportedVariant(_))
        ));
    }
}
