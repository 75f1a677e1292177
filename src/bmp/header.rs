//! BMP file header and BITMAPINFOHEADER records.
//!
//! Both are read from and written to fixed-size little-endian byte arrays.
//! Only the 40-byte info header layout is understood.

use crate::error::BitmapError;

pub const FILE_HEADER_SIZE: usize = 14;
pub const INFO_HEADER_SIZE: usize = 40;
/// Pixel data starts immediately after the two headers.
pub const PIXEL_DATA_OFFSET: u32 = (FILE_HEADER_SIZE + INFO_HEADER_SIZE) as u32;
pub const BITS_PER_PIXEL: u16 = 24;

const MAGIC: [u8; 2] = *b"BM";

#[inline]
fn le_u16(b: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([b[at], b[at + 1]])
}

#[inline]
fn le_u32(b: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([b[at], b[at + 1], b[at + 2], b[at + 3]])
}

#[inline]
fn le_i32(b: &[u8], at: usize) -> i32 {
    i32::from_le_bytes([b[at], b[at + 1], b[at + 2], b[at + 3]])
}

/// The 14-byte `BITMAPFILEHEADER`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    /// Total file size in bytes.
    pub file_size: u32,
    pub reserved: [u16; 2],
    /// Byte offset of the first pixel row.
    pub data_offset: u32,
}

impl FileHeader {
    pub fn new(file_size: u32) -> Self {
        Self {
            file_size,
            reserved: [0; 2],
            data_offset: PIXEL_DATA_OFFSET,
        }
    }

    /// Parse the file header. Fails with [`BitmapError::NotBitmap`] unless the
    /// first two bytes are `BM`.
    pub fn parse(bytes: &[u8; FILE_HEADER_SIZE]) -> Result<Self, BitmapError> {
        if bytes[..2] != MAGIC {
            return Err(BitmapError::NotBitmap);
        }
        Ok(Self {
            file_size: le_u32(bytes, 2),
            reserved: [le_u16(bytes, 6), le_u16(bytes, 8)],
            data_offset: le_u32(bytes, 10),
        })
    }

    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&MAGIC);
        out.extend_from_slice(&self.file_size.to_le_bytes());
        out.extend_from_slice(&self.reserved[0].to_le_bytes());
        out.extend_from_slice(&self.reserved[1].to_le_bytes());
        out.extend_from_slice(&self.data_offset.to_le_bytes());
    }
}

/// The 40-byte `BITMAPINFOHEADER`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    pub header_size: u32,
    pub width: i32,
    /// Positive for bottom-up row order.
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub important_colors: u32,
}

impl InfoHeader {
    /// Header for an uncompressed 24-bit image. Every field not describing
    /// the geometry or depth is zero.
    pub fn rgb24(width: i32, height: i32) -> Self {
        Self {
            header_size: INFO_HEADER_SIZE as u32,
            width,
            height,
            planes: 1,
            bits_per_pixel: BITS_PER_PIXEL,
            compression: 0,
            image_size: 0,
            x_pixels_per_meter: 0,
            y_pixels_per_meter: 0,
            colors_used: 0,
            important_colors: 0,
        }
    }

    /// Parse the info header. Never fails; validating the fields is up to
    /// the decoder.
    pub fn parse(bytes: &[u8; INFO_HEADER_SIZE]) -> Self {
        Self {
            header_size: le_u32(bytes, 0),
            width: le_i32(bytes, 4),
            height: le_i32(bytes, 8),
            planes: le_u16(bytes, 12),
            bits_per_pixel: le_u16(bytes, 14),
            compression: le_u32(bytes, 16),
            image_size: le_u32(bytes, 20),
            x_pixels_per_meter: le_i32(bytes, 24),
            y_pixels_per_meter: le_i32(bytes, 28),
            colors_used: le_u32(bytes, 32),
            important_colors: le_u32(bytes, 36),
        }
    }

    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.header_size.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.planes.to_le_bytes());
        out.extend_from_slice(&self.bits_per_pixel.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&self.image_size.to_le_bytes());
        out.extend_from_slice(&self.x_pixels_per_meter.to_le_bytes());
        out.extend_from_slice(&self.y_pixels_per_meter.to_le_bytes());
        out.extend_from_slice(&self.colors_used.to_le_bytes());
        out.extend_from_slice(&self.important_colors.to_le_bytes());
    }
}
