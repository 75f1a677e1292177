use crate::bmp;
use crate::error::BitmapError;

/// Header-level facts about a BMP, read without decoding pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u16,
    /// 0 for uncompressed RGB.
    pub compression: u32,
    /// Size the info header claims for itself (40 for the supported profile).
    pub info_header_size: u32,
    /// File size field from the file header (may be zero or wrong).
    pub declared_file_size: u32,
    /// Zero bytes after each row, for a 24-bit image of this width.
    pub row_padding: usize,
    /// Exact size [`crate::encode`] produces for this geometry.
    pub encoded_size: Option<usize>,
}

impl ImageInfo {
    /// Probe header without decoding pixels.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BitmapError> {
        let header = bmp::parse_bmp_header(data)?;
        Ok(Self {
            width: header.width,
            height: header.height,
            bits_per_pixel: header.info.bits_per_pixel,
            compression: header.info.compression,
            info_header_size: header.info.header_size,
            declared_file_size: header.file.file_size,
            row_padding: bmp::row_padding(header.width),
            encoded_size: bmp::encoded_size(header.width, header.height),
        })
    }

    /// Whether the header describes the one profile the decoder fully supports.
    pub fn is_supported(&self) -> bool {
        self.bits_per_pixel == bmp::BITS_PER_PIXEL
            && self.compression == 0
            && self.info_header_size == bmp::INFO_HEADER_SIZE as u32
    }
}
