use crate::error::BitmapError;
use crate::pixel::Color;

/// In-memory pixel buffer.
///
/// Pixels are stored row-major in the order rows appear in the file. For
/// the usual bottom-up BMP that means row 0 is the *bottom* of the picture;
/// [`Image::get`] addresses rows exactly as stored and never flips.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Image {
    /// A black image of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
        }
    }

    /// Wrap an existing pixel vector.
    ///
    /// Returns [`BitmapError::BufferTooSmall`] unless `pixels.len()` is exactly
    /// `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self, BitmapError> {
        let needed = (width as usize)
            .checked_mul(height as usize)
            .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
        if pixels.len() != needed {
            return Err(BitmapError::BufferTooSmall {
                needed,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<Color> {
        self.pixels
    }

    /// Color at column `x` of stored row `y`, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x as usize, y as usize)])
    }

    /// Overwrite one pixel. Returns `false` when out of bounds.
    pub fn set(&mut self, x: u32, y: u32, color: Color) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let i = self.index(x as usize, y as usize);
        self.pixels[i] = color;
        true
    }

    /// Rows in stored order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Color]> + '_ {
        // chunks_exact(0) panics; a zero-width image has no pixels to chunk.
        self.pixels.chunks_exact((self.width as usize).max(1))
    }

    /// Swap in a new buffer of a new size.
    pub(crate) fn replace(&mut self, width: u32, height: u32, pixels: Vec<Color>) {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        self.width = width;
        self.height = height;
        self.pixels = pixels;
    }

    #[inline]
    pub(crate) fn index(&self, x: usize, y: usize) -> usize {
        y * self.width as usize + x
    }

    /// Convert to an [`imgref::ImgVec`] of `RGB<f32>`.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGB<f32>> {
        imgref::ImgVec::new(
            self.pixels.iter().map(|&c| c.into()).collect(),
            self.width as usize,
            self.height as usize,
        )
    }

    /// Build from any [`imgref::ImgRef`] of `RGB<f32>`, dropping stride padding.
    #[cfg(feature = "imgref")]
    pub fn from_imgref(img: imgref::ImgRef<'_, rgb::RGB<f32>>) -> Result<Self, BitmapError> {
        let width = u32::try_from(img.width()).map_err(|_| BitmapError::DimensionsTooLarge {
            width: u32::MAX,
            height: u32::MAX,
        })?;
        let height = u32::try_from(img.height()).map_err(|_| BitmapError::DimensionsTooLarge {
            width,
            height: u32::MAX,
        })?;
        let pixels = img.rows().flatten().map(|&px| px.into()).collect();
        Self::from_pixels(width, height, pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_black_and_sized() {
        let img = Image::new(4, 2);
        assert_eq!(img.pixels().len(), 8);
        assert!(img.pixels().iter().all(|&c| c == Color::BLACK));
    }

    #[test]
    fn from_pixels_rejects_wrong_length() {
        let err = Image::from_pixels(2, 2, vec![Color::WHITE; 3]).unwrap_err();
        assert!(matches!(
            err,
            BitmapError::BufferTooSmall {
                needed: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn into_pixels_hands_back_the_buffer() {
        let pixels = vec![Color::WHITE, Color::BLACK, Color::gray(0.5)];
        let img = Image::from_pixels(3, 1, pixels.clone()).unwrap();
        assert_eq!(img.into_pixels(), pixels);
    }

    #[test]
    fn get_set_address_stored_rows() {
        let mut img = Image::new(3, 2);
        assert!(img.set(2, 1, Color::WHITE));
        assert_eq!(img.pixels()[5], Color::WHITE);
        assert_eq!(img.get(2, 1), Some(Color::WHITE));
        assert_eq!(img.get(3, 0), None);
        assert!(!img.set(0, 2, Color::WHITE));
    }

    #[test]
    fn rows_iterates_stored_order() {
        let mut img = Image::new(2, 3);
        img.set(0, 2, Color::WHITE);
        let rows: Vec<_> = img.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2][0], Color::WHITE);
        assert_eq!(Image::new(0, 5).rows().count(), 0);
    }

    #[cfg(feature = "imgref")]
    #[test]
    fn imgref_roundtrip() {
        let mut img = Image::new(2, 2);
        img.set(1, 0, Color::new(0.1, 0.2, 0.3));
        let v = img.to_imgvec();
        let back = Image::from_imgref(v.as_ref()).unwrap();
        assert_eq!(back, img);
    }
}
