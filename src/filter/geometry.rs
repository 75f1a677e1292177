use crate::image::Image;

/// Keep the bottom-left `width` x `height` region.
///
/// Each dimension is clamped to the current one. "Bottom" is the last
/// `height` rows in stored order, which for a bottom-up BMP file are the
/// rows written last.
pub fn crop(image: &mut Image, width: u32, height: u32) {
    let new_width = width.min(image.width());
    let new_height = height.min(image.height());
    let first_row = (image.height() - new_height) as usize;

    let mut cropped = Vec::with_capacity(new_width as usize * new_height as usize);
    for row in image.rows().skip(first_row) {
        cropped.extend_from_slice(&row[..new_width as usize]);
    }
    image.replace(new_width, new_height, cropped);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Color;

    /// 4x2 image where every pixel encodes its own coordinates.
    fn labelled() -> Image {
        let mut img = Image::new(4, 2);
        for y in 0..2 {
            for x in 0..4 {
                img.set(x, y, Color::new(x as f32, y as f32, 0.0));
            }
        }
        img
    }

    #[test]
    fn keeps_last_rows_and_first_columns() {
        let mut img = labelled();
        crop(&mut img, 2, 1);
        assert_eq!((img.width(), img.height()), (2, 1));
        assert_eq!(
            img.pixels(),
            &[Color::new(0.0, 1.0, 0.0), Color::new(1.0, 1.0, 0.0)]
        );
    }

    #[test]
    fn oversized_request_clamps() {
        let mut img = labelled();
        let before = img.clone();
        crop(&mut img, 100, 100);
        assert_eq!(img, before);

        crop(&mut img, 3, 100);
        assert_eq!((img.width(), img.height()), (3, 2));
        assert_eq!(img.get(2, 1), Some(Color::new(2.0, 1.0, 0.0)));
    }

    #[test]
    fn zero_crop_empties() {
        let mut img = labelled();
        crop(&mut img, 0, 2);
        assert_eq!((img.width(), img.height()), (0, 2));
        assert!(img.is_empty());
    }
}
