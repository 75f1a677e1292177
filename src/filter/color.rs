//! Per-pixel color filters.

use crate::image::Image;
use crate::pixel::Color;

/// Replace every pixel with its luma on all three channels.
pub fn grayscale(image: &mut Image) {
    for px in image.pixels_mut() {
        *px = Color::gray(px.luma());
    }
}

/// Replace every channel `c` with `1.0 - c`.
pub fn negative(image: &mut Image) {
    for px in image.pixels_mut() {
        *px = px.inverted();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Image {
        let pixels = vec![
            Color::new(1.0, 0.0, 0.0),
            Color::new(0.2, 0.5, 0.9),
            Color::new(0.0, 0.0, 0.0),
            Color::new(0.7, 0.7, 0.1),
        ];
        Image::from_pixels(2, 2, pixels).unwrap()
    }

    #[test]
    fn grayscale_uses_luma() {
        let mut img = sample();
        grayscale(&mut img);
        let px = img.pixels()[0];
        assert!((px.r - 0.299).abs() < 1e-6);
        assert_eq!(px.r, px.g);
        assert_eq!(px.g, px.b);
    }

    #[test]
    fn negative_of_red_is_cyan() {
        let mut img = sample();
        negative(&mut img);
        assert_eq!(img.pixels()[0], Color::new(0.0, 1.0, 1.0));
        assert_eq!(img.pixels()[2], Color::WHITE);
    }
}
