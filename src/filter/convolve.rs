//! 3x3 neighborhood filters.
//!
//! Every filter here reads from the unmodified source pixels and writes a
//! fresh buffer, so no output pixel sees a partially updated neighbor.

use crate::image::Image;
use crate::pixel::Color;

/// 3x3 weights indexed `[dy + 1][dx + 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kernel3(pub [[f32; 3]; 3]);

impl Kernel3 {
    /// Center 5, edge neighbors -1, corners 0.
    pub const SHARPEN: Kernel3 = Kernel3([[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]]);

    /// Center 5, all eight neighbors -1.
    pub const THERMO: Kernel3 = Kernel3([[-1.0, -1.0, -1.0], [-1.0, 5.0, -1.0], [-1.0, -1.0, -1.0]]);

    /// Center 4, edge neighbors -1, corners 0.
    pub const LAPLACIAN: Kernel3 = Kernel3([[0.0, -1.0, 0.0], [-1.0, 4.0, -1.0], [0.0, -1.0, 0.0]]);

    /// Unnormalized 2D Gaussian `exp(-(dx² + dy²) / 2σ²) / 2πσ²`.
    pub fn gaussian(sigma: f32) -> Kernel3 {
        let two_sigma_sq = 2.0 * f64::from(sigma).powi(2);
        Self::gaussian_weights(sigma, 1.0 / (std::f64::consts::PI * two_sigma_sq))
    }

    /// `exp(-(dx² + dy²) / 2σ²) * scale`, computed in f64.
    fn gaussian_weights(sigma: f32, scale: f64) -> Kernel3 {
        let two_sigma_sq = 2.0 * f64::from(sigma).powi(2);
        let mut weights = [[0.0f32; 3]; 3];
        for (dy, row) in (-1i32..=1).zip(weights.iter_mut()) {
            for (dx, w) in (-1i32..=1).zip(row.iter_mut()) {
                let dist_sq = f64::from(dx * dx + dy * dy);
                *w = ((-dist_sq / two_sigma_sq).exp() * scale) as f32;
            }
        }
        Kernel3(weights)
    }

    fn apply_at(&self, src: &[Color], width: usize, x: usize, y: usize) -> Color {
        let mut acc = Color::BLACK;
        for (ky, row) in self.0.iter().enumerate() {
            let line = (y + ky - 1) * width;
            for (kx, &w) in row.iter().enumerate() {
                if w != 0.0 {
                    acc += src[line + x + kx - 1] * w;
                }
            }
        }
        acc
    }
}

/// Apply `kernel` to every pixel with a full 3x3 neighborhood, writing
/// `finish(sum)` into `out`. Border pixels of `out` are left untouched.
fn convolve_interior(
    src: &Image,
    kernel: &Kernel3,
    out: &mut [Color],
    finish: impl Fn(Color) -> Color,
) {
    let (w, h) = (src.width() as usize, src.height() as usize);
    if w < 3 || h < 3 {
        return;
    }
    let pixels = src.pixels();
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            out[y * w + x] = finish(kernel.apply_at(pixels, w, x, y));
        }
    }
}

/// Weighted 3x3 Gaussian average.
///
/// Neighbors outside the image are dropped and the sum is divided by the
/// weights actually used, so edges and corners renormalize. `sigma` must be
/// positive and finite; the caller validates it.
pub fn gaussian_blur(image: &mut Image, sigma: f32) {
    // The 1/2πσ² factor cancels in the renormalization and overflows f32
    // for tiny sigma, so weights are relative to the center.
    let kernel = Kernel3::gaussian_weights(sigma, 1.0);
    let (w, h) = (image.width() as usize, image.height() as usize);
    let src = image.pixels();

    let mut blurred = Vec::with_capacity(src.len());
    for y in 0..h {
        for x in 0..w {
            let mut acc = Color::BLACK;
            let mut total_weight = 0.0f32;
            for (ky, row) in kernel.0.iter().enumerate() {
                let Some(ny) = (y + ky).checked_sub(1).filter(|&ny| ny < h) else {
                    continue;
                };
                for (kx, &weight) in row.iter().enumerate() {
                    let Some(nx) = (x + kx).checked_sub(1).filter(|&nx| nx < w) else {
                        continue;
                    };
                    total_weight += weight;
                    acc += src[ny * w + nx] * weight;
                }
            }
            blurred.push(acc / total_weight);
        }
    }
    image.replace(image.width(), image.height(), blurred);
}

/// Sharpen interior pixels, clamping each channel to `0.0..=1.0`.
///
/// The one-pixel border keeps its source colors.
pub fn sharpen(image: &mut Image) {
    let mut out = image.pixels().to_vec();
    convolve_interior(image, &Kernel3::SHARPEN, &mut out, Color::clamped);
    image.replace(image.width(), image.height(), out);
}

/// High-pass "thermal" look: center 5, all neighbors -1, unclamped.
///
/// Unlike [`sharpen`], the one-pixel border comes out black.
pub fn thermo(image: &mut Image) {
    let mut out = vec![Color::BLACK; image.pixels().len()];
    convolve_interior(image, &Kernel3::THERMO, &mut out, |c| c);
    image.replace(image.width(), image.height(), out);
}

/// Grayscale, then mark interior pixels whose Laplacian exceeds `threshold`
/// white and the rest black.
///
/// Border pixels stay gray.
pub fn edge_detect(image: &mut Image, threshold: f32) {
    super::grayscale(image);
    let mut out = image.pixels().to_vec();
    // All channels are equal after grayscale, so red stands for the pixel.
    convolve_interior(image, &Kernel3::LAPLACIAN, &mut out, |c| {
        if c.r > threshold {
            Color::WHITE
        } else {
            Color::BLACK
        }
    });
    image.replace(image.width(), image.height(), out);
}
