use core::ops::{Add, AddAssign, Div, Mul};

/// Scale between an 8-bit channel and its normalized float value.
pub(crate) const CHANNEL_MAX: f32 = 255.0;

/// Luma weights (ITU-R BT.601).
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Normalized RGB color.
///
/// Channels are conceptually in `0.0..=1.0` but are not clamped; filters
/// that need a bounded result clamp explicitly, and the encoder clamps when
/// quantizing to 8 bits.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// A color with all three channels set to `v`.
    pub const fn gray(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Weighted intensity `0.299r + 0.587g + 0.114b`.
    pub fn luma(self) -> f32 {
        LUMA_R * self.r + LUMA_G * self.g + LUMA_B * self.b
    }

    /// `1.0 - c` on every channel.
    pub fn inverted(self) -> Self {
        Self::new(1.0 - self.r, 1.0 - self.g, 1.0 - self.b)
    }

    /// Every channel clamped to `0.0..=1.0`.
    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    /// Build from one BMP pixel, stored blue first.
    pub fn from_bgr8([b, g, r]: [u8; 3]) -> Self {
        Self::new(
            f32::from(r) / CHANNEL_MAX,
            f32::from(g) / CHANNEL_MAX,
            f32::from(b) / CHANNEL_MAX,
        )
    }

    /// Quantize to one BMP pixel, blue first.
    ///
    /// Each channel is scaled by 255, clamped to `0..=255` and truncated.
    /// Out-of-range values saturate instead of wrapping.
    pub fn to_bgr8(self) -> [u8; 3] {
        [quantize(self.b), quantize(self.g), quantize(self.r)]
    }
}

fn quantize(c: f32) -> u8 {
    // NaN clamps to NaN, which `as` maps to 0.
    (c * CHANNEL_MAX).clamp(0.0, CHANNEL_MAX) as u8
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, k: f32) -> Color {
        Color::new(self.r * k, self.g * k, self.b * k)
    }
}

impl Div<f32> for Color {
    type Output = Color;

    fn div(self, k: f32) -> Color {
        Color::new(self.r / k, self.g / k, self.b / k)
    }
}

#[cfg(feature = "rgb")]
impl From<rgb::RGB<f32>> for Color {
    fn from(px: rgb::RGB<f32>) -> Self {
        Color::new(px.r, px.g, px.b)
    }
}

#[cfg(feature = "rgb")]
impl From<Color> for rgb::RGB<f32> {
    fn from(c: Color) -> Self {
        rgb::RGB::new(c.r, c.g, c.b)
    }
}
