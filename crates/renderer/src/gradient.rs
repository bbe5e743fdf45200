//! Continuous color gradients.
//!
//! A gradient is an ordered list of evenly spaced color anchors over `[0, 1]`.
//! Sampling between two anchors blends them linearly.

/// Color value in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Rainbow anchors: red, orange, yellow, green, cyan, blue, violet.
pub const RAINBOW: [Color; 7] = [
    Color::rgb(255, 0, 0),
    Color::rgb(255, 127, 0),
    Color::rgb(255, 255, 0),
    Color::rgb(0, 255, 0),
    Color::rgb(0, 255, 255),
    Color::rgb(0, 0, 255),
    Color::rgb(143, 0, 255),
];

/// Linear color interpolation
pub fn interpolate_color(color1: Color, color2: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    let t_inv = 1.0 - t;
    let mix = |a: u8, b: u8| ((a as f64 * t_inv) + (b as f64 * t)).round() as u8;

    Color::new(
        mix(color1.r, color2.r),
        mix(color1.g, color2.g),
        mix(color1.b, color2.b),
        mix(color1.a, color2.a),
    )
}

/// Sample a gradient made of evenly spaced anchors at position `t`.
///
/// `t` is clamped to `[0, 1]`. A single anchor yields that anchor everywhere.
///
/// # Panics
/// Panics if `anchors` is empty.
pub fn sample_gradient(anchors: &[Color], t: f64) -> Color {
    assert!(!anchors.is_empty(), "gradient needs at least one anchor");
    if anchors.len() == 1 {
        return anchors[0];
    }

    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let segments = anchors.len() - 1;
    let pos = t * segments as f64;
    let idx = (pos.floor() as usize).min(segments - 1);

    interpolate_color(anchors[idx], anchors[idx + 1], pos - idx as f64)
}
