//! Noise image synthesis.
//!
//! Renders a raster by looking up every pixel's noise value in a stepped
//! palette, producing smooth blobs bounded by sharp band edges.

use rayon::prelude::*;

use crate::gradient::Color;
use crate::noise::NoiseField;
use crate::palette::Palette;

/// Spatial scale applied to pixel coordinates before sampling noise.
/// Gives roughly 50 px between value extrema.
pub const NOISE_SCALE: f64 = 0.02;

/// Row-major RGBA8 raster with its origin at the top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Raster {
    /// Fully transparent raster.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "raster dimensions must be positive");
        Self {
            width,
            height,
            pixels: vec![0u8; width * height * 4],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// RGBA bytes, 4 per pixel.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        let p = &self.pixels[i..i + 4];
        Some(Color::new(p[0], p[1], p[2], p[3]))
    }
}

/// Render a `width` x `height` noise image.
///
/// Each pixel `(x, y)` gets `palette.at(noise.eval(x * NOISE_SCALE, y * NOISE_SCALE))`.
/// Rows are filled in parallel; output depends only on the noise seed,
/// the palette and the dimensions.
pub fn render(width: usize, height: usize, noise: &NoiseField, palette: &Palette) -> Raster {
    let mut raster = Raster::new(width, height);

    raster
        .pixels
        .par_chunks_mut(width * 4)
        .enumerate()
        .for_each(|(y, row)| {
            let ny = y as f64 * NOISE_SCALE;
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let t = noise.eval(x as f64 * NOISE_SCALE, ny);
                px.copy_from_slice(&palette.at(t).to_array());
            }
        });

    raster
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_matches_pointwise_lookup() {
        let noise = NoiseField::new(7);
        let palette = Palette::rainbow();
        let raster = render(40, 30, &noise, &palette);

        for &(x, y) in &[(0, 0), (39, 0), (0, 29), (39, 29), (17, 11)] {
            let expected = palette.at(noise.eval(x as f64 * NOISE_SCALE, y as f64 * NOISE_SCALE));
            assert_eq!(raster.get(x, y), Some(expected));
        }
    }

    #[test]
    fn test_get_out_of_bounds() {
        let raster = Raster::new(2, 2);
        assert_eq!(raster.get(2, 0), None);
        assert_eq!(raster.get(0, 2), None);
    }

    #[test]
    #[should_panic]
    fn test_zero_width_panics() {
        Raster::new(0, 10);
    }
}
