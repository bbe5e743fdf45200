//! Stepped (posterized) color palettes.
//!
//! A [`Palette`] splits `[0, 1]` into equally wide bands and assigns one
//! constant color to each band. Band `k` of `n` covers `[k/n, (k+1)/n)`; the
//! last band is closed at 1.

use crate::gradient::{sample_gradient, Color, RAINBOW};

/// Number of bands in the rainbow palette.
pub const RAINBOW_BANDS: usize = 7;

/// Immutable stepped color map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// The seven band red-to-violet rainbow.
    pub fn rainbow() -> Self {
        Self::stepped(&RAINBOW, RAINBOW_BANDS)
    }

    /// Posterize a continuous gradient into `bands` uniform bands.
    ///
    /// Band `k` takes the gradient color at `k / (bands - 1)`, so the first
    /// and last bands carry the gradient's end colors.
    ///
    /// # Panics
    /// Panics if `bands` is zero or `anchors` is empty.
    pub fn stepped(anchors: &[Color], bands: usize) -> Self {
        assert!(bands > 0, "palette needs at least one band");

        let colors = (0..bands)
            .map(|k| {
                let t = if bands == 1 {
                    0.0
                } else {
                    k as f64 / (bands - 1) as f64
                };
                sample_gradient(anchors, t)
            })
            .collect();

        Self { colors }
    }

    /// Band index for `t`. Out-of-range values saturate; NaN maps to band 0.
    pub fn band_index(&self, t: f64) -> usize {
        if t.is_nan() {
            return 0;
        }
        let bands = self.colors.len();
        let t = t.clamp(0.0, 1.0);
        ((t * bands as f64).floor() as usize).min(bands - 1)
    }

    /// Color of the band containing `t`.
    #[inline]
    pub fn at(&self, t: f64) -> Color {
        self.colors[self.band_index(t)]
    }

    /// Number of bands.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Band colors in order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::rainbow()
    }
}
