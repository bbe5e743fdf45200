//! Application state and startup bootstrap.

use anyhow::{Context, Result};
use bytes::Bytes;
use renderer::{ico, render, NoiseField, Palette, Raster};
use tracing::{debug, info};

use crate::config::ServerConfig;

/// Width of images served on the catch-all route.
pub const IMAGE_WIDTH: usize = 600;
/// Height of images served on the catch-all route.
pub const IMAGE_HEIGHT: usize = 480;

pub const ICON_WIDTH: usize = 32;
pub const ICON_HEIGHT: usize = 32;

/// Shared application state. Read-only once built.
pub struct AppState {
    pub palette: Palette,
    pub favicon: Bytes,
    pub debug: bool,
}

impl AppState {
    /// Build the shared palette and generate the favicon.
    ///
    /// Fails if the favicon cannot be encoded; callers treat that as fatal.
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let mut state = Self {
            palette: Palette::rainbow(),
            favicon: Bytes::new(),
            debug: config.debug,
        };

        let icon = state.generate_image(ICON_WIDTH, ICON_HEIGHT);
        let favicon = ico::encode(&icon).context("failed to generate 'favicon.ico'")?;
        info!(bytes = favicon.len(), "Generated favicon");

        state.favicon = Bytes::from(favicon);
        Ok(state)
    }

    /// Render a new noise image with a freshly drawn seed.
    pub fn generate_image(&self, width: usize, height: usize) -> Raster {
        let noise = NoiseField::random();
        let raster = render(width, height, &noise, &self.palette);

        debug!(seed = noise.seed(), width, height, "Rendered noise image");
        if self.debug {
            info!("DEBUG: generated new noise image [{}x{}]", width, height);
        }
        raster
    }
}
