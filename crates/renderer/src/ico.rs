//! ICO container encoding for favicons.

use ::ico::{IconDir, IconDirEntry, IconImage, ResourceType};

use crate::error::{RenderError, RenderResult};
use crate::synth::Raster;

/// Largest edge an ICO directory entry can describe.
pub const MAX_ICON_SIZE: usize = 256;

/// Encode a raster as a single-entry ICO file.
pub fn encode(raster: &Raster) -> RenderResult<Vec<u8>> {
    let (width, height) = (raster.width(), raster.height());
    if width > MAX_ICON_SIZE || height > MAX_ICON_SIZE {
        return Err(RenderError::InvalidDimensions {
            width,
            height,
            reason: "icons are limited to 256x256",
        });
    }

    let image = IconImage::from_rgba_data(width as u32, height as u32, raster.pixels().to_vec());
    let entry = IconDirEntry::encode(&image).map_err(RenderError::Ico)?;

    let mut dir = IconDir::new(ResourceType::Icon);
    dir.add_entry(entry);

    let mut ico = Vec::new();
    dir.write(&mut ico).map_err(RenderError::Ico)?;
    Ok(ico)
}
