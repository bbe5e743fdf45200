//! Tests for noise image synthesis.

use renderer::gradient::Color;
use renderer::{render, NoiseField, Palette, Raster};
use std::collections::HashSet;

fn distinct_colors(raster: &Raster) -> HashSet<[u8; 4]> {
    raster
        .pixels()
        .chunks_exact(4)
        .map(|p| [p[0], p[1], p[2], p[3]])
        .collect()
}

#[test]
fn test_render_dimensions() {
    let palette = Palette::rainbow();
    for &(w, h) in &[(1, 1), (32, 32), (600, 480), (7, 300)] {
        let raster = render(w, h, &NoiseField::new(3), &palette);
        assert_eq!(raster.width(), w);
        assert_eq!(raster.height(), h);
        assert_eq!(raster.pixels().len(), w * h * 4);
    }
}

#[test]
fn test_render_deterministic_for_seed() {
    let palette = Palette::rainbow();
    let a = render(120, 90, &NoiseField::new(500), &palette);
    let b = render(120, 90, &NoiseField::new(500), &palette);
    assert_eq!(a.pixels(), b.pixels());
}

#[test]
fn test_render_same_instance_twice() {
    let palette = Palette::rainbow();
    let noise = NoiseField::new(11);
    assert_eq!(render(64, 64, &noise, &palette), render(64, 64, &noise, &palette));
}

#[test]
fn test_render_different_seeds_differ() {
    let palette = Palette::rainbow();
    let a = render(600, 480, &NoiseField::new(1), &palette);
    let b = render(600, 480, &NoiseField::new(2), &palette);
    assert_ne!(a.pixels(), b.pixels());
}

#[test]
fn test_every_pixel_from_palette() {
    let palette = Palette::rainbow();
    let raster = render(200, 150, &NoiseField::new(8), &palette);
    let allowed: HashSet<[u8; 4]> = palette.colors().iter().map(|c| c.to_array()).collect();

    let used = distinct_colors(&raster);
    assert!(used.is_subset(&allowed));
    assert!(used.len() >= 2, "only {} colors used", used.len());
}

#[test]
fn test_full_size_renders_reach_every_band() {
    let palette = Palette::rainbow();
    let mut used = HashSet::new();
    for seed in 0..10 {
        used.extend(distinct_colors(&render(600, 480, &NoiseField::new(seed), &palette)));
    }

    for (band, color) in palette.colors().iter().enumerate() {
        assert!(used.contains(&color.to_array()), "band {} never rendered", band);
    }
}

#[test]
fn test_untouched_raster_is_transparent() {
    let raster = Raster::new(3, 2);
    assert_eq!(raster.get(2, 1), Some(Color::new(0, 0, 0, 0)));
    assert_eq!(raster.get(3, 0), None);
}

#[test]
fn test_every_pixel_written() {
    // Transparent pixels would mean a pixel was skipped
    let raster = render(33, 17, &NoiseField::new(4), &Palette::rainbow());
    assert!(raster.pixels().chunks_exact(4).all(|p| p[3] == 255));
}
