//! Tests for the seeded noise field.

use renderer::noise::NoiseField;
use std::sync::Arc;

#[test]
fn test_values_within_unit_range() {
    for seed in [0u64, 1, 42, 999, 123_456_789, u64::MAX] {
        let noise = NoiseField::new(seed);
        for yi in -50..50 {
            for xi in -50..50 {
                let v = noise.eval(xi as f64 * 0.173, yi as f64 * 0.291);
                assert!((0.0..=1.0).contains(&v), "seed={} value={}", seed, v);
            }
        }
    }
}

#[test]
fn test_large_coordinates_in_range() {
    let noise = NoiseField::new(5);
    for &(x, y) in &[(1e6, -1e6), (12_345.678, 0.0), (-98_765.4, 3.3)] {
        let v = noise.eval(x, y);
        assert!((0.0..=1.0).contains(&v));
    }
}

#[test]
fn test_deterministic_for_seed() {
    let a = NoiseField::new(321);
    let b = NoiseField::new(321);
    assert_eq!(a.seed(), 321);
    for i in 0..500 {
        let (x, y) = (i as f64 * 0.02, (500 - i) as f64 * 0.02);
        assert_eq!(a.eval(x, y), b.eval(x, y));
    }
}

#[test]
fn test_different_seeds_differ() {
    let a = NoiseField::new(1);
    let b = NoiseField::new(2);
    let differs = (0..200).any(|i| {
        let (x, y) = (i as f64 * 0.13, i as f64 * 0.07);
        a.eval(x, y) != b.eval(x, y)
    });
    assert!(differs);
}

#[test]
fn test_field_is_smooth() {
    // Neighbouring samples at the image scale stay close together
    let noise = NoiseField::new(77);
    for i in 0..1000 {
        let x = i as f64 * 0.02;
        let delta = (noise.eval(x, 1.0) - noise.eval(x + 0.02, 1.0)).abs();
        assert!(delta < 0.2, "jump of {} at x={}", delta, x);
    }
}

#[test]
fn test_concurrent_evaluation() {
    let noise = Arc::new(NoiseField::new(9));
    let expected: Vec<f64> = (0..8).map(|i| noise.eval(i as f64, 0.5)).collect();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let noise = noise.clone();
            std::thread::spawn(move || noise.eval(i as f64, 0.5))
        })
        .collect();

    for (h, want) in handles.into_iter().zip(expected) {
        assert_eq!(h.join().unwrap(), want);
    }
}
