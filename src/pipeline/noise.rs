//! Random noise scatter.
//!
//! Overwrites a fixed fraction of pixels in the distorted raster with a light
//! noise color at uniformly random locations.

use image::{Rgba, RgbaImage};
use rand::Rng;

/// Fraction of the raster overwritten by noise.
pub const NOISE_RATIO: f64 = 0.05;

/// Color of scattered noise pixels (light gray).
pub const NOISE_COLOR: Rgba<u8> = Rgba([211, 211, 211, 255]);

/// Scatters noise pixels over an otherwise-final raster.
pub struct NoiseInjector;

impl NoiseInjector {
    /// Number of noise writes for a raster of the given size.
    #[must_use]
    pub fn point_count(width: u32, height: u32) -> usize {
        (f64::from(width) * f64::from(height) * NOISE_RATIO).round() as usize
    }

    /// Overwrites [`point_count`](Self::point_count) pixels at independently
    /// sampled locations. Sampling is with replacement, so the number of
    /// distinct changed pixels may be lower.
    #[must_use]
    pub fn inject(mut raster: RgbaImage, rng: &mut impl Rng) -> RgbaImage {
        let (width, height) = raster.dimensions();
        for _ in 0..Self::point_count(width, height) {
            let x = rng.random_range(0..width);
            let y = rng.random_range(0..height);
            raster.put_pixel(x, y, NOISE_COLOR);
        }
        raster
    }
}
