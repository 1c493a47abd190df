//! Sinusoidal wave distortion.
//!
//! Produces the warped raster by gather sampling: every destination pixel
//! reads its color from a source location computed by a trigonometric offset.

use std::f64::consts::PI;

use image::RgbaImage;
use rand::Rng;

/// Minimum magnitude a randomized sample must reach to be accepted.
pub const DISTORTION_THRESHOLD: f64 = 5.0;

/// Pixel period of the sine/cosine offset functions.
const WAVE_PERIOD: f64 = 64.0;

/// Applies the coordinate warp to a plain raster.
pub struct WaveDistorter;

impl WaveDistorter {
    /// Draws one warp magnitude for an image in randomized mode.
    ///
    /// Rejection-samples `max * uniform(0, 1)` until the candidate clears
    /// [`DISTORTION_THRESHOLD`], then negates it with probability one half.
    /// When `max <= 2 * DISTORTION_THRESHOLD` the threshold may be
    /// unreachable, so the first candidate is accepted unconditionally.
    #[must_use]
    pub fn sample_magnitude(max: f64, rng: &mut impl Rng) -> f64 {
        let escape = max <= DISTORTION_THRESHOLD * 2.0;
        let mut magnitude;
        loop {
            magnitude = max * rng.random::<f64>();
            if magnitude >= DISTORTION_THRESHOLD || escape {
                break;
            }
        }
        if rng.random::<f64>() > 0.5 {
            magnitude = -magnitude;
        }
        magnitude
    }

    /// Produces a same-size raster where pixel `(x, y)` takes the color of
    /// the source pixel at
    /// `(x + d*sin(pi*y/64), y + d*cos(pi*x/64))`,
    /// truncated toward zero.
    ///
    /// A source coordinate outside `[0, dimension)` snaps to `0` on that
    /// axis, not to the nearest edge. The resulting seam along the border is
    /// part of the stage's contract and covered by tests.
    #[must_use]
    pub fn distort(plain: &RgbaImage, magnitude: f64) -> RgbaImage {
        let (width, height) = plain.dimensions();
        RgbaImage::from_fn(width, height, |x, y| {
            let offset_x = magnitude * (PI * f64::from(y) / WAVE_PERIOD).sin();
            let offset_y = magnitude * (PI * f64::from(x) / WAVE_PERIOD).cos();

            let mut src_x = (f64::from(x) + offset_x) as i64;
            let mut src_y = (f64::from(y) + offset_y) as i64;
            if src_x < 0 || src_x >= i64::from(width) {
                src_x = 0;
            }
            if src_y < 0 || src_y >= i64::from(height) {
                src_y = 0;
            }

            *plain.get_pixel(src_x as u32, src_y as u32)
        })
    }
}
