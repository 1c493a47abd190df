//! Error types and result aliases.
//!
//! Defines the core `CaptchaError` enumeration and common `Result` type.

use thiserror::Error;

/// CAPTCHA generation errors.
#[derive(Debug, Error)]
pub enum CaptchaError {
    /// Raster dimensions or font size outside the valid range.
    #[error("invalid dimensions: {width}x{height} (font size {font_size})")]
    InvalidDimensions {
        width: u32,
        height: u32,
        font_size: u32,
    },

    /// Requested challenge code length is not positive.
    #[error("invalid code length: {0}")]
    InvalidCodeLength(i32),

    /// Encoding quality outside 0..=100.
    #[error("invalid quality: {0} (expected 0..=100)")]
    InvalidQuality(u8),

    /// Randomized distortion magnitude is negative or not finite.
    #[error("invalid distortion magnitude: {0}")]
    InvalidDistortion(f64),

    /// Font data could not be resolved or parsed.
    #[error("font unavailable: {0}")]
    FontUnavailable(String),

    /// Image codec failure.
    #[error("image encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Result type alias for `CaptchaError`.
pub type Result<T> = std::result::Result<T, CaptchaError>;
