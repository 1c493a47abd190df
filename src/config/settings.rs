//! Generation settings.
//!
//! Defines the `ImageOptions` snapshot passed into each generation call and
//! the environment variable loading logic for service deployments.

use std::env;

use image::Rgba;

use crate::config::error::{CaptchaError, Result};

/// Canonical default image width in pixels.
pub const DEFAULT_WIDTH: u32 = 120;
/// Canonical default image height in pixels.
pub const DEFAULT_HEIGHT: u32 = 48;
/// Canonical default font size in pixels.
pub const DEFAULT_FONT_SIZE: u32 = 20;
/// Canonical default maximum distortion magnitude.
pub const DEFAULT_DISTORTION: f64 = 15.0;
/// Canonical default background color (wheat).
pub const DEFAULT_BACKGROUND: Rgba<u8> = Rgba([245, 222, 179, 255]);
/// Canonical default encoding quality.
pub const DEFAULT_QUALITY: u8 = 80;

fn get_env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_env_u32_or(key: &str, default: u32) -> u32 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn get_env_u8_or(key: &str, default: u8) -> u8 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn get_env_f64_or(key: &str, default: f64) -> f64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn get_env_bool_or(key: &str, default: bool) -> bool {
    env::var(key)
        .map(|v| v.to_lowercase() == "true" || v == "1")
        .unwrap_or(default)
}

/// Target encoding for the final raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
    WebP,
}

impl std::str::FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "webp" => Ok(Self::WebP),
            _ => Ok(Self::Jpeg),
        }
    }
}

impl OutputFormat {
    /// MIME type for the encoded bytes.
    #[must_use]
    pub const fn mime(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::WebP => "image/webp",
        }
    }
}

/// How the warp magnitude for one image is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distortion {
    /// Magnitude used exactly as given, signed. No randomness.
    Fixed(f64),
    /// Maximum magnitude; the effective value is rejection-sampled per image
    /// and negated with probability one half.
    Randomized(f64),
}

/// Immutable per-call generation settings.
///
/// Callers take a snapshot (`ImageOptions::default()`, `legacy()`, or
/// `from_env()`), adjust fields as needed, and pass it by reference into each
/// generation call. Nothing reads live global state during generation.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageOptions {
    /// Output image width in pixels.
    pub width: u32,
    /// Output image height in pixels.
    pub height: u32,
    /// Font size in pixels.
    pub font_size: u32,
    /// Warp magnitude selection mode.
    pub distortion: Distortion,
    /// Background fill color.
    pub background: Rgba<u8>,
    /// Target encoding.
    pub format: OutputFormat,
    /// Encoding quality, 0..=100. Ignored by lossless formats.
    pub quality: u8,
    /// Whether the noise scatter pass runs after distortion.
    pub noise: bool,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            font_size: DEFAULT_FONT_SIZE,
            distortion: Distortion::Randomized(DEFAULT_DISTORTION),
            background: DEFAULT_BACKGROUND,
            format: OutputFormat::Jpeg,
            quality: DEFAULT_QUALITY,
            noise: true,
        }
    }
}

impl ImageOptions {
    /// Preset matching the larger legacy variant: 150x96 canvas, no noise pass.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            width: 150,
            height: 96,
            noise: false,
            ..Self::default()
        }
    }

    /// Loads options from `CAPTCHA_*` environment variables, falling back to
    /// the canonical defaults for anything unset or unparseable.
    #[must_use]
    pub fn from_env() -> Self {
        let format: OutputFormat = get_env_or("CAPTCHA_FORMAT", "jpeg")
            .parse()
            .unwrap_or(OutputFormat::Jpeg);
        Self {
            width: get_env_u32_or("CAPTCHA_WIDTH", DEFAULT_WIDTH),
            height: get_env_u32_or("CAPTCHA_HEIGHT", DEFAULT_HEIGHT),
            font_size: get_env_u32_or("CAPTCHA_FONT_SIZE", DEFAULT_FONT_SIZE),
            distortion: Distortion::Randomized(get_env_f64_or(
                "CAPTCHA_DISTORTION",
                DEFAULT_DISTORTION,
            )),
            background: DEFAULT_BACKGROUND,
            format,
            quality: get_env_u8_or("CAPTCHA_QUALITY", DEFAULT_QUALITY),
            noise: get_env_bool_or("CAPTCHA_NOISE", true),
        }
    }

    /// Rejects invalid settings before any raster is allocated.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` for a zero width, height, or font size,
    /// `InvalidQuality` for quality above 100, and `InvalidDistortion` for a
    /// negative or non-finite randomized magnitude.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 || self.font_size == 0 {
            return Err(CaptchaError::InvalidDimensions {
                width: self.width,
                height: self.height,
                font_size: self.font_size,
            });
        }
        if self.quality > 100 {
            return Err(CaptchaError::InvalidQuality(self.quality));
        }
        match self.distortion {
            Distortion::Fixed(d) if !d.is_finite() => Err(CaptchaError::InvalidDistortion(d)),
            Distortion::Randomized(max) if !max.is_finite() || max < 0.0 => {
                Err(CaptchaError::InvalidDistortion(max))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ImageOptions::default().validate().is_ok());
        assert!(ImageOptions::legacy().validate().is_ok());
    }

    #[test]
    fn test_legacy_preset() {
        let opts = ImageOptions::legacy();
        assert_eq!(opts.width, 150);
        assert_eq!(opts.height, 96);
        assert!(!opts.noise);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let opts = ImageOptions {
            width: 0,
            ..ImageOptions::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(CaptchaError::InvalidDimensions { width: 0, .. })
        ));

        let opts = ImageOptions {
            height: 0,
            ..ImageOptions::default()
        };
        assert!(opts.validate().is_err());

        let opts = ImageOptions {
            font_size: 0,
            ..ImageOptions::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn test_quality_range() {
        let opts = ImageOptions {
            quality: 101,
            ..ImageOptions::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(CaptchaError::InvalidQuality(101))
        ));

        let opts = ImageOptions {
            quality: 100,
            ..ImageOptions::default()
        };
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_negative_randomized_magnitude_rejected() {
        let opts = ImageOptions {
            distortion: Distortion::Randomized(-1.0),
            ..ImageOptions::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn test_fixed_magnitude_may_be_negative() {
        let opts = ImageOptions {
            distortion: Distortion::Fixed(-12.0),
            ..ImageOptions::default()
        };
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("png".parse::<OutputFormat>().unwrap(), OutputFormat::Png);
        assert_eq!("WEBP".parse::<OutputFormat>().unwrap(), OutputFormat::WebP);
        assert_eq!("jpeg".parse::<OutputFormat>().unwrap(), OutputFormat::Jpeg);
        assert_eq!(
            "anything".parse::<OutputFormat>().unwrap(),
            OutputFormat::Jpeg
        );
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(OutputFormat::Jpeg.mime(), "image/jpeg");
        assert_eq!(OutputFormat::Png.mime(), "image/png");
        assert_eq!(OutputFormat::WebP.mime(), "image/webp");
    }
}
