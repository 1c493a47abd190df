//! CAPTCHA image generation.
//!
//! Orchestrates the pipeline stages over one immutable options snapshot and
//! encodes the final raster to bytes.

use std::io::Cursor;

use ab_glyph::FontArc;
use base64::{Engine, engine::general_purpose::STANDARD};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat, RgbaImage};
use rand::Rng;
use tracing::{debug, trace};

use crate::config::{CaptchaError, Distortion, ImageOptions, OutputFormat, Result};
use crate::pipeline::{NoiseInjector, TextRenderer, WaveDistorter};

const FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans-Oblique.ttf");

/// Generates wave-distorted CAPTCHA images.
///
/// Holds only the resolved font, so one instance can be shared behind an
/// `Arc` across concurrent request handlers. Randomness is drawn per call
/// from the thread-local generator unless the caller supplies one.
pub struct CaptchaGenerator {
    font: FontArc,
}

impl CaptchaGenerator {
    /// Creates a generator using the embedded italic font.
    ///
    /// # Panics
    ///
    /// Panics if the embedded font data is invalid or fails to load.
    #[must_use]
    pub fn new() -> Self {
        let font = FontArc::try_from_slice(FONT_BYTES).expect("Failed to load embedded font");
        Self { font }
    }

    /// Creates a generator from caller-supplied font data.
    ///
    /// # Errors
    ///
    /// Returns [`CaptchaError::FontUnavailable`] if the bytes are not a
    /// parseable font.
    pub fn from_font_bytes(bytes: Vec<u8>) -> Result<Self> {
        let font =
            FontArc::try_from_vec(bytes).map_err(|e| CaptchaError::FontUnavailable(e.to_string()))?;
        Ok(Self { font })
    }

    /// Generates an encoded image for `code` with the canonical defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    pub fn generate(&self, code: &str) -> Result<Vec<u8>> {
        self.generate_with(code, &ImageOptions::default())
    }

    /// Generates an encoded image for `code` with the given options.
    ///
    /// # Errors
    ///
    /// Returns a validation error for invalid options, or an encoding error.
    pub fn generate_with(&self, code: &str, opts: &ImageOptions) -> Result<Vec<u8>> {
        let mut rng = rand::rng();
        self.generate_with_rng(code, opts, &mut rng)
    }

    /// Generates an encoded image drawing all randomness from `rng`.
    ///
    /// A seeded generator makes the output reproducible.
    ///
    /// # Errors
    ///
    /// Returns a validation error for invalid options, or an encoding error.
    pub fn generate_with_rng(
        &self,
        code: &str,
        opts: &ImageOptions,
        rng: &mut impl Rng,
    ) -> Result<Vec<u8>> {
        opts.validate()?;

        let magnitude = match opts.distortion {
            Distortion::Fixed(d) => d,
            Distortion::Randomized(max) => WaveDistorter::sample_magnitude(max, rng),
        };

        trace!(code_len = code.len(), "rendering plain raster");
        let plain = TextRenderer::new(&self.font).render(code, opts);

        trace!(magnitude, "applying wave distortion");
        let distorted = WaveDistorter::distort(&plain, magnitude);

        let raster = if opts.noise {
            NoiseInjector::inject(distorted, rng)
        } else {
            distorted
        };

        let bytes = encode(&raster, opts.format, opts.quality)?;
        debug!(
            width = opts.width,
            height = opts.height,
            magnitude,
            format = ?opts.format,
            bytes = bytes.len(),
            "captcha image generated"
        );
        Ok(bytes)
    }

    /// Generates an image and wraps it in a base64 `data:` URL.
    ///
    /// # Errors
    ///
    /// Returns a validation error for invalid options, or an encoding error.
    pub fn data_url(&self, code: &str, opts: &ImageOptions) -> Result<String> {
        let bytes = self.generate_with(code, opts)?;
        Ok(format!(
            "data:{};base64,{}",
            opts.format.mime(),
            STANDARD.encode(&bytes)
        ))
    }
}

impl Default for CaptchaGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn encode(raster: &RgbaImage, format: OutputFormat, quality: u8) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    match format {
        OutputFormat::Jpeg => {
            // JPEG has no alpha channel; quality 0 would divide by zero in
            // the quantization tables, so it is raised to 1.
            let rgb = DynamicImage::ImageRgba8(raster.clone()).to_rgb8();
            JpegEncoder::new_with_quality(&mut buf, quality.max(1)).encode_image(&rgb)?;
        }
        OutputFormat::Png => raster.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?,
        OutputFormat::WebP => raster.write_to(&mut Cursor::new(&mut buf), ImageFormat::WebP)?,
    }
    Ok(buf)
}
