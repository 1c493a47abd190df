//! Wave-distorted text CAPTCHA image generation.
//!
//! Renders a challenge string onto a raster, warps it with a sinusoidal
//! coordinate offset, scatters random noise pixels, and encodes the result
//! as JPEG, PNG, or WebP bytes.
//!
//! ```
//! use wavecaptcha::{CaptchaGenerator, ImageOptions, generate_code};
//!
//! let generator = CaptchaGenerator::new();
//! let code = generate_code(6)?;
//! let jpeg = generator.generate_with(&code, &ImageOptions::default())?;
//! assert!(!jpeg.is_empty());
//! # Ok::<(), wavecaptcha::CaptchaError>(())
//! ```

pub mod code;
pub mod config;
pub mod generator;
pub mod pipeline;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use code::{generate_code, generate_code_with_rng};
pub use config::{CaptchaError, Distortion, ImageOptions, OutputFormat, Result};
pub use generator::CaptchaGenerator;
pub use pipeline::{NoiseInjector, TextRenderer, WaveDistorter};
