//! Configuration management.
//!
//! Per-call generation settings and the crate's error types. Defaults can be
//! overridden from `CAPTCHA_*` environment variables for service deployments.

mod error;
mod settings;

pub use error::{CaptchaError, Result};
pub use settings::{
    DEFAULT_BACKGROUND, DEFAULT_DISTORTION, DEFAULT_FONT_SIZE, DEFAULT_HEIGHT, DEFAULT_QUALITY,
    DEFAULT_WIDTH, Distortion, ImageOptions, OutputFormat,
};
