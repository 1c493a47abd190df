//! Test utilities and shared fixtures.
//!
//! This module provides common helpers for unit and integration tests,
//! reducing duplication across the codebase.

#[cfg(any(test, feature = "testing"))]
use ab_glyph::FontArc;
#[cfg(any(test, feature = "testing"))]
use rand::SeedableRng;
#[cfg(any(test, feature = "testing"))]
use rand::rngs::StdRng;

#[cfg(any(test, feature = "testing"))]
use crate::config::{ImageOptions, OutputFormat};

/// Loads the embedded font for pipeline-level tests.
///
/// # Panics
///
/// Panics if the embedded font data is invalid.
#[cfg(any(test, feature = "testing"))]
#[must_use]
pub fn test_font() -> FontArc {
    FontArc::try_from_slice(include_bytes!("../assets/DejaVuSans-Oblique.ttf"))
        .expect("Failed to load embedded font")
}

/// Deterministic RNG for reproducible generation tests.
#[cfg(any(test, feature = "testing"))]
#[must_use]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Standard options for tests: canonical defaults, but PNG so decoded pixels
/// can be compared losslessly.
#[cfg(any(test, feature = "testing"))]
#[must_use]
pub fn test_options() -> ImageOptions {
    ImageOptions {
        format: OutputFormat::Png,
        ..ImageOptions::default()
    }
}
