//! Plain raster text rendering.
//!
//! Fills the background and draws the challenge string anti-aliased in a
//! fixed gray, centered on the measured text width.

use ab_glyph::{FontArc, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};

use crate::config::ImageOptions;

/// Foreground color of the challenge text (gray).
pub const TEXT_COLOR: Rgba<u8> = Rgba([128, 128, 128, 255]);

/// Renders the challenge string onto a fresh background-filled raster.
pub struct TextRenderer<'a> {
    font: &'a FontArc,
}

impl<'a> TextRenderer<'a> {
    #[must_use]
    pub const fn new(font: &'a FontArc) -> Self {
        Self { font }
    }

    /// Produces the plain raster: background fill plus centered text.
    ///
    /// Centering measures the rendered text width and splits the remainder
    /// evenly; vertically the glyph box is centered on the font size. Text
    /// wider than the raster is clipped on both sides.
    #[must_use]
    pub fn render(&self, text: &str, opts: &ImageOptions) -> RgbaImage {
        let mut raster = RgbaImage::from_pixel(opts.width, opts.height, opts.background);
        if text.is_empty() {
            return raster;
        }

        let scale = PxScale::from(f32::from(u16::try_from(opts.font_size).unwrap_or(u16::MAX)));
        let (text_width, _) = text_size(scale, self.font, text);

        let x = (i64::from(opts.width) - i64::from(text_width)) / 2;
        let y = i64::from(opts.height.saturating_sub(opts.font_size)) / 2;

        draw_text_mut(
            &mut raster,
            TEXT_COLOR,
            i32::try_from(x).unwrap_or(0),
            i32::try_from(y).unwrap_or(0),
            scale,
            self.font,
            text,
        );
        raster
    }
}
