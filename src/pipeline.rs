//! Image synthesis pipeline.
//!
//! Three single-pass stages, each consuming the previous stage's raster:
//! text rendering, sinusoidal wave distortion, and noise scatter.

pub mod distort;
pub mod noise;
pub mod text;

pub use distort::WaveDistorter;
pub use noise::NoiseInjector;
pub use text::TextRenderer;
