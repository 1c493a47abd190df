//! Challenge code generation.

use rand::Rng;

use crate::config::{CaptchaError, Result};

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a random alphanumeric challenge code of exactly `length`
/// characters.
///
/// # Errors
///
/// Returns [`CaptchaError::InvalidCodeLength`] when `length` is not positive.
pub fn generate_code(length: i32) -> Result<String> {
    let mut rng = rand::rng();
    generate_code_with_rng(length, &mut rng)
}

/// Generates a challenge code drawing randomness from `rng`.
///
/// # Errors
///
/// Returns [`CaptchaError::InvalidCodeLength`] when `length` is not positive.
pub fn generate_code_with_rng(length: i32, rng: &mut impl Rng) -> Result<String> {
    if length <= 0 {
        return Err(CaptchaError::InvalidCodeLength(length));
    }
    Ok((0..length)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect())
}
