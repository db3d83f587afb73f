//! Quantization: stretch a continuous grid to integer gray levels.
//!
//! Like auto levels, the darkest value maps to 0 and the brightest to the top
//! level. Unlike auto levels there is no clipping and the top level is not
//! 255 but a configurable count ([`DEFAULT_LEVELS`] = 44).
//!
//! Rounding is half-to-even so ties land on the same level on every
//! platform.

use ndarray::{Array2, ArrayView2};

/// Top gray level of generated images.
///
/// Output values span `0..=44`, not the full 8-bit range.
pub const DEFAULT_LEVELS: u8 = 44;

/// Stretch a grid to `[0, levels]` and round to `u8`.
///
/// Computes `round((x - min) / max(x - min) * levels)`. A constant grid has
/// no range to stretch and maps to all zeros.
///
/// # Arguments
/// * `input` - Continuous grid (finite values)
/// * `levels` - Top output level
///
/// # Returns
/// Quantized grid of the same shape, every value in `0..=levels`
pub fn quantize_levels(input: ArrayView2<f64>, levels: u8) -> Array2<u8> {
    let min = input.iter().copied().fold(f64::INFINITY, f64::min);
    let shifted = input.mapv(|v| v - min);
    let max = shifted.iter().copied().fold(0.0f64, f64::max);

    if max <= 0.0 || !max.is_finite() {
        return Array2::<u8>::zeros(input.dim());
    }

    let scale = levels as f64;
    shifted.mapv(|v| ((v / max) * scale).round_ties_even().clamp(0.0, scale) as u8)
}

/// Convert a quantized grid back to `f64` for moment computation.
pub fn levels_to_f64(input: ArrayView2<u8>) -> Array2<f64> {
    input.mapv(|v| v as f64)
}
