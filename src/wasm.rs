//! WebAssembly exports for the kurtosis image generator.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Images are
//! passed as flat row-major arrays (length = width * height).
//!
//! A seed is always required: there is no OS entropy source in the browser
//! sandbox we want to depend on.

use wasm_bindgen::prelude::*;
use ndarray::Array2;

use crate::config::GeneratorConfig;
use crate::generator::KurtosisImageGenerator;
use crate::stats;

fn to_js_err(err: crate::error::KurtosisError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ============================================================================
// Generator
// ============================================================================

/// Generate a grayscale image with the given excess kurtosis.
///
/// # Arguments
/// * `target_kurtosis` - Requested excess kurtosis
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `seed` - RNG seed
///
/// # Returns
/// Flat array of gray levels (0-44), or an error message
#[wasm_bindgen]
pub fn generate_kurtosis_image_wasm(
    target_kurtosis: f64,
    width: usize,
    height: usize,
    seed: u64,
) -> Result<Vec<u8>, JsValue> {
    let config = GeneratorConfig {
        height,
        width,
        seed: Some(seed),
        ..GeneratorConfig::default()
    };
    let image = KurtosisImageGenerator::new(config)
        .and_then(|generator| generator.generate(target_kurtosis))
        .map_err(to_js_err)?;
    Ok(image.pixels.into_raw_vec_and_offset().0)
}

// ============================================================================
// Statistics
// ============================================================================

/// Excess kurtosis of a flat array of gray levels.
#[wasm_bindgen]
pub fn excess_kurtosis_u8_wasm(
    data: &[u8],
    width: usize,
    height: usize,
) -> Result<f64, JsValue> {
    let input = Array2::from_shape_vec((height, width), data.to_vec())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    stats::excess_kurtosis(&input.mapv(|v| v as f64)).map_err(to_js_err)
}
