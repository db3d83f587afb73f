//! Kurtosis Image Generator
//!
//! Generates synthetic grayscale images whose pixel-value distribution has a
//! requested excess kurtosis, with Python bindings via PyO3 and WASM bindings
//! for JavaScript.
//!
//! ## Pipeline
//! 1. Standard normal sample grid (height, width)
//! 2. Shift so the minimum is 1e-6
//! 3. Box-Cox lambda search until the excess kurtosis is within tolerance
//! 4. Stretch to gray levels 0-44, round, save as 8-bit grayscale PNG
//!
//! ## Image Format
//! - **Sample / transformed grids**: `Array2<f64>`, (height, width)
//! - **Output grid**: `Array2<u8>`, (height, width), values 0-44
//!
//! ## Example
//! ```no_run
//! use kurtosis_image::{GeneratorConfig, KurtosisImageGenerator};
//!
//! let config = GeneratorConfig { seed: Some(7), ..GeneratorConfig::default() };
//! let image = KurtosisImageGenerator::new(config)?.generate(0.8)?;
//! println!("lambda = {}, kurtosis = {}", image.lambda, image.quantized_kurtosis);
//! image.save()?;
//! # Ok::<(), kurtosis_image::KurtosisError>(())
//! ```

pub mod config;
pub mod error;
pub mod filters;
pub mod generator;
pub mod io;
pub mod search;
pub mod stats;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use config::GeneratorConfig;
pub use error::{KurtosisError, Result};
pub use generator::{generate_image_with_kurtosis, KurtosisImage, KurtosisImageGenerator};
pub use search::{LineSearch, SearchOutcome, SearchState};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
    use pyo3::exceptions::{PyIOError, PyRuntimeError, PyValueError};
    use pyo3::prelude::*;

    use crate::config::{GeneratorConfig, DEFAULT_MAX_ITERATIONS};
    use crate::error::KurtosisError;
    use crate::generator::KurtosisImageGenerator;
    use crate::stats;

    fn to_py_err(err: KurtosisError) -> PyErr {
        match err {
            KurtosisError::InvalidConfig(_) | KurtosisError::Config(_) => {
                PyValueError::new_err(err.to_string())
            }
            KurtosisError::Io(_) | KurtosisError::Image(_) => PyIOError::new_err(err.to_string()),
            _ => PyRuntimeError::new_err(err.to_string()),
        }
    }

    // ========================================================================
    // Generator
    // ========================================================================

    /// Generate a grayscale image with the given excess kurtosis.
    ///
    /// Returns `(pixels, lambda, kurtosis)` where `pixels` is a (height, width)
    /// uint8 array with values 0-44 and `kurtosis` is measured on the
    /// quantized pixels.
    #[pyfunction]
    #[pyo3(signature = (target_kurtosis, height=500, width=500, lambda_start=0.0, lambda_step=0.01, seed=None, max_iterations=Some(DEFAULT_MAX_ITERATIONS)))]
    #[allow(clippy::too_many_arguments)]
    pub fn generate_kurtosis_image<'py>(
        py: Python<'py>,
        target_kurtosis: f64,
        height: usize,
        width: usize,
        lambda_start: f64,
        lambda_step: f64,
        seed: Option<u64>,
        max_iterations: Option<usize>,
    ) -> PyResult<(Bound<'py, PyArray2<u8>>, f64, f64)> {
        let config = GeneratorConfig {
            seed,
            max_iterations,
            ..GeneratorConfig::with_search((height, width), lambda_start, lambda_step)
        };
        let generator = KurtosisImageGenerator::new(config).map_err(to_py_err)?;
        let image = py
            .allow_threads(|| generator.generate(target_kurtosis))
            .map_err(to_py_err)?;
        Ok((image.pixels.into_pyarray(py), image.lambda, image.quantized_kurtosis))
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Population excess kurtosis of all elements of a 2D float array.
    #[pyfunction]
    pub fn excess_kurtosis(image: PyReadonlyArray2<'_, f64>) -> PyResult<f64> {
        stats::excess_kurtosis(&image.as_array()).map_err(to_py_err)
    }

    #[pymodule]
    pub fn kurtosis_image(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(generate_kurtosis_image, m)?)?;
        m.add_function(wrap_pyfunction!(excess_kurtosis, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::kurtosis_image;
