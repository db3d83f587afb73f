//! Kurtosis image generator.
//!
//! Pipeline per image:
//! 1. Draw a standard normal sample grid.
//! 2. Shift it so its minimum is 1e-6.
//! 3. Walk the Box-Cox lambda from `lambda_start` in `lambda_step`
//!    increments until the transformed grid's excess kurtosis is within
//!    `tolerance` of the target.
//! 4. Stretch the transformed grid to `0..=levels` and round.
//! 5. Measure the kurtosis of the rounded gray levels.
//!
//! Convergence is judged on the continuous grid (step 3); the reported
//! kurtosis is measured after rounding (step 5). Quantization moves the
//! statistic, so the two generally differ.

use std::path::{Path, PathBuf};

use log::{info, warn};
use ndarray::{Array2, ArrayView2};

use crate::config::GeneratorConfig;
use crate::error::{KurtosisError, Result};
use crate::filters::noise::seeded_standard_normal_grid;
use crate::filters::power_transform::{box_cox, shift_positive};
use crate::filters::quantize::{levels_to_f64, quantize_levels};
use crate::io::save_for_target;
use crate::search::{LineSearch, SearchOutcome};
use crate::stats::{excess_kurtosis, Moments};

/// A generated image and the measurements taken while producing it.
#[derive(Debug, Clone, PartialEq)]
pub struct KurtosisImage {
    /// Gray levels, shape (height, width), values in `0..=levels`.
    pub pixels: Array2<u8>,
    pub target_kurtosis: f64,
    /// Lambda the search stopped at.
    pub lambda: f64,
    /// Lambda increments performed.
    pub iterations: usize,
    /// Excess kurtosis of the transformed grid before rounding.
    pub continuous_kurtosis: f64,
    /// Excess kurtosis of the rounded gray levels.
    pub quantized_kurtosis: f64,
    /// Skewness of the rounded gray levels.
    pub quantized_skewness: f64,
}

impl KurtosisImage {
    pub fn file_name(&self) -> String {
        crate::io::output_file_name(self.target_kurtosis)
    }

    /// Write the image into `dir` under its standard file name.
    pub fn save_in(&self, dir: &Path) -> Result<PathBuf> {
        save_for_target(&self.pixels, self.target_kurtosis, dir)
    }

    /// Write the image into the current working directory.
    pub fn save(&self) -> Result<PathBuf> {
        self.save_in(Path::new("."))
    }
}

#[derive(Debug, Clone)]
pub struct KurtosisImageGenerator {
    config: GeneratorConfig,
}

impl KurtosisImageGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate an image from a fresh sample grid.
    ///
    /// Uses `config.seed` when set, so seeded runs are reproducible.
    pub fn generate(&self, target_kurtosis: f64) -> Result<KurtosisImage> {
        let samples =
            seeded_standard_normal_grid(self.config.seed, self.config.height, self.config.width);
        self.generate_from_samples(target_kurtosis, samples.view())
    }

    /// Generate an image from a caller-supplied sample grid.
    ///
    /// The output shape follows `samples`, not the configured size.
    pub fn generate_from_samples(
        &self,
        target_kurtosis: f64,
        samples: ArrayView2<f64>,
    ) -> Result<KurtosisImage> {
        if !target_kurtosis.is_finite() {
            return Err(KurtosisError::InvalidConfig(format!(
                "target kurtosis must be finite, got {}",
                target_kurtosis
            )));
        }

        let shifted = shift_positive(samples);

        let search = LineSearch {
            start: self.config.lambda_start,
            step: self.config.lambda_step,
            target: target_kurtosis,
            tolerance: self.config.tolerance,
            max_iterations: self.config.max_iterations,
        };
        let outcome = search.run(|lambda| excess_kurtosis(&box_cox(shifted.view(), lambda)?))?;

        let state = match outcome {
            SearchOutcome::Converged(state) => {
                info!(
                    "Converged after {} iterations: lambda = {:.4}, kurtosis = {:.4}",
                    state.iterations, state.lambda, state.value
                );
                state
            }
            SearchOutcome::NotConverged(state) => {
                warn!(
                    "No lambda reached kurtosis {} within {} iterations (last: lambda = {}, kurtosis = {})",
                    target_kurtosis, state.iterations, state.lambda, state.value
                );
                return Err(KurtosisError::NotConverged {
                    iterations: state.iterations,
                    lambda: state.lambda,
                    kurtosis: state.value,
                });
            }
        };

        let transformed = box_cox(shifted.view(), state.lambda)?;
        let pixels = quantize_levels(transformed.view(), self.config.levels);

        let moments = Moments::of(&levels_to_f64(pixels.view()))?;

        Ok(KurtosisImage {
            pixels,
            target_kurtosis,
            lambda: state.lambda,
            iterations: state.iterations,
            continuous_kurtosis: state.value,
            quantized_kurtosis: moments.excess_kurtosis()?,
            quantized_skewness: moments.skewness()?,
        })
    }
}

/// Generate one image for `target_kurtosis`, print its measured kurtosis and
/// save it to the working directory.
///
/// `image_size` is (height, width). Returns the path written.
pub fn generate_image_with_kurtosis(
    target_kurtosis: f64,
    image_size: (usize, usize),
    lambda_start: f64,
    lambda_step: f64,
) -> Result<PathBuf> {
    let config = GeneratorConfig::with_search(image_size, lambda_start, lambda_step);
    let image = KurtosisImageGenerator::new(config)?.generate(target_kurtosis)?;
    println!("Kurtosis of generated image: {}", image.quantized_kurtosis);
    image.save()
}
