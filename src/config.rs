//! Generator configuration.
//!
//! Every field has a default, so a TOML file only needs to list what it
//! changes:
//!
//! ```toml
//! height = 256
//! width = 256
//! lambda_step = 0.005
//! seed = 7
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{KurtosisError, Result};
use crate::filters::quantize::DEFAULT_LEVELS;

pub const DEFAULT_HEIGHT: usize = 500;
pub const DEFAULT_WIDTH: usize = 500;
pub const DEFAULT_LAMBDA_START: f64 = 0.0;
pub const DEFAULT_LAMBDA_STEP: f64 = 0.01;
pub const DEFAULT_TOLERANCE: f64 = 0.01;
/// Default iteration cap. With the default step this stops the search at
/// lambda = 100, well before Box-Cox overflows on shifted normal samples
/// (around lambda = 300). Much larger steps can reach `NumericOverflow`
/// before the cap.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub height: usize,
    pub width: usize,
    /// First Box-Cox lambda tried.
    pub lambda_start: f64,
    /// Lambda increment per iteration. Must be non-zero.
    pub lambda_step: f64,
    /// Accepted distance between measured and target kurtosis.
    pub tolerance: f64,
    /// Iteration cap; `None` lets the search run until it converges.
    pub max_iterations: Option<usize>,
    /// Top gray level of the output image.
    pub levels: u8,
    /// RNG seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            lambda_start: DEFAULT_LAMBDA_START,
            lambda_step: DEFAULT_LAMBDA_STEP,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: Some(DEFAULT_MAX_ITERATIONS),
            levels: DEFAULT_LEVELS,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Config for an image of the given (height, width) and search start/step.
    pub fn with_search(image_size: (usize, usize), lambda_start: f64, lambda_step: f64) -> Self {
        Self {
            height: image_size.0,
            width: image_size.1,
            lambda_start,
            lambda_step,
            ..Self::default()
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: GeneratorConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading generator config from {}", path.display());
        let toml_str = fs::read_to_string(path)?;
        Self::from_toml_str(&toml_str)
    }

    pub fn image_size(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Reject settings the search cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.height == 0 || self.width == 0 {
            return Err(KurtosisError::InvalidConfig(format!(
                "image size must be positive, got {}x{}",
                self.height, self.width
            )));
        }
        if !self.lambda_start.is_finite() {
            return Err(KurtosisError::InvalidConfig(format!(
                "lambda_start must be finite, got {}",
                self.lambda_start
            )));
        }
        if !self.lambda_step.is_finite() || self.lambda_step == 0.0 {
            return Err(KurtosisError::InvalidConfig(format!(
                "lambda_step must be finite and non-zero, got {}",
                self.lambda_step
            )));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(KurtosisError::InvalidConfig(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        if self.levels == 0 {
            return Err(KurtosisError::InvalidConfig(
                "levels must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
