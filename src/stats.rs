//! Moment statistics over flattened grids.
//!
//! All moments are population (biased) estimates: central moments are
//! divided by `n`, not `n - 1`. Kurtosis is reported as excess kurtosis,
//! so a normal distribution scores 0.

use ndarray::{ArrayBase, Data, Dimension};

use crate::error::{KurtosisError, Result};

/// Mean and scaled central moments of a sample.
///
/// Deviations from the mean are divided by `scale = max|x - mean|` before
/// being raised to powers, so `m2..m4` lie in `[0, 1]` and the fourth-power
/// sum cannot overflow however large the inputs are. Standardized moments
/// (skewness, kurtosis) are unaffected by the scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    pub count: usize,
    pub mean: f64,
    /// Largest absolute deviation from the mean.
    pub scale: f64,
    /// Second central moment of `(x - mean) / scale`.
    pub m2: f64,
    pub m3: f64,
    pub m4: f64,
}

impl Moments {
    /// Compute moments in sequential passes: count, mean, scale, then
    /// central sums.
    ///
    /// Sums run sequentially so the result does not depend on thread
    /// scheduling. Fails with `NonFiniteInput` if any value is NaN or
    /// infinite.
    pub fn from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = f64> + Clone,
    {
        let count = values.clone().into_iter().count();
        if count == 0 {
            return Err(KurtosisError::DegenerateDistribution);
        }
        let n = count as f64;

        // Summing v / n keeps the running total within the range of the inputs.
        let mean = values.clone().into_iter().map(|v| v / n).sum::<f64>();
        let scale = values
            .clone()
            .into_iter()
            .map(|v| (v - mean).abs())
            .fold(0.0f64, f64::max);
        if !mean.is_finite() || !scale.is_finite() {
            return Err(KurtosisError::NonFiniteInput);
        }
        if scale == 0.0 {
            return Ok(Moments {
                count,
                mean,
                scale,
                m2: 0.0,
                m3: 0.0,
                m4: 0.0,
            });
        }

        let (mut s2, mut s3, mut s4) = (0.0f64, 0.0f64, 0.0f64);
        for v in values {
            let d = (v - mean) / scale;
            let d2 = d * d;
            s2 += d2;
            s3 += d2 * d;
            s4 += d2 * d2;
        }

        Ok(Moments {
            count,
            mean,
            scale,
            m2: s2 / n,
            m3: s3 / n,
            m4: s4 / n,
        })
    }

    /// Compute moments of every element of an array, in logical order.
    pub fn of<S, D>(array: &ArrayBase<S, D>) -> Result<Self>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        Self::from_values(array.iter().copied())
    }

    /// Population variance. Infinite if it exceeds the `f64` range.
    pub fn variance(&self) -> f64 {
        self.m2 * self.scale * self.scale
    }

    fn check_spread(&self) -> Result<()> {
        if self.m2 > 0.0 {
            Ok(())
        } else {
            Err(KurtosisError::DegenerateDistribution)
        }
    }

    /// Excess kurtosis `m4 / m2^2 - 3`.
    pub fn excess_kurtosis(&self) -> Result<f64> {
        self.check_spread()?;
        Ok(self.m4 / (self.m2 * self.m2) - 3.0)
    }

    /// Skewness `m3 / m2^(3/2)`.
    pub fn skewness(&self) -> Result<f64> {
        self.check_spread()?;
        Ok(self.m3 / self.m2.powf(1.5))
    }
}

/// Excess kurtosis of all elements of an array.
///
/// Fails with `DegenerateDistribution` for empty or constant input and
/// `NonFiniteInput` if any element is NaN or infinite.
pub fn excess_kurtosis<S, D>(array: &ArrayBase<S, D>) -> Result<f64>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    Moments::of(array)?.excess_kurtosis()
}

/// Skewness of all elements of an array.
pub fn skewness<S, D>(array: &ArrayBase<S, D>) -> Result<f64>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    Moments::of(array)?.skewness()
}
