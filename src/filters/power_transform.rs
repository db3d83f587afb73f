//! Power transform filters: positivity shift and Box-Cox.
//!
//! The Box-Cox family is only defined for strictly positive inputs, so grids
//! are first shifted so that their minimum becomes [`POSITIVITY_EPSILON`].
//!
//! ## Box-Cox
//!
//! | lambda | y |
//! |--------|---|
//! | 0 | ln(x) |
//! | otherwise | (x^lambda - 1) / lambda |
//!
//! The transform is monotonic in `x` for every lambda. The power branch is
//! evaluated as `expm1(lambda * ln x) / lambda`, which stays accurate as
//! lambda approaches 0.

use ndarray::{Array2, ArrayView2};
use rayon::prelude::*;

use crate::error::{KurtosisError, Result};

/// Value the minimum of a shifted grid is moved to.
pub const POSITIVITY_EPSILON: f64 = 1e-6;

/// |lambda| below this uses the logarithmic branch.
const LAMBDA_ZERO: f64 = 1e-10;

// ============================================================================
// Positivity Shift
// ============================================================================

/// Translate a grid so its minimum becomes [`POSITIVITY_EPSILON`].
///
/// Computes `x - min(x) + 1e-6` for every element. An empty grid is
/// returned unchanged.
pub fn shift_positive(input: ArrayView2<f64>) -> Array2<f64> {
    let min = input.iter().copied().fold(f64::INFINITY, f64::min);
    if !min.is_finite() {
        return input.to_owned();
    }
    input.mapv(|v| v - min + POSITIVITY_EPSILON)
}

// ============================================================================
// Box-Cox
// ============================================================================

/// Box-Cox transform of a single positive value.
#[inline]
pub fn box_cox_value(x: f64, lambda: f64) -> f64 {
    if lambda.abs() < LAMBDA_ZERO {
        x.ln()
    } else {
        (lambda * x.ln()).exp_m1() / lambda
    }
}

/// Apply the Box-Cox transform to every element of a positive grid.
///
/// The element map runs in parallel; each output depends only on its own
/// input, so the result is identical to a sequential pass.
///
/// # Arguments
/// * `input` - Strictly positive grid (see [`shift_positive`])
/// * `lambda` - Transform parameter
///
/// # Returns
/// Transformed grid of the same shape, or `NumericOverflow` if any value is
/// not finite (overflow, or an input outside the transform's domain)
pub fn box_cox(input: ArrayView2<f64>, lambda: f64) -> Result<Array2<f64>> {
    let mut output = input.as_standard_layout().into_owned();

    let all_finite = match output.as_slice_mut() {
        Some(data) => {
            data.par_iter_mut()
                .for_each(|v| *v = box_cox_value(*v, lambda));
            data.par_iter().all(|v| v.is_finite())
        }
        None => {
            output.mapv_inplace(|x| box_cox_value(x, lambda));
            output.iter().all(|v| v.is_finite())
        }
    };

    if !all_finite {
        return Err(KurtosisError::NumericOverflow { lambda });
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_shift_positive_minimum_is_epsilon() {
        let grid = array![[-2.5, 0.0], [1.0, 3.0]];
        let shifted = shift_positive(grid.view());

        let min = shifted.iter().copied().fold(f64::INFINITY, f64::min);
        assert!((min - POSITIVITY_EPSILON).abs() < 1e-15);
        assert!(shifted.iter().all(|&v| v >= POSITIVITY_EPSILON));
        // Differences are preserved
        assert!((shifted[[1, 1]] - shifted[[0, 0]] - 5.5).abs() < 1e-12);
    }

    #[test]
    fn test_box_cox_lambda_zero_is_log() {
        let grid = array![[1.0, std::f64::consts::E]];
        let result = box_cox(grid.view(), 0.0).unwrap();

        assert!(result[[0, 0]].abs() < 1e-12);
        assert!((result[[0, 1]] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_box_cox_lambda_one_is_shift() {
        let grid = array![[0.5, 2.0, 10.0]];
        let result = box_cox(grid.view(), 1.0).unwrap();

        assert!((result[[0, 0]] + 0.5).abs() < 1e-12);
        assert!((result[[0, 1]] - 1.0).abs() < 1e-12);
        assert!((result[[0, 2]] - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_box_cox_lambda_two() {
        // (3^2 - 1) / 2 = 4
        assert!((box_cox_value(3.0, 2.0) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_box_cox_near_zero_lambda_approaches_log() {
        let x = 5.0f64;
        assert!((box_cox_value(x, 1e-6) - x.ln()).abs() < 1e-4);
    }

    #[test]
    fn test_box_cox_small_lambda_keeps_precision() {
        // expm1 avoids the cancellation in x^lambda - 1 just above the log cutoff
        let x = 5.0f64;
        let lambda = 1e-9;
        let expected = x.ln() + lambda * x.ln() * x.ln() / 2.0;
        assert!((box_cox_value(x, lambda) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_box_cox_non_contiguous_input() {
        let grid = array![[1.0, 2.0], [3.0, 4.0]];
        let transposed = grid.t();
        let result = box_cox(transposed, 1.0).unwrap();
        assert_eq!(result, array![[0.0, 2.0], [1.0, 3.0]]);
    }

    #[test]
    fn test_box_cox_is_monotonic() {
        let grid = array![[0.1, 0.5, 1.0, 2.0, 7.0]];
        for &lambda in &[-1.0, -0.3, 0.0, 0.4, 1.0, 2.5] {
            let result = box_cox(grid.view(), lambda).unwrap();
            for i in 1..5 {
                assert!(result[[0, i]] > result[[0, i - 1]], "lambda = {}", lambda);
            }
        }
    }

    #[test]
    fn test_box_cox_overflow_is_error() {
        let grid = array![[1e10, 2.0]];
        let err = box_cox(grid.view(), 400.0).unwrap_err();
        assert!(matches!(err, KurtosisError::NumericOverflow { lambda } if lambda == 400.0));
    }

    #[test]
    fn test_box_cox_negative_input_is_error() {
        let grid = array![[-1.0, 2.0]];
        assert!(box_cox(grid.view(), 0.0).is_err());
    }
}
