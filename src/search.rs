//! Fixed-step parameter search.
//!
//! Walks a parameter from a start value in constant steps until an
//! objective measured at that parameter lands within tolerance of a target.
//! The walk is a plain line scan: no bracketing, no step adaptation, no
//! divergence detection. An optional iteration cap turns a hopeless search
//! into a [`SearchOutcome::NotConverged`] instead of a hang.

use log::{debug, trace};

use crate::error::Result;

/// Where a search stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchState {
    /// Parameter at which the objective was last measured.
    pub lambda: f64,
    /// Objective value at `lambda`.
    pub value: f64,
    /// Number of parameter increments performed.
    pub iterations: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchOutcome {
    Converged(SearchState),
    NotConverged(SearchState),
}

impl SearchOutcome {
    pub fn state(&self) -> SearchState {
        match *self {
            SearchOutcome::Converged(state) | SearchOutcome::NotConverged(state) => state,
        }
    }

    pub fn is_converged(&self) -> bool {
        matches!(self, SearchOutcome::Converged(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSearch {
    pub start: f64,
    pub step: f64,
    pub target: f64,
    pub tolerance: f64,
    /// `None` searches forever.
    pub max_iterations: Option<usize>,
}

impl LineSearch {
    /// Run the scan against `objective`.
    ///
    /// The objective is measured once at `start`; the loop then keeps
    /// adding `step` while `|value - target| > tolerance`. Errors from the
    /// objective abort the search.
    pub fn run<F>(&self, mut objective: F) -> Result<SearchOutcome>
    where
        F: FnMut(f64) -> Result<f64>,
    {
        let mut lambda = self.start;
        let mut value = objective(lambda)?;
        let mut iterations = 0usize;
        debug!(
            "search start: lambda = {}, value = {}, target = {}",
            lambda, value, self.target
        );

        while (value - self.target).abs() > self.tolerance {
            if let Some(max) = self.max_iterations {
                if iterations >= max {
                    return Ok(SearchOutcome::NotConverged(SearchState {
                        lambda,
                        value,
                        iterations,
                    }));
                }
            }

            lambda += self.step;
            value = objective(lambda)?;
            iterations += 1;
            trace!("iteration {}: lambda = {}, value = {}", iterations, lambda, value);
        }

        Ok(SearchOutcome::Converged(SearchState {
            lambda,
            value,
            iterations,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KurtosisError;

    fn search(start: f64, step: f64, target: f64, max: Option<usize>) -> LineSearch {
        LineSearch {
            start,
            step,
            target,
            tolerance: 0.01,
            max_iterations: max,
        }
    }

    #[test]
    fn test_already_within_tolerance() {
        let outcome = search(0.0, 0.01, 0.005, Some(10)).run(|l| Ok(l)).unwrap();
        assert_eq!(
            outcome,
            SearchOutcome::Converged(SearchState {
                lambda: 0.0,
                value: 0.0,
                iterations: 0
            })
        );
    }

    #[test]
    fn test_identity_objective_converges() {
        let outcome = search(0.0, 0.01, 0.5, None).run(|l| Ok(l)).unwrap();
        let state = outcome.state();

        assert!(outcome.is_converged());
        assert!((state.value - 0.5).abs() <= 0.01);
        assert!((49..=51).contains(&state.iterations));
    }

    #[test]
    fn test_lambda_increases_by_exact_step() {
        let step = 0.25;
        let mut seen = Vec::new();
        search(1.0, step, 3.0, Some(100))
            .run(|l| {
                seen.push(l);
                Ok(l)
            })
            .unwrap();

        assert_eq!(seen, vec![1.0, 1.25, 1.5, 1.75, 2.0, 2.25, 2.5, 2.75, 3.0]);
        for pair in seen.windows(2) {
            assert_eq!(pair[1] - pair[0], step);
        }
    }

    #[test]
    fn test_negative_step_walks_down() {
        let outcome = search(1.0, -0.1, 0.3, Some(100)).run(|l| Ok(l)).unwrap();
        assert!(outcome.is_converged());
        assert!((outcome.state().lambda - 0.3).abs() < 0.011);
    }

    #[test]
    fn test_unreachable_target_hits_cap() {
        let outcome = search(0.0, 0.01, 5.0, Some(25)).run(|_| Ok(1.0)).unwrap();
        match outcome {
            SearchOutcome::NotConverged(state) => {
                assert_eq!(state.iterations, 25);
                assert_eq!(state.value, 1.0);
            }
            other => panic!("expected NotConverged, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_cap_measures_once() {
        let mut calls = 0;
        let outcome = search(0.0, 0.01, 5.0, Some(0))
            .run(|l| {
                calls += 1;
                Ok(l)
            })
            .unwrap();
        assert!(!outcome.is_converged());
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_objective_error_propagates() {
        let err = search(0.0, 1.0, 10.0, None)
            .run(|l| {
                if l >= 3.0 {
                    Err(KurtosisError::NumericOverflow { lambda: l })
                } else {
                    Ok(l)
                }
            })
            .unwrap_err();
        assert!(matches!(err, KurtosisError::NumericOverflow { lambda } if lambda == 3.0));
    }
}
