//! Noise source: standard normal sample grids.
//!
//! Every generated image starts from a grid of independent N(0, 1) samples.
//! Seeding is explicit so that identical seeds give identical grids.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

// ============================================================================
// Standard Normal Grid
// ============================================================================

/// Draw a grid of independent standard normal samples from `rng`.
///
/// Samples are drawn in row-major order, so the same RNG state always
/// yields the same grid for a given shape.
///
/// # Arguments
/// * `rng` - Random source
/// * `height` - Number of rows
/// * `width` - Number of columns
///
/// # Returns
/// Array of shape (height, width) with mean 0 and standard deviation 1
pub fn standard_normal_grid<R: Rng + ?Sized>(
    rng: &mut R,
    height: usize,
    width: usize,
) -> Array2<f64> {
    Array2::from_shape_simple_fn((height, width), || {
        let z: f64 = StandardNormal.sample(rng);
        z
    })
}

/// Draw a standard normal grid from a seeded `StdRng`.
///
/// `None` seeds from OS entropy.
pub fn seeded_standard_normal_grid(seed: Option<u64>, height: usize, width: usize) -> Array2<f64> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    standard_normal_grid(&mut rng, height, width)
}
