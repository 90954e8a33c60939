//! Normalized Gaussian convolution weight tables.
//!
//! Weights are cheap to compute, so they are rebuilt on every blur
//! invocation rather than cached.

use std::f32::consts::PI;

/// Density of the normal distribution with sigma 1 and mean 0
/// at distance `d` from the mean.
fn gaussian(d: f32) -> f32 {
    const SIGMA: f32 = 1.0;
    let sigma2 = SIGMA * SIGMA;
    1.0 / ((2.0 * PI).sqrt() * SIGMA) * (-(d * d) / (2.0 * sigma2)).exp()
}

/// Builds the full `size * size` weight table for a square convolution
/// window, row-major over the offsets `[-size/2, size/2]` in both axes.
/// Each entry is the Gaussian of the Euclidean distance of its offset
/// pair from the window center; the table is normalized to sum to 1.
///
/// Returns an empty table for even (or zero) sizes:
/// a kernel needs a center pixel.
pub fn weights_2d(size: usize) -> Vec<f32> {
    if size % 2 == 0 {
        return Vec::new();
    }

    let half = (size / 2) as i32;
    let mut weights = Vec::with_capacity(size * size);
    let mut sum = 0.0_f32;
    for x in -half..=half {
        for y in -half..=half {
            let distance = ((x * x + y * y) as f32).sqrt();
            let weight = gaussian(distance);
            sum += weight;
            weights.push(weight);
        }
    }

    // normalize
    for weight in &mut weights {
        *weight /= sum;
    }
    weights
}

/// Derives the `size` weights for the two-pass separable blur
/// by taking the square root of each diagonal entry of the
/// normalized 2-D table.
///
/// The result does not itself sum to exactly 1, so the separable blur
/// is a close approximation of the full 2-D convolution rather than a
/// true factorization of it. Returns an empty table for even sizes.
pub fn weights_1d(size: usize) -> Vec<f32> {
    let weights = weights_2d(size);
    if weights.is_empty() {
        return weights;
    }

    (0..size).map(|i| weights[i * size + i].sqrt()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn even_sizes_produce_no_weights() {
        for size in [0, 2, 4, 10, 128] {
            assert!(weights_2d(size).is_empty());
            assert!(weights_1d(size).is_empty());
        }
    }

    #[test]
    fn size_one_is_a_single_unit_weight() {
        assert_eq!(weights_2d(1), vec![1.0]);
        assert_eq!(weights_1d(1), vec![1.0]);
    }

    #[test]
    fn two_d_weights_sum_to_one() {
        for size in [3, 5, 9, 25] {
            let weights = weights_2d(size);
            assert_eq!(weights.len(), size * size);
            let sum: f64 = weights.iter().map(|w| *w as f64).sum();
            assert!((sum - 1.0).abs() < 1e-5, "size {size}: sum {sum}");
        }
    }

    #[quickcheck]
    fn any_odd_size_is_normalized(n: u8) -> bool {
        let size = 2 * (n as usize % 32) + 1;
        let weights = weights_2d(size);
        let sum: f64 = weights.iter().map(|w| *w as f64).sum();
        weights.len() == size * size
            && weights.iter().all(|w| *w >= 0.0)
            && (sum - 1.0).abs() < 1e-5
    }

    #[test]
    fn two_d_weights_are_radially_symmetric() {
        let size = 5;
        let half = (size / 2) as i32;
        let weights = weights_2d(size);
        let at = |x: i32, y: i32| weights[((x + half) * size as i32 + (y + half)) as usize];
        for x in -half..=half {
            for y in -half..=half {
                assert_eq!(at(x, y), at(-x, -y));
                assert_eq!(at(x, y), at(-x, y));
                assert_eq!(at(x, y), at(x, -y));
            }
        }
    }

    #[test]
    fn one_d_weights_are_sqrt_of_the_diagonal() {
        let size = 7;
        let flat = weights_2d(size);
        let derived = weights_1d(size);
        assert_eq!(derived.len(), size);
        for (i, weight) in derived.iter().enumerate() {
            assert_eq!(*weight, flat[i * size + i].sqrt());
        }
    }
}
