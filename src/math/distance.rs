//! Anisotropic scaled-distance accumulation.
//!
//! ## Purpose
//!
//! This module provides the shared distance computation both kernel variants
//! are built on: the squared distance between two points with each dimension
//! divided by its own length scale.
//!
//! ## Design notes
//!
//! * **Single accumulation**: the sum is folded in one pass so callers apply
//!   at most one transcendental (`exp`, `sqrt`) to the result.
//! * **Contract, not validation**: slice lengths are a caller obligation
//!   checked with `debug_assert`; public entry points validate shapes via
//!   the engine validator before reaching this code.
//!
//! ## Invariants
//!
//! * All three slices have equal length.
//! * Scales are strictly positive (guaranteed by `HyperparameterVector`).
//!
//! ## Non-goals
//!
//! * This module does not implement kernel formulas (handled by `kernels`).

// External dependencies
use num_traits::Float;

/// Squared anisotropic distance `Σ_i ((a_i − b_i) / scales_i)²`.
///
/// This is the exponent driver for the square-exponential kernel and, via a
/// square root, the scaled radius of the Matérn family.
#[inline]
pub fn scaled_square_distance<T: Float>(point_one: &[T], point_two: &[T], scales: &[T]) -> T {
    debug_assert_eq!(point_one.len(), point_two.len());
    debug_assert_eq!(point_one.len(), scales.len());

    point_one
        .iter()
        .zip(point_two.iter())
        .zip(scales.iter())
        .fold(T::zero(), |acc, ((&a, &b), &scale)| {
            let delta = (a - b) / scale;
            acc + delta * delta
        })
}
