//! Validated, defensively copied hyperparameter storage.
//!
//! ## Purpose
//!
//! This module defines `HyperparameterVector`, the ordered hyperparameter
//! container owned by every kernel: index 0 is the signal variance α
//! (`σ_f²`), indices 1..=dim are per-dimension length scales ℓ_i.
//!
//! ## Design notes
//!
//! * **Defensive copies**: construction and `set` copy caller storage, and
//!   `to_vec` returns a detached copy, so no shared mutable aliasing exists
//!   between a kernel and its callers in either direction.
//! * **Eager validation**: positivity and finiteness are enforced when
//!   values enter, never re-checked during evaluation. An invalid
//!   hyperparameter state cannot be evaluated against.
//! * **Wholesale replacement**: `set` replaces the entire vector or nothing;
//!   a failed `set` leaves the stored values untouched, so a half-updated
//!   state can never be observed.
//!
//! ## Invariants
//!
//! * Length is at least 2 (α plus one length scale) and immutable after
//!   construction; changing dimensionality means constructing a new kernel.
//! * Every stored entry is finite and strictly positive.
//!
//! ## Non-goals
//!
//! * This module does not interpret the values (kernel formulas live in
//!   `kernels`).
//! * This module does not bound-check spatial points (handled by the
//!   `engine` validator).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::KernelError;

/// Ordered hyperparameter vector with value semantics.
///
/// Layout: `[α, ℓ_1, ..., ℓ_dim]`. The signal variance α scales the whole
/// covariance; each length scale ℓ_i controls sensitivity to distance along
/// dimension i.
#[derive(Debug, Clone, PartialEq)]
pub struct HyperparameterVector<T> {
    /// Stored values, always an independent copy of caller input.
    values: Vec<T>,
}

impl<T: Float> HyperparameterVector<T> {
    /// Minimum number of entries: the signal variance plus one length scale.
    pub const MIN_LEN: usize = 2;

    /// Build a vector by copying and validating `values`.
    ///
    /// Fails with `DimensionMismatch` when fewer than [`Self::MIN_LEN`]
    /// entries are supplied, or `InvalidHyperparameter` when any entry is
    /// non-finite or not strictly positive.
    pub fn new(values: &[T]) -> Result<Self, KernelError> {
        Self::check_values(values)?;
        Ok(Self {
            values: values.to_vec(),
        })
    }

    /// Replace the stored vector with a validated copy of `values`.
    ///
    /// The replacement is all-or-nothing: on any error the stored values are
    /// left exactly as they were.
    pub fn set(&mut self, values: &[T]) -> Result<(), KernelError> {
        // Check 1: length must match the configured size.
        if values.len() != self.values.len() {
            return Err(KernelError::DimensionMismatch {
                expected: self.values.len(),
                got: values.len(),
                context: "hyperparameters",
            });
        }

        // Check 2: same value constraints as construction.
        Self::check_values(values)?;

        self.values.copy_from_slice(values);
        Ok(())
    }

    /// Number of hyperparameters (`dim + 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; kept for API completeness (length is at least 2 by
    /// construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Spatial dimension the kernel operates in (`len() - 1`).
    #[inline]
    pub fn dim(&self) -> usize {
        self.values.len() - 1
    }

    /// The signal variance α (index 0). Equals `evaluate(x, x)` for every
    /// kernel variant in this crate.
    #[inline]
    pub fn signal_variance(&self) -> T {
        self.values[0]
    }

    /// The per-dimension length scales (indices 1..).
    #[inline]
    pub fn length_scales(&self) -> &[T] {
        &self.values[1..]
    }

    /// The length scale for one dimension.
    ///
    /// # Panics
    ///
    /// Panics when `dimension >= dim()`.
    #[inline]
    pub fn length_scale(&self, dimension: usize) -> T {
        self.values[1 + dimension]
    }

    /// Read-only view of the full vector.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Detached copy of the full vector. Mutating the returned buffer cannot
    /// affect the stored values.
    pub fn to_vec(&self) -> Vec<T> {
        self.values.clone()
    }

    /// Fail-fast validation shared by `new` and `set`.
    fn check_values(values: &[T]) -> Result<(), KernelError> {
        // Check 1: enough entries to describe at least one dimension.
        if values.len() < Self::MIN_LEN {
            return Err(KernelError::DimensionMismatch {
                expected: Self::MIN_LEN,
                got: values.len(),
                context: "hyperparameters",
            });
        }

        // Check 2: every entry finite and strictly positive.
        for (index, &value) in values.iter().enumerate() {
            if !value.is_finite() || value <= T::zero() {
                return Err(KernelError::InvalidHyperparameter {
                    index,
                    value: value.to_f64().unwrap_or(f64::NAN),
                    reason: "must be > 0 and finite",
                });
            }
        }

        Ok(())
    }
}
