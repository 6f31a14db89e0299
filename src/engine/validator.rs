//! Input validation for kernel evaluation calls.
//!
//! ## Purpose
//!
//! This module provides the shape checks every evaluation operation runs
//! before touching any arithmetic. A dimension mismatch is reported as an
//! error, never as a partial computation or a panic.
//!
//! ## Design notes
//!
//! * **Fail-fast**: validation stops at the first violation.
//! * **Shapes only**: coordinate values are not range-checked; non-finite
//!   coordinates propagate through arithmetic (documented crate behavior).
//!   Hyperparameter values, by contrast, are validated where they enter
//!   (`HyperparameterVector`), so per-call re-checks are unnecessary.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not validate hyperparameter values (handled by
//!   `primitives::hyperparameters`).
//! * This module does not perform any kernel computation.

// Internal dependencies
use crate::primitives::errors::KernelError;

/// Validation utility for kernel evaluation inputs.
///
/// Provides static methods returning `Result<(), KernelError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate one point against the kernel's spatial dimension.
    pub fn validate_point<T>(
        dim: usize,
        point: &[T],
        context: &'static str,
    ) -> Result<(), KernelError> {
        // Check 1: coordinate count matches the kernel dimension.
        if point.len() != dim {
            return Err(KernelError::DimensionMismatch {
                expected: dim,
                got: point.len(),
                context,
            });
        }
        Ok(())
    }

    /// Validate both points of an evaluation call, in argument order.
    pub fn validate_points<T>(
        dim: usize,
        point_one: &[T],
        point_two: &[T],
    ) -> Result<(), KernelError> {
        // Check 1: first point.
        Self::validate_point(dim, point_one, "point_one")?;

        // Check 2: second point.
        Self::validate_point(dim, point_two, "point_two")?;

        Ok(())
    }
}
