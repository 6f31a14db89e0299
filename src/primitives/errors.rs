//! Error types for covariance kernel construction and evaluation.
//!
//! ## Purpose
//!
//! This module defines `KernelError`, the single error type surfaced by the
//! crate. Every failure is detected synchronously at the offending call and
//! returned to the immediate caller; nothing is retried or silently
//! downgraded to `NaN` or zero inside the kernel.
//!
//! ## Design notes
//!
//! * **Four kinds**: shape disagreements, invalid hyperparameter values,
//!   unsupported variant/operation combinations, and unknown registry tags.
//! * **Early detection**: dimension checks run before any arithmetic, so no
//!   partially computed result exists on an error path.
//! * **Payload precision**: offending values are carried as `f64` regardless
//!   of the kernel's numeric type, keeping the error type non-generic.
//!
//! ## Invariants
//!
//! * Error construction never allocates except for the owned registry tag.
//!
//! ## Non-goals
//!
//! * This module does not decide recovery policy (callers retry with
//!   corrected inputs or give up).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt;

// Internal dependencies
use crate::primitives::operation::KernelOperation;

/// Error conditions reported by kernel construction, configuration, and
/// evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum KernelError {
    /// A point or hyperparameter slice disagrees with the kernel's
    /// configured dimension.
    DimensionMismatch {
        /// Expected length. For hyperparameter construction this is the
        /// minimum viable length (2: signal variance plus one length scale).
        expected: usize,
        /// Length actually supplied.
        got: usize,
        /// Which argument was malformed (`"point_one"`, `"point_two"`,
        /// `"hyperparameters"`).
        context: &'static str,
    },

    /// A hyperparameter value violates its positivity/finiteness invariant.
    InvalidHyperparameter {
        /// Index of the offending entry (0 is the signal variance,
        /// 1..=dim are length scales).
        index: usize,
        /// The offending value, widened to `f64`.
        value: f64,
        /// The violated constraint.
        reason: &'static str,
    },

    /// A kernel variant does not implement one of the contract operations.
    UnsupportedOperation {
        /// Registry tag of the variant.
        variant: &'static str,
        /// The operation that is not available.
        operation: KernelOperation,
    },

    /// A registry lookup used a tag with no registered constructor.
    UnknownVariant {
        /// The tag that missed.
        tag: String,
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::DimensionMismatch {
                expected,
                got,
                context,
            } => write!(
                f,
                "Dimension mismatch: {} has length {}, expected {}",
                context, got, expected
            ),
            KernelError::InvalidHyperparameter {
                index,
                value,
                reason,
            } => write!(
                f,
                "Invalid hyperparameter at index {}: {} ({})",
                index, value, reason
            ),
            KernelError::UnsupportedOperation { variant, operation } => write!(
                f,
                "Kernel '{}' does not support operation: {}",
                variant, operation
            ),
            KernelError::UnknownVariant { tag } => {
                write!(f, "Unknown kernel variant: '{}' (not registered)", tag)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KernelError {}
