//! Kernel operation identifiers for capability declaration.
//!
//! ## Purpose
//!
//! This module defines the `KernelOperation` enum naming the four operations
//! of the covariance kernel contract. Kernel variants declare which subset
//! they support, and error reporting uses these identifiers to name the
//! operation that failed.
//!
//! ## Design notes
//!
//! * **Closed set**: The contract has exactly four operations; the enum is
//!   exhaustive and `Copy`.
//! * **Stable names**: `Display` renders the trait method name, so error
//!   messages point directly at the call site API.
//!
//! ## Non-goals
//!
//! * This module does not perform any computation (handled by `kernels`).

// External dependencies
use core::fmt;

/// Identifier for one operation of the covariance kernel contract.
///
/// Used by kernel variants to declare capability and by
/// `KernelError::UnsupportedOperation` to name the offending call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelOperation {
    /// Covariance value for a point pair.
    Evaluate,

    /// Gradient of the covariance with respect to the first point.
    SpatialGradient,

    /// Gradient of the covariance with respect to the hyperparameters.
    HyperparameterGradient,

    /// Hessian of the covariance with respect to the hyperparameters.
    HyperparameterHessian,
}

impl KernelOperation {
    /// All four contract operations, in declaration order.
    pub const ALL: [KernelOperation; 4] = [
        KernelOperation::Evaluate,
        KernelOperation::SpatialGradient,
        KernelOperation::HyperparameterGradient,
        KernelOperation::HyperparameterHessian,
    ];

    /// The trait method name of this operation.
    pub const fn method_name(&self) -> &'static str {
        match self {
            KernelOperation::Evaluate => "evaluate",
            KernelOperation::SpatialGradient => "spatial_gradient",
            KernelOperation::HyperparameterGradient => "hyperparameter_gradient",
            KernelOperation::HyperparameterHessian => "hyperparameter_hessian",
        }
    }
}

impl fmt::Display for KernelOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method_name())
    }
}
