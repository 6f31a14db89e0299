//! # covkernel — Covariance kernels for Gaussian process regression
//!
//! A production-ready covariance kernel engine with analytic derivatives,
//! runtime variant dispatch, and strict hyperparameter validation.
//!
//! ## What is a covariance kernel?
//!
//! A covariance kernel (or covariance function) encodes the similarity
//! between two points in the input space of a Gaussian process. Given a pair
//! of points it returns a scalar covariance; collections of those scalars
//! form the covariance matrices at the heart of GP regression and Bayesian
//! optimization. The kernels in this crate are stationary: the covariance
//! depends only on the separation between the points, scaled per dimension
//! by a length scale.
//!
//! **Key advantages:**
//! - Analytic derivatives with respect to both inputs and hyperparameters
//!   (no finite differencing in the hot path)
//! - Per-dimension length scales (automatic relevance determination)
//! - Eager hyperparameter validation — invalid values are rejected at
//!   construction, never discovered mid-run
//! - Runtime variant selection through a string-tag registry
//! - Honest capability reporting: a variant that cannot compute an
//!   operation says so up front instead of returning garbage
//!
//! **Common applications:**
//! - Gaussian process regression and interpolation (kriging)
//! - Bayesian optimization of expensive black-box functions
//! - Marginal likelihood maximization (gradients and Hessians of the
//!   covariance feed directly into the optimizer)
//! - Sensitivity analysis via length-scale inspection
//!
//! **How evaluation works:**
//!
//! 1. Hyperparameters `[α, ℓ_1, ..., ℓ_dim]` are validated once, when the
//!    kernel is built or updated
//! 2. Each evaluation checks that both points match the kernel dimension
//! 3. The scaled squared distance `Σ (x1_i − x2_i)²/ℓ_i²` is accumulated
//! 4. The variant's closed form maps that distance to a covariance, a
//!    gradient, or a Hessian
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use covkernel_rs::prelude::*;
//!
//! // Square exponential kernel: α = 1, one dimension with ℓ = 1.
//! let kernel = SquareExponentialKernel::<f64>::new(&[1.0, 1.0])?;
//!
//! let cov = kernel.evaluate(&[0.0], &[1.0])?;
//! assert!((cov - 0.6065306597126334).abs() < 1e-12);
//!
//! // At identical points the covariance is exactly α.
//! assert_eq!(kernel.evaluate(&[0.3], &[0.3])?, 1.0);
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! ### Derivatives
//!
//! ```rust
//! use covkernel_rs::prelude::*;
//!
//! let kernel = SquareExponentialKernel::<f64>::new(&[1.0, 1.0])?;
//!
//! // ∂cov/∂x1_i, one entry per spatial dimension. Moving x1 toward x2
//! // increases the covariance, so the entry is positive here.
//! let spatial = kernel.spatial_gradient(&[0.0], &[1.0])?;
//! assert!((spatial[0] - 0.6065306597126334).abs() < 1e-12);
//!
//! // ∂cov/∂θ_k over [α, ℓ_1, ..., ℓ_dim].
//! let gradient = kernel.hyperparameter_gradient(&[0.0], &[1.0])?;
//! assert_eq!(gradient.len(), 2);
//!
//! // Second derivatives as an exactly symmetric matrix.
//! let hessian = kernel.hyperparameter_hessian(&[0.0], &[1.0])?;
//! assert_eq!(hessian.at(0, 1), hessian.at(1, 0));
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! ### Runtime Variant Selection
//!
//! When the kernel family comes from configuration rather than code, build
//! through the registry:
//!
//! ```rust
//! use covkernel_rs::prelude::*;
//!
//! let registry = KernelRegistry::<f64>::with_defaults();
//!
//! // Two spatial dimensions: [α, ℓ_1, ℓ_2].
//! let kernel = registry.create("square_exponential", &[2.0, 1.0, 1.0])?;
//! assert_eq!(kernel.evaluate(&[0.0, 0.0], &[0.0, 0.0])?, 2.0);
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! Unknown tags fail with a dedicated error instead of a panic:
//!
//! ```rust
//! use covkernel_rs::prelude::*;
//!
//! let registry = KernelRegistry::<f64>::with_defaults();
//!
//! match registry.create("periodic", &[1.0, 1.0]) {
//!     Ok(kernel) => println!("built {}", kernel.name()),
//!     Err(error) => eprintln!("construction failed: {}", error),
//! }
//! ```
//!
//! ### Capability Checks
//!
//! Variants declare which operations they implement. If a workload needs an
//! operation, assert it at construction:
//!
//! ```rust
//! use covkernel_rs::prelude::*;
//!
//! let registry = KernelRegistry::<f64>::with_defaults();
//!
//! // Matérn 5/2 declares no Hessian support, so this fails up front
//! // instead of halfway through an optimization run.
//! let result = registry.create_supporting(
//!     "matern_5_2",
//!     &[1.0, 1.0],
//!     &[KernelOperation::HyperparameterHessian],
//! );
//! assert!(result.is_err());
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every fallible method returns a `Result<_, KernelError>`. The `?`
//! operator is idiomatic:
//!
//! ```rust
//! use covkernel_rs::prelude::*;
//!
//! let kernel = SquareExponentialKernel::new(&[1.0, 0.5, 2.0])?;
//! let cov = kernel.evaluate(&[0.0, 0.0], &[0.1, 0.2])?;
//! # let _ = cov;
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! But you can also handle errors explicitly:
//!
//! ```rust
//! use covkernel_rs::prelude::*;
//!
//! match SquareExponentialKernel::new(&[1.0, -0.5]) {
//!     Ok(kernel) => println!("dimension: {}", kernel.dim()),
//!     Err(error) => eprintln!("rejected: {}", error),
//! }
//! ```
//!
//! | Error | Raised when |
//! |-------|-------------|
//! | `DimensionMismatch` | A point or hyperparameter slice has the wrong length |
//! | `InvalidHyperparameter` | A hyperparameter is non-positive or non-finite |
//! | `UnsupportedOperation` | A variant is asked for an operation it does not implement |
//! | `UnknownVariant` | A registry lookup uses an unregistered tag |
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments (with `alloc`). Disable default
//! features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! covkernel_rs = { version = "0.1", default-features = false }
//! ```
//!
//! **Minimal example:**
//!
//! ```rust
//! use covkernel_rs::prelude::*;
//!
//! // f32 halves the memory footprint on constrained targets.
//! fn sensor_similarity() -> Result<f32, KernelError> {
//!     let kernel = SquareExponentialKernel::new(&[1.0_f32, 0.8])?;
//!     kernel.evaluate(&[0.2], &[0.5])
//! }
//! # sensor_similarity().unwrap();
//! ```
//!
//! **Tips for embedded/no_std usage:**
//! - Use `f32` instead of `f64` to reduce memory footprint
//! - Reuse one kernel across evaluations; construction validates and
//!   allocates, evaluation of a single pair does not
//! - Prefer direct construction over the registry when the variant is
//!   fixed at compile time
//!
//! ## Kernel Variants
//!
//! | Variant | Tag | `evaluate` | `spatial_gradient` | `hyperparameter_gradient` | `hyperparameter_hessian` |
//! |---------|-----|------------|--------------------|---------------------------|--------------------------|
//! | [`SquareExponentialKernel`](prelude::SquareExponentialKernel) | `square_exponential` | yes | yes | yes | yes |
//! | [`Matern52Kernel`](prelude::Matern52Kernel) | `matern_5_2` | yes | yes | yes | no |
//!
//! **Choosing a variant:**
//! - **Start with the square exponential** when the underlying function is
//!   believed to be smooth; it is infinitely differentiable and has the
//!   complete derivative set, including the Hessian needed by second-order
//!   optimizers
//! - **Use Matérn 5/2** when square-exponential smoothness is implausible;
//!   its sample paths are only twice differentiable, which often models
//!   physical processes better
//!
//! ## Hyperparameters
//!
//! Every variant is parameterized by a single flat vector:
//!
//! | Index | Symbol | Meaning | Constraint |
//! |-------|--------|---------|------------|
//! | `0` | α | Signal variance (covariance of a point with itself) | finite, > 0 |
//! | `1..=dim` | ℓ_i | Length scale for spatial dimension `i − 1` | finite, > 0 |
//!
//! The vector length determines the kernel dimension: `dim = len − 1`.
//! Validation is eager and total — construction and updates reject the
//! first offending value with its index, and a failed update leaves the
//! previous values untouched.
//!
//! ## Thread Safety
//!
//! Kernels are immutable values with interior purity: every evaluation
//! method takes `&self` and touches no hidden state, and the kernel trait
//! requires `Send + Sync`. Any number of threads may therefore share one
//! kernel and evaluate concurrently. Updating hyperparameters takes
//! `&mut self`, so the borrow checker itself serializes updates against
//! reads; no locking is involved.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | yes | Standard library support (`std::error::Error` impl) |
//! | `dev` | no | Re-export internal modules for white-box tests and benchmarks |
//!
//! ## References
//!
//! - Rasmussen, C. E. & Williams, C. K. I. (2006). "Gaussian Processes for Machine Learning"
//! - Stein, M. L. (1999). "Interpolation of Spatial Data: Some Theory for Kriging"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the hyperparameter vector, the error taxonomy, and the
// operation enumeration used for capability reporting.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the scaled distance accumulator, the symmetric matrix used
// for Hessians, and the numeric trait bound shared by all kernels.
mod math;

// Layer 3: Engine - input validation shared by all variants.
//
// Contains the validator that checks point shapes against the kernel
// dimension before any arithmetic runs.
mod engine;

// Layer 4: Kernels - the covariance kernel trait and its variants.
//
// Contains the `CovarianceKernel` trait and the square exponential and
// Matérn 5/2 implementations with their closed-form derivatives.
mod kernels;

// High-level API for kernel construction and dispatch.
//
// Provides the `KernelRegistry` for tag-based construction and re-exports
// the public types.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard covariance kernel prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use covkernel_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        CovarianceKernel, HyperparameterVector, KernelConstructor, KernelError, KernelFloat,
        KernelOperation, KernelRegistry, Matern52Kernel, SquareExponentialKernel, SymmetricMatrix,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal input validation.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal kernel implementations.
    pub mod kernels {
        pub use crate::kernels::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
