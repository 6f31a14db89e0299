//! Layer 4: Kernels
//!
//! # Purpose
//!
//! This layer defines the covariance kernel contract and its concrete
//! variants. A kernel maps two points and a hyperparameter vector to a
//! scalar similarity plus three families of exact analytic derivatives,
//! which downstream regression and hyperparameter optimization consume.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Kernels ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::linalg::KernelFloat;
use crate::math::symmetric::SymmetricMatrix;
use crate::primitives::errors::KernelError;
use crate::primitives::hyperparameters::HyperparameterVector;
use crate::primitives::operation::KernelOperation;

/// The Matérn ν = 5/2 kernel.
pub mod matern;

/// The square-exponential (Gaussian/RBF) kernel.
pub mod square_exponential;

// ============================================================================
// Kernel contract
// ============================================================================

/// Contract implemented by every covariance kernel variant.
///
/// A kernel owns exactly one validated [`HyperparameterVector`] and is
/// stateless beyond it: the four evaluation operations take `&self`, read
/// only the stored hyperparameters and their arguments, and allocate only
/// their outputs. Together with the `Send + Sync` supertrait this makes a
/// shared `&kernel` safe to evaluate from many threads at once, which is the
/// expected usage when a caller assembles an N×N covariance matrix over
/// O(N²) independent point pairs.
///
/// Hyperparameter updates go through `set_hyperparameters(&mut self, ..)`,
/// so the borrow checker statically rules out a mutation racing in-flight
/// evaluations; the update phase is exclusive by construction.
///
/// # Capability declaration
///
/// Not every variant supports all four operations.
/// [`supported_operations`](CovarianceKernel::supported_operations) declares
/// the subset a variant implements; anything outside it fails with
/// [`KernelError::UnsupportedOperation`] naming the variant and the
/// operation, never by silently returning zero or an approximation. The
/// registry can check the declaration at lookup time
/// (`create_supporting`), so an unsupported combination is discoverable
/// before a hot loop rather than by trial inside one.
pub trait CovarianceKernel<T: KernelFloat>: Send + Sync {
    /// Registry tag of this variant (e.g. `"square_exponential"`).
    fn name(&self) -> &'static str;

    /// Spatial dimension the kernel operates in.
    fn dim(&self) -> usize;

    /// Number of hyperparameters. The variants in this crate use the signal
    /// variance plus one length scale per dimension (`dim() + 1`);
    /// differently parameterized variants override this.
    fn num_hyperparameters(&self) -> usize {
        self.dim() + 1
    }

    /// Detached copy of the owned hyperparameters. Mutating the returned
    /// vector cannot affect kernel state.
    fn hyperparameters(&self) -> HyperparameterVector<T>;

    /// Replace the hyperparameters with a validated copy of `values`.
    ///
    /// Fails with `DimensionMismatch` when the count differs from
    /// [`num_hyperparameters`](CovarianceKernel::num_hyperparameters), or
    /// `InvalidHyperparameter` when any entry is non-finite or not strictly
    /// positive. On error the stored values are untouched.
    fn set_hyperparameters(&mut self, values: &[T]) -> Result<(), KernelError>;

    /// The operations this variant implements.
    fn supported_operations(&self) -> &'static [KernelOperation];

    /// Whether this variant implements `operation`.
    fn supports(&self, operation: KernelOperation) -> bool {
        self.supported_operations().contains(&operation)
    }

    /// Covariance between two points. Symmetric in its arguments; both must
    /// have length [`dim`](CovarianceKernel::dim), else `DimensionMismatch`
    /// before any arithmetic.
    fn evaluate(&self, point_one: &[T], point_two: &[T]) -> Result<T, KernelError>;

    /// Gradient of [`evaluate`](CovarianceKernel::evaluate) with respect to
    /// `point_one` only, length `dim`. Not symmetric; the gradient with
    /// respect to `point_two` is derived per variant, not assumed.
    fn spatial_gradient(&self, point_one: &[T], point_two: &[T]) -> Result<Vec<T>, KernelError>;

    /// Gradient of `evaluate` with respect to the hyperparameter vector, in
    /// [`HyperparameterVector`] index order (α first, then length scales),
    /// length `dim + 1`.
    fn hyperparameter_gradient(
        &self,
        point_one: &[T],
        point_two: &[T],
    ) -> Result<Vec<T>, KernelError>;

    /// Hessian of `evaluate` with respect to the hyperparameters,
    /// `(dim + 1) × (dim + 1)`. `H[i][j] == H[j][i]` holds exactly:
    /// implementations compute the upper triangle and mirror through
    /// [`SymmetricMatrix::set`].
    fn hyperparameter_hessian(
        &self,
        point_one: &[T],
        point_two: &[T],
    ) -> Result<SymmetricMatrix<T>, KernelError>;
}

impl<'a, T: KernelFloat> core::fmt::Debug for dyn CovarianceKernel<T> + 'a {
    fn fmt(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        formatter
            .debug_struct("CovarianceKernel")
            .field("name", &self.name())
            .field("dim", &self.dim())
            .finish()
    }
}
