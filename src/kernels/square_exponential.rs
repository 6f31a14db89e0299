//! Square-exponential covariance kernel with per-dimension length scales.
//!
//! ## Purpose
//!
//! This module implements the reference kernel variant:
//!
//! ```text
//! cov(x1, x2) = α · exp(-½ · Σ_i (x1_i − x2_i)² / ℓ_i²)
//! ```
//!
//! with closed forms for all three derivative families, so it supports the
//! full contract.
//!
//! ## Design notes
//!
//! * **One exponential per call**: the exponent is accumulated as a single
//!   sum and `exp` is applied once; every derivative reuses that covariance
//!   value instead of recomputing the transcendental.
//! * **Shared first-derivative factors**: all Hessian entries are products
//!   of the per-dimension factors `(x1_i − x2_i)²/ℓ_i³`, so those are
//!   computed once per call.
//! * **Mirrored Hessian**: only the upper triangle is computed; the
//!   symmetric setter writes both cells, making `H[i][j] == H[j][i]` exact.
//!
//! ## Key concepts
//!
//! Derivatives (α at hyperparameter index 0, ℓ_i at index i + 1):
//!
//! ```text
//! ∂cov/∂x1_i   = −cov · (x1_i − x2_i)/ℓ_i²
//! ∂cov/∂α      =  cov/α
//! ∂cov/∂ℓ_i    =  cov · (x1_i − x2_i)²/ℓ_i³
//! ∂²cov/∂α²    =  0                             (linear in α)
//! ∂²cov/∂α∂ℓ_i = (cov/α) · (x1_i − x2_i)²/ℓ_i³
//! ∂²cov/∂ℓ_i∂ℓ_j = cov · (x1_i−x2_i)²/ℓ_i³ · (x1_j−x2_j)²/ℓ_j³   (i ≠ j)
//! ∂²cov/∂ℓ_i²  =  cov · [(x1_i−x2_i)⁴/ℓ_i⁶ − 3·(x1_i−x2_i)²/ℓ_i⁴]
//! ```
//!
//! ## Invariants
//!
//! * `evaluate(x, x) == α` exactly (the distance term is zero).
//! * Identical points are well-defined for every operation; nothing divides
//!   by the distance.
//!
//! ## Non-goals
//!
//! * This module does not validate hyperparameter values (handled by
//!   `HyperparameterVector`) or assemble covariance matrices (caller's
//!   concern).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::boxed::Box;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::kernels::CovarianceKernel;
use crate::math::distance::scaled_square_distance;
use crate::math::linalg::KernelFloat;
use crate::math::symmetric::SymmetricMatrix;
use crate::primitives::errors::KernelError;
use crate::primitives::hyperparameters::HyperparameterVector;
use crate::primitives::operation::KernelOperation;

/// The square-exponential (Gaussian/RBF) kernel.
///
/// Infinitely differentiable and the default similarity choice for smooth
/// objective surfaces. Supports the full contract, including the
/// hyperparameter Hessian used by second-order optimization.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareExponentialKernel<T> {
    /// Owned hyperparameters: `[α, ℓ_1, ..., ℓ_dim]`.
    hyperparameters: HyperparameterVector<T>,
}

impl<T: KernelFloat> SquareExponentialKernel<T> {
    /// Registry tag for this variant.
    pub const NAME: &'static str = "square_exponential";

    /// Build a kernel from raw hyperparameter values `[α, ℓ_1, ..., ℓ_dim]`.
    ///
    /// The slice is copied and validated; see [`HyperparameterVector::new`].
    pub fn new(hyperparameters: &[T]) -> Result<Self, KernelError> {
        Ok(Self::from_vector(HyperparameterVector::new(
            hyperparameters,
        )?))
    }

    /// Build a kernel from an already validated hyperparameter vector.
    pub fn from_vector(hyperparameters: HyperparameterVector<T>) -> Self {
        Self { hyperparameters }
    }

    /// Registry constructor; see [`crate::prelude::KernelConstructor`].
    pub fn construct(
        hyperparameters: &HyperparameterVector<T>,
    ) -> Result<Box<dyn CovarianceKernel<T>>, KernelError> {
        Ok(Box::new(Self::from_vector(hyperparameters.clone())))
    }

    /// Covariance for pre-validated points: one accumulated exponent, one
    /// `exp`.
    #[inline]
    fn covariance(&self, point_one: &[T], point_two: &[T]) -> T {
        let half = T::from(0.5).unwrap();
        let exponent = scaled_square_distance(
            point_one,
            point_two,
            self.hyperparameters.length_scales(),
        );
        self.hyperparameters.signal_variance() * (-half * exponent).exp()
    }
}

impl<T: KernelFloat> CovarianceKernel<T> for SquareExponentialKernel<T> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn dim(&self) -> usize {
        self.hyperparameters.dim()
    }

    fn hyperparameters(&self) -> HyperparameterVector<T> {
        self.hyperparameters.clone()
    }

    fn set_hyperparameters(&mut self, values: &[T]) -> Result<(), KernelError> {
        self.hyperparameters.set(values)
    }

    fn supported_operations(&self) -> &'static [KernelOperation] {
        &KernelOperation::ALL
    }

    fn evaluate(&self, point_one: &[T], point_two: &[T]) -> Result<T, KernelError> {
        Validator::validate_points(self.dim(), point_one, point_two)?;
        Ok(self.covariance(point_one, point_two))
    }

    fn spatial_gradient(&self, point_one: &[T], point_two: &[T]) -> Result<Vec<T>, KernelError> {
        Validator::validate_points(self.dim(), point_one, point_two)?;

        let cov = self.covariance(point_one, point_two);
        let scales = self.hyperparameters.length_scales();

        Ok(point_one
            .iter()
            .zip(point_two.iter())
            .zip(scales.iter())
            .map(|((&a, &b), &scale)| -cov * (a - b) / (scale * scale))
            .collect())
    }

    fn hyperparameter_gradient(
        &self,
        point_one: &[T],
        point_two: &[T],
    ) -> Result<Vec<T>, KernelError> {
        Validator::validate_points(self.dim(), point_one, point_two)?;

        let cov = self.covariance(point_one, point_two);
        let alpha = self.hyperparameters.signal_variance();
        let scales = self.hyperparameters.length_scales();

        let mut gradient = Vec::with_capacity(self.num_hyperparameters());

        // Index 0: the covariance is linear in α.
        gradient.push(cov / alpha);

        // Indices 1..: length-scale derivatives in dimension order.
        for ((&a, &b), &scale) in point_one.iter().zip(point_two.iter()).zip(scales.iter()) {
            let delta = a - b;
            gradient.push(cov * delta * delta / (scale * scale * scale));
        }

        Ok(gradient)
    }

    fn hyperparameter_hessian(
        &self,
        point_one: &[T],
        point_two: &[T],
    ) -> Result<SymmetricMatrix<T>, KernelError> {
        Validator::validate_points(self.dim(), point_one, point_two)?;

        let three = T::from(3.0).unwrap();
        let dim = self.dim();
        let cov = self.covariance(point_one, point_two);
        let alpha = self.hyperparameters.signal_variance();
        let scales = self.hyperparameters.length_scales();

        // Step 1: per-dimension first-derivative factors (x1_i − x2_i)²/ℓ_i³,
        // shared by every entry below.
        let factors: Vec<T> = point_one
            .iter()
            .zip(point_two.iter())
            .zip(scales.iter())
            .map(|((&a, &b), &scale)| {
                let delta = a - b;
                delta * delta / (scale * scale * scale)
            })
            .collect();

        let mut hessian = SymmetricMatrix::zeros(dim + 1);

        // [0][0] stays zero: the covariance is linear in α.

        // Step 2: α–ℓ cross terms, mirrored onto the first row and column.
        for (i, &factor) in factors.iter().enumerate() {
            hessian.set(0, i + 1, cov / alpha * factor);
        }

        // Step 3: ℓ–ℓ block, upper triangle only; the setter mirrors.
        for i in 0..dim {
            let scale = scales[i];
            hessian.set(
                i + 1,
                i + 1,
                cov * (factors[i] * factors[i] - three * factors[i] / scale),
            );
            for j in (i + 1)..dim {
                hessian.set(i + 1, j + 1, cov * factors[i] * factors[j]);
            }
        }

        Ok(hessian)
    }
}
