//! Matérn ν = 5/2 covariance kernel with per-dimension length scales.
//!
//! ## Purpose
//!
//! This module implements the second kernel variant. With the scaled radius
//! `r² = Σ_i (x1_i − x2_i)²/ℓ_i²` and `s = √5·r`:
//!
//! ```text
//! cov(x1, x2) = α · (1 + s + s²/3) · exp(−s)
//! ```
//!
//! Twice-differentiable sample paths make it the common choice when the
//! square exponential is implausibly smooth for the objective being modeled.
//!
//! ## Design notes
//!
//! * **Cancelled gradients**: differentiating through `r` produces `1/r`
//!   factors, but they cancel against `dcov/ds ∝ s = √5·r`, leaving
//!
//!   ```text
//!   ∂cov/∂x1_i = −(5α/3) · (1 + s) · exp(−s) · (x1_i − x2_i)/ℓ_i²
//!   ∂cov/∂ℓ_i  =  (5α/3) · (1 + s) · exp(−s) · (x1_i − x2_i)²/ℓ_i³
//!   ```
//!
//!   which are exact (and zero) at identical points. No code path divides
//!   by the distance.
//! * **Partial contract**: the hyperparameter Hessian is not implemented;
//!   the variant declares that through `supported_operations`, and the call
//!   fails with `UnsupportedOperation` naming this variant — it never
//!   returns zeros in place of second derivatives.
//!
//! ## Invariants
//!
//! * `evaluate(x, x) == α` exactly (`s = 0` collapses the polynomial to 1).
//!
//! ## Non-goals
//!
//! * Other Matérn smoothness orders (ν = 1/2, 3/2) are not provided.

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

/// The Matérn kernel with smoothness ν = 5/2.
///
/// Supports `evaluate`, `spatial_gradient`, and `hyperparameter_gradient`;
/// the hyperparameter Hessian is declared unsupported.
#[derive(Debug, Clone, PartialEq)]
pub struct Matern52Kernel<T> {
    /// Owned hyperparameters: `[α, ℓ_1, ..., ℓ_dim]`.
    hyperparameters: HyperparameterVector<T>,
}

impl<T: KernelFloat> Matern52Kernel<T> {
    /// Registry tag for this variant.
    pub const NAME: &'static str = "matern_5_2";

    /// The operations this variant implements.
    const SUPPORTED: [KernelOperation; 3] = [
        KernelOperation::Evaluate,
        KernelOperation::SpatialGradient,
        KernelOperation::HyperparameterGradient,
    ];

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

    /// The scaled radius `s = √(5 · Σ_i ((x1_i − x2_i)/ℓ_i)²)` for
    /// pre-validated points.
    #[inline]
    fn scaled_radius(&self, point_one: &[T], point_two: &[T]) -> T {
        let five = T::from(5.0).unwrap();
        let square = scaled_square_distance(
            point_one,
            point_two,
            self.hyperparameters.length_scales(),
        );
        (five * square).sqrt()
    }

    /// Covariance as a function of the scaled radius.
    #[inline]
    fn covariance_at(&self, s: T) -> T {
        let three = T::from(3.0).unwrap();
        self.hyperparameters.signal_variance() * (T::one() + s + s * s / three) * (-s).exp()
    }

    /// Shared magnitude of both gradients: `(5α/3) · (1 + s) · exp(−s)`.
    #[inline]
    fn gradient_scale(&self, s: T) -> T {
        let five = T::from(5.0).unwrap();
        let three = T::from(3.0).unwrap();
        five / three * self.hyperparameters.signal_variance() * (T::one() + s) * (-s).exp()
    }
}

impl<T: KernelFloat> CovarianceKernel<T> for Matern52Kernel<T> {
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
        &Self::SUPPORTED
    }

    fn evaluate(&self, point_one: &[T], point_two: &[T]) -> Result<T, KernelError> {
        Validator::validate_points(self.dim(), point_one, point_two)?;

        let s = self.scaled_radius(point_one, point_two);
        Ok(self.covariance_at(s))
    }

    fn spatial_gradient(&self, point_one: &[T], point_two: &[T]) -> Result<Vec<T>, KernelError> {
        Validator::validate_points(self.dim(), point_one, point_two)?;

        let s = self.scaled_radius(point_one, point_two);
        let magnitude = self.gradient_scale(s);
        let scales = self.hyperparameters.length_scales();

        Ok(point_one
            .iter()
            .zip(point_two.iter())
            .zip(scales.iter())
            .map(|((&a, &b), &scale)| -magnitude * (a - b) / (scale * scale))
            .collect())
    }

    fn hyperparameter_gradient(
        &self,
        point_one: &[T],
        point_two: &[T],
    ) -> Result<Vec<T>, KernelError> {
        Validator::validate_points(self.dim(), point_one, point_two)?;

        let s = self.scaled_radius(point_one, point_two);
        let magnitude = self.gradient_scale(s);
        let alpha = self.hyperparameters.signal_variance();
        let scales = self.hyperparameters.length_scales();

        let mut gradient = Vec::with_capacity(self.num_hyperparameters());

        // Index 0: the covariance is linear in α.
        gradient.push(self.covariance_at(s) / alpha);

        // Indices 1..: length-scale derivatives in dimension order.
        for ((&a, &b), &scale) in point_one.iter().zip(point_two.iter()).zip(scales.iter()) {
            let delta = a - b;
            gradient.push(magnitude * delta * delta / (scale * scale * scale));
        }

        Ok(gradient)
    }

    /// Always fails: second derivatives are outside this variant's declared
    /// capability, regardless of the inputs.
    fn hyperparameter_hessian(
        &self,
        _point_one: &[T],
        _point_two: &[T],
    ) -> Result<SymmetricMatrix<T>, KernelError> {
        Err(KernelError::UnsupportedOperation {
            variant: Self::NAME,
            operation: KernelOperation::HyperparameterHessian,
        })
    }
}
