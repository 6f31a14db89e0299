//! Public API for kernel construction and dispatch.
//!
//! ## Purpose
//!
//! This layer exposes the user-facing surface of the crate:
//!
//! * Re-exports of the kernel trait, the concrete variants, and the
//!   supporting types from the lower layers.
//! * [`KernelRegistry`], which maps string tags to kernel constructors so
//!   that callers can pick a variant at runtime (from a config file, a CLI
//!   flag, a serialized experiment description) without matching on types
//!   themselves.
//!
//! ## Design notes
//!
//! * **Constructors are plain `fn` pointers**: a [`KernelConstructor`] takes
//!   a validated hyperparameter vector and returns a boxed trait object.
//!   Function pointers keep the registry `Clone` and comparable in size to
//!   the map itself, and every variant's `construct` associated function
//!   coerces to one directly.
//! * **Validation happens before construction**: [`KernelRegistry::create`]
//!   builds the [`HyperparameterVector`] first, so a constructor always
//!   receives values that satisfy the positivity and length rules.
//! * **Capability checks at lookup time**: [`KernelRegistry::create_supporting`]
//!   rejects a variant that does not implement a required operation at
//!   construction, instead of letting the caller discover the gap midway
//!   through a run.
//!
//! ## Key concepts
//!
//! * **Tag**: the stable string name of a variant (`"square_exponential"`,
//!   `"matern_5_2"`). Tags are the unit of registration and lookup.
//!
//! ## Non-goals
//!
//! * No global singleton registry. Callers own their registry instance and
//!   decide its lifetime and contents.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::boxed::Box;
#[cfg(feature = "std")]
use std::collections::BTreeMap;
#[cfg(feature = "std")]
use std::string::String;

// Re-exports (public API)
pub use crate::kernels::matern::Matern52Kernel;
pub use crate::kernels::square_exponential::SquareExponentialKernel;
pub use crate::kernels::CovarianceKernel;
pub use crate::math::linalg::KernelFloat;
pub use crate::math::symmetric::SymmetricMatrix;
pub use crate::primitives::errors::KernelError;
pub use crate::primitives::hyperparameters::HyperparameterVector;
pub use crate::primitives::operation::KernelOperation;

/// A function that builds a boxed kernel from validated hyperparameters.
///
/// Every variant exposes one as an associated function (for example
/// [`SquareExponentialKernel::construct`]); custom variants register theirs
/// through [`KernelRegistry::register`].
pub type KernelConstructor<T> =
    fn(&HyperparameterVector<T>) -> Result<Box<dyn CovarianceKernel<T>>, KernelError>;

/// Runtime lookup table from variant tags to kernel constructors.
///
/// # Example
///
/// ```
/// use covkernel_rs::prelude::*;
///
/// let registry = KernelRegistry::<f64>::with_defaults();
/// let kernel = registry.create("square_exponential", &[2.0, 1.0, 1.0])?;
/// assert_eq!(kernel.evaluate(&[0.0, 0.0], &[0.0, 0.0])?, 2.0);
/// # Result::<(), KernelError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct KernelRegistry<T: KernelFloat> {
    /// Tag → constructor. Ordered so `tags` iterates deterministically.
    constructors: BTreeMap<String, KernelConstructor<T>>,
}

impl<T: KernelFloat> KernelRegistry<T> {
    /// An empty registry with no variants.
    pub fn new() -> Self {
        Self {
            constructors: BTreeMap::new(),
        }
    }

    /// A registry pre-populated with the built-in variants
    /// ([`SquareExponentialKernel`] and [`Matern52Kernel`]).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(SquareExponentialKernel::<T>::NAME, SquareExponentialKernel::construct);
        registry.register(Matern52Kernel::<T>::NAME, Matern52Kernel::construct);
        registry
    }

    /// Register `constructor` under `tag`, returning the constructor the
    /// tag previously mapped to (if any).
    ///
    /// Re-registering an existing tag replaces it, so callers can swap a
    /// built-in variant for their own implementation.
    pub fn register(
        &mut self,
        tag: &str,
        constructor: KernelConstructor<T>,
    ) -> Option<KernelConstructor<T>> {
        self.constructors.insert(String::from(tag), constructor)
    }

    /// Construct the variant registered under `tag` from raw hyperparameter
    /// values `[α, ℓ_1, ..., ℓ_dim]`.
    ///
    /// # Errors
    ///
    /// * [`KernelError::UnknownVariant`] if no constructor is registered
    ///   under `tag`.
    /// * [`KernelError::InvalidHyperparameter`] or
    ///   [`KernelError::DimensionMismatch`] if `hyperparameters` fails the
    ///   checks in [`HyperparameterVector::new`].
    pub fn create(
        &self,
        tag: &str,
        hyperparameters: &[T],
    ) -> Result<Box<dyn CovarianceKernel<T>>, KernelError> {
        // Check 1: the tag must be registered.
        let constructor = self
            .constructors
            .get(tag)
            .ok_or_else(|| KernelError::UnknownVariant {
                tag: String::from(tag),
            })?;

        // Check 2: hyperparameters are validated before construction.
        let vector = HyperparameterVector::new(hyperparameters)?;

        constructor(&vector)
    }

    /// Construct the variant registered under `tag` and verify up front
    /// that it supports every operation in `required`.
    ///
    /// # Errors
    ///
    /// Everything [`KernelRegistry::create`] returns, plus
    /// [`KernelError::UnsupportedOperation`] naming the first missing
    /// operation.
    pub fn create_supporting(
        &self,
        tag: &str,
        hyperparameters: &[T],
        required: &[KernelOperation],
    ) -> Result<Box<dyn CovarianceKernel<T>>, KernelError> {
        let kernel = self.create(tag, hyperparameters)?;

        for &operation in required {
            if !kernel.supports(operation) {
                return Err(KernelError::UnsupportedOperation {
                    variant: kernel.name(),
                    operation,
                });
            }
        }

        Ok(kernel)
    }

    /// Whether a constructor is registered under `tag`.
    pub fn contains(&self, tag: &str) -> bool {
        self.constructors.contains_key(tag)
    }

    /// All registered tags in sorted order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    /// Number of registered variants.
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// Whether the registry has no variants.
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl<T: KernelFloat> Default for KernelRegistry<T> {
    /// Same as [`KernelRegistry::with_defaults`].
    fn default() -> Self {
        Self::with_defaults()
    }
}
