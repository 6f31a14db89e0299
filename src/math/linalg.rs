//! Numeric bound shared by kernels and the registry.
//!
//! ## Purpose
//!
//! This module defines `KernelFloat`, the single trait bound threaded
//! through the crate's generic code. It names the full set of capabilities a
//! scalar type needs here: `num_traits::Float` arithmetic plus the thread
//! and lifetime guarantees that let kernels be shared across threads and
//! boxed behind trait objects.
//!
//! ## Design notes
//!
//! * **Alias, not backend**: there is no linear algebra to delegate in this
//!   crate, so the trait carries no methods; the blanket impl makes `f32`
//!   and `f64` (and any conforming scalar) usable without opt-in.
//! * **`Send + Sync`**: evaluation is pure, and the expected caller pattern
//!   is parallel covariance-matrix assembly over a shared kernel reference.
//! * **`'static`**: registry constructors return `Box<dyn CovarianceKernel>`
//!   trait objects, which require owned, non-borrowing scalars.

// External dependencies
use num_traits::Float;

/// Scalar type usable as the kernel's numeric domain.
///
/// Implemented automatically for every `Float + Send + Sync + 'static` type;
/// in practice `f32` and `f64`.
pub trait KernelFloat: Float + Send + Sync + 'static {}

impl<T: Float + Send + Sync + 'static> KernelFloat for T {}
