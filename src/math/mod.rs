//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical building blocks kernels are
//! assembled from:
//! - The shared numeric bound (`KernelFloat`)
//! - Anisotropic scaled-distance accumulation
//! - Symmetric matrix storage for Hessians
//!
//! Nothing here knows about specific kernel formulas.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Kernels
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Anisotropic scaled-distance accumulation.
pub mod distance;

/// The shared numeric trait bound.
pub mod linalg;

/// Symmetric matrix storage with mirrored writes.
pub mod symmetric;
