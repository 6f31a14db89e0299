//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental data types everything else builds on:
//! - The crate-wide error type
//! - Operation identifiers for the kernel capability contract
//! - Validated hyperparameter storage with defensive-copy semantics
//!
//! These types carry no kernel-specific mathematics.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for construction, configuration, and evaluation.
pub mod errors;

/// Validated hyperparameter storage.
pub mod hyperparameters;

/// Operation identifiers for capability declaration.
pub mod operation;
