//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer provides the call-time services kernels rely on; today that is
//! input shape validation. It sits between the pure math layer and the
//! kernel implementations so every variant shares one validation path.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Kernels
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fail-fast input validation.
pub mod validator;
