//! Dense symmetric matrix storage with mirrored writes.
//!
//! ## Purpose
//!
//! This module defines `SymmetricMatrix`, the return type of the
//! hyperparameter Hessian. Symmetry is a property of the type: the setter
//! writes both triangle cells with the same value, so `at(i, j) == at(j, i)`
//! holds bit-exactly for every matrix that can be constructed.
//!
//! ## Design notes
//!
//! * **Full storage**: both triangles are materialized row-major. Packed
//!   triangular storage would halve memory but complicate row export for
//!   host bindings; Hessians here are `(dim + 1)²` and small.
//! * **Index contract**: accessor indices are a programming contract, not
//!   caller data; out-of-range indices panic like slice indexing does.
//!
//! ## Invariants
//!
//! * `data.len() == dim * dim`.
//! * For every `i`, `j`: `data[i * dim + j] == data[j * dim + i]`.
//!
//! ## Non-goals
//!
//! * This module does not provide matrix arithmetic (no solves, products,
//!   or decompositions live in this crate).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

/// Square matrix that preserves exact symmetry by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricMatrix<T> {
    /// Number of rows (and columns).
    dim: usize,
    /// Row-major, fully materialized storage.
    data: Vec<T>,
}

impl<T: Float> SymmetricMatrix<T> {
    /// An all-zero `dim × dim` matrix.
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            data: vec![T::zero(); dim * dim],
        }
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The entry at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics when `row` or `col` is out of range.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> T {
        assert!(row < self.dim, "row {} out of range for dim {}", row, self.dim);
        assert!(col < self.dim, "col {} out of range for dim {}", col, self.dim);
        self.data[row * self.dim + col]
    }

    /// Write `value` to `(row, col)` AND `(col, row)`.
    ///
    /// Both cells receive the same bits, which is what makes
    /// `at(i, j) == at(j, i)` exact rather than approximate.
    ///
    /// # Panics
    ///
    /// Panics when `row` or `col` is out of range.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(row < self.dim, "row {} out of range for dim {}", row, self.dim);
        assert!(col < self.dim, "col {} out of range for dim {}", col, self.dim);
        self.data[row * self.dim + col] = value;
        self.data[col * self.dim + row] = value;
    }

    /// One row as a slice.
    ///
    /// # Panics
    ///
    /// Panics when `row` is out of range.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.dim, "row {} out of range for dim {}", row, self.dim);
        &self.data[row * self.dim..(row + 1) * self.dim]
    }

    /// Row-major view of the full storage (the flat export used by host
    /// bindings).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Nested-row export, one `Vec` per row.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.dim).map(|row| self.row(row).to_vec()).collect()
    }
}
