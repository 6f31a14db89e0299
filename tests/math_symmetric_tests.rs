#![cfg(feature = "dev")]

use covkernel_rs::internals::math::symmetric::SymmetricMatrix;

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_zeros_shape_and_content() {
    let m = SymmetricMatrix::<f64>::zeros(3);

    assert_eq!(m.dim(), 3);
    assert_eq!(m.as_slice().len(), 9);
    assert!(m.as_slice().iter().all(|&v| v == 0.0));
}

#[test]
fn test_zero_dimension_is_empty() {
    let m = SymmetricMatrix::<f64>::zeros(0);
    assert_eq!(m.dim(), 0);
    assert!(m.as_slice().is_empty());
    assert!(m.to_rows().is_empty());
}

// ============================================================================
// Mirrored Write Tests
// ============================================================================

#[test]
fn test_set_writes_both_triangles() {
    let mut m = SymmetricMatrix::zeros(3);

    m.set(0, 2, 4.5);
    assert_eq!(m.at(0, 2), 4.5);
    assert_eq!(m.at(2, 0), 4.5);

    // Bitwise equality, not tolerance.
    assert!(m.at(0, 2) == m.at(2, 0));
}

#[test]
fn test_diagonal_set_is_single_cell() {
    let mut m = SymmetricMatrix::zeros(2);

    m.set(1, 1, -3.25);
    assert_eq!(m.at(1, 1), -3.25);
    assert_eq!(m.at(0, 1), 0.0);
    assert_eq!(m.at(1, 0), 0.0);
}

#[test]
fn test_overwrite_keeps_symmetry() {
    let mut m = SymmetricMatrix::zeros(2);

    m.set(0, 1, 1.0);
    m.set(1, 0, 7.0);
    assert_eq!(m.at(0, 1), 7.0);
    assert_eq!(m.at(1, 0), 7.0);
}

// ============================================================================
// Export Tests
// ============================================================================

#[test]
fn test_row_major_layout() {
    let mut m = SymmetricMatrix::zeros(2);
    m.set(0, 0, 1.0);
    m.set(0, 1, 2.0);
    m.set(1, 1, 3.0);

    assert_eq!(m.row(0), &[1.0, 2.0]);
    assert_eq!(m.row(1), &[2.0, 3.0]);
    assert_eq!(m.as_slice(), &[1.0, 2.0, 2.0, 3.0]);
}

#[test]
fn test_to_rows_detaches_storage() {
    let mut m = SymmetricMatrix::zeros(2);
    m.set(0, 1, 2.0);

    let mut rows = m.to_rows();
    assert_eq!(rows, vec![vec![0.0, 2.0], vec![2.0, 0.0]]);

    rows[0][1] = 99.0;
    assert_eq!(m.at(0, 1), 2.0);
}

// ============================================================================
// Index Contract
// ============================================================================

#[test]
#[should_panic(expected = "out of range")]
fn test_at_row_out_of_range_panics() {
    let m = SymmetricMatrix::<f64>::zeros(2);
    let _ = m.at(2, 0);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_set_col_out_of_range_panics() {
    let mut m = SymmetricMatrix::<f64>::zeros(2);
    m.set(0, 2, 1.0);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_row_out_of_range_panics() {
    let m = SymmetricMatrix::<f64>::zeros(2);
    let _ = m.row(5);
}
