#![cfg(feature = "dev")]

use covkernel_rs::internals::primitives::errors::KernelError;
use covkernel_rs::internals::primitives::hyperparameters::HyperparameterVector;

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_construction_copies_and_exposes_values() {
    let hp = HyperparameterVector::new(&[2.0, 0.5, 1.5]).unwrap();

    assert_eq!(hp.len(), 3);
    assert_eq!(hp.dim(), 2);
    assert!(!hp.is_empty());
    assert_eq!(hp.signal_variance(), 2.0);
    assert_eq!(hp.length_scales(), &[0.5, 1.5]);
    assert_eq!(hp.length_scale(0), 0.5);
    assert_eq!(hp.length_scale(1), 1.5);
    assert_eq!(hp.as_slice(), &[2.0, 0.5, 1.5]);
}

#[test]
fn test_construction_rejects_too_few_entries() {
    // One entry cannot describe any spatial dimension.
    let err = HyperparameterVector::new(&[1.0]).unwrap_err();
    assert_eq!(
        err,
        KernelError::DimensionMismatch {
            expected: 2,
            got: 1,
            context: "hyperparameters",
        }
    );

    let err = HyperparameterVector::<f64>::new(&[]).unwrap_err();
    assert_eq!(
        err,
        KernelError::DimensionMismatch {
            expected: 2,
            got: 0,
            context: "hyperparameters",
        }
    );
}

#[test]
fn test_construction_rejects_nonpositive_values() {
    // Zero signal variance.
    let err = HyperparameterVector::new(&[0.0, 1.0]).unwrap_err();
    assert_eq!(
        err,
        KernelError::InvalidHyperparameter {
            index: 0,
            value: 0.0,
            reason: "must be > 0 and finite",
        }
    );

    // Negative length scale.
    let err = HyperparameterVector::new(&[1.0, -0.5]).unwrap_err();
    assert_eq!(
        err,
        KernelError::InvalidHyperparameter {
            index: 1,
            value: -0.5,
            reason: "must be > 0 and finite",
        }
    );
}

#[test]
fn test_construction_rejects_nonfinite_values() {
    // NaN payload cannot be compared with ==, so destructure.
    match HyperparameterVector::new(&[1.0, f64::NAN]).unwrap_err() {
        KernelError::InvalidHyperparameter { index, value, .. } => {
            assert_eq!(index, 1);
            assert!(value.is_nan());
        }
        other => panic!("expected InvalidHyperparameter, got {:?}", other),
    }

    let err = HyperparameterVector::new(&[f64::INFINITY, 1.0]).unwrap_err();
    assert_eq!(
        err,
        KernelError::InvalidHyperparameter {
            index: 0,
            value: f64::INFINITY,
            reason: "must be > 0 and finite",
        }
    );
}

#[test]
fn test_construction_reports_first_offender() {
    // Index 1 is checked before index 2.
    match HyperparameterVector::new(&[1.0, -1.0, -2.0]).unwrap_err() {
        KernelError::InvalidHyperparameter { index, .. } => assert_eq!(index, 1),
        other => panic!("expected InvalidHyperparameter, got {:?}", other),
    }
}

// ============================================================================
// Copy Isolation Tests
// ============================================================================

#[test]
fn test_caller_buffer_mutation_does_not_leak_in() {
    let mut source = [1.0, 2.0, 3.0];
    let hp = HyperparameterVector::new(&source).unwrap();

    source[0] = 99.0;
    assert_eq!(hp.signal_variance(), 1.0);
}

#[test]
fn test_returned_copy_mutation_does_not_leak_back() {
    let hp = HyperparameterVector::new(&[1.0, 2.0]).unwrap();

    let mut copy = hp.to_vec();
    copy[0] = 99.0;
    assert_eq!(hp.signal_variance(), 1.0);
    assert_eq!(hp.to_vec(), vec![1.0, 2.0]);
}

// ============================================================================
// Update Tests
// ============================================================================

#[test]
fn test_set_replaces_values() {
    let mut hp = HyperparameterVector::new(&[1.0, 1.0, 1.0]).unwrap();

    hp.set(&[2.0, 0.5, 0.25]).unwrap();
    assert_eq!(hp.as_slice(), &[2.0, 0.5, 0.25]);
}

#[test]
fn test_set_rejects_length_change() {
    let mut hp = HyperparameterVector::new(&[1.0, 1.0, 1.0]).unwrap();

    let err = hp.set(&[2.0, 0.5]).unwrap_err();
    assert_eq!(
        err,
        KernelError::DimensionMismatch {
            expected: 3,
            got: 2,
            context: "hyperparameters",
        }
    );
    assert_eq!(hp.as_slice(), &[1.0, 1.0, 1.0]);
}

#[test]
fn test_failed_set_is_all_or_nothing() {
    let mut hp = HyperparameterVector::new(&[1.0, 2.0]).unwrap();

    // Index 0 is valid in the new slice, index 1 is not; nothing may stick.
    let err = hp.set(&[5.0, -1.0]).unwrap_err();
    assert!(matches!(
        err,
        KernelError::InvalidHyperparameter { index: 1, .. }
    ));
    assert_eq!(hp.as_slice(), &[1.0, 2.0]);
}

// ============================================================================
// Accessor Panics
// ============================================================================

#[test]
#[should_panic]
fn test_length_scale_out_of_range_panics() {
    let hp = HyperparameterVector::new(&[1.0, 1.0]).unwrap();
    let _ = hp.length_scale(1);
}

// ============================================================================
// f32 Support
// ============================================================================

#[test]
fn test_f32_vectors_validate_and_store() {
    let hp = HyperparameterVector::new(&[1.5_f32, 0.5]).unwrap();
    assert_eq!(hp.signal_variance(), 1.5_f32);

    let err = HyperparameterVector::new(&[1.0_f32, 0.0]).unwrap_err();
    assert!(matches!(
        err,
        KernelError::InvalidHyperparameter { index: 1, .. }
    ));
}
