//! Integration tests for the normalization policies.

use ml_lib::preprocessing::{normalize, NormalizationType};
use ml_lib::stats::{mean, norm, standard_deviation, NormType};
use ml_lib::MlError;

const ALL_TYPES: [NormalizationType; 3] = [
    NormalizationType::MinMax,
    NormalizationType::ZScore,
    NormalizationType::L2Euclidean,
];

fn sample() -> Vec<f64> {
    vec![3.0, -1.5, 8.25, 0.0, 4.0, 12.0, -7.0]
}

// ---------------------------------------------------------------------------
// Shared contract
// ---------------------------------------------------------------------------

#[test]
fn normalize_preserves_length() {
    let values = sample();
    for t in ALL_TYPES {
        let out = normalize(&values, t).unwrap();
        assert_eq!(out.len(), values.len(), "{:?}", t);
    }
}

#[test]
fn normalize_empty_errors_for_every_type() {
    let empty: Vec<f64> = vec![];
    for t in ALL_TYPES {
        assert!(
            matches!(normalize(&empty, t), Err(MlError::InvalidArgument(_))),
            "{:?} should reject empty input",
            t
        );
    }
}

#[test]
fn normalize_accepts_integer_input() {
    let ints = vec![10u32, 20, 30];
    let floats = vec![10.0, 20.0, 30.0];
    for t in ALL_TYPES {
        assert_eq!(normalize(&ints, t).unwrap(), normalize(&floats, t).unwrap());
    }
}

// ---------------------------------------------------------------------------
// Min-Max
// ---------------------------------------------------------------------------

#[test]
fn min_max_output_is_unit_interval() {
    let values = sample();
    let out = normalize(&values, NormalizationType::MinMax).unwrap();
    for v in &out {
        assert!((0.0..=1.0).contains(v), "value {} outside [0, 1]", v);
    }
    // max (12.0) maps to 1 and min (-7.0) to 0
    assert_eq!(out[5], 1.0);
    assert_eq!(out[6], 0.0);
}

// ---------------------------------------------------------------------------
// Z-Score
// ---------------------------------------------------------------------------

#[test]
fn z_score_has_zero_mean_unit_sample_std() {
    let out = normalize(&sample(), NormalizationType::ZScore).unwrap();
    let m = mean(&out).unwrap();
    let sd = standard_deviation(&out).unwrap();
    assert!(m.abs() < 1e-12, "mean after normalization = {}", m);
    assert!((sd - 1.0).abs() < 1e-12, "std after normalization = {}", sd);
}

#[test]
fn z_score_requires_two_values() {
    assert_eq!(
        normalize(&[4.0], NormalizationType::ZScore),
        Err(MlError::InsufficientData {
            required: 2,
            actual: 1
        })
    );
}

#[test]
fn z_score_constant_values_are_not_finite() {
    let out = normalize(&[5.0; 4], NormalizationType::ZScore).unwrap();
    assert!(out.iter().all(|v| !v.is_finite()));
}

// ---------------------------------------------------------------------------
// L2 / Euclidean
// ---------------------------------------------------------------------------

#[test]
fn l2_output_has_unit_norm() {
    let out = normalize(&sample(), NormalizationType::L2Euclidean).unwrap();
    let n = norm(&out, NormType::Euclidean).unwrap();
    assert!((n - 1.0).abs() < 1e-12, "norm = {}", n);
}

#[test]
fn l2_is_computed_over_whole_vector() {
    let out = normalize(&[1.0, 1.0, 1.0, 1.0], NormalizationType::L2Euclidean).unwrap();
    assert_eq!(out, vec![0.5; 4]);
}
