//! Integration tests for the Array1 and Array2 math types.

use ml_lib::math::{AngleUnit, Array1, Array2};
use ml_lib::MlError;

// ---------------------------------------------------------------------------
// Array1 basics
// ---------------------------------------------------------------------------

#[test]
fn array1_from_vec_and_len() {
    let a = Array1::from_vec(vec![1.0f32, 2.0, 3.0]);
    assert_eq!(a.len(), 3);
    assert!(!a.is_empty());
}

#[test]
fn array1_zeros() {
    let a: Array1<f64> = Array1::zeros(4);
    assert_eq!(a.len(), 4);
    for v in a.iter() {
        assert_eq!(*v, 0.0);
    }
}

#[test]
fn array1_mapv() {
    let a = Array1::from_vec(vec![1.0f32, 2.0, 3.0]);
    let doubled = a.mapv(|x| x * 2.0);
    assert_eq!(doubled.to_vec(), vec![2.0, 4.0, 6.0]);
}

#[test]
fn array1_display() {
    let a = Array1::from_vec(vec![1.5, -2.0]);
    assert_eq!(a.to_string(), "[1.5, -2]");
}

// ---------------------------------------------------------------------------
// Vector algebra
// ---------------------------------------------------------------------------

#[test]
fn vector_add_and_subtract() {
    let a = Array1::from_vec(vec![1.0, 2.0, 3.0]);
    let b = Array1::from_vec(vec![4.0, 5.0, 6.0]);
    assert_eq!(a.add(&b).unwrap().to_vec(), vec![5.0, 7.0, 9.0]);
    assert_eq!(a.subtract(&b).unwrap().to_vec(), vec![-3.0, -3.0, -3.0]);
}

#[test]
fn vector_elementwise_ops() {
    let a = Array1::from_vec(vec![1.0, 2.0, 3.0]);
    let b = Array1::from_vec(vec![4.0, 5.0, 6.0]);
    assert_eq!(
        a.elementwise_multiply(&b).unwrap().to_vec(),
        vec![4.0, 10.0, 18.0]
    );
    assert_eq!(
        a.elementwise_divide(&b).unwrap().to_vec(),
        vec![0.25, 0.4, 0.5]
    );
}

#[test]
fn vector_scalar_ops() {
    let a = Array1::from_vec(vec![1.0, 2.0, 3.0]);
    assert_eq!(a.scalar_multiply(2.0).unwrap().to_vec(), vec![2.0, 4.0, 6.0]);
    assert_eq!(a.scalar_divide(2.0).unwrap().to_vec(), vec![0.5, 1.0, 1.5]);
    assert!(a.scalar_divide(0.0).is_err());
}

#[test]
fn vector_angle_between_parallel_vectors_is_zero() {
    let a = Array1::from_vec(vec![1.0, 2.0, 3.0]);
    let b = a.scalar_multiply(3.0).unwrap();
    let angle = a.angle(&b, AngleUnit::Degree).unwrap();
    assert!(angle.abs() < 1e-6, "angle = {}", angle);
}

#[test]
fn vector_ops_reject_mismatched_lengths() {
    let a = Array1::from_vec(vec![1.0, 2.0, 3.0]);
    let b = Array1::from_vec(vec![1.0, 2.0]);
    assert_eq!(a.add(&b), Err(MlError::LengthMismatch { left: 3, right: 2 }));
    assert!(a.elementwise_divide(&b).is_err());
}

#[test]
fn vector_ops_reject_empty_input() {
    let empty: Array1<f64> = Array1::from_vec(vec![]);
    assert!(matches!(empty.magnitude(), Err(MlError::InvalidArgument(_))));
    assert!(empty.dot(&empty).is_err());
}

// ---------------------------------------------------------------------------
// Array2 basics
// ---------------------------------------------------------------------------

#[test]
fn array2_from_shape_vec() {
    let a = Array2::from_shape_vec((2, 3), vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(a.nrows(), 2);
    assert_eq!(a.ncols(), 3);
    assert_eq!(a.shape(), (2, 3));
}

#[test]
fn array2_shape_mismatch_errors() {
    let result = Array2::<f32>::from_shape_vec((2, 3), vec![1.0, 2.0, 3.0]);
    assert!(result.is_err());
}

#[test]
fn array2_indexing() {
    let a = Array2::from_shape_vec((2, 2), vec![1, 2, 3, 4]).unwrap();
    assert_eq!(a[(0, 0)], 1);
    assert_eq!(a[(0, 1)], 2);
    assert_eq!(a[(1, 0)], 3);
    assert_eq!(a[(1, 1)], 4);
}

#[test]
fn array2_column() {
    let a = Array2::from_shape_vec((3, 2), vec![1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(a.column(0).unwrap().to_vec(), vec![1, 3, 5]);
    assert_eq!(a.column(1).unwrap().to_vec(), vec![2, 4, 6]);
}

#[test]
fn array2_column_out_of_range_errors() {
    let a = Array2::from_shape_vec((1, 2), vec![1.0, 2.0]).unwrap();
    assert!(matches!(a.column(2), Err(MlError::InvalidArgument(_))));
    assert!(matches!(a.column(5), Err(MlError::InvalidArgument(_))));
}

#[test]
fn array2_from_rows_widens_integers() {
    let rows = vec![vec![1u16, 2], vec![3, 4]];
    let a = Array2::from_rows(&rows).unwrap();
    assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
}

// ---------------------------------------------------------------------------
// Matrix algebra
// ---------------------------------------------------------------------------

#[test]
fn matrix_transpose_twice_is_identity() {
    let a = Array2::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    assert_eq!(a.transpose().transpose(), a);
}

#[test]
fn matrix_multiplication_by_identity() {
    let a = Array2::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
    let identity = Array2::from_rows(&[vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
    assert_eq!(a.matmul(&identity).unwrap(), a);
}

#[test]
fn matrix_multiplication_of_large_constant_matrices() {
    let n = 64;
    let a = Array2::from_shape_vec((n, n), vec![1.0; n * n]).unwrap();
    let b = Array2::from_shape_vec((n, n), vec![2.0; n * n]).unwrap();
    let c = a.matmul(&b).unwrap();
    assert_eq!(c.shape(), (n, n));
    assert!(c.as_slice().iter().all(|&v| v == 2.0 * n as f64));
}

#[test]
fn matrix_multiplication_dimension_mismatch() {
    let a = Array2::from_shape_vec((2, 3), vec![1.0; 6]).unwrap();
    assert!(matches!(a.matmul(&a), Err(MlError::ShapeMismatch(_))));
}
