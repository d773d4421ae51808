//! Small vector and matrix types used throughout the crate.
//!
//! `Array1` is a 1D container carrying the vector algebra (dot product,
//! magnitude, angle, elementwise and scalar ops); `Array2` is a row-major
//! matrix with transpose and multiplication.
pub mod matrix;
pub mod vector;

pub use matrix::{Array2, ShapeError};
pub use vector::{AngleUnit, Array1};
