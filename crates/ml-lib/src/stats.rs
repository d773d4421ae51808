//! Descriptive statistics over numeric slices.
//!
//! Every function widens its input to `f64` first, so integer and float
//! slices of any width are accepted.
use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{MlError, Result};
use crate::math::Array1;

/// Vector norm selector for [`norm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormType {
    /// Sum of absolute values (L1).
    Manhattan,
    /// Square root of the sum of squares (L2).
    Euclidean,
    /// Largest absolute value.
    Infinity,
}

/// Arithmetic mean.
pub fn mean<T: AsPrimitive<f64>>(values: &[T]) -> Result<f64> {
    Array1::from_primitive(values)
        .mean()
        .ok_or_else(|| MlError::empty("mean input"))
}

/// Sample standard deviation (divisor `n - 1`).
///
/// # Errors
///
/// `InsufficientData` when fewer than two values are supplied.
pub fn standard_deviation<T: AsPrimitive<f64>>(values: &[T]) -> Result<f64> {
    if values.len() < 2 {
        return Err(MlError::InsufficientData {
            required: 2,
            actual: values.len(),
        });
    }
    let widened = Array1::from_primitive(values);
    let mean = widened.sum() / widened.len() as f64;
    let sum_sq = widened.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>();
    Ok((sum_sq / (widened.len() - 1) as f64).sqrt())
}

pub fn norm<T: AsPrimitive<f64>>(values: &[T], norm_type: NormType) -> Result<f64> {
    if values.is_empty() {
        return Err(MlError::empty("norm input"));
    }
    let widened = Array1::from_primitive(values);
    Ok(match norm_type {
        NormType::Manhattan => widened.iter().map(|v| v.abs()).sum::<f64>(),
        NormType::Euclidean => widened.magnitude()?,
        NormType::Infinity => widened.iter().fold(0.0, |acc: f64, v| acc.max(v.abs())),
    })
}
