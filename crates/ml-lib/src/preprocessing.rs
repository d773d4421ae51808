//! Rescaling of raw numeric sequences before fitting or prediction.
//!
//! `normalize` recomputes its statistics (min/max, mean/std, L2 norm) from
//! the slice it is given on every call. Nothing is fitted or cached, so
//! test data is rescaled by its own distribution rather than the training
//! one.

use std::fmt;
use std::str::FromStr;

use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{MlError, Result};
use crate::math::Array1;
use crate::stats::{self, NormType};

/// Rescaling policy applied to a whole sequence.
///
/// The integer codes (`0`, `1`, `2`) are the ones used by the persisted
/// model format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NormalizationType {
    /// `(x - min) / (max - min)`
    #[default]
    MinMax,
    /// `(x - mean) / std` with the sample standard deviation.
    ZScore,
    /// `x / ||x||_2`
    L2Euclidean,
}

impl NormalizationType {
    pub fn as_i32(self) -> i32 {
        match self {
            NormalizationType::MinMax => 0,
            NormalizationType::ZScore => 1,
            NormalizationType::L2Euclidean => 2,
        }
    }
}

impl TryFrom<i32> for NormalizationType {
    type Error = MlError;

    fn try_from(code: i32) -> Result<Self> {
        match code {
            0 => Ok(NormalizationType::MinMax),
            1 => Ok(NormalizationType::ZScore),
            2 => Ok(NormalizationType::L2Euclidean),
            other => Err(MlError::Parse(format!(
                "unknown normalization type code {}",
                other
            ))),
        }
    }
}

impl FromStr for NormalizationType {
    type Err = MlError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "minmax" => Ok(NormalizationType::MinMax),
            "zscore" => Ok(NormalizationType::ZScore),
            "l2" | "l2euclidean" | "euclidean" => Ok(NormalizationType::L2Euclidean),
            _ => Err(MlError::Parse(format!(
                "Unknown normalization type: {}. Expected one of minmax, zscore, l2",
                s
            ))),
        }
    }
}

impl fmt::Display for NormalizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NormalizationType::MinMax => "Min-Max",
            NormalizationType::ZScore => "Z-Score",
            NormalizationType::L2Euclidean => "L2 (Euclidean)",
        };
        write!(f, "{}", name)
    }
}

/// Normalize `values` with the given policy and return a new `f64` vector
/// of the same length.
///
/// A zero range, zero variance or zero norm is not guarded against: the
/// division propagates NaN or infinity into the output.
///
/// # Errors
///
/// * `InvalidArgument` for an empty slice.
/// * `InsufficientData` for `ZScore` with fewer than two values.
pub fn normalize<T: AsPrimitive<f64>>(
    values: &[T],
    normalization_type: NormalizationType,
) -> Result<Vec<f64>> {
    if values.is_empty() {
        return Err(MlError::empty("normalization input"));
    }
    let widened = Array1::from_primitive(values);

    let (offset, scale) = match normalization_type {
        NormalizationType::MinMax => {
            let min = widened.iter().copied().fold(f64::INFINITY, f64::min);
            let max = widened.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            (min, max - min)
        }
        NormalizationType::ZScore => (
            stats::mean(widened.as_slice())?,
            stats::standard_deviation(widened.as_slice())?,
        ),
        NormalizationType::L2Euclidean => {
            (0.0, stats::norm(widened.as_slice(), NormType::Euclidean)?)
        }
    };

    if scale == 0.0 {
        log::warn!(
            "{} normalization of {} values has a zero denominator; output will be NaN or infinite",
            normalization_type,
            widened.len()
        );
    }

    Ok(widened.iter().map(|&v| (v - offset) / scale).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max_bounds() {
        let out = normalize(&[1.0, 2.0, 3.0], NormalizationType::MinMax).unwrap();
        assert_eq!(out, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_z_score_of_small_vector() {
        // mean 2, sample std 1
        let out = normalize(&[1.0, 2.0, 3.0], NormalizationType::ZScore).unwrap();
        assert_eq!(out, vec![-1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_l2_of_pythagorean_pair() {
        let out = normalize(&[3i64, 4], NormalizationType::L2Euclidean).unwrap();
        assert!((out[0] - 0.6).abs() < 1e-12);
        assert!((out[1] - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_constant_min_max_is_nan() {
        let out = normalize(&[5.0, 5.0], NormalizationType::MinMax).unwrap();
        assert!(out.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_integer_codes_round_trip() {
        for t in [
            NormalizationType::MinMax,
            NormalizationType::ZScore,
            NormalizationType::L2Euclidean,
        ] {
            assert_eq!(NormalizationType::try_from(t.as_i32()).unwrap(), t);
        }
        assert!(NormalizationType::try_from(3).is_err());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "Z-Score".parse::<NormalizationType>().unwrap(),
            NormalizationType::ZScore
        );
        assert_eq!(
            "l2".parse::<NormalizationType>().unwrap(),
            NormalizationType::L2Euclidean
        );
        assert!("robust".parse::<NormalizationType>().is_err());
    }
}
