//! Single-feature linear regression.
//!
//! Both fitters normalize `x` and `y` independently with the requested
//! [`NormalizationType`] and learn `y_norm ≈ slope * x_norm + intercept`.
//! The model keeps only the normalization *type*; `predict` and `evaluate`
//! renormalize whatever data they receive.
use std::fmt;

use num_traits::AsPrimitive;

use crate::error::{ensure_same_len, MlError, Result};
use crate::math::Array1;
use crate::models::persistence::{Fields, TextModel};
use crate::preprocessing::{normalize, NormalizationType};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinearRegressionModel {
    slope: f64,
    intercept: f64,
    normalization_type: NormalizationType,
}

impl LinearRegressionModel {
    pub fn new(slope: f64, intercept: f64, normalization_type: NormalizationType) -> Self {
        Self {
            slope,
            intercept,
            normalization_type,
        }
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn normalization_type(&self) -> NormalizationType {
        self.normalization_type
    }

    pub fn set_slope(&mut self, slope: f64) {
        self.slope = slope;
    }

    pub fn set_intercept(&mut self, intercept: f64) {
        self.intercept = intercept;
    }

    pub fn set_normalization_type(&mut self, normalization_type: NormalizationType) {
        self.normalization_type = normalization_type;
    }

    /// Normalize `x_values` with the model's normalization type and apply
    /// the fitted line to each value.
    pub fn predict<T: AsPrimitive<f64>>(&self, x_values: &[T]) -> Result<Vec<f64>> {
        let x = normalize(x_values, self.normalization_type)?;
        Ok(x.iter().map(|&v| self.slope * v + self.intercept).collect())
    }

    /// Mean squared error between `predicted_y` and `actual_y` after
    /// normalizing `actual_y` with the model's normalization type.
    pub fn evaluate<T: AsPrimitive<f64>>(&self, actual_y: &[T], predicted_y: &[f64]) -> Result<f64> {
        ensure_same_len(actual_y.len(), predicted_y.len())?;
        let actual = normalize(actual_y, self.normalization_type)?;
        let sum_sq = actual
            .iter()
            .zip(predicted_y.iter())
            .map(|(a, p)| (a - p) * (a - p))
            .sum::<f64>();
        Ok(sum_sq / actual.len() as f64)
    }
}

impl fmt::Display for LinearRegressionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Linear Regression Model")?;
        writeln!(f, "Slope: {}", self.slope)?;
        writeln!(f, "Intercept: {}", self.intercept)?;
        write!(f, "Normalization: {}", self.normalization_type)
    }
}

impl TextModel for LinearRegressionModel {
    fn to_text(&self) -> String {
        format!(
            "{} {} {}",
            self.slope,
            self.intercept,
            self.normalization_type.as_i32()
        )
    }

    fn from_text(text: &str) -> Result<Self> {
        let mut fields = Fields::new(text);
        let slope = fields.next::<f64>("slope")?;
        let intercept = fields.next::<f64>("intercept")?;
        let normalization_type =
            NormalizationType::try_from(fields.next::<i32>("normalization_type")?)?;
        fields.finish()?;
        Ok(Self::new(slope, intercept, normalization_type))
    }

    fn name(&self) -> &str {
        "linear regression model"
    }
}

/// Validate a pair of parallel sequences and normalize each independently.
fn normalize_pair<T: AsPrimitive<f64>>(
    x_values: &[T],
    y_values: &[T],
    normalization_type: NormalizationType,
) -> Result<(Array1<f64>, Array1<f64>)> {
    if x_values.is_empty() {
        return Err(MlError::empty("x values"));
    }
    ensure_same_len(x_values.len(), y_values.len())?;
    let x = Array1::from_vec(normalize(x_values, normalization_type)?);
    let y = Array1::from_vec(normalize(y_values, normalization_type)?);
    Ok((x, y))
}

/// Fit a line with the closed-form least-squares solution.
///
/// A constant `x` makes the slope denominator zero; the resulting NaN or
/// infinite parameters are returned as-is after a warning.
pub fn linear_regression_least_squares<T: AsPrimitive<f64>>(
    x_values: &[T],
    y_values: &[T],
    normalization_type: NormalizationType,
) -> Result<LinearRegressionModel> {
    let (x, y) = normalize_pair(x_values, y_values, normalization_type)?;

    let n = x.len() as f64;
    let sum_x = x.sum();
    let sum_y = y.sum();
    let sum_xy = x.dot(&y)?;
    let sum_x_square = x.dot(&x)?;

    let denominator = n * sum_x_square - sum_x * sum_x;
    if denominator == 0.0 || !denominator.is_finite() {
        log::warn!(
            "Least-squares denominator is {}; x values have no spread after {} normalization",
            denominator,
            normalization_type
        );
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    log::debug!(
        "Least-squares fit on {} samples: slope={}, intercept={}",
        x.len(),
        slope,
        intercept
    );

    Ok(LinearRegressionModel::new(slope, intercept, normalization_type))
}

/// Fit a line with full-batch gradient descent on the mean squared error.
///
/// Runs exactly `num_iterations` passes; each pass accumulates the
/// residuals over every sample and then updates slope and intercept
/// together.
pub fn linear_regression_gradient_descent<T: AsPrimitive<f64>>(
    x_values: &[T],
    y_values: &[T],
    normalization_type: NormalizationType,
    learning_rate: f64,
    num_iterations: usize,
) -> Result<LinearRegressionModel> {
    let (x, y) = normalize_pair(x_values, y_values, normalization_type)?;
    let n = x.len() as f64;

    let mut slope = 0.0;
    let mut intercept = 0.0;

    for iteration in 0..num_iterations {
        let mut sum_errors = 0.0;
        let mut sum_x_errors = 0.0;
        for (&xi, &yi) in x.iter().zip(y.iter()) {
            let error = slope * xi + intercept - yi;
            sum_errors += error;
            sum_x_errors += error * xi;
        }

        slope -= learning_rate * sum_x_errors / n;
        intercept -= learning_rate * sum_errors / n;

        log::trace!(
            "iteration {}: slope={}, intercept={}",
            iteration,
            slope,
            intercept
        );
    }

    log::debug!(
        "Gradient-descent fit on {} samples after {} iterations: slope={}, intercept={}",
        x.len(),
        num_iterations,
        slope,
        intercept
    );

    Ok(LinearRegressionModel::new(slope, intercept, normalization_type))
}
