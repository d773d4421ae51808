use std::fmt;

use num_traits::AsPrimitive;

use crate::error::{ensure_same_len, MlError, Result};
use crate::math::vector::dot_scalar_f64;
use crate::math::{Array1, Array2};
use crate::models::metrics::{ConfusionMatrix, EvaluationMetrics};
use crate::models::persistence::{Fields, TextModel};
use crate::preprocessing::NormalizationType;

/// Probability at or above which `predict` reports class `1`.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Binary logistic regression model.
///
/// `coefficients[0]` is the bias; `coefficients[j + 1]` weighs feature `j`.
/// Feature rows are consumed as given: `normalization_type` is carried
/// along for bookkeeping and persistence but is not applied by `predict`.
#[derive(Clone, Debug, PartialEq)]
pub struct LogisticRegressionModel {
    coefficients: Vec<f64>,
    normalization_type: NormalizationType,
    confusion_matrix: ConfusionMatrix,
    evaluation_metrics: EvaluationMetrics,
}

impl Default for LogisticRegressionModel {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl LogisticRegressionModel {
    pub fn new(coefficients: Vec<f64>) -> Self {
        Self {
            coefficients,
            normalization_type: NormalizationType::ZScore,
            confusion_matrix: ConfusionMatrix::default(),
            evaluation_metrics: EvaluationMetrics::default(),
        }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn normalization_type(&self) -> NormalizationType {
        self.normalization_type
    }

    /// Counts from the most recent call to [`evaluate`](Self::evaluate).
    pub fn confusion_matrix(&self) -> ConfusionMatrix {
        self.confusion_matrix
    }

    /// Scores from the most recent call to [`evaluate`](Self::evaluate).
    pub fn evaluation_metrics(&self) -> EvaluationMetrics {
        self.evaluation_metrics
    }

    pub fn set_coefficients(&mut self, coefficients: Vec<f64>) {
        self.coefficients = coefficients;
    }

    pub fn set_normalization_type(&mut self, normalization_type: NormalizationType) {
        self.normalization_type = normalization_type;
    }

    pub fn set_confusion_matrix(&mut self, confusion_matrix: ConfusionMatrix) {
        self.confusion_matrix = confusion_matrix;
    }

    pub fn set_evaluation_metrics(&mut self, evaluation_metrics: EvaluationMetrics) {
        self.evaluation_metrics = evaluation_metrics;
    }

    pub fn num_features(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    /// Probability of class `1` for every row.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the model has no coefficients or a row's length
    /// differs from the number of features.
    pub fn predict_proba<T, R>(&self, x_values: &[R]) -> Result<Vec<f64>>
    where
        T: AsPrimitive<f64>,
        R: AsRef<[T]>,
    {
        let num_features = self.num_features().ok_or_else(|| {
            MlError::InvalidArgument("model has no coefficients".to_string())
        })?;

        let mut probabilities = Vec::with_capacity(x_values.len());
        let mut row_buf = Vec::with_capacity(num_features);
        for (idx, row) in x_values.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != num_features {
                return Err(MlError::InvalidArgument(format!(
                    "row {} has {} features, model expects {}",
                    idx,
                    row.len(),
                    num_features
                )));
            }
            row_buf.clear();
            row_buf.extend(row.iter().map(|v| v.as_()));
            let logit = self.coefficients[0] + dot_scalar_f64(&self.coefficients[1..], &row_buf);
            probabilities.push(sigmoid(logit));
        }
        Ok(probabilities)
    }

    /// Class label (`0` or `1`) for every row: `1` when the predicted
    /// probability is at least `threshold`.
    pub fn predict<T, R>(&self, x_values: &[R], threshold: f64) -> Result<Vec<i32>>
    where
        T: AsPrimitive<f64>,
        R: AsRef<[T]>,
    {
        Ok(self
            .predict_proba(x_values)?
            .into_iter()
            .map(|p| if p >= threshold { 1 } else { 0 })
            .collect())
    }

    /// Compare predicted classes with the actual labels.
    ///
    /// Replaces the stored confusion matrix and evaluation metrics and
    /// returns the accuracy as a percentage.
    pub fn evaluate<T: AsPrimitive<f64>>(
        &mut self,
        actual_y: &[T],
        predicted_classes: &[i32],
    ) -> Result<f64> {
        let matrix = ConfusionMatrix::from_labels(actual_y, predicted_classes)?;
        let metrics = EvaluationMetrics::from_confusion_matrix(&matrix);

        log::debug!(
            "Evaluated {} predictions: accuracy={}%, recall={}%, precision={}%, f1={}",
            matrix.total(),
            metrics.accuracy,
            metrics.recall,
            metrics.precision,
            metrics.f1_score
        );

        self.confusion_matrix = matrix;
        self.evaluation_metrics = metrics;
        Ok(metrics.accuracy)
    }
}

impl fmt::Display for LogisticRegressionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cm = &self.confusion_matrix;
        let m = &self.evaluation_metrics;
        writeln!(f, "Logistic Regression Model")?;
        writeln!(f, "Coefficients: {}", Array1::from_vec(self.coefficients.clone()))?;
        writeln!(f, "Normalization: {}", self.normalization_type)?;
        writeln!(
            f,
            "Confusion Matrix: TP={} TN={} FP={} FN={}",
            cm.true_positive, cm.true_negative, cm.false_positive, cm.false_negative
        )?;
        write!(
            f,
            "Accuracy: {}%\nRecall: {}%\nPrecision: {}%\nF1 Score: {}",
            m.accuracy, m.recall, m.precision, m.f1_score
        )
    }
}

impl TextModel for LogisticRegressionModel {
    fn to_text(&self) -> String {
        let cm = &self.confusion_matrix;
        let m = &self.evaluation_metrics;
        let mut parts = Vec::with_capacity(self.coefficients.len() + 10);
        parts.push(self.coefficients.len().to_string());
        parts.extend(self.coefficients.iter().map(|c| c.to_string()));
        parts.push(self.normalization_type.as_i32().to_string());
        parts.extend(
            [
                cm.true_positive,
                cm.true_negative,
                cm.false_positive,
                cm.false_negative,
            ]
            .iter()
            .map(|v| v.to_string()),
        );
        parts.extend(
            [m.accuracy, m.recall, m.precision, m.f1_score]
                .iter()
                .map(|v| v.to_string()),
        );
        parts.join(" ")
    }

    fn from_text(text: &str) -> Result<Self> {
        let mut fields = Fields::new(text);
        let count = fields.next::<usize>("coefficient_count")?;
        let coefficients = (0..count)
            .map(|i| fields.next::<f64>(&format!("coefficient[{}]", i)))
            .collect::<Result<Vec<f64>>>()?;
        let normalization_type =
            NormalizationType::try_from(fields.next::<i32>("normalization_type")?)?;
        let confusion_matrix = ConfusionMatrix {
            true_positive: fields.next("true_positive")?,
            true_negative: fields.next("true_negative")?,
            false_positive: fields.next("false_positive")?,
            false_negative: fields.next("false_negative")?,
        };
        let evaluation_metrics = EvaluationMetrics {
            accuracy: fields.next("accuracy")?,
            recall: fields.next("recall")?,
            precision: fields.next("precision")?,
            f1_score: fields.next("f1_score")?,
        };
        fields.finish()?;

        Ok(Self {
            coefficients,
            normalization_type,
            confusion_matrix,
            evaluation_metrics,
        })
    }

    fn name(&self) -> &str {
        "logistic regression model"
    }
}

/// Fit a logistic regression model by gradient descent.
///
/// Each iteration walks the rows in order. A row's error is computed with
/// the current coefficients and the feature weights are updated right away,
/// so later rows in the same pass see the modified weights. The bias is
/// updated once per pass from the mean of those errors.
///
/// # Errors
///
/// * `InvalidArgument` when either input is empty.
/// * `LengthMismatch` when the number of rows and labels differ.
/// * `ShapeMismatch` when rows have different lengths.
pub fn logistic_regression<X, Y, R>(
    x_values: &[R],
    y_values: &[Y],
    learning_rate: f64,
    num_iterations: usize,
) -> Result<LogisticRegressionModel>
where
    X: AsPrimitive<f64>,
    Y: AsPrimitive<f64>,
    R: AsRef<[X]>,
{
    if x_values.is_empty() || y_values.is_empty() {
        return Err(MlError::empty("training data"));
    }
    ensure_same_len(x_values.len(), y_values.len())?;

    let x = Array2::from_rows(x_values)?;
    let y = Array1::from_primitive(y_values);
    let n = x.nrows();

    let mut coefficients = vec![0.0; x.ncols() + 1];
    let mut errors = vec![0.0; n];

    for iteration in 0..num_iterations {
        for (i, error) in errors.iter_mut().enumerate() {
            let row = x.row_slice(i);
            let logit = coefficients[0] + dot_scalar_f64(&coefficients[1..], row);
            *error = sigmoid(logit) - y[i];

            for (coef, &feature) in coefficients[1..].iter_mut().zip(row) {
                *coef -= learning_rate * *error * feature;
            }
        }

        let sum_errors = errors.iter().sum::<f64>();
        coefficients[0] -= learning_rate * sum_errors / n as f64;

        log::trace!("iteration {}: coefficients={:?}", iteration, coefficients);
    }

    log::debug!(
        "Logistic regression fit on {} rows x {} features after {} iterations",
        n,
        x.ncols(),
        num_iterations
    );

    Ok(LogisticRegressionModel::new(coefficients))
}
