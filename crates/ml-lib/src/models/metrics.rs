use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_same_len, MlError, Result};

/// Outcome counts of a binary classifier. A label is positive iff it
/// equals `1` after widening to `f64`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    // condition positive, prediction positive
    pub true_positive: usize,
    // condition negative, prediction negative
    pub true_negative: usize,
    // condition negative, prediction positive
    pub false_positive: usize,
    // condition positive, prediction negative
    pub false_negative: usize,
}

impl ConfusionMatrix {
    pub fn from_labels<A, P>(actual: &[A], predicted: &[P]) -> Result<ConfusionMatrix>
    where
        A: AsPrimitive<f64>,
        P: AsPrimitive<f64>,
    {
        if actual.is_empty() {
            return Err(MlError::empty("actual labels"));
        }
        ensure_same_len(actual.len(), predicted.len())?;

        let mut matrix = ConfusionMatrix::default();
        let bool_actual = actual.iter().map(|v| v.as_() == 1.0);
        let bool_predicted = predicted.iter().map(|v| v.as_() == 1.0);

        for (prediction, actual) in bool_predicted.zip(bool_actual) {
            match (prediction, actual) {
                (true, true) => matrix.true_positive += 1,
                (false, false) => matrix.true_negative += 1,
                (true, false) => matrix.false_positive += 1,
                (false, true) => matrix.false_negative += 1,
            }
        }

        Ok(matrix)
    }

    pub fn total(&self) -> usize {
        self.true_positive + self.true_negative + self.false_positive + self.false_negative
    }

    pub fn condition_positive(&self) -> usize {
        self.true_positive + self.false_negative
    }

    pub fn prediction_positive(&self) -> usize {
        self.true_positive + self.false_positive
    }
}

/// Summary scores derived from a [`ConfusionMatrix`].
///
/// `accuracy`, `recall` and `precision` are percentages in `[0, 100]`;
/// `f1_score` is the harmonic mean of the latter two and so shares their
/// scale.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationMetrics {
    pub accuracy: f64,
    pub recall: f64,
    pub precision: f64,
    pub f1_score: f64,
}

impl EvaluationMetrics {
    /// A zero denominator in recall or precision yields NaN, which then
    /// carries into `f1_score`.
    pub fn from_confusion_matrix(matrix: &ConfusionMatrix) -> EvaluationMetrics {
        let tp = matrix.true_positive as f64;

        if matrix.condition_positive() == 0 {
            log::warn!("No positive labels in actual values; recall is undefined");
        }
        if matrix.prediction_positive() == 0 {
            log::warn!("No positive predictions; precision is undefined");
        }

        let accuracy =
            (matrix.true_positive + matrix.true_negative) as f64 / matrix.total() as f64 * 100.0;
        let recall = tp / matrix.condition_positive() as f64 * 100.0;
        let precision = tp / matrix.prediction_positive() as f64 * 100.0;
        let f1_score = 2.0 * precision * recall / (precision + recall);

        EvaluationMetrics {
            accuracy,
            recall,
            precision,
            f1_score,
        }
    }
}
