pub mod factory;
pub mod linear_regression;
pub mod logistic_regression;
pub mod metrics;
pub mod persistence;

pub use linear_regression::{
    linear_regression_gradient_descent, linear_regression_least_squares, LinearRegressionModel,
};
pub use logistic_regression::{logistic_regression, LogisticRegressionModel, DEFAULT_THRESHOLD};
pub use metrics::{ConfusionMatrix, EvaluationMetrics};
pub use persistence::TextModel;
