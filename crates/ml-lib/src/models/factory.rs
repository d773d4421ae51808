use num_traits::AsPrimitive;

use crate::config::{LinearModelConfig, LinearSolver, LogisticModelConfig};
use crate::error::Result;
use crate::models::linear_regression::{
    linear_regression_gradient_descent, linear_regression_least_squares, LinearRegressionModel,
};
use crate::models::logistic_regression::{logistic_regression, LogisticRegressionModel};

/// Fit a linear regression model with the solver selected in `config`.
pub fn build_linear_model<T: AsPrimitive<f64>>(
    x_values: &[T],
    y_values: &[T],
    config: &LinearModelConfig,
) -> Result<LinearRegressionModel> {
    log::debug!("Fitting linear model with {:?}", config);
    match config.solver {
        LinearSolver::LeastSquares => {
            linear_regression_least_squares(x_values, y_values, config.normalization)
        }
        LinearSolver::GradientDescent {
            learning_rate,
            num_iterations,
        } => linear_regression_gradient_descent(
            x_values,
            y_values,
            config.normalization,
            learning_rate,
            num_iterations,
        ),
    }
}

/// Fit a logistic regression model with the hyper-parameters in `config`.
pub fn build_logistic_model<X, Y, R>(
    x_values: &[R],
    y_values: &[Y],
    config: &LogisticModelConfig,
) -> Result<LogisticRegressionModel>
where
    X: AsPrimitive<f64>,
    Y: AsPrimitive<f64>,
    R: AsRef<[X]>,
{
    log::debug!("Fitting logistic model with {:?}", config);
    logistic_regression(
        x_values,
        y_values,
        config.learning_rate,
        config.num_iterations,
    )
}
