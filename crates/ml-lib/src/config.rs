use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::MlError;
use crate::preprocessing::NormalizationType;

pub const DEFAULT_LEARNING_RATE: f64 = 0.01;
pub const DEFAULT_NUM_ITERATIONS: usize = 1000;

/// Configuration for fitting a `LinearRegressionModel`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct LinearModelConfig {
    #[serde(default)]
    pub normalization: NormalizationType,

    #[serde(default)]
    pub solver: LinearSolver,
}

/// Fitting algorithm for linear regression and its hyper-parameters.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub enum LinearSolver {
    LeastSquares,
    GradientDescent {
        learning_rate: f64,
        num_iterations: usize,
    },
}

impl Default for LinearSolver {
    fn default() -> Self {
        LinearSolver::LeastSquares
    }
}

impl FromStr for LinearSolver {
    type Err = MlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "least_squares" | "leastsquares" | "ols" => Ok(LinearSolver::LeastSquares),
            "gradient_descent" | "gradientdescent" | "gd" => Ok(LinearSolver::GradientDescent {
                learning_rate: DEFAULT_LEARNING_RATE,
                num_iterations: DEFAULT_NUM_ITERATIONS,
            }),
            _ => Err(MlError::Parse(format!(
                "Unknown linear solver: {}. Expected least_squares or gradient_descent",
                s
            ))),
        }
    }
}

impl LinearModelConfig {
    pub fn new(normalization: NormalizationType, solver: LinearSolver) -> Self {
        Self {
            normalization,
            solver,
        }
    }
}

/// Hyper-parameters for fitting a `LogisticRegressionModel`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LogisticModelConfig {
    pub learning_rate: f64,
    pub num_iterations: usize,
}

impl LogisticModelConfig {
    pub fn new(learning_rate: f64, num_iterations: usize) -> Self {
        Self {
            learning_rate,
            num_iterations,
        }
    }
}

impl Default for LogisticModelConfig {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            num_iterations: DEFAULT_NUM_ITERATIONS,
        }
    }
}
