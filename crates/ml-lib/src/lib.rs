//! ml-lib: small numeric toolkit with regression models.
//!
//! This crate provides vector and matrix primitives, descriptive statistics
//! and normalization, discrete probability helpers, and two supervised
//! models built on top of them: single-feature linear regression (least
//! squares or gradient descent) and binary logistic regression.
//!
//! All numeric routines work on `f64` internally. Public entry points accept
//! slices of any primitive numeric type and widen them at the boundary.
pub mod config;
pub mod data_handling;
pub mod error;
pub mod math;
pub mod models;
pub mod preprocessing;
pub mod probability;
pub mod stats;

pub use error::{MlError, Result};
