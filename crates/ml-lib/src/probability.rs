//! Discrete probability helpers backed by `statrs`.
use statrs::distribution::{Binomial, Discrete, Poisson};
use statrs::function::factorial::{binomial, factorial as statrs_factorial};

use crate::error::{MlError, Result};

/// `n!` as a float. Overflows to infinity past `170!`.
pub fn factorial(n: u64) -> f64 {
    statrs_factorial(n)
}

/// Number of ways to choose `k` items out of `n`, ignoring order.
pub fn combinations(n: u64, k: u64) -> Result<f64> {
    check_k_le_n(n, k)?;
    Ok(binomial(n, k))
}

/// Number of ordered arrangements of `k` items out of `n`: `n! / (n - k)!`.
///
/// Stops multiplying once the product overflows to infinity.
pub fn permutations(n: u64, k: u64) -> Result<f64> {
    check_k_le_n(n, k)?;
    let mut product = 1.0_f64;
    for i in 0..k {
        product *= (n - i) as f64;
        if !product.is_finite() {
            break;
        }
    }
    Ok(product)
}

/// Probability of exactly `k` successes in `n` Bernoulli trials with success
/// probability `p`.
pub fn binomial_probability(n: u64, k: u64, p: f64) -> Result<f64> {
    check_k_le_n(n, k)?;
    let dist = Binomial::new(p, n).map_err(|e| {
        MlError::InvalidArgument(format!("binomial probability p = {}: {}", p, e))
    })?;
    Ok(dist.pmf(k))
}

/// Probability of exactly `k` events for a Poisson rate `lambda`.
pub fn poisson_probability(k: u64, lambda: f64) -> Result<f64> {
    let dist = Poisson::new(lambda).map_err(|e| {
        MlError::InvalidArgument(format!("poisson rate lambda = {}: {}", lambda, e))
    })?;
    Ok(dist.pmf(k))
}

fn check_k_le_n(n: u64, k: u64) -> Result<()> {
    if k > n {
        return Err(MlError::InvalidArgument(format!(
            "k ({}) must not exceed n ({})",
            k, n
        )));
    }
    Ok(())
}
