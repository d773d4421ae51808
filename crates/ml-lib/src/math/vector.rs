use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use num_traits::{AsPrimitive, Zero};
use serde::{Deserialize, Serialize};

use crate::error::{ensure_same_len, MlError, Result};

/// Unit in which `Array1::angle` reports its result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AngleUnit {
    Degree,
    Radians,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Array1<T> {
    data: Vec<T>,
}

impl<T> Array1<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self::new(data)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Array1<U>
    where
        F: FnMut(&T) -> U,
    {
        Array1::from_vec(self.data.iter().map(|v| f(v)).collect())
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }
}

impl<T> Array1<T>
where
    T: Clone + Zero,
{
    pub fn zeros(len: usize) -> Self {
        Array1::from_vec(vec![T::zero(); len])
    }
}

impl<T> From<Vec<T>> for Array1<T> {
    fn from(value: Vec<T>) -> Self {
        Array1::from_vec(value)
    }
}

impl<T> From<Array1<T>> for Vec<T> {
    fn from(value: Array1<T>) -> Self {
        value.data
    }
}

impl<T> FromIterator<T> for Array1<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array1::from_vec(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Array1<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Array1<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl Array1<f64> {
    /// Widen any primitive numeric slice into an `Array1<f64>`.
    pub fn from_primitive<T: AsPrimitive<f64>>(values: &[T]) -> Self {
        values.iter().map(|v| v.as_()).collect()
    }

    pub fn sum(&self) -> f64 {
        self.iter().sum()
    }

    pub fn mean(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.sum() / self.len() as f64)
        }
    }

    pub fn dot(&self, other: &Array1<f64>) -> Result<f64> {
        self.check_pair(other, "dot product")?;
        Ok(dot_scalar_f64(self.as_slice(), other.as_slice()))
    }

    /// Euclidean length of the vector.
    pub fn magnitude(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(MlError::empty("magnitude input"));
        }
        Ok(dot_scalar_f64(self.as_slice(), self.as_slice()).sqrt())
    }

    /// Angle between two vectors. A zero vector yields NaN.
    pub fn angle(&self, other: &Array1<f64>, unit: AngleUnit) -> Result<f64> {
        let cos = self.dot(other)? / (self.magnitude()? * other.magnitude()?);
        let radians = cos.acos();
        Ok(match unit {
            AngleUnit::Radians => radians,
            AngleUnit::Degree => radians.to_degrees(),
        })
    }

    pub fn add(&self, other: &Array1<f64>) -> Result<Array1<f64>> {
        self.zip_with(other, "vector addition", |a, b| a + b)
    }

    pub fn subtract(&self, other: &Array1<f64>) -> Result<Array1<f64>> {
        self.zip_with(other, "vector subtraction", |a, b| a - b)
    }

    pub fn elementwise_multiply(&self, other: &Array1<f64>) -> Result<Array1<f64>> {
        self.zip_with(other, "elementwise multiplication", |a, b| a * b)
    }

    /// Division by a zero element yields infinity or NaN in that slot.
    pub fn elementwise_divide(&self, other: &Array1<f64>) -> Result<Array1<f64>> {
        self.zip_with(other, "elementwise division", |a, b| a / b)
    }

    pub fn scalar_multiply(&self, scalar: f64) -> Result<Array1<f64>> {
        if self.is_empty() {
            return Err(MlError::empty("scalar multiplication input"));
        }
        Ok(self.mapv(|v| v * scalar))
    }

    pub fn scalar_divide(&self, scalar: f64) -> Result<Array1<f64>> {
        if self.is_empty() {
            return Err(MlError::empty("scalar division input"));
        }
        if scalar == 0.0 {
            return Err(MlError::InvalidArgument(
                "scalar divisor must be non-zero".to_string(),
            ));
        }
        Ok(self.mapv(|v| v / scalar))
    }

    fn check_pair(&self, other: &Array1<f64>, op: &str) -> Result<()> {
        if self.is_empty() || other.is_empty() {
            return Err(MlError::empty(&format!("{} input", op)));
        }
        ensure_same_len(self.len(), other.len())
    }

    fn zip_with<F>(&self, other: &Array1<f64>, op: &str, f: F) -> Result<Array1<f64>>
    where
        F: Fn(f64, f64) -> f64,
    {
        self.check_pair(other, op)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(&a, &b)| f(a, b))
            .collect())
    }
}

/// Unchecked dot product over two slices; callers guarantee equal lengths.
pub(crate) fn dot_scalar_f64(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum()
}

impl<T: fmt::Display> fmt::Display for Array1<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
