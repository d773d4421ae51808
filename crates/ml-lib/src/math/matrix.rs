use std::error::Error;
use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::AsPrimitive;
use rayon::prelude::*;

use crate::error::{MlError, Result};
use crate::math::vector::{dot_scalar_f64, Array1};

/// Dense row-major matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Array2<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Array2<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> std::result::Result<Self, ShapeError> {
        let (rows, cols) = shape;
        if data.len() != rows * cols {
            return Err(ShapeError {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Copy of column `col`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `col` is not below `ncols()`.
    pub fn column(&self, col: usize) -> Result<Array1<T>>
    where
        T: Clone,
    {
        if col >= self.cols {
            return Err(MlError::InvalidArgument(format!(
                "column {} out of range for a matrix with {} columns",
                col, self.cols
            )));
        }
        Ok((0..self.rows).map(|row| self[(row, col)].clone()).collect())
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Array2<U>
    where
        F: FnMut(&T) -> U,
    {
        Array2 {
            data: self.data.iter().map(|v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn transpose(&self) -> Array2<T>
    where
        T: Clone,
    {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self[(row, col)].clone());
            }
        }
        Array2 {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }
}

impl Array2<f64> {
    /// Build a matrix from nested rows, widening each value to `f64`.
    ///
    /// All rows must have the same length.
    pub fn from_rows<T, R>(rows: &[R]) -> Result<Self>
    where
        T: AsPrimitive<f64>,
        R: AsRef<[T]>,
    {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MlError::ShapeMismatch(format!(
                    "row {} has {} columns, expected {}",
                    idx,
                    row.len(),
                    cols
                )));
            }
            data.extend(row.iter().map(|v| v.as_()));
        }
        Ok(Array2::from_shape_vec((rows.len(), cols), data)?)
    }

    /// Matrix product `self * other`.
    ///
    /// Output rows are filled in parallel; each cell is a sequential dot
    /// product of a row of `self` with a column of `other`.
    pub fn matmul(&self, other: &Array2<f64>) -> Result<Array2<f64>> {
        if self.is_empty() || other.is_empty() {
            return Err(MlError::empty("matrix multiplication operand"));
        }
        if self.cols != other.rows {
            return Err(MlError::ShapeMismatch(format!(
                "cannot multiply ({}, {}) by ({}, {})",
                self.rows, self.cols, other.rows, other.cols
            )));
        }

        let rhs_t = other.transpose();
        let mut data = vec![0.0; self.rows * other.cols];
        data.par_chunks_mut(other.cols)
            .enumerate()
            .for_each(|(i, out_row)| {
                let lhs = self.row_slice(i);
                for (j, cell) in out_row.iter_mut().enumerate() {
                    *cell = dot_scalar_f64(lhs, rhs_t.row_slice(j));
                }
            });

        log::trace!(
            "matmul ({}, {}) x ({}, {}) done",
            self.rows,
            self.cols,
            other.rows,
            other.cols
        );

        Ok(Array2::from_shape_vec((self.rows, other.cols), data)?)
    }
}

impl<T> Index<(usize, usize)> for Array2<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Array2<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

/// A flat buffer whose length does not match the requested matrix shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeError {
    rows: usize,
    cols: usize,
    len: usize,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot lay out {} values as a {}x{} matrix",
            self.len, self.rows, self.cols
        )
    }
}

impl Error for ShapeError {}
