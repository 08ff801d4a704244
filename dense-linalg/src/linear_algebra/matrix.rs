use std::ops::{AddAssign, MulAssign, SubAssign};

use delegate::delegate;
use derive_more::{Display, Index, IndexMut};
use itertools::Itertools;
use log::trace;
use nalgebra::DMatrix;
use rand::Rng;

use crate::error::{LinalgError, Result};
use crate::linear_algebra::Shape;

/// Dense matrix of `f64` values with at least one row and one column.
///
/// Elements are addressed as `m[(row, col)]`. Scalar and additive operations mutate in place,
/// while [`Matrix::multiply_matrix`] and [`Matrix::transpose`] return a new matrix.
#[derive(Clone, Debug, PartialEq, Display, Index, IndexMut)]
pub struct Matrix(DMatrix<f64>);

fn check_non_empty(shape: Shape) -> Result<()> {
    ensure!(
        !shape.is_empty(),
        LinalgError::InvalidShape {
            reason: format!("{shape} has a zero dimension")
        }
    );
    Ok(())
}

impl Matrix {
    /// Build a matrix from its rows. All rows must be non-empty and of equal length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let shape = Shape::new(rows.len(), rows.first().map_or(0, Vec::len));
        check_non_empty(shape)?;
        ensure!(
            rows.iter().map(Vec::len).all_equal(),
            LinalgError::InvalidShape {
                reason: format!(
                    "ragged rows with lengths {:?}",
                    rows.iter().map(Vec::len).collect_vec()
                )
            }
        );
        Ok(Self(DMatrix::from_row_iterator(
            shape.rows,
            shape.cols,
            rows.into_iter().flatten(),
        )))
    }

    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        check_non_empty(Shape::new(rows, cols))?;
        Ok(Self(DMatrix::zeros(rows, cols)))
    }

    pub fn identity(n: usize) -> Result<Self> {
        check_non_empty(Shape::new(n, n))?;
        Ok(Self(DMatrix::identity(n, n)))
    }

    /// Matrix with entries sampled uniformly from `[0, 1)`.
    pub fn rand<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        check_non_empty(Shape::new(rows, cols))?;
        Ok(Self(DMatrix::from_fn(rows, cols, |_, _| rng.random())))
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = LinalgError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl Matrix {
    delegate! {
        to self.0 {
            pub fn nrows(&self) -> usize;
            pub fn ncols(&self) -> usize;
            pub fn iter(&self) -> impl Iterator<Item = &'_ f64>;
        }
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        Shape::new(self.nrows(), self.ncols())
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.shape().is_square()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.0.get((row, col)).copied()
    }

    pub fn row(&self, i: usize) -> Option<Vec<f64>> {
        (i < self.nrows()).then(|| self.0.row(i).iter().copied().collect())
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.0
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }
}

impl Matrix {
    pub fn add_scalar(&mut self, scalar: f64) {
        self.0.add_scalar_mut(scalar);
    }

    pub fn subtract_scalar(&mut self, scalar: f64) {
        self.add_scalar(-scalar);
    }

    pub fn multiply_scalar(&mut self, scalar: f64) {
        self.0 *= scalar;
    }

    /// Elementwise `self += rhs`. On a shape mismatch `self` is left untouched.
    pub fn add_matrix(&mut self, rhs: &Matrix) -> Result<()> {
        ensure!(
            self.shape() == rhs.shape(),
            LinalgError::dimension_mismatch("add_matrix", self.shape(), rhs.shape())
        );
        self.0 += &rhs.0;
        Ok(())
    }

    /// Elementwise `self += -1 * rhs`, computed on a negated copy of `rhs`.
    pub fn subtract_matrix(&mut self, rhs: &Matrix) -> Result<()> {
        ensure!(
            self.shape() == rhs.shape(),
            LinalgError::dimension_mismatch("subtract_matrix", self.shape(), rhs.shape())
        );
        let mut negated = rhs.clone();
        negated.multiply_scalar(-1.0);
        self.add_matrix(&negated)
    }

    /// Matrix product `self * rhs`, requiring `self.ncols() == rhs.nrows()`.
    ///
    /// Entry `(i, p)` is accumulated from `0.0` over `j` in increasing order, so results are
    /// bit-for-bit reproducible.
    pub fn multiply_matrix(&self, rhs: &Matrix) -> Result<Matrix> {
        ensure!(
            self.ncols() == rhs.nrows(),
            LinalgError::dimension_mismatch("multiply_matrix", self.shape(), rhs.shape())
        );
        trace!("multiply_matrix {} * {}", self.shape(), rhs.shape());

        let mut product = DMatrix::zeros(self.nrows(), rhs.ncols());
        for i in 0..self.nrows() {
            for p in 0..rhs.ncols() {
                let mut sum = 0.0;
                for j in 0..self.ncols() {
                    sum += self.0[(i, j)] * rhs.0[(j, p)];
                }
                product[(i, p)] = sum;
            }
        }
        Ok(Self(product))
    }

    pub fn transpose(&self) -> Matrix {
        Self(self.0.transpose())
    }

    pub fn trace(&self) -> Result<f64> {
        ensure!(self.is_square(), LinalgError::NotSquare(self.shape()));
        Ok((0..self.nrows()).fold(0.0, |trace, i| trace + self.0[(i, i)]))
    }
}

impl AddAssign<f64> for Matrix {
    fn add_assign(&mut self, rhs: f64) {
        self.add_scalar(rhs)
    }
}

impl SubAssign<f64> for Matrix {
    fn sub_assign(&mut self, rhs: f64) {
        self.subtract_scalar(rhs)
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, rhs: f64) {
        self.multiply_scalar(rhs)
    }
}
