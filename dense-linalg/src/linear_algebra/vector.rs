use std::ops::{AddAssign, MulAssign, SubAssign};

use delegate::delegate;
use derive_more::{Display, Index, IndexMut};
use log::debug;
use nalgebra::DVector;
use rand::Rng;

use crate::error::{LinalgError, Result};
use crate::linear_algebra::Shape;

/// Dense vector of `f64` components. The empty vector is allowed.
#[derive(Clone, Debug, PartialEq, Display, Index, IndexMut)]
pub struct Vector(DVector<f64>);

impl From<Vec<f64>> for Vector {
    fn from(v: Vec<f64>) -> Self {
        Self(DVector::from_vec(v))
    }
}

impl From<Vector> for Vec<f64> {
    fn from(v: Vector) -> Self {
        v.into_vec()
    }
}

impl Vector {
    pub fn from_slice(data: &[f64]) -> Self {
        Self(DVector::from_row_slice(data))
    }

    pub fn zeros(n: usize) -> Self {
        Self(DVector::zeros(n))
    }

    /// Vector with components sampled uniformly from `[0, 1)`.
    pub fn rand<R: Rng>(n: usize, rng: &mut R) -> Self {
        Self(DVector::from_fn(n, |_, _| rng.random()))
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0.data.into()
    }
}

impl Vector {
    delegate! {
        to self.0 {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn as_slice(&self) -> &[f64];
            pub fn iter(&self) -> impl Iterator<Item = &'_ f64>;
        }
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        Shape::column(self.len())
    }

    pub fn get(&self, i: usize) -> Option<f64> {
        self.0.get(i).copied()
    }

    fn ensure_same_len(&self, op: &'static str, rhs: &Vector) -> Result<()> {
        ensure!(
            self.len() == rhs.len(),
            LinalgError::dimension_mismatch(op, self.shape(), rhs.shape())
        );
        Ok(())
    }
}

impl Vector {
    /// Euclidean norm, `0` for the empty vector.
    pub fn magnitude(&self) -> f64 {
        self.0
            .iter()
            .fold(0.0, |sum, component| sum + component * component)
            .sqrt()
    }

    /// Divide every component by the magnitude.
    ///
    /// A zero vector is not special-cased: `0 / 0` leaves every component `NaN`.
    pub fn normalize(&mut self) {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            debug!(
                "normalizing a zero-magnitude vector of length {}",
                self.len()
            );
        }
        self.0.iter_mut().for_each(|component| *component /= magnitude);
    }

    pub fn add_vector(&mut self, rhs: &Vector) -> Result<()> {
        self.ensure_same_len("add_vector", rhs)?;
        self.0 += &rhs.0;
        Ok(())
    }

    pub fn subtract_vector(&mut self, rhs: &Vector) -> Result<()> {
        self.ensure_same_len("subtract_vector", rhs)?;
        let mut negated = rhs.clone();
        negated.multiply_scalar(-1.0);
        self.add_vector(&negated)
    }

    pub fn multiply_scalar(&mut self, scalar: f64) {
        self.0 *= scalar;
    }

    pub fn dot_product(&self, rhs: &Vector) -> Result<f64> {
        self.ensure_same_len("dot_product", rhs)?;
        Ok(self
            .0
            .iter()
            .zip(rhs.0.iter())
            .fold(0.0, |dot, (&lhs, &rhs)| dot + lhs * rhs))
    }

    /// Euclidean distance, i.e. the magnitude of `self - rhs`.
    pub fn distance(&self, rhs: &Vector) -> Result<f64> {
        self.ensure_same_len("distance", rhs)?;
        let mut difference = self.clone();
        difference.subtract_vector(rhs)?;
        Ok(difference.magnitude())
    }
}

impl AddAssign<f64> for Vector {
    fn add_assign(&mut self, rhs: f64) {
        self.0.add_scalar_mut(rhs)
    }
}

impl SubAssign<f64> for Vector {
    fn sub_assign(&mut self, rhs: f64) {
        self.0.add_scalar_mut(-rhs)
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, rhs: f64) {
        self.multiply_scalar(rhs)
    }
}
