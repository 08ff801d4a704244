use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Number of rows and columns of a matrix. A vector of `n` components has shape `n x 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("{rows}x{cols}")]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    #[inline]
    pub const fn column(len: usize) -> Self {
        Self::new(len, 1)
    }

    #[inline]
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}
