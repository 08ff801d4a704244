use displaydoc::Display;
use thiserror::Error;

use crate::linear_algebra::Shape;

pub type Result<T> = std::result::Result<T, LinalgError>;

#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum LinalgError {
    /// dimension mismatch in {op}: {lhs} vs {rhs}
    DimensionMismatch {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },
    /// trace undefined for non-square matrix of shape {0}
    NotSquare(Shape),
    /// invalid matrix shape: {reason}
    InvalidShape { reason: String },
}

impl LinalgError {
    pub(crate) fn dimension_mismatch(op: &'static str, lhs: Shape, rhs: Shape) -> Self {
        Self::DimensionMismatch { op, lhs, rhs }
    }
}
