mod matrix;
mod serialization;
mod shape;
mod vector;

pub use matrix::Matrix;
pub use shape::Shape;
pub use vector::Vector;
