//! Dense single-precision vectors, stored as pgvector `vector`.

use crate::codec::{self, VectorLiteral};
use crate::error::VectorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// A dense vector of `f32` values.
///
/// Any float is accepted, including NaN and infinities. The number of
/// dimensions is the number of values and may be zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector {
    values: Vec<f32>,
}

impl Vector {
    /// Creates a vector that takes ownership of `values`.
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    /// Returns the number of dimensions.
    pub fn dimensions(&self) -> usize {
        self.values.len()
    }

    /// Returns the vector data as a slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Copies the values into a new `Vec<f32>`.
    pub fn to_vec(&self) -> Vec<f32> {
        self.values.clone()
    }

    /// Consumes the vector, returning its values.
    pub fn into_vec(self) -> Vec<f32> {
        self.values
    }
}

impl From<Vec<f32>> for Vector {
    fn from(values: Vec<f32>) -> Self {
        Self::new(values)
    }
}

impl From<&[f32]> for Vector {
    fn from(values: &[f32]) -> Self {
        Self::new(values.to_vec())
    }
}

impl<const N: usize> From<[f32; N]> for Vector {
    fn from(values: [f32; N]) -> Self {
        Self::new(values.to_vec())
    }
}

impl From<Vector> for Vec<f32> {
    fn from(vector: Vector) -> Self {
        vector.values
    }
}

impl Deref for Vector {
    type Target = [f32];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl AsRef<[f32]> for Vector {
    fn as_ref(&self) -> &[f32] {
        &self.values
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        codec::write_dense(f, &self.values, |v| v)
    }
}

impl FromStr for Vector {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_agree() {
        let owned = Vector::new(vec![1.0, 2.0, 3.0]);
        let borrowed = Vector::from(&[1.0f32, 2.0, 3.0][..]);
        let array = Vector::from([1.0f32, 2.0, 3.0]);

        assert_eq!(owned.dimensions(), 3);
        assert_eq!(owned, borrowed);
        assert_eq!(owned, array);
    }

    #[test]
    fn test_empty_vector() {
        let vec = Vector::default();
        assert_eq!(vec.dimensions(), 0);
        assert_eq!(vec.to_string(), "[]");
    }

    #[test]
    fn test_conversion_back_to_vec() {
        let vec = Vector::from(vec![4.0, 5.0, 6.0]);
        assert_eq!(vec.to_vec(), vec![4.0, 5.0, 6.0]);
        assert_eq!(vec.as_slice()[1], 5.0);
        assert_eq!(vec[2], 6.0);

        let values: Vec<f32> = vec.into();
        assert_eq!(values, vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_nan_is_not_equal_to_itself() {
        let a = Vector::from(vec![f32::NAN]);
        let b = Vector::from(vec![f32::NAN]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_and_parse() {
        let vec = Vector::from(vec![1.0, -2.5, 3.0]);
        assert_eq!(vec.to_string(), "[1,-2.5,3]");
        assert_eq!("[1,-2.5,3]".parse::<Vector>().unwrap(), vec);
    }
}
