//! Half-precision vectors, stored as pgvector `halfvec`.
//!
//! Values are held as `f32` in memory. Rounding to IEEE binary16 happens when
//! the vector is encoded for the wire, see [`crate::codec::VectorLiteral`].

use crate::codec::{self, VectorLiteral};
use crate::error::VectorError;
use half::f16;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// A dense vector transmitted at half precision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HalfVector {
    values: Vec<f32>,
}

impl HalfVector {
    /// Creates a half vector that takes ownership of `values`.
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    /// Creates a half vector from binary16 values.
    pub fn from_f16(values: &[f16]) -> Self {
        Self::new(values.iter().map(|v| v.to_f32()).collect())
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

    /// Rounds every value to binary16 (allocates).
    pub fn to_f16(&self) -> Vec<f16> {
        self.values.iter().map(|&v| f16::from_f32(v)).collect()
    }
}

impl From<Vec<f32>> for HalfVector {
    fn from(values: Vec<f32>) -> Self {
        Self::new(values)
    }
}

impl From<&[f32]> for HalfVector {
    fn from(values: &[f32]) -> Self {
        Self::new(values.to_vec())
    }
}

impl<const N: usize> From<[f32; N]> for HalfVector {
    fn from(values: [f32; N]) -> Self {
        Self::new(values.to_vec())
    }
}

impl From<HalfVector> for Vec<f32> {
    fn from(vector: HalfVector) -> Self {
        vector.values
    }
}

impl Deref for HalfVector {
    type Target = [f32];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl AsRef<[f32]> for HalfVector {
    fn as_ref(&self) -> &[f32] {
        &self.values
    }
}

/// Prints the in-memory values at full precision.
impl fmt::Display for HalfVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        codec::write_dense(f, &self.values, |v| v)
    }
}

impl FromStr for HalfVector {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_vector() {
        let vec = HalfVector::from(vec![1.0, 2.0, 3.0]);
        assert_eq!(vec.dimensions(), 3);
    }

    #[test]
    fn test_constructor_slice() {
        let data = [1.0f32, 2.0, 3.0];
        let vec = HalfVector::from(&data[..]);
        assert_eq!(vec.dimensions(), 3);
        assert_eq!(vec, HalfVector::from(data));
    }

    #[test]
    fn test_keeps_full_precision_in_memory() {
        let vec = HalfVector::from(vec![0.1]);
        assert_eq!(vec[0], 0.1);
        assert_eq!(vec.to_string(), "[0.1]");
        assert_ne!(vec.to_f16()[0].to_f32(), 0.1);
    }

    #[test]
    fn test_f16_conversion() {
        let halves = [f16::from_f32(0.5), f16::from_f32(-2.0), f16::from_f32(1024.0)];
        let vec = HalfVector::from_f16(&halves);
        assert_eq!(vec.to_vec(), vec![0.5, -2.0, 1024.0]);
        assert_eq!(vec.to_f16(), halves.to_vec());
    }
}
