//! Sparse vectors in coordinate form, stored as pgvector `sparsevec`.
use crate::codec::{self, VectorLiteral};
use crate::error::{Result, VectorError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A sparse vector: a declared number of dimensions plus the non-zero
/// entries as parallel, ascending `indices` and `values`.
///
/// Indices are zero-based in memory. The text format is 1-based.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSparseVector")]
pub struct SparseVector {
    dimensions: usize,
    indices: Vec<usize>,
    values: Vec<f32>,
}

#[derive(Deserialize)]
struct RawSparseVector {
    dimensions: usize,
    indices: Vec<usize>,
    values: Vec<f32>,
}

impl TryFrom<RawSparseVector> for SparseVector {
    type Error = VectorError;

    fn try_from(raw: RawSparseVector) -> Result<Self> {
        Self::new(raw.dimensions, raw.indices, raw.values)
    }
}

impl SparseVector {
    /// Creates a sparse vector from its parts.
    ///
    /// Only the lengths of `indices` and `values` are checked. The caller is
    /// responsible for ascending, unique, in-range indices and for leaving
    /// zero values out.
    pub fn new(dimensions: usize, indices: Vec<usize>, values: Vec<f32>) -> Result<Self> {
        if indices.len() != values.len() {
            return Err(VectorError::InvalidArgument(
                "indices and values must be the same length".to_string(),
            ));
        }
        Ok(Self {
            dimensions,
            indices,
            values,
        })
    }

    /// Creates a sparse vector from dense values, keeping the non-zero entries.
    pub fn from_dense(dense: &[f32]) -> Self {
        let (indices, values) = dense
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != 0.0)
            .map(|(i, &v)| (i, v))
            .unzip();
        Self {
            dimensions: dense.len(),
            indices,
            values,
        }
    }

    /// Creates a sparse vector from `(index, value)` pairs, typically a map.
    ///
    /// Every index must lie in `[0, dimensions)`, zero values included.
    /// Zero values are dropped and the remaining entries are sorted, so the
    /// iteration order of `entries` does not matter. A repeated index is
    /// rejected.
    pub fn from_map<I>(entries: I, dimensions: usize) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, f32)>,
    {
        if dimensions < 1 {
            return Err(VectorError::InvalidArgument(
                "sparsevec must have at least 1 dimension".to_string(),
            ));
        }

        let mut non_zero = Vec::new();
        for (index, value) in entries {
            if index >= dimensions {
                return Err(VectorError::InvalidArgument(format!(
                    "index {index} out of bounds for {dimensions} dimensions"
                )));
            }
            if value != 0.0 {
                non_zero.push((index, value));
            }
        }

        non_zero.sort_unstable_by_key(|&(index, _)| index);
        if let Some(pair) = non_zero.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(VectorError::InvalidArgument(format!(
                "duplicate index {}",
                pair[0].0
            )));
        }

        let (indices, values) = non_zero.into_iter().unzip();
        Ok(Self {
            dimensions,
            indices,
            values,
        })
    }

    /// Returns the number of dimensions.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Returns the zero-based indices of the non-zero entries.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the non-zero values.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Returns the number of stored entries.
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Iterates over the stored `(index, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// Expands into a dense `Vec<f32>` of length `dimensions()`.
    ///
    /// Entries whose index is not below `dimensions()` are skipped.
    pub fn to_dense(&self) -> Vec<f32> {
        let mut dense = vec![0.0; self.dimensions];
        for (index, value) in self.iter() {
            if let Some(slot) = dense.get_mut(index) {
                *slot = value;
            }
        }
        dense
    }
}

impl From<&[f32]> for SparseVector {
    fn from(dense: &[f32]) -> Self {
        Self::from_dense(dense)
    }
}

impl From<Vec<f32>> for SparseVector {
    fn from(dense: Vec<f32>) -> Self {
        Self::from_dense(&dense)
    }
}

impl<const N: usize> From<[f32; N]> for SparseVector {
    fn from(dense: [f32; N]) -> Self {
        Self::from_dense(&dense)
    }
}

/// Prints the literal without the wire-format entry limit.
impl fmt::Display for SparseVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        codec::write_sparse(f, self)
    }
}

impl FromStr for SparseVector {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}
