//! `sparsevec` literals.
//!
//! Decoding does not check that indices are ascending, unique or below the
//! declared dimensions: the text is trusted to come from a conforming encoder
//! and the entries are kept in the order they appear.

use super::number::{parse_float, parse_int};
use super::{
    F32_TEXT_WIDTH, INT_TEXT_WIDTH, SPARSE_MAX_NNZ, VectorLiteral, WIRE_INT_MAX, malformed,
    write_sparse,
};
use crate::error::{Result, VectorError};
use crate::sparsevec::SparseVector;
use std::fmt::{self, Write};

impl VectorLiteral for SparseVector {
    const TYPE_NAME: &'static str = "sparsevec";

    fn size_buffer(&self) -> usize {
        // `{`, `}`, `/` and the dimensions, then `index:value,` per entry
        self.nnz()
            .saturating_mul(INT_TEXT_WIDTH + F32_TEXT_WIDTH + 2)
            .saturating_add(3 + INT_TEXT_WIDTH)
    }

    fn check_encodable(&self) -> Result<()> {
        let nnz = self.nnz();
        if nnz > SPARSE_MAX_NNZ {
            #[cfg(feature = "logging")]
            log::warn!("refusing to encode sparsevec with {nnz} non-zero entries");
            return Err(VectorError::TooManyEntries {
                nnz,
                max: SPARSE_MAX_NNZ,
            });
        }
        if self.dimensions() > WIRE_INT_MAX {
            return Err(VectorError::NumberOutOfRange(self.dimensions().to_string()));
        }
        // 1-based on the wire
        if let Some(&index) = self.indices().iter().find(|&&index| index >= WIRE_INT_MAX) {
            return Err(VectorError::NumberOutOfRange((index as u128 + 1).to_string()));
        }
        Ok(())
    }

    fn write_literal<W: Write>(&self, out: &mut W) -> fmt::Result {
        write_sparse(out, self)
    }

    fn decode(text: &str) -> Result<Self> {
        if text.len() < 4 || !text.starts_with('{') {
            return Err(malformed(Self::TYPE_NAME));
        }
        let close = text[1..]
            .find("}/")
            .map(|n| n + 1)
            .ok_or_else(|| malformed(Self::TYPE_NAME))?;

        let dimensions = parse_int(&text[close + 2..])?;
        let dimensions =
            usize::try_from(dimensions).map_err(|_| VectorError::NegativeDimensions)?;

        let body = &text[1..close];
        let mut indices = Vec::new();
        let mut values = Vec::new();
        if !body.is_empty() {
            for field in body.split(',') {
                let (index, value) = field
                    .split_once(':')
                    .filter(|(_, value)| !value.contains(':'))
                    .ok_or_else(|| malformed(Self::TYPE_NAME))?;

                let index = parse_int(index)?;
                let value = parse_float(value)?;
                if index < 1 {
                    return Err(VectorError::IndexOutOfBounds);
                }

                let index =
                    usize::try_from(index - 1).map_err(|_| VectorError::IndexOutOfBounds)?;
                indices.push(index);
                values.push(value);
            }
        }

        SparseVector::new(dimensions, indices, values)
    }
}
