//! `vector` and `halfvec` literals.

use super::number::parse_float;
use super::{F32_TEXT_WIDTH, VectorLiteral, malformed, write_dense};
use crate::error::{Result, VectorError};
use crate::halfvec::HalfVector;
use crate::vector::Vector;
use half::f16;
use std::fmt::{self, Write};

fn dense_size_buffer(dimensions: usize) -> usize {
    // brackets, plus one value and one comma per dimension
    dimensions
        .saturating_mul(F32_TEXT_WIDTH + 1)
        .saturating_add(2)
}

fn parse_dense(text: &str, type_name: &'static str) -> Result<Vec<f32>> {
    let inner = text
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| malformed(type_name))?;

    if inner.is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .map(|field| {
            if field.is_empty() {
                Err(malformed(type_name))
            } else {
                parse_float(field)
            }
        })
        .collect()
}

fn round_to_half(value: f32) -> f32 {
    f16::from_f32(value).to_f32()
}

impl VectorLiteral for Vector {
    const TYPE_NAME: &'static str = "vector";

    fn size_buffer(&self) -> usize {
        dense_size_buffer(self.dimensions())
    }

    fn check_encodable(&self) -> Result<()> {
        Ok(())
    }

    fn write_literal<W: Write>(&self, out: &mut W) -> fmt::Result {
        write_dense(out, self.as_slice(), |v| v)
    }

    fn decode(text: &str) -> Result<Self> {
        parse_dense(text, Self::TYPE_NAME).map(Vector::new)
    }
}

/// Values are rounded to binary16 when written.
impl VectorLiteral for HalfVector {
    const TYPE_NAME: &'static str = "halfvec";

    fn size_buffer(&self) -> usize {
        dense_size_buffer(self.dimensions())
    }

    fn check_encodable(&self) -> Result<()> {
        match self
            .iter()
            .find(|v| v.is_finite() && !round_to_half(**v).is_finite())
        {
            Some(value) => Err(VectorError::NumberOutOfRange(value.to_string())),
            None => Ok(()),
        }
    }

    fn write_literal<W: Write>(&self, out: &mut W) -> fmt::Result {
        write_dense(out, self.as_slice(), round_to_half)
    }

    fn decode(text: &str) -> Result<Self> {
        parse_dense(text, Self::TYPE_NAME).map(HalfVector::new)
    }
}
