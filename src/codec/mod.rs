//! Text encoding shared with the pgvector column types.
//!
//! Grammar:
//!
//! ```text
//! vector, halfvec:  "[" (float ("," float)*)? "]"
//! sparsevec:        "{" (index ":" float ("," index ":" float)*)? "}/" dimensions
//! ```
//!
//! Floats are written in their shortest round-trip decimal form. Sparse
//! indices are 1-based on the wire.

mod dense;
mod number;
mod sparse;

use crate::error::{Result, VectorError};
use crate::sparsevec::SparseVector;
use std::fmt::{self, Write};

/// Maximum number of non-zero entries a `sparsevec` literal may carry.
pub const SPARSE_MAX_NNZ: usize = 16000;

/// Upper bound on the `Display` width of an `f32`: a sign, `0.`, at most 45
/// zeros and 9 significant digits.
pub const F32_TEXT_WIDTH: usize = 57;

/// Upper bound on the width of a wire integer (`int4`, sign included).
pub const INT_TEXT_WIDTH: usize = 11;

/// Largest value an `int4` wire field holds.
const WIRE_INT_MAX: usize = 2_147_483_647;

/// A value with a pgvector text representation.
///
/// `encode` and `encode_into` validate the value before producing any output:
/// when they fail, nothing has been written.
pub trait VectorLiteral: Sized {
    /// Name of the database column type.
    const TYPE_NAME: &'static str;

    /// Worst-case length in bytes of the encoded literal.
    ///
    /// Computed in closed form from the number of entries. Encoding never
    /// produces more than this many bytes.
    fn size_buffer(&self) -> usize;

    /// Checks that the value can be represented on the wire.
    fn check_encodable(&self) -> Result<()>;

    /// Writes the literal without validating it.
    fn write_literal<W: Write>(&self, out: &mut W) -> fmt::Result;

    /// Parses a literal.
    fn decode(text: &str) -> Result<Self>;

    /// Encodes the value as a literal.
    fn encode(&self) -> Result<String> {
        self.check_encodable()?;
        let mut text = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_literal(&mut text);
        Ok(text)
    }

    /// Encodes the value into `buf`, returning the number of bytes written.
    ///
    /// `buf` must hold at least [`size_buffer`](Self::size_buffer) bytes.
    /// On error `buf` is left untouched.
    fn encode_into(&self, buf: &mut [u8]) -> Result<usize> {
        self.check_encodable()?;
        let needed = self.size_buffer();
        let available = buf.len();
        if available < needed {
            return Err(VectorError::BufferTooSmall { needed, available });
        }

        let mut writer = SliceWriter { buf, pos: 0 };
        self.write_literal(&mut writer)
            .map_err(|_| VectorError::BufferTooSmall { needed, available })?;
        Ok(writer.pos)
    }
}

/// Encodes `value` as a literal.
pub fn encode<T: VectorLiteral>(value: &T) -> Result<String> {
    value.encode()
}

/// Decodes a literal into `T`.
pub fn decode<T: VectorLiteral>(text: &str) -> Result<T> {
    T::decode(text)
}

/// Cursor over a caller-provided byte buffer.
struct SliceWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.pos + s.len();
        let dst = self.buf.get_mut(self.pos..end).ok_or(fmt::Error)?;
        dst.copy_from_slice(s.as_bytes());
        self.pos = end;
        Ok(())
    }
}

pub(crate) fn write_dense<W, F>(out: &mut W, values: &[f32], round: F) -> fmt::Result
where
    W: Write,
    F: Fn(f32) -> f32,
{
    out.write_char('[')?;
    for (i, &value) in values.iter().enumerate() {
        if i > 0 {
            out.write_char(',')?;
        }
        write!(out, "{}", round(value))?;
    }
    out.write_char(']')
}

pub(crate) fn write_sparse<W: Write>(out: &mut W, vector: &SparseVector) -> fmt::Result {
    out.write_char('{')?;
    for (i, (index, value)) in vector.iter().enumerate() {
        if i > 0 {
            out.write_char(',')?;
        }
        write!(out, "{}:{value}", index as u128 + 1)?;
    }
    write!(out, "}}/{}", vector.dimensions())
}

fn malformed(type_name: &'static str) -> VectorError {
    #[cfg(feature = "logging")]
    log::debug!("rejected malformed {type_name} literal");
    VectorError::MalformedLiteral { type_name }
}
