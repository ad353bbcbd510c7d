//! Error types for vector construction and the text codec.

use std::fmt;
use std::num::{IntErrorKind, ParseFloatError, ParseIntError};

/// Errors produced when constructing, encoding or decoding vectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// The text does not match the literal grammar of the named column type.
    MalformedLiteral {
        /// Column type the literal was parsed as (`vector`, `halfvec`, `sparsevec`).
        type_name: &'static str,
    },
    /// A numeric field is not a valid integer or float.
    InvalidNumber(String),
    /// A numeric field does not fit in its target type.
    NumberOutOfRange(String),
    /// A sparse vector literal declared a negative number of dimensions.
    NegativeDimensions,
    /// A sparse vector literal contained a 1-based index below 1.
    IndexOutOfBounds,
    /// A constructor was called with arguments violating its contract.
    InvalidArgument(String),
    /// A sparse vector has more non-zero entries than the wire format can carry.
    TooManyEntries {
        /// Number of non-zero entries in the vector.
        nnz: usize,
        /// Maximum number of entries accepted by the wire format.
        max: usize,
    },
    /// The destination buffer is shorter than the worst-case encoded size.
    BufferTooSmall {
        /// Bytes required by [`crate::codec::VectorLiteral::size_buffer`].
        needed: usize,
        /// Bytes available in the destination.
        available: usize,
    },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::MalformedLiteral { type_name } => {
                write!(f, "malformed {type_name} literal")
            }
            VectorError::InvalidNumber(text) => write!(f, "invalid number: '{text}'"),
            VectorError::NumberOutOfRange(text) => write!(f, "number out of range: '{text}'"),
            VectorError::NegativeDimensions => write!(f, "dimensions cannot be negative"),
            VectorError::IndexOutOfBounds => write!(f, "index out of bounds"),
            VectorError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            VectorError::TooManyEntries { nnz, max } => {
                write!(f, "sparsevec cannot have more than {max} non-zero entries (got {nnz})")
            }
            VectorError::BufferTooSmall { needed, available } => {
                write!(f, "buffer too small: need {needed} bytes, have {available}")
            }
        }
    }
}

impl std::error::Error for VectorError {}

impl VectorError {
    /// Classifies an integer parse failure for the given field text.
    pub(crate) fn from_int(text: &str, err: &ParseIntError) -> Self {
        match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                VectorError::NumberOutOfRange(text.to_string())
            }
            _ => VectorError::InvalidNumber(text.to_string()),
        }
    }

    pub(crate) fn from_float(text: &str, _err: &ParseFloatError) -> Self {
        VectorError::InvalidNumber(text.to_string())
    }
}

/// Result type used throughout this crate.
pub type Result<T, E = VectorError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_error_classification() {
        let overflow = "99999999999".parse::<i32>().unwrap_err();
        assert_eq!(
            VectorError::from_int("99999999999", &overflow),
            VectorError::NumberOutOfRange("99999999999".to_string())
        );

        let invalid = "12a".parse::<i32>().unwrap_err();
        assert_eq!(
            VectorError::from_int("12a", &invalid),
            VectorError::InvalidNumber("12a".to_string())
        );
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            VectorError::MalformedLiteral { type_name: "sparsevec" }.to_string(),
            "malformed sparsevec literal"
        );
        assert_eq!(
            VectorError::NegativeDimensions.to_string(),
            "dimensions cannot be negative"
        );
        assert_eq!(
            VectorError::TooManyEntries { nnz: 16001, max: 16000 }.to_string(),
            "sparsevec cannot have more than 16000 non-zero entries (got 16001)"
        );
    }
}
