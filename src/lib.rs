//! # manifold-pgvector
//!
//! pgvector value types and their text encoding.
//!
//! This crate provides the three vector types understood by the pgvector
//! extension together with the text literals Postgres uses to exchange them:
//!
//! - [`Vector`] ↔ `vector`: `[1,2,3]`
//! - [`HalfVector`] ↔ `halfvec`: `[1,2,3]`, rounded to half precision on the wire
//! - [`SparseVector`] ↔ `sparsevec`: `{1:1,3:2,5:3}/6`, 1-based indices
//!
//! ## Quick Start
//!
//! ```rust
//! use pgvector::{SparseVector, Vector, VectorLiteral};
//!
//! # fn main() -> Result<(), pgvector::VectorError> {
//! let embedding = Vector::from(vec![1.0, 2.0, 3.0]);
//! let text = embedding.encode()?;
//! assert_eq!(text, "[1,2,3]");
//! assert_eq!(Vector::decode(&text)?, embedding);
//!
//! let sparse = SparseVector::from_dense(&[1.0, 0.0, 2.0, 0.0, 3.0, 0.0]);
//! assert_eq!(sparse.encode()?, "{1:1,3:2,5:3}/6");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! Everything here is pure, synchronous and allocation-only. The crate does
//! not talk to a database: the encoded text is meant to be bound as a
//! statement parameter by whatever client is in use, and decoded text comes
//! back from a result column.
//!
//! Enable the `logging` feature to emit `log` records when literals are
//! rejected.

#![deny(missing_docs)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::float_cmp
)]

pub mod codec;
pub mod error;
pub mod halfvec;
pub mod sparsevec;
pub mod vector;

pub use codec::{SPARSE_MAX_NNZ, VectorLiteral};
pub use error::{Result, VectorError};
pub use halfvec::HalfVector;
pub use sparsevec::SparseVector;
pub use vector::Vector;
