#![deny(missing_docs)]
//! arrow-fromiter: schema-on-read construction of chunked columnar arrays.
//!
//! Values arrive untyped and arbitrarily nested. The builder infers structure as it goes:
//! numbers share a buffer that widens along int64 → float64 → complex128, the first null
//! wraps a chunk in an index indirection, incompatible kinds turn a chunk into a tagged
//! union, and nested sequences recurse into list builders. Storage grows in fixed-capacity
//! chunks collected into a [`PartitionedSequence`], which converts to Arrow arrays.
//!
//! ```
//! use arrow_fromiter::{BuildOptions, Value, from_iter};
//!
//! let seq = from_iter(
//!     vec![Value::Int(1), Value::Null, Value::Real(2.5)],
//!     BuildOptions::default(),
//! )
//! .unwrap();
//! assert_eq!(seq.len(), 3);
//! assert_eq!(seq.get(2), Some(Value::Real(2.5)));
//! ```

mod append;
mod builder;
mod bytes;
mod chunk;
mod error;
mod export;
mod list;
mod nullable;
mod options;
mod scalar;
mod sequence;
mod union;
mod value;

pub use arrow_array;
pub use arrow_schema;

pub use builder::{SequenceBuilder, from_iter};
pub use bytes::ByteStringLeaf;
pub use chunk::Chunk;
pub use error::BuildError;
pub use list::ListBuilder;
pub use nullable::NullableWrapper;
pub use options::{BuildOptions, DEFAULT_CHUNK_SIZE};
pub use scalar::{Dtype, ScalarBuffer, ScalarData};
pub use sequence::PartitionedSequence;
pub use union::UnionBuilder;
pub use value::{Complex64, Value, ValueKind};

/// Element type of every index, span and offset array.
pub type IndexType = i64;

/// Element type of byte-string storage.
pub type CharType = u8;

/// Index value marking a missing slot in a [`NullableWrapper`].
pub const MASKED: IndexType = -1;
