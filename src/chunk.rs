//! The chunk enum: one fixed-capacity, independently typed storage unit.

use crate::{
    bytes::ByteStringLeaf,
    list::ListBuilder,
    nullable::NullableWrapper,
    scalar::{Dtype, ScalarBuffer},
    union::UnionBuilder,
    value::Value,
};

/// One storage unit of a [`PartitionedSequence`](crate::PartitionedSequence).
#[derive(Debug, Clone, PartialEq)]
pub enum Chunk {
    /// Primitive values of one dtype.
    Scalar(ScalarBuffer),
    /// Variable-length byte strings.
    Bytes(ByteStringLeaf),
    /// Variable-length lists over a nested sequence.
    List(ListBuilder),
    /// Index indirection marking missing slots.
    Nullable(NullableWrapper),
    /// Tagged variants of incompatible kinds.
    Union(UnionBuilder),
}

impl Chunk {
    /// Number of logical slots written.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Chunk::Scalar(b) => b.len(),
            Chunk::Bytes(b) => b.len(),
            Chunk::List(b) => b.len(),
            Chunk::Nullable(b) => b.len(),
            Chunk::Union(b) => b.len(),
        }
    }

    /// Whether no slots have been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the chunk holds `capacity` slots and must not grow further.
    #[must_use]
    pub fn is_full(&self, capacity: usize) -> bool {
        self.len() >= capacity
    }

    /// Read the logical value at slot `i`.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<Value> {
        match self {
            Chunk::Scalar(b) => b.get(i),
            Chunk::Bytes(b) => b.value(i),
            Chunk::List(b) => b.get(i),
            Chunk::Nullable(b) => b.get(i),
            Chunk::Union(b) => b.get(i),
        }
    }

    /// Short name of the chunk's kind, used for union field names and diagnostics.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Chunk::Scalar(b) => match b.dtype() {
                Dtype::Bool => "bool",
                Dtype::Int64 => "int64",
                Dtype::Float64 => "float64",
                Dtype::Complex128 => "complex128",
            },
            Chunk::Bytes(_) => "bytes",
            Chunk::List(_) => "list",
            Chunk::Nullable(_) => "nullable",
            Chunk::Union(_) => "union",
        }
    }

    /// Borrow as a scalar buffer.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&ScalarBuffer> {
        match self {
            Chunk::Scalar(b) => Some(b),
            _ => None,
        }
    }

    /// Borrow as a byte-string leaf.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&ByteStringLeaf> {
        match self {
            Chunk::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Borrow as a list builder.
    #[must_use]
    pub fn as_list(&self) -> Option<&ListBuilder> {
        match self {
            Chunk::List(b) => Some(b),
            _ => None,
        }
    }

    /// Borrow as a nullable wrapper.
    #[must_use]
    pub fn as_nullable(&self) -> Option<&NullableWrapper> {
        match self {
            Chunk::Nullable(b) => Some(b),
            _ => None,
        }
    }

    /// Borrow as a union builder.
    #[must_use]
    pub fn as_union(&self) -> Option<&UnionBuilder> {
        match self {
            Chunk::Union(b) => Some(b),
            _ => None,
        }
    }

    /// Replace the chunk in its slot with `f(old)`, moving the old chunk rather than aliasing it.
    pub(crate) fn replace_with(&mut self, f: impl FnOnce(Chunk) -> Chunk) {
        let old = std::mem::replace(self, Chunk::Scalar(ScalarBuffer::new(Dtype::Bool, 0)));
        *self = f(old);
    }
}
