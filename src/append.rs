//! The append protocol: per-kind `is_mine` / `promote` / `fill` plus null wrapping and
//! unionization.

use crate::{
    BuildError,
    bytes::ByteStringLeaf,
    chunk::Chunk,
    list::ListBuilder,
    nullable::NullableWrapper,
    scalar::{Scalar, ScalarBuffer},
    sequence::Limits,
    union::UnionBuilder,
    value::{Value, ValueKind},
};

/// A classified non-null value, borrowing any payload from the input.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Incoming<'a> {
    Scalar(Scalar),
    Bytes(&'a [u8]),
    List(&'a [Value]),
}

impl<'a> Incoming<'a> {
    /// Classify `value`. `Ok(None)` stands for null.
    pub(crate) fn classify(value: &'a Value) -> Result<Option<Self>, BuildError> {
        let item = match (value.kind(), value) {
            (ValueKind::Null, _) => return Ok(None),
            (ValueKind::Boolean, Value::Bool(b)) => Incoming::Scalar(Scalar::Bool(*b)),
            (ValueKind::Integer, Value::Int(i)) => Incoming::Scalar(Scalar::Int(*i)),
            (ValueKind::Real, Value::Real(r)) => Incoming::Scalar(Scalar::Real(*r)),
            (ValueKind::Complex, Value::Complex(c)) => Incoming::Scalar(Scalar::Complex(*c)),
            (ValueKind::ByteString, Value::Bytes(b)) => Incoming::Bytes(b),
            (ValueKind::NestedSequence, Value::List(items)) => Incoming::List(items),
            _ => return Err(BuildError::unsupported_kind(value.type_name())),
        };
        Ok(Some(item))
    }

    /// An empty chunk of the kind this value starts.
    fn new_chunk(&self, capacity: usize) -> Chunk {
        match self {
            Incoming::Scalar(s) => Chunk::Scalar(ScalarBuffer::new(s.dtype(), capacity)),
            Incoming::Bytes(_) => Chunk::Bytes(ByteStringLeaf::new(capacity)),
            Incoming::List(_) => Chunk::List(ListBuilder::new(capacity)),
        }
    }

    /// Whether `chunk` can take this value, possibly after [`Self::promote`].
    fn is_mine(&self, chunk: &Chunk) -> bool {
        match (self, chunk) {
            (Incoming::Scalar(s), Chunk::Scalar(b)) => b.dtype().compatible(s.dtype()),
            (Incoming::Bytes(_), Chunk::Bytes(_)) => true,
            (Incoming::List(_), Chunk::List(_)) => true,
            _ => false,
        }
    }

    /// Widen `chunk` so that it holds this value losslessly.
    fn promote(&self, chunk: &mut Chunk) {
        if let (Incoming::Scalar(s), Chunk::Scalar(b)) = (self, chunk) {
            b.widen(s.dtype());
        }
    }

    /// Write this value into the next free slot of a chunk that [`Self::is_mine`] accepted.
    fn fill(&self, chunk: &mut Chunk, limits: Limits, depth: usize) -> Result<(), BuildError> {
        match (self, chunk) {
            (Incoming::Scalar(s), Chunk::Scalar(b)) => b.push(*s),
            (Incoming::Bytes(bytes), Chunk::Bytes(leaf)) => leaf.push(bytes),
            (Incoming::List(items), Chunk::List(list)) => {
                let depth = depth + 1;
                if let Some(limit) = limits.max_depth
                    && depth > limit
                {
                    return Err(BuildError::ResourceExhausted { depth, limit });
                }
                list.open_row();
                for item in *items {
                    list.content_mut().append(item, limits, depth)?;
                    list.extend_row();
                }
            }
            (item, chunk) => unreachable!(
                "{item:?} filled into rejected {} chunk",
                chunk.kind_name()
            ),
        }
        Ok(())
    }
}

/// The chunk a fresh partition opens with for `item` (`None` = null).
pub(crate) fn new_chunk(item: Option<&Incoming<'_>>, capacity: usize) -> Chunk {
    match item {
        None => Chunk::Nullable(NullableWrapper::empty(capacity)),
        Some(item) => item.new_chunk(capacity),
    }
}

/// Append a null as the next slot of `chunk`, wrapping it as nullable on first need.
pub(crate) fn add_null(chunk: &mut Chunk, capacity: usize) {
    if !matches!(chunk, Chunk::Nullable(_)) {
        tracing::debug!(
            kind = chunk.kind_name(),
            len = chunk.len(),
            "wrapping chunk as nullable"
        );
        chunk.replace_with(|old| Chunk::Nullable(NullableWrapper::wrap(old, capacity)));
    }
    if let Chunk::Nullable(w) = chunk {
        w.push_null();
    }
}

/// Append a non-null value as the next slot of `chunk`.
///
/// Compatible chunks are promoted and filled. A nullable wrapper forwards into its content and
/// stays the outermost layer: an incompatible value unionizes the content, never the wrapper,
/// so union variants are never nullable. Anything else becomes (or already is) a union and the value goes to the first accepting
/// variant, which is created when none exists.
pub(crate) fn add(
    chunk: &mut Chunk,
    item: &Incoming<'_>,
    limits: Limits,
    depth: usize,
) -> Result<(), BuildError> {
    if item.is_mine(chunk) {
        item.promote(chunk);
        return item.fill(chunk, limits, depth);
    }

    if let Chunk::Nullable(w) = chunk {
        let content = w.content_or_insert_with(|| item.new_chunk(limits.chunk_size));
        add(content, item, limits, depth)?;
        w.push_present();
        return Ok(());
    }

    if !matches!(chunk, Chunk::Union(_)) {
        tracing::debug!(
            kind = chunk.kind_name(),
            len = chunk.len(),
            "converting chunk to union"
        );
        chunk.replace_with(|old| Chunk::Union(UnionBuilder::wrap(old, limits.chunk_size)));
    }
    let Chunk::Union(u) = chunk else {
        unreachable!("chunk was converted to a union above");
    };
    let tag = match u.find_variant(|c| item.is_mine(c)) {
        Some(tag) => tag,
        None => u.push_variant(item.new_chunk(limits.chunk_size)),
    };
    let variant = u.variant_mut(tag);
    item.promote(variant);
    item.fill(variant, limits, depth)?;
    u.push_slot(tag);
    Ok(())
}
