//! Dense tagged-variant builder for columns mixing incompatible kinds.

use crate::{IndexType, chunk::Chunk, value::Value};

/// Union column: each slot selects a variant by tag and a position inside it.
///
/// Variant order is creation order. A union never collapses back to a single kind.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionBuilder {
    tags: Vec<i8>,
    index: Vec<IndexType>,
    contents: Vec<Chunk>,
    next_index: Vec<IndexType>,
}

impl UnionBuilder {
    /// Convert `first` into variant 0, back-filling tags and index for its slots.
    pub(crate) fn wrap(first: Chunk, capacity: usize) -> Self {
        let prior = first.len();
        let mut tags = Vec::with_capacity(capacity.max(prior));
        tags.resize(prior, 0);
        let mut index = Vec::with_capacity(capacity.max(prior));
        index.extend(0..prior as IndexType);
        Self {
            tags,
            index,
            contents: vec![first],
            next_index: vec![prior as IndexType],
        }
    }

    /// Number of logical slots written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether no slots have been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Variant selector per slot.
    #[must_use]
    pub fn tags(&self) -> &[i8] {
        &self.tags
    }

    /// Position within the selected variant per slot.
    #[must_use]
    pub fn index(&self) -> &[IndexType] {
        &self.index
    }

    /// Variant sub-chunks in creation order.
    #[must_use]
    pub fn contents(&self) -> &[Chunk] {
        &self.contents
    }

    /// Next free position per variant.
    #[must_use]
    pub fn next_index(&self) -> &[IndexType] {
        &self.next_index
    }

    /// Read slot `i` from its variant.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<Value> {
        let tag = usize::try_from(*self.tags.get(i)?).ok()?;
        let pos = usize::try_from(*self.index.get(i)?).ok()?;
        self.contents.get(tag)?.get(pos)
    }

    /// First variant accepted by `is_mine`, in creation order.
    pub(crate) fn find_variant(&self, is_mine: impl Fn(&Chunk) -> bool) -> Option<usize> {
        self.contents.iter().position(is_mine)
    }

    /// Append an empty variant and return its tag.
    pub(crate) fn push_variant(&mut self, chunk: Chunk) -> usize {
        tracing::debug!(
            tag = self.contents.len(),
            kind = chunk.kind_name(),
            "adding union variant"
        );
        self.contents.push(chunk);
        self.next_index.push(0);
        self.contents.len() - 1
    }

    pub(crate) fn variant_mut(&mut self, tag: usize) -> &mut Chunk {
        &mut self.contents[tag]
    }

    /// Record that variant `tag` received one more value.
    pub(crate) fn push_slot(&mut self, tag: usize) {
        // At most one variant per value kind exists, far below i8::MAX.
        self.tags.push(tag as i8);
        self.index.push(self.next_index[tag]);
        self.next_index[tag] += 1;
    }
}
