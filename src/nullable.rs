//! Nullable wrapper: index indirection over a content chunk.

use crate::{IndexType, MASKED, chunk::Chunk, value::Value};

/// Maps each logical slot to [`MASKED`] or to a position in the wrapped content.
///
/// Every non-masked index is unique and below [`NullableWrapper::next_index`].
#[derive(Debug, Clone, PartialEq)]
pub struct NullableWrapper {
    index: Vec<IndexType>,
    content: Option<Box<Chunk>>,
    next_index: IndexType,
}

impl NullableWrapper {
    /// A wrapper with no content yet, used when a chunk opens on a null.
    pub(crate) fn empty(capacity: usize) -> Self {
        Self {
            index: Vec::with_capacity(capacity),
            content: None,
            next_index: 0,
        }
    }

    /// Wrap `content`, mapping every slot already written onto itself.
    pub(crate) fn wrap(content: Chunk, capacity: usize) -> Self {
        let prior = content.len() as IndexType;
        let mut index = Vec::with_capacity(capacity.max(content.len()));
        index.extend(0..prior);
        Self {
            index,
            content: Some(Box::new(content)),
            next_index: prior,
        }
    }

    /// Number of logical slots written, nulls included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether no slots have been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Slot → content position, or [`MASKED`].
    #[must_use]
    pub fn index(&self) -> &[IndexType] {
        &self.index
    }

    /// The wrapped content; `None` while only nulls have been written.
    #[must_use]
    pub fn content(&self) -> Option<&Chunk> {
        self.content.as_deref()
    }

    /// Next free content position.
    #[must_use]
    pub fn next_index(&self) -> IndexType {
        self.next_index
    }

    /// Number of null slots.
    #[must_use]
    pub fn null_count(&self) -> usize {
        self.index.iter().filter(|&&i| i == MASKED).count()
    }

    /// Read slot `i`; masked slots read as `Value::Null`.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<Value> {
        match *self.index.get(i)? {
            MASKED => Some(Value::Null),
            pos => self.content.as_deref()?.get(usize::try_from(pos).ok()?),
        }
    }

    pub(crate) fn push_null(&mut self) {
        self.index.push(MASKED);
    }

    /// Content chunk to receive the next non-null value, created by `init` on first need.
    pub(crate) fn content_or_insert_with(&mut self, init: impl FnOnce() -> Chunk) -> &mut Chunk {
        self.content.get_or_insert_with(|| Box::new(init()))
    }

    /// Record that the content received one more value.
    pub(crate) fn push_present(&mut self) {
        self.index.push(self.next_index);
        self.next_index += 1;
    }
}
