//! Jagged list construction over a nested partitioned sequence.

use crate::{IndexType, sequence::PartitionedSequence, value::Value};

/// Variable-length list rows addressing a shared inner sequence by `(start, stop)` spans.
///
/// Rows are packed: `starts[i + 1] == stops[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ListBuilder {
    starts: Vec<IndexType>,
    stops: Vec<IndexType>,
    content: PartitionedSequence,
}

impl ListBuilder {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            starts: Vec::with_capacity(capacity),
            stops: Vec::with_capacity(capacity),
            content: PartitionedSequence::new(),
        }
    }

    /// Number of rows written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// Whether no rows have been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Start of each row in [`Self::content`].
    #[must_use]
    pub fn starts(&self) -> &[IndexType] {
        &self.starts
    }

    /// Stop (exclusive) of each row in [`Self::content`].
    #[must_use]
    pub fn stops(&self) -> &[IndexType] {
        &self.stops
    }

    /// The inner sequence holding every row's elements back to back.
    #[must_use]
    pub fn content(&self) -> &PartitionedSequence {
        &self.content
    }

    /// Read row `i` back as a `Value::List`.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<Value> {
        let start = usize::try_from(*self.starts.get(i)?).ok()?;
        let stop = usize::try_from(*self.stops.get(i)?).ok()?;
        (start..stop)
            .map(|j| self.content.get(j))
            .collect::<Option<Vec<_>>>()
            .map(Value::List)
    }

    /// Open an empty row right after the previous one.
    pub(crate) fn open_row(&mut self) {
        let start = self.stops.last().copied().unwrap_or(0);
        self.starts.push(start);
        self.stops.push(start);
    }

    /// Grow the open row by one element already appended to the content.
    pub(crate) fn extend_row(&mut self) {
        if let Some(stop) = self.stops.last_mut() {
            *stop += 1;
        }
    }

    pub(crate) fn content_mut(&mut self) -> &mut PartitionedSequence {
        &mut self.content
    }
}
