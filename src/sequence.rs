//! Partitioned sequence: ordered chunks plus the global offset at each boundary.

use crate::{IndexType, append, chunk::Chunk, value::Value};

/// Limits threaded through the recursive append.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Limits {
    pub(crate) chunk_size: usize,
    pub(crate) max_depth: Option<usize>,
}

/// One logical column of unbounded length, stored as independently typed chunks.
///
/// `offsets` has one more entry than `chunks`; `offsets[i + 1] - offsets[i]` is the length of
/// `chunks[i]`. Every chunk but the last is full.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionedSequence {
    offsets: Vec<IndexType>,
    chunks: Vec<Chunk>,
}

impl Default for PartitionedSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl PartitionedSequence {
    /// An empty sequence with no chunks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            offsets: vec![0],
            chunks: Vec::new(),
        }
    }

    /// Chunk boundary offsets, starting at 0.
    #[must_use]
    pub fn offsets(&self) -> &[IndexType] {
        &self.offsets
    }

    /// Chunks in order.
    #[must_use]
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Total logical length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.last().copied().unwrap_or(0) as usize
    }

    /// Whether nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the value at global position `i`.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<Value> {
        let at = i as IndexType;
        let chunk = self.offsets.partition_point(|&o| o <= at).checked_sub(1)?;
        let local = usize::try_from(at - self.offsets[chunk]).ok()?;
        self.chunks.get(chunk)?.get(local)
    }

    /// Iterate over every value in order.
    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        self.chunks
            .iter()
            .flat_map(|c| (0..c.len()).filter_map(move |i| c.get(i)))
    }

    /// Append one value, opening a new chunk when the last one is full.
    pub(crate) fn append(
        &mut self,
        value: &Value,
        limits: Limits,
        depth: usize,
    ) -> Result<(), crate::BuildError> {
        let incoming = append::Incoming::classify(value)?;
        let needs_chunk = self
            .chunks
            .last()
            .is_none_or(|c| c.is_full(limits.chunk_size));
        if needs_chunk {
            let chunk = append::new_chunk(incoming.as_ref(), limits.chunk_size);
            tracing::debug!(
                chunk = self.chunks.len(),
                depth,
                kind = chunk.kind_name(),
                "opening chunk"
            );
            self.chunks.push(chunk);
            let last = self.offsets.last().copied().unwrap_or(0);
            self.offsets.push(last);
        }
        let Some(chunk) = self.chunks.last_mut() else {
            unreachable!("a chunk was opened above");
        };
        match incoming {
            None => append::add_null(chunk, limits.chunk_size),
            Some(item) => append::add(chunk, &item, limits, depth)?,
        }
        if let Some(last) = self.offsets.last_mut() {
            *last += 1;
        }
        Ok(())
    }
}
