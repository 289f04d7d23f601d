//! Byte-string leaf: spans into one append-only character buffer.

use crate::{CharType, IndexType, value::Value};

/// Variable-length byte strings addressed by `(start, stop)` spans.
///
/// Elements are not stored individually; [`ByteStringLeaf::get`] slices the shared buffer on
/// access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteStringLeaf {
    starts: Vec<IndexType>,
    stops: Vec<IndexType>,
    content: Vec<CharType>,
}

impl ByteStringLeaf {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            starts: Vec::with_capacity(capacity),
            stops: Vec::with_capacity(capacity),
            content: Vec::new(),
        }
    }

    /// Number of byte strings written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// Whether no byte strings have been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Start offset of each element in [`Self::content`].
    #[must_use]
    pub fn starts(&self) -> &[IndexType] {
        &self.starts
    }

    /// Stop offset (exclusive) of each element in [`Self::content`].
    #[must_use]
    pub fn stops(&self) -> &[IndexType] {
        &self.stops
    }

    /// The shared character buffer.
    #[must_use]
    pub fn content(&self) -> &[CharType] {
        &self.content
    }

    /// Materialize element `i`.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&[u8]> {
        let start = usize::try_from(*self.starts.get(i)?).ok()?;
        let stop = usize::try_from(*self.stops.get(i)?).ok()?;
        self.content.get(start..stop)
    }

    /// Iterate over materialized elements.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    pub(crate) fn value(&self, i: usize) -> Option<Value> {
        self.get(i).map(|b| Value::Bytes(b.to_vec()))
    }

    pub(crate) fn push(&mut self, bytes: &[u8]) {
        let start = self.content.len() as IndexType;
        self.content.extend_from_slice(bytes);
        self.starts.push(start);
        self.stops.push(self.content.len() as IndexType);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_are_contiguous() {
        let mut leaf = ByteStringLeaf::new(3);
        leaf.push(b"ab");
        leaf.push(b"");
        leaf.push(b"xyz");
        assert_eq!(leaf.starts(), &[0, 2, 2]);
        assert_eq!(leaf.stops(), &[2, 2, 5]);
        assert_eq!(leaf.content(), b"abxyz");
        let items: Vec<&[u8]> = leaf.iter().collect();
        assert_eq!(items, vec![&b"ab"[..], &b""[..], &b"xyz"[..]]);
        assert_eq!(leaf.get(3), None);
    }
}
