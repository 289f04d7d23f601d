//! Incremental builder and the one-shot `from_iter` entry point.

use crate::{
    BuildError,
    options::BuildOptions,
    sequence::{Limits, PartitionedSequence},
    value::Value,
};

/// Builds a [`PartitionedSequence`] one value at a time, inferring structure as it goes.
pub struct SequenceBuilder {
    limits: Limits,
    sequence: PartitionedSequence,
    poisoned: bool,
}

impl SequenceBuilder {
    /// Create a builder. Fails before consuming anything if `options` are unsupported.
    ///
    /// # Errors
    /// Returns `UnsupportedFeature` for reference sharing and `InvalidOptions` for a zero
    /// chunk size.
    pub fn new(options: BuildOptions) -> Result<Self, BuildError> {
        options.validate()?;
        Ok(Self {
            limits: Limits {
                chunk_size: options.chunk_size,
                max_depth: options.max_depth,
            },
            sequence: PartitionedSequence::new(),
            poisoned: false,
        })
    }

    /// Append one value.
    ///
    /// A failed append leaves the builder poisoned: every later call returns
    /// [`BuildError::Poisoned`].
    ///
    /// # Errors
    /// Returns `UnsupportedValueKind` for values the builder cannot represent (at any depth),
    /// and `ResourceExhausted` when nesting exceeds the configured limit.
    pub fn append(&mut self, value: &Value) -> Result<(), BuildError> {
        if self.poisoned {
            return Err(BuildError::Poisoned);
        }
        tracing::trace!(kind = value.type_name(), at = self.sequence.len(), "append");
        self.sequence
            .append(value, self.limits, 0)
            .inspect_err(|_| self.poisoned = true)
    }

    /// Append every value from `values`, stopping at the first error.
    ///
    /// # Errors
    /// Same as [`Self::append`].
    pub fn extend<I>(&mut self, values: I) -> Result<(), BuildError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        for v in values {
            self.append(&v.into())?;
        }
        Ok(())
    }

    /// Number of values appended so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Whether nothing has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Finish and hand out the built sequence.
    ///
    /// # Errors
    /// Returns `Poisoned` if any append failed.
    pub fn finish(self) -> Result<PartitionedSequence, BuildError> {
        if self.poisoned {
            return Err(BuildError::Poisoned);
        }
        tracing::debug!(
            len = self.sequence.len(),
            chunks = self.sequence.chunks().len(),
            "finished sequence"
        );
        Ok(self.sequence)
    }
}

/// Build a [`PartitionedSequence`] from `values` in one pass.
///
/// # Errors
/// Fails without returning a partial result on the first unsupported value, when nesting
/// exceeds `options.max_depth`, or immediately if `options` request an unsupported feature.
pub fn from_iter<I>(values: I, options: BuildOptions) -> Result<PartitionedSequence, BuildError>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let mut builder = SequenceBuilder::new(options)?;
    builder.extend(values)?;
    builder.finish()
}
