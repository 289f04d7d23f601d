//! Error types for sequence building and Arrow export.

use thiserror::Error;

/// Errors that can occur while building a [`PartitionedSequence`](crate::PartitionedSequence).
///
/// Any error aborts the build; no partially built sequence is handed back.
#[derive(Debug, Error)]
pub enum BuildError {
    /// A value of a kind the builder cannot represent (dict, tuple, string, or opaque).
    #[error("unsupported value kind: {kind}")]
    UnsupportedValueKind {
        /// Short name of the rejected kind.
        kind: String,
    },

    /// A feature was requested that this builder does not implement.
    #[error("unsupported feature: {feature}")]
    UnsupportedFeature {
        /// Name of the requested feature.
        feature: &'static str,
    },

    /// Nesting exceeded the configured depth limit.
    #[error("nesting depth {depth} exceeds limit {limit}")]
    ResourceExhausted {
        /// Depth at which the limit was hit.
        depth: usize,
        /// Configured limit.
        limit: usize,
    },

    /// The build options are not usable.
    #[error("invalid options: {message}")]
    InvalidOptions {
        /// Human-readable reason.
        message: String,
    },

    /// The builder was used again after an append failed.
    #[error("builder is poisoned by an earlier failed append")]
    Poisoned,

    /// Arrow rejected the buffers produced for a chunk.
    #[error("arrow export error: {message}")]
    Export {
        /// Human-readable error from Arrow or from the exporter.
        message: String,
    },
}

impl BuildError {
    pub(crate) fn unsupported_kind(kind: impl Into<String>) -> Self {
        BuildError::UnsupportedValueKind { kind: kind.into() }
    }

    pub(crate) fn export(message: impl ToString) -> Self {
        BuildError::Export {
            message: message.to_string(),
        }
    }
}

impl From<arrow_schema::ArrowError> for BuildError {
    fn from(e: arrow_schema::ArrowError) -> Self {
        BuildError::export(e)
    }
}
