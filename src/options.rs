//! Build configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::BuildError;

/// Default per-chunk capacity.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// Options controlling a build.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildOptions {
    /// Capacity of every chunk, at every nesting level.
    pub chunk_size: usize,
    /// Deduplicate repeated object identities. Not supported; requesting it fails the build.
    pub reference_sharing: bool,
    /// Maximum list nesting depth; `None` leaves the call stack as the only bound.
    pub max_depth: Option<usize>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            reference_sharing: false,
            max_depth: None,
        }
    }
}

impl BuildOptions {
    /// Set the per-chunk capacity.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Request (or not) reference-sharing mode.
    #[must_use]
    pub fn with_reference_sharing(mut self, enabled: bool) -> Self {
        self.reference_sharing = enabled;
        self
    }

    /// Bound the nesting depth accepted by the builder.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Check that these options describe a build this crate can perform.
    ///
    /// # Errors
    /// `UnsupportedFeature` when reference sharing is requested, `InvalidOptions` for a zero
    /// chunk size.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.reference_sharing {
            return Err(BuildError::UnsupportedFeature {
                feature: "reference sharing",
            });
        }
        if self.chunk_size == 0 {
            return Err(BuildError::InvalidOptions {
                message: "chunk_size must be positive".into(),
            });
        }
        Ok(())
    }
}
