//! Configuration error taxonomy
//!
//! Every failure in this crate is a configuration error: fail-fast,
//! non-retryable, surfaced synchronously at the call site. The transform
//! operations themselves are total and declare no error paths.

/// Configuration error for pipeline containers and descriptors
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Structural mutation attempted on a sealed container
    #[error("container is sealed: cannot modify member `{name}`")]
    Sealed {
        /// Operation name the mutation targeted
        name: String,
    },

    /// Builder-time name collision
    #[error("operation `{name}` is already registered")]
    DuplicateOperation {
        /// Conflicting operation name
        name: String,
    },

    /// Name is neither a container member nor a built-in stage
    #[error("unknown operation `{name}`")]
    UnknownOperation {
        /// The unresolved name
        name: String,
    },

    /// Malformed configuration document
    #[error("invalid pipeline config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

impl PipelineError {
    /// Create sealed-container error
    #[inline]
    #[must_use]
    pub fn sealed(name: impl Into<String>) -> Self {
        Self::Sealed { name: name.into() }
    }

    /// Create duplicate-operation error
    #[inline]
    #[must_use]
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateOperation { name: name.into() }
    }

    /// Create unknown-operation error
    #[inline]
    #[must_use]
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownOperation { name: name.into() }
    }
}
