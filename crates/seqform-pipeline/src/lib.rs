//! Seqform Pipeline
//!
//! Decorator-style composition over numeric sequences: a halving operation
//! wrapped by a squaring pre-transform, held in a container that is sealed
//! after construction.
//!
//! # Core Concepts
//!
//! - [`TransformPipeline`]: The decorated square-then-halve transform
//! - [`Wrapped`]: Explicit composition of a pre-transform with an inner operation
//! - [`Chain`]: N-stage left-to-right composition
//! - [`OpRegistry`] / [`SealedOps`]: Sealable container of named operations
//! - [`PipelineConfig`]: Pipeline described as data
//!
//! # Example
//!
//! ```rust
//! use seqform_pipeline::{modify_numbers, OpRegistry};
//!
//! // Direct invocation
//! assert_eq!(modify_numbers([2.0, 3.0, 4.0]), vec![2.0, 4.5, 8.0]);
//!
//! // Through a sealed container
//! let ops = OpRegistry::with_defaults().seal();
//! let result = ops.invoke("modify_numbers", [2.0, 3.0, 4.0]).unwrap();
//! assert_eq!(result, vec![2.0, 4.5, 8.0]);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod config;
mod error;
mod pipeline;
mod registry;
mod wrap;

// Re-exports
pub use config::PipelineConfig;
pub use error::PipelineError;
pub use pipeline::{modify_numbers, TransformPipeline};
pub use registry::{OpRegistry, SealedOps};
pub use wrap::{Chain, Wrapped};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with transform pipelines
    pub use crate::{
        modify_numbers, OpRegistry, PipelineConfig, PipelineError, SealedOps, TransformPipeline,
    };
    pub use seqform_core::{Arg, CallArgs, Halve, SequenceOp, Square};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
