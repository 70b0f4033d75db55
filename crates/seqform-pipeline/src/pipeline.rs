//! The square-then-halve transform pipeline

use once_cell::sync::Lazy;
use seqform_core::{CallArgs, Halve, SequenceOp, Square};

use crate::wrap::Wrapped;

/// The decorated transform: squares the collected arguments, then hands the
/// squared values to the halving operation
///
/// Pure and synchronous; each invocation reads only its own arguments and
/// returns a freshly computed sequence, so independent call sites need no
/// coordination.
///
/// # Example
///
/// ```rust
/// use seqform_pipeline::TransformPipeline;
///
/// let pipeline = TransformPipeline::new();
/// assert_eq!(pipeline.modify_numbers([2.0, 3.0, 4.0]), vec![2.0, 4.5, 8.0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformPipeline {
    op: Wrapped<Square, Halve>,
}

impl TransformPipeline {
    /// Create the pipeline with the squaring decorator installed in front of
    /// the halving operation
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            op: Wrapped::new(Square, Halve),
        }
    }

    /// Flatten, square, then halve the collected arguments
    ///
    /// The output has the same length as the flattened input, with
    /// `output[i] = (input[i]^2) / 2`. Total over `f64`; non-finite values
    /// propagate per IEEE 754.
    #[must_use]
    pub fn modify_numbers(&self, args: impl Into<CallArgs>) -> Vec<f64> {
        let flat = args.into().flatten();
        tracing::trace!("invoking `{}` on {} values", self.name(), flat.len());
        self.op.apply(&flat)
    }
}

impl SequenceOp for TransformPipeline {
    #[inline]
    fn name(&self) -> &'static str {
        "modify_numbers"
    }

    fn apply(&self, input: &[f64]) -> Vec<f64> {
        self.op.apply(input)
    }

    #[inline]
    fn elementwise(&self) -> bool {
        self.op.elementwise()
    }
}

/// Process-wide default pipeline, defined once at startup
static DEFAULT_PIPELINE: Lazy<TransformPipeline> = Lazy::new(TransformPipeline::new);

/// Flatten, square, then halve `args` using the process-wide default pipeline
///
/// Convenience form of [`TransformPipeline::modify_numbers`].
#[must_use]
pub fn modify_numbers(args: impl Into<CallArgs>) -> Vec<f64> {
    DEFAULT_PIPELINE.modify_numbers(args)
}
