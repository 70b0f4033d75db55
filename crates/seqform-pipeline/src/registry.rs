//! Sealable registry of named operations
//!
//! Provides [`OpRegistry`] for assembling a container of named operations and
//! [`SealedOps`], the immutable handle returned by [`OpRegistry::seal`].
//!
//! Sealing is a construction-time contract: the builder is the only path that
//! adds members, and it is consumed by `seal`. The sealed handle keeps
//! `register`/`remove` methods solely to report the structural violation when
//! code attempts a mutation after seal time.

use indexmap::IndexMap;
use seqform_core::{CallArgs, Halve, SequenceOp, Square};

use crate::error::PipelineError;
use crate::pipeline::TransformPipeline;

/// Builder for a container of named operations
///
/// Members are keyed by their own [`SequenceOp::name`]. Insertion order is
/// preserved.
#[derive(Debug, Default)]
pub struct OpRegistry {
    ops: IndexMap<&'static str, Box<dyn SequenceOp>>,
}

impl OpRegistry {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            ops: IndexMap::new(),
        }
    }

    /// Registry with the built-in members: `square`, `halve`, and the
    /// decorated `modify_numbers` pipeline
    #[must_use]
    pub fn with_defaults() -> Self {
        let defaults: [Box<dyn SequenceOp>; 3] = [
            Box::new(Square),
            Box::new(Halve),
            Box::new(TransformPipeline::new()),
        ];

        let mut ops = IndexMap::new();
        for op in defaults {
            // Built-in names are distinct.
            ops.insert(op.name(), op);
        }
        Self { ops }
    }

    /// Register an operation under its own name
    ///
    /// # Errors
    /// Returns [`PipelineError::DuplicateOperation`] if a member with the
    /// same name already exists.
    pub fn register(&mut self, op: Box<dyn SequenceOp>) -> Result<(), PipelineError> {
        let name = op.name();
        if self.ops.contains_key(name) {
            return Err(PipelineError::duplicate(name));
        }
        self.ops.insert(name, op);
        Ok(())
    }

    /// Remove a member before sealing
    pub fn remove(&mut self, name: &str) -> bool {
        self.ops.shift_remove(name).is_some()
    }

    /// Check if a member exists
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.ops.contains_key(name)
    }

    /// Number of members
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Freeze the member set and return the immutable handle
    #[must_use]
    pub fn seal(self) -> SealedOps {
        tracing::debug!("sealing registry with {} operations", self.ops.len());
        SealedOps { ops: self.ops }
    }
}

/// Immutable handle over a sealed operation container
///
/// The member set is frozen at seal time: there is no working mutation API on
/// this handle, and no way to reopen it. Invoking existing members continues
/// to succeed unchanged. The seal freezes structure only; the operations
/// themselves are stateless values.
#[derive(Debug)]
pub struct SealedOps {
    ops: IndexMap<&'static str, Box<dyn SequenceOp>>,
}

impl SealedOps {
    /// Invoke a member on the collected arguments
    ///
    /// Arguments are flattened one level before the member is applied.
    ///
    /// # Errors
    /// Returns [`PipelineError::UnknownOperation`] if `name` is not a member.
    pub fn invoke(
        &self,
        name: &str,
        args: impl Into<CallArgs>,
    ) -> Result<Vec<f64>, PipelineError> {
        let op = self
            .ops
            .get(name)
            .ok_or_else(|| PipelineError::unknown(name))?;
        let flat = args.into().flatten();
        tracing::trace!("invoking `{}` on {} values", name, flat.len());
        Ok(op.apply(&flat))
    }

    /// Look up a member
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn SequenceOp> {
        self.ops.get(name).map(|op| op.as_ref())
    }

    /// Check if a member exists
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.ops.contains_key(name)
    }

    /// Member names in insertion order
    #[inline]
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.ops.keys().copied().collect()
    }

    /// Number of members
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the container is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Reject a structural addition
    ///
    /// The container is closed to member addition after sealing.
    ///
    /// # Errors
    /// Always returns [`PipelineError::Sealed`].
    pub fn register(&self, op: Box<dyn SequenceOp>) -> Result<(), PipelineError> {
        tracing::warn!("rejected registration of `{}` on sealed container", op.name());
        Err(PipelineError::sealed(op.name()))
    }

    /// Reject a structural removal
    ///
    /// # Errors
    /// Always returns [`PipelineError::Sealed`].
    pub fn remove(&self, name: &str) -> Result<(), PipelineError> {
        tracing::warn!("rejected removal of `{}` from sealed container", name);
        Err(PipelineError::sealed(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn registry_new_empty() {
        let registry = OpRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_with_defaults() {
        let registry = OpRegistry::with_defaults();
        assert_eq!(registry.len(), 3);
        assert!(registry.contains("square"));
        assert!(registry.contains("halve"));
        assert!(registry.contains("modify_numbers"));
    }

    #[test]
    fn registry_rejects_duplicate() {
        let mut registry = OpRegistry::with_defaults();
        let err = registry.register(Box::new(Halve)).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::DuplicateOperation { name } if name == "halve"
        ));
    }

    #[test]
    fn registry_remove_before_seal() {
        let mut registry = OpRegistry::with_defaults();
        assert!(registry.remove("square"));
        assert!(!registry.contains("square"));
        assert!(!registry.remove("square"));
    }

    #[test]
    fn sealed_preserves_insertion_order() {
        let sealed = OpRegistry::with_defaults().seal();
        assert_eq!(sealed.names(), vec!["square", "halve", "modify_numbers"]);
    }

    #[test]
    fn sealed_invokes_members() {
        let sealed = OpRegistry::with_defaults().seal();
        let result = sealed.invoke("modify_numbers", [2.0, 3.0, 4.0]).unwrap();
        assert_eq!(result, vec![2.0, 4.5, 8.0]);
    }

    #[test]
    fn sealed_invoke_unknown_member() {
        let sealed = OpRegistry::with_defaults().seal();
        let err = sealed.invoke("cube", [2.0]).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::UnknownOperation { name } if name == "cube"
        ));
    }

    #[test]
    fn sealed_rejects_registration() {
        let sealed = OpRegistry::with_defaults().seal();
        let err = sealed.register(Box::new(Square)).unwrap_err();
        assert!(matches!(err, PipelineError::Sealed { .. }));
    }

    #[test]
    fn sealed_rejects_removal() {
        let sealed = OpRegistry::with_defaults().seal();
        let err = sealed.remove("halve").unwrap_err();
        assert!(matches!(err, PipelineError::Sealed { .. }));
        // Rejection leaves the member intact.
        assert!(sealed.contains("halve"));
    }

    #[test]
    fn sealed_members_still_work_after_rejected_mutation() {
        let sealed = OpRegistry::with_defaults().seal();
        let _ = sealed.register(Box::new(Square));
        let result = sealed.invoke("modify_numbers", [2.0]).unwrap();
        assert_eq!(result, vec![2.0]);
    }
}
