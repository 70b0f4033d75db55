//! Declarative pipeline configuration
//!
//! A pipeline can be described as data and constructed from it. The only
//! exchange format is JSON; the document is held in memory, never persisted.

use serde::{Deserialize, Serialize};
use seqform_core::{Halve, SequenceOp, Square};

use crate::error::PipelineError;
use crate::wrap::Chain;

/// Pipeline described as an ordered list of built-in stage names
///
/// # Example
///
/// ```rust
/// use seqform_pipeline::PipelineConfig;
///
/// let config = PipelineConfig::from_json(r#"{"stages": ["square", "halve"]}"#).unwrap();
/// let chain = config.build().unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Stage names, applied left to right
    pub stages: Vec<String>,
}

impl PipelineConfig {
    /// Config describing the default square-then-halve pipeline
    #[must_use]
    pub fn default_pipeline() -> Self {
        Self {
            stages: vec!["square".to_string(), "halve".to_string()],
        }
    }

    /// Parse from a JSON document
    ///
    /// # Errors
    /// Returns [`PipelineError::InvalidConfig`] if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to a JSON document
    ///
    /// # Errors
    /// Returns [`PipelineError::InvalidConfig`] if serialization fails.
    pub fn to_json(&self) -> Result<String, PipelineError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Resolve stage names and build the composed operation
    ///
    /// # Errors
    /// Returns [`PipelineError::UnknownOperation`] naming the first
    /// unrecognized stage.
    pub fn build(&self) -> Result<Chain, PipelineError> {
        let mut chain = Chain::new();
        for stage in &self.stages {
            chain.push(resolve_stage(stage)?);
        }
        tracing::debug!("built pipeline chain with {} stages", chain.len());
        Ok(chain)
    }
}

/// Resolve a built-in stage name
fn resolve_stage(name: &str) -> Result<Box<dyn SequenceOp>, PipelineError> {
    match name {
        "square" => Ok(Box::new(Square)),
        "halve" => Ok(Box::new(Halve)),
        _ => Err(PipelineError::unknown(name)),
    }
}
