//! Collected call arguments for sequence operations
//!
//! A pipeline invocation collects a variadic argument list where each
//! argument is either a bare number or a group of numbers. Flattening is one
//! level deep over the collected arguments: a [`Arg::Group`] holds plain
//! numbers, so deeper nesting cannot be expressed.

use serde::{Deserialize, Serialize};

/// Single argument in a collected invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Arg {
    /// A bare number
    Scalar(f64),

    /// A group of numbers passed as one argument
    Group(Vec<f64>),
}

impl Arg {
    /// Number of values this argument contributes after flattening
    #[inline]
    #[must_use]
    pub fn value_count(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Group(values) => values.len(),
        }
    }
}

impl From<f64> for Arg {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<f64>> for Arg {
    #[inline]
    fn from(values: Vec<f64>) -> Self {
        Self::Group(values)
    }
}

impl From<&[f64]> for Arg {
    #[inline]
    fn from(values: &[f64]) -> Self {
        Self::Group(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Arg {
    #[inline]
    fn from(values: [f64; N]) -> Self {
        Self::Group(values.to_vec())
    }
}

/// Collected argument list for a pipeline invocation
///
/// # Invariants
/// - Argument order is preserved; flattening concatenates in call order
/// - Flattening is exactly one level deep (enforced by [`Arg`]'s shape)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallArgs {
    args: Vec<Arg>,
}

impl CallArgs {
    /// Create empty argument list
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { args: Vec::new() }
    }

    /// Append an argument
    #[inline]
    pub fn push(&mut self, arg: impl Into<Arg>) {
        self.args.push(arg.into());
    }

    /// Number of collected arguments (not flattened values)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Check if no arguments were collected
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Collected arguments
    #[inline]
    #[must_use]
    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// Flatten the collected arguments into a single flat sequence
    ///
    /// Scalars contribute themselves, groups contribute their members in
    /// order. The result length is the sum of all argument value counts.
    #[must_use]
    pub fn flatten(&self) -> Vec<f64> {
        let capacity = self.args.iter().map(Arg::value_count).sum();
        let mut flat = Vec::with_capacity(capacity);
        for arg in &self.args {
            match arg {
                Arg::Scalar(value) => flat.push(*value),
                Arg::Group(values) => flat.extend_from_slice(values),
            }
        }
        flat
    }
}

impl From<Vec<f64>> for CallArgs {
    fn from(values: Vec<f64>) -> Self {
        Self {
            args: values.into_iter().map(Arg::Scalar).collect(),
        }
    }
}

impl From<&[f64]> for CallArgs {
    fn from(values: &[f64]) -> Self {
        Self {
            args: values.iter().copied().map(Arg::Scalar).collect(),
        }
    }
}

impl<const N: usize> From<[f64; N]> for CallArgs {
    fn from(values: [f64; N]) -> Self {
        Self {
            args: values.iter().copied().map(Arg::Scalar).collect(),
        }
    }
}

impl From<Vec<Vec<f64>>> for CallArgs {
    fn from(groups: Vec<Vec<f64>>) -> Self {
        Self {
            args: groups.into_iter().map(Arg::Group).collect(),
        }
    }
}

impl FromIterator<f64> for CallArgs {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            args: iter.into_iter().map(Arg::Scalar).collect(),
        }
    }
}

impl FromIterator<Arg> for CallArgs {
    fn from_iter<I: IntoIterator<Item = Arg>>(iter: I) -> Self {
        Self {
            args: iter.into_iter().collect(),
        }
    }
}
