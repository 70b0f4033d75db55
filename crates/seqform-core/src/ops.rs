//! Built-in elementwise operations

use crate::op::SequenceOp;

/// Squares every element (`x -> x * x`)
///
/// Elementwise and sign-eliminating: the output of a finite input is never
/// negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Square;

impl SequenceOp for Square {
    #[inline]
    fn name(&self) -> &'static str {
        "square"
    }

    fn apply(&self, input: &[f64]) -> Vec<f64> {
        input.iter().map(|x| x * x).collect()
    }

    #[inline]
    fn elementwise(&self) -> bool {
        true
    }
}

/// Halves every element (`x -> x / 2`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Halve;

impl SequenceOp for Halve {
    #[inline]
    fn name(&self) -> &'static str {
        "halve"
    }

    fn apply(&self, input: &[f64]) -> Vec<f64> {
        input.iter().map(|x| x / 2.0).collect()
    }

    #[inline]
    fn elementwise(&self) -> bool {
        true
    }
}
