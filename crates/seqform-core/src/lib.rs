//! Seqform Core
//!
//! Data model for elementwise numeric sequence transforms.
//!
//! # Core Concepts
//!
//! - [`SequenceOp`]: Core trait for named, invokable sequence transforms
//! - [`Square`], [`Halve`]: Built-in elementwise operations
//! - [`CallArgs`]: Collected variadic arguments with one-level flattening
//!
//! # Example
//!
//! ```rust
//! use seqform_core::{CallArgs, Halve, SequenceOp, Square};
//!
//! let args = CallArgs::from(vec![2.0, 3.0, 4.0]);
//! let squared = Square.apply(&args.flatten());
//! let halved = Halve.apply(&squared);
//!
//! assert_eq!(halved, vec![2.0, 4.5, 8.0]);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod args;
mod op;
mod ops;

// Re-exports
pub use args::{Arg, CallArgs};
pub use op::SequenceOp;
pub use ops::{Halve, Square};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
