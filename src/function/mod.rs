//! Callable families, presence guards, and failure-normalizing
//! conversions.
//!
//! This module groups callables into five families, each with a total and
//! a fallible variant:
//!
//! - [`Transform`] / [`TryTransform`]: one input, one output
//! - [`Producer`] / [`TryProducer`]: no input, one output
//! - [`Consumer`] / [`TryConsumer`]: one input, no output
//! - [`Predicate`] / [`TryPredicate`]: one input, boolean verdict
//! - [`Action`] / [`TryAction`]: no input, no output
//!
//! The `require_*` guards unwrap an [`Option`] of a value or callable,
//! raising an [`EvaluatingError`](crate::error::EvaluatingError) payload
//! when it is absent. The conversions ([`transform`], [`producer`],
//! [`consumer`], [`predicate`], [`action`]) turn a fallible callable into
//! its total counterpart: any failure the original declares is re-raised
//! as an [`ExecutingError`](crate::error::ExecutingError) payload that
//! keeps the original failure as its cause.
//!
//! # Examples
//!
//! ## Normalizing a fallible transform
//!
//! ```rust
//! use maybars::function::transform;
//!
//! let mut parse = transform(Some(|text: &str| text.parse::<u32>()));
//! assert_eq!(parse("8"), 8);
//! ```
//!
//! ## Guarding a callable for presence
//!
//! ```rust
//! use maybars::function::require_transform;
//!
//! let mut last_five = require_transform(Some(|text: &str| {
//!     text[text.len() - 5..].to_string()
//! }));
//! assert_eq!(last_five("testData"), "tData");
//! ```

mod convert;
mod family;
mod guard;

pub use convert::{action, consumer, predicate, producer, transform};
pub use family::{
    Action, Consumer, Predicate, Producer, Transform, TryAction, TryConsumer, TryPredicate,
    TryProducer, TryTransform,
};
pub use guard::{
    require_action, require_consumer, require_predicate, require_producer, require_transform,
    require_value,
};
