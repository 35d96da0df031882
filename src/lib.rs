//! # maybars
//!
//! A functional optional-value container for Rust, with total/fallible
//! callable families and failure-normalizing adapters.
//!
//! ## Overview
//!
//! This library provides a small set of composable building blocks for
//! programming with possibly-absent values:
//!
//! - **Maybe**: a two-variant optional-value container (`Some`/`Nothing`)
//!   whose operations never observe an absent payload
//! - **Callable Families**: five total/fallible trait pairs (transform,
//!   producer, consumer, predicate, action) describing the closures the
//!   container composes over
//! - **Conversions**: adapters that turn a fallible callable (one returning
//!   `Result`) into a total one, re-raising any failure as a uniform
//!   [`ExecutingError`](error::ExecutingError) panic that preserves the
//!   original failure as its cause
//! - **Guards**: eager presence checks that unwrap an `Option` or panic with
//!   an [`EvaluatingError`](error::EvaluatingError)
//!
//! ## Feature Flags
//!
//! - `function`: callable families, conversions, and guards
//! - `data`: the `Maybe` container and its operating context
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use maybars::data::{Maybe, some};
//!
//! let container = some(Some("testData"));
//! let length = container.map(|value| Some(value.len()));
//! assert_eq!(length, Maybe::Some(8));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits, and functions.
///
/// # Usage
///
/// ```rust
/// use maybars::prelude::*;
/// ```
pub mod prelude {

    pub use crate::error::*;

    #[cfg(feature = "function")]
    pub use crate::function::*;

    #[cfg(feature = "data")]
    pub use crate::data::*;
}

pub mod error;

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "data")]
pub mod data;
