//! Optional-value data structures.
//!
//! This module provides the optional container and its companion type:
//!
//! - [`Maybe`]: A value that is either present (`Some`) or absent
//!   (`Nothing`)
//! - [`OperatingContext`]: The deferred branch produced by
//!   [`Maybe::on_some_do`]
//!
//! Construction goes through three functions with different tolerance for
//! absence: [`nothing`] for a deliberately absent value, [`some`] for a
//! value that must be present, and [`maybe`] for a value that may be
//! either.
//!
//! # Examples
//!
//! ```rust
//! use maybars::data::{maybe, some, Maybe};
//!
//! let length = some(Some("testData")).map(|text| Some(text.len()));
//! assert_eq!(length, Maybe::Some(8));
//!
//! let absent = maybe(None::<&str>).map(|text| Some(text.len()));
//! assert_eq!(absent, Maybe::Nothing);
//! ```

mod context;
mod maybe;

pub use context::OperatingContext;
pub use maybe::{maybe, nothing, some, Maybe};
