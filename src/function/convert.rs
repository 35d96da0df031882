//! Conversions from fallible callables to total ones.
//!
//! Each conversion guards its argument for presence, then wraps it so that
//! a declared failure is re-raised as an [`ExecutingError`] carrying the
//! original failure as its cause. The result is a member of the total
//! family with the same shape, usable anywhere a total callable is
//! expected:
//!
//! ```rust
//! use maybars::function::transform;
//!
//! let mut parse = transform(Some(|text: &str| text.parse::<u32>()));
//! assert_eq!(parse("8"), 8);
//! ```

use crate::error::{BoxError, ExecutingError};
use crate::function::family::{
    Action, Consumer, Predicate, Producer, Transform, TryAction, TryConsumer, TryPredicate,
    TryProducer, TryTransform,
};
use crate::function::guard::{
    require_action, require_consumer, require_predicate, require_producer, require_transform,
};
use std::panic::panic_any;

/// Converts a fallible transform into a total one.
///
/// # Panics
///
/// Panics with an [`EvaluatingError`](crate::error::EvaluatingError)
/// payload when `fallible` is [`None`]. The returned transform panics with
/// an [`ExecutingError`] payload, preserving the original failure as its
/// cause, whenever `fallible` fails.
///
/// # Examples
///
/// ```rust
/// use maybars::function::transform;
///
/// let mut parse = transform(Some(|text: &str| text.parse::<u32>()));
/// assert_eq!(parse("42"), 42);
/// ```
#[must_use]
pub fn transform<In, Out, E, F>(fallible: Option<F>) -> impl Transform<In, Out>
where
    F: TryTransform<In, Out, E>,
    E: Into<BoxError>,
{
    let mut fallible = require_transform(fallible);
    move |input: In| match fallible(input) {
        Ok(output) => output,
        Err(error) => panic_any(ExecutingError::new(error)),
    }
}

/// Converts a fallible producer into a total one.
///
/// # Panics
///
/// Panics with an [`EvaluatingError`](crate::error::EvaluatingError)
/// payload when `fallible` is [`None`]. The returned producer panics with
/// an [`ExecutingError`] payload whenever `fallible` fails.
#[must_use]
pub fn producer<Out, E, F>(fallible: Option<F>) -> impl Producer<Out>
where
    F: TryProducer<Out, E>,
    E: Into<BoxError>,
{
    let mut fallible = require_producer(fallible);
    move || match fallible() {
        Ok(output) => output,
        Err(error) => panic_any(ExecutingError::new(error)),
    }
}

/// Converts a fallible consumer into a total one.
///
/// # Panics
///
/// Panics with an [`EvaluatingError`](crate::error::EvaluatingError)
/// payload when `fallible` is [`None`]. The returned consumer panics with
/// an [`ExecutingError`] payload whenever `fallible` fails.
#[must_use]
pub fn consumer<In, E, F>(fallible: Option<F>) -> impl Consumer<In>
where
    F: TryConsumer<In, E>,
    E: Into<BoxError>,
{
    let mut fallible = require_consumer(fallible);
    move |input: In| {
        if let Err(error) = fallible(input) {
            panic_any(ExecutingError::new(error));
        }
    }
}

/// Converts a fallible predicate into a total one.
///
/// # Panics
///
/// Panics with an [`EvaluatingError`](crate::error::EvaluatingError)
/// payload when `fallible` is [`None`]. The returned predicate panics with
/// an [`ExecutingError`] payload whenever `fallible` fails before reaching
/// a verdict.
///
/// # Examples
///
/// ```rust
/// use maybars::function::predicate;
///
/// let mut even = predicate(Some(|text: &str| {
///     text.parse::<u32>().map(|value| value % 2 == 0)
/// }));
/// assert!(even("42"));
/// assert!(!even("41"));
/// ```
#[must_use]
pub fn predicate<Sbj, E, F>(fallible: Option<F>) -> impl Predicate<Sbj>
where
    F: TryPredicate<Sbj, E>,
    E: Into<BoxError>,
{
    let mut fallible = require_predicate(fallible);
    move |subject: Sbj| match fallible(subject) {
        Ok(verdict) => verdict,
        Err(error) => panic_any(ExecutingError::new(error)),
    }
}

/// Converts a fallible action into a total one.
///
/// # Panics
///
/// Panics with an [`EvaluatingError`](crate::error::EvaluatingError)
/// payload when `fallible` is [`None`]. The returned action panics with an
/// [`ExecutingError`] payload whenever `fallible` fails.
#[must_use]
pub fn action<E, F>(fallible: Option<F>) -> impl Action
where
    F: TryAction<E>,
    E: Into<BoxError>,
{
    let mut fallible = require_action(fallible);
    move || {
        if let Err(error) = fallible() {
            panic_any(ExecutingError::new(error));
        }
    }
}
