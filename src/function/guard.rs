//! Presence guards for values and callables.
//!
//! Every guard takes an [`Option`] and either returns the unwrapped content
//! or raises an [`EvaluatingError`] payload naming the missing argument.
//! The callable guards are generic over the callable's output type, so a
//! single guard covers both the total and the fallible variant of its
//! family.
//!
//! ```rust
//! use maybars::function::require_producer;
//!
//! let mut ready = require_producer(Some(|| 42));
//! assert_eq!(ready(), 42);
//! ```

use crate::error::EvaluatingError;
use std::panic::panic_any;

/// Unwraps a present value, rejecting an absent one.
///
/// # Panics
///
/// Panics with an [`EvaluatingError`] payload when `value` is [`None`].
///
/// # Examples
///
/// ```rust
/// use maybars::function::require_value;
///
/// assert_eq!(require_value(Some(42)), 42);
/// ```
pub fn require_value<T>(value: Option<T>) -> T {
    match value {
        Some(value) => value,
        None => panic_any(EvaluatingError {
            message: "value must be present",
        }),
    }
}

/// Unwraps a present transform, rejecting an absent one.
///
/// The output type is left open so the same guard accepts total transforms
/// and fallible ones returning [`Result`].
///
/// # Panics
///
/// Panics with an [`EvaluatingError`] payload when `transform` is [`None`].
///
/// # Examples
///
/// ```rust
/// use maybars::function::require_transform;
///
/// let mut double = require_transform(Some(|value: i32| value * 2));
/// assert_eq!(double(21), 42);
/// ```
pub fn require_transform<In, Out, F>(transform: Option<F>) -> F
where
    F: FnMut(In) -> Out,
{
    match transform {
        Some(transform) => transform,
        None => panic_any(EvaluatingError {
            message: "transform must be present",
        }),
    }
}

/// Unwraps a present producer, rejecting an absent one.
///
/// # Panics
///
/// Panics with an [`EvaluatingError`] payload when `producer` is [`None`].
pub fn require_producer<Out, F>(producer: Option<F>) -> F
where
    F: FnMut() -> Out,
{
    match producer {
        Some(producer) => producer,
        None => panic_any(EvaluatingError {
            message: "producer must be present",
        }),
    }
}

/// Unwraps a present consumer, rejecting an absent one.
///
/// Total consumers yield `()` and fallible ones yield `Result<(), E>`, so
/// the output type is left open here as well.
///
/// # Panics
///
/// Panics with an [`EvaluatingError`] payload when `consumer` is [`None`].
pub fn require_consumer<In, Out, F>(consumer: Option<F>) -> F
where
    F: FnMut(In) -> Out,
{
    match consumer {
        Some(consumer) => consumer,
        None => panic_any(EvaluatingError {
            message: "consumer must be present",
        }),
    }
}

/// Unwraps a present predicate, rejecting an absent one.
///
/// # Panics
///
/// Panics with an [`EvaluatingError`] payload when `predicate` is [`None`].
pub fn require_predicate<Sbj, Out, F>(predicate: Option<F>) -> F
where
    F: FnMut(Sbj) -> Out,
{
    match predicate {
        Some(predicate) => predicate,
        None => panic_any(EvaluatingError {
            message: "predicate must be present",
        }),
    }
}

/// Unwraps a present action, rejecting an absent one.
///
/// # Panics
///
/// Panics with an [`EvaluatingError`] payload when `action` is [`None`].
pub fn require_action<Out, F>(action: Option<F>) -> F
where
    F: FnMut() -> Out,
{
    match action {
        Some(action) => action,
        None => panic_any(EvaluatingError {
            message: "action must be present",
        }),
    }
}
