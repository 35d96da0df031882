//! The five callable families, each as a total/fallible trait pair.
//!
//! A *total* callable declares no failure channel in its signature: invoking
//! it yields its output directly. A *fallible* callable returns a
//! [`Result`], and its `Err` arm is the declarable failure the conversions
//! such as [`crate::function::transform`] normalize away.
//!
//! Every trait here is blanket-implemented for the matching [`FnMut`] shape,
//! so ordinary closures and fn items are family members without any
//! ceremony:
//!
//! ```rust
//! use maybars::function::Predicate;
//!
//! fn longer_than<P>(mut predicate: P) -> bool
//! where
//!     P: Predicate<usize>,
//! {
//!     predicate(3)
//! }
//!
//! assert!(longer_than(|length| length > 2));
//! ```

/// A total value transform: maps an `In` to an `Out`.
///
/// The container operations accept any callable of this shape; the
/// conversion [`crate::function::transform`] produces one from a
/// [`TryTransform`].
pub trait Transform<In, Out>: FnMut(In) -> Out {}

impl<In, Out, F> Transform<In, Out> for F where F: FnMut(In) -> Out {}

/// A fallible value transform: maps an `In` to an `Out` or fails with `E`.
pub trait TryTransform<In, Out, E>: FnMut(In) -> Result<Out, E> {}

impl<In, Out, E, F> TryTransform<In, Out, E> for F where F: FnMut(In) -> Result<Out, E> {}

/// A total producer: yields an `Out` from no input.
pub trait Producer<Out>: FnMut() -> Out {}

impl<Out, F> Producer<Out> for F where F: FnMut() -> Out {}

/// A fallible producer: yields an `Out` or fails with `E`.
pub trait TryProducer<Out, E>: FnMut() -> Result<Out, E> {}

impl<Out, E, F> TryProducer<Out, E> for F where F: FnMut() -> Result<Out, E> {}

/// A total consumer: receives an `In` for its side effect and yields
/// nothing.
pub trait Consumer<In>: FnMut(In) {}

impl<In, F> Consumer<In> for F where F: FnMut(In) {}

/// A fallible consumer: receives an `In` for its side effect, and may fail
/// with `E` instead of completing.
pub trait TryConsumer<In, E>: FnMut(In) -> Result<(), E> {}

impl<In, E, F> TryConsumer<In, E> for F where F: FnMut(In) -> Result<(), E> {}

/// A total predicate: tests a subject of type `Sbj`.
///
/// # Examples
///
/// ```rust
/// use maybars::function::Predicate;
///
/// fn holds_for_hello<P>(mut predicate: P) -> bool
/// where
///     P: for<'a> Predicate<&'a str>,
/// {
///     predicate("hello")
/// }
///
/// assert!(holds_for_hello(|text: &str| text.len() == 5));
/// ```
pub trait Predicate<Sbj>: FnMut(Sbj) -> bool {}

impl<Sbj, F> Predicate<Sbj> for F where F: FnMut(Sbj) -> bool {}

/// A fallible predicate: tests a subject of type `Sbj`, or fails with `E`
/// before reaching a verdict.
pub trait TryPredicate<Sbj, E>: FnMut(Sbj) -> Result<bool, E> {}

impl<Sbj, E, F> TryPredicate<Sbj, E> for F where F: FnMut(Sbj) -> Result<bool, E> {}

/// A total action: runs for its side effect alone.
pub trait Action: FnMut() {}

impl<F> Action for F where F: FnMut() {}

/// A fallible action: runs for its side effect, and may fail with `E`
/// instead of completing.
pub trait TryAction<E>: FnMut() -> Result<(), E> {}

impl<E, F> TryAction<E> for F where F: FnMut() -> Result<(), E> {}
