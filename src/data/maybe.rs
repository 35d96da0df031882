//! Maybe type - an optional value with validated construction.
//!
//! This module provides the `Maybe<V>` type, which represents a value that
//! is either present (`Some(V)`) or absent (`Nothing`). Unlike a bare
//! [`Option`], construction through [`some`] insists on a present value,
//! while [`maybe`] accepts either and normalizes absence to `Nothing`.
//!
//! # Examples
//!
//! ```rust
//! use maybars::data::{maybe, nothing, some, Maybe};
//!
//! // Creating Maybe values
//! let present = some(Some("testData"));
//! let absent: Maybe<&str> = nothing();
//!
//! // Pattern matching
//! match present {
//!     Maybe::Some(text) => println!("Got: {}", text),
//!     Maybe::Nothing => println!("Nothing here"),
//! }
//!
//! // Chaining transformations
//! let length = some(Some("testData"))
//!     .map(|text| Some(text.len()))
//!     .filter(|length| *length > 5);
//! assert_eq!(length, Maybe::Some(8));
//! ```

use crate::data::context::OperatingContext;
use crate::function::{require_producer, require_value, Producer};
use std::any::Any;
use std::fmt;
use std::panic::panic_any;

/// An optional value: either a present `Some(V)` or an absent `Nothing`.
///
/// `Maybe<V>` carries the same information as [`Option<V>`] but pairs it
/// with validated construction and recovery operations that reject absent
/// arguments instead of quietly accepting them.
///
/// # Type Parameters
///
/// * `V` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use maybars::data::{some, Maybe};
///
/// let wrapped = some(Some(42));
/// assert_eq!(wrapped.map(|value| Some(value * 2)), Maybe::Some(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<V> {
    /// The absent variant, carrying no value.
    Nothing,
    /// The present variant, carrying a value.
    Some(V),
}

impl<V> Maybe<V> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Some` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::data::{nothing, some, Maybe};
    ///
    /// assert!(some(Some(42)).is_some());
    ///
    /// let absent: Maybe<i32> = nothing();
    /// assert!(!absent.is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is a `Nothing` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::data::{nothing, some, Maybe};
    ///
    /// let absent: Maybe<i32> = nothing();
    /// assert!(absent.is_nothing());
    ///
    /// assert!(!some(Some(42)).is_nothing());
    /// ```
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Transformation Operations
    // =========================================================================

    /// Maps the contained value through `transform`, consuming the maybe.
    ///
    /// The transform may refuse to produce an output by returning [`None`];
    /// a refused output collapses the result to `Nothing`. On `Nothing` the
    /// transform is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::data::{some, Maybe};
    ///
    /// let length = some(Some("testData")).map(|text| Some(text.len()));
    /// assert_eq!(length, Maybe::Some(8));
    ///
    /// let refused = some(Some("testData")).map(|_| None::<usize>);
    /// assert_eq!(refused, Maybe::Nothing);
    /// ```
    #[inline]
    pub fn map<R, F>(self, transform: F) -> Maybe<R>
    where
        F: FnOnce(V) -> Option<R>,
    {
        match self {
            Self::Some(value) => maybe(transform(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Maps the contained value through a transform that itself yields a
    /// `Maybe`, consuming the maybe.
    ///
    /// Unlike [`Maybe::map`], the transform states presence or absence
    /// directly in its return type, so no output is refused after the
    /// fact. On `Nothing` the transform is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::data::{some, Maybe};
    ///
    /// let parsed = some(Some("8")).fmap(|text| match text.parse::<u32>() {
    ///     Ok(value) => Maybe::Some(value),
    ///     Err(_) => Maybe::Nothing,
    /// });
    /// assert_eq!(parsed, Maybe::Some(8));
    /// ```
    #[inline]
    pub fn fmap<R, F>(self, transform: F) -> Maybe<R>
    where
        F: FnOnce(V) -> Maybe<R>,
    {
        match self {
            Self::Some(value) => transform(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Keeps the contained value only when `predicate` holds for it,
    /// consuming the maybe.
    ///
    /// Filtering is expressed through [`Maybe::map`]: a rejected value is
    /// mapped to a refused output. On `Nothing` the predicate is never
    /// invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::data::{some, Maybe};
    ///
    /// let kept = some(Some("testData")).filter(|text| text.len() > 5);
    /// assert_eq!(kept, Maybe::Some("testData"));
    ///
    /// let dropped = some(Some("id")).filter(|text| text.len() > 5);
    /// assert_eq!(dropped, Maybe::Nothing);
    /// ```
    #[inline]
    pub fn filter<F>(self, predicate: F) -> Self
    where
        F: FnOnce(&V) -> bool,
    {
        self.map(|value| if predicate(&value) { Some(value) } else { None })
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the contained value, consuming the maybe.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Nothing` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::data::some;
    ///
    /// assert_eq!(some(Some(42)).get(), 42);
    /// ```
    #[inline]
    pub fn get(self) -> V {
        match self {
            Self::Some(value) => value,
            Self::Nothing => panic!("called `Maybe::get()` on a `Nothing` value"),
        }
    }

    /// Returns the contained value, or the given default when this is a
    /// `Nothing`.
    ///
    /// A present value wins outright: the default is neither inspected nor
    /// validated. Only a `Nothing` insists that the default be present.
    ///
    /// # Panics
    ///
    /// Panics with an [`EvaluatingError`](crate::error::EvaluatingError)
    /// payload when this is a `Nothing` and `default` is [`None`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::data::{nothing, some};
    ///
    /// assert_eq!(some(Some(42)).or_default(Some(0)), 42);
    /// assert_eq!(some(Some(42)).or_default(None), 42);
    /// assert_eq!(nothing::<i32>().or_default(Some(0)), 0);
    /// ```
    #[inline]
    pub fn or_default(self, default: Option<V>) -> V {
        match self {
            Self::Some(value) => value,
            Self::Nothing => require_value(default),
        }
    }

    /// Returns the contained value, or raises the payload produced by
    /// `generator` when this is a `Nothing`.
    ///
    /// A present value wins outright: the generator is neither invoked nor
    /// validated. Only a `Nothing` insists that the generator be present.
    ///
    /// # Panics
    ///
    /// When this is a `Nothing`, panics with an
    /// [`EvaluatingError`](crate::error::EvaluatingError) payload if
    /// `generator` is [`None`], and otherwise with the payload the
    /// generator produces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::data::some;
    ///
    /// let absent_generator: Option<fn() -> String> = None;
    /// assert_eq!(some(Some(42)).or_throw(absent_generator), 42);
    /// ```
    #[inline]
    pub fn or_throw<G, E>(self, generator: Option<G>) -> V
    where
        G: Producer<E>,
        E: Any + Send,
    {
        match self {
            Self::Some(value) => value,
            Self::Nothing => {
                let mut generator = require_producer(generator);
                panic_any(generator())
            }
        }
    }

    // =========================================================================
    // Side-Effect Operations
    // =========================================================================

    /// Defers `operation` on the contained value into an
    /// [`OperatingContext`], consuming the maybe.
    ///
    /// The operation does not run yet. The returned context remembers
    /// which branch was taken; finalizing it with
    /// [`OperatingContext::or_on_nothing_do`] runs the deferred operation
    /// for a `Some`, or the alternative action for a `Nothing`. Exactly
    /// one of the two runs, and only upon finalization.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::data::some;
    /// use std::cell::Cell;
    ///
    /// let seen = Cell::new(0);
    /// some(Some(42))
    ///     .on_some_do(|value| seen.set(value))
    ///     .or_on_nothing_do(|| seen.set(-1));
    /// assert_eq!(seen.get(), 42);
    /// ```
    #[inline]
    pub fn on_some_do<F>(self, operation: F) -> OperatingContext<V, F>
    where
        F: FnOnce(V),
    {
        match self {
            Self::Some(value) => OperatingContext::from_some(operation, value),
            Self::Nothing => OperatingContext::from_nothing(),
        }
    }

    /// Runs `operation` on the contained value, consuming the maybe.
    ///
    /// On `Nothing` the operation is never invoked and nothing happens.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::data::some;
    /// use std::cell::Cell;
    ///
    /// let seen = Cell::new(0);
    /// some(Some(42)).when_some(|value| seen.set(value));
    /// assert_eq!(seen.get(), 42);
    /// ```
    #[inline]
    pub fn when_some<F>(self, operation: F)
    where
        F: FnOnce(V),
    {
        if let Self::Some(value) = self {
            operation(value);
        }
    }
}

// =============================================================================
// Construction Functions
// =============================================================================

/// Creates an absent `Maybe`.
///
/// # Examples
///
/// ```rust
/// use maybars::data::{nothing, Maybe};
///
/// let absent: Maybe<i32> = nothing();
/// assert!(absent.is_nothing());
/// ```
#[inline]
#[must_use]
pub const fn nothing<V>() -> Maybe<V> {
    Maybe::Nothing
}

/// Creates a present `Maybe` from a value that must be present.
///
/// # Panics
///
/// Panics with an [`EvaluatingError`](crate::error::EvaluatingError)
/// payload when `value` is [`None`].
///
/// # Examples
///
/// ```rust
/// use maybars::data::{some, Maybe};
///
/// assert_eq!(some(Some(42)), Maybe::Some(42));
/// ```
#[inline]
pub fn some<V>(value: Option<V>) -> Maybe<V> {
    Maybe::Some(require_value(value))
}

/// Creates a `Maybe` from a value that may be absent.
///
/// A present value becomes `Some` and an absent one becomes `Nothing`;
/// nothing is rejected.
///
/// # Examples
///
/// ```rust
/// use maybars::data::{maybe, Maybe};
///
/// assert_eq!(maybe(Some(42)), Maybe::Some(42));
/// assert_eq!(maybe(None::<i32>), Maybe::Nothing);
/// ```
#[inline]
#[must_use]
pub fn maybe<V>(value: Option<V>) -> Maybe<V> {
    match value {
        Some(value) => Maybe::Some(value),
        None => Maybe::Nothing,
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<V: fmt::Debug> fmt::Debug for Maybe<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

// =============================================================================
// Display Implementation
// =============================================================================

impl<V: fmt::Display> fmt::Display for Maybe<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some[{}]", value),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<V> From<Option<V>> for Maybe<V> {
    /// Converts an `Option` to a `Maybe`.
    ///
    /// `Some(v)` becomes `Maybe::Some(v)`, and `None` becomes `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::data::Maybe;
    ///
    /// let present: Maybe<i32> = Some(42).into();
    /// assert_eq!(present, Maybe::Some(42));
    ///
    /// let absent: Maybe<i32> = None.into();
    /// assert_eq!(absent, Maybe::Nothing);
    /// ```
    #[inline]
    fn from(option: Option<V>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::Nothing,
        }
    }
}

impl<V> From<Maybe<V>> for Option<V> {
    /// Converts a `Maybe` to an `Option`.
    ///
    /// `Maybe::Some(v)` becomes `Some(v)`, and `Nothing` becomes `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::data::{nothing, some};
    ///
    /// let present: Option<i32> = some(Some(42)).into();
    /// assert_eq!(present, Some(42));
    ///
    /// let absent: Option<i32> = nothing::<i32>().into();
    /// assert_eq!(absent, None);
    /// ```
    #[inline]
    fn from(maybe: Maybe<V>) -> Self {
        match maybe {
            Maybe::Some(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Clone, Copy, Send, Sync);
static_assertions::assert_impl_all!(Maybe<String>: Clone, Send, Sync);
static_assertions::assert_not_impl_any!(Maybe<String>: Copy);
