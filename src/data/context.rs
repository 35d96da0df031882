//! Operating context - a deferred branch on a maybe's presence.
//!
//! [`Maybe::on_some_do`](crate::data::Maybe::on_some_do) does not run its
//! operation immediately. It returns an [`OperatingContext`] that remembers
//! the branch taken at creation, and the caller finalizes the context with
//! the alternative for the absent case. Exactly one of the two callables
//! runs, and only upon finalization.

use std::fmt;

/// The pending outcome of branching on a maybe's presence.
///
/// A context created from a present value holds the deferred operation
/// together with that value; a context created from an absent one holds
/// nothing. Either way, nothing runs until
/// [`or_on_nothing_do`](OperatingContext::or_on_nothing_do) finalizes the
/// context. A context that is dropped without being finalized runs
/// neither callable.
///
/// # Examples
///
/// ```rust
/// use maybars::data::{nothing, some};
/// use std::cell::Cell;
///
/// let seen = Cell::new(0);
/// some(Some(42))
///     .on_some_do(|value| seen.set(value))
///     .or_on_nothing_do(|| seen.set(-1));
/// assert_eq!(seen.get(), 42);
///
/// let seen = Cell::new(0);
/// nothing::<i32>()
///     .on_some_do(|value| seen.set(value))
///     .or_on_nothing_do(|| seen.set(-1));
/// assert_eq!(seen.get(), -1);
/// ```
#[must_use]
pub struct OperatingContext<V, F = fn(V)> {
    deferred: Option<(F, V)>,
}

impl<V, F> OperatingContext<V, F>
where
    F: FnOnce(V),
{
    pub(crate) fn from_some(operation: F, value: V) -> Self {
        Self {
            deferred: Some((operation, value)),
        }
    }

    pub(crate) const fn from_nothing() -> Self {
        Self { deferred: None }
    }

    /// Finalizes the context, consuming it.
    ///
    /// Runs the deferred operation on the remembered value when the
    /// context came from a present maybe, and `action` when it came from
    /// an absent one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::data::nothing;
    /// use std::cell::Cell;
    ///
    /// let fallback = Cell::new(false);
    /// nothing::<i32>()
    ///     .on_some_do(|_| {})
    ///     .or_on_nothing_do(|| fallback.set(true));
    /// assert!(fallback.get());
    /// ```
    #[inline]
    pub fn or_on_nothing_do<A>(self, action: A)
    where
        A: FnOnce(),
    {
        match self.deferred {
            Some((operation, value)) => operation(value),
            None => action(),
        }
    }
}

impl<V, F> fmt::Debug for OperatingContext<V, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.deferred {
            Some(_) => formatter
                .debug_tuple("OperatingContext")
                .field(&"<some operation>")
                .finish(),
            None => formatter
                .debug_tuple("OperatingContext")
                .field(&"<nothing>")
                .finish(),
        }
    }
}
