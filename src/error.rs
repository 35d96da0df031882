//! Failure types shared by the callable conversions and the container.
//!
//! Two failure kinds exist, matching the two moments a contract can break:
//!
//! - [`EvaluatingError`]: an argument that must be present was absent. Raised
//!   eagerly, at the call that violated the contract, by the guards and
//!   conversions in [`crate::function`] and by the validating operations of
//!   the container.
//! - [`ExecutingError`]: a fallible callable, already converted to total
//!   form, returned an `Err` during invocation. The original failure is
//!   preserved as the cause and reachable through
//!   [`std::error::Error::source`].
//!
//! Both are raised as panic payloads via [`std::panic::panic_any`], so a
//! `catch_unwind` caller can downcast the payload and branch on the kind.

/// A type-erased source failure, as carried by [`ExecutingError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Represents an argument contract violation: a value or callable that must
/// be present was absent.
///
/// This error is a programmer error. It is raised as a panic payload by the
/// guards in [`crate::function`] and is not expected to be caught outside of
/// tests.
///
/// # Examples
///
/// ```rust
/// use maybars::error::EvaluatingError;
///
/// let error = EvaluatingError {
///     message: "value must be present",
/// };
/// assert_eq!(format!("{}", error), "invalid argument: value must be present");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatingError {
    /// Description of the violated argument contract.
    pub message: &'static str,
}

impl std::fmt::Display for EvaluatingError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "invalid argument: {}", self.message)
    }
}

impl std::error::Error for EvaluatingError {}

/// Represents a failure of a fallible callable observed after conversion to
/// total form.
///
/// The conversions in [`crate::function`] catch every `Err` returned by the
/// callable they wrap and re-raise it as an `ExecutingError` panic payload.
/// The caught failure stays reachable as the cause, so diagnostics keep the
/// full chain regardless of how many layers of fallible callables were
/// wrapped.
///
/// # Examples
///
/// ```rust
/// use maybars::error::ExecutingError;
/// use std::error::Error;
///
/// let error = ExecutingError::new("the underlying callable failed");
/// assert_eq!(
///     format!("{}", error),
///     "a fallible callable failed during execution: the underlying callable failed"
/// );
/// assert!(error.source().is_some());
/// ```
#[derive(Debug)]
pub struct ExecutingError {
    source: BoxError,
}

impl ExecutingError {
    /// Wraps the given failure as the cause of an `ExecutingError`.
    ///
    /// Accepts anything convertible into [`BoxError`]: concrete error types,
    /// `String`, or `&str`.
    #[inline]
    pub fn new(source: impl Into<BoxError>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Consumes the error and returns the wrapped cause.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use maybars::error::ExecutingError;
    ///
    /// let error = ExecutingError::new("not a number".parse::<u32>().unwrap_err());
    /// let cause = error.into_source();
    /// assert!(cause.is::<std::num::ParseIntError>());
    /// ```
    #[inline]
    #[must_use]
    pub fn into_source(self) -> BoxError {
        self.source
    }
}

impl std::fmt::Display for ExecutingError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "a fallible callable failed during execution: {}",
            self.source
        )
    }
}

impl std::error::Error for ExecutingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

static_assertions::assert_impl_all!(EvaluatingError: Send, Sync);
static_assertions::assert_impl_all!(ExecutingError: Send, Sync);
