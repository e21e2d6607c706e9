//! The two-variant success/failure container
//!
//! Every combinator consumes the container and hands back a new one, so a
//! value never changes variant once it is built. Use [`Outcome::as_ref`] to
//! run combinators against a borrowed container.

use crate::error::{OutcomeError, Result};
use crate::iter::{IntoIter, Iter};
use core::fmt;
use core::hash::{Hash, Hasher};

/// Which of the two variants an [`Outcome`] holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discriminant {
    /// The completed-operation variant
    Success,
    /// The failed-operation variant
    Failure,
}

impl fmt::Display for Discriminant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discriminant::Success => write!(f, "success"),
            Discriminant::Failure => write!(f, "failure"),
        }
    }
}

/// Outcome of an operation: a success value or an error value
///
/// Two outcomes are equal only when they hold the same variant and equal
/// payloads. Hashing looks at the payload alone, so `Success(x)` and
/// `Failure(x)` land in the same bucket while still comparing unequal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "this `Outcome` may be a `Failure` variant, which should be handled"]
pub enum Outcome<T, E> {
    /// Operation completed with a value
    Success(T),
    /// Operation failed with an error value
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Build a success outcome
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Build a failure outcome
    pub fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// Build a success outcome from a payload that may be absent
    ///
    /// Returns [`OutcomeError::InvalidArgument`] when `value` is `None`.
    pub fn try_success(value: Option<T>) -> Result<Self> {
        value
            .map(Outcome::Success)
            .ok_or_else(|| OutcomeError::invalid_argument(Discriminant::Success))
    }

    /// Build a failure outcome from a payload that may be absent
    ///
    /// Returns [`OutcomeError::InvalidArgument`] when `error` is `None`.
    pub fn try_failure(error: Option<E>) -> Result<Self> {
        error
            .map(Outcome::Failure)
            .ok_or_else(|| OutcomeError::invalid_argument(Discriminant::Failure))
    }

    /// True for `Success`
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// True for `Failure`
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// The variant currently held
    pub fn discriminant(&self) -> Discriminant {
        match self {
            Outcome::Success(_) => Discriminant::Success,
            Outcome::Failure(_) => Discriminant::Failure,
        }
    }

    /// Success payload, present iff this is a success
    pub fn success_value(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Failure payload, present iff this is a failure
    pub fn failure_value(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Borrow both payload slots
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    // Transformation

    /// Apply `f` to the success payload; failures pass through untouched
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Apply `g` to the failure payload; successes pass through untouched
    pub fn map_error<F, G>(self, g: G) -> Outcome<T, F>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(g(error)),
        }
    }

    /// Fold both variants into a single value
    ///
    /// Exactly one of the two handlers runs.
    pub fn map_or_else<U, D, F>(self, on_failure: D, on_success: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(error) => on_failure(error),
        }
    }

    // Chaining

    /// Returns `other` if this is a success, otherwise keeps the failure
    ///
    /// `other` is built by the caller before the call; use
    /// [`and_then`](Self::and_then) to defer that work.
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Success(_) => other,
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chain a fallible step onto the success payload
    ///
    /// `f` is never called on a failure, which short-circuits the chain.
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Keeps a success, otherwise returns `other`
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(_) => other,
        }
    }

    /// Recover from a failure by calling `f` with the error
    pub fn or_else<F, O>(self, f: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => f(error),
        }
    }

    // Extraction

    /// Success payload, or `default` on failure
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Success payload, or a value computed from the error
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => f(error),
        }
    }

    /// Success payload
    ///
    /// # Errors
    ///
    /// [`OutcomeError::DiscriminantMismatch`] without a message when this is
    /// a failure.
    pub fn unwrap(self) -> Result<T> {
        self.extract_success(None)
    }

    /// Success payload, reporting `message` on a failure
    ///
    /// # Errors
    ///
    /// [`OutcomeError::DiscriminantMismatch`] carrying `message` when this
    /// is a failure.
    pub fn expect(self, message: &str) -> Result<T> {
        self.extract_success(Some(message))
    }

    /// Failure payload
    ///
    /// # Errors
    ///
    /// [`OutcomeError::DiscriminantMismatch`] without a message when this is
    /// a success.
    pub fn unwrap_error(self) -> Result<E> {
        self.extract_failure(None)
    }

    /// Failure payload, reporting `message` on a success
    ///
    /// # Errors
    ///
    /// [`OutcomeError::DiscriminantMismatch`] carrying `message` when this
    /// is a success.
    pub fn expect_error(self, message: &str) -> Result<E> {
        self.extract_failure(Some(message))
    }

    fn extract_success(self, message: Option<&str>) -> Result<T> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(_) => Err(OutcomeError::mismatch(Discriminant::Failure, message)),
        }
    }

    fn extract_failure(self, message: Option<&str>) -> Result<E> {
        match self {
            Outcome::Success(_) => Err(OutcomeError::mismatch(Discriminant::Success, message)),
            Outcome::Failure(error) => Ok(error),
        }
    }

    // Sequence view

    /// Fresh iterator over the success payload: one item or none
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref().success_value())
    }

    /// Convert into the standard library result
    pub fn into_result(self) -> core::result::Result<T, E> {
        self.into()
    }
}

impl<T: Hash, E: Hash> Hash for Outcome<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Payload only; the variant is left out.
        match self {
            Outcome::Success(value) => value.hash(state),
            Outcome::Failure(error) => error.hash(state),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(value) => write!(f, "Success({value})"),
            Outcome::Failure(error) => write!(f, "Failure({error})"),
        }
    }
}

impl<T, E> From<core::result::Result<T, E>> for Outcome<T, E> {
    fn from(result: core::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for core::result::Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.success_value())
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
