//! Try type - the outcome of a computation that may fail.
//!
//! `Try<T>` is `Success(T)` or `Failure(Error)`. Its constructors run the
//! computation immediately, turning a panic or an `Err` return into a
//! `Failure`. Every callback passed to a `Try` combinator is guarded the same
//! way, so a panicking mapper produces a `Failure` instead of unwinding
//! through the caller.
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::Try;
//!
//! let parsed = Try::from_result(|| "42".parse::<i32>());
//! assert_eq!(parsed.map(|value| value + 1).get_or_else(0), 43);
//!
//! let broken = Try::from_result(|| "forty-two".parse::<i32>());
//! assert!(broken.is_failure());
//!
//! let recovered = broken.recover(|_| -1);
//! assert_eq!(recovered, Try::Success(-1));
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::error::{Error, Result};
use crate::typeclass::{Applicative, Functor, Kind, Monad, Pure};

use super::either::Either;
use super::extract::Extract;

/// The outcome of a computation: a value or the error that stopped it.
#[derive(Clone, PartialEq)]
pub enum Try<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation panicked or returned an error.
    Failure(Error),
}

impl<T> Try<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Runs `computation`, capturing a panic as a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Try;
    ///
    /// assert_eq!(Try::of(|| 2 + 2), Try::Success(4));
    /// assert!(Try::<i32>::of(|| panic!("boom")).is_failure());
    /// ```
    pub fn of<F>(computation: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match panic::catch_unwind(AssertUnwindSafe(computation)) {
            Ok(value) => Self::Success(value),
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                log::debug!("captured panic: {message}");
                Self::Failure(Error::Panicked { message })
            }
        }
    }

    /// Runs a fallible `computation`, capturing both an `Err` return and a
    /// panic as a failure.
    pub fn from_result<F, E>(computation: F) -> Self
    where
        F: FnOnce() -> std::result::Result<T, E>,
        E: Into<Box<dyn std::error::Error>>,
    {
        match Try::of(computation) {
            Try::Success(Ok(value)) => Self::Success(value),
            Try::Success(Err(error)) => {
                let error = Error::raised(error);
                log::debug!("captured error: {error}");
                Self::Failure(error)
            }
            Try::Failure(error) => Self::Failure(error),
        }
    }

    /// Wraps a value.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps an error.
    #[inline]
    pub const fn failure(error: Error) -> Self {
        Self::Failure(error)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` for a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows the error of a `Failure`.
    #[inline]
    pub const fn failed(&self) -> Option<&Error> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Transforms a successful value. A panicking `function` yields a
    /// failure.
    pub fn map<U, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Try::of(move || function(value)),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Transforms a successful value with a fallible `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Try;
    ///
    /// let parsed = Try::success("12").try_map(|text| text.parse::<u8>());
    /// assert_eq!(parsed, Try::Success(12));
    ///
    /// let overflow = Try::success("999").try_map(|text| text.parse::<u8>());
    /// assert!(overflow.is_failure());
    /// ```
    pub fn try_map<U, E, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> std::result::Result<U, E>,
        E: Into<Box<dyn std::error::Error>>,
    {
        match self {
            Self::Success(value) => Try::from_result(move || function(value)),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Chains a computation that itself may fail.
    pub fn flat_map<U, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        match self {
            Self::Success(value) => Try::of(move || function(value)).join(),
            Self::Failure(error) => Try::Failure(error),
        }
    }

    /// Keeps a successful value only when `predicate` accepts it.
    ///
    /// A rejected value becomes a failure with [`Error::EmptyResult`].
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => match Try::of(|| predicate(&value)) {
                Try::Success(true) => Self::Success(value),
                Try::Success(false) => Self::Failure(Error::EmptyResult {
                    context: "Try::filter",
                }),
                Try::Failure(error) => Self::Failure(error),
            },
            failure @ Self::Failure(_) => failure,
        }
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    /// Replaces a failure with the value computed from its error.
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(Error) -> T,
    {
        match self {
            success @ Self::Success(_) => success,
            Self::Failure(error) => Self::of(move || function(error)),
        }
    }

    /// Like [`recover`](Self::recover), but only for errors accepted by
    /// `predicate`.
    pub fn recover_if<P, F>(self, predicate: P, function: F) -> Self
    where
        P: FnOnce(&Error) -> bool,
        F: FnOnce(Error) -> T,
    {
        match self {
            success @ Self::Success(_) => success,
            Self::Failure(error) => match Try::of(|| predicate(&error)) {
                Try::Success(true) => Self::of(move || function(error)),
                Try::Success(false) => Self::Failure(error),
                Try::Failure(raised) => Self::Failure(raised),
            },
        }
    }

    /// Replaces a failure with the outcome of another fallible computation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Try;
    /// use funkit::Error;
    ///
    /// let missing: Try<i32> = Try::failure(Error::EmptyResult { context: "cache" });
    /// let fallback = missing.recover_with(|_| Try::from_result(|| "7".parse::<i32>()));
    /// assert_eq!(fallback, Try::Success(7));
    /// ```
    pub fn recover_with<F>(self, function: F) -> Self
    where
        F: FnOnce(Error) -> Self,
    {
        match self {
            success @ Self::Success(_) => success,
            Self::Failure(error) => Try::of(move || function(error)).join(),
        }
    }

    /// Like [`recover_with`](Self::recover_with), but only for errors
    /// accepted by `predicate`.
    pub fn recover_with_if<P, F>(self, predicate: P, function: F) -> Self
    where
        P: FnOnce(&Error) -> bool,
        F: FnOnce(Error) -> Self,
    {
        match self {
            success @ Self::Success(_) => success,
            Self::Failure(error) => match Try::of(|| predicate(&error)) {
                Try::Success(true) => Try::of(move || function(error)).join(),
                Try::Success(false) => Self::Failure(error),
                Try::Failure(raised) => Self::Failure(raised),
            },
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// The successful value, or `default`.
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Converts into a standard `Result`.
    #[inline]
    pub fn resolve(self) -> Result<T> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }

    /// Collapses both cases into one value.
    #[inline]
    pub fn fold<U, F, G>(self, on_failure: F, on_success: G) -> U
    where
        F: FnOnce(Error) -> U,
        G: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// The successful value, if any.
    #[inline]
    pub fn to_option(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// `Success` becomes `Right`, `Failure` becomes `Left`.
    #[inline]
    pub fn to_either(self) -> Either<Error, T> {
        match self {
            Self::Success(value) => Either::Right(value),
            Self::Failure(error) => Either::Left(error),
        }
    }
}

impl<T> Try<Try<T>> {
    /// Removes one layer of nesting.
    #[inline]
    pub fn join(self) -> Try<T> {
        match self {
            Self::Success(inner) => inner,
            Self::Failure(error) => Try::Failure(error),
        }
    }
}

impl<F> Try<F> {
    /// Applies a successful function to a successful value.
    ///
    /// The function's failure takes precedence over the value's. A panic in
    /// the function yields a failure.
    pub fn ap<A, B>(self, value: Try<A>) -> Try<B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, value) {
            (Self::Success(function), Try::Success(value)) => Try::of(move || function(value)),
            (Self::Failure(error), _) | (Self::Success(_), Try::Failure(error)) => {
                Try::Failure(error)
            }
        }
    }
}

impl<T> Extract for Try<T> {
    type Value = T;

    fn get_unsafe(self) -> Result<T> {
        self.resolve()
    }
}

impl<T> From<Try<T>> for Result<T> {
    fn from(attempt: Try<T>) -> Self {
        attempt.resolve()
    }
}

impl<T: fmt::Debug> fmt::Debug for Try<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string())
}

// =============================================================================
// Type Class Implementations
// =============================================================================

/// Brand of `Try`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TryKind;

impl Kind for TryKind {
    type Of<A> = Try<A>;
}

impl Functor for TryKind {
    #[inline]
    fn map<A, B, F>(fa: Try<A>, function: F) -> Try<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: FnMut(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl Pure for TryKind {
    #[inline]
    fn pure<A: Clone + 'static>(value: A) -> Try<A> {
        Try::Success(value)
    }
}

impl Applicative for TryKind {
    fn product<A, B>(fa: Try<A>, fb: Try<B>) -> Try<(A, B)>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        match (fa, fb) {
            (Try::Success(first), Try::Success(second)) => Try::Success((first, second)),
            (Try::Failure(error), _) | (Try::Success(_), Try::Failure(error)) => {
                Try::Failure(error)
            }
        }
    }

    #[inline]
    fn ap<A, B, F>(ff: Try<F>, fa: Try<A>) -> Try<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: FnMut(A) -> B + Clone + 'static,
    {
        ff.ap(fa)
    }
}

impl Monad for TryKind {
    #[inline]
    fn flat_map<A, B, F>(fa: Try<A>, function: F) -> Try<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: FnMut(A) -> Try<B> + 'static,
    {
        fa.flat_map(function)
    }
}
