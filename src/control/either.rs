//! Either type - a value that is one of two alternatives.
//!
//! `Either<L, R>` is `Left(L)` or `Right(R)`. It is right-biased: `map`,
//! `flat_map` and `ap` act on `Right` and pass `Left` through unchanged, so
//! `Left` conventionally carries the reason a computation stopped. The
//! `_left` variants mirror every operation on the other lane.
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::Either;
//!
//! let parsed: Either<String, i32> = Either::Right(20);
//! let doubled = parsed.map(|value| value * 2);
//! assert_eq!(doubled, Either::Right(40));
//!
//! let failed: Either<String, i32> = Either::Left("no digits".to_string());
//! let described = failed.fold(
//!     |reason| format!("failed: {reason}"),
//!     |value| format!("value: {value}"),
//! );
//! assert_eq!(described, "failed: no digits");
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::error::{Error, Result};
use crate::typeclass::{Applicative, Functor, Kind, Monad, Pure};

use super::extract::Extract;

/// A value that is either a `Left(L)` or a `Right(R)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left alternative, conventionally the failure lane.
    Left(L),
    /// The right alternative, the lane `map` and `flat_map` act on.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` for a `Left`.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` for a `Right`.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// The left value, if any.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// The right value, if any.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the left value, if any.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Borrows the right value, if any.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// The right value, or `default` for a `Left`.
    #[inline]
    pub fn get_or_else(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    /// Same as [`right`](Self::right).
    #[inline]
    pub fn to_option(self) -> Option<R> {
        self.right()
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Transforms a `Right` value.
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Transforms a `Left` value.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Chains a computation on a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Either;
    ///
    /// let checked = |value: i32| {
    ///     if value > 0 { Either::Right(value) } else { Either::Left("not positive") }
    /// };
    /// assert_eq!(Either::Right(5).flat_map(checked), Either::Right(5));
    /// assert_eq!(Either::Right(-5).flat_map(checked), Either::Left("not positive"));
    /// ```
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Chains a computation on a `Left` value, for example to recover from it.
    #[inline]
    pub fn flat_map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms whichever value is present.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Collapses both alternatives into one value.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the alternatives.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Either;
    ///
    /// let value: Either<i32, &str> = Either::Left(1);
    /// assert_eq!(value.switch(), Either::Right(1));
    /// ```
    #[inline]
    pub fn switch(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<L, F> Either<L, F> {
    /// Applies a `Right` function to a `Right` value.
    ///
    /// The first `Left` encountered, function side first, is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::Either;
    ///
    /// let increment: Either<&str, _> = Either::Right(|value: i32| value + 1);
    /// assert_eq!(increment.ap(Either::Right(1)), Either::Right(2));
    /// assert_eq!(increment.ap(Either::Left("no value")), Either::Left("no value"));
    /// ```
    #[inline]
    pub fn ap<A, B>(self, value: Either<L, A>) -> Either<L, B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, value) {
            (Self::Left(reason), _) | (Self::Right(_), Either::Left(reason)) => Either::Left(reason),
            (Self::Right(function), Either::Right(value)) => Either::Right(function(value)),
        }
    }
}

impl<L, R> Extract for Either<L, R> {
    type Value = R;

    fn get_unsafe(self) -> Result<R> {
        self.right().ok_or(Error::EmptyResult { context: "Left" })
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<std::result::Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: std::result::Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for std::result::Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

/// Brand of `Either<L, _>`, fixing the left type.
pub struct EitherKind<L>(PhantomData<fn() -> L>);

impl<L> Kind for EitherKind<L> {
    type Of<A> = Either<L, A>;
}

impl<L> Functor for EitherKind<L> {
    #[inline]
    fn map<A, B, F>(fa: Either<L, A>, function: F) -> Either<L, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: FnMut(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl<L> Pure for EitherKind<L> {
    #[inline]
    fn pure<A: Clone + 'static>(value: A) -> Either<L, A> {
        Either::Right(value)
    }
}

impl<L> Applicative for EitherKind<L> {
    fn product<A, B>(fa: Either<L, A>, fb: Either<L, B>) -> Either<L, (A, B)>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        fa.flat_map(|first| fb.map(|second| (first, second)))
    }
}

impl<L> Monad for EitherKind<L> {
    #[inline]
    fn flat_map<A, B, F>(fa: Either<L, A>, function: F) -> Either<L, B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: FnMut(A) -> Either<L, B> + 'static,
    {
        fa.flat_map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_either_left_construction() {
        let value: Either<i32, String> = Either::Left(42);
        assert!(value.is_left());
        assert!(!value.is_right());
    }

    #[rstest]
    fn test_map_left_leaves_right_alone() {
        let value: Either<i32, &str> = Either::Right("kept");
        assert_eq!(value.map_left(|number| number + 1), Either::Right("kept"));
    }

    #[rstest]
    fn test_flat_map_left_recovers() {
        let value: Either<&str, i32> = Either::Left("missing");
        let recovered: Either<(), i32> = value.flat_map_left(|_| Either::Right(0));
        assert_eq!(recovered, Either::Right(0));
    }

    #[rstest]
    fn test_product_keeps_first_left() {
        let first: Either<&str, i32> = Either::Left("first");
        let second: Either<&str, i32> = Either::Left("second");
        assert_eq!(EitherKind::product(first, second), Either::Left("first"));
    }

    #[rstest]
    fn test_sequence_returns_first_left() {
        let values: Vec<Either<&str, i32>> =
            vec![Either::Right(1), Either::Left("bad"), Either::Left("worse")];
        assert_eq!(EitherKind::sequence(values), Either::Left("bad"));
    }

    #[rstest]
    fn test_get_or_else_and_get_unsafe() {
        let left: Either<&str, i32> = Either::Left("no");
        assert_eq!(left.get_or_else(7), 7);
        assert_eq!(
            left.get_unsafe(),
            Err(Error::EmptyResult { context: "Left" })
        );
        assert_eq!(Either::<&str, i32>::Right(3).get_unsafe(), Ok(3));
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: std::result::Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        let result: std::result::Result<i32, String> = either.into();
        assert_eq!(result, Ok(42));
    }
}
