//! Type class instances and conveniences for the standard `Option`.

use crate::error::{Error, Result};
use crate::typeclass::{Applicative, Functor, Kind, Monad, Pure};

use super::attempt::Try;
use super::either::Either;
use super::extract::Extract;

/// Brand of `Option`.
///
/// # Examples
///
/// ```rust
/// use funkit::control::OptionKind;
/// use funkit::typeclass::{Applicative, Monad, Pure};
///
/// assert_eq!(OptionKind::pure(1), Some(1));
/// assert_eq!(OptionKind::ap(Some(|value: i32| value * 3), Some(2)), Some(6));
/// assert_eq!(OptionKind::flat_map(None::<i32>, |value| Some(value + 1)), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionKind;

impl Kind for OptionKind {
    type Of<A> = Option<A>;
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl Functor for OptionKind {
    #[inline]
    fn map<A, B, F>(fa: Option<A>, function: F) -> Option<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: FnMut(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl Pure for OptionKind {
    #[inline]
    fn pure<A: Clone + 'static>(value: A) -> Option<A> {
        Some(value)
    }
}

impl Applicative for OptionKind {
    #[inline]
    fn product<A, B>(fa: Option<A>, fb: Option<B>) -> Option<(A, B)>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        fa.zip(fb)
    }

    fn ap<A, B, F>(ff: Option<F>, fa: Option<A>) -> Option<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: FnMut(A) -> B + Clone + 'static,
    {
        match (ff, fa) {
            (Some(mut function), Some(value)) => Some(function(value)),
            _ => None,
        }
    }
}

impl Monad for OptionKind {
    #[inline]
    fn flat_map<A, B, F>(fa: Option<A>, function: F) -> Option<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: FnMut(A) -> Option<B> + 'static,
    {
        fa.and_then(function)
    }
}

impl<T> Extract for Option<T> {
    type Value = T;

    fn get_unsafe(self) -> Result<T> {
        self.ok_or(Error::EmptyResult { context: "None" })
    }
}

/// Conversions from `Option` into the other contexts of the crate.
pub trait OptionExt<T> {
    /// `Some(value)` becomes `Right(value)`, `None` becomes `Left(left)`.
    fn to_either<L>(self, left: L) -> Either<L, T>;

    /// `Some(value)` becomes a success, `None` a failure with
    /// [`Error::EmptyResult`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::OptionExt;
    ///
    /// assert!(Some(1).to_try().is_success());
    /// assert!(None::<i32>.to_try().is_failure());
    /// ```
    fn to_try(self) -> Try<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn to_either<L>(self, left: L) -> Either<L, T> {
        self.map_or(Either::Left(left), Either::Right)
    }

    fn to_try(self) -> Try<T> {
        self.map_or(Try::Failure(Error::EmptyResult { context: "None" }), Try::Success)
    }
}
