//! Monad type class - sequencing dependent computations.
//!
//! A monad extends [`Applicative`] with [`Monad::flat_map`]: the next
//! computation is chosen from the value produced by the previous one.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! flat_map(pure(a), f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! flat_map(m, pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! flat_map(flat_map(m, f), g) == flat_map(m, |x| flat_map(f(x), g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::OptionKind;
//! use funkit::typeclass::Monad;
//!
//! let halve = |value: i32| if value % 2 == 0 { Some(value / 2) } else { None };
//!
//! assert_eq!(OptionKind::flat_map(Some(8), halve), Some(4));
//! assert_eq!(OptionKind::flat_map(Some(3), halve), None);
//! assert_eq!(OptionKind::flatten(Some(Some(1))), Some(1));
//! ```

use super::applicative::Applicative;

/// An applicative whose computations can depend on earlier results.
pub trait Monad: Applicative {
    /// Feeds every value of `fa` to `function` and joins the resulting
    /// contexts.
    fn flat_map<A, B, F>(fa: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: FnMut(A) -> Self::Of<B> + 'static;

    /// Removes one layer of nesting.
    fn flatten<A>(ffa: Self::Of<Self::Of<A>>) -> Self::Of<A>
    where
        A: Clone + 'static,
        Self::Of<A>: Clone + 'static,
    {
        Self::flat_map::<Self::Of<A>, A, _>(ffa, |inner| inner)
    }

    /// Alias of [`flat_map`](Self::flat_map).
    #[inline]
    fn and_then<A, B, F>(fa: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: FnMut(A) -> Self::Of<B> + 'static,
    {
        Self::flat_map(fa, function)
    }

    /// Sequences `fb` after `fa`, discarding the values of `fa`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::OptionKind;
    /// use funkit::typeclass::Monad;
    ///
    /// assert_eq!(OptionKind::then(Some(1), Some("next")), Some("next"));
    /// assert_eq!(OptionKind::then(None::<i32>, Some("next")), None);
    /// ```
    fn then<A, B>(fa: Self::Of<A>, fb: Self::Of<B>) -> Self::Of<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        Self::Of<B>: Clone + 'static,
    {
        Self::flat_map::<A, B, _>(fa, move |_| fb.clone())
    }
}

/// The monadic derivation of `ap`: `flat_map(ff, |f| map(fa, f))`.
///
/// Every lawful monad agrees with its own [`Applicative::ap`] through this
/// function; the law tests use it to check that agreement.
///
/// # Examples
///
/// ```rust
/// use funkit::control::OptionKind;
/// use funkit::typeclass::{ap_via_flat_map, Applicative};
///
/// let double = Some(|value: i32| value * 2);
/// assert_eq!(ap_via_flat_map::<OptionKind, _, _, _>(double, Some(4)), Some(8));
/// assert_eq!(OptionKind::ap(double, Some(4)), Some(8));
/// ```
pub fn ap_via_flat_map<K, A, B, F>(ff: K::Of<F>, fa: K::Of<A>) -> K::Of<B>
where
    K: Monad,
    A: Clone + 'static,
    B: Clone + 'static,
    F: FnMut(A) -> B + Clone + 'static,
    K::Of<A>: Clone + 'static,
{
    K::flat_map::<F, B, _>(ff, move |function| K::map::<A, B, F>(fa.clone(), function))
}
