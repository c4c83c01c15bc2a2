//! Functor type class - mapping over context values.
//!
//! A functor transforms the value(s) inside a context without changing the
//! shape of the context: `None` stays `None`, a list keeps its length, a
//! failed `Try` stays failed.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! map(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! map(map(fa, f), g) == map(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::OptionKind;
//! use funkit::typeclass::Functor;
//!
//! let transformed = OptionKind::map(Some(5), |number: i32| number.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! let untouched = OptionKind::map(None::<i32>, |number| number + 1);
//! assert_eq!(untouched, None);
//! ```

use super::higher::Kind;

/// A context whose values can be transformed by a function.
///
/// Element types are `Clone + 'static`: multi-element contexts replay their
/// elements, and deferred contexts store the mapper until they are pulled.
/// The mapper is `FnMut` because lists and sequences call it once per
/// element.
pub trait Functor: Kind {
    /// Applies `function` to every value inside `fa`.
    fn map<A, B, F>(fa: Self::Of<A>, function: F) -> Self::Of<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: FnMut(A) -> B + 'static;

    /// Replaces every value inside `fa` with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::OptionKind;
    /// use funkit::typeclass::Functor;
    ///
    /// assert_eq!(OptionKind::replace(Some(1), "x"), Some("x"));
    /// ```
    fn replace<A, B>(fa: Self::Of<A>, value: B) -> Self::Of<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        Self::map::<A, B, _>(fa, move |_| value.clone())
    }

    /// Discards the values inside `fa`, keeping only its shape.
    fn void<A>(fa: Self::Of<A>) -> Self::Of<()>
    where
        A: Clone + 'static,
    {
        Self::replace::<A, ()>(fa, ())
    }
}
