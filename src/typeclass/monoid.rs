//! Monoid type class - semigroups with an identity element.
//!
//! # Laws
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funkit::typeclass::{Monoid, Sum};
//!
//! assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
//! assert_eq!(String::combine_all(Vec::<String>::new()), "");
//! ```

use std::ops::{Add, Mul};

use super::semigroup::Semigroup;
use super::wrappers::{Product, Sum};

/// A semigroup with an identity element.
pub trait Monoid: Semigroup {
    /// The identity element of [`Semigroup::combine`].
    fn empty() -> Self;

    /// Combines every element of an iterator, starting from [`empty`](Self::empty).
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

/// The identity is `A::default()`, zero for the numeric types.
impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

/// The identity is `A::from(1)`.
impl<A: Mul<Output = A> + From<u8>> Monoid for Product<A> {
    fn empty() -> Self {
        Self(A::from(1))
    }
}
