//! Numeric wrappers selecting a [`Semigroup`](super::Semigroup) operation.
//!
//! The same number can be combined by addition ([`Sum`]) or by
//! multiplication ([`Product`]).

/// The additive monoid. Identity: `0`.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::{Semigroup, Sum};
///
/// assert_eq!(Sum::new(3).combine(Sum::new(5)).into_inner(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

impl<A> Sum<A> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Returns the wrapped value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Sum<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

/// The multiplicative monoid. Identity: `1`.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::{Product, Semigroup};
///
/// assert_eq!(Product::new(3).combine(Product::new(5)).into_inner(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Product<A>(pub A);

impl<A> Product<A> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Returns the wrapped value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> From<A> for Product<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}
