//! The identity context.
//!
//! `IdentityKind::Of<A>` is `A` itself. It adds no effect, which makes it
//! the simplest model of every law in this module and the base case for
//! generic helpers that need a context but no effect.

use super::applicative::{Applicative, Pure};
use super::functor::Functor;
use super::higher::Kind;
use super::monad::Monad;

/// Brand of the identity context.
///
/// # Examples
///
/// ```rust
/// use funkit::typeclass::{Applicative, IdentityKind, Monad};
///
/// let total = IdentityKind::map2(2, 3, |left, right| left + right);
/// assert_eq!(total, 5);
/// assert_eq!(IdentityKind::flat_map(total, |value| value * 10), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdentityKind;

impl Kind for IdentityKind {
    type Of<A> = A;
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl Functor for IdentityKind {
    fn map<A, B, F>(fa: A, mut function: F) -> B
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: FnMut(A) -> B + 'static,
    {
        function(fa)
    }
}

impl Pure for IdentityKind {
    #[inline]
    fn pure<A: Clone + 'static>(value: A) -> A {
        value
    }
}

impl Applicative for IdentityKind {
    #[inline]
    fn product<A, B>(fa: A, fb: B) -> (A, B)
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        (fa, fb)
    }
}

impl Monad for IdentityKind {
    fn flat_map<A, B, F>(fa: A, mut function: F) -> B
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: FnMut(A) -> B + 'static,
    {
        function(fa)
    }
}
