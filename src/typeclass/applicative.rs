//! Applicative type class - combining independent computations.
//!
//! [`Pure`] lifts a plain value into a context. [`Applicative`] combines
//! several contexts whose computations do not depend on each other. Its one
//! required operation is [`Applicative::product`]; `ap`, `map2`, `sequence`
//! and `traverse` are derived from it.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! ap(pure(|x| x), v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! ap(pure(f), pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! ap(u, pure(y)) == ap(pure(|f| f(y)), u)
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! ap(ap(map(u, compose), v), w) == ap(u, ap(v, w))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::OptionKind;
//! use funkit::typeclass::{Applicative, Pure};
//!
//! assert_eq!(OptionKind::pure(42), Some(42));
//! assert_eq!(OptionKind::map2(Some(1), Some(2), |x, y| x + y), Some(3));
//! assert_eq!(OptionKind::product(Some(1), Some("a")), Some((1, "a")));
//!
//! assert_eq!(OptionKind::sequence(vec![Some(1), None, Some(2)]), None);
//! assert_eq!(OptionKind::sequence(vec![Some(1), Some(2)]), Some(vec![1, 2]));
//! ```

use super::functor::Functor;
use super::higher::Kind;

/// Lifting a plain value into a context.
pub trait Pure: Kind {
    /// Wraps `value` in the minimal context: `Some`, `Right`, `Success`,
    /// a singleton list or a one-element sequence.
    fn pure<A: Clone + 'static>(value: A) -> Self::Of<A>;
}

/// A functor able to combine independent contexts.
pub trait Applicative: Functor + Pure {
    /// Pairs the values of two contexts.
    ///
    /// Single-value contexts pair their values or propagate the first empty
    /// case. Lists and sequences produce the cartesian product, with `fa`
    /// as the outer loop.
    fn product<A, B>(fa: Self::Of<A>, fb: Self::Of<B>) -> Self::Of<(A, B)>
    where
        A: Clone + 'static,
        B: Clone + 'static;

    /// Applies the function(s) in `ff` to the value(s) in `fa`.
    ///
    /// The default pairs through [`product`](Self::product) and calls each
    /// function on its partner.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::OptionKind;
    /// use funkit::typeclass::Applicative;
    ///
    /// let increment = Some(|value: i32| value + 1);
    /// assert_eq!(OptionKind::ap(increment, Some(1)), Some(2));
    /// ```
    fn ap<A, B, F>(ff: Self::Of<F>, fa: Self::Of<A>) -> Self::Of<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: FnMut(A) -> B + Clone + 'static,
    {
        Self::map::<(F, A), B, _>(
            Self::product::<F, A>(ff, fa),
            |(mut function, value)| function(value),
        )
    }

    /// Combines two contexts with a binary function.
    fn map2<A, B, C, F>(fa: Self::Of<A>, fb: Self::Of<B>, mut function: F) -> Self::Of<C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: Clone + 'static,
        F: FnMut(A, B) -> C + 'static,
    {
        Self::map::<(A, B), C, _>(Self::product::<A, B>(fa, fb), move |(first, second)| {
            function(first, second)
        })
    }

    /// Combines two contexts, keeping the values of the first.
    fn product_left<A, B>(fa: Self::Of<A>, fb: Self::Of<B>) -> Self::Of<A>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        Self::map2::<A, B, A, _>(fa, fb, |first, _| first)
    }

    /// Combines two contexts, keeping the values of the second.
    fn product_right<A, B>(fa: Self::Of<A>, fb: Self::Of<B>) -> Self::Of<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        Self::map2::<A, B, B, _>(fa, fb, |_, second| second)
    }

    /// Turns a collection of contexts into a context of a collection.
    ///
    /// Folds [`product`](Self::product) from `pure(vec![])`, so a single
    /// empty case (a `None`, a `Left`, a `Failure`) collapses the result.
    /// For lists the result is the cartesian product of all inputs.
    fn sequence<A, I>(items: I) -> Self::Of<Vec<A>>
    where
        A: Clone + 'static,
        I: IntoIterator<Item = Self::Of<A>>,
    {
        items
            .into_iter()
            .fold(Self::pure(Vec::new()), |accumulator, item| {
                Self::map2::<Vec<A>, A, Vec<A>, _>(accumulator, item, push_value)
            })
    }

    /// Maps every item into a context and sequences the results in one pass.
    ///
    /// Equivalent to `sequence(items.map(function))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::OptionKind;
    /// use funkit::typeclass::Applicative;
    ///
    /// let parsed = OptionKind::traverse(vec!["1", "2"], |text: &str| text.parse::<i32>().ok());
    /// assert_eq!(parsed, Some(vec![1, 2]));
    ///
    /// let rejected = OptionKind::traverse(vec!["1", "x"], |text: &str| text.parse::<i32>().ok());
    /// assert_eq!(rejected, None);
    /// ```
    fn traverse<A, B, I, F>(items: I, mut function: F) -> Self::Of<Vec<B>>
    where
        B: Clone + 'static,
        I: IntoIterator<Item = A>,
        F: FnMut(A) -> Self::Of<B>,
    {
        items
            .into_iter()
            .fold(Self::pure(Vec::new()), |accumulator, item| {
                Self::map2::<Vec<B>, B, Vec<B>, _>(accumulator, function(item), push_value)
            })
    }
}

fn push_value<A>(mut values: Vec<A>, value: A) -> Vec<A> {
    values.push(value);
    values
}
