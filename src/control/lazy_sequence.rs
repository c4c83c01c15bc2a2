//! Lazy, pull-based sequences.
//!
//! A [`LazySequence`] holds no elements. It holds a *producer* that opens a
//! fresh pull iterator each time the sequence is consumed, and every
//! transformation composes a new producer over its parent's. Nothing runs
//! until a terminal operation pulls, and a consumer that stops early (`take`,
//! `head`, `find`) leaves the rest of the source untouched, so infinite
//! sources are safe as long as something bounds the pull.
//!
//! Sequences built from in-memory data (`from_vec`, `range`, `iterate`,
//! `repeat`, `once`) can be consumed any number of times. A sequence built
//! with [`LazySequence::from_iter`] wraps a one-shot iterator: the first
//! consumption drains it and later ones see an empty sequence.
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::LazySequence;
//!
//! let multiples_of_three = LazySequence::range(1)
//!     .filter(|number| number % 3 == 0)
//!     .take(5);
//!
//! assert_eq!(multiples_of_three.to_vec(), vec![3, 6, 9, 12, 15]);
//! ```
//!
//! Mappers run only when elements are pulled:
//!
//! ```rust
//! use funkit::control::LazySequence;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let calls = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&calls);
//! let squares = LazySequence::range(0).map(move |number| {
//!     counter.set(counter.get() + 1);
//!     number * number
//! });
//!
//! let first_three = squares.take(3);
//! assert_eq!(calls.get(), 0);
//! assert_eq!(first_three.to_vec(), vec![0, 1, 4]);
//! assert_eq!(calls.get(), 3);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::iter::FusedIterator;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::hash::Scalar;
use crate::typeclass::{Applicative, Functor, Kind, Monad, Monoid, Pure};

type Pull<T> = Box<dyn Iterator<Item = T>>;
type Producer<T> = Rc<dyn Fn() -> Pull<T>>;

fn boxed<I>(iterator: I) -> Pull<I::Item>
where
    I: Iterator + 'static,
{
    Box::new(iterator)
}

/// A deferred, possibly infinite sequence of values.
pub struct LazySequence<T> {
    producer: Producer<T>,
}

impl<T> Clone for LazySequence<T> {
    fn clone(&self) -> Self {
        Self {
            producer: Rc::clone(&self.producer),
        }
    }
}

impl<T> fmt::Debug for LazySequence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("LazySequence").finish_non_exhaustive()
    }
}

impl<T: 'static> LazySequence<T> {
    fn from_producer<F>(producer: F) -> Self
    where
        F: Fn() -> Pull<T> + 'static,
    {
        Self {
            producer: Rc::new(producer),
        }
    }

    // =========================================================================
    // Sources
    // =========================================================================

    /// A sequence with no elements.
    pub fn empty() -> Self {
        Self::from_producer(|| boxed(std::iter::empty()))
    }

    /// A re-iterable sequence over the elements of `values`.
    pub fn from_vec(values: Vec<T>) -> Self
    where
        T: Clone,
    {
        Self::from_shared(Rc::from(values))
    }

    /// A re-iterable sequence over shared elements, without copying them
    /// up front.
    pub(crate) fn from_shared(values: Rc<[T]>) -> Self
    where
        T: Clone,
    {
        Self::from_producer(move || {
            let values = Rc::clone(&values);
            boxed((0..values.len()).map(move |index| values[index].clone()))
        })
    }

    /// A one-shot sequence over `iterable`.
    ///
    /// The first consumption drains the iterator; every later consumption
    /// sees an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::LazySequence;
    ///
    /// let lines = LazySequence::from_iter("a\nb".lines().map(str::to_string));
    /// assert_eq!(lines.to_vec(), vec!["a", "b"]);
    /// assert!(lines.to_vec().is_empty());
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_iter<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        let source = RefCell::new(Some(iterable.into_iter()));
        Self::from_producer(move || match source.borrow_mut().take() {
            Some(iterator) => boxed(iterator),
            None => boxed(std::iter::empty()),
        })
    }

    /// `seed`, `function(seed)`, `function(function(seed))`, and so on.
    pub fn iterate<F>(seed: T, function: F) -> Self
    where
        T: Clone,
        F: Fn(&T) -> T + 'static,
    {
        let function = Rc::new(function);
        Self::from_producer(move || {
            let function = Rc::clone(&function);
            boxed(std::iter::successors(Some(seed.clone()), move |previous| {
                Some(function(previous))
            }))
        })
    }

    /// `value` repeated forever.
    pub fn repeat(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_producer(move || boxed(std::iter::repeat(value.clone())))
    }

    /// A sequence of exactly one element.
    pub fn once(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_producer(move || boxed(std::iter::once(value.clone())))
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Opens a new pull over the sequence.
    #[inline]
    pub fn iter(&self) -> LazyIter<T> {
        LazyIter {
            producer: Rc::clone(&self.producer),
            state: PullState::Fresh,
        }
    }

    // =========================================================================
    // Deferred Transformations
    // =========================================================================

    /// Transforms every element.
    pub fn map<U, F>(&self, function: F) -> LazySequence<U>
    where
        U: 'static,
        F: FnMut(T) -> U + 'static,
    {
        let parent = self.clone();
        let function = Rc::new(RefCell::new(function));
        LazySequence::from_producer(move || {
            let function = Rc::clone(&function);
            boxed(parent.iter().map(move |value| (&mut *function.borrow_mut())(value)))
        })
    }

    /// Keeps the elements accepted by `predicate`.
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'static,
    {
        let parent = self.clone();
        let predicate = Rc::new(RefCell::new(predicate));
        Self::from_producer(move || {
            let predicate = Rc::clone(&predicate);
            boxed(
                parent
                    .iter()
                    .filter(move |value| (&mut *predicate.borrow_mut())(value)),
            )
        })
    }

    /// Maps every element to a sequence and concatenates the results.
    pub fn flat_map<U, F>(&self, function: F) -> LazySequence<U>
    where
        U: 'static,
        F: FnMut(T) -> LazySequence<U> + 'static,
    {
        let parent = self.clone();
        let function = Rc::new(RefCell::new(function));
        LazySequence::from_producer(move || {
            let function = Rc::clone(&function);
            boxed(
                parent
                    .iter()
                    .flat_map(move |value| (&mut *function.borrow_mut())(value)),
            )
        })
    }

    /// Concatenates elements that are themselves iterable.
    pub fn flatten(&self) -> LazySequence<T::Item>
    where
        T: IntoIterator,
        T::Item: 'static,
        T::IntoIter: 'static,
    {
        let parent = self.clone();
        LazySequence::from_producer(move || boxed(parent.iter().flatten()))
    }

    /// Concatenates elements that may or may not be iterable.
    ///
    /// Each non-iterable element is replaced by an
    /// [`Error::TypeMismatch`] item at the point it is pulled; the rest of
    /// the sequence continues.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::LazySequence;
    /// use funkit::hash::Scalar;
    ///
    /// let mixed = LazySequence::from_vec(vec![
    ///     Scalar::from(vec![Scalar::from(1), Scalar::from(2)]),
    ///     Scalar::from(3),
    /// ]);
    /// let flattened = mixed.flatten_dynamic().to_vec();
    ///
    /// assert_eq!(flattened[0], Ok(Scalar::from(1)));
    /// assert_eq!(flattened[1], Ok(Scalar::from(2)));
    /// assert!(flattened[2].is_err());
    /// ```
    pub fn flatten_dynamic(&self) -> LazySequence<Result<T::Element>>
    where
        T: MaybeIterable,
        T::Element: 'static,
    {
        let parent = self.clone();
        LazySequence::from_producer(move || {
            boxed(
                parent
                    .iter()
                    .flat_map(|element| match element.try_into_pull() {
                        Ok(elements) => boxed(elements.map(Ok)),
                        Err(error) => {
                            log::debug!("flatten met a non-iterable element: {error}");
                            boxed(std::iter::once(Err(error)))
                        }
                    }),
            )
        })
    }

    /// The first `count` elements.
    pub fn take(&self, count: usize) -> Self {
        let parent = self.clone();
        Self::from_producer(move || boxed(parent.iter().take(count)))
    }

    /// The leading elements accepted by `predicate`.
    pub fn take_while<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'static,
    {
        let parent = self.clone();
        let predicate = Rc::new(RefCell::new(predicate));
        Self::from_producer(move || {
            let predicate = Rc::clone(&predicate);
            boxed(
                parent
                    .iter()
                    .take_while(move |value| (&mut *predicate.borrow_mut())(value)),
            )
        })
    }

    /// Every element after the first `count`.
    pub fn drop(&self, count: usize) -> Self {
        let parent = self.clone();
        Self::from_producer(move || boxed(parent.iter().skip(count)))
    }

    /// Every element from the first one rejected by `predicate` on.
    pub fn drop_while<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'static,
    {
        let parent = self.clone();
        let predicate = Rc::new(RefCell::new(predicate));
        Self::from_producer(move || {
            let predicate = Rc::clone(&predicate);
            boxed(
                parent
                    .iter()
                    .skip_while(move |value| (&mut *predicate.borrow_mut())(value)),
            )
        })
    }

    /// Pairs elements of both sequences, stopping when either ends.
    pub fn zip<U: 'static>(&self, other: &LazySequence<U>) -> LazySequence<(T, U)> {
        let parent = self.clone();
        let other = other.clone();
        LazySequence::from_producer(move || boxed(parent.iter().zip(other.iter())))
    }

    /// Groups consecutive elements into vectors of `size`; the last one may
    /// be shorter. Only one chunk is buffered at a time.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn chunk(&self, size: usize) -> LazySequence<Vec<T>> {
        assert!(size != 0, "chunk size must be non-zero");
        let parent = self.clone();
        LazySequence::from_producer(move || {
            let mut source = parent.iter();
            boxed(std::iter::from_fn(move || {
                let chunk: Vec<T> = source.by_ref().take(size).collect();
                (!chunk.is_empty()).then_some(chunk)
            }))
        })
    }

    /// Emits `initial`, then every intermediate accumulation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::LazySequence;
    ///
    /// let running = LazySequence::from_vec(vec![1, 2, 3]).scan(0, |total, value| total + value);
    /// assert_eq!(running.to_vec(), vec![0, 1, 3, 6]);
    /// ```
    pub fn scan<A, F>(&self, initial: A, function: F) -> LazySequence<A>
    where
        A: Clone + 'static,
        F: FnMut(&A, T) -> A + 'static,
    {
        let parent = self.clone();
        let function = Rc::new(RefCell::new(function));
        LazySequence::from_producer(move || {
            let function = Rc::clone(&function);
            let accumulations = parent.iter().scan(initial.clone(), move |accumulator, value| {
                *accumulator = (&mut *function.borrow_mut())(&*accumulator, value);
                Some(accumulator.clone())
            });
            boxed(std::iter::once(initial.clone()).chain(accumulations))
        })
    }

    /// Runs `action` on every element as it is pulled.
    pub fn tap<F>(&self, action: F) -> Self
    where
        F: FnMut(&T) + 'static,
    {
        let parent = self.clone();
        let action = Rc::new(RefCell::new(action));
        Self::from_producer(move || {
            let action = Rc::clone(&action);
            boxed(parent.iter().inspect(move |value| (&mut *action.borrow_mut())(value)))
        })
    }

    /// The elements of `self` followed by those of `other`.
    pub fn concat(&self, other: &Self) -> Self {
        let parent = self.clone();
        let other = other.clone();
        Self::from_producer(move || boxed(parent.iter().chain(other.iter())))
    }

    /// Pairs every element with its position.
    pub fn enumerate(&self) -> LazySequence<(usize, T)> {
        let parent = self.clone();
        LazySequence::from_producer(move || boxed(parent.iter().enumerate()))
    }

    // =========================================================================
    // Terminal Operations
    // =========================================================================

    /// The first element.
    pub fn head(&self) -> Option<T> {
        self.iter().next()
    }

    /// The last element. Never returns on an infinite sequence.
    pub fn last(&self) -> Option<T> {
        self.iter().last()
    }

    /// Collects every element.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// The first element accepted by `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|value| predicate(value))
    }

    /// Whether any element is accepted by `predicate`.
    pub fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(|value| predicate(&value))
    }

    /// Whether every element is accepted by `predicate`.
    pub fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(|value| predicate(&value))
    }

    /// Folds every element into an accumulator.
    pub fn fold<A, F>(&self, initial: A, function: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        self.iter().fold(initial, function)
    }

    /// Combines every element with their monoid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::control::LazySequence;
    /// use funkit::typeclass::Sum;
    ///
    /// let total = LazySequence::range_to(1, 5).map(Sum).fold_monoid();
    /// assert_eq!(total, Sum(10));
    /// ```
    pub fn fold_monoid(&self) -> T
    where
        T: Monoid,
    {
        T::combine_all(self.iter())
    }

    /// Combines the elements pairwise from the left, or `None` when empty.
    pub fn reduce<F>(&self, function: F) -> Option<T>
    where
        F: FnMut(T, T) -> T,
    {
        self.iter().reduce(function)
    }

    /// The number of elements.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Runs `action` on every element.
    pub fn each<F>(&self, action: F)
    where
        F: FnMut(T),
    {
        self.iter().for_each(action);
    }
}

impl LazySequence<i64> {
    /// `start`, `start + 1`, `start + 2` and so on, without end.
    pub fn range(start: i64) -> Self {
        Self::from_producer(move || boxed(start..))
    }

    /// `start` up to, but excluding, `end`.
    pub fn range_to(start: i64, end: i64) -> Self {
        Self::from_producer(move || boxed(start..end))
    }
}

impl<T: 'static> IntoIterator for LazySequence<T> {
    type Item = T;
    type IntoIter = LazyIter<T>;

    fn into_iter(self) -> LazyIter<T> {
        self.iter()
    }
}

impl<T: 'static> IntoIterator for &LazySequence<T> {
    type Item = T;
    type IntoIter = LazyIter<T>;

    fn into_iter(self) -> LazyIter<T> {
        self.iter()
    }
}

// =============================================================================
// Pull State
// =============================================================================

/// Where one consumption of a sequence stands.
///
/// A pull starts `Fresh`, opens its source on the first `next` and becomes
/// `Exhausted` once the source runs dry. An exhausted pull stays exhausted.
pub enum PullState<T> {
    /// No element requested yet; the source is not open.
    Fresh,
    /// The source is open.
    Consuming(Pull<T>),
    /// The source has ended.
    Exhausted,
}

impl<T> fmt::Debug for PullState<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fresh => write!(formatter, "Fresh"),
            Self::Consuming(_) => write!(formatter, "Consuming"),
            Self::Exhausted => write!(formatter, "Exhausted"),
        }
    }
}

/// One consumption of a [`LazySequence`].
pub struct LazyIter<T> {
    producer: Producer<T>,
    state: PullState<T>,
}

impl<T> LazyIter<T> {
    /// The current state of this pull.
    #[inline]
    pub const fn state(&self) -> &PullState<T> {
        &self.state
    }
}

impl<T> Iterator for LazyIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            match &mut self.state {
                PullState::Fresh => self.state = PullState::Consuming((self.producer)()),
                PullState::Consuming(source) => {
                    let next = source.next();
                    if next.is_none() {
                        self.state = PullState::Exhausted;
                    }
                    return next;
                }
                PullState::Exhausted => return None,
            }
        }
    }
}

impl<T> FusedIterator for LazyIter<T> {}

impl<T> fmt::Debug for LazyIter<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("LazyIter")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Dynamically Iterable Elements
// =============================================================================

/// An element that may or may not contain further elements.
pub trait MaybeIterable {
    /// The type of the contained elements.
    type Element;

    /// Opens the contained elements.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] when the value is not a collection.
    fn try_into_pull(self) -> Result<Pull<Self::Element>>;
}

impl MaybeIterable for Scalar {
    type Element = Self;

    fn try_into_pull(self) -> Result<Pull<Self>> {
        match self {
            Self::List(elements) => Ok(boxed(elements.into_iter())),
            other => Err(Error::TypeMismatch {
                expected: "list",
                found: other.kind_name().to_string(),
            }),
        }
    }
}

impl<T: 'static> MaybeIterable for Vec<T> {
    type Element = T;

    fn try_into_pull(self) -> Result<Pull<T>> {
        Ok(boxed(self.into_iter()))
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

/// Brand of `LazySequence`.
///
/// `product` is the cartesian product with the first sequence as the outer
/// loop; the second sequence is pulled again for every outer element.
///
/// # Examples
///
/// ```rust
/// use funkit::control::{LazyKind, LazySequence};
/// use funkit::typeclass::Applicative;
///
/// let pairs = LazyKind::product(
///     LazySequence::from_vec(vec![1, 2]),
///     LazySequence::from_vec(vec!['a', 'b']),
/// );
/// assert_eq!(pairs.to_vec(), vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LazyKind;

impl Kind for LazyKind {
    type Of<A> = LazySequence<A>;
}

impl Functor for LazyKind {
    #[inline]
    fn map<A, B, F>(fa: LazySequence<A>, function: F) -> LazySequence<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: FnMut(A) -> B + 'static,
    {
        fa.map(function)
    }
}

impl Pure for LazyKind {
    #[inline]
    fn pure<A: Clone + 'static>(value: A) -> LazySequence<A> {
        LazySequence::once(value)
    }
}

impl Applicative for LazyKind {
    fn product<A, B>(fa: LazySequence<A>, fb: LazySequence<B>) -> LazySequence<(A, B)>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        fa.flat_map(move |first: A| fb.map(move |second| (first.clone(), second)))
    }
}

impl Monad for LazyKind {
    #[inline]
    fn flat_map<A, B, F>(fa: LazySequence<A>, function: F) -> LazySequence<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: FnMut(A) -> LazySequence<B> + 'static,
    {
        fa.flat_map(function)
    }
}
