//! Immutable, eagerly evaluated list.
//!
//! [`EagerList`] stores its elements in one shared slice. Cloning a list is
//! O(1), index access is O(1), and every transformation builds a new list in
//! a single pass. Stateful or short-circuiting transformations (`take_while`,
//! `zip`, `chunk`, `scan` and friends) run through the list's
//! [`LazySequence`] view and are collected straight back.
//!
//! # Examples
//!
//! ```rust
//! use funkit::persistent::EagerList;
//!
//! let words = EagerList::of(vec!["pear", "fig", "plum", "kiwi"]);
//! let by_length = words.group_by(|word| word.len());
//!
//! assert_eq!(by_length.get(&4), Some(&EagerList::of(vec!["pear", "plum", "kiwi"])));
//! assert_eq!(words.map(|word| word.len()).to_vec(), vec![4, 3, 4, 4]);
//! assert_eq!(words.sort().head(), Some(&"fig"));
//! ```

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::ops::Index;
use std::rc::Rc;

use crate::control::{LazySequence, MaybeIterable};
use crate::error::Result;
use crate::hash::{HashKey, Hashable};
use crate::typeclass::{Applicative, Functor, Kind, Monad, Monoid, Pure, Semigroup};

use super::map::{MapBuilder, PersistentMap};

/// An immutable list backed by a shared slice.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EagerList<T> {
    elements: Rc<[T]>,
}

impl<T> EagerList<T> {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: Rc::new([]),
        }
    }

    /// Creates a list holding `elements`.
    #[inline]
    #[must_use]
    pub fn of(elements: Vec<T>) -> Self {
        Self {
            elements: Rc::from(elements),
        }
    }

    /// Creates a list holding one element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self {
            elements: Rc::new([element]),
        }
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Iterates over the elements by reference.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// The element at `index`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// The first element, if any.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.elements.first()
    }

    /// The last element, if any.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns `true` if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.elements.contains(value)
    }

    /// The first element accepted by `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|element| predicate(element))
    }

    /// Returns `true` if any element is accepted by `predicate`.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Returns `true` if every element is accepted by `predicate`.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// The position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|element| element == value)
    }

    /// The smallest element; the first of equal minima wins.
    pub fn min(&self) -> Option<&T>
    where
        T: Ord,
    {
        self.min_by(T::cmp)
    }

    /// The largest element; the last of equal maxima wins.
    pub fn max(&self) -> Option<&T>
    where
        T: Ord,
    {
        self.max_by(T::cmp)
    }

    /// The smallest element under `comparator`.
    pub fn min_by<C>(&self, mut comparator: C) -> Option<&T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        self.iter().min_by(|left, right| comparator(left, right))
    }

    /// The largest element under `comparator`.
    pub fn max_by<C>(&self, mut comparator: C) -> Option<&T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        self.iter().max_by(|left, right| comparator(left, right))
    }

    /// Transforms every element.
    pub fn map<B, F>(&self, function: F) -> EagerList<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }

    /// Transforms every element together with its position.
    pub fn map_indexed<B, F>(&self, mut function: F) -> EagerList<B>
    where
        F: FnMut(usize, &T) -> B,
    {
        self.iter()
            .enumerate()
            .map(|(index, element)| function(index, element))
            .collect()
    }

    /// Maps every element to a list and concatenates the results.
    pub fn flat_map<B, F>(&self, mut function: F) -> EagerList<B>
    where
        B: Clone,
        F: FnMut(&T) -> EagerList<B>,
    {
        let mut elements = Vec::with_capacity(self.len());
        for element in self {
            elements.extend_from_slice(function(element).as_slice());
        }
        EagerList::of(elements)
    }

    /// Folds every element into an accumulator, from the left.
    pub fn fold<A, F>(&self, initial: A, function: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.iter().fold(initial, function)
    }

    /// Runs `action` on every element.
    pub fn each<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(action);
    }
}

impl<T: Clone> EagerList<T> {
    /// Copies the elements into a vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.to_vec()
    }

    /// Keeps the elements accepted by `predicate`.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .filter(|element| predicate(element))
            .cloned()
            .collect()
    }

    /// A new list with `element` at the end.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn append(&self, element: T) -> Self {
        self.iter().cloned().chain(std::iter::once(element)).collect()
    }

    /// A new list with `element` at the front.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn prepend(&self, element: T) -> Self {
        std::iter::once(element).chain(self.iter().cloned()).collect()
    }

    /// The elements of `self` followed by those of `other`.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        self.iter().chain(other.iter()).cloned().collect()
    }

    /// The elements in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        self.iter().rev().cloned().collect()
    }

    /// The elements in ascending order. The sort is stable.
    #[must_use]
    pub fn sort(&self) -> Self
    where
        T: Ord,
    {
        self.sort_by(T::cmp)
    }

    /// The elements ordered by `comparator`. The sort is stable.
    #[must_use]
    pub fn sort_by<C>(&self, comparator: C) -> Self
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let mut elements = self.to_vec();
        elements.sort_by(comparator);
        Self::of(elements)
    }

    /// The first `count` elements.
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        if count >= self.len() {
            return self.clone();
        }
        self.iter().take(count).cloned().collect()
    }

    /// Every element after the first `count`.
    #[must_use]
    pub fn drop(&self, count: usize) -> Self {
        if count == 0 {
            return self.clone();
        }
        self.iter().skip(count).cloned().collect()
    }

    /// Removes elements whose canonical hash key was already seen; the first
    /// occurrence is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::hash::Scalar;
    /// use funkit::persistent::EagerList;
    ///
    /// let values = EagerList::of(vec![Scalar::Int(1), Scalar::Bool(true), Scalar::Int(2)]);
    /// assert_eq!(values.unique().to_vec(), vec![Scalar::Int(1), Scalar::Int(2)]);
    /// ```
    #[must_use]
    pub fn unique(&self) -> Self
    where
        T: Hashable,
    {
        let mut seen: HashSet<HashKey> = HashSet::with_capacity(self.len());
        self.iter()
            .filter(|element| seen.insert(element.hash_code()))
            .cloned()
            .collect()
    }

    /// Combines the elements pairwise from the left, or `None` when empty.
    pub fn reduce<F>(&self, mut function: F) -> Option<T>
    where
        F: FnMut(T, &T) -> T,
    {
        let (first, rest) = self.elements.split_first()?;
        Some(rest.iter().fold(first.clone(), |accumulator, element| {
            function(accumulator, element)
        }))
    }

    /// Combines every element with their monoid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::persistent::EagerList;
    ///
    /// let words = EagerList::of(vec!["ab".to_string(), "cd".to_string()]);
    /// assert_eq!(words.fold_monoid(), "abcd");
    /// ```
    pub fn fold_monoid(&self) -> T
    where
        T: Monoid,
    {
        T::combine_all(self.iter().cloned())
    }

    /// Builds a map keyed by `key_function`. Among elements sharing a key,
    /// the later one wins.
    pub fn index<K, F>(&self, mut key_function: F) -> PersistentMap<K, T>
    where
        K: Hashable + Clone,
        F: FnMut(&T) -> K,
    {
        let mut builder = MapBuilder::with_capacity(self.len());
        for element in self {
            builder.insert(key_function(element), element.clone());
        }
        builder.freeze()
    }

    /// Groups the elements by `key_function`, keeping element order within
    /// each group and first-occurrence order between groups.
    pub fn group_by<K, F>(&self, mut key_function: F) -> PersistentMap<K, Self>
    where
        K: Hashable + Clone,
        F: FnMut(&T) -> K,
    {
        let mut builder: MapBuilder<K, Vec<T>> = MapBuilder::new();
        for element in self {
            builder
                .entry_or_insert_with(key_function(element), Vec::new)
                .push(element.clone());
        }
        builder.freeze_with(Self::of)
    }
}

impl<T: Clone + 'static> EagerList<T> {
    /// A lazy view over the elements, sharing them with this list.
    pub fn lazy(&self) -> LazySequence<T> {
        LazySequence::from_shared(Rc::clone(&self.elements))
    }

    /// The longest prefix accepted by `predicate`.
    #[must_use]
    pub fn take_while<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'static,
    {
        self.lazy().take_while(predicate).to_list()
    }

    /// The elements after the longest prefix accepted by `predicate`.
    #[must_use]
    pub fn drop_while<P>(&self, predicate: P) -> Self
    where
        P: FnMut(&T) -> bool + 'static,
    {
        self.lazy().drop_while(predicate).to_list()
    }

    /// Pairs elements of both lists, stopping at the shorter one.
    pub fn zip<U: Clone + 'static>(&self, other: &EagerList<U>) -> EagerList<(T, U)> {
        self.lazy().zip(&other.lazy()).to_list()
    }

    /// Splits the list into lists of `size`; the last may be shorter.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn chunk(&self, size: usize) -> EagerList<Self> {
        self.lazy().chunk(size).iter().map(Self::of).collect()
    }

    /// `initial` followed by every intermediate accumulation.
    pub fn scan<A, F>(&self, initial: A, function: F) -> EagerList<A>
    where
        A: Clone + 'static,
        F: FnMut(&A, T) -> A + 'static,
    {
        self.lazy().scan(initial, function).to_list()
    }
}

impl<T: Clone> EagerList<EagerList<T>> {
    /// Concatenates the nested lists.
    #[must_use]
    pub fn flatten(&self) -> EagerList<T> {
        self.flat_map(Clone::clone)
    }
}

impl<K: Hashable + Clone, V: Clone> EagerList<(K, V)> {
    /// Builds a map from the pairs; for shared keys the later pair wins.
    pub fn to_map(&self) -> PersistentMap<K, V> {
        PersistentMap::from_pairs(self.iter().cloned())
    }
}

impl EagerList<i64> {
    /// The integers from `start` up to, but excluding, `end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::persistent::EagerList;
    ///
    /// assert_eq!(EagerList::range(2, 5).to_vec(), vec![2, 3, 4]);
    /// assert!(EagerList::range(5, 2).is_empty());
    /// ```
    #[must_use]
    pub fn range(start: i64, end: i64) -> Self {
        (start..end).collect()
    }
}

impl<T: Clone + 'static> LazySequence<T> {
    /// Collects the sequence into an [`EagerList`].
    pub fn to_list(&self) -> EagerList<T> {
        self.iter().collect()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for EagerList<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            elements: Rc::clone(&self.elements),
        }
    }
}

impl<T> Default for EagerList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for EagerList<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        Self::of(elements)
    }
}

impl<T> FromIterator<T> for EagerList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Index<usize> for EagerList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<'a, T> IntoIterator for &'a EagerList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator over an [`EagerList`], cloning out of the shared
/// slice.
pub struct IntoIter<T> {
    elements: Rc<[T]>,
    position: usize,
}

impl<T: Clone> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let element = self.elements.get(self.position)?.clone();
        self.position += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.elements.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for IntoIter<T> {}

impl<T: Clone> IntoIterator for EagerList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            elements: self.elements,
            position: 0,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for EagerList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Hashable> Hashable for EagerList<T> {
    fn hash_code(&self) -> HashKey {
        self.as_slice().hash_code()
    }
}

impl<T: Clone + 'static> MaybeIterable for EagerList<T> {
    type Element = T;

    fn try_into_pull(self) -> Result<Box<dyn Iterator<Item = T>>> {
        Ok(Box::new(self.into_iter()))
    }
}

impl<T: Clone> Semigroup for EagerList<T> {
    fn combine(self, other: Self) -> Self {
        self.concat(&other)
    }
}

impl<T: Clone> Monoid for EagerList<T> {
    fn empty() -> Self {
        Self::new()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

/// Brand of `EagerList`.
///
/// `product` is the cartesian product with the first list as the outer loop.
///
/// # Examples
///
/// ```rust
/// use funkit::persistent::{EagerList, ListKind};
/// use funkit::typeclass::Monad;
///
/// let expanded = ListKind::flat_map(EagerList::of(vec![1, 2]), |value| {
///     EagerList::of(vec![value, value * 10])
/// });
/// assert_eq!(expanded.to_vec(), vec![1, 10, 2, 20]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListKind;

impl Kind for ListKind {
    type Of<A> = EagerList<A>;
}

impl Functor for ListKind {
    fn map<A, B, F>(fa: EagerList<A>, function: F) -> EagerList<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: FnMut(A) -> B + 'static,
    {
        fa.into_iter().map(function).collect()
    }
}

impl Pure for ListKind {
    #[inline]
    fn pure<A: Clone + 'static>(value: A) -> EagerList<A> {
        EagerList::singleton(value)
    }
}

impl Applicative for ListKind {
    fn product<A, B>(fa: EagerList<A>, fb: EagerList<B>) -> EagerList<(A, B)>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        fa.iter()
            .flat_map(|first| fb.iter().map(move |second| (first.clone(), second.clone())))
            .collect()
    }
}

impl Monad for ListKind {
    fn flat_map<A, B, F>(fa: EagerList<A>, mut function: F) -> EagerList<B>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        F: FnMut(A) -> EagerList<B> + 'static,
    {
        fa.flat_map(|element| function(element.clone()))
    }
}

static_assertions::const_assert_eq!(std::mem::size_of::<ListKind>(), 0);
static_assertions::assert_not_impl_any!(EagerList<i32>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::Scalar;
    use crate::typeclass::Sum;
    use rstest::rstest;

    #[rstest]
    fn test_construction() {
        assert!(EagerList::<i32>::new().is_empty());
        assert_eq!(EagerList::singleton(1).to_vec(), vec![1]);
        assert_eq!(EagerList::from(vec![1, 2]).len(), 2);
        assert_eq!(EagerList::range(0, 3), EagerList::of(vec![0, 1, 2]));
    }

    #[rstest]
    fn test_queries() {
        let list = EagerList::of(vec![3, 1, 4, 1, 5]);
        assert_eq!(list.get(2), Some(&4));
        assert_eq!(list.get(9), None);
        assert_eq!(list.head(), Some(&3));
        assert_eq!(list.last(), Some(&5));
        assert!(list.contains(&4));
        assert_eq!(list.index_of(&1), Some(1));
        assert_eq!(list.find(|value| *value > 3), Some(&4));
        assert!(list.exists(|value| *value == 5));
        assert!(!list.all(|value| *value > 1));
        assert_eq!(EagerList::min(&list), Some(&1));
        assert_eq!(EagerList::max(&list), Some(&5));
        assert_eq!(list[4], 5);
    }

    #[rstest]
    fn test_min_by_and_max_by() {
        let words = EagerList::of(vec!["ccc", "a", "bb"]);
        assert_eq!(words.min_by(|left, right| left.len().cmp(&right.len())), Some(&"a"));
        assert_eq!(words.max_by(|left, right| left.len().cmp(&right.len())), Some(&"ccc"));
    }

    #[rstest]
    fn test_transformations_leave_original_untouched() {
        let list = EagerList::of(vec![1, 2, 3]);
        assert_eq!(list.append(4).to_vec(), vec![1, 2, 3, 4]);
        assert_eq!(list.prepend(0).to_vec(), vec![0, 1, 2, 3]);
        assert_eq!(list.reverse().to_vec(), vec![3, 2, 1]);
        assert_eq!(list.filter(|value| value % 2 == 1).to_vec(), vec![1, 3]);
        assert_eq!(list.map_indexed(|index, value| index * value).to_vec(), vec![0, 2, 6]);
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
    }

    #[rstest]
    #[case(0, vec![], vec![1, 2, 3])]
    #[case(2, vec![1, 2], vec![3])]
    #[case(5, vec![1, 2, 3], vec![])]
    fn test_take_and_drop(#[case] count: usize, #[case] taken: Vec<i32>, #[case] dropped: Vec<i32>) {
        let list = EagerList::of(vec![1, 2, 3]);
        assert_eq!(list.take(count).to_vec(), taken);
        assert_eq!(list.drop(count).to_vec(), dropped);
    }

    #[rstest]
    fn test_flat_map_and_flatten() {
        let list = EagerList::of(vec![1, 2]);
        let expanded = list.flat_map(|value| EagerList::of(vec![*value; 2]));
        assert_eq!(expanded.to_vec(), vec![1, 1, 2, 2]);
        let nested = EagerList::of(vec![EagerList::of(vec![1]), EagerList::new(), EagerList::of(vec![2, 3])]);
        assert_eq!(nested.flatten().to_vec(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_sort_is_stable() {
        let pairs = EagerList::of(vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
        let sorted = pairs.sort_by(|left, right| left.0.cmp(&right.0));
        assert_eq!(sorted.to_vec(), vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[rstest]
    fn test_unique_uses_hash_keys() {
        let list = EagerList::of(vec![Scalar::Bool(false), Scalar::Int(0), Scalar::from("0")]);
        assert_eq!(list.unique().to_vec(), vec![Scalar::Bool(false), Scalar::from("0")]);
    }

    #[rstest]
    fn test_delegated_operations() {
        let list = EagerList::of(vec![1, 2, 3, 4, 5]);
        assert_eq!(list.take_while(|value| *value < 3).to_vec(), vec![1, 2]);
        assert_eq!(list.drop_while(|value| *value < 3).to_vec(), vec![3, 4, 5]);
        assert_eq!(
            list.zip(&EagerList::of(vec!['a', 'b'])).to_vec(),
            vec![(1, 'a'), (2, 'b')]
        );
        assert_eq!(
            list.chunk(2).to_vec(),
            vec![EagerList::of(vec![1, 2]), EagerList::of(vec![3, 4]), EagerList::of(vec![5])]
        );
        assert_eq!(list.scan(0, |total, value| total + value).to_vec(), vec![0, 1, 3, 6, 10, 15]);
    }

    #[rstest]
    #[should_panic(expected = "chunk size must be non-zero")]
    fn test_chunk_zero_panics() {
        let _ = EagerList::of(vec![1]).chunk(0);
    }

    #[rstest]
    fn test_index_later_element_wins() {
        let list = EagerList::of(vec![("a", 1), ("b", 2), ("a", 3)]);
        let indexed = list.index(|(key, _)| *key);
        assert_eq!(indexed.len(), 2);
        assert_eq!(indexed.get("a"), Some(&("a", 3)));
    }

    #[rstest]
    fn test_group_by_keeps_first_occurrence_order() {
        let list = EagerList::of(vec![1, 2, 3, 4, 5, 6]);
        let groups = list.group_by(|value| value % 3);
        assert_eq!(groups.keys().to_vec(), vec![1, 2, 0]);
        assert_eq!(groups.get(&0), Some(&EagerList::of(vec![3, 6])));
    }

    #[rstest]
    fn test_to_map() {
        let map = EagerList::of(vec![(1, "one"), (2, "two"), (1, "uno")]).to_map();
        assert_eq!(map.get_items().to_vec(), vec![(1, "uno"), (2, "two")]);
    }

    #[rstest]
    fn test_folding() {
        let list = EagerList::of(vec![1, 2, 3]);
        assert_eq!(list.fold(10, |total, value| total + value), 16);
        assert_eq!(list.reduce(|total, value| total * value), Some(6));
        assert_eq!(EagerList::<i32>::new().reduce(|total, value| total + value), None);
        assert_eq!(list.map(|value| Sum(*value)).fold_monoid(), Sum(6));
    }

    #[rstest]
    fn test_lazy_view_shares_elements() {
        let list = EagerList::of(vec![1, 2, 3]);
        let doubled = list.lazy().map(|value| value * 2);
        assert_eq!(doubled.to_list().to_vec(), vec![2, 4, 6]);
        assert_eq!(doubled.to_list().to_vec(), vec![2, 4, 6]);
    }

    #[rstest]
    fn test_hash_matches_slice() {
        let list = EagerList::of(vec![1, 2]);
        assert_eq!(crate::hash::hash_key(&list), crate::hash::hash_key(&vec![1, 2]));
    }

    #[rstest]
    fn test_list_kind_product_is_cartesian() {
        let pairs = ListKind::product(EagerList::of(vec![1, 2]), EagerList::of(vec!['x', 'y']));
        assert_eq!(pairs.to_vec(), vec![(1, 'x'), (1, 'y'), (2, 'x'), (2, 'y')]);
    }

    #[rstest]
    fn test_list_kind_sequence() {
        let lists = vec![EagerList::of(vec![1, 2]), EagerList::of(vec![3])];
        let combinations = ListKind::sequence(lists);
        assert_eq!(combinations.to_vec(), vec![vec![1, 3], vec![2, 3]]);
    }

    #[rstest]
    fn test_semigroup_concatenates() {
        let combined = EagerList::of(vec![1]).combine(EagerList::of(vec![2]));
        assert_eq!(combined.to_vec(), vec![1, 2]);
    }

    #[rstest]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", EagerList::of(vec![1, 2])), "[1, 2]");
    }
}
