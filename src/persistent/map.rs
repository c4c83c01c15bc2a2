//! Persistent hash-keyed map preserving insertion order.
//!
//! [`PersistentMap`] indexes every entry by the canonical [`HashKey`] of its
//! key, so any [`Hashable`] value can be a key, including values that have no
//! `Hash`/`Eq` of their own. Key and value are stored together in one entry.
//! Iteration follows the order in which each hash key was first inserted.
//!
//! Every operation returns a new map and leaves the receiver untouched.
//! The entries live behind an `Rc`, so cloning a map is O(1); an operation
//! that changes entries copies them once and edits the copy.
//!
//! # Examples
//!
//! ```rust
//! use funkit::persistent::PersistentMap;
//!
//! let prices = PersistentMap::from_pairs([("apple", 3), ("pear", 5)]);
//! let discounted = prices.map_values(|price, _| price - 1);
//!
//! assert_eq!(prices.get("apple"), Some(&3));
//! assert_eq!(discounted.get("apple"), Some(&2));
//!
//! let merged = prices.concat(&PersistentMap::singleton("apple", 4));
//! assert_eq!(merged.get("apple"), Some(&4));
//! assert_eq!(merged.keys().to_vec(), vec!["apple", "pear"]);
//! ```
//!
//! # Boolean keys
//!
//! Booleans share hash keys with `0` and `1`, so with [`Scalar`](crate::hash::Scalar)
//! keys `false` and `0` name the same entry. The later write wins with both
//! its key and its value:
//!
//! ```rust
//! use funkit::hash::Scalar;
//! use funkit::persistent::PersistentMap;
//!
//! let map = PersistentMap::from_pairs([(Scalar::Int(0), "f"), (Scalar::Bool(false), "g")]);
//! assert_eq!(map.len(), 1);
//! assert_eq!(map.get_items().to_vec(), vec![(Scalar::Bool(false), "g")]);
//! ```

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::hash::{HashKey, Hashable};

use super::list::EagerList;

#[cfg(feature = "fxhash")]
type IndexHasher = rustc_hash::FxBuildHasher;
#[cfg(not(feature = "fxhash"))]
type IndexHasher = std::hash::RandomState;

type Index<K, V> = IndexMap<HashKey, (K, V), IndexHasher>;

/// An immutable, insertion-ordered map keyed by canonical hash keys.
pub struct PersistentMap<K, V> {
    entries: Rc<Index<K, V>>,
}

impl<K, V> PersistentMap<K, V> {
    /// Creates an empty map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::persistent::PersistentMap;
    ///
    /// let map: PersistentMap<String, i32> = PersistentMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::from_index(Index::default())
    }

    fn from_index(entries: Index<K, V>) -> Self {
        Self {
            entries: Rc::new(entries),
        }
    }

    /// Returns the number of entries.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.entries.values(),
        }
    }

    /// Returns a reference to the value stored under `key`.
    ///
    /// Any probe whose canonical hash key matches finds the entry, so a
    /// `&str` finds a `String` key and `1_u8` finds an `i64` key. Floats
    /// only meet across widths when the `f32` value is exactly the `f64`
    /// one.
    ///
    /// # Complexity
    ///
    /// O(1) expected
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: Hashable + ?Sized,
    {
        self.entries.get(&key.hash_code()).map(|(_, value)| value)
    }

    /// Returns the value stored under `key`, or a [`KeyNotFound`](Error::KeyNotFound)
    /// error naming the rendered key.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] when no entry has the key's hash key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::persistent::PersistentMap;
    /// use funkit::Error;
    ///
    /// let map = PersistentMap::singleton("present", 1);
    /// assert_eq!(map.get_unsafe("present"), Ok(&1));
    /// assert_eq!(
    ///     map.get_unsafe("absent"),
    ///     Err(Error::KeyNotFound { key: "absent".to_string() })
    /// );
    /// ```
    pub fn get_unsafe<Q>(&self, key: &Q) -> Result<&V>
    where
        Q: Hashable + ?Sized,
    {
        self.get(key).ok_or_else(|| {
            let rendered = key.render_key();
            log::debug!("map lookup missed key {rendered}");
            Error::KeyNotFound { key: rendered }
        })
    }

    /// Returns `true` if an entry is stored under `key`.
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        Q: Hashable + ?Sized,
    {
        self.entries.contains_key(&key.hash_code())
    }

    /// Returns `true` if some value equals `value`.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.iter().any(|(_, candidate)| candidate == value)
    }

    /// Returns `true` if some value has the same canonical hash key as
    /// `value`.
    ///
    /// Unlike [`contains`](Self::contains), `1` and `true` match each other.
    pub fn contains_loose<Q>(&self, value: &Q) -> bool
    where
        V: Hashable,
        Q: Hashable + ?Sized,
    {
        let target = value.hash_code();
        self.iter().any(|(_, candidate)| candidate.hash_code() == target)
    }

    /// The first value accepted by `predicate`, in insertion order.
    pub fn find<P>(&self, mut predicate: P) -> Option<&V>
    where
        P: FnMut(&V, &K) -> bool,
    {
        self.iter()
            .find(|(key, value)| predicate(value, key))
            .map(|(_, value)| value)
    }

    /// The key of the first entry accepted by `predicate`.
    pub fn find_key<P>(&self, mut predicate: P) -> Option<&K>
    where
        P: FnMut(&K, &V) -> bool,
    {
        self.iter()
            .find(|(key, value)| predicate(key, value))
            .map(|(key, _)| key)
    }

    /// Returns `true` if any entry is accepted by `predicate`.
    pub fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&V, &K) -> bool,
    {
        self.iter().any(|(key, value)| predicate(value, key))
    }

    /// Returns `true` if every entry is accepted by `predicate`.
    pub fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&V, &K) -> bool,
    {
        self.iter().all(|(key, value)| predicate(value, key))
    }

    /// Runs `action` on every entry in insertion order.
    pub fn each<F>(&self, mut action: F)
    where
        F: FnMut(&V, &K),
    {
        for (key, value) in self {
            action(value, key);
        }
    }

    /// Transforms every entry into one list element.
    pub fn map<B, F>(&self, mut function: F) -> EagerList<B>
    where
        F: FnMut(&V, &K) -> B,
    {
        self.iter().map(|(key, value)| function(value, key)).collect()
    }

    /// Folds every entry into an accumulator, in insertion order.
    pub fn reduce<A, F>(&self, initial: A, mut function: F) -> A
    where
        F: FnMut(A, &V, &K) -> A,
    {
        self.iter()
            .fold(initial, |accumulator, (key, value)| function(accumulator, value, key))
    }
}

impl<K: Clone, V: Clone> PersistentMap<K, V> {
    /// Creates a map holding one entry.
    #[must_use]
    pub fn singleton(key: K, value: V) -> Self
    where
        K: Hashable,
    {
        let mut builder = MapBuilder::new();
        builder.insert(key, value);
        builder.freeze()
    }

    /// Builds a map from key-value pairs. For pairs sharing a hash key the
    /// later pair wins, at the position of the first.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        K: Hashable,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut builder = MapBuilder::new();
        for (key, value) in pairs {
            builder.insert(key, value);
        }
        builder.freeze()
    }

    /// Returns a map with `key` bound to `value`.
    ///
    /// An existing entry with the same hash key keeps its position and takes
    /// the new key and value.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn insert(&self, key: K, value: V) -> Self
    where
        K: Hashable,
    {
        let mut entries = Rc::clone(&self.entries);
        insert_entry(Rc::make_mut(&mut entries), key, value);
        Self { entries }
    }

    /// The value stored under `key`, or `default`.
    pub fn get_or_else<Q>(&self, key: &Q, default: V) -> V
    where
        Q: Hashable + ?Sized,
    {
        self.get(key).cloned().unwrap_or(default)
    }

    /// Re-keys every entry. Entries whose new keys collide keep the later
    /// entry.
    pub fn map_keys<B, F>(&self, mut function: F) -> PersistentMap<B, V>
    where
        B: Hashable + Clone,
        F: FnMut(&K, &V) -> B,
    {
        let mut builder = MapBuilder::with_capacity(self.len());
        for (key, value) in self {
            builder.insert(function(key, value), value.clone());
        }
        builder.freeze()
    }

    /// Transforms every value, keeping keys and order.
    pub fn map_values<B, F>(&self, mut function: F) -> PersistentMap<K, B>
    where
        F: FnMut(&V, &K) -> B,
    {
        let entries = self
            .entries
            .iter()
            .map(|(hash, (key, value))| (hash.clone(), (key.clone(), function(value, key))))
            .collect();
        PersistentMap::from_index(entries)
    }

    /// Keeps the entries accepted by `predicate`.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&V, &K) -> bool,
    {
        self.retain(|_, (key, value)| predicate(value, key))
    }

    /// Keeps the entries whose key is accepted by `predicate`.
    #[must_use]
    pub fn filter_keys<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&K) -> bool,
    {
        self.retain(|_, (key, _)| predicate(key))
    }

    fn retain<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&HashKey, &(K, V)) -> bool,
    {
        let entries = self
            .entries
            .iter()
            .filter(|(hash, entry)| predicate(hash, entry))
            .map(|(hash, entry)| (hash.clone(), entry.clone()))
            .collect();
        Self::from_index(entries)
    }

    /// Merges `other` into this map. For shared hash keys the entry of
    /// `other` wins, at the position it has in `self`.
    ///
    /// # Complexity
    ///
    /// O(n + m)
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        let mut entries = (*self.entries).clone();
        entries.reserve(other.len());
        for (hash, entry) in other.entries.iter() {
            if entries.insert(hash.clone(), entry.clone()).is_some() {
                log::trace!("concat replaced the entry for hash key {hash}");
            }
        }
        Self::from_index(entries)
    }

    /// Removes the entries that `other` holds under the same hash key with
    /// an equal value.
    #[must_use]
    pub fn minus(&self, other: &Self) -> Self
    where
        V: PartialEq,
    {
        self.retain(|hash, (_, value)| {
            other
                .entries
                .get(hash)
                .is_none_or(|(_, other_value)| other_value != value)
        })
    }

    /// Removes the entries stored under any of `keys`. Absent keys are
    /// ignored.
    #[must_use]
    pub fn without_keys<Q, I>(&self, keys: I) -> Self
    where
        Q: Hashable,
        I: IntoIterator<Item = Q>,
    {
        let removed: HashSet<HashKey> = keys.into_iter().map(|key| key.hash_code()).collect();
        if removed.is_empty() {
            return self.clone();
        }
        self.retain(|hash, _| !removed.contains(hash))
    }

    /// Removes the entry stored under `key`, if any.
    #[must_use]
    pub fn without_key<Q>(&self, key: &Q) -> Self
    where
        Q: Hashable + ?Sized,
    {
        let hash = key.hash_code();
        if !self.entries.contains_key(&hash) {
            return self.clone();
        }
        let mut entries = Rc::clone(&self.entries);
        Rc::make_mut(&mut entries).shift_remove(&hash);
        Self { entries }
    }

    /// The entries stored under `keys`, in the order of `keys`. Missing keys
    /// are skipped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::persistent::PersistentMap;
    ///
    /// let map = PersistentMap::from_pairs([("a", 1), ("b", 2), ("c", 3)]);
    /// let picked = map.get_by_keys(["c", "x", "a"]);
    /// assert_eq!(picked.get_items().to_vec(), vec![("c", 3), ("a", 1)]);
    /// ```
    pub fn get_by_keys<Q, I>(&self, keys: I) -> Self
    where
        Q: Hashable,
        I: IntoIterator<Item = Q>,
    {
        let entries = keys
            .into_iter()
            .filter_map(|key| {
                let hash = key.hash_code();
                self.entries
                    .get(&hash)
                    .map(|entry| (hash, entry.clone()))
            })
            .collect();
        Self::from_index(entries)
    }

    /// Sorts the entries by key.
    #[must_use]
    pub fn sort_keys(&self) -> Self
    where
        K: Ord,
    {
        self.sort_keys_by(K::cmp)
    }

    /// Sorts the entries by key with a comparator. The sort is stable.
    #[must_use]
    pub fn sort_keys_by<C>(&self, mut comparator: C) -> Self
    where
        C: FnMut(&K, &K) -> Ordering,
    {
        self.sort_entries_by(|(left, _), (right, _)| comparator(left, right))
    }

    /// Sorts the entries by value.
    #[must_use]
    pub fn sort_values(&self) -> Self
    where
        V: Ord,
    {
        self.sort_values_by(V::cmp)
    }

    /// Sorts the entries by value with a comparator. The sort is stable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funkit::persistent::PersistentMap;
    ///
    /// let scores = PersistentMap::from_pairs([("ann", 7), ("bob", 9), ("cid", 7)]);
    /// let ranked = scores.sort_values_by(|left, right| right.cmp(left));
    /// assert_eq!(ranked.keys().to_vec(), vec!["bob", "ann", "cid"]);
    /// ```
    #[must_use]
    pub fn sort_values_by<C>(&self, mut comparator: C) -> Self
    where
        C: FnMut(&V, &V) -> Ordering,
    {
        self.sort_entries_by(|(_, left), (_, right)| comparator(left, right))
    }

    fn sort_entries_by<C>(&self, mut comparator: C) -> Self
    where
        C: FnMut(&(K, V), &(K, V)) -> Ordering,
    {
        let mut entries = (*self.entries).clone();
        entries.sort_by(|_, left, _, right| comparator(left, right));
        Self::from_index(entries)
    }

    /// Splits the map into maps of `size` entries; the last may be smaller.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn chunk(&self, size: usize) -> EagerList<Self> {
        assert!(size != 0, "chunk size must be non-zero");
        let entries: Vec<_> = self.entries.iter().collect();
        entries
            .chunks(size)
            .map(|chunk| {
                Self::from_index(
                    chunk
                        .iter()
                        .map(|(hash, entry)| ((*hash).clone(), (*entry).clone()))
                        .collect(),
                )
            })
            .collect()
    }

    /// The keys in insertion order.
    pub fn keys(&self) -> EagerList<K> {
        self.iter().map(|(key, _)| key.clone()).collect()
    }

    /// The values in insertion order.
    pub fn values(&self) -> EagerList<V> {
        self.iter().map(|(_, value)| value.clone()).collect()
    }

    /// The key-value pairs in insertion order.
    pub fn get_items(&self) -> EagerList<(K, V)> {
        self.entries.values().cloned().collect()
    }
}

fn insert_entry<K: Hashable, V>(entries: &mut Index<K, V>, key: K, value: V) {
    let hash = key.hash_code();
    if entries.insert(hash, (key, value)).is_some() {
        log::trace!("insert replaced an existing entry for the same hash key");
    }
}

// =============================================================================
// Builder
// =============================================================================

/// The mutable form of a map, used while one is being constructed.
pub(crate) struct MapBuilder<K, V> {
    entries: Index<K, V>,
}

impl<K: Hashable, V> MapBuilder<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Index::default(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Index::with_capacity_and_hasher(capacity, IndexHasher::default()),
        }
    }

    /// Binds `key` to `value`; a later write under the same hash key wins.
    pub(crate) fn insert(&mut self, key: K, value: V) {
        insert_entry(&mut self.entries, key, value);
    }

    /// The value stored under `key`, inserting `default()` first when the
    /// key is new. An existing entry keeps its original key.
    pub(crate) fn entry_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        &mut self
            .entries
            .entry(key.hash_code())
            .or_insert_with(|| (key, default()))
            .1
    }

    pub(crate) fn freeze(self) -> PersistentMap<K, V> {
        PersistentMap::from_index(self.entries)
    }

    /// Freezes the builder, transforming every value on the way.
    pub(crate) fn freeze_with<B, F>(self, mut function: F) -> PersistentMap<K, B>
    where
        F: FnMut(V) -> B,
    {
        PersistentMap::from_index(
            self.entries
                .into_iter()
                .map(|(hash, (key, value))| (hash, (key, function(value))))
                .collect(),
        )
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the entries of a [`PersistentMap`].
pub struct Iter<'a, K, V> {
    inner: indexmap::map::Values<'a, HashKey, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, value)| (key, value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

/// An owning iterator over the entries of a [`PersistentMap`].
pub struct IntoIter<K, V> {
    inner: indexmap::map::IntoValues<HashKey, (K, V)>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Clone for PersistentMap<K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            entries: Rc::clone(&self.entries),
        }
    }
}

impl<K, V> Default for PersistentMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hashable + Clone, V: Clone> FromIterator<(K, V)> for PersistentMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

impl<K: Clone, V: Clone> IntoIterator for PersistentMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        let entries = Rc::try_unwrap(self.entries).unwrap_or_else(|shared| (*shared).clone());
        IntoIter {
            inner: entries.into_values(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a PersistentMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Maps are equal when they hold the same entries, in any order.
impl<K: PartialEq, V: PartialEq> PartialEq for PersistentMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        if Rc::ptr_eq(&self.entries, &other.entries) {
            return true;
        }
        self.len() == other.len()
            && self.entries.iter().all(|(hash, (key, value))| {
                other
                    .entries
                    .get(hash)
                    .is_some_and(|(other_key, other_value)| other_key == key && other_value == value)
            })
    }
}

impl<K: Eq, V: Eq> Eq for PersistentMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for PersistentMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

static_assertions::assert_not_impl_any!(PersistentMap<i32, i32>: Send, Sync);
