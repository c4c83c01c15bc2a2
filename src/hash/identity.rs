//! Identity-keyed shared objects.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::rc::Rc;

use super::{HashKey, Hashable};

/// A shared object keyed by the address of its allocation.
///
/// Two `ByAddress` values are equal, and hash alike, exactly when they point
/// to the same allocation. The token is unique among live allocations; an
/// address freed and reused later may produce the same token again.
///
/// # Examples
///
/// ```rust
/// use funkit::hash::{hash_key, ByAddress, Hashable};
/// use std::rc::Rc;
///
/// let shared = Rc::new(String::from("config"));
/// let first = ByAddress::new(Rc::clone(&shared));
/// let second = ByAddress::new(shared);
/// let other = ByAddress::from_value(String::from("config"));
///
/// assert_eq!(hash_key(&first), hash_key(&second));
/// assert_ne!(hash_key(&first), hash_key(&other));
/// assert_eq!(first.render_key(), "object");
/// ```
pub struct ByAddress<T: ?Sized>(Rc<T>);

impl<T: ?Sized> ByAddress<T> {
    /// Wraps a shared pointer.
    #[inline]
    pub const fn new(shared: Rc<T>) -> Self {
        Self(shared)
    }

    /// Returns the shared pointer.
    #[inline]
    pub fn into_inner(self) -> Rc<T> {
        self.0
    }

    /// The identity token of the allocation.
    #[inline]
    pub fn address(&self) -> usize {
        Rc::as_ptr(&self.0).cast::<()>().addr()
    }
}

impl<T> ByAddress<T> {
    /// Allocates `value` and wraps the new pointer.
    #[inline]
    pub fn from_value(value: T) -> Self {
        Self(Rc::new(value))
    }
}

impl<T: ?Sized> Hashable for ByAddress<T> {
    #[inline]
    fn hash_code(&self) -> HashKey {
        HashKey::Identity(self.address())
    }

    fn render_key(&self) -> String {
        "object".to_string()
    }
}

impl<T: ?Sized> Clone for ByAddress<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> PartialEq for ByAddress<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> Eq for ByAddress<T> {}

impl<T: ?Sized> Hash for ByAddress<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address().hash(state);
    }
}

impl<T: ?Sized> Deref for ByAddress<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> From<Rc<T>> for ByAddress<T> {
    fn from(shared: Rc<T>) -> Self {
        Self(shared)
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for ByAddress<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_tuple("ByAddress")
            .field(&&*self.0)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_clones_share_identity() {
        let first = ByAddress::from_value(5);
        let second = first.clone();
        assert_eq!(first, second);
        assert_eq!(first.hash_code(), second.hash_code());
    }

    #[rstest]
    fn test_equal_values_in_distinct_allocations_differ() {
        let first = ByAddress::from_value(5);
        let second = ByAddress::from_value(5);
        assert_ne!(first, second);
        assert_ne!(first.hash_code(), second.hash_code());
    }

    #[rstest]
    fn test_hash_is_stable_across_calls() {
        let object = ByAddress::from_value(vec![1, 2, 3]);
        assert_eq!(object.hash_code(), object.hash_code());
    }

    #[rstest]
    fn test_unsized_payload() {
        let shared: Rc<str> = Rc::from("text");
        let object = ByAddress::new(shared);
        assert_eq!(&*object, "text");
        assert!(matches!(object.hash_code(), HashKey::Identity(_)));
    }
}
