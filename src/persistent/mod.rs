//! Persistent (immutable) data structures.
//!
//! - [`PersistentMap`]: an insertion-ordered map keyed by canonical hash
//!   keys
//! - [`EagerList`]: an eagerly evaluated list over a shared slice
//!
//! Both share their storage through `Rc`: cloning is O(1) and every
//! operation returns a new value, leaving the receiver unchanged.
//!
//! # Examples
//!
//! ```rust
//! use funkit::persistent::{EagerList, PersistentMap};
//!
//! let inventory = PersistentMap::from_pairs([("bolts", 120), ("nuts", 80)]);
//! let restocked = inventory.insert("washers", 300);
//!
//! assert_eq!(inventory.len(), 2);
//! assert_eq!(restocked.len(), 3);
//!
//! let low: EagerList<&str> = restocked
//!     .filter(|count, _| *count < 100)
//!     .keys();
//! assert_eq!(low.to_vec(), vec!["nuts"]);
//! ```

mod list;
mod map;

pub use list::{EagerList, IntoIter as ListIntoIter, ListKind};
pub use map::{IntoIter, Iter, PersistentMap};
