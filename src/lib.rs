//! # funkit
//!
//! A functional programming toolkit for Rust built around canonical key
//! hashing, a persistent ordered map and lazy sequences.
//!
//! ## Overview
//!
//! - **Hashing**: every key reduces to a canonical [`HashKey`](hash::HashKey),
//!   so scalars, strings, sequences and user types can all index a map
//! - **Type Classes**: Functor, Applicative, Monad, Semigroup and Monoid over
//!   emulated higher kinds, plus the [`lift!`] macro
//! - **Control Structures**: [`Either`](control::Either), [`Try`](control::Try)
//!   and [`LazySequence`](control::LazySequence)
//! - **Persistent Data Structures**: [`PersistentMap`](persistent::PersistentMap)
//!   and [`EagerList`](persistent::EagerList)
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: Computational contexts (Either, Try, `LazySequence`)
//! - `persistent`: Persistent data structures
//! - `fxhash`: Index maps with `rustc_hash`'s hasher instead of `RandomState`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use funkit::prelude::*;
//!
//! let scores = PersistentMap::from_pairs([("ann", 7), ("bob", 9)]);
//! let total = scores.values().fold(0, |sum, score| sum + score);
//! assert_eq!(total, 16);
//!
//! let both = OptionKind::map2(scores.get("ann").copied(), scores.get("bob").copied(), |a, b| a * b);
//! assert_eq!(both, Some(63));
//!
//! let evens = LazySequence::range(0).filter(|number| number % 2 == 0).take(3);
//! assert_eq!(evens.to_list(), EagerList::of(vec![0, 2, 4]));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use funkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::hash::{ByAddress, HashKey, Hashable, Scalar, hash_key};

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

pub mod error;
pub mod hash;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "persistent")]
pub mod persistent;

pub use error::{Error, Result};
