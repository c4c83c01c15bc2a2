//! Computational contexts.
//!
//! - `Option`: the standard optional value, with [`OptionKind`] and
//!   [`OptionExt`]
//! - [`Either`]: a right-biased disjoint union
//! - [`Try`]: the outcome of a computation that may panic or fail
//! - [`LazySequence`]: a deferred, possibly infinite sequence
//! - [`Extract`]: forcing the value out of a single-value context
//!
//! Every context has a brand implementing the type classes of
//! [`typeclass`](crate::typeclass).
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::{Either, Extract, OptionExt, Try};
//!
//! let configured: Option<u16> = Some(8080);
//! let port = configured.to_either("no port configured").map(|port| port + 1);
//! assert_eq!(port, Either::Right(8081));
//!
//! let parsed = Try::from_result(|| "x".parse::<u16>());
//! assert!(parsed.get_unsafe().is_err());
//! ```

mod attempt;
mod either;
mod extract;
mod lazy_sequence;
mod option;

pub use attempt::{Try, TryKind};
pub use either::{Either, EitherKind};
pub use extract::Extract;
pub use lazy_sequence::{LazyIter, LazyKind, LazySequence, MaybeIterable, PullState};
pub use option::{OptionExt, OptionKind};

static_assertions::const_assert_eq!(std::mem::size_of::<OptionKind>(), 0);
static_assertions::const_assert_eq!(std::mem::size_of::<EitherKind<String>>(), 0);
static_assertions::const_assert_eq!(std::mem::size_of::<TryKind>(), 0);
static_assertions::const_assert_eq!(std::mem::size_of::<LazyKind>(), 0);
static_assertions::assert_not_impl_any!(LazySequence<i32>: Send, Sync);
