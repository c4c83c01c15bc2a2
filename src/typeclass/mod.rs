//! Type classes shared by every context of the crate.
//!
//! - [`Functor`]: mapping over context values
//! - [`Pure`]: lifting a plain value into a context
//! - [`Applicative`]: combining independent contexts, with the derived
//!   `ap`, `map2`, `sequence` and `traverse`
//! - [`Monad`]: sequencing dependent computations
//! - [`Semigroup`] and [`Monoid`]: associative combination with identity
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not support higher-kinded types. Each context is represented by
//! a zero-sized brand implementing [`Kind`], and the type classes are
//! implemented on the brand:
//!
//! | Brand            | `Of<A>`              |
//! |------------------|----------------------|
//! | [`IdentityKind`] | `A`                  |
//! | `OptionKind`     | `Option<A>`          |
//! | `EitherKind<L>`  | `Either<L, A>`       |
//! | `TryKind`        | `Try<A>`             |
//! | `ListKind`       | `EagerList<A>`       |
//! | `LazyKind`       | `LazySequence<A>`    |
//!
//! # Examples
//!
//! ## Writing code once for every context
//!
//! ```rust
//! use funkit::control::{Either, EitherKind, OptionKind};
//! use funkit::typeclass::{Applicative, Of};
//!
//! fn add_all<K: Applicative>(values: Vec<Of<K, i32>>) -> Of<K, i32> {
//!     K::map::<Vec<i32>, i32, _>(K::sequence::<i32, _>(values), |numbers| numbers.iter().sum())
//! }
//!
//! assert_eq!(add_all::<OptionKind>(vec![Some(1), Some(2)]), Some(3));
//!
//! let failed: Either<&str, i32> = add_all::<EitherKind<&str>>(vec![
//!     Either::Right(1),
//!     Either::Left("bad input"),
//! ]);
//! assert_eq!(failed, Either::Left("bad input"));
//! ```
//!
//! ## Lifting a function
//!
//! ```rust
//! use funkit::control::OptionKind;
//! use funkit::lift;
//!
//! let multiply = lift!(OptionKind, |left: i32, right: i32| left * right);
//! assert_eq!(multiply(Some(6), Some(7)), Some(42));
//! ```

mod applicative;
mod functor;
mod higher;
mod identity;
mod lift;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use applicative::{Applicative, Pure};
pub use functor::Functor;
pub use higher::{Kind, Of};
pub use identity::IdentityKind;
pub use lift::lift_n;
pub use monad::{Monad, ap_via_flat_map};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Product, Sum};

static_assertions::const_assert_eq!(std::mem::size_of::<IdentityKind>(), 0);
