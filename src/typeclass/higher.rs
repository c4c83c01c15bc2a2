//! Higher-kinded type emulation through brand types.
//!
//! Rust has no way to abstract over a type constructor such as `Option<_>`
//! directly. Each context therefore gets a zero-sized *brand* implementing
//! [`Kind`], whose generic associated type `Of<A>` names the context applied
//! to `A`. Type classes are implemented on the brand, so one generic function
//! can work over `Option`, `Either`, `Try`, lists and lazy sequences alike.
//!
//! # Examples
//!
//! ```rust
//! use funkit::control::OptionKind;
//! use funkit::typeclass::{Kind, Of};
//!
//! fn nothing<K: Kind, A>() -> Of<K, A>
//! where
//!     Of<K, A>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Option<String> = nothing::<OptionKind, String>();
//! assert_eq!(none, None);
//! ```

/// A brand standing for a unary type constructor.
///
/// Brands carry no data. The constructor they stand for is `Of<A>`, for
/// example `OptionKind::Of<A> = Option<A>`.
pub trait Kind {
    /// The type constructor applied to `A`.
    type Of<A>;
}

/// Shorthand for `<K as Kind>::Of<A>`.
pub type Of<K, A> = <K as Kind>::Of<A>;
