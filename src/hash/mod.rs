//! Canonical key hashing.
//!
//! Every value that can index a [`PersistentMap`](crate::persistent::PersistentMap)
//! is reduced to a [`HashKey`]: an integer, float, string, sequence or
//! identity token. Keys of different variants never compare equal.
//! The reduction is total and deterministic within a run:
//!
//! | Value                        | Key                                   |
//! |------------------------------|---------------------------------------|
//! | `()`, `None`, `Scalar::Null` | `Str("")`                             |
//! | `bool`                       | `Int(0)` / `Int(1)`                   |
//! | integers                     | `Int` (`Wide` decimal if out of range) |
//! | floats                       | `Float` (normalised bits)             |
//! | `str`, `String`, `char`      | `Str`                                 |
//! | slices, vectors, tuples      | `Sequence` of the element keys        |
//! | [`ByAddress`]                | `Identity` (pointer address)          |
//! | custom [`Hashable`] types    | whatever `hash_code` returns          |
//!
//! # Boolean keys
//!
//! Booleans canonicalise to the integers `0` and `1`, so `false` and `0`
//! (or `true` and `1`) name the same map entry. The later write wins.
//!
//! ```rust
//! use funkit::hash::{hash_key, HashKey, Scalar};
//!
//! assert_eq!(hash_key(&true), HashKey::Int(1));
//! assert_eq!(hash_key(&Scalar::Bool(false)), hash_key(&Scalar::Int(0)));
//! ```
//!
//! # Custom identity
//!
//! ```rust
//! use funkit::hash::{hash_key, HashKey, Hashable};
//!
//! struct Point {
//!     x: i64,
//!     y: i64,
//! }
//!
//! impl Hashable for Point {
//!     fn hash_code(&self) -> HashKey {
//!         hash_key(&(self.x, self.y))
//!     }
//! }
//!
//! assert_eq!(hash_key(&Point { x: 1, y: 2 }), hash_key(&Point { x: 1, y: 2 }));
//! assert_eq!(Point { x: 1, y: 2 }.render_key(), format!("Point keyhash:{}", hash_key(&(1, 2))));
//! ```

use std::fmt;
use std::fmt::Write as _;

mod identity;
mod impls;
mod scalar;

pub use identity::ByAddress;
pub use scalar::Scalar;

/// The canonical index of a value inside a map.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HashKey {
    /// Integers and booleans.
    Int(i64),
    /// Floats, stored as normalised IEEE-754 bits.
    Float(u64),
    /// Strings and null.
    Str(String),
    /// Integers outside the `i64` range, in decimal.
    Wide(String),
    /// Ordered sequences, serialised with tagged element keys.
    Sequence(String),
    /// Pointer identity of a shared allocation.
    Identity(usize),
}

impl HashKey {
    /// The key of a null value.
    #[inline]
    #[must_use]
    pub const fn null() -> Self {
        Self::Str(String::new())
    }

    /// Builds the key of a float, folding `-0.0` into `0.0` and every NaN
    /// into a single NaN.
    #[must_use]
    pub fn float(value: f64) -> Self {
        let normalised = if value == 0.0 {
            0.0
        } else if value.is_nan() {
            f64::NAN
        } else {
            value
        };
        Self::Float(normalised.to_bits())
    }

    /// Serialises an ordered sequence of keys into a single sequence key.
    ///
    /// Each element is written with a type tag and, for strings, a length
    /// prefix, so distinct sequences never serialise alike. The result is a
    /// [`HashKey::Sequence`], so no string key can equal it.
    pub fn sequence<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut body = String::new();
        let mut count = 0usize;
        for key in keys {
            key.serialise_into(&mut body);
            count += 1;
        }
        Self::Sequence(format!("a:{count}:{{{body}}}"))
    }

    fn serialise_into(&self, buffer: &mut String) {
        // Writing into a String cannot fail.
        let _ = match self {
            Self::Int(value) => write!(buffer, "i:{value};"),
            Self::Float(bits) => write!(buffer, "d:{bits};"),
            Self::Str(value) => write!(buffer, "s:{}:\"{value}\";", value.len()),
            Self::Wide(digits) => write!(buffer, "w:{digits};"),
            Self::Sequence(nested) => buffer.write_str(nested),
            Self::Identity(address) => write!(buffer, "o:{address};"),
        };
    }
}

impl fmt::Display for HashKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Float(bits) => write!(formatter, "{}", f64::from_bits(*bits)),
            Self::Str(value) | Self::Wide(value) | Self::Sequence(value) => {
                write!(formatter, "{value}")
            }
            Self::Identity(address) => write!(formatter, "#{address:x}"),
        }
    }
}

/// A value that can be reduced to a [`HashKey`].
///
/// Scalars, strings, sequences and tuples implement this trait out of the
/// box. Implement it on your own types to give them value-based key identity;
/// wrap shared objects in [`ByAddress`] to key them by identity instead.
///
/// The key of a value must not change while the value is used as a map key.
pub trait Hashable {
    /// Returns the canonical key of this value.
    fn hash_code(&self) -> HashKey;

    /// Renders the value for error messages.
    ///
    /// The default renders `TypeName keyhash:<hash>`. Scalars override it
    /// to render themselves verbatim.
    fn render_key(&self) -> String {
        format!(
            "{} keyhash:{}",
            short_type_name(std::any::type_name::<Self>()),
            self.hash_code()
        )
    }
}

/// Computes the canonical key of a value.
///
/// # Examples
///
/// ```rust
/// use funkit::hash::{hash_key, HashKey};
///
/// assert_eq!(hash_key(&42), HashKey::Int(42));
/// assert_eq!(hash_key("abc"), HashKey::Str("abc".to_string()));
/// assert_eq!(hash_key(&None::<i32>), HashKey::null());
/// assert_eq!(hash_key(&vec![1, 2]), hash_key(&[1, 2]));
/// ```
#[inline]
pub fn hash_key<T: Hashable + ?Sized>(value: &T) -> HashKey {
    value.hash_code()
}

/// Strips module paths from a type name, and the generic arguments of a
/// named type. Tuples, arrays and references keep their structure.
fn short_type_name(full: &str) -> String {
    let starts_with_name = full
        .chars()
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_');
    let base = if starts_with_name {
        full.split('<').next().unwrap_or(full)
    } else {
        full
    };

    let mut short = String::with_capacity(base.len());
    let mut path = String::new();
    for character in base.chars() {
        if character.is_alphanumeric() || character == '_' || character == ':' {
            path.push(character);
        } else {
            short.push_str(path.rsplit("::").next().unwrap_or(&path));
            path.clear();
            short.push(character);
        }
    }
    short.push_str(path.rsplit("::").next().unwrap_or(&path));
    short
}
