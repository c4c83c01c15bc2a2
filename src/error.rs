//! Error taxonomy shared by every module of the crate.
//!
//! All variants describe local contract violations that surface at the call
//! site that caused them, except [`Error::Panicked`] and [`Error::Raised`],
//! which carry computation failures captured by [`Try`](crate::control::Try).
//!
//! # Examples
//!
//! ```rust
//! use funkit::Error;
//!
//! let error = Error::KeyNotFound { key: "42".to_string() };
//! assert_eq!(error.to_string(), "key not found: 42");
//! ```

use std::fmt;
use std::rc::Rc;

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The errors produced by funkit.
#[derive(Error, Clone)]
pub enum Error {
    /// A map lookup through an unsafe accessor missed.
    ///
    /// `key` is the rendered representation of the offending key, see
    /// [`Hashable::render_key`](crate::hash::Hashable::render_key).
    #[error("key not found: {key}")]
    KeyNotFound {
        /// Human-readable rendering of the missing key.
        key: String,
    },

    /// A value was forced out of an empty context (`None`, `Left`, a
    /// rejected `Try::filter`).
    #[error("empty result: {context}")]
    EmptyResult {
        /// Which accessor was called on which case.
        context: &'static str,
    },

    /// An element did not have the shape an operation required.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// The shape the operation needs.
        expected: &'static str,
        /// The shape that was actually encountered.
        found: String,
    },

    /// A lifted function received a different number of arguments than it
    /// was declared with.
    #[error("arity mismatch: expected {expected} arguments, got {actual}")]
    ArityMismatch {
        /// Declared arity.
        expected: usize,
        /// Number of arguments supplied.
        actual: usize,
    },

    /// A computation wrapped by `Try` panicked.
    #[error("computation panicked: {message}")]
    Panicked {
        /// The panic payload, if it was a string.
        message: String,
    },

    /// A computation wrapped by `Try` returned an error.
    #[error("{0}")]
    Raised(Rc<dyn std::error::Error>),
}

impl Error {
    /// Wraps an arbitrary error value as [`Error::Raised`].
    ///
    /// Errors that already are an [`Error`] are kept as they are.
    pub fn raised<E>(error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error>>,
    {
        let boxed: Box<dyn std::error::Error> = error.into();
        match boxed.downcast::<Self>() {
            Ok(own) => *own,
            Err(other) => Self::Raised(Rc::from(other)),
        }
    }

    /// Name of the variant, used for equality and debugging.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::KeyNotFound { .. } => "KeyNotFound",
            Self::EmptyResult { .. } => "EmptyResult",
            Self::TypeMismatch { .. } => "TypeMismatch",
            Self::ArityMismatch { .. } => "ArityMismatch",
            Self::Panicked { .. } => "Panicked",
            Self::Raised(_) => "Raised",
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}({self})", self.kind())
    }
}

// Raised errors are compared through their rendering.
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::KeyNotFound { key: left }, Self::KeyNotFound { key: right }) => left == right,
            (Self::EmptyResult { context: left }, Self::EmptyResult { context: right }) => {
                left == right
            }
            (
                Self::TypeMismatch {
                    expected: left_expected,
                    found: left_found,
                },
                Self::TypeMismatch {
                    expected: right_expected,
                    found: right_found,
                },
            ) => left_expected == right_expected && left_found == right_found,
            (
                Self::ArityMismatch {
                    expected: left_expected,
                    actual: left_actual,
                },
                Self::ArityMismatch {
                    expected: right_expected,
                    actual: right_actual,
                },
            ) => left_expected == right_expected && left_actual == right_actual,
            (Self::Panicked { message: left }, Self::Panicked { message: right }) => left == right,
            (Self::Raised(left), Self::Raised(right)) => left.to_string() == right.to_string(),
            _ => false,
        }
    }
}
