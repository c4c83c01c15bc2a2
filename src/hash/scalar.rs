//! A dynamically typed key and value.

use std::fmt;

use super::{HashKey, Hashable};

/// A dynamically typed value.
///
/// `Scalar` lets one map hold keys of different primitive kinds. Its hash
/// follows the canonical rules, so `Scalar::Bool(false)` and `Scalar::Int(0)`
/// share a key, and a `Scalar::List` hashes like the sequence of its elements.
///
/// # Examples
///
/// ```rust
/// use funkit::hash::{hash_key, Scalar};
///
/// let list = Scalar::from(vec![Scalar::from(1), Scalar::from("a")]);
/// assert_eq!(hash_key(&list), hash_key(&(1, "a")));
/// assert_eq!(list.to_string(), "[1, a]");
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Scalar {
    /// The absent value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A float.
    Float(f64),
    /// A string.
    Str(String),
    /// An ordered list of scalars.
    List(Vec<Scalar>),
}

impl Scalar {
    /// A short name of the variant, used in type mismatch errors.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::List(_) => "list",
        }
    }

    /// Returns `true` for [`Scalar::Null`].
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrows the elements of a list.
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(elements) => Some(elements),
            _ => None,
        }
    }
}

impl Hashable for Scalar {
    fn hash_code(&self) -> HashKey {
        match self {
            Self::Null => HashKey::null(),
            Self::Bool(value) => value.hash_code(),
            Self::Int(value) => HashKey::Int(*value),
            Self::Float(value) => HashKey::float(*value),
            Self::Str(value) => value.hash_code(),
            Self::List(elements) => elements.hash_code(),
        }
    }

    fn render_key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(formatter, "null"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value}"),
            Self::Str(value) => write!(formatter, "{value}"),
            Self::List(elements) => {
                write!(formatter, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{element}")?;
                }
                write!(formatter, "]")
            }
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<Self>> for Scalar {
    fn from(elements: Vec<Self>) -> Self {
        Self::List(elements)
    }
}

impl<T: Into<Self>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
