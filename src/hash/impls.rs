//! `Hashable` implementations for standard library types.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::rc::Rc;

use super::{HashKey, Hashable};

// =============================================================================
// Null and Booleans
// =============================================================================

impl Hashable for () {
    #[inline]
    fn hash_code(&self) -> HashKey {
        HashKey::null()
    }

    fn render_key(&self) -> String {
        "null".to_string()
    }
}

impl Hashable for bool {
    #[inline]
    fn hash_code(&self) -> HashKey {
        HashKey::Int(i64::from(*self))
    }

    fn render_key(&self) -> String {
        self.to_string()
    }
}

// =============================================================================
// Numbers
// =============================================================================

macro_rules! impl_hashable_for_small_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Hashable for $integer {
                #[inline]
                fn hash_code(&self) -> HashKey {
                    HashKey::Int(i64::from(*self))
                }

                fn render_key(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

macro_rules! impl_hashable_for_wide_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Hashable for $integer {
                fn hash_code(&self) -> HashKey {
                    i64::try_from(*self)
                        .map_or_else(|_| HashKey::Wide(self.to_string()), HashKey::Int)
                }

                fn render_key(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_hashable_for_small_integer!(i8, i16, i32, i64, u8, u16, u32);
impl_hashable_for_wide_integer!(isize, usize, u64, i128, u128);

impl Hashable for f64 {
    #[inline]
    fn hash_code(&self) -> HashKey {
        HashKey::float(*self)
    }

    fn render_key(&self) -> String {
        self.to_string()
    }
}

/// Widened exactly to `f64`, so an `f32` key only meets an `f64` key of
/// the same value. `0.5_f32` finds `0.5_f64`; `0.1_f32` does not find
/// `0.1_f64`, which is a different number.
impl Hashable for f32 {
    #[inline]
    fn hash_code(&self) -> HashKey {
        HashKey::float(f64::from(*self))
    }

    fn render_key(&self) -> String {
        self.to_string()
    }
}

// =============================================================================
// Text
// =============================================================================

impl Hashable for str {
    #[inline]
    fn hash_code(&self) -> HashKey {
        HashKey::Str(self.to_string())
    }

    fn render_key(&self) -> String {
        self.to_string()
    }
}

impl Hashable for String {
    #[inline]
    fn hash_code(&self) -> HashKey {
        self.as_str().hash_code()
    }

    fn render_key(&self) -> String {
        self.clone()
    }
}

impl Hashable for char {
    fn hash_code(&self) -> HashKey {
        HashKey::Str(self.to_string())
    }

    fn render_key(&self) -> String {
        self.to_string()
    }
}

impl Hashable for Cow<'_, str> {
    fn hash_code(&self) -> HashKey {
        self.as_ref().hash_code()
    }

    fn render_key(&self) -> String {
        self.to_string()
    }
}

// =============================================================================
// Pointers and Options
// =============================================================================

impl<T: Hashable + ?Sized> Hashable for &T {
    #[inline]
    fn hash_code(&self) -> HashKey {
        (**self).hash_code()
    }

    fn render_key(&self) -> String {
        (**self).render_key()
    }
}

impl<T: Hashable + ?Sized> Hashable for Box<T> {
    #[inline]
    fn hash_code(&self) -> HashKey {
        (**self).hash_code()
    }

    fn render_key(&self) -> String {
        (**self).render_key()
    }
}

// Rc hashes by value; wrap in ByAddress for identity.
impl<T: Hashable + ?Sized> Hashable for Rc<T> {
    #[inline]
    fn hash_code(&self) -> HashKey {
        (**self).hash_code()
    }

    fn render_key(&self) -> String {
        (**self).render_key()
    }
}

impl<T: Hashable> Hashable for Option<T> {
    fn hash_code(&self) -> HashKey {
        self.as_ref().map_or_else(HashKey::null, Hashable::hash_code)
    }

    fn render_key(&self) -> String {
        self.as_ref()
            .map_or_else(|| "null".to_string(), Hashable::render_key)
    }
}

// =============================================================================
// Sequences
// =============================================================================

impl<T: Hashable> Hashable for [T] {
    fn hash_code(&self) -> HashKey {
        HashKey::sequence(self.iter().map(Hashable::hash_code))
    }
}

impl<T: Hashable, const N: usize> Hashable for [T; N] {
    fn hash_code(&self) -> HashKey {
        self.as_slice().hash_code()
    }
}

impl<T: Hashable> Hashable for Vec<T> {
    fn hash_code(&self) -> HashKey {
        self.as_slice().hash_code()
    }
}

impl<T: Hashable> Hashable for VecDeque<T> {
    fn hash_code(&self) -> HashKey {
        HashKey::sequence(self.iter().map(Hashable::hash_code))
    }
}

macro_rules! impl_hashable_for_tuple {
    ($(($($name:ident),+)),* $(,)?) => {
        $(
            impl<$($name: Hashable),+> Hashable for ($($name,)+) {
                #[allow(non_snake_case)]
                fn hash_code(&self) -> HashKey {
                    let ($($name,)+) = self;
                    HashKey::sequence([$($name.hash_code()),+])
                }
            }
        )*
    };
}

impl_hashable_for_tuple!((A, B), (A, B, C), (A, B, C, D), (A, B, C, D, E));
