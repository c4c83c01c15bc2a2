//! Lifting plain functions into contexts.
//!
//! [`lift!`](crate::lift!) turns a closure of any fixed arity into a closure
//! over wrapped arguments. [`lift_n`] does the same for functions whose arity
//! is only known at run time.

use crate::error::{Error, Result};

use super::applicative::Applicative;
use super::higher::Of;

/// Lifts a closure over plain values into a closure over contexts.
///
/// `lift!(Brand, |a: A, b: B| body)` returns a closure taking
/// `Of<Brand, A>` and `Of<Brand, B>`. It curries the body, wraps the curried
/// function with `pure` and folds `ap` over the arguments in order. Every
/// parameter needs a type annotation, and parameter types must be `Clone`.
///
/// The lifted closure re-creates the curried function on each call, so it
/// can be called repeatedly as long as whatever the body captures is `Copy`.
///
/// # Examples
///
/// ```rust
/// use funkit::control::OptionKind;
/// use funkit::lift;
///
/// let add = lift!(OptionKind, |left: i32, right: i32| left + right);
/// assert_eq!(add(Some(1), Some(2)), Some(3));
/// assert_eq!(add(Some(1), None), None);
///
/// let describe = lift!(OptionKind, |name: String, age: u32, city: &'static str| {
///     format!("{name} ({age}) from {city}")
/// });
/// assert_eq!(
///     describe(Some("Ada".to_string()), Some(36), Some("London")),
///     Some("Ada (36) from London".to_string())
/// );
/// ```
#[macro_export]
macro_rules! lift {
    ($kind:ty, |$($param:ident : $ty:ty),+ $(,)?| $body:expr) => {
        move |$($param: <$kind as $crate::typeclass::Kind>::Of<$ty>),+| {
            let curried = $crate::lift!(@curry [] $($param: $ty),+ => $body);
            let lifted = <$kind as $crate::typeclass::Pure>::pure(curried);
            $(
                let lifted = <$kind as $crate::typeclass::Applicative>::ap(lifted, $param);
            )+
            lifted
        }
    };
    (@curry [$($bound:ident),*] $param:ident : $ty:ty => $body:expr) => {
        move |$param: $ty| {
            $( let $bound = ::core::clone::Clone::clone(&$bound); )*
            $body
        }
    };
    (@curry [$($bound:ident),*] $param:ident : $ty:ty, $($rest:ident : $rest_ty:ty),+ => $body:expr) => {
        move |$param: $ty| {
            $( let $bound = ::core::clone::Clone::clone(&$bound); )*
            $crate::lift!(@curry [$($bound,)* $param] $($rest: $rest_ty),+ => $body)
        }
    };
}

/// Lifts a function over a slice of values into a function over a vector of
/// contexts, checking the number of arguments at run time.
///
/// The returned closure yields [`Error::ArityMismatch`] when it receives a
/// different number of arguments than `arity`. Otherwise it sequences the
/// arguments and maps `function` over the collected values.
///
/// # Examples
///
/// ```rust
/// use funkit::control::OptionKind;
/// use funkit::typeclass::lift_n;
/// use funkit::Error;
///
/// let sum = lift_n::<OptionKind, i32, i32, _>(3, |values: &[i32]| values.iter().sum());
///
/// assert_eq!(sum(vec![Some(1), Some(2), Some(3)]), Ok(Some(6)));
/// assert_eq!(sum(vec![Some(1), None, Some(3)]), Ok(None));
/// assert_eq!(
///     sum(vec![Some(1)]),
///     Err(Error::ArityMismatch { expected: 3, actual: 1 })
/// );
/// ```
pub fn lift_n<K, A, B, F>(arity: usize, function: F) -> impl Fn(Vec<Of<K, A>>) -> Result<Of<K, B>>
where
    K: Applicative,
    A: Clone + 'static,
    B: Clone + 'static,
    F: Fn(&[A]) -> B + Clone + 'static,
{
    move |arguments: Vec<Of<K, A>>| {
        if arguments.len() != arity {
            return Err(Error::ArityMismatch {
                expected: arity,
                actual: arguments.len(),
            });
        }
        let function = function.clone();
        Ok(K::map::<Vec<A>, B, _>(
            K::sequence::<A, _>(arguments),
            move |values| function(values.as_slice()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::IdentityKind;
    use rstest::rstest;

    #[rstest]
    fn test_lift_single_argument() {
        let negate = crate::lift!(IdentityKind, |value: i32| -value);
        assert_eq!(negate(4), -4);
    }

    #[rstest]
    fn test_lift_reuses_bound_arguments() {
        let join = crate::lift!(IdentityKind, |first: String, second: String, third: String| {
            format!("{first}{second}{third}")
        });
        assert_eq!(
            join("a".to_string(), "b".to_string(), "c".to_string()),
            "abc"
        );
        assert_eq!(
            join("x".to_string(), "y".to_string(), "z".to_string()),
            "xyz"
        );
    }

    #[rstest]
    fn test_lift_n_checks_arity() {
        let product = lift_n::<IdentityKind, i64, i64, _>(2, |values: &[i64]| values.iter().product());
        assert_eq!(product(vec![3, 4]), Ok(12));
        assert_eq!(
            product(vec![3, 4, 5]),
            Err(Error::ArityMismatch {
                expected: 2,
                actual: 3
            })
        );
    }
}
