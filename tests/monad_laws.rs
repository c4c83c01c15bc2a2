//! Property-based tests for Monad laws.
//!
//! - **Left Identity**: `flat_map(pure(a), f) == f(a)`
//! - **Right Identity**: `flat_map(m, pure) == m`
//! - **Associativity**: `flat_map(flat_map(m, f), g) == flat_map(m, |x| flat_map(f(x), g))`
//!
//! Each context is also checked for agreement between its `ap` and the
//! monadic derivation `ap_via_flat_map`.

use funkit::Error;
use funkit::control::{Either, EitherKind, LazyKind, LazySequence, OptionKind, Try, TryKind};
use funkit::persistent::{EagerList, ListKind};
use funkit::typeclass::{Applicative, Monad, Pure, ap_via_flat_map};
use proptest::prelude::*;
use rstest::rstest;

fn halve_even(value: i32) -> Option<i32> {
    (value % 2 == 0).then_some(value / 2)
}

fn positive(value: i32) -> Option<i32> {
    (value > 0).then_some(value)
}

fn either_halve_even(value: i32) -> Either<String, i32> {
    if value % 2 == 0 {
        Either::Right(value / 2)
    } else {
        Either::Left(format!("{value} is odd"))
    }
}

fn either_positive(value: i32) -> Either<String, i32> {
    if value > 0 {
        Either::Right(value)
    } else {
        Either::Left(format!("{value} is not positive"))
    }
}

fn try_halve_even(value: i32) -> Try<i32> {
    Try::success(value).filter(|value| value % 2 == 0).map(|value| value / 2)
}

fn try_positive(value: i32) -> Try<i32> {
    Try::success(value).filter(|value| *value > 0)
}

fn around(value: i32) -> EagerList<i32> {
    EagerList::of(vec![value.wrapping_sub(1), value.wrapping_add(1)])
}

fn repeated(value: i32) -> EagerList<i32> {
    EagerList::of(vec![value; 2])
}

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        (-1000_i32..1000).prop_map(Either::Right),
        "[a-z]{1,6}".prop_map(Either::Left),
    ]
}

fn try_strategy() -> impl Strategy<Value = Try<i32>> {
    prop_oneof![
        (-1000_i32..1000).prop_map(Try::success),
        "[a-z]{1,6}".prop_map(|message| Try::failure(Error::Panicked { message })),
    ]
}

// =============================================================================
// Option Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_option_left_identity(value in -1000_i32..1000) {
        prop_assert_eq!(OptionKind::flat_map(OptionKind::pure(value), halve_even), halve_even(value));
    }

    #[test]
    fn prop_option_right_identity(value in any::<Option<i32>>()) {
        prop_assert_eq!(OptionKind::flat_map(value, OptionKind::pure), value);
    }

    #[test]
    fn prop_option_associativity(value in proptest::option::of(-1000_i32..1000)) {
        let left = OptionKind::flat_map(OptionKind::flat_map(value, halve_even), positive);
        let right = OptionKind::flat_map(value, |x| OptionKind::flat_map(halve_even(x), positive));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_option_ap_agrees_with_flat_map(offset in any::<Option<i8>>(), value in any::<Option<i8>>()) {
        let functions = offset.map(|offset| move |x: i8| x.wrapping_add(offset));
        prop_assert_eq!(
            OptionKind::ap(functions, value),
            ap_via_flat_map::<OptionKind, _, _, _>(functions, value)
        );
    }
}

// =============================================================================
// Either Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_either_left_identity(value in -1000_i32..1000) {
        prop_assert_eq!(
            EitherKind::flat_map(EitherKind::pure(value), either_halve_even),
            either_halve_even(value)
        );
    }

    #[test]
    fn prop_either_right_identity(value in either_strategy()) {
        prop_assert_eq!(EitherKind::flat_map(value.clone(), EitherKind::pure), value);
    }

    #[test]
    fn prop_either_associativity(value in either_strategy()) {
        let left = EitherKind::flat_map(EitherKind::flat_map(value.clone(), either_halve_even), either_positive);
        let right = EitherKind::flat_map(value, |x| {
            EitherKind::flat_map(either_halve_even(x), either_positive)
        });
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_either_ap_agrees_with_flat_map(offset in either_strategy(), value in either_strategy()) {
        let functions = offset.map(|offset| move |x: i32| x.wrapping_add(offset));
        prop_assert_eq!(
            EitherKind::ap(functions.clone(), value.clone()),
            ap_via_flat_map::<EitherKind<String>, _, _, _>(functions, value)
        );
    }
}

// =============================================================================
// Try Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_try_left_identity(value in -1000_i32..1000) {
        prop_assert_eq!(TryKind::flat_map(TryKind::pure(value), try_halve_even), try_halve_even(value));
    }

    #[test]
    fn prop_try_right_identity(value in try_strategy()) {
        prop_assert_eq!(TryKind::flat_map(value.clone(), TryKind::pure), value);
    }

    #[test]
    fn prop_try_associativity(value in try_strategy()) {
        let left = TryKind::flat_map(TryKind::flat_map(value.clone(), try_halve_even), try_positive);
        let right = TryKind::flat_map(value, |x| TryKind::flat_map(try_halve_even(x), try_positive));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// EagerList Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_list_left_identity(value in any::<i32>()) {
        prop_assert_eq!(ListKind::flat_map(ListKind::pure(value), around), around(value));
    }

    #[test]
    fn prop_list_right_identity(values in prop::collection::vec(any::<i32>(), 0..16)) {
        let list = EagerList::of(values);
        prop_assert_eq!(ListKind::flat_map(list.clone(), ListKind::pure), list);
    }

    #[test]
    fn prop_list_associativity(values in prop::collection::vec(any::<i32>(), 0..8)) {
        let list = EagerList::of(values);
        let left = ListKind::flat_map(ListKind::flat_map(list.clone(), around), repeated);
        let right = ListKind::flat_map(list, |x| ListKind::flat_map(around(x), repeated));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// LazySequence Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_lazy_left_identity(value in any::<i32>()) {
        let left = LazyKind::flat_map(LazyKind::pure(value), |x| around(x).lazy());
        prop_assert_eq!(left.to_vec(), around(value).to_vec());
    }

    #[test]
    fn prop_lazy_associativity(values in prop::collection::vec(any::<i32>(), 0..8)) {
        let sequence = LazySequence::from_vec(values);
        let left = LazyKind::flat_map(
            LazyKind::flat_map(sequence.clone(), |x| around(x).lazy()),
            |x| repeated(x).lazy(),
        );
        let right = LazyKind::flat_map(sequence, |x| {
            LazyKind::flat_map(around(x).lazy(), |y| repeated(y).lazy())
        });
        prop_assert_eq!(left.to_vec(), right.to_vec());
    }
}

// =============================================================================
// Derived Operations
// =============================================================================

#[rstest]
fn test_flatten_removes_one_layer() {
    assert_eq!(OptionKind::flatten(Some(Some(1))), Some(1));
    assert_eq!(OptionKind::flatten(Some(None::<i32>)), None);
    let nested = EagerList::of(vec![EagerList::of(vec![1, 2]), EagerList::of(vec![3])]);
    assert_eq!(ListKind::flatten(nested).to_vec(), vec![1, 2, 3]);
}

#[rstest]
fn test_then_discards_first_value() {
    let first: Either<&str, i32> = Either::Right(1);
    assert_eq!(EitherKind::then(first, Either::Right("second")), Either::Right("second"));
    let failed: Either<&str, i32> = Either::Left("stop");
    assert_eq!(EitherKind::then(failed, Either::Right("second")), Either::Left("stop"));
}

#[rstest]
fn test_and_then_is_flat_map() {
    assert_eq!(
        TryKind::and_then(Try::success(4), try_halve_even),
        TryKind::flat_map(Try::success(4), try_halve_even)
    );
}

#[rstest]
fn test_try_flat_map_captures_panicking_mapper() {
    let result = TryKind::flat_map(Try::success(1), |_: i32| -> Try<i32> { panic!("mapper failed") });
    assert!(matches!(result.failed(), Some(Error::Panicked { message }) if message == "mapper failed"));
}
