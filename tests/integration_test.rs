//! End-to-end scenarios across the hashing, map, list and lazy modules.

use funkit::lift;
use funkit::prelude::*;
use rstest::rstest;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[rstest]
fn test_boolean_and_integer_keys_collide() {
    init_logging();
    let map = PersistentMap::from_pairs([(Scalar::Int(0), "f"), (Scalar::Bool(false), "g")]);
    assert_eq!(map.len(), 1);
    assert_eq!(map.get_items().to_vec(), vec![(Scalar::Bool(false), "g")]);
    assert_eq!(map.get(&0), Some(&"g"));
    assert_eq!(map.get(&false), Some(&"g"));
}

#[rstest]
fn test_merge_bias() {
    let merged = PersistentMap::from_pairs([(1, "a")]).concat(&PersistentMap::from_pairs([(1, "b")]));
    assert_eq!(merged.get(&1), Some(&"b"));
}

#[rstest]
fn test_word_frequencies_through_a_lazy_pipeline() {
    init_logging();
    let text = "the quick brown fox jumps over the lazy dog the end";
    let words = LazySequence::from_iter(text.split_whitespace().map(str::to_string)).to_list();
    let frequencies = words
        .group_by(|word| word.clone())
        .map_values(|occurrences, _| occurrences.len())
        .sort_values_by(|left, right| right.cmp(left));

    assert_eq!(frequencies.keys().head(), Some(&"the".to_string()));
    assert_eq!(frequencies.get("the"), Some(&3));
    assert_eq!(frequencies.get_or_else("cat", 0), 0);
}

#[rstest]
fn test_validation_with_traverse() {
    let raw = vec!["3", "14", "15"];
    let parsed = TryKind::traverse(raw, |text: &str| {
        Try::from_result(|| text.parse::<u8>())
    });
    assert_eq!(parsed, Try::success(vec![3, 14, 15]));

    let rejected = OptionKind::traverse(vec!["3", "x"], |text: &str| text.parse::<u8>().ok());
    assert_eq!(rejected, None);
}

#[rstest]
fn test_lookups_feed_applicative_combination() {
    init_logging();
    let rates = PersistentMap::from_pairs([("eur", 2), ("usd", 3)]);
    let lookup = |code: &str| rates.get_unsafe(code).copied().map_err(|error| error.to_string());
    let combine = lift!(EitherKind<String>, |left: i32, right: i32| left * right);

    let found = combine(Either::from(lookup("eur")), Either::from(lookup("usd")));
    assert_eq!(found, Either::Right(6));

    let missing = combine(Either::from(lookup("eur")), Either::from(lookup("gbp")));
    assert_eq!(missing, Either::Left("key not found: gbp".to_string()));
}

#[rstest]
fn test_runtime_arity_lifting() {
    let total = lift_n::<OptionKind, i32, i32, _>(3, |values: &[i32]| values.iter().sum());
    assert_eq!(total(vec![Some(1), Some(2), Some(3)]), Ok(Some(6)));
    assert_eq!(total(vec![Some(1), None, Some(3)]), Ok(None));
    assert_eq!(
        total(vec![Some(1)]),
        Err(Error::ArityMismatch {
            expected: 3,
            actual: 1
        })
    );
}

#[rstest]
fn test_dynamic_flatten_surfaces_type_errors() {
    init_logging();
    let rows = LazySequence::from_vec(vec![
        Scalar::from(vec![Scalar::from(1), Scalar::from(2)]),
        Scalar::from("not a list"),
    ]);
    let results = rows.flatten_dynamic().to_vec();
    assert_eq!(results.len(), 3);
    assert_eq!(
        results[2],
        Err(Error::TypeMismatch {
            expected: "list",
            found: "string".to_string()
        })
    );
}
