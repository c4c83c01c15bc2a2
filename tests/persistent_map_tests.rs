//! Integration tests for `PersistentMap`.

use funkit::Error;
use funkit::hash::{ByAddress, HashKey, Hashable, Scalar, hash_key};
use funkit::persistent::{EagerList, PersistentMap};
use rstest::{fixture, rstest};

#[derive(Clone, Debug, PartialEq)]
struct Coordinate {
    latitude: i64,
    longitude: i64,
}

impl Hashable for Coordinate {
    fn hash_code(&self) -> HashKey {
        hash_key(&(self.latitude, self.longitude))
    }
}

#[fixture]
fn inventory() -> PersistentMap<String, u32> {
    PersistentMap::from_pairs([
        ("bolts".to_string(), 120),
        ("nuts".to_string(), 80),
        ("washers".to_string(), 300),
        ("screws".to_string(), 45),
    ])
}

// =============================================================================
// Construction and Lookup
// =============================================================================

#[rstest]
fn test_new_map_is_empty() {
    let map: PersistentMap<i32, i32> = PersistentMap::new();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert_eq!(map, PersistentMap::default());
}

#[rstest]
fn test_collect_from_iterator(inventory: PersistentMap<String, u32>) {
    let collected: PersistentMap<String, u32> = inventory.get_items().into_iter().collect();
    assert_eq!(collected, inventory);
}

#[rstest]
fn test_get_or_else(inventory: PersistentMap<String, u32>) {
    assert_eq!(inventory.get_or_else("nuts", 0), 80);
    assert_eq!(inventory.get_or_else("rivets", 0), 0);
}

#[rstest]
fn test_get_unsafe_miss_reports_the_key(inventory: PersistentMap<String, u32>) {
    assert_eq!(
        inventory.get_unsafe("rivets"),
        Err(Error::KeyNotFound {
            key: "rivets".to_string()
        })
    );
}

#[rstest]
fn test_custom_hashable_keys() {
    let here = Coordinate {
        latitude: 51,
        longitude: 0,
    };
    let map = PersistentMap::singleton(here.clone(), "greenwich");
    let probe = Coordinate {
        latitude: 51,
        longitude: 0,
    };
    assert_eq!(map.get(&probe), Some(&"greenwich"));

    let miss = map
        .get_unsafe(&Coordinate {
            latitude: 1,
            longitude: 2,
        })
        .unwrap_err();
    assert_eq!(
        miss,
        Error::KeyNotFound {
            key: format!("Coordinate keyhash:{}", hash_key(&(1_i64, 2_i64)))
        }
    );
}

#[rstest]
fn test_identity_keys_distinguish_equal_values() {
    let first = ByAddress::from_value(vec![1, 2]);
    let second = ByAddress::from_value(vec![1, 2]);
    let map = PersistentMap::singleton(first.clone(), 1).insert(second.clone(), 2);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&first), Some(&1));
    assert_eq!(map.get(&second), Some(&2));
}

#[rstest]
fn test_float_keys_normalise_negative_zero() {
    let map = PersistentMap::singleton(Scalar::Float(0.0), "zero");
    assert_eq!(map.get(&Scalar::Float(-0.0)), Some(&"zero"));
}

#[rstest]
fn test_sequence_keys() {
    let map = PersistentMap::singleton(vec![Scalar::from(1), Scalar::from("a")], "pair");
    assert!(map.has(&vec![Scalar::from(1), Scalar::from("a")]));
    assert!(!map.has(&vec![Scalar::from("a"), Scalar::from(1)]));
}

#[rstest]
fn test_sequence_and_its_serialised_text_are_separate_keys() {
    let map = PersistentMap::from_pairs([
        (Scalar::List(vec![Scalar::Int(1)]), "list"),
        (Scalar::Str("a:1:{i:1;}".into()), "text"),
    ]);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&Scalar::List(vec![Scalar::Int(1)])), Some(&"list"));
    assert_eq!(map.get("a:1:{i:1;}"), Some(&"text"));
}

#[rstest]
fn test_tuple_key_miss_renders_the_tuple_type() {
    let map = PersistentMap::singleton((String::from("b"), 2), "pair");
    let error = map.get_unsafe(&(String::from("a"), 1)).unwrap_err();
    assert_eq!(
        error.to_string(),
        "key not found: (String, i32) keyhash:a:2:{s:1:\"a\";i:1;}"
    );
}

#[rstest]
#[case(0.5_f32, Some("x"))]
#[case(0.1_f32, None)]
fn test_float_keys_match_across_widths_only_on_exact_values(
    #[case] narrow: f32,
    #[case] expected: Option<&'static str>,
) {
    let map = PersistentMap::from_pairs([(0.5_f64, "x"), (0.1_f64, "x")]);
    assert_eq!(map.get(&narrow).copied(), expected);
}

// =============================================================================
// Persistence
// =============================================================================

#[rstest]
fn test_every_operation_leaves_the_receiver_untouched(inventory: PersistentMap<String, u32>) {
    let snapshot = inventory.get_items();
    let _ = inventory.insert("rivets".to_string(), 10);
    let _ = inventory.without_key("bolts");
    let _ = inventory.filter(|count, _| *count > 100);
    let _ = inventory.sort_values();
    let _ = inventory.map_values(|count, _| count * 2);
    let _ = inventory.concat(&PersistentMap::singleton("nuts".to_string(), 0));
    assert_eq!(inventory.get_items(), snapshot);
}

#[rstest]
fn test_reinsert_keeps_first_position(inventory: PersistentMap<String, u32>) {
    let updated = inventory.insert("bolts".to_string(), 1);
    assert_eq!(updated.keys(), inventory.keys());
    assert_eq!(updated.get("bolts"), Some(&1));
}

// =============================================================================
// Queries and Transformations
// =============================================================================

#[rstest]
fn test_find_family(inventory: PersistentMap<String, u32>) {
    assert_eq!(inventory.find(|count, _| *count < 50), Some(&45));
    assert_eq!(
        inventory.find_key(|_, count| *count > 200),
        Some(&"washers".to_string())
    );
    assert!(inventory.exists(|_, name| name == "nuts"));
    assert!(inventory.all(|count, _| *count > 0));
    assert!(inventory.contains(&300));
    assert!(!inventory.contains(&301));
}

#[rstest]
fn test_map_builds_a_list(inventory: PersistentMap<String, u32>) {
    let labels: EagerList<String> = inventory.map(|count, name| format!("{name}:{count}"));
    assert_eq!(labels.head(), Some(&"bolts:120".to_string()));
    assert_eq!(labels.len(), 4);
}

#[rstest]
fn test_map_keys_later_entry_wins_on_collision(inventory: PersistentMap<String, u32>) {
    let by_initial = inventory.map_keys(|name, _| name.chars().next().unwrap_or_default());
    assert_eq!(by_initial.len(), 4);
    let by_length = inventory.map_keys(|name, _| name.len());
    assert_eq!(by_length.get(&4), Some(&80));
    assert_eq!(by_length.get(&5), Some(&120));
    assert_eq!(by_length.get(&6), Some(&45));
}

#[rstest]
fn test_reduce_in_insertion_order(inventory: PersistentMap<String, u32>) {
    let joined = inventory.reduce(String::new(), |mut text, _, name| {
        text.push_str(&name[..1]);
        text
    });
    assert_eq!(joined, "bnws");
}

// =============================================================================
// Combination
// =============================================================================

#[rstest]
fn test_concat_with_empty_maps(inventory: PersistentMap<String, u32>) {
    assert_eq!(inventory.concat(&PersistentMap::new()), inventory);
    assert_eq!(PersistentMap::new().concat(&inventory), inventory);
}

#[rstest]
fn test_concat_replaces_the_key_object() {
    let left = PersistentMap::singleton(Scalar::Int(1), "int");
    let right = PersistentMap::singleton(Scalar::Bool(true), "bool");
    assert_eq!(
        left.concat(&right).get_items().to_vec(),
        vec![(Scalar::Bool(true), "bool")]
    );
}

#[rstest]
fn test_minus(inventory: PersistentMap<String, u32>) {
    let sold_out = PersistentMap::from_pairs([
        ("nuts".to_string(), 80),
        ("screws".to_string(), 44),
        ("rivets".to_string(), 1),
    ]);
    assert_eq!(
        inventory.minus(&sold_out).keys().to_vec(),
        vec!["bolts", "washers", "screws"]
    );
}

#[rstest]
fn test_get_by_keys_follows_requested_order(inventory: PersistentMap<String, u32>) {
    let picked = inventory.get_by_keys(["washers", "rivets", "bolts"]);
    assert_eq!(
        picked.get_items().to_vec(),
        vec![("washers".to_string(), 300), ("bolts".to_string(), 120)]
    );
}

// =============================================================================
// Ordering and Batching
// =============================================================================

#[rstest]
fn test_sort_keys_and_values(inventory: PersistentMap<String, u32>) {
    assert_eq!(
        inventory.sort_keys().keys().to_vec(),
        vec!["bolts", "nuts", "screws", "washers"]
    );
    assert_eq!(inventory.sort_values().values().to_vec(), vec![45, 80, 120, 300]);
    assert_eq!(
        inventory
            .sort_keys_by(|left, right| right.len().cmp(&left.len()))
            .keys()
            .to_vec(),
        vec!["washers", "screws", "bolts", "nuts"]
    );
}

#[rstest]
fn test_chunk_preserves_order(inventory: PersistentMap<String, u32>) {
    let chunks = inventory.chunk(3);
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].keys().to_vec(), vec!["bolts", "nuts", "washers"]);
    assert_eq!(chunks[1].keys().to_vec(), vec!["screws"]);
}

#[rstest]
fn test_iteration_by_reference_and_by_value(inventory: PersistentMap<String, u32>) {
    let total: u32 = (&inventory).into_iter().map(|(_, count)| count).sum();
    assert_eq!(total, 545);
    assert_eq!(inventory.iter().len(), 4);
    let names: Vec<String> = inventory.into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["bolts", "nuts", "washers", "screws"]);
}
