#![cfg(test)]

use std::collections::HashMap;

use super::*;
use crate::collections::traits::Natural;
use crate::util::alloc::CountedDrop;
use crate::util::hash::{ByteSumBuildHasher, ConstantBuildHasher};
use crate::util::logger::init_test_logger;
use crate::util::panic::assert_panics;

type ByteSumMap<V = String> = ChainedHashMap<String, V, ByteSumBuildHasher>;

fn chain_keys<V>(map: &ByteSumMap<V>, index: usize) -> Vec<&str> {
    map.buckets[index].iter().map(|entry| entry.key.as_str()).collect()
}

#[test]
fn test_new() {
    let map: ChainedHashMap<String, String> = ChainedHashMap::new();
    assert_eq!(map.cap(), INITIAL_CAP);
    assert!(map.is_empty());
    assert_eq!(map.get("cosi10"), None);
}

#[test]
fn test_insert_and_search() {
    init_test_logger();
    let mut map = ByteSumMap::with_hasher(ByteSumBuildHasher);

    assert_eq!(map.insert("cosi10", "java"), None);
    assert_eq!(map.insert("cosi10", "python").as_deref(), Some("java"));
    assert_eq!(map.len(), 1, "Overwriting should not add an entry.");

    for (key, value) in [
        ("cosi11", "java"),
        ("<A", "a"),
        ("cosi12", "java"),
        ("<B", "b"),
        ("cosi112", "Python3"),
        ("cosi121", "Lisp"),
        ("cosi211", "C++"),
        ("cosi127", "SQL"),
    ] {
        assert_eq!(map.insert(key, value), None);
    }
    assert_eq!(map.len(), 9);
    assert_eq!(map.cap(), 13, "Nine entries fit in thirteen buckets.");

    // "cosi11" and "<A" both sum to 3 mod 13, as do "cosi12" and "<B" to 4.
    assert_eq!(chain_keys(&map, 3), ["cosi11", "<A"]);
    assert_eq!(chain_keys(&map, 4), ["cosi12", "<B"]);

    assert_eq!(map.insert("cosi101", "matlab"), None);
    assert_eq!(map.cap(), 26, "The tenth entry should double the table first.");
    assert_eq!(map.len(), 10);

    for (key, value) in [
        ("cosi10", "python"),
        ("cosi11", "java"),
        ("cosi12", "java"),
        ("cosi112", "Python3"),
        ("cosi121", "Lisp"),
        ("cosi211", "C++"),
        ("cosi127", "SQL"),
        ("cosi101", "matlab"),
        ("<A", "a"),
        ("<B", "b"),
    ] {
        assert_eq!(map.search(key).map(String::as_str), Some(value), "Missing {key}");
    }
    assert_eq!(map.search("cosi01"), None);
    assert_eq!(map.search("cosi21"), None);
}

#[test]
fn test_resize_keeps_entries() {
    init_test_logger();
    let mut map = ByteSumMap::with_cap_and_hasher(13, ByteSumBuildHasher);
    for i in 0..13 {
        map.insert(format!("key{i}").as_str(), i.to_string().as_str());
    }

    assert!(map.cap() > 13, "Thirteen entries should exceed the load factor.");
    assert_eq!(map.len(), 13);
    for i in 0..13 {
        assert_eq!(map.get(&format!("key{i}")), Some(&i.to_string()));
    }
    for (key, _) in map.iter() {
        let index = map.index_for(key);
        assert!(
            map.buckets[index].find(key.as_str(), &Natural).is_some(),
            "Every entry should live in the bucket its hash selects."
        );
    }
}

#[test]
fn test_delete() {
    let mut map = ByteSumMap::with_hasher(ByteSumBuildHasher);
    assert!(!map.delete("cosi10"));
    assert_eq!(map.len(), 0);

    map.insert("cosi10", "java");
    assert!(map.delete("cosi10"));
    assert!(!map.contains("cosi10"));
    assert_eq!(map.len(), 0);

    map.insert("cosi10", "java");
    map.insert("cosi11", "java");
    // Shares a bucket with "cosi11" without being present.
    assert!(!map.delete("<A"));
    assert_eq!(map.len(), 2);

    map.insert("<A", "a");
    assert!(map.delete("<A"));
    assert_eq!(map.len(), 2);
    assert!(!map.delete("<A"));
    assert_eq!(chain_keys(&map, 3), ["cosi11"]);
}

#[test]
fn test_remove_and_get_mut() {
    let mut map = ByteSumMap::with_hasher(ByteSumBuildHasher);
    map.insert("<B", "b");
    map.insert("cosi12", "java");

    if let Some(value) = map.get_mut("cosi12") {
        value.push_str("script");
    }
    assert_eq!(map.get_entry("cosi12"), Some((&"cosi12".into(), &"javascript".into())));

    assert_eq!(map.remove("<B").as_deref(), Some("b"));
    assert_eq!(map.remove("<B"), None);
    assert_eq!(map.remove_entry("cosi12"), Some(("cosi12".into(), "javascript".into())));
    assert!(map.is_empty());
}

#[test]
fn test_insert_copies() {
    let mut map = ByteSumMap::with_hasher(ByteSumBuildHasher);
    let mut key = String::from("cosi10");
    let mut value = String::from("java");
    map.insert(key.as_str(), value.as_str());

    key.push('!');
    value.clear();
    assert_eq!(map.get("cosi10").map(String::as_str), Some("java"));
    assert!(!map.contains(key.as_str()));
}

#[test]
fn test_long_chain() {
    init_test_logger();
    let mut map = ChainedHashMap::with_hasher(ConstantBuildHasher);
    for i in 0..50 {
        map.insert(&i, &(i * 2));
    }
    assert_eq!(map.len(), 50);
    assert!(map.cap() > INITIAL_CAP);
    assert_eq!(
        map.buckets.iter().filter(|chain| chain.0.is_some()).count(),
        1,
        "Every key should land in the same bucket."
    );

    // Head, interior and tail of the chain.
    assert_eq!(map.remove(&0), Some(0));
    assert_eq!(map.remove(&25), Some(50));
    assert_eq!(map.remove(&49), Some(98));
    assert_eq!(map.remove(&25), None);

    let expected: Vec<i32> = (1..49).filter(|i| *i != 25).collect();
    assert!(
        map.keys().copied().eq(expected),
        "Chains should keep insertion order through rehashing and removal."
    );
    assert_eq!(map.values().sum::<i32>(), (1..49).filter(|i| *i != 25).map(|i| i * 2).sum());
}

#[test]
fn test_custom_comparator() {
    let mut map = ChainedHashMap::with_hasher_and_comparator(
        ConstantBuildHasher,
        |a: &str, b: &str| a.to_lowercase().cmp(&b.to_lowercase()),
    );
    map.insert("Cosi10", "java");
    assert_eq!(map.insert("COSI10", "python").as_deref(), Some("java"));
    assert_eq!(map.len(), 1);
    assert_eq!(map.keys().next().map(String::as_str), Some("Cosi10"));
    assert!(map.contains("cosi10"));
}

#[test]
fn test_release() {
    init_test_logger();
    let counter = CountedDrop::new(0);
    let mut map: ByteSumMap<CountedDrop> = ChainedHashMap::with_hasher(ByteSumBuildHasher);

    map.insert("cosi11", &counter);
    assert_eq!(counter.count(), 0);
    assert!(map.insert("cosi11", &counter).is_some());
    assert_eq!(counter.count(), 1, "The replaced value should be released.");

    map.insert("<A", &counter);
    map.insert("cosi12", &counter);
    assert!(map.delete("cosi11"));
    assert_eq!(counter.count(), 2);

    map.clear();
    assert_eq!(counter.count(), 4);
    assert!(map.is_empty());
    assert_eq!(map.cap(), INITIAL_CAP, "Clearing should keep the capacity.");

    map.insert("cosi10", &counter);
    map.insert("cosi11", &counter);
    drop(map);
    assert_eq!(counter.count(), 6);
}

#[test]
fn test_capacity_errors() {
    let error = ChainedHashMap::<String, String>::try_with_cap(1).err();
    assert_eq!(
        error,
        Some(CapacityError::TooSmall(CapacityTooSmall {
            requested: 1,
            minimum: MIN_CAP,
        }))
    );
    assert!(error.is_some_and(|e| e.is_too_small()));
    assert_eq!(
        error.map(|e| e.to_string()).as_deref(),
        Some("Capacity 1 is below the minimum of 2 buckets!")
    );

    assert_panics!({
        ChainedHashMap::<String, String>::with_cap(0);
    });

    let mut map: ByteSumMap = ByteSumMap::with_cap_and_hasher(MIN_CAP, ByteSumBuildHasher);
    assert!(map.try_reserve(usize::MAX).is_err_and(|e| e.is_overflow()));
    assert_eq!(map.cap(), MIN_CAP, "A failed reservation should leave the map alone.");
}

#[test]
fn test_reserve() {
    let mut map = ChainedHashMap::with_hasher(ByteSumBuildHasher);
    map.reserve(100);
    let cap = map.cap();
    assert!(cap * LOAD_FACTOR_NUMERATOR > 100 * LOAD_FACTOR_DENOMINATOR);

    for i in 0..100u32 {
        map.insert_owned(i, i);
    }
    assert_eq!(map.cap(), cap, "Reserved capacity should absorb the inserts.");
}

#[test]
fn test_formatting() {
    let mut map = ChainedHashMap::with_cap_and_hasher(2, ConstantBuildHasher);
    map.insert("a", "1");
    map.insert("b", "2");

    let mut out = Vec::new();
    map.print(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "[\nKey: a\nValue: 1\n]\n[\nKey: b\nValue: 2\n]\n"
    );
    assert_eq!(format!("{map}"), r#"#{"a": "1", "b": "2"}"#);
    // The second insert doubles the table to 4, and 7 % 4 selects the last bucket.
    assert_eq!(
        format!("{map:?}"),
        r#"ChainedHashMap { buckets: [-, -, -, ("a": "1") -> ("b": "2")], len: 2, cap: 4, hasher: ConstantBuildHasher }"#
    );
}

#[test]
fn test_iterators() {
    let mut map = ByteSumMap::with_hasher(ByteSumBuildHasher);
    for key in ["cosi10", "cosi11", "<A", "cosi12"] {
        map.insert(key, key);
    }

    assert_eq!(map.iter().len(), 4);
    for value in map.values_mut() {
        value.make_ascii_uppercase();
    }
    for (key, value) in &mut map {
        value.push_str(key);
    }
    assert_eq!(map.get("<A").map(String::as_str), Some("<A<A"));

    let cloned = map.clone();
    let mut owned: Vec<(String, String)> = map.into_iter().collect();
    owned.sort();
    assert_eq!(owned[0], ("<A".to_owned(), "<A<A".to_owned()));
    assert_eq!(owned[1], ("cosi10".to_owned(), "COSI10cosi10".to_owned()));

    let mut keys: Vec<String> = cloned.into_keys().collect();
    keys.sort();
    assert_eq!(keys, ["<A", "cosi10", "cosi11", "cosi12"]);
}

#[test]
fn test_from_iter() {
    let map: ChainedHashMap<&str, i32> = [("a", 1), ("b", 2), ("a", 3)].into_iter().collect();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("a"), Some(&3));

    let mut values: Vec<i32> = map.into_values().collect();
    values.sort();
    assert_eq!(values, [2, 3]);
}

mod quickchecks {
    use super::*;

    quickcheck::quickcheck! {
        fn matches_std_map(ops: Vec<(u8, Option<u16>)>) -> bool {
            let mut map = ChainedHashMap::with_cap_and_hasher(MIN_CAP, ByteSumBuildHasher);
            let mut model = HashMap::new();
            for (key, op) in ops {
                match op {
                    Some(value) => assert_eq!(map.insert(&key, &value), model.insert(key, value)),
                    None => assert_eq!(map.remove(&key), model.remove(&key)),
                }
                if (map.len() * LOAD_FACTOR_DENOMINATOR) >= map.cap() * LOAD_FACTOR_NUMERATOR {
                    return false;
                }
            }

            map.len() == model.len()
                && model.iter().all(|(key, value)| map.get(key) == Some(value))
        }
    }
}
