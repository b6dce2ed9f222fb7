#![cfg(test)]

use pretty_assertions::assert_eq;

use super::*;
use crate::collections::{Enumerable, List};

/// Checks that the parallel Lists line up and that no key appears twice.
fn assert_consistent<K: PartialEq, V>(dict: &Dictionary<K, V>) {
    assert_eq!(dict.keys.len(), dict.values.len(), "Keys and values should stay parallel.");
    for (index, key) in dict.keys.iter().enumerate() {
        assert_eq!(dict.keys.index_of(key), Some(index), "No key should be stored twice.");
    }
}

#[test]
fn test_put_overwrites_in_place() {
    let mut dict = Dictionary::new();
    assert_eq!(dict.put("a", 1), None);
    assert_eq!(dict.put("b", 2), None);
    assert_eq!(dict.put("a", 3), Some(1), "Overwriting should return the previous value.");

    assert_eq!(dict.len(), 2);
    assert_eq!(dict.retrieve("a"), Some(&3));
    assert_eq!(
        dict.keys().as_slice(),
        &["a", "b"],
        "An overwritten key should keep its original position."
    );
    assert_eq!(dict.values().as_slice(), &[3, 2]);
    assert_consistent(&dict);
}

#[test]
fn test_retrieve_and_contains() {
    let mut dict: Dictionary<String, u32> = Dictionary::new();
    dict.put(String::from("one"), 1);
    dict.put(String::from("two"), 2);

    assert_eq!(dict.retrieve("two"), Some(&2), "Lookups should accept borrowed keys.");
    assert_eq!(dict.retrieve("three"), None, "A missing key should be absent, not a panic.");
    assert!(dict.contains_key("one"));
    assert!(!dict.contains_key("zero"));
    assert!(dict.contains_value(&2_u32));
    assert!(!dict.contains_value(&7_u32));

    if let Some(value) = dict.retrieve_mut("one") {
        *value += 10;
    }
    assert_eq!(dict.retrieve("one"), Some(&11));
    assert_eq!(dict.retrieve_mut("nothing"), None);
}

#[test]
fn test_remove() {
    let mut dict = Dictionary::from([('x', 10), ('y', 20), ('z', 30)]);

    assert_eq!(dict.remove(&'y'), Some(20), "Removing should return the removed value.");
    assert_eq!(dict.len(), 2, "Removing a present key should shrink the Dictionary by one.");
    assert_eq!(dict.keys().as_slice(), &['x', 'z']);
    assert_eq!(dict.values().as_slice(), &[10, 30]);
    assert_consistent(&dict);

    assert_eq!(dict.remove(&'q'), None, "Removing an absent key should return None.");
    assert_eq!(dict.len(), 2, "Removing an absent key shouldn't change the length.");

    dict.put('y', 40);
    assert_eq!(dict.keys().as_slice(), &['x', 'z', 'y'], "A re-added key should go to the end.");

    dict.clear();
    assert!(dict.is_empty());
    assert_consistent(&dict);
}

#[test]
fn test_invariants_hold_across_mutations() {
    let mut dict = Dictionary::new();
    let mut state: u32 = 7;

    for step in 0..200_u32 {
        // Small linear congruential sequence, so keys collide often.
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let key = (state >> 16) % 13;

        if step % 3 == 0 {
            let before = dict.len();
            let removed = dict.remove(&key);
            assert_eq!(dict.len(), before - removed.map_or(0, |_| 1));
        } else {
            dict.put(key, step);
            assert_eq!(dict.retrieve(&key), Some(&step));
        }
        assert_consistent(&dict);
    }
}

#[test]
fn test_enumerates_pairs_in_entry_order() {
    let dict = Dictionary::from([("a", 1), ("b", 2), ("c", 3)]);

    let first = dict.first().expect("dictionary isn't empty");
    assert_eq!((*first.key, *first.value), ("a", 1));
    assert_eq!(dict.last().map(KeyValuePair::into_tuple), Some((&"c", &3)));
    assert_eq!(dict.get(1).map(|pair| *pair.value), Some(2));
    assert_eq!(dict.get(3), None);

    assert!(dict.all(|pair| *pair.value > 0));
    assert!(dict.any(|pair| *pair.key == "b"));
    assert_eq!(dict.first_where(|pair| *pair.value > 1).map(|pair| *pair.key), Some("b"));
    assert_eq!(dict.last_where(|pair| *pair.value < 3).map(|pair| *pair.key), Some("b"));

    let mut visited = List::new();
    dict.until(|pair, index| {
        visited.add((index, *pair.key));
        *pair.key != "b"
    });
    assert_eq!(visited, List::from([(0, "a"), (1, "b")]), "until should stop at the first false.");

    let mut visited = List::new();
    dict.from_last_each(|pair, index| visited.add((index, *pair.key)));
    assert_eq!(visited, List::from([(2, "c"), (1, "b"), (0, "a")]));
}

#[test]
fn test_empty_dictionary_queries() {
    let dict: Dictionary<&str, i32> = Dictionary::new();
    let fallback = KeyValuePair::new(&"none", &0);

    assert_eq!(dict.first(), None);
    assert_eq!(dict.last(), None);
    assert_eq!(dict.first_or(fallback), fallback);
    assert_eq!(dict.last_where_or(|_| true, fallback), fallback);
    assert!(dict.all(|_| false));
    assert!(!dict.any(|_| true));
    assert!(dict.to_list().is_empty());
}

#[test]
fn test_derived_sequences() {
    let dict = Dictionary::from([(1, "one"), (2, "two"), (3, "three")]);

    let reversed = dict.reverse().select(|pair| *pair.key);
    assert_eq!(reversed, List::from([3, 2, 1]));

    let long_names = dict.filter(|pair| pair.value.len() > 3).select(|pair| *pair.value);
    assert_eq!(long_names, List::from(["three"]));

    let lengths = dict.select(|pair| pair.value.len());
    assert_eq!(lengths, List::from([3, 3, 5]));

    let zipped = dict.zip(&List::from(['a']), |pair, letter| {
        (pair.map(|pair| *pair.key), letter.copied())
    });
    assert_eq!(zipped, List::from([(Some(1), Some('a')), (Some(2), None), (Some(3), None)]));
}

#[test]
fn test_to_list_is_a_snapshot() {
    let mut dict = Dictionary::from([("k", String::from("before"))]);

    let snapshot = dict.to_list();
    let array = snapshot.to_array();
    assert_eq!(array.len(), 1);

    dict.put("k", String::from("after"));
    dict.put("l", String::from("new"));

    assert_eq!(
        snapshot,
        List::from([KeyValuePair::new("k", String::from("before"))]),
        "Pairs taken earlier shouldn't follow later changes."
    );
    assert_eq!(dict.retrieve("k").map(String::as_str), Some("after"));
}

#[test]
fn test_iteration_and_collection() {
    let dict: Dictionary<char, usize> = "hello".chars().map(|c| (c, c as usize)).collect();
    assert_eq!(dict.len(), 4, "Duplicate keys should collapse into one entry.");
    assert_eq!(dict.keys().as_slice(), &['h', 'e', 'l', 'o']);

    let pairs: Vec<(char, usize)> = dict.clone().into_iter().map(KeyValuePair::into_tuple).collect();
    assert_eq!(pairs[2], ('l', 'l' as usize));

    let backwards: String = dict.iter().rev().map(|pair| *pair.key).collect();
    assert_eq!(backwards, "oleh");
    assert_eq!(dict.iter().len(), 4);
}

#[test]
fn test_formatting() {
    let dict = Dictionary::from([("a", 1), ("b", 2)]);
    assert_eq!(format!("{dict}"), r#"#{"a": 1, "b": 2}"#);
    assert_eq!(format!("{dict:?}"), r#"Dictionary { entries: ["a": 1, "b": 2], len: 2 }"#);
    assert_eq!(KeyValuePair::new("a", 1).to_string(), "a: 1");
}
