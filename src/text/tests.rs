#![cfg(test)]

use pretty_assertions::assert_eq;

use super::*;
use crate::collections::{Dictionary, Enumerable, KeyValuePair, List, Queue, ReadOnlyCollection};

#[test]
fn test_join_places_separators_between_elements() {
    assert_eq!(join(&List::from(["a", "b", "c"]), "-"), "a-b-c");
    assert_eq!(join(&List::from(["solo"]), "-"), "solo", "A single element needs no separator.");
    assert_eq!(join(&List::<String>::new(), "-"), "", "An empty sequence should join to nothing.");
    assert_eq!(join(&List::from([1, 2]), ""), "12");
}

#[test]
fn test_join_over_every_container() {
    let data = [1.5, 2.25];
    assert_eq!(join(&ReadOnlyCollection::new(&data), " | "), "1.5 | 2.25");

    let queue: Queue<char> = "abc".chars().collect();
    assert_eq!(join(&queue, ","), "a,b,c", "A Queue should join from front to back.");

    let dict = Dictionary::from([("x", 1), ("y", 2)]);
    assert_eq!(join(&dict, ", "), "x: 1, y: 2", "Pairs should render as key: value.");
}

#[test]
fn test_join_with_formatter() {
    let list = List::from([3, 1, 2]);
    assert_eq!(join_with(&list, " ", |i| i * 10), "30 10 20");

    let mut calls = 0;
    let text = join_with(&list.reverse(), "/", |i| {
        calls += 1;
        format!("<{i}>")
    });
    assert_eq!(text, "<2>/<1>/<3>");
    assert_eq!(calls, 3, "The formatter should run once per element.");

    let pairs = List::from([KeyValuePair::new('k', false)]);
    assert_eq!(join_with(&pairs, ",", |pair| pair.value), "false");
}
