#![cfg(test)]

use pretty_assertions::assert_eq;

use super::*;
use crate::collections::{Enumerable, Flow, IndexOutOfBounds, List};
use crate::util::panic::assert_panics;

#[test]
fn test_view_reads_borrowed_storage() {
    let data = vec![10, 20, 30];
    let view = ReadOnlyCollection::new(&data);

    assert_eq!(view.len(), 3);
    assert_eq!(view.at(1), &20);
    assert_eq!(view[2], 30, "Indexing should read through to the storage.");
    assert_eq!(view.as_slice(), &[10, 20, 30]);
    assert!(std::ptr::eq(view.as_slice(), data.as_slice()), "A view should never copy.");

    assert_eq!(
        view.try_at(3),
        Err(IndexOutOfBounds { index: 3, len: 3 }),
        "try_at should report the offending index and length."
    );
    assert_panics!({
        let data = [1, 2];
        ReadOnlyCollection::new(&data).at(2);
    }, message = &IndexOutOfBounds { index: 2, len: 2 }.to_string());
}

#[test]
fn test_empty_view() {
    let view = ReadOnlyCollection::<u8>::new(&[]);

    assert!(view.is_empty());
    assert_eq!(view.first(), None, "first on an empty view should be absent, not a panic.");
    assert_eq!(view.last(), None, "last on an empty view should be absent, not a panic.");
    assert_eq!(view.first_or(&7), &7);
    assert_eq!(view.last_where_or(|_| true, &9), &9);
    assert!(view.all(|_| false));
    assert!(!view.any(|_| true));
    assert!(view.reverse().is_empty());
    assert!(view.to_array().is_empty());
}

#[test]
fn test_each_visits_in_order() {
    let data = ["a", "b", "c"];
    let view = ReadOnlyCollection::from(&data);

    let mut forwards = List::new();
    view.each(|item, index| forwards.add((index, *item)));
    assert_eq!(forwards, List::from([(0, "a"), (1, "b"), (2, "c")]));

    let mut backwards = List::new();
    view.from_last_each(|item, index| backwards.add((index, *item)));
    assert_eq!(
        backwards,
        List::from([(2, "c"), (1, "b"), (0, "a")]),
        "from_last_each should report the original indices while walking backwards."
    );
}

#[test]
fn test_until_with_flow() {
    let data = [5, 6, 7, 8, 9];
    let view = ReadOnlyCollection::new(&data);

    let mut sum = 0;
    view.until(|item, _| {
        sum += item;
        if sum > 10 { Flow::Break } else { Flow::Continue }
    });
    assert_eq!(sum, 11, "Iteration should stop right after the sum exceeds 10.");

    let mut visited = 0;
    view.from_last_until(|_, index| {
        visited += 1;
        index != 3
    });
    assert_eq!(visited, 2);
}

#[test]
fn test_predicate_searches() {
    let data = [4, 8, 15, 16, 23, 42];
    let view = ReadOnlyCollection::new(&data);

    assert_eq!(view.first(), Some(&4));
    assert_eq!(view.last(), Some(&42));
    assert_eq!(view.first_where(|i| i % 2 == 1), Some(&15));
    assert_eq!(view.last_where(|i| i % 2 == 1), Some(&23));
    assert_eq!(view.first_where(|i| *i > 100), None);
    assert_eq!(view.first_where_or(|i| *i > 100, &0), &0);
    assert_eq!(view.last_or(&0), &42);
    assert_eq!(view.index_of(&16), Some(3));
    assert_eq!(view.index_of(&17), None);
    assert!(view.contains(&42));
    assert_eq!(view.count_where(|i| *i > 10), 4);
}

#[test]
fn test_found_elements_keep_identity() {
    let data = [String::from("x"), String::from("y")];
    let view = ReadOnlyCollection::new(&data);

    let first = view.first_where(|s| s.as_str() == "y").expect("y is present");
    assert!(std::ptr::eq(first, &data[1]), "Searches should hand back the stored element.");

    let reversed = view.reverse();
    assert!(
        std::ptr::eq(reversed[0], &data[1]) && std::ptr::eq(reversed[1], &data[0]),
        "Reversal should hold the original elements in a new sequence."
    );
    assert_eq!(data, [String::from("x"), String::from("y")], "The storage shouldn't be flipped.");
}

#[test]
fn test_projection_and_filtering() {
    let data = [1, 2, 3, 4, 5, 6];
    let view = ReadOnlyCollection::new(&data);

    let doubled = view.select(|i| i * 2);
    assert_eq!(doubled.to_array(), vec![&2, &4, &6, &8, &10, &12]);
    for (index, item) in data.iter().enumerate() {
        assert_eq!(doubled[index], item * 2, "select should apply the selector at every index.");
    }

    let evens = view.filter(|i| i % 2 == 0);
    assert_eq!(evens, List::from([&2, &4, &6]), "filter should keep the original order.");
    assert!(evens.len() <= view.len());
}

#[test]
fn test_zip_pads_shorter_side() {
    let letters = ['a', 'b', 'c'];
    let numbers = [1];
    let letters = ReadOnlyCollection::new(&letters);
    let numbers = ReadOnlyCollection::new(&numbers);

    let zipped = numbers.zip(&letters, |n, l| format!("{:?}{:?}", n, l));
    assert_eq!(
        zipped,
        List::from([
            String::from("Some(1)Some('a')"),
            String::from("NoneSome('b')"),
            String::from("NoneSome('c')"),
        ]),
        "The selector should still be invoked once the first sequence runs out."
    );
}

#[test]
fn test_formatting() {
    let data = [1, 2];
    let view = ReadOnlyCollection::new(&data);
    assert_eq!(format!("{view}"), "&[1, 2]");
    assert_eq!(format!("{view:?}"), "ReadOnlyCollection { contents: [1, 2], len: 2 }");
}
