use std::cmp;

use super::Flow;
use crate::collections::list::List;

/// The querying contract shared by every sequence in this crate.
///
/// Implementors provide four primitives: [`len`](Enumerable::len), [`get`](Enumerable::get),
/// [`until`](Enumerable::until) and [`from_last_until`](Enumerable::from_last_until). Everything
/// else is derived from those, so predicate searches, projection and zipping behave identically
/// across [`ReadOnlyCollection`](crate::collections::ReadOnlyCollection),
/// [`List`], [`Queue`](crate::collections::Queue) and
/// [`Dictionary`](crate::collections::Dictionary).
///
/// Elements are handed out as [`Item`](Enumerable::Item)s, a cheap copyable view of each element
/// (a reference for most sequences, a [`KeyValuePair`](crate::collections::KeyValuePair) of
/// references for dictionaries). Nothing found is always reported as [`None`], never as a panic.
///
/// # Mutation During Iteration
/// Every method here borrows the sequence immutably for the whole traversal, so an action can't
/// mutate the sequence it is iterating over. This is enforced at compile time:
/// ```compile_fail
/// # use enumerable_lib::collections::{Enumerable, List};
/// let mut list = List::from([1, 2, 3]);
/// list.each(|item, _| list.add(*item));
/// ```
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the sequence.
/// - `m`: The number of elements in the second sequence.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `get` | `O(1)` |
/// | `first` / `last` | `O(1)` |
/// | `all` / `any` / `first_where` / `last_where` | `O(n)` |
/// | `reverse` / `select` / `filter` / `to_array` | `O(n)` |
/// | `zip` | `O(max(n, m))` |
pub trait Enumerable {
    /// The view of a single element yielded while querying.
    type Item<'a>: Copy
    where
        Self: 'a;

    /// Returns the number of elements in the sequence.
    fn len(&self) -> usize;

    /// Returns the element at `index`, or None if the index is out of bounds.
    fn get<'a>(&'a self, index: usize) -> Option<Self::Item<'a>>;

    /// Invokes `action` with each element and its index, front to back, stopping permanently the
    /// first time `action` returns `false` (or [`Flow::Break`]). Returning `true` or nothing at all
    /// continues iteration.
    ///
    /// # Examples
    /// ```
    /// # use enumerable_lib::collections::{Enumerable, List};
    /// let list = List::from([1, 2, 3, 4]);
    /// let mut visited = Vec::new();
    /// list.until(|item, _| {
    ///     visited.push(*item);
    ///     *item < 2
    /// });
    /// assert_eq!(visited, [1, 2]);
    /// ```
    fn until<'a, F, R>(&'a self, action: F)
    where
        F: FnMut(Self::Item<'a>, usize) -> R,
        R: Into<Flow>;

    /// The same as [`until`](Enumerable::until), but iterates from the last element down to the
    /// first.
    fn from_last_until<'a, F, R>(&'a self, action: F)
    where
        F: FnMut(Self::Item<'a>, usize) -> R,
        R: Into<Flow>;

    /// Returns true if the sequence contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invokes `action` with every element and its index, front to back.
    fn each<'a, F>(&'a self, mut action: F)
    where
        F: FnMut(Self::Item<'a>, usize),
    {
        self.until(|item, index| action(item, index));
    }

    /// Invokes `action` with every element and its index, back to front.
    fn from_last_each<'a, F>(&'a self, mut action: F)
    where
        F: FnMut(Self::Item<'a>, usize),
    {
        self.from_last_until(|item, index| action(item, index));
    }

    /// Returns true if no element fails `predicate`. An empty sequence always returns true.
    ///
    /// # Examples
    /// ```
    /// # use enumerable_lib::collections::{Enumerable, List};
    /// assert!(List::from([2, 4, 6]).all(|i| i % 2 == 0));
    /// assert!(List::<u8>::new().all(|_| false));
    /// ```
    fn all<'a, P>(&'a self, mut predicate: P) -> bool
    where
        P: FnMut(Self::Item<'a>) -> bool,
    {
        let mut result = true;
        self.until(|item, _| {
            if !predicate(item) {
                result = false;
            }
            result
        });
        result
    }

    /// Returns true if at least one element satisfies `predicate`. An empty sequence always
    /// returns false.
    fn any<'a, P>(&'a self, mut predicate: P) -> bool
    where
        P: FnMut(Self::Item<'a>) -> bool,
    {
        let mut result = false;
        self.until(|item, _| {
            if predicate(item) {
                result = true;
            }
            !result
        });
        result
    }

    /// Returns the number of elements that satisfy `predicate`.
    fn count_where<'a, P>(&'a self, mut predicate: P) -> usize
    where
        P: FnMut(Self::Item<'a>) -> bool,
    {
        let mut count = 0;
        self.each(|item, _| {
            if predicate(item) {
                count += 1;
            }
        });
        count
    }

    /// Returns the first element, or None if the sequence is empty.
    fn first<'a>(&'a self) -> Option<Self::Item<'a>> {
        self.get(0)
    }

    /// Returns the element with the lowest index that satisfies `predicate`, or None if there
    /// isn't one.
    fn first_where<'a, P>(&'a self, mut predicate: P) -> Option<Self::Item<'a>>
    where
        P: FnMut(Self::Item<'a>) -> bool,
    {
        let mut found = None;
        self.until(|item, _| {
            if predicate(item) {
                found = Some(item);
            }
            found.is_none()
        });
        found
    }

    /// Returns the first element, or `default` if the sequence is empty.
    ///
    /// # Examples
    /// ```
    /// # use enumerable_lib::collections::{Enumerable, List};
    /// assert_eq!(List::from([7, 8]).first_or(&0), &7);
    /// assert_eq!(List::<i32>::new().first_or(&0), &0);
    /// ```
    fn first_or<'a>(&'a self, default: Self::Item<'a>) -> Self::Item<'a> {
        self.first().unwrap_or(default)
    }

    /// Returns the first element that satisfies `predicate`, or `default` if there isn't one.
    fn first_where_or<'a, P>(&'a self, predicate: P, default: Self::Item<'a>) -> Self::Item<'a>
    where
        P: FnMut(Self::Item<'a>) -> bool,
    {
        self.first_where(predicate).unwrap_or(default)
    }

    /// Returns the last element, or None if the sequence is empty.
    fn last<'a>(&'a self) -> Option<Self::Item<'a>> {
        self.len().checked_sub(1).and_then(|index| self.get(index))
    }

    /// Returns the element with the highest index that satisfies `predicate`, or None if there
    /// isn't one.
    fn last_where<'a, P>(&'a self, mut predicate: P) -> Option<Self::Item<'a>>
    where
        P: FnMut(Self::Item<'a>) -> bool,
    {
        let mut found = None;
        self.from_last_until(|item, _| {
            if predicate(item) {
                found = Some(item);
            }
            found.is_none()
        });
        found
    }

    /// Returns the last element, or `default` if the sequence is empty.
    fn last_or<'a>(&'a self, default: Self::Item<'a>) -> Self::Item<'a> {
        self.last().unwrap_or(default)
    }

    /// Returns the last element that satisfies `predicate`, or `default` if there isn't one.
    fn last_where_or<'a, P>(&'a self, predicate: P, default: Self::Item<'a>) -> Self::Item<'a>
    where
        P: FnMut(Self::Item<'a>) -> bool,
    {
        self.last_where(predicate).unwrap_or(default)
    }

    /// Creates a new List holding this sequence's elements in reverse order. The sequence itself
    /// is left untouched.
    fn reverse<'a>(&'a self) -> List<Self::Item<'a>> {
        let mut reversed = List::with_capacity(self.len());
        self.from_last_each(|item, _| reversed.add(item));
        reversed
    }

    /// Applies `selector` to every element in order, collecting the results into a new List.
    ///
    /// # Examples
    /// ```
    /// # use enumerable_lib::collections::{Enumerable, List};
    /// let lengths = List::from(["a", "bcd", "ef"]).select(|s| s.len());
    /// assert_eq!(lengths, List::from([1, 3, 2]));
    /// ```
    fn select<'a, U, F>(&'a self, mut selector: F) -> List<U>
    where
        F: FnMut(Self::Item<'a>) -> U,
    {
        let mut selected = List::with_capacity(self.len());
        self.each(|item, _| selected.add(selector(item)));
        selected
    }

    /// Collects the elements that satisfy `predicate` into a new List, keeping their original
    /// order. This is the contract's `where` operation.
    fn filter<'a, P>(&'a self, mut predicate: P) -> List<Self::Item<'a>>
    where
        P: FnMut(Self::Item<'a>) -> bool,
    {
        let mut filtered = List::new();
        self.each(|item, _| {
            if predicate(item) {
                filtered.add(item);
            }
        });
        filtered
    }

    /// Collects every element into a [`Vec`], in order.
    fn to_array<'a>(&'a self) -> Vec<Self::Item<'a>> {
        let mut array = Vec::with_capacity(self.len());
        self.each(|item, _| array.push(item));
        array
    }

    /// Combines this sequence with `other` pairwise, using `selector`.
    ///
    /// Unlike [`Iterator::zip`], this runs to the length of the *longer* sequence. Once the
    /// shorter side runs out, `selector` receives None in its place.
    ///
    /// # Examples
    /// ```
    /// # use enumerable_lib::collections::{Enumerable, List};
    /// let numbers = List::from([1, 2]);
    /// let names = List::from(["one", "two", "three"]);
    /// let zipped = numbers.zip(&names, |n, s| (n.copied(), s.copied()));
    /// assert_eq!(
    ///     zipped,
    ///     List::from([(Some(1), Some("one")), (Some(2), Some("two")), (None, Some("three"))]),
    /// );
    /// ```
    fn zip<'a, 'b, E, R, F>(&'a self, other: &'b E, mut selector: F) -> List<R>
    where
        E: Enumerable + ?Sized,
        F: FnMut(Option<Self::Item<'a>>, Option<E::Item<'b>>) -> R,
    {
        let len = cmp::max(self.len(), other.len());
        let mut zipped = List::with_capacity(len);

        for index in 0..len {
            zipped.add(selector(self.get(index), other.get(index)));
        }

        zipped
    }
}
