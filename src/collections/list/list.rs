use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use crate::collections::{Enumerable, Flow, ReadOnlyCollection};
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// A mutable, ordered sequence addressed by index.
///
/// A List owns its storage exclusively. Every [`Enumerable`] query is answered by a
/// [`ReadOnlyCollection`] over that same storage (see [`as_read_only`](List::as_read_only)), so
/// Lists and views always agree on querying semantics.
///
/// Positional methods come in pairs: `try_*` variants return an [`IndexOutOfBounds`] error, while
/// the plain variants panic with it.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the List.
/// - `i`: The index of the item in question.
/// - `m`: The number of items being added.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `add` | `O(1)`* |
/// | `add_range` | `O(m)`* |
/// | `at` / `put` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove_at` | `O(n-i)` |
/// | `index_of` / `contains` | `O(n)` |
/// | `remove` / `remove_all` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* Amortized, growth of the storage may take `O(n)`.
#[derive(PartialEq, Eq, Hash)]
pub struct List<T> {
    pub(crate) items: Vec<T>,
}

impl<T> List<T> {
    /// Creates a new, empty List.
    ///
    /// # Examples
    /// ```
    /// # use enumerable_lib::collections::List;
    /// let list: List<u8> = List::new();
    /// assert_eq!(list.len(), 0);
    /// ```
    pub const fn new() -> List<T> {
        List {
            items: Vec::new(),
        }
    }

    /// Creates a new, empty List with room for `cap` elements before it needs to grow.
    pub fn with_capacity(cap: usize) -> List<T> {
        List {
            items: Vec::with_capacity(cap),
        }
    }

    /// Returns the length of the List.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the List contains no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a read-only view over the List's storage.
    pub fn as_read_only(&self) -> ReadOnlyCollection<'_, T> {
        ReadOnlyCollection::new(&self.items)
    }

    /// Appends `item` to the end of the List.
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Appends every element of `items` to the end of the List, in iteration order.
    ///
    /// # Examples
    /// ```
    /// # use enumerable_lib::collections::List;
    /// let mut list = List::from([1, 2]);
    /// list.add_range([3, 4]);
    /// list.add_range(List::from([5]));
    /// assert_eq!(list, List::from([1, 2, 3, 4, 5]));
    /// ```
    pub fn add_range<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.add(item);
        }
    }

    /// Inserts `item` at the provided `index`, moving all following elements back by one.
    /// Inserting at `len` is equivalent to [`add`](List::add).
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the List.
    #[track_caller]
    pub fn insert(&mut self, index: usize, item: T) {
        self.try_insert(index, item).throw()
    }

    /// Inserts `item` at the provided `index`, returning an [`Err`] on a failure rather than
    /// panicking.
    pub fn try_insert(&mut self, index: usize, item: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len() {
            return Err(IndexOutOfBounds { index, len: self.len() });
        }
        self.items.insert(index, item);
        Ok(())
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the List.
    #[track_caller]
    pub fn at(&self, index: usize) -> &T {
        self.try_at(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_at(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.as_read_only().try_at(index)
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the List.
    #[track_caller]
    pub fn at_mut(&mut self, index: usize) -> &mut T {
        self.try_at_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        IndexOutOfBounds::check(index, self.len())?;
        Ok(&mut self.items[index])
    }

    /// Replaces the element at the provided `index` with `item`, returning the old value.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the List.
    #[track_caller]
    pub fn put(&mut self, index: usize, item: T) -> T {
        self.try_put(index, item).throw()
    }

    /// Replaces the element at the provided `index` with `item`, returning an [`Err`] on a failure
    /// rather than panicking.
    pub fn try_put(&mut self, index: usize, item: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_at_mut(index)?, item))
    }

    /// Removes and returns the element at the provided `index`, moving all following elements
    /// forward to fill the gap.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the List.
    ///
    /// # Examples
    /// ```
    /// # use enumerable_lib::collections::List;
    /// let mut list = List::from(['a', 'b', 'c']);
    /// assert_eq!(list.remove_at(1), 'b');
    /// assert_eq!(list, List::from(['a', 'c']));
    /// ```
    #[track_caller]
    pub fn remove_at(&mut self, index: usize) -> T {
        self.try_remove_at(index).throw()
    }

    /// Removes and returns the element at the provided `index`, returning an [`Err`] on a failure
    /// rather than panicking.
    pub fn try_remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        IndexOutOfBounds::check(index, self.len())?;
        Ok(self.items.remove(index))
    }

    /// Removes every element from the List.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator over the elements of the List.
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    /// Returns an iterator over mutable references to the elements of the List.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.items.iter_mut()
    }
}

impl<T> List<T> {
    /// Returns the lowest index holding an element equal to `item`, or None if there isn't one.
    pub fn index_of<Q>(&self, item: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.as_read_only().index_of(item)
    }

    /// Returns true if any element is equal to `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.as_read_only().contains(item)
    }

    /// Removes the first element equal to `item` and returns it, or None if there wasn't one.
    pub fn remove<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let index = self.index_of(item)?;
        Some(self.items.remove(index))
    }

    /// Removes every element equal to `item`, returning how many were removed.
    ///
    /// # Examples
    /// ```
    /// # use enumerable_lib::collections::List;
    /// let mut list = List::from([1, 2, 1, 3, 1]);
    /// assert_eq!(list.remove_all(&1), 3);
    /// assert_eq!(list, List::from([2, 3]));
    /// ```
    pub fn remove_all<Q>(&mut self, item: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let initial_len = self.len();
        self.items.retain(|element| {
            let element: &Q = element.borrow();
            element != item
        });
        initial_len - self.len()
    }
}

impl<T> Enumerable for List<T> {
    type Item<'a> = &'a T where Self: 'a;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn get<'a>(&'a self, index: usize) -> Option<Self::Item<'a>> {
        self.as_read_only().get(index)
    }

    fn until<'a, F, R>(&'a self, action: F)
    where
        F: FnMut(Self::Item<'a>, usize) -> R,
        R: Into<Flow>,
    {
        self.as_read_only().until(action);
    }

    fn from_last_until<'a, F, R>(&'a self, action: F)
    where
        F: FnMut(Self::Item<'a>, usize) -> R,
        R: Into<Flow>,
    {
        self.as_read_only().from_last_until(action);
    }
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        self.at(index)
    }
}

impl<T> IndexMut<usize> for List<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.at_mut(index)
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(value: Vec<T>) -> Self {
        List { items: value }
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(value: [T; N]) -> Self {
        List { items: Vec::from(value) }
    }
}

impl<T> From<List<T>> for Vec<T> {
    fn from(value: List<T>) -> Self {
        value.items
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        List {
            items: self.items.clone(),
        }
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("List")
            .field("contents", &self.items)
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
