use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Index;
use std::slice::Iter;

use crate::collections::{Enumerable, Flow};
use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// A read-only view over a sequence owned elsewhere.
///
/// A ReadOnlyCollection never adds or removes elements. It is the reference implementation of the
/// [`Enumerable`] primitives, which it answers directly against the borrowed slice. Queries that
/// produce new sequences ([`select`](Enumerable::select), [`filter`](Enumerable::filter),
/// [`reverse`](Enumerable::reverse)) return freshly allocated [`List`](crate::collections::List)s
/// and leave the viewed storage alone.
///
/// Elements are yielded as `&'s T`, borrowing from the underlying storage rather than from the
/// view, so a view can be created, queried and dropped without restricting how long its results
/// live.
///
/// # Examples
/// ```
/// # use enumerable_lib::collections::{Enumerable, ReadOnlyCollection};
/// let data = [3, 1, 4, 1, 5];
/// let view = ReadOnlyCollection::new(&data);
/// assert_eq!(view.first_where(|i| *i > 3), Some(&4));
/// assert_eq!(view.index_of(&1), Some(1));
/// ```
pub struct ReadOnlyCollection<'s, T> {
    pub(crate) items: &'s [T],
}

impl<'s, T> ReadOnlyCollection<'s, T> {
    /// Creates a new view over `items`.
    pub const fn new(items: &'s [T]) -> ReadOnlyCollection<'s, T> {
        ReadOnlyCollection { items }
    }

    /// Returns the length of the viewed sequence.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the viewed sequence contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the viewed sequence as a slice, borrowed for as long as the underlying storage.
    pub const fn as_slice(&self) -> &'s [T] {
        self.items
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[track_caller]
    pub fn at(&self, index: usize) -> &'s T {
        self.try_at(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_at(&self, index: usize) -> Result<&'s T, IndexOutOfBounds> {
        IndexOutOfBounds::check(index, self.len())?;
        Ok(&self.items[index])
    }

    /// Returns an iterator over the viewed elements.
    pub fn iter(&self) -> Iter<'s, T> {
        self.items.iter()
    }

    /// Returns the lowest index holding an element equal to `item`, or None if there isn't one.
    pub fn index_of<Q>(&self, item: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let mut found = None;
        self.until(|element, index| {
            let element: &Q = element.borrow();
            if element == item {
                found = Some(index);
            }
            found.is_none()
        });
        found
    }

    /// Returns true if any element is equal to `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.index_of(item).is_some()
    }
}

impl<'s, T> Enumerable for ReadOnlyCollection<'s, T> {
    type Item<'a> = &'s T where Self: 'a;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn get<'a>(&'a self, index: usize) -> Option<Self::Item<'a>> {
        self.items.get(index)
    }

    fn until<'a, F, R>(&'a self, mut action: F)
    where
        F: FnMut(Self::Item<'a>, usize) -> R,
        R: Into<Flow>,
    {
        for (index, item) in self.items.iter().enumerate() {
            let flow: Flow = action(item, index).into();
            if flow.is_break() {
                break;
            }
        }
    }

    fn from_last_until<'a, F, R>(&'a self, mut action: F)
    where
        F: FnMut(Self::Item<'a>, usize) -> R,
        R: Into<Flow>,
    {
        for (index, item) in self.items.iter().enumerate().rev() {
            let flow: Flow = action(item, index).into();
            if flow.is_break() {
                break;
            }
        }
    }
}

impl<'s, T> Index<usize> for ReadOnlyCollection<'s, T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        self.at(index)
    }
}

impl<'s, T> From<&'s [T]> for ReadOnlyCollection<'s, T> {
    fn from(value: &'s [T]) -> Self {
        ReadOnlyCollection::new(value)
    }
}

impl<'s, T, const N: usize> From<&'s [T; N]> for ReadOnlyCollection<'s, T> {
    fn from(value: &'s [T; N]) -> Self {
        ReadOnlyCollection::new(value)
    }
}

// A view is just a shared reference, so it can be copied regardless of T.
impl<'s, T> Clone for ReadOnlyCollection<'s, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'s, T> Copy for ReadOnlyCollection<'s, T> {}

impl<'s, T: PartialEq> PartialEq for ReadOnlyCollection<'s, T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<'s, T: Eq> Eq for ReadOnlyCollection<'s, T> {}

impl<'s, T: Debug> Debug for ReadOnlyCollection<'s, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadOnlyCollection")
            .field("contents", &self.items)
            .field("len", &self.len())
            .finish()
    }
}

impl<'s, T: Debug> Display for ReadOnlyCollection<'s, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "&")?;
        f.debug_list().entries(self.iter()).finish()
    }
}
