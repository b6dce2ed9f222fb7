use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::slice::Iter;

use crate::collections::{Enumerable, Flow, ReadOnlyCollection};

/// A first-in-first-out sequence. Elements join at the back with [`enqueue`](Queue::enqueue) and
/// leave from the front with [`dequeue`](Queue::dequeue).
///
/// As with [`List`](crate::collections::List), every [`Enumerable`] query is answered by a
/// [`ReadOnlyCollection`] over the Queue's own storage, front first.
///
/// Dequeuing from an empty Queue isn't an error: it returns None and leaves the Queue untouched.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Queue.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `enqueue` | `O(1)`* |
/// | `dequeue` | `O(n)` |
/// | `peek` | `O(1)` |
/// | `contains` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* Amortized, growth of the storage may take `O(n)`.
///
/// # Examples
/// ```
/// # use enumerable_lib::collections::{Enumerable, Queue};
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.first(), Some(&2));
/// assert_eq!(queue.dequeue(), Some(2));
/// assert_eq!(queue.dequeue(), None);
/// ```
#[derive(PartialEq, Eq, Hash)]
pub struct Queue<T> {
    pub(crate) items: Vec<T>,
}

impl<T> Queue<T> {
    /// Creates a new, empty Queue.
    pub const fn new() -> Queue<T> {
        Queue {
            items: Vec::new(),
        }
    }

    /// Returns the number of elements waiting in the Queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the Queue contains no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns a read-only view over the Queue's storage, front first.
    pub fn as_read_only(&self) -> ReadOnlyCollection<'_, T> {
        ReadOnlyCollection::new(&self.items)
    }

    /// Adds `item` to the back of the Queue.
    pub fn enqueue(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes the element at the front of the Queue and returns it, or returns None without
    /// modifying anything if the Queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Returns a reference to the element that the next [`dequeue`](Queue::dequeue) would remove.
    pub fn peek(&self) -> Option<&T> {
        self.as_read_only().first()
    }

    /// Returns true if any element is equal to `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.as_read_only().contains(item)
    }

    /// Removes every element from the Queue.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator over the elements of the Queue, front first.
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Enumerable for Queue<T> {
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

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Queue {
            items: self.items.clone(),
        }
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("contents", &self.items)
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        f.debug_list().entries(self.iter()).finish()
    }
}
