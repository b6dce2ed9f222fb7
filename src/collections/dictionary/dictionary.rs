use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};

use super::{Iter, KeyValuePair};
use crate::collections::{Enumerable, Flow, List, ReadOnlyCollection};
use crate::util::fmt::DebugEntry;
use crate::util::option::OptionExtension;

/// An insertion-ordered map of unique keys to values, stored as two parallel [`List`]s.
///
/// Keys only need to implement [`PartialEq`]: there is no hashing or ordering involved, and every
/// lookup is a linear scan over the keys. Entries keep the position they were first inserted at,
/// even when their value is overwritten, and that order is the order of enumeration.
///
/// The Dictionary implements [`Enumerable`] over [`KeyValuePair`]s of references, which are
/// created from the two Lists as they are needed.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the Dictionary.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `put` | `O(n)` |
/// | `retrieve` | `O(n)` |
/// | `remove` | `O(n)` |
/// | `contains_key` / `contains_value` | `O(n)` |
/// | `keys` / `values` | `O(1)` |
/// | `to_list` | `O(n)` |
///
/// # Examples
/// ```
/// # use enumerable_lib::collections::{Dictionary, Enumerable};
/// let mut dict = Dictionary::new();
/// dict.put("a", 1);
/// dict.put("b", 2);
/// dict.put("a", 3);
///
/// assert_eq!(dict.len(), 2);
/// assert_eq!(dict.retrieve("a"), Some(&3));
/// assert_eq!(dict.keys().as_slice(), &["a", "b"]);
/// assert_eq!(dict.first().map(|pair| *pair.key), Some("a"));
/// ```
pub struct Dictionary<K, V> {
    pub(crate) keys: List<K>,
    pub(crate) values: List<V>,
}

impl<K, V> Dictionary<K, V> {
    /// Creates a new, empty Dictionary.
    pub const fn new() -> Dictionary<K, V> {
        Dictionary {
            keys: List::new(),
            values: List::new(),
        }
    }

    /// Returns the number of entries in the Dictionary.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the Dictionary contains no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a read-only view over the keys, in entry order.
    pub fn keys(&self) -> ReadOnlyCollection<'_, K> {
        self.keys.as_read_only()
    }

    /// Returns a read-only view over the values, in entry order.
    pub fn values(&self) -> ReadOnlyCollection<'_, V> {
        self.values.as_read_only()
    }

    /// Returns an iterator over the entries of the Dictionary, in entry order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Removes every entry from the Dictionary.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }
}

impl<K: PartialEq, V> Dictionary<K, V> {
    /// Associates `value` with `key`. If the key is already present, its value is replaced in
    /// place, keeping the entry's position, and the previous value is returned. Otherwise the entry
    /// is added to the end.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.keys.index_of(&key) {
            Some(index) => Some(self.values.put(index, value)),
            None => {
                self.keys.add(key);
                self.values.add(value);
                None
            },
        }
    }

    /// Returns a reference to the value associated with `key`, or None if the key isn't present.
    pub fn retrieve<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let index = self.keys.index_of(key)?;
        Some(self.values.at(index))
    }

    /// Returns a mutable reference to the value associated with `key`, or None if the key isn't
    /// present.
    pub fn retrieve_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let index = self.keys.index_of(key)?;
        Some(self.values.at_mut(index))
    }

    /// Removes the entry for `key`, returning its value, or None if the key isn't present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let index = self.keys.index_of(key)?;
        self.keys.remove_at(index);
        Some(self.values.remove_at(index))
    }

    /// Returns true if an entry exists for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.keys.contains(key)
    }
}

impl<K, V> Dictionary<K, V> {
    /// Returns true if any entry holds a value equal to `value`.
    pub fn contains_value<Q>(&self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.values.contains(value)
    }
}

impl<K: Clone, V: Clone> Dictionary<K, V> {
    /// Creates a List of owned pairs holding every entry, in entry order. The List is a snapshot
    /// and doesn't follow later changes to the Dictionary.
    pub fn to_list(&self) -> List<KeyValuePair<K, V>> {
        self.select(|pair| pair.cloned())
    }
}

impl<K, V> Enumerable for Dictionary<K, V> {
    type Item<'a> = KeyValuePair<&'a K, &'a V> where Self: 'a;

    fn len(&self) -> usize {
        self.keys.len()
    }

    fn get<'a>(&'a self, index: usize) -> Option<Self::Item<'a>> {
        let key = self.keys.get(index)?;
        // UNREACHABLE: keys and values always have the same length.
        let value = self.values.get(index).unreachable();
        Some(KeyValuePair::new(key, value))
    }

    fn until<'a, F, R>(&'a self, mut action: F)
    where
        F: FnMut(Self::Item<'a>, usize) -> R,
        R: Into<Flow>,
    {
        for (index, pair) in self.iter().enumerate() {
            let flow: Flow = action(pair, index).into();
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
        for (index, pair) in self.iter().enumerate().rev() {
            let flow: Flow = action(pair, index).into();
            if flow.is_break() {
                break;
            }
        }
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for Dictionary<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Dictionary::new();
        dict.extend(iter);
        dict
    }
}

impl<K: PartialEq, V> Extend<(K, V)> for Dictionary<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: PartialEq, V, const N: usize> From<[(K, V); N]> for Dictionary<K, V> {
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}

impl<K, V> Default for Dictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for Dictionary<K, V> {
    fn clone(&self) -> Self {
        Dictionary {
            keys: self.keys.clone(),
            values: self.values.clone(),
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Dictionary<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys && self.values == other.values
    }
}

impl<K: Eq, V: Eq> Eq for Dictionary<K, V> {}

impl<K: Debug, V: Debug> Debug for Dictionary<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let entries = self.select(|pair| DebugEntry(pair.key, pair.value));
        f.debug_struct("Dictionary")
            .field("entries", &entries.as_read_only().as_slice())
            .field("len", &self.len())
            .finish()
    }
}

impl<K: Debug, V: Debug> Display for Dictionary<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter().map(KeyValuePair::into_tuple)).finish()
    }
}
