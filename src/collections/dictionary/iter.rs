use std::iter::{FusedIterator, Zip};
use std::slice::Iter as SliceIter;

use super::{Dictionary, KeyValuePair};

impl<'a, K, V> IntoIterator for &'a Dictionary<K, V> {
    type Item = KeyValuePair<&'a K, &'a V>;

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            inner: self.keys.iter().zip(self.values.iter()),
        }
    }
}

impl<K, V> IntoIterator for Dictionary<K, V> {
    type Item = KeyValuePair<K, V>;

    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.keys.into_iter().zip(self.values),
        }
    }
}

/// A borrowed iterator over the entries of a [`Dictionary`], in entry order.
pub struct Iter<'a, K, V> {
    // Walking both Lists in lockstep is how pairs are synthesized.
    pub(crate) inner: Zip<SliceIter<'a, K>, SliceIter<'a, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = KeyValuePair<&'a K, &'a V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(KeyValuePair::from)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(KeyValuePair::from)
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}

/// An owned iterator over the entries of a [`Dictionary`], in entry order.
pub struct IntoIter<K, V> {
    pub(crate) inner: Zip<std::vec::IntoIter<K>, std::vec::IntoIter<V>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = KeyValuePair<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(KeyValuePair::from)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(KeyValuePair::from)
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}
