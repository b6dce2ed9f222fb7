use derive_more::{Display, From};

/// A key and the value associated with it.
///
/// Pairs are snapshots: a [`Dictionary`](super::Dictionary) creates them while it is being
/// enumerated and never stores them, so changing a pair has no effect on the Dictionary it came
/// from.
///
/// # Examples
/// ```
/// # use enumerable_lib::collections::KeyValuePair;
/// let pair = KeyValuePair::from(("answer", 42));
/// assert_eq!(pair.to_string(), "answer: 42");
/// assert_eq!(pair.into_tuple(), ("answer", 42));
/// ```
#[derive(Debug, Display, From, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[display("{key}: {value}")]
pub struct KeyValuePair<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> KeyValuePair<K, V> {
    /// Creates a new pair from a `key` and `value`.
    pub const fn new(key: K, value: V) -> KeyValuePair<K, V> {
        KeyValuePair { key, value }
    }

    /// Splits the pair into a `(key, value)` tuple.
    pub fn into_tuple(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: Clone, V: Clone> KeyValuePair<&K, &V> {
    /// Creates an owned pair by cloning the borrowed key and value.
    pub fn cloned(self) -> KeyValuePair<K, V> {
        KeyValuePair {
            key: self.key.clone(),
            value: self.value.clone(),
        }
    }
}
