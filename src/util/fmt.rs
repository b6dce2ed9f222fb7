use std::fmt::{self, Debug, Formatter};

/// A borrowed dictionary entry that debug-prints as `key: value`, without the quoting a
/// pre-rendered string would get inside a debug list.
pub struct DebugEntry<'a, K, V>(pub &'a K, pub &'a V);

impl<K: Debug, V: Debug> Debug for DebugEntry<'_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)?;
        write!(f, ": ")?;
        self.1.fmt(f)
    }
}
