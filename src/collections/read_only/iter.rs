use std::slice::Iter;

use super::ReadOnlyCollection;

impl<'s, T> IntoIterator for ReadOnlyCollection<'s, T> {
    type Item = &'s T;

    type IntoIter = Iter<'s, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'s, T> IntoIterator for &ReadOnlyCollection<'s, T> {
    type Item = &'s T;

    type IntoIter = Iter<'s, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
