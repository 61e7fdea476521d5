use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;
use std::ops::Index;
use std::ops::IndexMut;

use super::{IntoIter, Iter, RingList};

impl<T> Clone for RingList<T>
where
    T: Clone,
{
    fn clone(&self) -> RingList<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for RingList<T> {
    #[inline]
    fn default() -> RingList<T> {
        RingList::new()
    }
}

impl<T> PartialEq for RingList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &RingList<T>) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().zip(other.iter()).all(|(l, r)| l == r)
    }
}

impl<T> Eq for RingList<T> where T: Eq {}

impl<T> PartialOrd for RingList<T>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &RingList<T>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T> Ord for RingList<T>
where
    T: Ord,
{
    #[inline]
    fn cmp(&self, other: &RingList<T>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T> Hash for RingList<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T> Index<usize> for RingList<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        let len = self.len();
        match self.get(index) {
            Some(value) => value,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                len, index
            ),
        }
    }
}

impl<T> IndexMut<usize> for RingList<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                len, index
            ),
        }
    }
}

impl<T> iter::FromIterator<T> for RingList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = RingList::new();
        list.extend(iter);
        list
    }
}

/// Extend the `RingList` with an iterator.
///
/// Each extracted element is appended in turn, so the last one ends up at
/// position 0.
impl<T> Extend<T> for RingList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elt in iter {
            self.push(elt);
        }
    }
}

impl<T> IntoIterator for RingList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a RingList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Debug for RingList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}
