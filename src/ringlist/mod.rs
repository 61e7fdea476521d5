//! An arena-backed circular singly-linked list.

use crate::error::RangeError;

use self::internal::{Node, Slot};

mod internal;
mod iterator_impls;
mod trait_impls;

pub use self::iterator_impls::{IntoIter, Iter};

/// A circular singly-linked list.
///
/// The nodes form a single closed cycle. One anchor reference (the *tail*)
/// points at the most recently inserted element; the tail's successor is the
/// oldest surviving element. Positional indexing counts back from the anchor,
/// so position 0 is always the freshest element and position `len - 1` the
/// oldest, while [`iter`] walks the cycle the other way round: oldest first,
/// freshest last. The two orders are deliberately opposite.
///
/// Nodes live in an arena owned by the list and link to each other through
/// stable slot indices, never owning pointers, so the cycle involves no
/// shared ownership and tearing the list down is just dropping the arena.
///
/// [`iter`]: RingList::iter
///
/// # Examples
///
/// ```
/// use ringlist::RingList;
///
/// let mut list = RingList::new();
/// list.push("A");
/// list.push("B");
/// list.push("C");
///
/// // indexing: newest first
/// assert_eq!(list.get(0), Some(&"C"));
/// assert_eq!(list.get(2), Some(&"A"));
///
/// // iteration: oldest first
/// let order: Vec<_> = list.iter().collect();
/// assert_eq!(order, [&"A", &"B", &"C"]);
/// ```
pub struct RingList<T> {
    slots: Vec<Slot<T>>,
    /// Head of the vacant-slot chain.
    free: Option<usize>,
    /// Anchor into the cycle; `None` iff the list is empty.
    tail: Option<usize>,
    len: usize,
}

impl<T> RingList<T> {
    /// Creates an empty `RingList`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let list: RingList<u32> = RingList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> RingList<T> {
        RingList {
            slots: Vec::new(),
            free: None,
            tail: None,
            len: 0,
        }
    }

    /// Creates an empty `RingList` with room for `capacity` elements before
    /// the arena reallocates.
    #[inline]
    pub fn with_capacity(capacity: usize) -> RingList<T> {
        RingList {
            slots: Vec::with_capacity(capacity),
            free: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the `RingList`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let mut list = RingList::new();
    /// assert_eq!(list.len(), 0);
    /// list.push(1);
    /// assert_eq!(list.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Retrieves the element at `index`, or `None` if `index >= len`.
    ///
    /// Index 0 is the most recently inserted element; `len - 1` is the
    /// oldest. The walk takes `len - index` steps along the cycle.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let mut list = RingList::new();
    /// list.push(3);
    /// list.push(4);
    /// list.push(5);
    /// assert_eq!(list.get(0), Some(&5));
    /// assert_eq!(list.get(2), Some(&3));
    /// assert_eq!(list.get(3), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let tail = self.tail?;
        let at = self.advance(tail, self.len - index);
        Some(&self.node(at).value)
    }

    /// Retrieves the element at `index` mutably, or `None` if `index >= len`.
    ///
    /// Index 0 is the most recently inserted element.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let mut list = RingList::new();
    /// list.push(3);
    /// list.push(4);
    /// if let Some(elem) = list.get_mut(0) {
    ///     *elem = 7;
    /// }
    /// assert_eq!(list.get(0), Some(&7));
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let tail = self.tail?;
        let at = self.advance(tail, self.len - index);
        Some(&mut self.node_mut(at).value)
    }

    /// Appends an element in O(1). It becomes the freshest element
    /// (position 0) and the anchor of the cycle.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let mut list = RingList::new();
    /// list.push(1);
    /// list.push(2);
    /// assert_eq!(list.get(0), Some(&2));
    /// assert_eq!(list.get(1), Some(&1));
    /// ```
    pub fn push(&mut self, value: T) {
        match self.tail {
            None => {
                let index = self.alloc(Node { value, next: 0 });
                // sole node: the cycle is a self-link
                self.node_mut(index).next = index;
                self.tail = Some(index);
            }
            Some(tail) => {
                let oldest = self.node(tail).next;
                let index = self.alloc(Node {
                    value,
                    next: oldest,
                });
                self.node_mut(tail).next = index;
                self.tail = Some(index);
            }
        }
        self.len += 1;
    }

    /// Removes the first element equal to `value` in scan order and returns
    /// whether one was found.
    ///
    /// The scan starts one step past the anchor, i.e. at the oldest element,
    /// and probes at most `len` nodes. Absence of a match is a normal
    /// `false`, never an error, and leaves the list untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let mut list = RingList::new();
    /// list.push(1);
    /// list.push(2);
    /// assert_eq!(list.remove_item(&1), true);
    /// assert_eq!(list.remove_item(&7), false);
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn remove_item(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let tail = match self.tail {
            Some(tail) => tail,
            None => return false,
        };

        // `current` trails one node behind the probe so it ends up being
        // the predecessor of the match.
        let mut current = tail;
        let mut found = false;
        for _ in 0..self.len {
            if self.node(self.node(current).next).value == *value {
                found = true;
                break;
            }
            current = self.node(current).next;
        }
        if !found {
            return false;
        }

        let target = self.node(current).next;
        let after = self.node(target).next;
        self.node_mut(current).next = after;

        if self.len == 1 {
            self.tail = None;
        } else if target == tail {
            self.tail = Some(current);
        }

        self.release(target);
        self.len -= 1;
        true
    }

    /// Removes and returns the element at `index`.
    ///
    /// Index 0 is the most recently inserted element. Fails with a
    /// [`RangeError`] when `index >= len`; the check happens before any
    /// mutation. If the removed node was the anchor, the anchor moves to its
    /// predecessor; removing the last element empties the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let mut list = RingList::new();
    /// list.push(1);
    /// list.push(2);
    /// list.push(3);
    ///
    /// assert_eq!(list.remove(0), Ok(3));
    /// assert_eq!(list.get(0), Some(&2));
    /// assert!(list.remove(2).is_err());
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T, RangeError> {
        if index >= self.len {
            return Err(RangeError {
                index,
                len: self.len,
            });
        }
        let tail = self.tail.ok_or(RangeError {
            index,
            len: self.len,
        })?;

        // Walk `len - index` steps tracking the predecessor; the walk lands
        // on the target, position 0 being the anchor itself.
        let mut previous = tail;
        let mut current = tail;
        for _ in 0..(self.len - index) {
            previous = current;
            current = self.node(current).next;
        }

        let after = self.node(current).next;
        self.node_mut(previous).next = after;

        if self.len == 1 {
            self.tail = None;
        } else if current == tail {
            self.tail = Some(previous);
        }

        let node = self.release(current);
        self.len -= 1;
        Ok(node.value)
    }

    /// Provides a reference to the oldest element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let mut list = RingList::new();
    /// assert_eq!(list.front(), None);
    /// list.push(1);
    /// list.push(2);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn front(&self) -> Option<&T> {
        let tail = self.tail?;
        Some(&self.node(self.node(tail).next).value)
    }

    /// Provides a reference to the freshest element, or `None` if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let mut list = RingList::new();
    /// assert_eq!(list.back(), None);
    /// list.push(1);
    /// list.push(2);
    /// assert_eq!(list.back(), Some(&2));
    /// ```
    pub fn back(&self) -> Option<&T> {
        let tail = self.tail?;
        Some(&self.node(tail).value)
    }

    /// Returns `true` if the list contains an element equal to the given
    /// value.
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|value| value == x)
    }

    /// Removes all elements and hands the arena's slots back in one go.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let mut list = RingList::new();
    /// list.push(1);
    /// list.clear();
    /// assert!(list.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.tail = None;
        self.len = 0;
    }

    /// Returns an iterator visiting the elements in chronological order:
    /// the oldest element first, the freshest last. This is the reverse of
    /// positional indexing.
    ///
    /// The iterator borrows the list, so the ring cannot be mutated while an
    /// iteration is in progress.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let mut list = RingList::new();
    /// list.push(5);
    /// list.push(3);
    /// list.push(4);
    /// let order: Vec<&i32> = list.iter().collect();
    /// assert_eq!(order, [&5, &3, &4]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.tail.map(|tail| self.node(tail).next),
            remaining: self.len,
        }
    }
}
