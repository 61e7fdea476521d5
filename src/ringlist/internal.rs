use std::mem;

use super::RingList;

/// A node in the ring: one element plus the arena index of its successor.
///
/// `next` is a self-index when the ring holds a single element.
pub struct Node<T> {
    pub value: T,
    pub next: usize,
}

/// One arena cell. Vacant cells are threaded into a free list through
/// `next_free`, so removals hand their storage back for later insertions
/// and a long-lived list never grows past its high-water mark.
pub enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

impl<T> RingList<T> {
    pub(super) fn node(&self, index: usize) -> &Node<T> {
        match self.slots[index] {
            Slot::Occupied(ref node) => node,
            Slot::Vacant { .. } => unreachable!("ring links into vacant slot {}", index),
        }
    }

    pub(super) fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        match self.slots[index] {
            Slot::Occupied(ref mut node) => node,
            Slot::Vacant { .. } => unreachable!("ring links into vacant slot {}", index),
        }
    }

    /// Claims a slot for `node`, reusing the free list before growing.
    pub(super) fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free {
            Some(index) => {
                self.free = match self.slots[index] {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => unreachable!("occupied slot {} on the free list", index),
                };
                self.slots[index] = Slot::Occupied(node);
                index
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    /// Vacates the slot at `index` and returns the node that lived there.
    pub(super) fn release(&mut self, index: usize) -> Node<T> {
        let slot = mem::replace(
            &mut self.slots[index],
            Slot::Vacant { next_free: self.free },
        );
        self.free = Some(index);
        match slot {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!("released vacant slot {}", index),
        }
    }

    /// Follows `next` links `steps` times starting from `from`.
    pub(super) fn advance(&self, from: usize, steps: usize) -> usize {
        let mut current = from;
        for _ in 0..steps {
            current = self.node(current).next;
        }
        current
    }
}
