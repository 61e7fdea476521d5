//! A circular singly-linked list.
//!
//! [`RingList`] keeps its nodes in one closed cycle: the last node's
//! successor is the first. A single anchor (the *tail*) points at the most
//! recently appended element, and the two ways of walking the cycle run in
//! opposite directions by design:
//!
//! - **positional indexing** counts back from the anchor: position 0 is the
//!   freshest element, position `len - 1` the oldest;
//! - **iteration** is chronological: the oldest element first, the freshest
//!   last.
//!
//! Nodes live in an arena owned by the list, linked by stable slot indices
//! instead of owning pointers, so the reference cycle never turns into an
//! ownership cycle. Appending is `O(1)`; positional access and removal walk
//! the ring.
//!
//! The crate also ships the classic consumer of such a ring: the
//! Stuck in the Mud dice game ([`game`]), whose turn loop cycles through a
//! `RingList` of players indefinitely.
//!
//! # Examples
//!
//! ```
//! use ringlist::RingList;
//!
//! let mut list = RingList::new();
//! assert_eq!(list.len(), 0);
//!
//! list.push("A");
//! list.push("B");
//! list.push("C");
//! assert_eq!(list.len(), 3);
//!
//! // indexing: newest first
//! assert_eq!(list.get(0), Some(&"C"));
//! assert_eq!(list.get(2), Some(&"A"));
//!
//! // iteration: oldest first
//! let order: Vec<_> = list.iter().cloned().collect();
//! assert_eq!(order, vec!["A", "B", "C"]);
//! ```
//!
//! # Removal
//!
//! ```
//! use ringlist::RingList;
//!
//! let mut list: RingList<_> = vec![11, 12, 13].into_iter().collect();
//!
//! // by value: first match in scan order, absence is not an error
//! assert_eq!(list.remove_item(&12), true);
//! assert_eq!(list.remove_item(&99), false);
//!
//! // by position: out of range is an error, checked before any mutation
//! assert_eq!(list.remove(0), Ok(13));
//! assert!(list.remove(5).is_err());
//! ```
//!
//! # From Iterator
//!
//! ```
//! use ringlist::RingList;
//!
//! let list: RingList<_> = (0..5).collect();
//! let list2: RingList<_> = vec![0, 1, 2, 3, 4].into_iter().collect();
//! assert_eq!(list, list2);
//! ```

#![deny(missing_docs)]

mod error;
mod ringlist;

pub mod game;
pub mod player;

pub use crate::error::RangeError;
pub use crate::ringlist::{IntoIter, Iter, RingList};
