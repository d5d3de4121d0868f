use std::fmt::{self, Debug, Formatter};

use super::{AccessError, IndexOutOfBounds, Node, NodeIndex, SENTINEL};
use crate::collections::contiguous::Vector;
use crate::collections::slot::Slot;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A doubly linked list: a circular ring of nodes anchored by a permanent
/// sentinel node that never holds an element.
///
/// Nodes live in an arena ([`Vector<Node<T>>`]) and link to each other by
/// stable index rather than by address, so `prev`/`next` can never dangle;
/// the sentinel occupies index 0 for the whole life of the list. Unlinked
/// slots are parked on a free list and reused by later insertions. Each
/// node's payload is a [`Slot<T>`], engaged for every linked data node and
/// permanently empty for the sentinel.
///
/// The sentinel exists so that splicing and unlinking at either end never
/// special-case an empty or one-element list: the sentinel is always a valid
/// ring member to link against.
///
/// # Invariants
/// - Following `next` from the sentinel `len` times returns to the sentinel.
/// - `next(prev(n)) == n` and `prev(next(n)) == n` for every linked node,
///   sentinel included.
/// - `len` counts non-sentinel linked nodes and is maintained incrementally,
///   never recomputed by traversal.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` / `back` | `O(1)` |
/// | `push_front` / `push_back` | `O(1)`* |
/// | `pop_front` / `pop_back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `contains` | `O(n)` |
///
/// \* Amortized: a push that finds the free list empty appends to the arena,
/// which may relocate it.
pub struct LinkedList<T> {
    /// Arena of ring members; index 0 is the sentinel.
    pub(crate) nodes: Vector<Node<T>>,
    /// Arena slots whose nodes have been unlinked, available for reuse.
    pub(crate) free: Vector<NodeIndex>,
    pub(crate) len: usize,
}

impl<T> LinkedList<T> {
    /// Creates an empty list: the sentinel's `next` and `prev` both point at
    /// itself.
    ///
    /// # Examples
    /// ```
    /// # use raw_containers::collections::linked::LinkedList;
    /// let list: LinkedList<u8> = LinkedList::new();
    /// assert_eq!(list.len(), 0);
    /// ```
    pub fn new() -> LinkedList<T> {
        let mut nodes = Vector::with_cap(1);
        nodes.push(Node {
            payload: Slot::new(),
            prev: SENTINEL,
            next: SENTINEL,
        });

        LinkedList {
            nodes,
            free: Vector::new(),
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element, if any.
    pub fn front(&self) -> Option<&T> {
        self.payload(self.nodes[SENTINEL].next)
    }

    /// Returns a reference to the last element, if any.
    pub fn back(&self) -> Option<&T> {
        self.payload(self.nodes[SENTINEL].prev)
    }

    /// Inserts `value` at the front of the list, O(1).
    ///
    /// # Examples
    /// ```
    /// # use raw_containers::collections::linked::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push_back(1);
    /// list.push_front(0);
    /// list.push_back(2);
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 1, 2]);
    /// ```
    pub fn push_front(&mut self, value: T) {
        self.splice_after(SENTINEL, value);
    }

    /// Inserts `value` at the back of the list, O(1).
    pub fn push_back(&mut self, value: T) {
        self.splice_after(self.nodes[SENTINEL].prev, value);
    }

    /// Removes and returns the first element, or [`None`] if the list is
    /// empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            Some(self.unlink(self.nodes[SENTINEL].next))
        }
    }

    /// Removes and returns the last element, or [`None`] if the list is
    /// empty.
    ///
    /// # Examples
    /// ```
    /// # use raw_containers::collections::linked::LinkedList;
    /// let mut list: LinkedList<_> = (0..3).collect();
    /// assert_eq!(list.pop_back(), Some(2));
    /// assert_eq!(list.pop_front(), Some(0));
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            Some(self.unlink(self.nodes[SENTINEL].prev))
        }
    }

    /// Returns a reference to the element at `index`, seeking from whichever
    /// end is nearer.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at `index`, or the
    /// [`AccessError`] describing the failed access.
    ///
    /// # Examples
    /// ```
    /// # use raw_containers::collections::linked::LinkedList;
    /// let list: LinkedList<_> = (0..3).collect();
    /// assert_eq!(list.try_get(1), Ok(&1));
    /// assert!(list.try_get(3).is_err());
    /// ```
    pub fn try_get(&self, index: usize) -> Result<&T, AccessError> {
        if index >= self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            }
            .into());
        }

        Ok(self.nodes[self.seek(index)].payload.value()?)
    }

    /// Returns true if the list contains an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }
}

impl<T> LinkedList<T> {
    /// Allocates a ring member for `node`, reusing a free arena slot when one
    /// exists.
    fn alloc_node(&mut self, node: Node<T>) -> NodeIndex {
        match self.free.pop() {
            Some(index) => {
                self.nodes[index] = node;
                index
            },
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            },
        }
    }

    /// Splices a new node holding `value` immediately after `anchor`. Works
    /// uniformly for any anchor because the sentinel is always a valid ring
    /// member; len += 1.
    fn splice_after(&mut self, anchor: NodeIndex, value: T) {
        let next = self.nodes[anchor].next;
        let index = self.alloc_node(Node {
            payload: Slot::filled(value),
            prev: anchor,
            next,
        });

        self.nodes[anchor].next = index;
        self.nodes[next].prev = index;
        self.len += 1;
    }

    /// Unlinks the node at `index`, relinking its neighbours to each other,
    /// and returns its payload; the arena slot is parked for reuse. The
    /// caller must pass a linked, non-sentinel node; len -= 1.
    fn unlink(&mut self, index: NodeIndex) -> T {
        debug_assert_ne!(index, SENTINEL);

        let Node { prev, next, .. } = self.nodes[index];
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.len -= 1;
        self.free.push(index);

        // SAFETY: Every linked data node carries an engaged payload.
        unsafe { self.nodes[index].payload.take().unreachable() }
    }

    /// Walks to the node holding element `index`, from the nearer end. The
    /// caller must check `index < len`.
    fn seek(&self, index: usize) -> NodeIndex {
        if index <= self.len / 2 {
            let mut node = self.nodes[SENTINEL].next;
            for _ in 0..index {
                node = self.nodes[node].next;
            }
            node
        } else {
            let mut node = self.nodes[SENTINEL].prev;
            for _ in index + 1..self.len {
                node = self.nodes[node].prev;
            }
            node
        }
    }

    /// Payload of the ring member at `index`; [`None`] exactly when `index`
    /// is the sentinel.
    fn payload(&self, index: NodeIndex) -> Option<&T> {
        self.nodes[index].payload.value().ok()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter.into_iter() {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(value);
        list
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Teardown needs no pop loop: dropping the arena drops every node's payload
// slot, linked or parked, exactly once.

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
