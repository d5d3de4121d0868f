use std::iter::FusedIterator;

use super::{LinkedList, NodeIndex, SENTINEL};
use crate::util::result::ResultExtension;

impl<T> LinkedList<T> {
    /// Returns a read-only bidirectional iterator, starting at the node after
    /// the sentinel and ending at the sentinel.
    ///
    /// The iterator is deliberately read-only: elements cannot be mutated
    /// through it, only replaced via pops and pushes.
    ///
    /// # Examples
    /// ```
    /// # use raw_containers::collections::linked::LinkedList;
    /// let list: LinkedList<_> = (0..4).collect();
    /// assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [3, 2, 1, 0]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.nodes[SENTINEL].next,
            back: self.nodes[SENTINEL].prev,
            remaining: self.len,
        }
    }
}

/// A borrowed iterator over a [`LinkedList`]'s elements.
///
/// `front` and `back` are the next ring positions to yield from either end;
/// once `remaining` reaches 0 both have met at the sentinel (or crossed past
/// each other) and the iterator is exhausted for good.
pub struct Iter<'a, T> {
    pub(crate) list: &'a LinkedList<T>,
    pub(crate) front: NodeIndex,
    pub(crate) back: NodeIndex,
    pub(crate) remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            None
        } else {
            let node = &self.list.nodes[self.front];
            self.front = node.next;
            self.remaining -= 1;
            // Linked data nodes always carry an engaged payload.
            Some(node.payload.value().throw())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            None
        } else {
            let node = &self.list.nodes[self.back];
            self.back = node.prev;
            self.remaining -= 1;
            // Linked data nodes always carry an engaged payload.
            Some(node.payload.value().throw())
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

/// An owned iterator over a [`LinkedList`], popping from either end.
pub struct IntoIter<T>(pub(crate) LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
