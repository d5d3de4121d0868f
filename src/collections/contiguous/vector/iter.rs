use std::iter::FusedIterator;
use std::mem::ManuallyDrop;
use std::ptr;
use std::slice;

use super::Vector;
use crate::collections::contiguous::RawBuffer;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        // Disassemble the Vector without running its Drop; the iterator takes
        // over both the buffer and the element lifetimes.
        let vec = ManuallyDrop::new(self);

        IntoIter {
            // SAFETY: vec is never dropped or used again, so the buffer has
            // exactly one owner.
            buf: unsafe { ptr::read(&vec.buf) },
            front: 0,
            back: vec.len,
        }
    }
}

/// An owned iterator over a [`Vector`]'s elements, in index order from the
/// front and reverse index order from the back.
///
/// Elements in `[front, back)` are still live; everything outside has been
/// moved out already. Whatever remains when the iterator is dropped is
/// dropped in place.
pub struct IntoIter<T> {
    pub(crate) buf: RawBuffer<T>,
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            None
        } else {
            // SAFETY: front < back <= cap, and the slot holds a live element
            // which this bitwise read moves out.
            let value = unsafe { self.buf.slot(self.front).read() };
            self.front += 1;
            Some(value)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            None
        } else {
            self.back -= 1;
            // SAFETY: back now indexes the last live element, moved out by
            // this bitwise read.
            Some(unsafe { self.buf.slot(self.back).read() })
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for i in self.front..self.back {
            // SAFETY: The unconsumed range still holds live elements; each is
            // dropped exactly once before the buffer releases itself.
            unsafe { ptr::drop_in_place(self.buf.slot(i)) }
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
