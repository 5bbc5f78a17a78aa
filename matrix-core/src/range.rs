//! `(begin, end)` cursor pairs as standard iterators.
//!
//! These let the std iterator algorithms (`count`, `position`, `find`,
//! `filter`, `sum`, `rev`, ...) run over any row, column, diagonal or whole
//! traversal without knowing about cursors.

use std::iter::FusedIterator;

use crate::matrix::Matrix;
use crate::traits::{MatrixCursor, MutableCursor};

/// Shared-reference iterator over the elements in `[front, back)`.
#[derive(Debug)]
pub struct CursorRange<'a, T, C> {
    matrix: &'a Matrix<T>,
    front: C,
    back: C,
}

impl<'a, T, C: MatrixCursor> CursorRange<'a, T, C> {
    pub(crate) fn new(matrix: &'a Matrix<T>, begin: C, end: C) -> Self {
        // The range stops where `begin` would; an inverted range is empty.
        let end = end.bounded_like(&begin).max(begin);
        Self {
            matrix,
            front: begin,
            back: end,
        }
    }

    /// Cursor on the next element `next()` would yield.
    pub fn front(&self) -> C {
        self.front
    }

    /// Cursor one past the last element `next_back()` would yield.
    pub fn back(&self) -> C {
        self.back
    }
}

impl<T, C: MatrixCursor> Clone for CursorRange<'_, T, C> {
    fn clone(&self) -> Self {
        Self {
            matrix: self.matrix,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, T, C: MatrixCursor> Iterator for CursorRange<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        let matrix: &'a Matrix<T> = self.matrix;
        let item = matrix.get_at(self.front.post_increment());
        debug_assert!(item.is_some(), "range crossed a sentinel");
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }

    fn nth(&mut self, n: usize) -> Option<&'a T> {
        let remaining = self.len();
        if n >= remaining {
            self.front = self.back;
            return None;
        }
        self.front += n as isize;
        self.next()
    }
}

impl<'a, T, C: MatrixCursor> DoubleEndedIterator for CursorRange<'a, T, C> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        self.back.decrement();
        let matrix: &'a Matrix<T> = self.matrix;
        matrix.get_at(self.back)
    }
}

impl<T, C: MatrixCursor> ExactSizeIterator for CursorRange<'_, T, C> {
    fn len(&self) -> usize {
        self.front.distance_to(&self.back).max(0) as usize
    }
}

impl<T, C: MatrixCursor> FusedIterator for CursorRange<'_, T, C> {}

/// Mutable iterator over the elements in `[begin, end)`, in traversal order.
///
/// The element references are collected up front by splitting the storage
/// into disjoint `&mut T`, which costs one pass over the matrix.
#[derive(Debug)]
pub struct CursorRangeMut<'a, T> {
    elements: std::vec::IntoIter<&'a mut T>,
}

impl<'a, T> CursorRangeMut<'a, T> {
    pub(crate) fn new<C: MutableCursor>(matrix: &'a mut Matrix<T>, begin: C, end: C) -> Self {
        let end = end.bounded_like(&begin);
        let len = begin.distance_to(&end).max(0) as usize;
        let mut slots: Vec<Option<&'a mut T>> = matrix.as_mut_slice().iter_mut().map(Some).collect();
        let mut elements = Vec::with_capacity(len);
        let mut cursor = begin;
        while cursor < end {
            if let Some(element) = cursor
                .element_index()
                .and_then(|index| slots.get_mut(index))
                .and_then(Option::take)
            {
                elements.push(element);
            }
            cursor.increment();
        }
        Self {
            elements: elements.into_iter(),
        }
    }
}

impl<'a, T> Iterator for CursorRangeMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.elements.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl<T> DoubleEndedIterator for CursorRangeMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.elements.next_back()
    }
}

impl<T> ExactSizeIterator for CursorRangeMut<'_, T> {}

impl<T> FusedIterator for CursorRangeMut<'_, T> {}
