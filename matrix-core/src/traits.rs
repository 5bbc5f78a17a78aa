use std::fmt::Debug;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::addressing::Shape;
use crate::identity::Identity;
use crate::matrix::Matrix;

/// Random-access position over the elements of one [`Matrix`].
///
/// A cursor is a plain value: it remembers the shape and identity of the matrix
/// that created it plus its own position, and never borrows the matrix.
/// Elements are reached through the matrix (`matrix[cursor]`), so the same
/// cursor can be checked against the matrix at any later time with
/// [`MatrixCursor::is_valid_with`].
///
/// Every traversal has two sentinels: `end` (one past the last element) and,
/// implicitly, the `end` of the opposite direction. Offsets that would leave
/// the traversal clamp to the nearest sentinel. Because of that clamping
/// `(cursor + n) - n == cursor` only holds while `cursor + n` stays in range.
///
/// Equality and ordering follow traversal order, and `b - a` is the number of
/// steps from `a` to `b`.
pub trait MatrixCursor:
    Copy
    + Default
    + Debug
    + Ord
    + Add<isize, Output = Self>
    + Sub<isize, Output = Self>
    + AddAssign<isize>
    + SubAssign<isize>
    + Sub<Self, Output = isize>
{
    /// Cursor on the first element of the traversal over `matrix`.
    fn begin_of<T>(matrix: &Matrix<T>) -> Self;

    /// The end sentinel of the traversal over `matrix`.
    fn end_of<T>(matrix: &Matrix<T>) -> Self;

    /// Cursor on `(row, column)`, or the end sentinel if that is outside the matrix.
    fn at_coordinates<T>(matrix: &Matrix<T>, row: usize, column: usize) -> Self;

    /// Cursor on the element with row-major index `index`, or the end sentinel.
    fn at_linear_index<T>(matrix: &Matrix<T>, index: usize) -> Self;

    fn shape(&self) -> Shape;

    fn identity(&self) -> Identity;

    fn row_nr(&self) -> isize;

    fn column_nr(&self) -> isize;

    /// Row-major storage index of the element under the cursor, `None` on a sentinel.
    fn element_index(&self) -> Option<usize>;

    /// Moves `n` steps along the traversal (backwards for negative `n`), clamping at the sentinels.
    fn advance(&mut self, n: isize);

    /// Signed number of steps from `self` to `other`.
    fn distance_to(&self, other: &Self) -> isize;

    fn retreat(&mut self, n: isize) {
        self.advance(n.saturating_neg());
    }

    /// Pre-increment.
    fn increment(&mut self) -> &mut Self {
        self.advance(1);
        self
    }

    /// Pre-decrement.
    fn decrement(&mut self) -> &mut Self {
        self.advance(-1);
        self
    }

    /// Post-increment: moves forward and returns the previous position.
    fn post_increment(&mut self) -> Self {
        let previous = *self;
        self.advance(1);
        previous
    }

    /// Post-decrement: moves backward and returns the previous position.
    fn post_decrement(&mut self) -> Self {
        let previous = *self;
        self.advance(-1);
        previous
    }

    /// Whether `other` stops at the same sentinels as `self`.
    ///
    /// Only cursors with equal bounds form a usable `[begin, end)` range.
    fn same_bounds(&self, _other: &Self) -> bool {
        true
    }

    /// `self` moved into the bounds of `other`, clamped to its sentinels.
    fn bounded_like(&self, _other: &Self) -> Self {
        *self
    }

    fn is_sentinel(&self) -> bool {
        self.element_index().is_none()
    }

    /// Whether this cursor may be used with `matrix`.
    ///
    /// True if the cursor was created from `matrix` and the matrix storage has
    /// not been replaced since (resize, clear, take). Cursors of an empty
    /// matrix, including default-constructed ones, are valid with every empty
    /// matrix and with no non-empty one.
    fn is_valid_with<T>(&self, matrix: &Matrix<T>) -> bool {
        (matrix.is_empty() && self.shape().is_empty()) || self.identity() == matrix.identity()
    }
}

/// Marker for cursors that allow writing through [`IndexMut`](std::ops::IndexMut).
pub trait MutableCursor: MatrixCursor {}
