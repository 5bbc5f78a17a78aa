//! Cursor families over a [`Matrix`](crate::Matrix).
//!
//! Each family is one generic struct; its variants are selected with marker
//! types:
//!
//! * [`Direction`]: [`Forward`] or [`Reverse`] traversal,
//! * [`Access`]: [`Const`] (read only) or [`Mutable`] (write through `IndexMut`),
//! * [`Order`] (linear family only): [`RowMajor`] ("Z") or [`ColumnMajor`] ("N").
//!
//! Internally every cursor is a signed index into its family's forward
//! traversal order. The elements reachable by the cursor form a span
//! `[start, end)` of that order; a forward cursor ranges over `[start, end]`
//! (with `end` as sentinel) and a reverse cursor over `[start - 1, end - 1]`
//! (with `start - 1` as sentinel).

use std::fmt::Debug;

use crate::addressing::Shape;

pub mod diagonal;
pub mod linear;

mod sealed {
    pub trait Sealed {}
}

/// Traversal direction of a cursor.
pub trait Direction: sealed::Sealed + Copy + Default + Debug + Send + Sync + 'static {
    const REVERSED: bool;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Forward;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reverse;

impl sealed::Sealed for Forward {}
impl sealed::Sealed for Reverse {}

impl Direction for Forward {
    const REVERSED: bool = false;
}

impl Direction for Reverse {
    const REVERSED: bool = true;
}

/// Whether a cursor may write through to the matrix.
pub trait Access: sealed::Sealed + Copy + Default + Debug + Send + Sync + 'static {
    const MUTABLE: bool;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Const;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Mutable;

impl sealed::Sealed for Const {}
impl sealed::Sealed for Mutable {}

impl Access for Const {
    const MUTABLE: bool = false;
}

impl Access for Mutable {
    const MUTABLE: bool = true;
}

/// Element order of a linear cursor.
pub trait Order: sealed::Sealed + Copy + Default + Debug + Send + Sync + 'static {
    /// Traversal index of `(row, column)`.
    fn index(shape: &Shape, row: isize, column: isize) -> isize;

    /// `(row, column)` at traversal index `index`, for `index` in `[0, len]`.
    fn coordinates(shape: &Shape, index: isize) -> (isize, isize);

    /// Reported position of the reverse end sentinel.
    fn before_begin() -> (isize, isize);

    /// Number of elements in one line (row or column) of this order.
    fn line_len(shape: &Shape) -> usize;
}

/// Row by row, left to right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RowMajor;

/// Column by column, top to bottom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColumnMajor;

impl sealed::Sealed for RowMajor {}
impl sealed::Sealed for ColumnMajor {}

impl Order for RowMajor {
    fn index(shape: &Shape, row: isize, column: isize) -> isize {
        shape.linear_index(row, column)
    }

    fn coordinates(shape: &Shape, index: isize) -> (isize, isize) {
        shape.coordinates(index)
    }

    fn before_begin() -> (isize, isize) {
        (-1, 0)
    }

    fn line_len(shape: &Shape) -> usize {
        shape.columns()
    }
}

impl Order for ColumnMajor {
    fn index(shape: &Shape, row: isize, column: isize) -> isize {
        shape.column_major_index(row, column)
    }

    fn coordinates(shape: &Shape, index: isize) -> (isize, isize) {
        shape.column_major_coordinates(index)
    }

    fn before_begin() -> (isize, isize) {
        (0, -1)
    }

    fn line_len(shape: &Shape) -> usize {
        shape.rows()
    }
}

/// The elements `[start, end)` a cursor may visit, in forward traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub start: isize,
    pub end: isize,
}

impl Span {
    pub fn new(start: isize, end: isize) -> Self {
        Self { start, end }
    }

    pub fn whole(shape: &Shape) -> Self {
        Self::new(0, shape.size())
    }

    /// Sub-span `[start, start + len)`, clipped to `self`.
    pub fn clip(&self, start: isize, len: isize) -> Self {
        let clipped_start = start.clamp(self.start, self.end);
        let clipped_end = start.saturating_add(len).clamp(clipped_start, self.end);
        Self::new(clipped_start, clipped_end)
    }

    pub fn contains(&self, index: isize) -> bool {
        index >= self.start && index < self.end
    }

    pub fn first<D: Direction>(&self) -> isize {
        if D::REVERSED {
            self.end - 1
        } else {
            self.start
        }
    }

    pub fn sentinel<D: Direction>(&self) -> isize {
        if D::REVERSED {
            self.start - 1
        } else {
            self.end
        }
    }

    pub fn clamp<D: Direction>(&self, index: isize) -> isize {
        if D::REVERSED {
            index.clamp(self.start - 1, self.end - 1)
        } else {
            index.clamp(self.start, self.end)
        }
    }

    /// `index` moved `n` steps in direction `D`, clamped to the sentinels.
    pub fn step<D: Direction>(&self, index: isize, n: isize) -> isize {
        let delta = if D::REVERSED { n.saturating_neg() } else { n };
        self.clamp::<D>(index.saturating_add(delta))
    }
}

/// Steps from `from` to `to` in direction `D`.
pub(crate) fn distance<D: Direction>(from: isize, to: isize) -> isize {
    if D::REVERSED {
        from - to
    } else {
        to - from
    }
}

/// Comparison and arithmetic operators shared by all cursor families.
///
/// Cursors compare by traversal position only; shape and identity are not
/// consulted (mixing cursors of different matrices is a caller error that
/// `is_valid_with` detects).
macro_rules! impl_cursor_ops {
    ([$($generics:tt)*] $cursor:ty) => {
        impl<$($generics)*> PartialEq for $cursor {
            fn eq(&self, other: &Self) -> bool {
                self.index == other.index
            }
        }

        impl<$($generics)*> Eq for $cursor {}

        impl<$($generics)*> PartialOrd for $cursor {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl<$($generics)*> Ord for $cursor {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                0.cmp(&$crate::MatrixCursor::distance_to(self, other))
            }
        }

        impl<$($generics)*> std::ops::Add<isize> for $cursor {
            type Output = Self;

            fn add(mut self, n: isize) -> Self {
                $crate::MatrixCursor::advance(&mut self, n);
                self
            }
        }

        impl<$($generics)*> std::ops::Sub<isize> for $cursor {
            type Output = Self;

            fn sub(mut self, n: isize) -> Self {
                $crate::MatrixCursor::retreat(&mut self, n);
                self
            }
        }

        impl<$($generics)*> std::ops::AddAssign<isize> for $cursor {
            fn add_assign(&mut self, n: isize) {
                $crate::MatrixCursor::advance(self, n);
            }
        }

        impl<$($generics)*> std::ops::SubAssign<isize> for $cursor {
            fn sub_assign(&mut self, n: isize) {
                $crate::MatrixCursor::retreat(self, n);
            }
        }

        impl<$($generics)*> std::ops::Sub for $cursor {
            type Output = isize;

            fn sub(self, other: Self) -> isize {
                $crate::MatrixCursor::distance_to(&other, &self)
            }
        }
    };
}

pub(crate) use impl_cursor_ops;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_span_clamps_to_end() {
        let span = Span::new(0, 12);
        assert_eq!(span.first::<Forward>(), 0);
        assert_eq!(span.sentinel::<Forward>(), 12);
        assert_eq!(span.step::<Forward>(10, 5), 12);
        assert_eq!(span.step::<Forward>(3, -7), 0);
        assert_eq!(span.step::<Forward>(3, isize::MAX), 12);
        assert_eq!(span.step::<Forward>(3, isize::MIN), 0);
    }

    #[test]
    fn test_reverse_span_clamps_to_before_begin() {
        let span = Span::new(0, 12);
        assert_eq!(span.first::<Reverse>(), 11);
        assert_eq!(span.sentinel::<Reverse>(), -1);
        assert_eq!(span.step::<Reverse>(11, 1), 10);
        assert_eq!(span.step::<Reverse>(2, 10), -1);
        assert_eq!(span.step::<Reverse>(2, -20), 11);
    }

    #[test]
    fn test_clip_stays_inside() {
        let span = Span::new(0, 12);
        assert_eq!(span.clip(3, 3), Span::new(3, 6));
        assert_eq!(span.clip(10, 5), Span::new(10, 12));
        assert_eq!(span.clip(15, 3), Span::new(12, 12));
    }

    #[test]
    fn test_distance_follows_direction() {
        assert_eq!(distance::<Forward>(2, 5), 3);
        assert_eq!(distance::<Reverse>(5, 2), 3);
        assert_eq!(distance::<Reverse>(2, 5), -3);
    }
}
