use std::fmt;
use std::marker::PhantomData;

use super::{distance, impl_cursor_ops, Access, Const, Direction, Mutable, Order, Span};
use crate::addressing::Shape;
use crate::identity::Identity;
use crate::matrix::Matrix;
use crate::traits::{MatrixCursor, MutableCursor};

/// Cursor over the elements of a matrix in row-major (`O = RowMajor`) or
/// column-major (`O = ColumnMajor`) order.
///
/// The position is the traversal index of order `O`. Sentinels are reported
/// as out-of-range coordinates:
///
/// | order         | forward end       | reverse end |
/// |---------------|-------------------|-------------|
/// | `RowMajor`    | `(rows, 0)`       | `(-1, 0)`   |
/// | `ColumnMajor` | `(0, columns)`    | `(0, -1)`   |
///
/// Row (or column) scoped cursors are ordinary cursors: the end of row `r` is
/// the same position as the begin of row `r + 1`.
pub struct LinearCursor<O, D, A> {
    shape: Shape,
    identity: Identity,
    index: isize,
    _marker: PhantomData<(O, D, A)>,
}

impl<O: Order, D: Direction, A: Access> LinearCursor<O, D, A> {
    fn new(shape: Shape, identity: Identity, index: isize) -> Self {
        Self {
            shape,
            identity,
            index,
            _marker: PhantomData,
        }
    }

    fn span(&self) -> Span {
        Span::whole(&self.shape)
    }

    /// Cursor on the first element (`at_end == false`) or on the sentinel
    /// (`at_end == true`) of `line` (a row for `RowMajor`, a column for
    /// `ColumnMajor`). Lines past the matrix collapse to the traversal end.
    pub(crate) fn line_bound<T>(matrix: &Matrix<T>, line: usize, at_end: bool) -> Self {
        let shape = matrix.shape();
        let line_len = O::line_len(&shape) as isize;
        let line_start = (line as isize).saturating_mul(line_len);
        let whole = Span::whole(&shape);
        let span = whole.clip(line_start, line_len);
        let index = if span.start == span.end {
            whole.sentinel::<D>()
        } else if at_end {
            span.sentinel::<D>()
        } else {
            span.first::<D>()
        };
        Self::new(shape, matrix.identity(), index)
    }

    /// Position in this cursor's traversal order.
    pub fn order_index(&self) -> isize {
        self.index
    }

    fn coordinates(&self) -> (isize, isize) {
        if self.index < 0 {
            O::before_begin()
        } else {
            O::coordinates(&self.shape, self.index)
        }
    }

    /// The same position, read only.
    pub fn as_const(&self) -> LinearCursor<O, D, Const> {
        LinearCursor::new(self.shape, self.identity, self.index)
    }
}

impl<O: Order, D: Direction, A: Access> MatrixCursor for LinearCursor<O, D, A> {
    fn begin_of<T>(matrix: &Matrix<T>) -> Self {
        let shape = matrix.shape();
        Self::new(shape, matrix.identity(), Span::whole(&shape).first::<D>())
    }

    fn end_of<T>(matrix: &Matrix<T>) -> Self {
        let shape = matrix.shape();
        Self::new(shape, matrix.identity(), Span::whole(&shape).sentinel::<D>())
    }

    fn at_coordinates<T>(matrix: &Matrix<T>, row: usize, column: usize) -> Self {
        let shape = matrix.shape();
        let (row, column) = (row as isize, column as isize);
        if shape.contains(row, column) {
            Self::new(shape, matrix.identity(), O::index(&shape, row, column))
        } else {
            Self::end_of(matrix)
        }
    }

    fn at_linear_index<T>(matrix: &Matrix<T>, index: usize) -> Self {
        let shape = matrix.shape();
        if index < shape.len() {
            let (row, column) = shape.coordinates(index as isize);
            Self::new(shape, matrix.identity(), O::index(&shape, row, column))
        } else {
            Self::end_of(matrix)
        }
    }

    fn shape(&self) -> Shape {
        self.shape
    }

    fn identity(&self) -> Identity {
        self.identity
    }

    fn row_nr(&self) -> isize {
        self.coordinates().0
    }

    fn column_nr(&self) -> isize {
        self.coordinates().1
    }

    fn element_index(&self) -> Option<usize> {
        if !self.span().contains(self.index) {
            return None;
        }
        let (row, column) = self.coordinates();
        Some(self.shape.linear_index(row, column) as usize)
    }

    fn advance(&mut self, n: isize) {
        self.index = self.span().step::<D>(self.index, n);
    }

    fn distance_to(&self, other: &Self) -> isize {
        distance::<D>(self.index, other.index)
    }
}

impl<O: Order, D: Direction> MutableCursor for LinearCursor<O, D, Mutable> {}

impl_cursor_ops!([O: Order, D: Direction, A: Access] LinearCursor<O, D, A>);

impl<O: Order, D: Direction, A: Access> Clone for LinearCursor<O, D, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<O: Order, D: Direction, A: Access> Copy for LinearCursor<O, D, A> {}

/// The empty cursor: no matrix, valid with every empty matrix.
impl<O: Order, D: Direction, A: Access> Default for LinearCursor<O, D, A> {
    fn default() -> Self {
        Self::new(
            Shape::EMPTY,
            Identity::NONE,
            Span::whole(&Shape::EMPTY).first::<D>(),
        )
    }
}

impl<O: Order, D: Direction> From<LinearCursor<O, D, Mutable>> for LinearCursor<O, D, Const> {
    fn from(cursor: LinearCursor<O, D, Mutable>) -> Self {
        cursor.as_const()
    }
}

impl<O: Order, D: Direction, A: Access> fmt::Debug for LinearCursor<O, D, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (row, column) = self.coordinates();
        f.debug_struct("LinearCursor")
            .field("order", &O::default())
            .field("direction", &D::default())
            .field("mutable", &A::MUTABLE)
            .field("row", &row)
            .field("column", &column)
            .field("identity", &self.identity)
            .finish()
    }
}
