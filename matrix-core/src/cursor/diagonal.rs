use std::fmt;
use std::marker::PhantomData;

use super::{distance, impl_cursor_ops, Access, Const, Direction, Mutable, Span};
use crate::addressing::Shape;
use crate::identity::Identity;
use crate::matrix::Matrix;
use crate::traits::{MatrixCursor, MutableCursor};

/// Part of the matrix a [`DiagonalCursor`] is bounded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    /// All diagonals; stepping past the end of one diagonal enters the next.
    #[default]
    Matrix,
    /// A single diagonal; stepping past its end yields its end sentinel.
    Diagonal(isize),
}

/// Cursor walking the matrix one anti-diagonal at a time.
///
/// Within a diagonal a forward cursor moves down-left (`row + 1`,
/// `column - 1`) and diagonals are visited from number `columns - 1` (through
/// `(0, 0)`) down to `-(rows - 1)`. A reverse cursor walks the same path
/// backwards.
///
/// The position is the index in diagonal order: the lengths of all preceding
/// diagonals plus the offset within the current one. The end sentinel of a
/// diagonal is reported one step past its last element (`diagonal_index ==
/// len`), the reverse sentinel one step before its first element
/// (`diagonal_index == -1`). A diagonal's end sentinel occupies the same
/// position in diagonal order as the first element of the next diagonal, so
/// the two compare equal.
pub struct DiagonalCursor<D, A> {
    shape: Shape,
    identity: Identity,
    index: isize,
    scope: Scope,
    _marker: PhantomData<(D, A)>,
}

fn diagonal_span(shape: &Shape, diagonal: isize) -> Span {
    let start = shape.diagonal_offset(diagonal);
    Span::new(start, start + shape.diagonal_len(diagonal))
}

impl<D: Direction, A: Access> DiagonalCursor<D, A> {
    fn new(shape: Shape, identity: Identity, index: isize, scope: Scope) -> Self {
        Self {
            shape,
            identity,
            index,
            scope,
            _marker: PhantomData,
        }
    }

    fn span(&self) -> Span {
        match self.scope {
            Scope::Matrix => Span::whole(&self.shape),
            Scope::Diagonal(diagonal) => diagonal_span(&self.shape, diagonal),
        }
    }

    /// Begin (`at_end == false`) or end sentinel of a single diagonal.
    pub(crate) fn diagonal_bound<T>(matrix: &Matrix<T>, diagonal: isize, at_end: bool) -> Self {
        let shape = matrix.shape();
        let span = diagonal_span(&shape, diagonal);
        let index = if at_end {
            span.sentinel::<D>()
        } else {
            span.first::<D>()
        };
        Self::new(shape, matrix.identity(), index, Scope::Diagonal(diagonal))
    }

    /// Cursor on element `index` of `diagonal`, scoped to that diagonal.
    ///
    /// `index` is counted from the top/right end regardless of direction and
    /// is clamped to the diagonal's sentinels.
    pub(crate) fn on_diagonal<T>(matrix: &Matrix<T>, diagonal: isize, index: isize) -> Self {
        let shape = matrix.shape();
        let span = diagonal_span(&shape, diagonal);
        let order = span.clamp::<D>(span.start.saturating_add(index));
        if !shape.has_diagonal(diagonal) {
            log::trace!("diagonal {diagonal} is outside a {}x{} matrix", shape.rows(), shape.columns());
        }
        Self::new(shape, matrix.identity(), order, Scope::Diagonal(diagonal))
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Position in diagonal order.
    pub fn order_index(&self) -> isize {
        self.index
    }

    /// Number of the diagonal the cursor is on (for sentinels, the diagonal they close).
    pub fn diagonal_nr(&self) -> isize {
        self.diagonal_coordinate().0
    }

    /// Offset from the top/right end of the current diagonal.
    pub fn diagonal_index(&self) -> isize {
        self.diagonal_coordinate().1
    }

    fn diagonal_coordinate(&self) -> (isize, isize) {
        let span = self.span();
        if span.contains(self.index) {
            return self.shape.diagonal_position(self.index);
        }
        let before_begin = self.index < span.start;
        let diagonal = match self.scope {
            Scope::Diagonal(diagonal) => diagonal,
            Scope::Matrix if self.shape.is_empty() => return (0, 0),
            Scope::Matrix if before_begin => self.shape.first_diagonal(),
            Scope::Matrix => self.shape.last_diagonal(),
        };
        if before_begin {
            (diagonal, -1)
        } else {
            (diagonal, self.shape.diagonal_len(diagonal))
        }
    }

    fn coordinates(&self) -> (isize, isize) {
        if self.shape.is_empty() {
            return (0, 0);
        }
        let (diagonal, index) = self.diagonal_coordinate();
        self.shape.diagonal_coordinates(diagonal, index)
    }

    /// The same position, read only.
    pub fn as_const(&self) -> DiagonalCursor<D, Const> {
        DiagonalCursor::new(self.shape, self.identity, self.index, self.scope)
    }
}

impl<D: Direction, A: Access> MatrixCursor for DiagonalCursor<D, A> {
    fn begin_of<T>(matrix: &Matrix<T>) -> Self {
        let shape = matrix.shape();
        let index = Span::whole(&shape).first::<D>();
        Self::new(shape, matrix.identity(), index, Scope::Matrix)
    }

    fn end_of<T>(matrix: &Matrix<T>) -> Self {
        let shape = matrix.shape();
        let index = Span::whole(&shape).sentinel::<D>();
        Self::new(shape, matrix.identity(), index, Scope::Matrix)
    }

    fn at_coordinates<T>(matrix: &Matrix<T>, row: usize, column: usize) -> Self {
        let shape = matrix.shape();
        let (row, column) = (row as isize, column as isize);
        if shape.contains(row, column) {
            let index = shape.diagonal_order(row, column);
            Self::new(shape, matrix.identity(), index, Scope::Matrix)
        } else {
            Self::end_of(matrix)
        }
    }

    fn at_linear_index<T>(matrix: &Matrix<T>, index: usize) -> Self {
        let shape = matrix.shape();
        if index < shape.len() {
            let (row, column) = shape.coordinates(index as isize);
            let order = shape.diagonal_order(row, column);
            Self::new(shape, matrix.identity(), order, Scope::Matrix)
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

    fn same_bounds(&self, other: &Self) -> bool {
        self.scope == other.scope
    }

    fn bounded_like(&self, other: &Self) -> Self {
        let index = other.span().clamp::<D>(self.index);
        Self::new(self.shape, self.identity, index, other.scope)
    }
}

impl<D: Direction> MutableCursor for DiagonalCursor<D, Mutable> {}

impl_cursor_ops!([D: Direction, A: Access] DiagonalCursor<D, A>);

impl<D: Direction, A: Access> Clone for DiagonalCursor<D, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Direction, A: Access> Copy for DiagonalCursor<D, A> {}

impl<D: Direction, A: Access> Default for DiagonalCursor<D, A> {
    fn default() -> Self {
        Self::new(
            Shape::EMPTY,
            Identity::NONE,
            Span::whole(&Shape::EMPTY).first::<D>(),
            Scope::Matrix,
        )
    }
}

impl<D: Direction> From<DiagonalCursor<D, Mutable>> for DiagonalCursor<D, Const> {
    fn from(cursor: DiagonalCursor<D, Mutable>) -> Self {
        cursor.as_const()
    }
}

impl<D: Direction, A: Access> fmt::Debug for DiagonalCursor<D, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (row, column) = self.coordinates();
        let (diagonal, diagonal_index) = self.diagonal_coordinate();
        f.debug_struct("DiagonalCursor")
            .field("direction", &D::default())
            .field("mutable", &A::MUTABLE)
            .field("scope", &self.scope)
            .field("row", &row)
            .field("column", &column)
            .field("diagonal", &diagonal)
            .field("diagonal_index", &diagonal_index)
            .field("identity", &self.identity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Scope;
    use crate::{ConstMCursor, ConstReverseMCursor, Matrix, MatrixCursor};

    fn sample() -> Matrix<i32> {
        Matrix::from_rows(vec![
            vec![-3, 2, 1],
            vec![6, -5, 4],
            vec![9, -8, 7],
            vec![12, -11, 10],
        ])
        .unwrap()
    }

    #[test]
    fn test_unbounded_walk_visits_diagonals_in_order() {
        let matrix = sample();
        let mut cursor: ConstMCursor = matrix.begin();
        let end: ConstMCursor = matrix.end();
        let mut visited = Vec::new();
        while cursor != end {
            visited.push(matrix[cursor]);
            cursor.increment();
        }
        assert_eq!(visited, vec![-3, 2, 6, 1, -5, 9, 4, -8, 12, 7, -11, 10]);
    }

    #[test]
    fn test_end_is_past_last_diagonal() {
        let matrix = sample();
        let end: ConstMCursor = matrix.end();
        assert_eq!(end.diagonal_nr(), -3);
        assert_eq!(end.diagonal_index(), 1);
        assert_eq!((end.row_nr(), end.column_nr()), (4, 1));
        assert_eq!(end.scope(), Scope::Matrix);
    }

    #[test]
    fn test_scoped_cursor_stops_at_diagonal_end() {
        let matrix = sample();
        let mut cursor: ConstMCursor = matrix.diagonal_begin(1);
        assert_eq!((cursor.row_nr(), cursor.column_nr()), (0, 1));
        cursor += 5;
        assert_eq!(cursor, matrix.diagonal_end(1));
        assert_eq!((cursor.row_nr(), cursor.column_nr()), (2, -1));
        assert_eq!(cursor.diagonal_index(), 2);
    }

    #[test]
    fn test_reverse_walk_ascends_diagonals() {
        let matrix = sample();
        let mut cursor: ConstReverseMCursor = matrix.begin();
        assert_eq!((cursor.row_nr(), cursor.column_nr()), (3, 2));
        cursor.increment();
        assert_eq!((cursor.row_nr(), cursor.column_nr()), (3, 1));
        assert_eq!(cursor.diagonal_nr(), -2);
        assert_eq!(cursor.diagonal_index(), 1);
        cursor.increment();
        assert_eq!((cursor.row_nr(), cursor.column_nr()), (2, 2));
        let end: ConstReverseMCursor = matrix.end();
        assert_eq!((end.row_nr(), end.column_nr()), (-1, 1));
        assert_eq!(end.diagonal_index(), -1);
    }

    #[test]
    fn test_on_diagonal_clamps_index() {
        let matrix = sample();
        let cursor: ConstMCursor = matrix.cursor_on_diagonal(0, 7);
        assert_eq!(cursor, matrix.diagonal_end(0));
        let cursor: ConstMCursor = matrix.cursor_on_diagonal(0, -4);
        assert_eq!(cursor, matrix.diagonal_begin(0));
        let cursor: ConstMCursor = matrix.cursor_on_diagonal(0, 1);
        assert_eq!(matrix[cursor], -5);
    }

    #[test]
    fn test_missing_diagonal_is_empty() {
        let matrix = sample();
        let begin: ConstMCursor = matrix.diagonal_begin(5);
        let end: ConstMCursor = matrix.diagonal_end(5);
        assert_eq!(begin, end);
        assert!(begin.is_sentinel());
        let begin: ConstMCursor = matrix.diagonal_begin(-9);
        assert_eq!(begin, matrix.end());
    }
}
