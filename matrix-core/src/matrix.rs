use std::ops::{Index, IndexMut};

use crate::addressing::Shape;
use crate::cursor::diagonal::DiagonalCursor;
use crate::cursor::linear::LinearCursor;
use crate::cursor::{Access, ColumnMajor, Direction, Forward, Mutable, Order, RowMajor};
use crate::error::{MatrixError, Result};
use crate::identity::Identity;
use crate::range::{CursorRange, CursorRangeMut};
use crate::traits::{MatrixCursor, MutableCursor};

/// A dense matrix stored in row-major order.
///
/// Cursors are created through the factory methods (`begin`, `end`,
/// `cursor_at`, `row_begin`, ...) and dereferenced by indexing the matrix with
/// them. The matrix carries an [`Identity`] that is renewed whenever its
/// storage is replaced (`clone`, `resize`, `clear`, `take`); cursors created
/// before that no longer pass [`MatrixCursor::is_valid_with`].
#[derive(Debug)]
pub struct Matrix<T> {
    shape: Shape,
    data: Vec<T>, // data[row * columns + column]
    identity: Identity,
}

impl<T> Matrix<T> {
    fn with_storage(shape: Shape, data: Vec<T>) -> Self {
        debug_assert_eq!(shape.len(), data.len());
        let identity = Identity::fresh();
        log::trace!(
            "created {}x{} matrix with {:?}",
            shape.rows(),
            shape.columns(),
            identity
        );
        Self {
            shape,
            data,
            identity,
        }
    }

    /// Creates an empty `0 x 0` matrix.
    pub fn empty() -> Self {
        Self::with_storage(Shape::EMPTY, Vec::new())
    }

    /// Creates a `rows x columns` matrix with every element set to `fill`.
    pub fn new(rows: usize, columns: usize, fill: T) -> Self
    where
        T: Clone,
    {
        let shape = Shape::new(rows, columns);
        Self::with_storage(shape, vec![fill; shape.len()])
    }

    /// Creates a matrix from elements listed in row-major order.
    pub fn from_elements(rows: usize, columns: usize, elements: Vec<T>) -> Result<Self> {
        let shape = Shape::new(rows, columns);
        if elements.len() != shape.len() {
            return Err(MatrixError::InvalidDimensions(format!(
                "Data length ({}) does not match dimensions ({}x{})",
                elements.len(),
                rows,
                columns
            )));
        }
        Ok(Self::with_storage(shape, elements))
    }

    /// Creates a matrix from a list of rows, which must all have the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        let row_count = rows.len();
        let mut data = Vec::with_capacity(row_count * columns);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != columns {
                return Err(MatrixError::RaggedRows {
                    row,
                    expected: columns,
                    found: values.len(),
                });
            }
            data.extend(values);
        }
        Self::from_elements(row_count, columns, data)
    }

    /// Creates a matrix whose element at `(row, column)` is `f(row, column)`.
    pub fn from_fn(rows: usize, columns: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let shape = Shape::new(rows, columns);
        let mut data = Vec::with_capacity(shape.len());
        for row in 0..shape.rows() {
            for column in 0..shape.columns() {
                data.push(f(row, column));
            }
        }
        Self::with_storage(shape, data)
    }

    // --- Getters ---

    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    pub fn columns(&self) -> usize {
        self.shape.columns()
    }

    /// Returns the dimensions of the matrix as (rows, columns).
    pub fn dims(&self) -> (usize, usize) {
        (self.shape.rows(), self.shape.columns())
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn identity(&self) -> Identity {
        self.identity
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Gets the element at the specified row and column.
    /// Returns None if indices are out of bounds.
    pub fn get(&self, row: usize, column: usize) -> Option<&T> {
        if row < self.rows() && column < self.columns() {
            self.data.get(row * self.columns() + column)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        if row < self.rows() && column < self.columns() {
            let columns = self.columns();
            self.data.get_mut(row * columns + column)
        } else {
            None
        }
    }

    /// Gets the element with row-major index `index`.
    pub fn get_linear(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    pub fn get_linear_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    // --- Storage replacement ---

    fn renew_identity(&mut self) {
        let previous = self.identity;
        self.identity = Identity::fresh();
        log::debug!(
            "matrix storage replaced ({}x{}): {:?} -> {:?}",
            self.rows(),
            self.columns(),
            previous,
            self.identity
        );
    }

    /// Changes the dimensions, keeping the elements whose coordinates exist in
    /// both shapes and filling new positions with `fill`.
    pub fn resize(&mut self, rows: usize, columns: usize, fill: T)
    where
        T: Clone,
    {
        let shape = Shape::new(rows, columns);
        let old_columns = self.columns();
        let old_rows = self.rows();
        let mut old: Vec<Option<T>> = std::mem::take(&mut self.data).into_iter().map(Some).collect();
        let mut data = Vec::with_capacity(shape.len());
        for row in 0..shape.rows() {
            for column in 0..shape.columns() {
                let kept = if row < old_rows && column < old_columns {
                    old[row * old_columns + column].take()
                } else {
                    None
                };
                data.push(kept.unwrap_or_else(|| fill.clone()));
            }
        }
        self.shape = shape;
        self.data = data;
        self.renew_identity();
    }

    /// Removes all elements, leaving a `0 x 0` matrix.
    pub fn clear(&mut self) {
        self.shape = Shape::EMPTY;
        self.data.clear();
        self.renew_identity();
    }

    /// Moves the contents out into a new matrix, leaving `self` empty.
    ///
    /// Both matrices get fresh identities, so cursors created before the move
    /// are valid with neither.
    pub fn take(&mut self) -> Self {
        let shape = std::mem::replace(&mut self.shape, Shape::EMPTY);
        let data = std::mem::take(&mut self.data);
        self.renew_identity();
        Self::with_storage(shape, data)
    }

    // --- Cursor factories ---

    /// First element of the traversal of cursor type `C`.
    pub fn begin<C: MatrixCursor>(&self) -> C {
        C::begin_of(self)
    }

    /// End sentinel of the traversal of cursor type `C`.
    pub fn end<C: MatrixCursor>(&self) -> C {
        C::end_of(self)
    }

    /// Cursor on `(row, column)`; the end sentinel if outside the matrix.
    pub fn cursor_at<C: MatrixCursor>(&self, row: usize, column: usize) -> C {
        C::at_coordinates(self, row, column)
    }

    /// Cursor on row-major index `index`; the end sentinel if outside the matrix.
    pub fn cursor_at_index<C: MatrixCursor>(&self, index: usize) -> C {
        C::at_linear_index(self, index)
    }

    /// Cursor on element `index` of `diagonal`, bounded to that diagonal.
    ///
    /// An `index` outside the diagonal clamps to the diagonal's begin or end.
    pub fn cursor_on_diagonal<D: Direction, A: Access>(
        &self,
        diagonal: isize,
        index: isize,
    ) -> DiagonalCursor<D, A> {
        DiagonalCursor::on_diagonal(self, diagonal, index)
    }

    pub fn row_begin<D: Direction, A: Access>(&self, row: usize) -> LinearCursor<RowMajor, D, A> {
        LinearCursor::line_bound(self, row, false)
    }

    pub fn row_end<D: Direction, A: Access>(&self, row: usize) -> LinearCursor<RowMajor, D, A> {
        LinearCursor::line_bound(self, row, true)
    }

    pub fn column_begin<D: Direction, A: Access>(
        &self,
        column: usize,
    ) -> LinearCursor<ColumnMajor, D, A> {
        LinearCursor::line_bound(self, column, false)
    }

    pub fn column_end<D: Direction, A: Access>(
        &self,
        column: usize,
    ) -> LinearCursor<ColumnMajor, D, A> {
        LinearCursor::line_bound(self, column, true)
    }

    pub fn diagonal_begin<D: Direction, A: Access>(&self, diagonal: isize) -> DiagonalCursor<D, A> {
        DiagonalCursor::diagonal_bound(self, diagonal, false)
    }

    pub fn diagonal_end<D: Direction, A: Access>(&self, diagonal: isize) -> DiagonalCursor<D, A> {
        DiagonalCursor::diagonal_bound(self, diagonal, true)
    }

    // --- Access through cursors ---

    /// Element under `cursor`, `None` on a sentinel.
    pub fn get_at<C: MatrixCursor>(&self, cursor: C) -> Option<&T> {
        cursor.element_index().and_then(|index| self.data.get(index))
    }

    pub fn get_at_mut<C: MutableCursor>(&mut self, cursor: C) -> Option<&mut T> {
        cursor.element_index().and_then(|index| self.data.get_mut(index))
    }

    /// Element `n` steps after `cursor`, i.e. `self[cursor + n]`.
    ///
    /// # Panics
    /// If `cursor + n` is a sentinel.
    pub fn subscript<C: MatrixCursor>(&self, cursor: C, n: isize) -> &T {
        self.element(cursor + n)
    }

    pub fn subscript_mut<C: MutableCursor>(&mut self, cursor: C, n: isize) -> &mut T {
        self.element_mut(cursor + n)
    }

    /// Swaps the elements under two cursors.
    ///
    /// # Panics
    /// If either cursor is a sentinel.
    pub fn swap_at<C: MutableCursor>(&mut self, a: C, b: C) {
        let a = self.storage_index(a);
        let b = self.storage_index(b);
        self.data.swap(a, b);
    }

    fn storage_index<C: MatrixCursor>(&self, cursor: C) -> usize {
        match cursor.element_index() {
            Some(index) if index < self.data.len() => index,
            _ => panic!(
                "cursor at ({}, {}) does not address an element of this {}x{} matrix",
                cursor.row_nr(),
                cursor.column_nr(),
                self.rows(),
                self.columns()
            ),
        }
    }

    fn element<C: MatrixCursor>(&self, cursor: C) -> &T {
        &self.data[self.storage_index(cursor)]
    }

    fn element_mut<C: MatrixCursor>(&mut self, cursor: C) -> &mut T {
        let index = self.storage_index(cursor);
        &mut self.data[index]
    }

    // --- Ranges ---

    /// Iterator over `[begin, end)`.
    pub fn range<C: MatrixCursor>(&self, begin: C, end: C) -> CursorRange<'_, T, C> {
        CursorRange::new(self, begin, end)
    }

    /// Mutable iterator over `[begin, end)`, yielding elements in traversal order.
    pub fn range_mut<C: MutableCursor>(&mut self, begin: C, end: C) -> CursorRangeMut<'_, T> {
        CursorRangeMut::new(self, begin, end)
    }

    /// Iterator over the whole traversal of cursor type `C`.
    pub fn traverse<C: MatrixCursor>(&self) -> CursorRange<'_, T, C> {
        self.range(self.begin(), self.end())
    }

    pub fn row_range<D: Direction, A: Access>(
        &self,
        row: usize,
    ) -> CursorRange<'_, T, LinearCursor<RowMajor, D, A>> {
        self.range(self.row_begin(row), self.row_end(row))
    }

    pub fn column_range<D: Direction, A: Access>(
        &self,
        column: usize,
    ) -> CursorRange<'_, T, LinearCursor<ColumnMajor, D, A>> {
        self.range(self.column_begin(column), self.column_end(column))
    }

    pub fn diagonal_range<D: Direction, A: Access>(
        &self,
        diagonal: isize,
    ) -> CursorRange<'_, T, DiagonalCursor<D, A>> {
        self.range(self.diagonal_begin(diagonal), self.diagonal_end(diagonal))
    }

    /// Contiguous storage between two forward row-major cursors.
    ///
    /// Returns an empty slice if `end` precedes `begin`. Read-only cursors
    /// cannot hand out mutable storage:
    ///
    /// ```compile_fail
    /// use matrix_core::{ConstZCursor, Matrix};
    ///
    /// let mut matrix = Matrix::from_rows(vec![vec![2, 1]]).unwrap();
    /// let begin: ConstZCursor = matrix.begin();
    /// let end: ConstZCursor = matrix.end();
    /// matrix.span_mut(begin, end).sort();
    /// ```
    pub fn span_mut(
        &mut self,
        begin: LinearCursor<RowMajor, Forward, Mutable>,
        end: LinearCursor<RowMajor, Forward, Mutable>,
    ) -> &mut [T] {
        let len = self.data.len();
        let start = (begin.order_index().max(0) as usize).min(len);
        let stop = (end.order_index().max(0) as usize).clamp(start, len);
        &mut self.data[start..stop]
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// A clone owns new storage and therefore a new identity.
impl<T: Clone> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Self::with_storage(self.shape, self.data.clone())
    }
}

/// Element-wise equality of two matrices of the same shape; identities are ignored.
impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.data == other.data
    }
}

impl<T: Eq> Eq for Matrix<T> {}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        assert!(
            row < self.rows() && column < self.columns(),
            "({row}, {column}) is outside a {}x{} matrix",
            self.rows(),
            self.columns()
        );
        &self.data[row * self.columns() + column]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows() && column < self.columns(),
            "({row}, {column}) is outside a {}x{} matrix",
            self.rows(),
            self.columns()
        );
        let columns = self.columns();
        &mut self.data[row * columns + column]
    }
}

impl<T, O: Order, D: Direction, A: Access> Index<LinearCursor<O, D, A>> for Matrix<T> {
    type Output = T;

    fn index(&self, cursor: LinearCursor<O, D, A>) -> &T {
        self.element(cursor)
    }
}

impl<T, O: Order, D: Direction> IndexMut<LinearCursor<O, D, Mutable>> for Matrix<T> {
    fn index_mut(&mut self, cursor: LinearCursor<O, D, Mutable>) -> &mut T {
        self.element_mut(cursor)
    }
}

impl<T, D: Direction, A: Access> Index<DiagonalCursor<D, A>> for Matrix<T> {
    type Output = T;

    fn index(&self, cursor: DiagonalCursor<D, A>) -> &T {
        self.element(cursor)
    }
}

impl<T, D: Direction> IndexMut<DiagonalCursor<D, Mutable>> for Matrix<T> {
    fn index_mut(&mut self, cursor: DiagonalCursor<D, Mutable>) -> &mut T {
        self.element_mut(cursor)
    }
}
