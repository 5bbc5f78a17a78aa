//! Coordinate arithmetic shared by every cursor family.
//!
//! Three coordinate systems describe one cell of a `rows x columns` matrix:
//!
//! * absolute `(row, column)`,
//! * the linear row-major index `row * columns + column`,
//! * the diagonal coordinate `(diagonal_nr, diagonal_index)`.
//!
//! Diagonals are the lines of constant `row + column`. They are numbered
//! `(columns - 1) - (row + column)`, so the diagonal through the top-right
//! corner is number `0`, the one through `(0, 0)` is `columns - 1` and the one
//! through the bottom-right corner is `-(rows - 1)`. Within a diagonal the
//! index counts from its top/right end. The diagonal order visits diagonals
//! from `columns - 1` down to `-(rows - 1)`.
//!
//! ```text
//!          col 0  col 1  col 2
//!  row 0 |   2      1      0   |
//!  row 1 |   1      0     -1   |    diagonal numbers of a 4 x 3 matrix
//!  row 2 |   0     -1     -2   |
//!  row 3 |  -1     -2     -3   |
//! ```
//!
//! All positions are signed so that sentinels (one before the first or one
//! past the last element) can be expressed with the same arithmetic.

/// Dimensions of a matrix, captured by every cursor for bounds arithmetic.
///
/// A shape with a zero dimension is normalized to `0 x 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    rows: usize,
    columns: usize,
}

/// Number of cells `(r, c)` with `r, c >= 0` and `r + c < x`.
fn triangle(x: i128) -> i128 {
    if x > 0 {
        x * (x + 1) / 2
    } else {
        0
    }
}

impl Shape {
    pub const EMPTY: Shape = Shape {
        rows: 0,
        columns: 0,
    };

    pub fn new(rows: usize, columns: usize) -> Self {
        if rows == 0 || columns == 0 {
            Self::EMPTY
        } else {
            Self { rows, columns }
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of addressable elements.
    pub fn len(&self) -> usize {
        self.rows * self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn size(&self) -> isize {
        self.len() as isize
    }

    /// Whether `(row, column)` addresses an element.
    pub fn contains(&self, row: isize, column: isize) -> bool {
        row >= 0 && column >= 0 && (row as usize) < self.rows && (column as usize) < self.columns
    }

    // --- Row-major ---

    pub fn linear_index(&self, row: isize, column: isize) -> isize {
        row * self.columns as isize + column
    }

    /// Inverse of [`Shape::linear_index`] for `index` in `[0, len]`.
    ///
    /// `len` maps to `(rows, 0)`, the row-major end sentinel.
    pub fn coordinates(&self, index: isize) -> (isize, isize) {
        if self.columns == 0 {
            return (index, 0);
        }
        let columns = self.columns as isize;
        (index / columns, index % columns)
    }

    // --- Column-major ---

    pub fn column_major_index(&self, row: isize, column: isize) -> isize {
        column * self.rows as isize + row
    }

    /// Inverse of [`Shape::column_major_index`] for `index` in `[0, len]`.
    ///
    /// `len` maps to `(0, columns)`, the column-major end sentinel.
    pub fn column_major_coordinates(&self, index: isize) -> (isize, isize) {
        if self.rows == 0 {
            return (0, index);
        }
        let rows = self.rows as isize;
        (index % rows, index / rows)
    }

    // --- Diagonals ---

    pub fn diagonal_of(&self, row: isize, column: isize) -> isize {
        (self.columns as isize - 1) - (row + column)
    }

    /// Number of the first diagonal in diagonal order (through `(0, 0)`).
    pub fn first_diagonal(&self) -> isize {
        self.columns as isize - 1
    }

    /// Number of the last diagonal in diagonal order (through the bottom-right corner).
    pub fn last_diagonal(&self) -> isize {
        -(self.rows as isize - 1)
    }

    pub fn diagonal_count(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.rows + self.columns - 1
        }
    }

    pub fn has_diagonal(&self, diagonal: isize) -> bool {
        !self.is_empty() && diagonal <= self.first_diagonal() && diagonal >= self.last_diagonal()
    }

    // Diagonals beyond either end collapse onto the nearest missing one.
    fn sum_of(&self, diagonal: isize) -> isize {
        let diagonal = diagonal.clamp(self.last_diagonal() - 1, self.first_diagonal() + 1);
        (self.columns as isize - 1) - diagonal
    }

    /// Coordinates of the top/right end of `diagonal`.
    ///
    /// For diagonals outside the matrix the result is out of range as well.
    pub fn diagonal_start(&self, diagonal: isize) -> (isize, isize) {
        let sum = self.sum_of(diagonal);
        let row = (sum - (self.columns as isize - 1)).max(0);
        (row, sum - row)
    }

    /// Number of elements on `diagonal`; zero if the diagonal misses the matrix.
    pub fn diagonal_len(&self, diagonal: isize) -> isize {
        if !self.has_diagonal(diagonal) {
            return 0;
        }
        let sum = self.sum_of(diagonal);
        let first_row = (sum - (self.columns as isize - 1)).max(0);
        let last_row = sum.min(self.rows as isize - 1);
        last_row - first_row + 1
    }

    /// `(row, column)` of the element `index` steps down-left from the start of `diagonal`.
    pub fn diagonal_coordinates(&self, diagonal: isize, index: isize) -> (isize, isize) {
        let (row, column) = self.diagonal_start(diagonal);
        (row + index, column - index)
    }

    /// `(diagonal_nr, diagonal_index)` of the element at `(row, column)`.
    pub fn diagonal_coordinate(&self, row: isize, column: isize) -> (isize, isize) {
        let diagonal = self.diagonal_of(row, column);
        let (start_row, _) = self.diagonal_start(diagonal);
        (diagonal, row - start_row)
    }

    /// Position of the first element of `diagonal` in diagonal order.
    ///
    /// Diagonals before the first one map to `0`, diagonals after the last one
    /// map to `len()`.
    pub fn diagonal_offset(&self, diagonal: isize) -> isize {
        if self.is_empty() {
            return 0;
        }
        let sum = self.sum_of(diagonal).clamp(0, self.diagonal_count() as isize) as i128;
        let rows = self.rows as i128;
        let columns = self.columns as i128;
        let cells =
            triangle(sum) - triangle(sum - rows) - triangle(sum - columns) + triangle(sum - rows - columns);
        cells as isize
    }

    /// `(diagonal_nr, diagonal_index)` of the element at position `order` in
    /// diagonal order, for `order` in `[0, len)`.
    pub fn diagonal_position(&self, order: isize) -> (isize, isize) {
        debug_assert!(order >= 0 && order < self.size());
        // Offsets grow as diagonal numbers shrink: find the lowest-numbered
        // diagonal that starts at or before `order`.
        let mut low = self.last_diagonal();
        let mut high = self.first_diagonal();
        while low < high {
            let mid = low + (high - low) / 2;
            if self.diagonal_offset(mid) <= order {
                high = mid;
            } else {
                low = mid + 1;
            }
        }
        (low, order - self.diagonal_offset(low))
    }

    /// Position of `(row, column)` in diagonal order.
    pub fn diagonal_order(&self, row: isize, column: isize) -> isize {
        let (diagonal, index) = self.diagonal_coordinate(row, column);
        self.diagonal_offset(diagonal) + index
    }
}
