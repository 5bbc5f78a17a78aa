use std::cmp::Ordering;

use matrix_core::{Matrix, MatrixCursor, MatrixError, MutableCursor, Result};

/// Checks that `[begin, end)` is a usable range of `matrix` and returns its length.
///
/// Both cursors must pass [`MatrixCursor::is_valid_with`], share the same
/// bounds (a diagonal-scoped begin needs that diagonal's end) and `end` must
/// not precede `begin`.
pub fn validate_range<T, C: MatrixCursor>(matrix: &Matrix<T>, begin: C, end: C) -> Result<usize> {
    if !begin.is_valid_with(matrix) || !end.is_valid_with(matrix) {
        return Err(MatrixError::ForeignCursor);
    }
    if !begin.same_bounds(&end) {
        return Err(MatrixError::MismatchedBounds);
    }
    let len = end - begin;
    if len < 0 {
        return Err(MatrixError::InvertedRange(len));
    }
    Ok(len as usize)
}

// --- Algorithm Trait Definition ---
/// Trait representing an in-place sort over a cursor range.
///
/// The range is sorted in its own traversal order: sorting a reverse row
/// leaves the row descending in storage order.
pub trait SortAlgorithm {
    /// Sorts `[begin, end)` of `matrix` with `compare`.
    ///
    /// # Returns
    ///
    /// `Err(MatrixError::ForeignCursor)` if either cursor does not belong to
    /// `matrix`, `Err(MatrixError::MismatchedBounds)` if the cursors stop at
    /// different sentinels, `Err(MatrixError::InvertedRange)` if `end` precedes
    /// `begin`.
    fn sort_by<T, C, F>(&self, matrix: &mut Matrix<T>, begin: C, end: C, compare: F) -> Result<()>
    where
        C: MutableCursor,
        F: FnMut(&T, &T) -> Ordering;

    /// Sorts `[begin, end)` of `matrix` in ascending order.
    fn sort<T: Ord, C: MutableCursor>(&self, matrix: &mut Matrix<T>, begin: C, end: C) -> Result<()> {
        self.sort_by(matrix, begin, end, T::cmp)
    }

    /// Sorts `[begin, end)` by the key `f` extracts from each element.
    fn sort_by_key<T, K, C, F>(&self, matrix: &mut Matrix<T>, begin: C, end: C, mut f: F) -> Result<()>
    where
        K: Ord,
        C: MutableCursor,
        F: FnMut(&T) -> K,
    {
        self.sort_by(matrix, begin, end, |a, b| f(a).cmp(&f(b)))
    }

    // Helper for input validation, can be called by implementations.
    fn validate_range<T, C: MatrixCursor>(&self, matrix: &Matrix<T>, begin: C, end: C) -> Result<usize> {
        validate_range(matrix, begin, end)
    }
}

// --- Algorithm Implementations ---

pub mod heap_sort;
pub mod insertion_sort;

// --- Algorithm Struct Definitions ---

/// Insertion sort: stable, quadratic, no extra memory.
#[derive(Debug, Clone)]
pub struct InsertionSort {
    /// Ranges longer than this are sorted anyway, with a warning.
    pub warn_len: usize,
}

impl Default for InsertionSort {
    fn default() -> Self {
        Self { warn_len: 256 }
    }
}

impl InsertionSort {
    /// Creates a new insertion sort with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(warn_len: usize) -> Self {
        Self { warn_len }
    }
}

/// Heap sort over a d-ary max-heap: unstable, `O(n log n)`, no extra memory.
#[derive(Debug, Clone)]
pub struct HeapSort {
    /// Children per heap node, at least 2.
    pub arity: usize,
}

impl Default for HeapSort {
    fn default() -> Self {
        Self { arity: 2 }
    }
}

impl HeapSort {
    /// Creates a new binary heap sort.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a heap sort with `arity` children per node (values below 2 are raised to 2).
    pub fn with_params(arity: usize) -> Self {
        Self {
            arity: arity.max(2),
        }
    }
}
