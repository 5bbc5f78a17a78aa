//! `matrix-algorithms`: generic sequence algorithms over matrix cursor ranges.
//!
//! Every algorithm takes a matrix and a `(begin, end)` pair of cursors of any
//! family, so the same code sorts a row, a column, a single anti-diagonal or
//! the whole matrix in any traversal order.

// Core modules
pub mod algorithms;
pub mod sequence;

pub use algorithms::{validate_range, HeapSort, InsertionSort, SortAlgorithm};
pub use sequence::{accumulate, count, count_if, find, find_if, is_sorted};

// Re-export from matrix_core
pub use matrix_core::{Matrix, MatrixCursor, MatrixError, MutableCursor, Result};
