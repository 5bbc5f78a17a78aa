//! # Matrix Core Library
//!
//! A dense, row-major [`Matrix`] plus random-access cursors that traverse it
//! row by row ("Z"), column by column ("N") or one anti-diagonal at a time
//! ("M").
//!
//! Cursors are plain values tied to their matrix by an [`Identity`]; they are
//! dereferenced by indexing the matrix:
//!
//! ```
//! use matrix_core::{ConstMCursor, Matrix, MatrixCursor};
//!
//! let matrix = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
//! let mut cursor: ConstMCursor = matrix.begin();
//! cursor.increment();
//! assert_eq!(matrix[cursor], 2);
//! assert!(cursor.is_valid_with(&matrix));
//! ```

// Declare modules
pub mod addressing;
pub mod cursor;
pub mod error;
pub mod identity;
pub mod matrix;
pub mod range;
pub mod traits;

// Re-export public types
pub use addressing::Shape;
pub use cursor::diagonal::{DiagonalCursor, Scope};
pub use cursor::linear::LinearCursor;
pub use cursor::{Access, ColumnMajor, Const, Direction, Forward, Mutable, Order, Reverse, RowMajor};
pub use error::{MatrixError, Result};
pub use identity::Identity;
pub use matrix::Matrix;
pub use range::{CursorRange, CursorRangeMut};
pub use traits::{MatrixCursor, MutableCursor};

// --- Row-major ("Z") cursors ---
pub type ZCursor = LinearCursor<RowMajor, Forward, Mutable>;
pub type ConstZCursor = LinearCursor<RowMajor, Forward, Const>;
pub type ReverseZCursor = LinearCursor<RowMajor, Reverse, Mutable>;
pub type ConstReverseZCursor = LinearCursor<RowMajor, Reverse, Const>;

// --- Column-major ("N") cursors ---
pub type NCursor = LinearCursor<ColumnMajor, Forward, Mutable>;
pub type ConstNCursor = LinearCursor<ColumnMajor, Forward, Const>;
pub type ReverseNCursor = LinearCursor<ColumnMajor, Reverse, Mutable>;
pub type ConstReverseNCursor = LinearCursor<ColumnMajor, Reverse, Const>;

// --- Diagonal ("M") cursors ---
pub type MCursor = DiagonalCursor<Forward, Mutable>;
pub type ConstMCursor = DiagonalCursor<Forward, Const>;
pub type ReverseMCursor = DiagonalCursor<Reverse, Mutable>;
pub type ConstReverseMCursor = DiagonalCursor<Reverse, Const>;
