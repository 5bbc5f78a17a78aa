use thiserror::Error;

pub type Result<T> = core::result::Result<T, MatrixError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("Invalid matrix dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Row {row} has {found} elements, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Cursor does not belong to this matrix")]
    ForeignCursor,

    #[error("Range end precedes range begin (distance {0})")]
    InvertedRange(isize),

    #[error("Range begin and end are bounded to different parts of the matrix")]
    MismatchedBounds,
}
