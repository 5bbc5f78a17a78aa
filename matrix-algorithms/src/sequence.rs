//! Non-modifying algorithms over `[begin, end)` cursor ranges.
//!
//! Each function validates the range first (see [`validate_range`]) and then
//! walks it through [`Matrix::range`].

use num_traits::Zero;

use matrix_core::{Matrix, MatrixCursor, Result};

use crate::algorithms::validate_range;

/// Number of elements in `[begin, end)` equal to `value`.
pub fn count<T: PartialEq, C: MatrixCursor>(matrix: &Matrix<T>, begin: C, end: C, value: &T) -> Result<usize> {
    count_if(matrix, begin, end, |element| element == value)
}

/// Number of elements in `[begin, end)` for which `predicate` holds.
pub fn count_if<T, C, P>(matrix: &Matrix<T>, begin: C, end: C, mut predicate: P) -> Result<usize>
where
    C: MatrixCursor,
    P: FnMut(&T) -> bool,
{
    validate_range(matrix, begin, end)?;
    Ok(matrix.range(begin, end).filter(|element| predicate(element)).count())
}

/// Cursor on the first element in `[begin, end)` equal to `value`, or `end`.
pub fn find<T: PartialEq, C: MatrixCursor>(matrix: &Matrix<T>, begin: C, end: C, value: &T) -> Result<C> {
    find_if(matrix, begin, end, |element| element == value)
}

/// Cursor on the first element in `[begin, end)` for which `predicate` holds, or `end`.
pub fn find_if<T, C, P>(matrix: &Matrix<T>, begin: C, end: C, predicate: P) -> Result<C>
where
    C: MatrixCursor,
    P: FnMut(&T) -> bool,
{
    validate_range(matrix, begin, end)?;
    let found = matrix
        .range(begin, end)
        .position(predicate)
        .map_or(end, |offset| begin + offset as isize);
    Ok(found)
}

/// Sum of the elements in `[begin, end)`; zero for an empty range.
pub fn accumulate<T, C>(matrix: &Matrix<T>, begin: C, end: C) -> Result<T>
where
    T: Zero + Clone,
    C: MatrixCursor,
{
    let len = validate_range(matrix, begin, end)?;
    log::debug!("accumulating {} elements", len);
    Ok(matrix
        .range(begin, end)
        .fold(T::zero(), |sum, element| sum + element.clone()))
}

/// Whether `[begin, end)` is in non-decreasing traversal order.
pub fn is_sorted<T: PartialOrd, C: MatrixCursor>(matrix: &Matrix<T>, begin: C, end: C) -> Result<bool> {
    validate_range(matrix, begin, end)?;
    let mut elements = matrix.range(begin, end);
    let Some(mut previous) = elements.next() else {
        return Ok(true);
    };
    for element in elements {
        if previous > element {
            return Ok(false);
        }
        previous = element;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrix_core::{ConstMCursor, ConstZCursor, MatrixError};

    fn sample() -> Matrix<i32> {
        Matrix::from_rows(vec![vec![1, 5, 1], vec![2, 1, 7], vec![1, 9, 4]]).unwrap()
    }

    #[test]
    fn test_count_whole_matrix() -> Result<()> {
        let matrix = sample();
        let begin: ConstZCursor = matrix.begin();
        let end: ConstZCursor = matrix.end();
        assert_eq!(count(&matrix, begin, end, &1)?, 4);
        assert_eq!(count(&matrix, begin, end, &3)?, 0);
        assert_eq!(count_if(&matrix, begin, end, |value| *value > 4)?, 3);
        Ok(())
    }

    #[test]
    fn test_find_returns_end_when_missing() -> Result<()> {
        let matrix = sample();
        let begin: ConstMCursor = matrix.begin();
        let end: ConstMCursor = matrix.end();
        assert_eq!(find(&matrix, begin, end, &42)?, end);
        let found = find(&matrix, begin, end, &7)?;
        assert_eq!((found.row_nr(), found.column_nr()), (1, 2));
        Ok(())
    }

    #[test]
    fn test_accumulate_empty_range_is_zero() -> Result<()> {
        let matrix = sample();
        let begin: ConstZCursor = matrix.begin();
        assert_eq!(accumulate(&matrix, begin, begin)?, 0);
        let end: ConstZCursor = matrix.end();
        assert_eq!(accumulate(&matrix, begin, end)?, 31);
        Ok(())
    }

    #[test]
    fn test_is_sorted() -> Result<()> {
        let matrix = Matrix::from_rows(vec![vec![1, 2, 3], vec![0, 0, 9]])?;
        let row_begin: ConstZCursor = matrix.row_begin(0);
        let row_end: ConstZCursor = matrix.row_end(0);
        assert!(is_sorted(&matrix, row_begin, row_end)?);
        let end: ConstZCursor = matrix.end();
        assert!(!is_sorted(&matrix, row_begin, end)?);
        assert!(is_sorted(&matrix, end, end)?);
        Ok(())
    }

    #[test]
    fn test_errors_propagate() {
        let matrix = sample();
        let begin: ConstZCursor = matrix.begin();
        let end: ConstZCursor = matrix.end();
        assert_eq!(count(&matrix, end, begin, &1), Err(MatrixError::InvertedRange(-9)));
        let stranger = sample();
        assert_eq!(accumulate(&stranger, begin, end), Err(MatrixError::ForeignCursor));
    }
}
