use std::cmp::Ordering;

use matrix_core::{Matrix, MutableCursor, Result};

use super::{InsertionSort, SortAlgorithm};

impl SortAlgorithm for InsertionSort {
    fn sort_by<T, C, F>(&self, matrix: &mut Matrix<T>, begin: C, end: C, mut compare: F) -> Result<()>
    where
        C: MutableCursor,
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = self.validate_range(matrix, begin, end)?;
        if len > self.warn_len {
            log::warn!(
                "insertion sort over {} elements (warn_len {}); consider HeapSort",
                len,
                self.warn_len
            );
        } else {
            log::debug!("insertion sort over {} elements", len);
        }

        for i in 1..len as isize {
            let mut current = begin + i;
            while current > begin {
                let previous = current - 1;
                if compare(matrix.subscript(previous, 0), matrix.subscript(current, 0)) != Ordering::Greater {
                    break;
                }
                matrix.swap_at(previous, current);
                current = previous;
            }
        }
        Ok(())
    }
}
