use std::cmp::Ordering;

use matrix_core::{Matrix, MutableCursor, Result};

use super::{HeapSort, SortAlgorithm};

impl HeapSort {
    /// Restores the heap property below `root` within the first `len` elements.
    fn sift_down<T, C, F>(&self, matrix: &mut Matrix<T>, begin: C, mut root: usize, len: usize, compare: &mut F)
    where
        C: MutableCursor,
        F: FnMut(&T, &T) -> Ordering,
    {
        loop {
            let first_child = root.saturating_mul(self.arity).saturating_add(1);
            if first_child >= len {
                return;
            }
            let last_child = first_child.saturating_add(self.arity).min(len);
            let mut largest = root;
            for child in first_child..last_child {
                let ordering = compare(
                    matrix.subscript(begin, child as isize),
                    matrix.subscript(begin, largest as isize),
                );
                if ordering == Ordering::Greater {
                    largest = child;
                }
            }
            if largest == root {
                return;
            }
            matrix.swap_at(begin + root as isize, begin + largest as isize);
            root = largest;
        }
    }
}

impl SortAlgorithm for HeapSort {
    fn sort_by<T, C, F>(&self, matrix: &mut Matrix<T>, begin: C, end: C, mut compare: F) -> Result<()>
    where
        C: MutableCursor,
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = self.validate_range(matrix, begin, end)?;
        log::debug!("heap sort (arity {}) over {} elements", self.arity, len);
        if len < 2 {
            return Ok(());
        }

        // Build the heap bottom-up; nodes past the last parent are leaves.
        let last_parent = (len - 2) / self.arity;
        for root in (0..=last_parent).rev() {
            self.sift_down(matrix, begin, root, len, &mut compare);
        }
        for heap_len in (1..len).rev() {
            matrix.swap_at(begin, begin + heap_len as isize);
            self.sift_down(matrix, begin, 0, heap_len, &mut compare);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matrix_core::{NCursor, ZCursor};

    #[test]
    fn test_sorts_column_major() -> Result<()> {
        let mut matrix = Matrix::from_rows(vec![vec![9, 2], vec![4, 7], vec![1, 8]])?;
        let begin: NCursor = matrix.begin();
        let end: NCursor = matrix.end();
        HeapSort::new().sort(&mut matrix, begin, end)?;
        // Column-major ascending: first column 1, 2, 4 then 7, 8, 9.
        assert_eq!(matrix.as_slice(), &[1, 7, 2, 8, 4, 9]);
        Ok(())
    }

    #[test]
    fn test_wider_heaps_sort_the_same() -> Result<()> {
        let values = vec![13, -4, 0, 22, 7, 7, -19, 3, 11, 5, 1, 2];
        let mut expected = values.clone();
        expected.sort();
        for arity in 2..6 {
            let mut matrix = Matrix::from_elements(3, 4, values.clone())?;
            let begin: ZCursor = matrix.begin();
            let end: ZCursor = matrix.end();
            HeapSort::with_params(arity).sort(&mut matrix, begin, end)?;
            assert_eq!(matrix.as_slice(), expected.as_slice(), "arity {arity}");
        }
        Ok(())
    }

    #[test]
    fn test_descending_comparator() -> Result<()> {
        let mut matrix = Matrix::from_rows(vec![vec![1.5, -2.0, 8.25, 0.0]])?;
        let begin: ZCursor = matrix.begin();
        let end: ZCursor = matrix.end();
        HeapSort::new().sort_by(&mut matrix, begin, end, |a: &f64, b: &f64| b.total_cmp(a))?;
        assert_eq!(matrix.as_slice(), &[8.25, 1.5, 0.0, -2.0]);
        Ok(())
    }

    #[test]
    fn test_empty_and_single_element_ranges() -> Result<()> {
        let mut matrix = Matrix::from_rows(vec![vec![3, 1]])?;
        let begin: ZCursor = matrix.begin();
        HeapSort::new().sort(&mut matrix, begin, begin)?;
        HeapSort::new().sort(&mut matrix, begin, begin + 1)?;
        assert_eq!(matrix.as_slice(), &[3, 1]);
        Ok(())
    }
}
