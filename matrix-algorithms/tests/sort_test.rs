use matrix_algorithms::{accumulate, count, find, is_sorted, HeapSort, InsertionSort, SortAlgorithm};
use matrix_core::{
    ConstMCursor, ConstZCursor, Matrix, MatrixCursor, MatrixError, MCursor, NCursor, ReverseMCursor, ZCursor,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Helper function to create a seeded random matrix
fn random_matrix(seed: u64, rows: usize, columns: usize) -> Matrix<i32> {
    let mut rng = fastrand::Rng::with_seed(seed);
    Matrix::from_fn(rows, columns, |_, _| rng.i32(-50..50))
}

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
fn test_sorting_a_row_leaves_other_rows_untouched() -> Result<(), MatrixError> {
    init_logger();
    let mut matrix = random_matrix(7, 5, 6);
    let original = matrix.clone();
    let begin: ZCursor = matrix.row_begin(2);
    let end: ZCursor = matrix.row_end(2);
    HeapSort::new().sort(&mut matrix, begin, end)?;

    for row in [0, 1, 3, 4] {
        for column in 0..6 {
            assert_eq!(matrix[(row, column)], original[(row, column)]);
        }
    }
    let begin: ConstZCursor = matrix.row_begin(2);
    let end: ConstZCursor = matrix.row_end(2);
    assert!(is_sorted(&matrix, begin, end)?);
    Ok(())
}

#[test]
fn test_both_algorithms_agree_with_std_sort() -> Result<(), MatrixError> {
    init_logger();
    for seed in 0..8 {
        let mut expected: Vec<i32> = random_matrix(seed, 6, 7).as_slice().to_vec();
        expected.sort();

        let mut by_heap = random_matrix(seed, 6, 7);
        let begin: ZCursor = by_heap.begin();
        let end: ZCursor = by_heap.end();
        HeapSort::new().sort(&mut by_heap, begin, end)?;
        assert_eq!(by_heap.as_slice(), expected.as_slice(), "heap sort, seed {seed}");

        let mut by_insertion = random_matrix(seed, 6, 7);
        let begin: ZCursor = by_insertion.begin();
        let end: ZCursor = by_insertion.end();
        InsertionSort::new().sort(&mut by_insertion, begin, end)?;
        assert_eq!(by_insertion.as_slice(), expected.as_slice(), "insertion sort, seed {seed}");
    }
    Ok(())
}

#[test]
fn test_sort_in_diagonal_order() -> Result<(), MatrixError> {
    init_logger();
    let mut matrix = sample();
    let begin: MCursor = matrix.begin();
    let end: MCursor = matrix.end();
    HeapSort::with_params(3).sort(&mut matrix, begin, end)?;
    let ordered: Vec<i32> = matrix.traverse::<ConstMCursor>().copied().collect();
    assert_eq!(ordered, vec![-11, -8, -5, -3, 1, 2, 4, 6, 7, 9, 10, 12]);
    assert_eq!(matrix[(0, 0)], -11);
    assert_eq!(matrix[(3, 2)], 12);
    Ok(())
}

#[test]
fn test_sort_one_diagonal_in_reverse() -> Result<(), MatrixError> {
    init_logger();
    let mut matrix = sample();
    let begin: ReverseMCursor = matrix.diagonal_begin(-1);
    let end: ReverseMCursor = matrix.diagonal_end(-1);
    InsertionSort::new().sort(&mut matrix, begin, end)?;
    // Diagonal -1 holds (1, 2), (2, 1), (3, 0); sorted bottom-left to top-right.
    assert_eq!(matrix[(3, 0)], -8);
    assert_eq!(matrix[(2, 1)], 4);
    assert_eq!(matrix[(1, 2)], 12);
    assert_eq!(matrix[(0, 2)], 1);
    assert_eq!(matrix[(2, 2)], 7);
    Ok(())
}

#[test]
fn test_sort_a_column() -> Result<(), MatrixError> {
    init_logger();
    let mut matrix = sample();
    let begin: NCursor = matrix.column_begin(2);
    let end: NCursor = matrix.column_end(2);
    HeapSort::new().sort_by(&mut matrix, begin, end, |a, b| b.cmp(a))?;
    let column: Vec<i32> = (0..4).map(|row| matrix[(row, 2)]).collect();
    assert_eq!(column, vec![10, 7, 4, 1]);
    let middle_column: Vec<i32> = (0..4).map(|row| matrix[(row, 1)]).collect();
    assert_eq!(middle_column, vec![2, -5, -8, -11]);
    Ok(())
}

#[test]
fn test_search_after_sort() -> Result<(), MatrixError> {
    init_logger();
    let mut matrix = sample();
    let begin: ZCursor = matrix.begin();
    let end: ZCursor = matrix.end();
    InsertionSort::new().sort(&mut matrix, begin, end)?;
    let found = find(&matrix, begin, end, &7)?;
    assert_eq!(found - begin, 8);
    assert_eq!((found.row_nr(), found.column_nr()), (2, 2));
    assert_eq!(count(&matrix, begin, found, &7)?, 0);
    assert_eq!(accumulate(&matrix, begin, end)?, 24);
    Ok(())
}

#[test]
fn test_cursors_of_another_matrix_are_rejected() {
    init_logger();
    let mut matrix = sample();
    let other = sample();
    let begin: ZCursor = other.begin();
    let end: ZCursor = other.end();
    match InsertionSort::new().sort(&mut matrix, begin, end) {
        Err(MatrixError::ForeignCursor) => {}
        other => panic!("Expected ForeignCursor error, got {:?}", other),
    }
    assert_eq!(matrix, sample());
}

#[test]
fn test_inverted_range_is_rejected() {
    init_logger();
    let mut matrix = sample();
    let begin: MCursor = matrix.begin();
    let end: MCursor = matrix.end();
    match HeapSort::new().sort(&mut matrix, end, begin) {
        Err(MatrixError::InvertedRange(len)) => assert_eq!(len, -12),
        other => panic!("Expected InvertedRange error, got {:?}", other),
    }
}

#[test]
fn test_diagonal_begin_with_matrix_end_is_rejected() {
    init_logger();
    let mut matrix = sample();
    let begin: MCursor = matrix.diagonal_begin(1);
    let end: MCursor = matrix.end();
    assert_eq!(
        HeapSort::new().sort(&mut matrix, begin, end),
        Err(MatrixError::MismatchedBounds)
    );
    assert_eq!(
        InsertionSort::new().sort(&mut matrix, begin, end),
        Err(MatrixError::MismatchedBounds)
    );
    assert_eq!(count(&matrix, begin, end, &2), Err(MatrixError::MismatchedBounds));
    assert_eq!(matrix, sample());

    // The same walk is fine once both ends share the diagonal's bounds.
    let end: MCursor = matrix.diagonal_end(1);
    assert_eq!(count(&matrix, begin, end, &2), Ok(1));
    HeapSort::new().sort(&mut matrix, begin, end).unwrap();
    assert_eq!(matrix[(0, 1)], 2);
    assert_eq!(matrix[(1, 0)], 6);
}
