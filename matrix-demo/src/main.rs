use std::error::Error;
use std::fs::File;
use std::io::Read;

use matrix_algorithms::{accumulate, count_if, find, HeapSort, InsertionSort, SortAlgorithm};
use matrix_core::{
    ConstMCursor, ConstNCursor, ConstReverseMCursor, ConstZCursor, Matrix, MatrixCursor, MatrixError, MCursor, ZCursor,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional CSV file (';' separated integers, one matrix row per line)
    let mut matrix = match std::env::args().nth(1) {
        Some(filename) => read_matrix(&filename)?,
        None => Matrix::from_rows(vec![
            vec![-3, 2, 1],
            vec![6, -5, 4],
            vec![9, -8, 7],
            vec![12, -11, 10],
        ])?,
    };
    log::info!("Loaded {}x{} matrix", matrix.rows(), matrix.columns());

    println!("Z order:         {:?}", matrix.traverse::<ConstZCursor>().collect::<Vec<_>>());
    println!("N order:         {:?}", matrix.traverse::<ConstNCursor>().collect::<Vec<_>>());
    println!("M order:         {:?}", matrix.traverse::<ConstMCursor>().collect::<Vec<_>>());
    println!("M order reverse: {:?}", matrix.traverse::<ConstReverseMCursor>().collect::<Vec<_>>());

    let shape = matrix.shape();
    for diagonal in (shape.last_diagonal()..=shape.first_diagonal()).rev() {
        let begin: ConstMCursor = matrix.diagonal_begin(diagonal);
        let end: ConstMCursor = matrix.diagonal_end(diagonal);
        println!(
            "Diagonal {:>3}: starts at ({}, {}), ends at ({}, {}), elements {:?}",
            diagonal,
            begin.row_nr(),
            begin.column_nr(),
            end.row_nr(),
            end.column_nr(),
            matrix.range(begin, end).collect::<Vec<_>>()
        );
    }

    println!("Sum: {}", sum(&matrix)?);
    let begin: ConstZCursor = matrix.begin();
    let end: ConstZCursor = matrix.end();
    println!("Negative elements: {}", count_if(&matrix, begin, end, |value| *value < 0)?);

    if matrix.rows() > 1 {
        let row_begin: ZCursor = matrix.row_begin(1);
        let row_end: ZCursor = matrix.row_end(1);
        InsertionSort::new().sort(&mut matrix, row_begin, row_end)?;
        println!("Row 1 sorted: {:?}", matrix.row_range::<matrix_core::Forward, matrix_core::Const>(1).collect::<Vec<_>>());
    }

    let m_begin: MCursor = matrix.begin();
    let m_end: MCursor = matrix.end();
    HeapSort::new().sort(&mut matrix, m_begin, m_end)?;
    println!("Sorted in M order:");
    for row in 0..matrix.rows() {
        let values: Vec<i32> = (0..matrix.columns()).map(|column| matrix[(row, column)]).collect();
        println!("  {:?}", values);
    }

    let begin: ConstMCursor = matrix.begin();
    let end: ConstMCursor = matrix.end();
    let zero = find(&matrix, begin, end, &0)?;
    if zero == end {
        println!("No zero element");
    } else {
        println!("First zero at ({}, {})", zero.row_nr(), zero.column_nr());
    }

    // Cursors do not survive a storage replacement
    let cursor: ConstZCursor = matrix.begin();
    matrix.resize(matrix.rows() + 1, matrix.columns(), 0);
    log::info!("Cursor valid after resize: {}", cursor.is_valid_with(&matrix));

    Ok(())
}

/// Sum of all elements, widened so that large CSV input cannot overflow.
fn sum(matrix: &Matrix<i32>) -> Result<i64, MatrixError> {
    let wide = Matrix::from_fn(matrix.rows(), matrix.columns(), |row, column| {
        i64::from(matrix[(row, column)])
    });
    let begin: ConstZCursor = wide.begin();
    let end: ConstZCursor = wide.end();
    accumulate(&wide, begin, end)
}

fn read_matrix(filename: &str) -> Result<Matrix<i32>, Box<dyn Error>> {
    let file = File::open(filename)?;
    read_matrix_from(file)
}

fn read_matrix_from<R: Read>(reader: R) -> Result<Matrix<i32>, Box<dyn Error>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let mut row = Vec::with_capacity(record.len());
        for field in record.iter() {
            let value: i32 = field.trim().parse()?;
            row.push(value);
        }
        rows.push(row);
    }
    Ok(Matrix::from_rows(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_semicolon_separated_rows() {
        let matrix = read_matrix_from("1; 2;3\n4;5;-6\n".as_bytes()).unwrap();
        assert_eq!((matrix.rows(), matrix.columns()), (2, 3));
        assert_eq!(matrix.as_slice(), &[1, 2, 3, 4, 5, -6]);
        assert_eq!(sum(&matrix).unwrap(), 9);
    }

    #[test]
    fn test_ragged_or_non_numeric_input_is_an_error() {
        assert!(read_matrix_from("1;2;3\n4;5\n".as_bytes()).is_err());
        assert!(read_matrix_from("1;two;3\n".as_bytes()).is_err());
        assert!(read_matrix_from("1;2;3000000000\n".as_bytes()).is_err());
    }

    #[test]
    fn test_sum_of_extreme_values_does_not_overflow() {
        let matrix = read_matrix_from("2147483647;2147483647\n2147483647;-2147483648\n".as_bytes()).unwrap();
        assert_eq!(sum(&matrix).unwrap(), 2 * i64::from(i32::MAX) - 1);
    }
}
