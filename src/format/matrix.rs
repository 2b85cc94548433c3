use itertools::Itertools;

use crate::format::number::pretty_num;
use crate::matrix::{AugMatrix, Element};

// Aligned text block, one row per line, the right-hand side behind a
// vertical divider:
//   [  1 0.5  | 2.5 ]
//   [  0   1  |   1 ]
pub fn matrix_to_string<T: Element>(m: &AugMatrix<T>) -> String {
    if m.rows == 0 || m.cols == 0 {
        return String::new();
    }

    let rendered: Vec<Vec<String>> = m
        .to_list()
        .into_iter()
        .map(|row| row.into_iter().map(pretty_num).collect())
        .collect();

    let mut widths = vec![0; m.cols];
    for row in &rendered {
        for (j, cell) in row.iter().enumerate() {
            widths[j] = widths[j].max(cell.len());
        }
    }

    rendered
        .iter()
        .map(|row| {
            let left = row[..m.cols - 1]
                .iter()
                .enumerate()
                .map(|(j, v)| format!("{:>width$}", v, width = widths[j]))
                .join(" ");
            let last = format!("{:>width$}", row[m.cols - 1], width = widths[m.cols - 1]);
            format!("[ {}  | {} ]", left, last)
        })
        .join("\n")
}

pub fn solution_to_string<T: Element>(solution: &[T]) -> String {
    solution
        .iter()
        .enumerate()
        .map(|(i, v)| format!("x{} = {}", i + 1, pretty_num(*v)))
        .join("\n")
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
