use std::str::FromStr;

use crate::format::number::pretty_num;
use crate::matrix::{AugMatrix, Element};
use crate::solve::steps::StepSink;

// zero test for pivots and elimination factors
pub const EPS: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Ref,
    Rref,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Mode, String> {
        match s {
            "REF" => Ok(Mode::Ref),
            "RREF" => Ok(Mode::Rref),
            _ => Err(format!("Unknown mode: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Elimination<T> {
    pub matrix: AugMatrix<T>,
    // augmentation column after RREF, None in REF mode; meaningless for
    // rows without a pivot, see `pivot_cols` and `rank`
    pub solution: Option<Vec<T>>,
    pub pivot_cols: Vec<Option<usize>>,
    pub rank: usize,
}

// Partial-pivoting Gaussian elimination on an n x (n+1) augmented system.
// Every transformation of the working matrix goes through `sink` with the
// value (factor, divisor) captured before the mutation it describes.
// Singular systems are not an error: a column without a usable pivot is
// reported as a skipped step and left behind.
pub fn eliminate<T: Element>(
    input: &AugMatrix<T>,
    mode: Mode,
    sink: &mut dyn StepSink<T>,
) -> Result<Elimination<T>, String> {
    let n = input.rows;
    if n == 0 {
        return Err("Matrix must have at least one row".into());
    }
    if input.cols != n + 1 {
        return Err("Augmented matrix must have n rows and n + 1 columns".into());
    }

    let eps = T::from(EPS).unwrap();
    let mut m = input.clone();
    sink.record("Initial Matrix".into(), &m, None);

    let mut pivot_cols = vec![None; n];
    let mut rank = 0;
    let mut row = 0;

    for col in 0..n {
        if row >= n {
            break;
        }

        // largest magnitude in the column wins, first occurrence on ties
        let mut pivot = row;
        let mut maxv = m.at(row, col).abs();
        for r in row + 1..n {
            if m.at(r, col).abs() > maxv {
                maxv = m.at(r, col).abs();
                pivot = r;
            }
        }

        if m.at(pivot, col).abs() < eps {
            sink.record(
                format!("Column {} skipped", col + 1),
                &m,
                Some("No pivot found"),
            );
            continue; // no pivot for this column, `row` does not advance
        }

        if pivot != row {
            m.swap_rows(row, pivot);
            sink.record(format!("Swap rows {} and {}", row + 1, pivot + 1), &m, None);
        }

        let pv = m.at(row, col);
        for j in col..m.cols {
            m.cells[row * m.cols + j] = m.at(row, j) / pv;
        }
        sink.record(
            format!("Divide row {} by {}", row + 1, pretty_num(pv)),
            &m,
            None,
        );

        for r in row + 1..n {
            let factor = m.at(r, col);
            if factor.abs() < eps {
                continue;
            }
            for j in col..m.cols {
                m.cells[r * m.cols + j] = m.at(r, j) - factor * m.at(row, j);
            }
            sink.record(
                format!(
                    "R{} = R{} - ({})*R{}",
                    r + 1,
                    r + 1,
                    pretty_num(factor),
                    row + 1
                ),
                &m,
                None,
            );
        }

        pivot_cols[row] = Some(col);
        rank += 1;
        row += 1;
    }

    sink.record("Row Echelon Form (REF)".into(), &m, None);

    if mode == Mode::Ref {
        return Ok(Elimination {
            matrix: m,
            solution: None,
            pivot_cols,
            rank,
        });
    }

    for i in (0..n).rev() {
        // leading entry of the row; all-zero rows are left alone
        let pivot_col = match (0..n).find(|&j| m.at(i, j).abs() > eps) {
            Some(j) => j,
            None => continue,
        };

        let val = m.at(i, pivot_col);
        if (val - T::one()).abs() > eps {
            for j in pivot_col..m.cols {
                m.cells[i * m.cols + j] = m.at(i, j) / val;
            }
            sink.record(format!("Normalize row {}", i + 1), &m, None);
        }

        for r in 0..i {
            let factor = m.at(r, pivot_col);
            if factor.abs() < eps {
                continue;
            }
            for j in pivot_col..m.cols {
                m.cells[r * m.cols + j] = m.at(r, j) - factor * m.at(i, j);
            }
            sink.record(
                format!(
                    "R{} = R{} - ({})*R{}",
                    r + 1,
                    r + 1,
                    pretty_num(factor),
                    i + 1
                ),
                &m,
                None,
            );
        }
    }

    sink.record("Reduced Row Echelon Form (RREF)".into(), &m, None);

    let solution = m.augmentation();
    Ok(Elimination {
        matrix: m,
        solution: Some(solution),
        pivot_cols,
        rank,
    })
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
