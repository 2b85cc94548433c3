use num_traits::Float;
use std::fmt::{Debug, Display};

pub trait Element: Float + Display + Debug {} // Avoid repeating all the traits

impl<T> Element for T where T: Float + Display + Debug {}

// Augmented system [A | b], stored row-major. The last column is the
// right-hand side and never takes part in pivot selection.
#[derive(Debug, Clone)]
pub struct AugMatrix<T> {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<T>,
}

impl<T: Element> AugMatrix<T> {
    pub fn from_list(lines: Vec<Vec<T>>) -> Self {
        let cols = lines.iter().map(|l| l.len()).max().unwrap_or(0);
        let rows = lines.len();

        AugMatrix {
            rows,
            cols,
            cells: lines
                .into_iter()
                .flat_map(|l| {
                    let pad = cols - l.len();
                    l.into_iter().chain(std::iter::repeat_n(T::zero(), pad))
                })
                .collect(),
        }
    }

    pub fn to_list(&self) -> Vec<Vec<T>> {
        self.cells
            .chunks(self.cols)
            .map(|line| line.into())
            .collect()
    }

    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col]
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        for k in 0..self.cols {
            self.cells.swap(a * self.cols + k, b * self.cols + k);
        }
    }

    // last column, in row order
    pub fn augmentation(&self) -> Vec<T> {
        (0..self.rows).map(|r| self.at(r, self.cols - 1)).collect()
    }

    // RREF check over the coefficient block only, with a zero tolerance
    pub fn is_rref(&self, eps: T) -> bool {
        let lead_cols = self.cols.saturating_sub(1);
        let mut last_pivot_col = None;

        for row in 0..self.rows {
            let pivot_col_opt = (0..lead_cols).find(|&col| self.at(row, col).abs() > eps);

            match pivot_col_opt {
                None => {
                    for r in row + 1..self.rows {
                        if (0..lead_cols).any(|col| self.at(r, col).abs() > eps) {
                            return false;
                        }
                    }
                    break;
                }
                Some(pivot_col) => {
                    if let Some(last) = last_pivot_col {
                        if pivot_col <= last {
                            return false;
                        }
                    }
                    last_pivot_col = Some(pivot_col);

                    if (self.at(row, pivot_col) - T::one()).abs() > eps {
                        return false;
                    }

                    for r in 0..self.rows {
                        if r != row && self.at(r, pivot_col).abs() > eps {
                            return false;
                        }
                    }
                }
            }
        }
        true
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_list_to_list() {
        let m = AugMatrix::from_list(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(m.rows, 2);
        assert_eq!(m.cols, 3);
        assert_eq!(
            m.to_list(),
            vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]
        );
        assert_eq!(m.at(1, 2), 6.0);
    }

    #[test]
    fn test_from_list_pads_short_rows() {
        let m = AugMatrix::from_list(vec![vec![1.0, 2.0, 3.0], vec![4.0]]);
        assert_eq!(
            m.to_list(),
            vec![vec![1.0, 2.0, 3.0], vec![4.0, 0.0, 0.0]]
        );
    }

    #[test]
    fn test_swap_rows() {
        let mut m = AugMatrix::from_list(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]);
        m.swap_rows(0, 2);
        assert_eq!(
            m.to_list(),
            vec![vec![5.0, 6.0], vec![3.0, 4.0], vec![1.0, 2.0]]
        );
    }

    #[test]
    fn test_augmentation() {
        let m = AugMatrix::from_list(vec![vec![1.0, 0.0, 2.0], vec![0.0, 1.0, -7.5]]);
        assert_eq!(m.augmentation(), vec![2.0, -7.5]);
    }

    #[test]
    fn test_is_rref() {
        let rref = AugMatrix::from_list(vec![vec![1.0, 0.0, 2.0], vec![0.0, 1.0, 1.0]]);
        assert!(rref.is_rref(1e-9));

        // echelon but not reduced above the second pivot
        let ref_only = AugMatrix::from_list(vec![vec![1.0, 2.0, 3.0], vec![0.0, 1.0, 1.0]]);
        assert!(!ref_only.is_rref(1e-9));

        // pivot not normalized to one
        let unscaled = AugMatrix::from_list(vec![vec![2.0, 0.0, 3.0], vec![0.0, 1.0, 1.0]]);
        assert!(!unscaled.is_rref(1e-9));

        // zero row above a nonzero row
        let bad_order = AugMatrix::from_list(vec![vec![0.0, 0.0, 0.0], vec![1.0, 0.0, 2.0]]);
        assert!(!bad_order.is_rref(1e-9));

        // zero rows at the bottom are fine, whatever their right-hand side
        let singular = AugMatrix::from_list(vec![vec![1.0, 1.0, 2.0], vec![0.0, 0.0, 0.0]]);
        assert!(singular.is_rref(1e-9));

        // rounding noise below the tolerance is ignored
        let noisy = AugMatrix::from_list(vec![
            vec![1.0, 1e-13, 2.0],
            vec![0.0, 1.0 + 1e-13, 1.0],
        ]);
        assert!(noisy.is_rref(1e-9));
    }
}
