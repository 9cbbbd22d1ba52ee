//! Elementwise operator and predicate framework
//!
//! Generalized traversal applying a binary numeric operator or a binary
//! predicate across two matrices, or folding along a single row or column.
//! Addition, subtraction, equality checks, and min/max picking are all
//! built on these.
//!
//! Pairing is always driven by the left matrix's own (row, column)
//! traversal; the right operand is read at the same (row, column) pair
//! through its own layout. Two matrices with the same element count but
//! different shapes are therefore combined as if the right one were
//! reshaped to the left one's dimensions.

use log::debug;

use rowmat_core::{MatrixElement, MatrixError, Result};

use crate::Matrix;

/// `a > b` in double precision
pub fn greater(a: f64, b: f64) -> bool {
    a > b
}

/// `a < b` in double precision
pub fn smaller(a: f64, b: f64) -> bool {
    a < b
}

/// `a == b` in double precision
pub fn equal(a: f64, b: f64) -> bool {
    a == b
}

/// `a >= b` in double precision
pub fn greater_or_equal(a: f64, b: f64) -> bool {
    greater(a, b) || equal(a, b)
}

/// `a <= b` in double precision
pub fn smaller_or_equal(a: f64, b: f64) -> bool {
    smaller(a, b) || equal(a, b)
}

/// Replace-the-pick rule for maxima: the candidate must strictly exceed
/// the current pick, so the first occurrence of the extremum wins ties
pub fn max_rule(pick: f64, candidate: f64) -> bool {
    greater(candidate, pick)
}

/// Replace-the-pick rule for minima; strict, first occurrence wins ties
pub fn min_rule(pick: f64, candidate: f64) -> bool {
    smaller(candidate, pick)
}

impl<T: MatrixElement> Matrix<T> {
    /// Apply a binary operator to every paired element, in place
    ///
    /// Both operands are promoted to f64, combined with `op`, and the
    /// result is stored back into the left matrix. Operands must hold the
    /// same number of elements; on mismatch the left matrix is left
    /// untouched and an error is returned. A position that is missing in
    /// a reshaped right operand leaves the left element unchanged.
    pub fn apply_operator<U, F>(&mut self, rhs: &Matrix<U>, op: F) -> Result<&mut Self>
    where
        U: MatrixElement,
        F: Fn(f64, f64) -> f64,
    {
        if self.size() != rhs.size() {
            debug!(
                "elementwise op rejected: {} vs {} elements",
                self.size(),
                rhs.size()
            );
            return Err(MatrixError::SizeMismatch);
        }

        for row in 0..self.height() {
            for col in 0..self.width() {
                if let Some(b) = rhs.get(row, col) {
                    let a = self[(row, col)];
                    self.set(row, col, T::from_f64(op(a.to_f64(), b.to_f64())));
                }
            }
        }
        Ok(self)
    }

    /// Elementwise sum, stored into `self`
    pub fn add<U: MatrixElement>(&mut self, rhs: &Matrix<U>) -> Result<&mut Self> {
        self.apply_operator(rhs, |a, b| a + b)
    }

    /// Elementwise difference, stored into `self`
    pub fn sub<U: MatrixElement>(&mut self, rhs: &Matrix<U>) -> Result<&mut Self> {
        self.apply_operator(rhs, |a, b| a - b)
    }

    /// Whether `predicate` holds for every paired element
    ///
    /// An AND-reduction over all pairs; a position missing in the right
    /// operand fails its pair.
    pub fn apply_predicate<U, P>(&self, rhs: &Matrix<U>, predicate: P) -> bool
    where
        U: MatrixElement,
        P: Fn(f64, f64) -> bool,
    {
        self.elements().all(|(coord, a)| {
            rhs.get(coord.row, coord.col)
                .is_some_and(|b| predicate(a.to_f64(), b.to_f64()))
        })
    }

    /// Fold one row down to a single element with a replace-the-pick rule
    ///
    /// Seeds the pick with the row's first element, then replaces it with
    /// each later candidate for which `replace_if(pick, candidate)` holds.
    /// Returns `None` when `row` is out of range.
    pub fn pick_in_row<P>(&self, row: usize, replace_if: P) -> Option<T>
    where
        P: Fn(f64, f64) -> bool,
    {
        if !self.has_row(row) {
            return None;
        }
        let mut iter = self.row_iter(row);
        let mut pick = iter.next()?;
        for candidate in iter {
            if replace_if(pick.to_f64(), candidate.to_f64()) {
                pick = candidate;
            }
        }
        Some(pick)
    }

    /// Fold one column down to a single element with a replace-the-pick rule
    ///
    /// Returns `None` when `col` is out of range.
    pub fn pick_in_col<P>(&self, col: usize, replace_if: P) -> Option<T>
    where
        P: Fn(f64, f64) -> bool,
    {
        if !self.has_col(col) {
            return None;
        }
        let mut iter = self.col_iter(col);
        let mut pick = iter.next()?;
        for candidate in iter {
            if replace_if(pick.to_f64(), candidate.to_f64()) {
                pick = candidate;
            }
        }
        Some(pick)
    }

    /// Largest element of a row; first occurrence wins ties
    pub fn max_in_row(&self, row: usize) -> Option<T> {
        self.pick_in_row(row, max_rule)
    }

    /// Smallest element of a row; first occurrence wins ties
    pub fn min_in_row(&self, row: usize) -> Option<T> {
        self.pick_in_row(row, min_rule)
    }

    /// Largest element of a column; first occurrence wins ties
    pub fn max_in_col(&self, col: usize) -> Option<T> {
        self.pick_in_col(col, max_rule)
    }

    /// Smallest element of a column; first occurrence wins ties
    pub fn min_in_col(&self, col: usize) -> Option<T> {
        self.pick_in_col(col, min_rule)
    }

    /// Whether any element of a row equals `target` in double precision
    pub fn row_has(&self, row: usize, target: T) -> bool {
        self.has_row(row) && self.row_iter(row).any(|v| equal(v.to_f64(), target.to_f64()))
    }

    /// Whether any element of a column equals `target` in double precision
    pub fn col_has(&self, col: usize, target: T) -> bool {
        self.has_col(col) && self.col_iter(col).any(|v| equal(v.to_f64(), target.to_f64()))
    }

    /// Positional equality of two rows in double precision
    pub fn rows_equal(&self, row_a: usize, row_b: usize) -> bool {
        if !self.has_row(row_a) || !self.has_row(row_b) {
            return false;
        }
        self.row_iter(row_a)
            .zip(self.row_iter(row_b))
            .all(|(a, b)| equal(a.to_f64(), b.to_f64()))
    }

    /// Positional equality of two columns in double precision
    pub fn cols_equal(&self, col_a: usize, col_b: usize) -> bool {
        if !self.has_col(col_a) || !self.has_col(col_b) {
            return false;
        }
        self.col_iter(col_a)
            .zip(self.col_iter(col_b))
            .all(|(a, b)| equal(a.to_f64(), b.to_f64()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(data: Vec<f64>, height: usize, width: usize) -> Matrix<f64> {
        Matrix::from_parts(data, height, width).unwrap()
    }

    #[test]
    fn add_same_shape() {
        let mut a = matrix(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        let b = matrix(vec![10.0, 20.0, 30.0, 40.0], 2, 2);
        a.add(&b).unwrap();
        assert_eq!(a.as_slice(), &[11.0, 22.0, 33.0, 44.0]);
    }

    #[test]
    fn sub_same_shape() {
        let mut a = matrix(vec![10.0, 20.0, 30.0, 40.0], 2, 2);
        let b = matrix(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        a.sub(&b).unwrap();
        assert_eq!(a.as_slice(), &[9.0, 18.0, 27.0, 36.0]);
    }

    #[test]
    fn add_chains() {
        let mut a = matrix(vec![1.0, 1.0], 1, 2);
        let b = matrix(vec![2.0, 2.0], 1, 2);
        let c = matrix(vec![3.0, 3.0], 1, 2);
        a.add(&b).unwrap().add(&c).unwrap();
        assert_eq!(a.as_slice(), &[6.0, 6.0]);
    }

    #[test]
    fn mismatched_size_leaves_left_operand_unchanged() {
        let mut a = matrix(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        let b = matrix(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
        let before = a.clone();

        assert_eq!(a.add(&b).unwrap_err(), MatrixError::SizeMismatch);
        assert_eq!(a, before);
    }

    #[test]
    fn reshaped_rhs_is_read_through_its_own_layout() {
        // 2x3 + 3x2: same element count, rhs positions resolve through
        // the rhs width, so (1, 0) reads rhs flat index 2 and both
        // trailing coordinates of row 0 / row 1 land inside the buffer
        let mut a = matrix(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
        let b = matrix(vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0], 3, 2);
        a.add(&b).unwrap();
        assert_eq!(a.as_slice(), &[11.0, 22.0, 33.0, 34.0, 45.0, 56.0]);
    }

    #[test]
    fn rhs_positions_past_its_buffer_leave_elements_unchanged() {
        // 6x1 against 2x3: coordinates (2..6, 0) compute rhs flat
        // indices past its buffer, so only the first two elements change
        let mut a = matrix(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 6, 1);
        let b = matrix(vec![10.0, 20.0, 30.0, 40.0, 50.0, 60.0], 2, 3);
        a.add(&b).unwrap();
        assert_eq!(a.as_slice(), &[11.0, 42.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn predicate_holds_for_all_pairs() {
        let a = matrix(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        let b = matrix(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        let c = matrix(vec![1.0, 2.0, 9.0, 4.0], 2, 2);

        assert!(a.apply_predicate(&b, equal));
        assert!(!a.apply_predicate(&c, equal));
        assert!(a.apply_predicate(&c, smaller_or_equal));
    }

    #[test]
    fn integer_and_float_operands_mix() {
        let mut a = matrix(vec![1.5, 2.5], 1, 2);
        let b = Matrix::from_parts(vec![1i32, 2], 1, 2).unwrap();
        a.add(&b).unwrap();
        assert_eq!(a.as_slice(), &[2.5, 4.5]);
    }

    #[test]
    fn pick_in_row_min_max() {
        let m = matrix(vec![3.0, 1.0, 4.0, 1.0, 5.0], 1, 5);
        assert_eq!(m.max_in_row(0), Some(5.0));
        assert_eq!(m.min_in_row(0), Some(1.0));
        assert_eq!(m.pick_in_row(5, max_rule), None);
    }

    #[test]
    fn pick_in_col_min_max() {
        let m = matrix(vec![3.0, 9.0, 1.0, 2.0, 4.0, 7.0], 3, 2);
        assert_eq!(m.max_in_col(0), Some(4.0));
        assert_eq!(m.min_in_col(1), Some(2.0));
        assert_eq!(m.pick_in_col(2, min_rule), None);
    }

    #[test]
    fn row_and_col_scans() {
        let m = matrix(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
        assert!(m.row_has(0, 2.0));
        assert!(!m.row_has(0, 4.0));
        assert!(m.col_has(2, 6.0));
        assert!(!m.col_has(2, 1.0));
        assert!(!m.row_has(9, 1.0));
    }

    #[test]
    fn rows_and_cols_equal() {
        let m = matrix(vec![1.0, 2.0, 1.0, 7.0, 1.0, 2.0], 3, 2);
        assert!(m.rows_equal(0, 2));
        assert!(!m.rows_equal(0, 1));
        assert!(m.rows_equal(1, 1));

        let m = matrix(vec![1.0, 5.0, 1.0, 2.0, 6.0, 2.0], 2, 3);
        assert!(m.cols_equal(0, 2));
        assert!(!m.cols_equal(0, 1));
    }
}
