//! Matrix multiplication
//!
//! The product accumulates in double precision and yields an f64 matrix
//! regardless of operand element types; integer typing is not preserved.

use log::debug;

use rowmat_core::{MatrixElement, MatrixError, Result};

use crate::Matrix;

impl<T: MatrixElement> Matrix<T> {
    /// Standard matrix product, as a freshly allocated f64 matrix
    ///
    /// Requires `self.width() == rhs.height()`; on mismatch no result is
    /// produced and an error is returned. Cell (i, j) of the result is
    /// the sum over k of `self[(i, k)] * rhs[(k, j)]`, accumulated in
    /// double precision. No pivoting or other stability measures are
    /// applied.
    pub fn multiply<U: MatrixElement>(&self, rhs: &Matrix<U>) -> Result<Matrix<f64>> {
        if self.width() != rhs.height() {
            debug!(
                "product rejected: {}x{} * {}x{}",
                self.height(),
                self.width(),
                rhs.height(),
                rhs.width()
            );
            return Err(MatrixError::DimensionMismatch);
        }

        let mut out = Matrix::zeros(self.height(), rhs.width())?;
        for i in 0..self.height() {
            for j in 0..rhs.width() {
                let mut sum = 0.0;
                for k in 0..self.width() {
                    sum += self[(i, k)].to_f64() * rhs[(k, j)].to_f64();
                }
                out.set(i, j, sum);
            }
        }
        Ok(out)
    }
}
