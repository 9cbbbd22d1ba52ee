//! In-place row and column deletion
//!
//! Removing a row or column compacts the flat buffer in place: surviving
//! elements keep their row-major order, the gap is closed by shifting, and
//! the logical tail is truncated. The backing allocation is never resized,
//! and reads past the new size resolve to missing rather than stale data.

use log::trace;

use rowmat_core::{layout, MatrixElement};

use crate::Matrix;

impl<T: MatrixElement> Matrix<T> {
    /// Remove row `row`, shifting every later row up by one
    ///
    /// Deleting the only row is a no-op; the matrix never drops below one
    /// row. `row` must be a valid index (check with [`Matrix::has_row`]);
    /// an out-of-range index is a contract violation and may panic.
    pub fn del_row(&mut self, row: usize) {
        if self.height == 1 {
            return;
        }

        let width = self.width;
        let start = layout::flat_index(row, 0, width);
        let size = self.size();
        self.data.copy_within(start + width..size, start);

        self.height -= 1;
        let new_size = self.size();
        self.data.truncate(new_size);
        trace!("deleted row {row}, new shape {}x{}", self.height, self.width);
    }

    /// Remove column `col`, shifting the remainder of the buffer left
    ///
    /// Every surviving element keeps its row-major position relative to
    /// the others; one forward pass closes the per-row gaps. Deleting the
    /// only column is a no-op. `col` must be a valid index (check with
    /// [`Matrix::has_col`]); an out-of-range index is a contract
    /// violation and leaves the buffer in an unspecified state.
    pub fn del_col(&mut self, col: usize) {
        if self.width == 1 {
            return;
        }

        let width = self.width;
        let size = self.size();
        let mut write = 0;
        for read in 0..size {
            if layout::col_of(read, width) != col {
                self.data[write] = self.data[read];
                write += 1;
            }
        }

        self.width -= 1;
        let new_size = self.size();
        self.data.truncate(new_size);
        trace!("deleted col {col}, new shape {}x{}", self.height, self.width);
    }
}
