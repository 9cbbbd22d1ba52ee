//! Declarative construction of matrices from row literals

use rowmat_core::{MatrixElement, MatrixError, Result};

use crate::Matrix;

/// Builder accumulating rows of equal length
///
/// # Example
///
/// ```
/// use rowmat::MatrixBuilder;
///
/// let m = MatrixBuilder::new()
///     .row([1.0, 2.0, 3.0])
///     .row([4.0, 5.0, 6.0])
///     .build()
///     .unwrap();
/// assert_eq!((m.height(), m.width()), (2, 3));
/// ```
#[derive(Debug, Clone)]
pub struct MatrixBuilder<T> {
    rows: Vec<Vec<T>>,
}

impl<T: MatrixElement> MatrixBuilder<T> {
    /// Create an empty builder
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Append one row of elements
    pub fn row<I: IntoIterator<Item = T>>(mut self, row: I) -> Self {
        self.rows.push(row.into_iter().collect());
        self
    }

    /// Assemble the matrix: height = row count, width = row length
    ///
    /// At least one row must have been added, and every row must match
    /// the first row's length.
    pub fn build(self) -> Result<Matrix<T>> {
        let width = match self.rows.first() {
            Some(first) => first.len(),
            None => return Err(MatrixError::EmptyBuilder),
        };
        if self.rows.iter().any(|row| row.len() != width) {
            return Err(MatrixError::RaggedRows);
        }

        let height = self.rows.len();
        let mut data = Vec::with_capacity(height * width);
        for row in self.rows {
            data.extend(row);
        }
        Matrix::from_parts(data, height, width)
    }
}

impl<T: MatrixElement> Default for MatrixBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: MatrixElement> Matrix<T> {
    /// Start a row-by-row builder for this element type
    pub fn builder() -> MatrixBuilder<T> {
        MatrixBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_row_major() {
        let m = MatrixBuilder::new()
            .row([1.0, 2.0])
            .row([3.0, 4.0])
            .row([5.0, 6.0])
            .build()
            .unwrap();

        assert_eq!((m.height(), m.width()), (3, 2));
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn accepts_any_row_iterable() {
        let m = Matrix::builder()
            .row(vec![1i32, 2, 3])
            .row(4..7)
            .build()
            .unwrap();
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn empty_builder_is_an_error() {
        let err = MatrixBuilder::<f64>::new().build().unwrap_err();
        assert_eq!(err, MatrixError::EmptyBuilder);
    }

    #[test]
    fn ragged_rows_are_an_error() {
        let err = MatrixBuilder::new()
            .row([1.0, 2.0])
            .row([3.0])
            .build()
            .unwrap_err();
        assert_eq!(err, MatrixError::RaggedRows);
    }

    #[test]
    fn empty_first_row_is_an_error() {
        let err = MatrixBuilder::<f64>::new().row([]).build().unwrap_err();
        assert_eq!(err, MatrixError::ZeroDimension);
    }
}
