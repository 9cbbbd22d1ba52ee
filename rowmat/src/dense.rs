//! Dense row-major matrix storage
//!
//! The concrete [`Matrix`] container: one flat buffer of `height * width`
//! elements addressed as `col + row * width`. The buffer length always
//! equals the logical size at the public API boundary; structural deletion
//! (see the `delete` module) shrinks the logical size in place without
//! reallocating.

use std::ops::{Index, IndexMut};

use rowmat_core::{layout, Coord, DenseMatrix, MatrixElement, MatrixOperations, Result};

/// Dense, mutable, row-major matrix
///
/// Elements are any [`MatrixElement`]; arithmetic and comparisons promote
/// through f64 at the operation boundary. Both dimensions are always at
/// least 1.
///
/// # Example
///
/// ```
/// use rowmat::Matrix;
///
/// let mut m = Matrix::from_parts(vec![1.0, 2.0, 3.0, 4.0], 2, 2).unwrap();
/// m.set(0, 1, 9.0);
/// assert_eq!(m.get(0, 1), Some(9.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Matrix<T: MatrixElement = f64> {
    pub(crate) data: Vec<T>,
    pub(crate) height: usize,
    pub(crate) width: usize,
}

impl<T: MatrixElement> Matrix<T> {
    /// Create a matrix from a row-major buffer and explicit dimensions
    ///
    /// The buffer length must equal `height * width` and both dimensions
    /// must be at least 1.
    pub fn from_parts(data: Vec<T>, height: usize, width: usize) -> Result<Self> {
        layout::validate_shape(height, width, data.len())?;
        Ok(Self {
            data,
            height,
            width,
        })
    }

    /// Create a matrix of the given shape filled with zeros
    pub fn zeros(height: usize, width: usize) -> Result<Self> {
        let size = layout::checked_size(height, width)?;
        Ok(Self {
            data: vec![T::from_f64(0.0); size],
            height,
            width,
        })
    }

    /// Replace the whole backing buffer
    ///
    /// The replacement must match the current element count; on mismatch
    /// the matrix is left untouched and an error is returned.
    pub fn set_contents(&mut self, values: Vec<T>) -> Result<&mut Self> {
        layout::validate_shape(self.height, self.width, values.len())?;
        self.data = values;
        Ok(self)
    }

    /// Row count
    pub fn height(&self) -> usize {
        self.height
    }

    /// Column count
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total element count (`height * width`)
    pub fn size(&self) -> usize {
        self.height * self.width
    }

    /// Whether `row` is a valid row index
    pub fn has_row(&self, row: usize) -> bool {
        row < self.height
    }

    /// Whether `col` is a valid column index
    pub fn has_col(&self, col: usize) -> bool {
        col < self.width
    }

    #[inline]
    pub(crate) fn offset(&self, row: usize, col: usize) -> usize {
        layout::flat_index(row, col, self.width)
    }

    /// Get the element at (row, col)
    ///
    /// Returns `None` when the computed flat index falls outside the
    /// matrix. Per-axis bounds are the caller's responsibility: a column
    /// index past `width` whose flat index is still in range reads from
    /// the following row, per the flat-index contract.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.data.get(self.offset(row, col)).copied()
    }

    /// Get the element at (row, col) promoted to f64
    pub fn get_f64(&self, row: usize, col: usize) -> Option<f64> {
        self.get(row, col).map(MatrixElement::to_f64)
    }

    /// Get the element at (row, col) truncated to i64
    pub fn get_i64(&self, row: usize, col: usize) -> Option<i64> {
        self.get(row, col).map(|v| v.to_f64() as i64)
    }

    /// Write `value` at (row, col)
    ///
    /// Unchecked: (row, col) must name a valid position. Out-of-range
    /// positions panic.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let idx = self.offset(row, col);
        self.data[idx] = value;
    }

    /// The backing buffer in row-major order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// One row as a contiguous slice
    ///
    /// Panics if `row` is out of range.
    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.width]
    }

    /// Iterate one row in column order
    pub fn row_iter(&self, row: usize) -> impl Iterator<Item = T> + '_ {
        self.row_slice(row).iter().copied()
    }

    /// Iterate one column in row order
    pub fn col_iter(&self, col: usize) -> impl Iterator<Item = T> + '_ {
        (0..self.height).map(move |row| self.data[self.offset(row, col)])
    }

    /// Iterate every element in row-major order with its coordinates
    pub fn elements(&self) -> impl Iterator<Item = (Coord, T)> + '_ {
        self.data.iter().copied().enumerate().map(move |(idx, value)| {
            let coord = Coord::new(
                layout::row_of(idx, self.width),
                layout::col_of(idx, self.width),
            );
            (coord, value)
        })
    }
}

impl<T: MatrixElement> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[self.offset(row, col)]
    }
}

impl<T: MatrixElement> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        let idx = self.offset(row, col);
        &mut self.data[idx]
    }
}

impl<T: MatrixElement> DenseMatrix for Matrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        self.get(row, col)
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    fn size(&self) -> usize {
        self.height * self.width
    }
}

impl<T: MatrixElement> MatrixOperations for Matrix<T> {
    fn get_row(&self, row_index: usize) -> Vec<T> {
        self.row_iter(row_index).collect()
    }

    fn get_col(&self, col_index: usize) -> Vec<T> {
        self.col_iter(col_index).collect()
    }
}

// Deserialization goes through `from_parts` so a hand-written payload
// cannot break the buffer-length invariant.
#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Matrix<T>
where
    T: MatrixElement + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw<T> {
            data: Vec<T>,
            height: usize,
            width: usize,
        }

        let raw = Raw::deserialize(deserializer)?;
        Matrix::from_parts(raw.data, raw.height, raw.width).map_err(serde::de::Error::custom)
    }
}
