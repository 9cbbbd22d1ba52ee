//! Row-major layout math
//!
//! Pure mathematical functions mapping (row, column) positions to flat
//! buffer indices and back, plus shape validation with overflow
//! protection. No I/O dependencies.

use crate::error::{MatrixError, Result};

/// Flat buffer index of a (row, column) position
///
/// Row-major: all columns of a row are contiguous before the next
/// row begins, so the index is `col + row * width`.
pub const fn flat_index(row: usize, col: usize, width: usize) -> usize {
    col + row * width
}

/// Row recovered from a flat buffer index
pub const fn row_of(idx: usize, width: usize) -> usize {
    idx / width
}

/// Column recovered from a flat buffer index
pub const fn col_of(idx: usize, width: usize) -> usize {
    idx % width
}

/// Compute `height * width` with overflow protection
///
/// Both dimensions must be at least 1; a dense matrix never has an
/// empty axis.
pub const fn checked_size(height: usize, width: usize) -> Result<usize> {
    if height == 0 || width == 0 {
        return Err(MatrixError::ZeroDimension);
    }
    match height.checked_mul(width) {
        Some(size) => Ok(size),
        None => Err(MatrixError::SizeOverflow),
    }
}

/// Validate that a buffer of `len` elements exactly fills a
/// height x width matrix
///
/// Returns the element count on success. This is a pure function with
/// no side effects.
pub const fn validate_shape(height: usize, width: usize, len: usize) -> Result<usize> {
    let size = match checked_size(height, width) {
        Ok(size) => size,
        Err(e) => return Err(e),
    };
    if size != len {
        return Err(MatrixError::ShapeMismatch);
    }
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_index_row_major_order() {
        assert_eq!(flat_index(0, 0, 4), 0);
        assert_eq!(flat_index(0, 3, 4), 3);
        assert_eq!(flat_index(1, 0, 4), 4);
        assert_eq!(flat_index(2, 1, 4), 9);
    }

    #[test]
    fn test_flat_index_round_trip() {
        let width = 7;
        for row in 0..5 {
            for col in 0..width {
                let idx = flat_index(row, col, width);
                assert_eq!(row_of(idx, width), row);
                assert_eq!(col_of(idx, width), col);
            }
        }
    }

    #[test]
    fn test_checked_size() {
        assert_eq!(checked_size(3, 4), Ok(12));
        assert_eq!(checked_size(1, 1), Ok(1));

        // Degenerate axes are rejected
        assert_eq!(checked_size(0, 4), Err(MatrixError::ZeroDimension));
        assert_eq!(checked_size(3, 0), Err(MatrixError::ZeroDimension));

        // Overflow is rejected
        assert_eq!(checked_size(usize::MAX, 2), Err(MatrixError::SizeOverflow));
    }

    #[test]
    fn test_validate_shape() {
        assert_eq!(validate_shape(2, 3, 6), Ok(6));
        assert_eq!(validate_shape(2, 3, 5), Err(MatrixError::ShapeMismatch));
        assert_eq!(validate_shape(2, 3, 7), Err(MatrixError::ShapeMismatch));
        assert_eq!(validate_shape(0, 3, 0), Err(MatrixError::ZeroDimension));
    }
}
