//! Core matrix abstraction traits
//!
//! This module defines the fundamental traits that all matrix implementations
//! must satisfy. These are pure interfaces with no concrete implementations.

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use super::element::MatrixElement;

/// Core dense matrix trait for storage-agnostic read access
///
/// This trait provides the minimal read-only interface that all dense matrix
/// implementations must provide. Renderers and other consumers iterate a
/// matrix through this trait without knowing its buffer layout.
pub trait DenseMatrix {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get an element at the specified position
    ///
    /// Returns `None` if the flat index computed for the position falls
    /// outside the matrix. Per-axis bound checks remain the caller's
    /// responsibility; this is the single defensive check in the access
    /// path.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (height, width)
    fn dimensions(&self) -> (usize, usize);

    /// Get the number of stored elements (height x width)
    fn size(&self) -> usize;
}

/// Extension trait for row/column operations (requires alloc feature)
///
/// This trait provides higher-level operations that require allocation.
/// Only available when the `alloc` feature is enabled.
#[cfg(feature = "alloc")]
pub trait MatrixOperations: DenseMatrix {
    /// Get all elements in a row
    ///
    /// Returns a vector of the elements in the specified row, in
    /// column order.
    fn get_row(&self, row_index: usize) -> Vec<Self::Element>;

    /// Get all elements in a column
    ///
    /// Returns a vector of the elements in the specified column, in
    /// row order.
    fn get_col(&self, col_index: usize) -> Vec<Self::Element>;
}
