//! Element coordinates for traversal callbacks
//!
//! A `Coord` names one (row, column) position in a matrix. Traversals hand
//! a fresh copy to the callback on every iteration, so callers may keep or
//! ignore it freely; it carries no identity beyond its two fields.

/// A (row, column) position in a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    /// Row index (0-based)
    pub row: usize,
    /// Column index (0-based)
    pub col: usize,
}

impl Coord {
    /// Create a coordinate pair
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}
