//! Error types for matrix operations

/// Errors that can occur while constructing or combining matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Buffer length does not match the requested shape
    ShapeMismatch,
    /// Operand element counts differ
    SizeMismatch,
    /// Operand inner dimensions do not agree
    DimensionMismatch,
    /// A dimension of zero was requested
    ZeroDimension,
    /// Element count overflows usize
    SizeOverflow,
    /// No rows were added to a builder
    EmptyBuilder,
    /// Builder rows have unequal lengths
    RaggedRows,
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            MatrixError::ShapeMismatch => "buffer length does not match matrix shape",
            MatrixError::SizeMismatch => "operand element counts differ",
            MatrixError::DimensionMismatch => "operand inner dimensions do not agree",
            MatrixError::ZeroDimension => "matrix dimensions must be at least 1x1",
            MatrixError::SizeOverflow => "matrix element count overflows usize",
            MatrixError::EmptyBuilder => "no rows were added to the builder",
            MatrixError::RaggedRows => "builder rows have unequal lengths",
        };
        write!(f, "{msg}")
    }
}

/// Result type for matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
