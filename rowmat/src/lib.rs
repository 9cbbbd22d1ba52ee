//! Rowmat - Dense Row-Major Matrix Implementation
//!
//! This library provides a dense, mutable, row-major matrix container with
//! in-place row/column deletion, elementwise arithmetic and comparison,
//! matrix multiplication, min/max reduction, and fixed-width dumping.
//!
//! ## Architecture
//!
//! Rowmat follows a clean specification/implementation separation:
//!
//! - **rowmat-core**: Pure traits, layout math, and error definitions (no I/O)
//! - **rowmat**: The concrete storage engine, mutation and operator
//!   machinery, builder, and rendering
//!
//! ## Quick Start
//!
//! ```rust
//! use rowmat::{MatrixBuilder, Result};
//!
//! fn example() -> Result<()> {
//!     let mut m = MatrixBuilder::new()
//!         .row([1.0, 2.0, 3.0])
//!         .row([4.0, 5.0, 6.0])
//!         .build()?;
//!
//!     m.del_col(1);
//!     assert_eq!((m.height(), m.width()), (2, 2));
//!     assert_eq!(m.max_in_row(1), Some(6.0));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Features
//!
//! - **In-place compaction**: Deleting a row or column shifts survivors
//!   within the existing buffer; the allocation is never resized
//! - **Operator/predicate framework**: Addition, subtraction, equality,
//!   and min/max picking share one generic traversal
//! - **f64 promotion**: Mixed element types combine through double
//!   precision at every operation boundary
//! - **Trait-based rendering**: The dump routine reads matrices through
//!   the core traits only

// Re-export core abstractions and definitions
pub use rowmat_core::{
    // Core traits
    DenseMatrix, MatrixElement, MatrixOperations,
    // Coordinates and layout math
    layout, Coord,
    // Error handling
    MatrixError, Result,
};

// Implementation modules
pub mod builder;
pub mod delete;
pub mod dense;
pub mod dump;
pub mod elementwise;
pub mod product;

// Public exports
pub use builder::MatrixBuilder;
pub use dense::Matrix;
pub use dump::{dump, dump_to, DumpOptions};
pub use elementwise::{
    equal, greater, greater_or_equal, max_rule, min_rule, smaller, smaller_or_equal,
};
