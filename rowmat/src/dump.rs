//! Fixed-width matrix rendering
//!
//! Renders any [`DenseMatrix`] through its read-only trait surface:
//! right-aligned cells rounded to a configured number of fractional
//! digits, with optional 1-based row and column header labels. Pure
//! presentation; no matrix state is touched.

use std::io::{self, Write};

use rowmat_core::{DenseMatrix, MatrixElement};

/// Rendering options for [`dump_to`]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DumpOptions {
    /// Width of every cell in characters
    pub cell_width: usize,
    /// Maximum fractional digits per cell
    pub precision: usize,
    /// Prefix for 1-based row labels, e.g. "r" labels rows "r1", "r2", ...
    pub row_label: Option<String>,
    /// Prefix for 1-based column labels
    pub col_label: Option<String>,
}

impl DumpOptions {
    /// Set the cell width in characters
    pub fn with_cell_width(mut self, cell_width: usize) -> Self {
        self.cell_width = cell_width;
        self
    }

    /// Set the maximum number of fractional digits
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Label rows with `prefix` followed by the 1-based row number
    pub fn with_row_label(mut self, prefix: impl Into<String>) -> Self {
        self.row_label = Some(prefix.into());
        self
    }

    /// Label columns with `prefix` followed by the 1-based column number
    pub fn with_col_label(mut self, prefix: impl Into<String>) -> Self {
        self.col_label = Some(prefix.into());
        self
    }
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            cell_width: 5,
            precision: 2,
            row_label: None,
            col_label: None,
        }
    }
}

/// Format one value with at most `precision` fractional digits
///
/// Trailing zeros and a bare trailing point are trimmed, so whole
/// numbers render without a fraction ("7", not "7.00").
fn format_cell(value: f64, precision: usize) -> String {
    let mut text = format!("{value:.precision$}");
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    text
}

/// Render `matrix` into `out` according to `options`
///
/// Layout: an optional column-header line, then one line per row with an
/// optional leading row label (an empty cell when unlabeled), then a
/// trailing blank line.
pub fn dump_to<M, W>(matrix: &M, out: &mut W, options: &DumpOptions) -> io::Result<()>
where
    M: DenseMatrix,
    W: Write,
{
    let (height, width) = matrix.dimensions();
    let cell = options.cell_width;

    if let Some(prefix) = &options.col_label {
        write!(out, "{:>cell$}", "")?;
        for col in 0..width {
            write!(out, "{:>cell$}", format!("{prefix}{}", col + 1))?;
        }
        writeln!(out)?;
    }

    for row in 0..height {
        match &options.row_label {
            Some(prefix) => write!(out, "{:>cell$}", format!("{prefix}{}", row + 1))?,
            None => write!(out, "{:>cell$}", "")?,
        }
        for col in 0..width {
            let text = match matrix.get_element(row, col) {
                Some(value) => format_cell(value.to_f64(), options.precision),
                None => String::new(),
            };
            write!(out, "{:>cell$}", text)?;
        }
        writeln!(out)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Render `matrix` to stdout according to `options`
pub fn dump<M: DenseMatrix>(matrix: &M, options: &DumpOptions) -> io::Result<()> {
    let stdout = io::stdout();
    dump_to(matrix, &mut stdout.lock(), options)
}
