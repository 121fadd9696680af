use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::grid::Axis;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    MalformedInput(#[from] MalformedInput),

    /// A line written back to the grid does not match the length of its target.
    #[error("line of {found} cells written to {axis} {index}, which holds {expected}")]
    #[diagnostic(code(day14::length_mismatch))]
    LengthMismatch {
        axis: Axis,
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("{axis} {index} out of bounds, the grid has {count}")]
    #[diagnostic(code(day14::index_out_of_bounds))]
    IndexOutOfBounds {
        axis: Axis,
        index: usize,
        count: usize,
    },

    #[error("no state repeated within {ceiling} steps")]
    #[diagnostic(
        code(day14::no_cycle),
        help("the transition is expected to be deterministic over a finite state space")
    )]
    NoCycleFound { ceiling: usize },
}

/// Reasons the platform text can't be turned into a grid.
#[derive(Debug, Error, Diagnostic)]
pub enum MalformedInput {
    #[error("platform has no rows")]
    #[diagnostic(code(day14::empty))]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    #[diagnostic(code(day14::ragged_row), help("rows must match the first"))]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{0:?} is not a platform cell")]
    #[diagnostic(code(day14::unknown_symbol), help("use '.', 'O' or '#'"))]
    UnknownSymbol(char),

    #[error("unexpected {found:?} at row {row}, column {column}")]
    #[diagnostic(code(day14::invalid_cell), help("use '.', 'O' or '#'"))]
    InvalidCell {
        row: usize,
        column: usize,
        found: char,
        #[source_code]
        line: String,
        #[label("not a platform cell")]
        span: SourceSpan,
    },
}
