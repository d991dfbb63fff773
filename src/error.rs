//! This module contains the error and result definitions used in this crate.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur when accessing or modifying a [Grid](crate::Grid)
/// or constructing a [CellPosition](crate::position::CellPosition).
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum GridError {

    /// Indicates that the specified coordinates lie outside the 9x9 grid, or
    /// that a box or in-box coordinate is not in the range `[0, 3[`.
    #[error("coordinates out of bounds")]
    OutOfBounds,

    /// Indicates that some digit is not in the range `[0, 9]`, where 0 stands
    /// for an empty cell.
    #[error("digit out of range")]
    InvalidNumber
}

/// Syntactic sugar for `Result<V, GridError>`.
pub type GridResult<V> = Result<V, GridError>;

/// An enumeration of the errors that may occur when parsing a
/// [Grid](crate::Grid) from its code or from nested rows.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum GridParseError {

    /// Indicates that the number of cells (which are separated by commas) or
    /// the number of rows and columns is not 9x9.
    #[error("wrong number of cells")]
    WrongNumberOfCells,

    /// Indicates that one of the cell entries could not be parsed.
    #[error("malformed number")]
    NumberFormatError,

    /// Indicates that a cell is filled with a number greater than 9.
    #[error("invalid number")]
    InvalidNumber
}

/// Syntactic sugar for `Result<V, GridParseError>`.
pub type GridParseResult<V> = Result<V, GridParseError>;

impl From<ParseIntError> for GridParseError {
    fn from(_: ParseIntError) -> Self {
        GridParseError::NumberFormatError
    }
}

impl From<GridError> for GridParseError {
    fn from(_: GridError) -> Self {
        GridParseError::InvalidNumber
    }
}

/// Errors raised while building cages or converting a solved grid into a
/// Killer puzzle. The [KillerGenerator](crate::generator::KillerGenerator)
/// turns every one of them into a failed
/// [KillerConversionResult](crate::generator::KillerConversionResult).
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum KillerError {

    /// The cage generation options are inconsistent, for example a minimum
    /// cage size greater than the maximum one.
    #[error("invalid cage generation options: {0}")]
    InvalidOptions(String),

    /// The grid handed in as a solution still contains an empty cell.
    #[error("grid is not fully solved: cell at column {column}, row {row} is empty")]
    IncompleteGrid {

        /// The column of the first empty cell.
        column: usize,

        /// The row of the first empty cell.
        row: usize
    },

    /// The grid handed in as a solution repeats a digit in some row, column,
    /// or box.
    #[error("grid violates the standard sudoku rules")]
    InvalidGrid,

    /// A cage was created without any cells.
    #[error("cage contains no cells")]
    EmptyCage,

    /// A cage was created where a cell was contained twice.
    #[error("cage contains the same cell more than once")]
    DuplicateCells,

    /// A cage was created whose cells are not orthogonally connected.
    #[error("cage cells are not connected")]
    DisconnectedCage,

    /// A puzzle was assembled from cages which share a cell.
    #[error("cell {0} is contained in more than one cage")]
    OverlappingCages(String),

    /// A cell id could not be parsed into a position.
    #[error("malformed cell id: {0:?}")]
    MalformedCellId(String),

    /// The produced partition does not cover the grid exactly once.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),

    /// The grid code could not be parsed.
    #[error("could not parse grid: {0}")]
    Parse(#[from] GridParseError)
}

/// Syntactic sugar for `Result<V, KillerError>`.
pub type KillerResult<V> = Result<V, KillerError>;
