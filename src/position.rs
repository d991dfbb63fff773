//! This module contains the addressing scheme for the cells of a 9x9 grid.
//!
//! Cells are addressed hierarchically by a [CellPosition], that is, by the
//! coordinates of the 3x3 box they lie in and their coordinates inside that
//! box. The equivalent flat form is a `(row, column)` pair, with
//! `row = box_y * 3 + cell_y` and `column = box_x * 3 + cell_x`. For use as a
//! map key, every position additionally has an integer key (`row * 9 +
//! column`) and a stable textual [CellId].

use crate::{BOX_SIZE, CELL_COUNT, SIZE};
use crate::error::{GridError, GridResult, KillerError, KillerResult};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The hierarchical address of one of the 81 cells of a 9x9 grid, consisting
/// of the box coordinates and the coordinates inside the box. All four
/// coordinates lie in the range `[0, 3[`, which is checked on construction.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(into = "RawCellPosition")]
#[serde(try_from = "RawCellPosition")]
pub struct CellPosition {
    box_x: u8,
    box_y: u8,
    cell_x: u8,
    cell_y: u8
}

#[derive(Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct RawCellPosition {
    box_x: u8,
    box_y: u8,
    cell_x: u8,
    cell_y: u8
}

impl From<CellPosition> for RawCellPosition {
    fn from(position: CellPosition) -> RawCellPosition {
        RawCellPosition {
            box_x: position.box_x,
            box_y: position.box_y,
            cell_x: position.cell_x,
            cell_y: position.cell_y
        }
    }
}

impl TryFrom<RawCellPosition> for CellPosition {
    type Error = GridError;

    fn try_from(raw: RawCellPosition) -> GridResult<CellPosition> {
        CellPosition::new(raw.box_x, raw.box_y, raw.cell_x, raw.cell_y)
    }
}

// (row, column) deltas in the order up, down, left, right
const NEIGHBOR_OFFSETS: [(isize, isize); 4] =
    [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl CellPosition {

    /// Creates a new cell position from its box coordinates and its
    /// coordinates inside the box.
    ///
    /// # Errors
    ///
    /// If any coordinate is not in the range `[0, 3[`. In that case,
    /// `GridError::OutOfBounds` is returned.
    pub fn new(box_x: u8, box_y: u8, cell_x: u8, cell_y: u8)
            -> GridResult<CellPosition> {
        let limit = BOX_SIZE as u8;

        if box_x >= limit || box_y >= limit || cell_x >= limit ||
                cell_y >= limit {
            return Err(GridError::OutOfBounds);
        }

        Ok(CellPosition {
            box_x,
            box_y,
            cell_x,
            cell_y
        })
    }

    /// Creates a cell position from flat coordinates.
    ///
    /// # Errors
    ///
    /// If either `row` or `column` is not in the range `[0, 9[`. In that
    /// case, `GridError::OutOfBounds` is returned.
    pub fn from_flat(row: usize, column: usize) -> GridResult<CellPosition> {
        if row >= SIZE || column >= SIZE {
            return Err(GridError::OutOfBounds);
        }

        Ok(CellPosition::from_flat_unchecked(row, column))
    }

    /// Creates the cell position with the given integer key, as returned by
    /// [CellPosition::key].
    ///
    /// # Errors
    ///
    /// If `key` is not in the range `[0, 81[`. In that case,
    /// `GridError::OutOfBounds` is returned.
    pub fn from_key(key: usize) -> GridResult<CellPosition> {
        if key >= CELL_COUNT {
            return Err(GridError::OutOfBounds);
        }

        Ok(CellPosition::from_flat_unchecked(key / SIZE, key % SIZE))
    }

    fn from_flat_unchecked(row: usize, column: usize) -> CellPosition {
        CellPosition {
            box_x: (column / BOX_SIZE) as u8,
            box_y: (row / BOX_SIZE) as u8,
            cell_x: (column % BOX_SIZE) as u8,
            cell_y: (row % BOX_SIZE) as u8
        }
    }

    /// The horizontal coordinate of the box containing this cell.
    pub fn box_x(&self) -> u8 {
        self.box_x
    }

    /// The vertical coordinate of the box containing this cell.
    pub fn box_y(&self) -> u8 {
        self.box_y
    }

    /// The horizontal coordinate of this cell inside its box.
    pub fn cell_x(&self) -> u8 {
        self.cell_x
    }

    /// The vertical coordinate of this cell inside its box.
    pub fn cell_y(&self) -> u8 {
        self.cell_y
    }

    /// The row of this cell in the flat 9x9 grid, in the range `[0, 9[`.
    pub fn row(&self) -> usize {
        self.box_y as usize * BOX_SIZE + self.cell_y as usize
    }

    /// The column of this cell in the flat 9x9 grid, in the range `[0, 9[`.
    pub fn column(&self) -> usize {
        self.box_x as usize * BOX_SIZE + self.cell_x as usize
    }

    /// The canonical integer key of this cell, `row * 9 + column`. Keys are
    /// unique among all 81 positions and enumerate them in row-major order.
    pub fn key(&self) -> usize {
        self.row() * SIZE + self.column()
    }

    /// The stable textual identifier of this cell. See [CellId].
    pub fn cell_id(&self) -> CellId {
        CellId::from(*self)
    }

    /// Returns the orthogonal neighbors of this cell, in the order up, down,
    /// left, right. Neighbors outside the grid are omitted, so the result has
    /// between 2 (corners) and 4 (interior) entries. Box boundaries are
    /// ignored.
    pub fn neighbors(&self) -> Vec<CellPosition> {
        let row = self.row() as isize;
        let column = self.column() as isize;
        let size = SIZE as isize;

        NEIGHBOR_OFFSETS.iter()
            .map(|&(d_row, d_column)| (row + d_row, column + d_column))
            .filter(|&(r, c)| r >= 0 && r < size && c >= 0 && c < size)
            .map(|(r, c)|
                CellPosition::from_flat_unchecked(r as usize, c as usize))
            .collect()
    }

    /// Indicates whether this cell and `other` share an edge.
    pub fn is_adjacent(&self, other: &CellPosition) -> bool {
        let row_distance =
            (self.row() as isize - other.row() as isize).abs();
        let column_distance =
            (self.column() as isize - other.column() as isize).abs();
        row_distance + column_distance == 1
    }
}

impl Display for CellPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row() + 1, self.column() + 1)
    }
}

/// Returns an iterator over all 81 cell positions of the grid in row-major
/// order, that is, ordered by their [key](CellPosition::key).
pub fn all_positions() -> impl Iterator<Item = CellPosition> {
    (0..CELL_COUNT).map(|key| CellPosition::from_flat_unchecked(key / SIZE,
        key % SIZE))
}

/// A stable textual identifier of a cell, made of the four hierarchical
/// coordinates `box_x`, `box_y`, `cell_x`, and `cell_y` concatenated in that
/// order. For example, the cell in row 3 and column 7 (both zero-based) has
/// the id `"2110"`.
///
/// Cell ids are the keys of the [CageIndex](crate::cage::CageIndex) and are
/// what the rendering and gameplay layers use to refer to cells.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd,
    Serialize)]
#[serde(transparent)]
pub struct CellId(String);

impl CellId {

    /// Parses a cell id from its textual form.
    ///
    /// # Errors
    ///
    /// If `id` does not consist of exactly four digits in the range `[0, 3[`.
    /// In that case, `KillerError::MalformedCellId` is returned.
    pub fn parse(id: &str) -> KillerResult<CellId> {
        let id = CellId(id.to_owned());
        id.to_position()?;
        Ok(id)
    }

    /// Gets the textual form of this id.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts this id back to the position it identifies.
    ///
    /// # Errors
    ///
    /// If this id was deserialized from malformed input. In that case,
    /// `KillerError::MalformedCellId` is returned.
    pub fn to_position(&self) -> KillerResult<CellPosition> {
        let malformed = || KillerError::MalformedCellId(self.0.clone());
        let digits = self.0.chars()
            .map(|c| c.to_digit(10).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(malformed)?;

        if digits.len() != 4 {
            return Err(malformed());
        }

        CellPosition::new(digits[0], digits[1], digits[2], digits[3])
            .map_err(|_| malformed())
    }
}

impl From<CellPosition> for CellId {
    fn from(position: CellPosition) -> CellId {
        CellId(format!("{}{}{}{}", position.box_x, position.box_y,
            position.cell_x, position.cell_y))
    }
}

impl Display for CellId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
