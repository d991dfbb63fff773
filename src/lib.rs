// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(missing_crate_level_docs)]
#![warn(invalid_codeblock_attributes)]

//! This crate turns solved 9x9 Sudoku grids into Killer Sudoku. It partitions
//! the 81 cells into non-overlapping, orthogonally connected cages and
//! annotates every cage with the sum of the solved digits it covers. The key
//! features are:
//!
//! * Parsing and printing 9x9 grids
//! * Hierarchical (box and in-box) as well as flat (row and column) cell
//! addressing
//! * Randomized cage generation with full, non-overlapping coverage that is
//! reproducible under a seeded random number generator
//! * A cell-to-cage lookup table for rendering and validation
//! * Validation of (partially) filled player grids against the cages
//!
//! # Parsing and printing grids
//!
//! See [Grid::parse] for the exact format of a grid code. Empty cells are
//! represented by the digit 0.
//!
//! ```
//! use killer_cages::Grid;
//!
//! let grid = Grid::parse("\
//!     4,5,6,2,1,7,3,9,8,\
//!     8,1,2,9,6,3,5,4,7,\
//!     9,7,3,4,5,8,6,1,2,\
//!     1,2,5,6,7,4,9,8,3,\
//!     3,6,4,8,9,1,2,7,5,\
//!     7,9,8,5,3,2,4,6,1,\
//!     6,4,1,7,2,5,8,3,9,\
//!     5,3,9,1,8,6,7,2,4,\
//!     2,8,7,3,4,9,1,5,6").unwrap();
//! assert!(grid.is_solved());
//! println!("{}", grid);
//! ```
//!
//! # Generating Killer puzzles
//!
//! A [KillerGenerator](generator::KillerGenerator) converts a solved grid into
//! a [KillerPuzzle](generator::KillerPuzzle). It needs a random number
//! generator, for which any type implementing the `Rng` trait from the
//! [rand](https://rust-random.github.io/rand/rand/index.html) crate can be
//! used (see [RandomSource](random::RandomSource)). The conversion never
//! panics or returns an `Err` - instead, it reports failures inside the
//! [KillerConversionResult](generator::KillerConversionResult).
//!
//! ```
//! use killer_cages::Grid;
//! use killer_cages::generator::KillerGenerator;
//!
//! let solution = Grid::parse("\
//!     4,5,6,2,1,7,3,9,8,\
//!     8,1,2,9,6,3,5,4,7,\
//!     9,7,3,4,5,8,6,1,2,\
//!     1,2,5,6,7,4,9,8,3,\
//!     3,6,4,8,9,1,2,7,5,\
//!     7,9,8,5,3,2,4,6,1,\
//!     6,4,1,7,2,5,8,3,9,\
//!     5,3,9,1,8,6,7,2,4,\
//!     2,8,7,3,4,9,1,5,6").unwrap();
//!
//! // new_default yields a generator with cages of 2 to 3 cells and
//! // rand::thread_rng()
//! let mut generator = KillerGenerator::new_default();
//! let result = generator.convert(&solution);
//! assert!(result.is_success());
//!
//! let covered: usize = result.cages().iter().map(|c| c.len()).sum();
//! assert_eq!(81, covered);
//! assert!(result.killer_initial().is_empty());
//! assert_eq!(&solution, result.killer_final());
//! ```
//!
//! # Checking player input
//!
//! The [validation] module checks a player's grid against the cages, which
//! allows highlighting cages whose sum is exceeded or which repeat digits.
//!
//! ```
//! use killer_cages::Grid;
//! use killer_cages::generator::KillerGenerator;
//! use killer_cages::validation;
//!
//! let solution = Grid::parse("\
//!     4,5,6,2,1,7,3,9,8,\
//!     8,1,2,9,6,3,5,4,7,\
//!     9,7,3,4,5,8,6,1,2,\
//!     1,2,5,6,7,4,9,8,3,\
//!     3,6,4,8,9,1,2,7,5,\
//!     7,9,8,5,3,2,4,6,1,\
//!     6,4,1,7,2,5,8,3,9,\
//!     5,3,9,1,8,6,7,2,4,\
//!     2,8,7,3,4,9,1,5,6").unwrap();
//! let puzzle = KillerGenerator::new_default().try_convert(&solution).unwrap();
//!
//! let check = validation::check_killer_sudoku(puzzle.cages(), &solution);
//! assert!(check.is_valid());
//! assert!(check.is_complete());
//!
//! let empty = validation::check_killer_sudoku(puzzle.cages(), puzzle.grid());
//! assert!(empty.is_valid());
//! assert!(!empty.is_complete());
//! ```

pub mod cage;
pub mod error;
pub mod generator;
pub mod partition;
pub mod position;
pub mod random;
pub mod util;
pub mod validation;

#[cfg(test)]
mod random_tests;

use error::{GridError, GridParseError, GridParseResult, GridResult};
use position::CellPosition;
use util::DigitSet;

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The number of rows and columns of the grid.
pub const SIZE: usize = 9;

/// The number of rows and columns of one box of the grid, which is also the
/// number of boxes per row and column.
pub const BOX_SIZE: usize = 3;

/// The total number of cells in the grid.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// A 9x9 grid of digits, organized into 3x3 boxes of 3x3 cells each. Every
/// cell holds a digit from 1 to 9 or 0, which marks the cell as empty.
///
/// Grids serve both as the solved input of a Killer conversion and as the
/// all-zero starting grid of the resulting puzzle. They serialize to a list
/// of 9 rows of 9 digits each.
///
/// `Grid` implements `Display`, which prints a box-drawn board:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║ 4 │ 5 │ 6 ║ 2 │ 1 │ 7 ║ 3 │ 9 │ 8 ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║ 8 │ 1 │   ║   │   │   ║   │   │   ║
/// ...
/// ```
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(into = "Vec<Vec<u8>>")]
#[serde(try_from = "Vec<Vec<u8>>")]
pub struct Grid {
    cells: [u8; CELL_COUNT]
}

fn to_char(digit: u8) -> char {
    if digit == 0 {
        ' '
    }
    else {
        (b'0' + digit) as char
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BOX_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &Grid, row: usize) -> String {
    line('║', '║', '│', |column| to_char(grid.cells[index(column, row)]), ' ',
        '║', true)
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for row in 0..SIZE {
            if row == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if row % BOX_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, row).as_str())?;
        }

        f.write_str(bottom_row().as_str())
    }
}

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

fn check_digit(digit: u8) -> GridResult<u8> {
    if digit as usize > SIZE {
        Err(GridError::InvalidNumber)
    }
    else {
        Ok(digit)
    }
}

fn check_bounds(column: usize, row: usize) -> GridResult<usize> {
    if column >= SIZE || row >= SIZE {
        Err(GridError::OutOfBounds)
    }
    else {
        Ok(index(column, row))
    }
}

impl Grid {

    /// Creates a new grid in which every cell is empty (0).
    pub fn new() -> Grid {
        Grid {
            cells: [0; CELL_COUNT]
        }
    }

    /// Creates a grid from its rows, where `rows[row][column]` is the digit
    /// in the given cell.
    ///
    /// # Errors
    ///
    /// If any digit is greater than 9. In that case,
    /// `GridError::InvalidNumber` is returned.
    pub fn from_rows(rows: [[u8; SIZE]; SIZE]) -> GridResult<Grid> {
        let mut grid = Grid::new();

        for (row, digits) in rows.iter().enumerate() {
            for (column, &digit) in digits.iter().enumerate() {
                grid.cells[index(column, row)] = check_digit(digit)?;
            }
        }

        Ok(grid)
    }

    /// Creates a grid from its hierarchical form, where
    /// `boxes[box_x][box_y][cell_x][cell_y]` is the digit in the cell with
    /// the corresponding [CellPosition].
    ///
    /// # Errors
    ///
    /// If any digit is greater than 9. In that case,
    /// `GridError::InvalidNumber` is returned.
    pub fn from_boxes(boxes: [[[[u8; BOX_SIZE]; BOX_SIZE]; BOX_SIZE]; BOX_SIZE])
            -> GridResult<Grid> {
        let mut grid = Grid::new();

        for position in position::all_positions() {
            let digit = boxes[position.box_x() as usize]
                [position.box_y() as usize]
                [position.cell_x() as usize]
                [position.cell_y() as usize];
            grid.set(position, digit)?;
        }

        Ok(grid)
    }

    /// Converts this grid into its hierarchical form. This is the inverse of
    /// [Grid::from_boxes].
    pub fn to_boxes(&self) -> [[[[u8; BOX_SIZE]; BOX_SIZE]; BOX_SIZE]; BOX_SIZE] {
        let mut boxes = [[[[0; BOX_SIZE]; BOX_SIZE]; BOX_SIZE]; BOX_SIZE];

        for position in position::all_positions() {
            boxes[position.box_x() as usize]
                [position.box_y() as usize]
                [position.cell_x() as usize]
                [position.cell_y() as usize] = self.get(position);
        }

        boxes
    }

    /// Parses a code encoding a grid. The code is a comma-separated list of
    /// 81 entries, which are either empty, 0 (both denoting an empty cell),
    /// or a digit from 1 to 9. The entries are assigned left-to-right,
    /// top-to-bottom, where each row is completed before the next one is
    /// started. Whitespace in the entries is ignored to allow for more
    /// intuitive formatting.
    ///
    /// # Errors
    ///
    /// Any specialization of `GridParseError` (see that documentation).
    pub fn parse(code: &str) -> GridParseResult<Grid> {
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != CELL_COUNT {
            return Err(GridParseError::WrongNumberOfCells);
        }

        let mut grid = Grid::new();

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            grid.cells[i] = check_digit(entry.parse::<u8>()?)?;
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [Grid::parse]. That is, a grid that is converted to a string and
    /// parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use killer_cages::Grid;
    ///
    /// let mut grid = Grid::new();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(1, 2, 5).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = Grid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(|&digit| if digit == 0 {
                String::new()
            }
            else {
                digit.to_string()
            })
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Gets the digit in the cell at the given position, 0 if it is empty.
    pub fn get(&self, position: CellPosition) -> u8 {
        self.cells[position.key()]
    }

    /// Sets the digit in the cell at the given position. Setting 0 clears
    /// the cell.
    ///
    /// # Errors
    ///
    /// If `digit` is greater than 9. In that case, `GridError::InvalidNumber`
    /// is returned.
    pub fn set(&mut self, position: CellPosition, digit: u8)
            -> GridResult<()> {
        self.cells[position.key()] = check_digit(digit)?;
        Ok(())
    }

    /// Gets the content of the cell at the specified flat position, 0 if it
    /// is empty.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the range `[0, 9[`. In that
    /// case, `GridError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize) -> GridResult<u8> {
        Ok(self.cells[check_bounds(column, row)?])
    }

    /// Sets the content of the cell at the specified flat position to the
    /// given digit. If the cell was not empty, the old digit will be
    /// overwritten.
    ///
    /// # Errors
    ///
    /// * `GridError::OutOfBounds` If either `column` or `row` are not in the
    /// range `[0, 9[`.
    /// * `GridError::InvalidNumber` If `digit` is not in the range `[1, 9]`.
    pub fn set_cell(&mut self, column: usize, row: usize, digit: u8)
            -> GridResult<()> {
        let index = check_bounds(column, row)?;

        if digit == 0 {
            return Err(GridError::InvalidNumber);
        }

        self.cells[index] = check_digit(digit)?;
        Ok(())
    }

    /// Clears the content of the cell at the specified flat position. If the
    /// cell is already empty, it will be left that way.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the range `[0, 9[`. In that
    /// case, `GridError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> GridResult<()> {
        self.cells[check_bounds(column, row)?] = 0;
        Ok(())
    }

    /// Gets the digits of the given row, left to right. `row` must be in the
    /// range `[0, 9[`, otherwise this method panics.
    pub(crate) fn row(&self, row: usize) -> &[u8] {
        &self.cells[index(0, row)..index(0, row + 1)]
    }

    /// Gets a reference to the array which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[u8; CELL_COUNT] {
        &self.cells
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|&&digit| digit != 0).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// digit. In this case, [Grid::count_clues] returns 81.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&digit| digit != 0)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// digit. In this case, [Grid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&digit| digit == 0)
    }

    /// Indicates whether no digit is repeated in any row, column, or box.
    /// Empty cells are ignored, so a partially filled grid may satisfy the
    /// standard rules as well.
    pub fn satisfies_standard_rules(&self) -> bool {
        let mut rows = [DigitSet::new(); SIZE];
        let mut columns = [DigitSet::new(); SIZE];
        let mut boxes = [DigitSet::new(); SIZE];

        for position in position::all_positions() {
            let digit = self.get(position);

            if digit == 0 {
                continue;
            }

            let box_index =
                position.box_y() as usize * BOX_SIZE + position.box_x() as usize;
            let fresh = [
                rows[position.row()].insert(digit),
                columns[position.column()].insert(digit),
                boxes[box_index].insert(digit)
            ];

            if fresh.iter().any(|f| f != &Ok(true)) {
                return false;
            }
        }

        true
    }

    /// Indicates whether this grid is a complete Sudoku solution, that is,
    /// it is full and satisfies the standard rules.
    pub fn is_solved(&self) -> bool {
        self.is_full() && self.satisfies_standard_rules()
    }
}

impl Default for Grid {
    fn default() -> Grid {
        Grid::new()
    }
}

impl From<Grid> for Vec<Vec<u8>> {
    fn from(grid: Grid) -> Vec<Vec<u8>> {
        (0..SIZE).map(|row| grid.row(row).to_vec()).collect()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Grid {
    type Error = GridParseError;

    fn try_from(rows: Vec<Vec<u8>>) -> GridParseResult<Grid> {
        if rows.len() != SIZE || rows.iter().any(|r| r.len() != SIZE) {
            return Err(GridParseError::WrongNumberOfCells);
        }

        let mut grid = Grid::new();

        for (row, digits) in rows.iter().enumerate() {
            for (column, &digit) in digits.iter().enumerate() {
                grid.cells[index(column, row)] = check_digit(digit)?;
            }
        }

        Ok(grid)
    }
}

/// The canonical solved grid used throughout the tests, a shifted Latin
/// square with `value(row, column) = ((row * 3 + row / 3 + column) % 9) + 1`.
#[cfg(test)]
pub(crate) fn canonical_solution() -> Grid {
    let mut rows = [[0; SIZE]; SIZE];

    for (row, digits) in rows.iter_mut().enumerate() {
        for (column, digit) in digits.iter_mut().enumerate() {
            *digit = ((row * 3 + row / 3 + column) % SIZE + 1) as u8;
        }
    }

    Grid::from_rows(rows).unwrap()
}

/// A second, irregular solved grid used in the tests.
#[cfg(test)]
pub(crate) fn irregular_solution() -> Grid {
    Grid::parse("
        4,5,6,2,1,7,3,9,8,\
        8,1,2,9,6,3,5,4,7,\
        9,7,3,4,5,8,6,1,2,\
        1,2,5,6,7,4,9,8,3,\
        3,6,4,8,9,1,2,7,5,\
        7,9,8,5,3,2,4,6,1,\
        6,4,1,7,2,5,8,3,9,\
        5,3,9,1,8,6,7,2,4,\
        2,8,7,3,4,9,1,5,6").unwrap()
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn parse_ok() {
        let mut entries = vec![""; CELL_COUNT];
        entries[0] = "1";
        entries[1] = " ";
        entries[2] = " 3 ";
        entries[8] = "9";
        entries[80] = "0";
        let grid = Grid::parse(&entries.join(",")).unwrap();

        assert_eq!(Ok(1), grid.get_cell(0, 0));
        assert_eq!(Ok(0), grid.get_cell(1, 0));
        assert_eq!(Ok(3), grid.get_cell(2, 0));
        assert_eq!(Ok(9), grid.get_cell(8, 0));
        assert_eq!(Ok(0), grid.get_cell(8, 8));
        assert_eq!(3, grid.count_clues());
    }

    #[test]
    fn parse_zero_is_empty() {
        let code = vec!["0"; CELL_COUNT].join(",");
        let grid = Grid::parse(&code).unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        let too_few = vec!["1"; CELL_COUNT - 1].join(",");
        let too_many = vec!["1"; CELL_COUNT + 1].join(",");

        assert_eq!(Err(GridParseError::WrongNumberOfCells),
            Grid::parse(&too_few));
        assert_eq!(Err(GridParseError::WrongNumberOfCells),
            Grid::parse(&too_many));
    }

    #[test]
    fn parse_number_format_error() {
        let mut entries = vec!["1"; CELL_COUNT];
        entries[40] = "#";
        assert_eq!(Err(GridParseError::NumberFormatError),
            Grid::parse(&entries.join(",")));
    }

    #[test]
    fn parse_invalid_number() {
        let mut entries = vec!["1"; CELL_COUNT];
        entries[40] = "10";
        assert_eq!(Err(GridParseError::InvalidNumber),
            Grid::parse(&entries.join(",")));
    }

    #[test]
    fn to_parseable_string() {
        let mut grid = Grid::new();
        let empty_code = vec![""; CELL_COUNT].join(",");

        assert_eq!(empty_code, grid.to_parseable_string());

        grid.set_cell(0, 0, 1).unwrap();
        grid.set_cell(8, 8, 9).unwrap();
        let code = grid.to_parseable_string();

        assert!(code.starts_with("1,,"));
        assert!(code.ends_with(",,9"));
        assert_eq!(grid, Grid::parse(&code).unwrap());
    }

    #[test]
    fn cell_access_checks_bounds_and_digits() {
        let mut grid = Grid::new();

        assert_eq!(Err(GridError::OutOfBounds), grid.get_cell(9, 0));
        assert_eq!(Err(GridError::OutOfBounds), grid.set_cell(0, 9, 1));
        assert_eq!(Err(GridError::OutOfBounds), grid.clear_cell(9, 9));
        assert_eq!(Err(GridError::InvalidNumber), grid.set_cell(0, 0, 0));
        assert_eq!(Err(GridError::InvalidNumber), grid.set_cell(0, 0, 10));

        grid.set_cell(3, 5, 7).unwrap();
        assert_eq!(Ok(7), grid.get_cell(3, 5));
        grid.clear_cell(3, 5).unwrap();
        assert_eq!(Ok(0), grid.get_cell(3, 5));
    }

    #[test]
    fn hierarchical_access_matches_flat_access() {
        let grid = irregular_solution();

        for position in position::all_positions() {
            assert_eq!(Ok(grid.get(position)),
                grid.get_cell(position.column(), position.row()));
        }
    }

    #[test]
    fn boxes_round_trip() {
        let grid = irregular_solution();
        let boxes = grid.to_boxes();

        // box_x = 2, box_y = 0, cell_x = 1, cell_y = 2 is row 2, column 7
        assert_eq!(1, boxes[2][0][1][2]);
        assert_eq!(grid, Grid::from_boxes(boxes).unwrap());
    }

    #[test]
    fn from_rows_rejects_invalid_digits() {
        let mut rows = [[1; SIZE]; SIZE];
        rows[4][4] = 10;
        assert_eq!(Err(GridError::InvalidNumber), Grid::from_rows(rows));
    }

    #[test]
    fn count_clues_and_empty_and_full() {
        let empty = Grid::new();
        let mut partial = Grid::new();
        partial.set_cell(0, 0, 5).unwrap();
        partial.set_cell(4, 4, 6).unwrap();
        let full = canonical_solution();

        assert_eq!(0, empty.count_clues());
        assert_eq!(2, partial.count_clues());
        assert_eq!(81, full.count_clues());

        assert!(empty.is_empty());
        assert!(!partial.is_empty());
        assert!(!full.is_empty());

        assert!(!empty.is_full());
        assert!(!partial.is_full());
        assert!(full.is_full());
    }

    #[test]
    fn test_solutions_are_solved() {
        assert!(canonical_solution().is_solved());
        assert!(irregular_solution().is_solved());
        assert_eq!(&[1, 2, 3, 4, 5, 6, 7, 8, 9], canonical_solution().row(0));
        assert_eq!(&[4, 5, 6, 7, 8, 9, 1, 2, 3], canonical_solution().row(1));
    }

    #[test]
    fn standard_rule_violations_detected() {
        let mut row_clash = Grid::new();
        row_clash.set_cell(0, 0, 3).unwrap();
        row_clash.set_cell(8, 0, 3).unwrap();

        let mut column_clash = Grid::new();
        column_clash.set_cell(4, 0, 7).unwrap();
        column_clash.set_cell(4, 8, 7).unwrap();

        let mut box_clash = Grid::new();
        box_clash.set_cell(3, 3, 1).unwrap();
        box_clash.set_cell(5, 5, 1).unwrap();

        assert!(!row_clash.satisfies_standard_rules());
        assert!(!column_clash.satisfies_standard_rules());
        assert!(!box_clash.satisfies_standard_rules());
        assert!(Grid::new().satisfies_standard_rules());

        let mut swapped = canonical_solution();
        swapped.set_cell(0, 0, 2).unwrap();
        swapped.set_cell(1, 0, 1).unwrap();
        assert!(swapped.is_full());
        assert!(!swapped.is_solved());
    }

    #[test]
    fn display_draws_board() {
        let printed = canonical_solution().to_string();
        let lines = printed.lines().collect::<Vec<_>>();

        assert_eq!(19, lines.len());
        assert_eq!("║ 1 │ 2 │ 3 ║ 4 │ 5 │ 6 ║ 7 │ 8 │ 9 ║", lines[1]);
        assert!(lines[0].starts_with('╔'));
        assert!(lines[6].starts_with('╠'));
        assert!(lines[18].starts_with('╚'));
    }

    #[test]
    fn serde_as_rows() {
        let grid = canonical_solution();
        let json = serde_json::to_string(&grid).unwrap();

        assert!(json.starts_with("[[1,2,3,4,5,6,7,8,9],[4,5,6"));
        assert_eq!(grid, serde_json::from_str::<Grid>(&json).unwrap());
        assert!(serde_json::from_str::<Grid>("[[1,2,3]]").is_err());
    }
}
