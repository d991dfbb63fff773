//! This module contains the [Cage] type as well as the operations defined on
//! sets of cages: the connectivity check, the sum computation against a
//! solved grid, and the [CageIndex] mapping cells to their cages.

use crate::{CELL_COUNT, Grid};
use crate::error::{KillerError, KillerResult};
use crate::position::{CellId, CellPosition};
use crate::util;

use serde::{Deserialize, Serialize};

use std::collections::{BTreeMap, HashSet, VecDeque};
use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The identifier of a cage. Ids are deterministic: the `n`-th cage created
/// during one conversion (counting from zero) is called `cage_n`, so a
/// conversion with a seeded random source always yields the same ids.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd,
    Serialize)]
#[serde(transparent)]
pub struct CageId(String);

impl CageId {

    /// Creates the id of the cage with the given sequence number.
    pub fn sequential(number: usize) -> CageId {
        CageId(format!("cage_{}", number))
    }

    /// Gets the textual form of this id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CageId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Describes how a cage came to be during the partitioning of a grid.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CageOrigin {

    /// The cage was grown from a seed and reached a size within the
    /// configured bounds.
    Grown,

    /// The cage was grown from a seed, but its growth stopped below the
    /// configured minimum size because all surrounding cells were already
    /// claimed by other cages.
    Exhausted,

    /// The cage is a single cell that no grown cage claimed. Such cages are
    /// created after all seeds have been processed to guarantee full
    /// coverage.
    Fallback
}

/// A single cage of a Killer Sudoku, which contains some orthogonally
/// connected cells and annotates the sum of the digits in these cells.
///
/// Cages are immutable once created. The generation attaches the sum
/// computed from the solved grid.
///
/// Deserialization runs the same checks as [Cage::new], so a cage read from
/// untrusted input is never empty, duplicated, or disconnected.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "RawCage")]
pub struct Cage {
    id: CageId,
    cells: Vec<CellPosition>,
    sum: usize,
    origin: CageOrigin
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCage {
    id: CageId,
    cells: Vec<CellPosition>,
    sum: usize,
    origin: CageOrigin
}

impl TryFrom<RawCage> for Cage {
    type Error = KillerError;

    fn try_from(raw: RawCage) -> KillerResult<Cage> {
        Cage::new(raw.id, raw.cells, raw.sum, raw.origin)
    }
}

impl Cage {

    /// Creates a new cage with the given cells and sum.
    ///
    /// # Arguments
    ///
    /// * `id`: The identifier of the cage.
    /// * `cells`: The positions contained in this cage. May not be empty,
    /// contain duplicates, or be disconnected.
    /// * `sum`: The annotated sum of the cage.
    /// * `origin`: How the cage was created.
    ///
    /// # Errors
    ///
    /// * `KillerError::EmptyCage` if `cells` is empty.
    /// * `KillerError::DuplicateCells` if it contains the same cell more than
    /// once.
    /// * `KillerError::DisconnectedCage` if the cells do not form a single
    /// orthogonally connected region.
    pub fn new(id: CageId, cells: Vec<CellPosition>, sum: usize,
            origin: CageOrigin) -> KillerResult<Cage> {
        if cells.is_empty() {
            return Err(KillerError::EmptyCage);
        }

        if util::contains_duplicate(cells.iter()) {
            return Err(KillerError::DuplicateCells);
        }

        if !is_connected(&cells) {
            return Err(KillerError::DisconnectedCage);
        }

        Ok(Cage::new_unchecked(id, cells, sum, origin))
    }

    pub(crate) fn new_unchecked(id: CageId, cells: Vec<CellPosition>,
            sum: usize, origin: CageOrigin) -> Cage {
        Cage {
            id,
            cells,
            sum,
            origin
        }
    }

    pub(crate) fn with_sum(self, sum: usize) -> Cage {
        Cage {
            sum,
            ..self
        }
    }

    /// Gets the identifier of this cage.
    pub fn id(&self) -> &CageId {
        &self.id
    }

    /// Gets the cells of this cage in the order they were added.
    pub fn cells(&self) -> &[CellPosition] {
        &self.cells
    }

    /// Gets the annotated sum of this cage.
    pub fn sum(&self) -> usize {
        self.sum
    }

    /// Gets the way this cage was created.
    pub fn origin(&self) -> CageOrigin {
        self.origin
    }

    /// Gets the number of cells in this cage.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`, since cages contain at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Indicates whether this cage is a leftover single cell created to
    /// complete the coverage of the grid.
    pub fn is_fallback(&self) -> bool {
        self.origin == CageOrigin::Fallback
    }

    /// Indicates whether the given cell is part of this cage.
    pub fn contains(&self, position: &CellPosition) -> bool {
        self.cells.contains(position)
    }

    /// Computes the sum of the digits of `grid` in the cells of this cage.
    /// For a solved grid, the result lies in the range `[len, 9 * len]`.
    /// Empty cells contribute 0.
    pub fn digit_sum(&self, grid: &Grid) -> usize {
        sum_of(&self.cells, grid)
    }
}

/// Computes the sum of the digits of `grid` in the given cells.
pub fn sum_of(cells: &[CellPosition], grid: &Grid) -> usize {
    cells.iter()
        .map(|&position| grid.get(position) as usize)
        .sum()
}

/// Indicates whether the given cells form a single connected region under
/// orthogonal adjacency, ignoring box boundaries. This is determined by a
/// breadth-first search from the first cell that may only step onto cells of
/// the given set. An empty set and a single cell are trivially connected.
pub fn is_connected(cells: &[CellPosition]) -> bool {
    let members: HashSet<usize> = cells.iter().map(CellPosition::key).collect();
    let start = match cells.first() {
        Some(&start) => start,
        None => return true
    };
    let mut visited = HashSet::with_capacity(members.len());
    let mut queue = VecDeque::new();
    visited.insert(start.key());
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for neighbor in current.neighbors() {
            let key = neighbor.key();

            if members.contains(&key) && visited.insert(key) {
                queue.push_back(neighbor);
            }
        }
    }

    visited.len() == members.len()
}

/// A lookup table from cell ids to the ids of the cages that own them. It
/// allows answering "which cage contains this cell" without scanning the
/// cages, which the rendering layer needs for highlighting and the gameplay
/// layer for cage sum checks.
///
/// The table is ordered by cell id so it serializes reproducibly.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CageIndex {
    cages: BTreeMap<CellId, CageId>
}

impl CageIndex {

    /// Creates a new, empty index.
    pub fn new() -> CageIndex {
        CageIndex::default()
    }

    /// Builds the index for the given cages by recording, for every cell of
    /// every cage, the id of that cage. The cages are expected to be
    /// disjoint. If they are not, the last cage containing a cell wins.
    pub fn build(cages: &[Cage]) -> CageIndex {
        let cages = cages.iter()
            .flat_map(|cage| cage.cells().iter()
                .map(move |cell| (cell.cell_id(), cage.id().clone())))
            .collect();

        CageIndex {
            cages
        }
    }

    /// Gets the id of the cage containing the cell with the given id, or
    /// `None` if no cage contains it.
    pub fn cage_id(&self, cell: &CellId) -> Option<&CageId> {
        self.cages.get(cell)
    }

    /// Gets the id of the cage containing the cell at the given position, or
    /// `None` if no cage contains it.
    pub fn cage_of(&self, position: CellPosition) -> Option<&CageId> {
        self.cage_id(&position.cell_id())
    }

    /// Gets the number of cells recorded in this index.
    pub fn len(&self) -> usize {
        self.cages.len()
    }

    /// Indicates whether no cell is recorded in this index.
    pub fn is_empty(&self) -> bool {
        self.cages.is_empty()
    }

    /// Indicates whether every cell of the grid is recorded in this index.
    pub fn is_complete(&self) -> bool {
        self.len() == CELL_COUNT
    }

    /// Returns an iterator over all entries of this index, ordered by cell
    /// id.
    pub fn iter(&self) -> impl Iterator<Item = (&CellId, &CageId)> {
        self.cages.iter()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::canonical_solution;
    use crate::position;

    fn at(row: usize, column: usize) -> CellPosition {
        CellPosition::from_flat(row, column).unwrap()
    }

    #[test]
    fn valid_cage() {
        let cells = vec![at(0, 0), at(0, 1), at(1, 1)];
        let cage = Cage::new(CageId::sequential(3), cells.clone(), 12,
            CageOrigin::Grown).unwrap();

        assert_eq!("cage_3", cage.id().as_str());
        assert_eq!(cells.as_slice(), cage.cells());
        assert_eq!(12, cage.sum());
        assert_eq!(3, cage.len());
        assert!(!cage.is_fallback());
        assert!(cage.contains(&at(1, 1)));
        assert!(!cage.contains(&at(1, 0)));
    }

    #[test]
    fn invalid_cages() {
        let id = CageId::sequential(0);

        assert_eq!(Err(KillerError::EmptyCage),
            Cage::new(id.clone(), Vec::new(), 0, CageOrigin::Grown));
        assert_eq!(Err(KillerError::DuplicateCells),
            Cage::new(id.clone(), vec![at(0, 0), at(0, 1), at(0, 0)], 0,
                CageOrigin::Grown));
        assert_eq!(Err(KillerError::DisconnectedCage),
            Cage::new(id, vec![at(0, 0), at(1, 1)], 0, CageOrigin::Grown));
    }

    #[test]
    fn trivial_sets_connected() {
        assert!(is_connected(&[]));
        assert!(is_connected(&[at(4, 4)]));
    }

    #[test]
    fn connected_across_boxes() {
        assert!(is_connected(&[at(2, 2), at(2, 3), at(3, 3)]));
        assert!(is_connected(&[at(0, 0), at(1, 0), at(2, 0), at(3, 0)]));
    }

    #[test]
    fn diagonal_cells_not_connected() {
        assert!(!is_connected(&[at(0, 0), at(1, 1)]));
        assert!(!is_connected(&[at(4, 4), at(4, 5), at(6, 5)]));
    }

    #[test]
    fn connectivity_independent_of_order() {
        // the path only closes via the last cell
        assert!(is_connected(&[at(0, 0), at(0, 2), at(0, 1)]));
        assert!(is_connected(&[at(5, 5), at(7, 5), at(6, 6), at(6, 5)]));
    }

    #[test]
    fn sum_matches_grid() {
        let grid = canonical_solution();
        let cage = Cage::new(CageId::sequential(0),
            vec![at(0, 0), at(0, 1), at(1, 1)], 0, CageOrigin::Grown).unwrap();

        // 1 + 2 + 5
        assert_eq!(8, cage.digit_sum(&grid));
        assert_eq!(8, sum_of(cage.cells(), &grid));
        assert_eq!(0, cage.digit_sum(&Grid::new()));
        assert_eq!(8, cage.with_sum(8).sum());
    }

    fn row_cages() -> Vec<Cage> {
        (0..9)
            .map(|row| Cage::new(CageId::sequential(row),
                (0..9).map(|column| at(row, column)).collect(), 45,
                CageOrigin::Grown).unwrap())
            .collect()
    }

    #[test]
    fn index_maps_every_cell() {
        let cages = row_cages();
        let index = CageIndex::build(&cages);

        assert_eq!(81, index.len());
        assert!(index.is_complete());

        for position in position::all_positions() {
            let expected = CageId::sequential(position.row());
            assert_eq!(Some(&expected), index.cage_of(position));
            assert_eq!(Some(&expected), index.cage_id(&position.cell_id()));
        }
    }

    #[test]
    fn partial_index() {
        let cages = vec![
            Cage::new(CageId::sequential(0), vec![at(0, 0), at(0, 1)], 3,
                CageOrigin::Grown).unwrap()
        ];
        let index = CageIndex::build(&cages);

        assert_eq!(2, index.len());
        assert!(!index.is_complete());
        assert_eq!(None, index.cage_of(at(1, 0)));
        assert!(CageIndex::new().is_empty());
    }

    #[test]
    fn index_serializes_as_map() {
        let cages = vec![
            Cage::new(CageId::sequential(7), vec![at(0, 0), at(0, 1)], 3,
                CageOrigin::Grown).unwrap()
        ];
        let json = serde_json::to_string(&CageIndex::build(&cages)).unwrap();

        assert_eq!(r#"{"0000":"cage_7","0010":"cage_7"}"#, json);
    }

    #[test]
    fn cage_serializes_camel_case() {
        let cage = Cage::new(CageId::sequential(1), vec![at(8, 8)], 9,
            CageOrigin::Fallback).unwrap();
        let json = serde_json::to_string(&cage).unwrap();

        assert_eq!(r#"{"id":"cage_1","cells":[{"boxX":2,"boxY":2,"cellX":2,"cellY":2}],"sum":9,"origin":"fallback"}"#,
            json);
        assert_eq!(cage, serde_json::from_str::<Cage>(&json).unwrap());
    }

    fn cage_json(cells: &str) -> String {
        format!(r#"{{"id":"cage_0","cells":[{}],"sum":5,"origin":"grown"}}"#,
            cells)
    }

    #[test]
    fn deserialization_rejects_invalid_cages() {
        let corner = r#"{"boxX":0,"boxY":0,"cellX":0,"cellY":0}"#;
        let right = r#"{"boxX":0,"boxY":0,"cellX":1,"cellY":0}"#;
        let far = r#"{"boxX":2,"boxY":2,"cellX":2,"cellY":2}"#;

        let empty = cage_json("");
        let duplicate = cage_json(&format!("{},{}", corner, corner));
        let disconnected = cage_json(&format!("{},{}", corner, far));
        let valid = cage_json(&format!("{},{}", corner, right));

        assert!(serde_json::from_str::<Cage>(&empty).is_err());
        assert!(serde_json::from_str::<Cage>(&duplicate).is_err());
        assert!(serde_json::from_str::<Cage>(&disconnected).is_err());

        let cage = serde_json::from_str::<Cage>(&valid).unwrap();
        assert_eq!(vec![at(0, 0), at(0, 1)], cage.cells());
        assert!(!cage.is_empty());
    }
}
