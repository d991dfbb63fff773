//! This module contains the checks of a player's grid against the cages of a
//! Killer puzzle, as well as helpers deriving which digits may still go into
//! a cage.
//!
//! All functions accept partially filled grids, in which empty cells are
//! represented by 0. The digit combinations computed by
//! [possible_combinations] and [possible_values_for_cell] follow the classic
//! Killer rule that a cage does not repeat digits.

use crate::Grid;
use crate::cage::{Cage, CageId};
use crate::position::CellPosition;
use crate::util::{self, DigitSet};

use serde::{Deserialize, Serialize};

use std::collections::BTreeMap;

/// The state of a single cage in a player's grid.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CageValidation {
    is_valid: bool,
    is_complete: bool,
    repeats_digit: bool,
    current_sum: usize,
    target_sum: usize,
    filled_cells: usize,
    total_cells: usize
}

impl CageValidation {

    /// Indicates whether the filled digits are consistent with the cage sum.
    /// While the cage is incomplete, this is the case if their sum does not
    /// exceed the target. Once it is complete, the sum must equal the target.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Indicates whether every cell of the cage is filled.
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Indicates whether some digit occurs in more than one cell of the
    /// cage. This does not affect [CageValidation::is_valid], since the
    /// solution itself may repeat a digit in a cage.
    pub fn repeats_digit(&self) -> bool {
        self.repeats_digit
    }

    /// Gets the sum of the filled digits.
    pub fn current_sum(&self) -> usize {
        self.current_sum
    }

    /// Gets the sum annotated on the cage.
    pub fn target_sum(&self) -> usize {
        self.target_sum
    }

    /// Gets the number of filled cells in the cage.
    pub fn filled_cells(&self) -> usize {
        self.filled_cells
    }

    /// Gets the number of cells in the cage.
    pub fn total_cells(&self) -> usize {
        self.total_cells
    }
}

/// The state of a whole player's grid with respect to the cages and the
/// standard rules.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KillerCheck {
    is_valid: bool,
    is_complete: bool,
    cage_validation: BTreeMap<CageId, CageValidation>,
    invalid_cages: Vec<CageId>
}

impl KillerCheck {

    /// Indicates whether every cage is valid and the grid does not repeat a
    /// digit in any row, column, or box.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Indicates whether the grid is valid and every cage is complete, that
    /// is, the puzzle is solved.
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Gets the validation of every cage, by cage id.
    pub fn cage_validation(&self) -> &BTreeMap<CageId, CageValidation> {
        &self.cage_validation
    }

    /// Gets the ids of all invalid cages, in the order of the cages.
    pub fn invalid_cages(&self) -> &[CageId] {
        &self.invalid_cages
    }
}

/// Validates the given cage against the digits in the given grid.
pub fn validate_cage(cage: &Cage, grid: &Grid) -> CageValidation {
    let digits = cage.cells().iter()
        .map(|&position| grid.get(position))
        .filter(|&digit| digit != 0)
        .collect::<Vec<_>>();
    let current_sum = digits.iter().map(|&digit| digit as usize).sum();
    let filled_cells = digits.len();
    let is_complete = filled_cells == cage.len();
    let is_valid = if is_complete {
        current_sum == cage.sum()
    }
    else {
        current_sum <= cage.sum()
    };

    CageValidation {
        is_valid,
        is_complete,
        repeats_digit: util::contains_duplicate(digits.iter()),
        current_sum,
        target_sum: cage.sum(),
        filled_cells,
        total_cells: cage.len()
    }
}

/// Validates all given cages against the digits in the given grid. See
/// [validate_cage].
pub fn validate_all_cages(cages: &[Cage], grid: &Grid)
        -> BTreeMap<CageId, CageValidation> {
    cages.iter()
        .map(|cage| (cage.id().clone(), validate_cage(cage, grid)))
        .collect()
}

/// Checks the given grid against the given cages and the standard rules.
pub fn check_killer_sudoku(cages: &[Cage], grid: &Grid) -> KillerCheck {
    let cage_validation = validate_all_cages(cages, grid);
    let invalid_cages = cages.iter()
        .map(Cage::id)
        .filter(|id| !cage_validation[*id].is_valid())
        .cloned()
        .collect::<Vec<_>>();
    let is_valid = invalid_cages.is_empty() && grid.satisfies_standard_rules();
    let is_complete = is_valid &&
        cage_validation.values().all(CageValidation::is_complete);

    KillerCheck {
        is_valid,
        is_complete,
        cage_validation,
        invalid_cages
    }
}

fn min_distinct_sum(count: usize) -> usize {
    count * (count + 1) / 2
}

fn max_distinct_sum(count: usize) -> usize {
    45 - min_distinct_sum(9 - count)
}

/// Indicates whether the sum of the given cage can be written as the sum of
/// as many distinct digits as the cage has cells. Cages with more than 9
/// cells are never valid in this sense.
pub fn is_cage_mathematically_valid(cage: &Cage) -> bool {
    let size = cage.len();

    size <= 9 && cage.sum() >= min_distinct_sum(size) &&
        cage.sum() <= max_distinct_sum(size)
}

fn collect_combinations(first: u8, remaining_size: usize,
        remaining_sum: usize, used: &DigitSet, current: &mut Vec<u8>,
        combinations: &mut Vec<Vec<u8>>) {
    if remaining_size == 0 {
        if remaining_sum == 0 {
            combinations.push(current.clone());
        }

        return;
    }

    for digit in first..=9 {
        if digit as usize > remaining_sum {
            break;
        }

        if used.contains(digit) {
            continue;
        }

        current.push(digit);
        collect_combinations(digit + 1, remaining_size - 1,
            remaining_sum - digit as usize, used, current, combinations);
        current.pop();
    }
}

/// Lists all sets of `cage_size` distinct digits which are not contained in
/// `used` and sum up to `target_sum`. Every set is sorted in ascending
/// order, and the sets are listed in lexicographic order.
///
/// ```
/// use killer_cages::util::DigitSet;
/// use killer_cages::validation;
///
/// let combinations = validation::possible_combinations(2, 10, &DigitSet::new());
/// assert_eq!(vec![vec![1, 9], vec![2, 8], vec![3, 7], vec![4, 6]],
///     combinations);
/// ```
pub fn possible_combinations(cage_size: usize, target_sum: usize,
        used: &DigitSet) -> Vec<Vec<u8>> {
    let mut combinations = Vec::new();
    collect_combinations(1, cage_size, target_sum, used,
        &mut Vec::with_capacity(cage_size), &mut combinations);
    combinations
}

/// Determines the digits that may be entered into the cell at the given
/// position so that the cage can still be completed. A digit is possible if
/// no other cell of the cage contains it and the rest of the sum can be
/// reached with distinct, unused digits in the other empty cells. The digit
/// currently in the cell itself is ignored. If the cage does not contain the
/// position, no digit is possible.
pub fn possible_values_for_cell(position: CellPosition, cage: &Cage,
        grid: &Grid) -> Vec<u8> {
    if !cage.contains(&position) {
        return Vec::new();
    }

    let mut used = DigitSet::new();
    let mut filled_sum = 0;
    let mut filled_cells = 0;

    for &other in cage.cells().iter().filter(|&&other| other != position) {
        let digit = grid.get(other);

        if digit != 0 {
            used.insert_unchecked(digit);
            filled_sum += digit as usize;
            filled_cells += 1;
        }
    }

    if filled_sum > cage.sum() {
        return Vec::new();
    }

    let remaining_sum = cage.sum() - filled_sum;
    let remaining_cells = cage.len() - filled_cells - 1;

    used.complement().iter()
        .filter(|&digit| digit as usize <= remaining_sum)
        .filter(|&digit| {
            let mut used = used;
            used.insert_unchecked(digit);
            !possible_combinations(remaining_cells,
                remaining_sum - digit as usize, &used).is_empty()
        })
        .collect()
}
