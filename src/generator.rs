//! This module contains the conversion of solved grids into Killer puzzles.
//!
//! The entry point is the [KillerGenerator], which partitions the grid into
//! cages (see the [partition](crate::partition) module), computes the cage
//! sums from the solved digits, and assembles a [KillerPuzzle] with an empty
//! starting grid and a cell-to-cage lookup table. How the cages are grown is
//! configured by [CageGenerationOptions].

use crate::{CELL_COUNT, Grid};
use crate::cage::{Cage, CageId, CageIndex, CageOrigin};
use crate::error::{KillerError, KillerResult};
use crate::partition;
use crate::position::CellPosition;
use crate::random::RandomSource;
use crate::validation::{self, KillerCheck};

use rand::rngs::ThreadRng;

use serde::{Deserialize, Serialize};

use std::collections::HashSet;
use std::convert::TryFrom;

/// The options controlling the cage generation. Missing keys of a
/// deserialized options object take their default values, so a partial
/// object such as `{"maxCageSize": 4}` is merged with the defaults.
///
/// The defaults are a minimum cage size of 2, a maximum cage size of 3, no
/// target cage count, and no explicit single cells.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CageGenerationOptions {
    min_cage_size: usize,
    max_cage_size: usize,
    target_cage_count: Option<usize>,
    allow_single_cells: bool
}

const DEFAULT_MIN_CAGE_SIZE: usize = 2;
const DEFAULT_MAX_CAGE_SIZE: usize = 3;

impl Default for CageGenerationOptions {
    fn default() -> CageGenerationOptions {
        CageGenerationOptions {
            min_cage_size: DEFAULT_MIN_CAGE_SIZE,
            max_cage_size: DEFAULT_MAX_CAGE_SIZE,
            target_cage_count: None,
            allow_single_cells: false
        }
    }
}

impl CageGenerationOptions {

    /// Creates the default options. See [CageGenerationOptions] for the
    /// values.
    pub fn new() -> CageGenerationOptions {
        CageGenerationOptions::default()
    }

    /// Sets the lower bound for the size of grown cages. Cages created as a
    /// fallback or whose growth got stuck may be smaller.
    pub fn with_min_cage_size(mut self, min_cage_size: usize)
            -> CageGenerationOptions {
        self.min_cage_size = min_cage_size;
        self
    }

    /// Sets the upper bound for the size of grown cages.
    pub fn with_max_cage_size(mut self, max_cage_size: usize)
            -> CageGenerationOptions {
        self.max_cage_size = max_cage_size;
        self
    }

    /// Sets the desired number of cages. This is recorded, but currently not
    /// taken into account by the generation.
    pub fn with_target_cage_count(mut self, target_cage_count: Option<usize>)
            -> CageGenerationOptions {
        self.target_cage_count = target_cage_count;
        self
    }

    /// Sets whether single-cell cages are explicitly permitted. This is
    /// recorded, but currently not taken into account: the coverage fallback
    /// produces single-cell cages regardless of this flag.
    pub fn with_allow_single_cells(mut self, allow_single_cells: bool)
            -> CageGenerationOptions {
        self.allow_single_cells = allow_single_cells;
        self
    }

    /// Gets the lower bound for the size of grown cages.
    pub fn min_cage_size(&self) -> usize {
        self.min_cage_size
    }

    /// Gets the upper bound for the size of grown cages.
    pub fn max_cage_size(&self) -> usize {
        self.max_cage_size
    }

    /// Gets the desired number of cages, if any.
    pub fn target_cage_count(&self) -> Option<usize> {
        self.target_cage_count
    }

    /// Indicates whether single-cell cages are explicitly permitted.
    pub fn allow_single_cells(&self) -> bool {
        self.allow_single_cells
    }

    /// Checks that the sizes are consistent, that is,
    /// `1 <= min_cage_size <= max_cage_size <= 81`.
    ///
    /// # Errors
    ///
    /// `KillerError::InvalidOptions` with a description of the violated
    /// condition.
    pub fn validate(&self) -> KillerResult<()> {
        if self.min_cage_size == 0 {
            return Err(KillerError::InvalidOptions(
                "minimum cage size must be at least 1".to_owned()));
        }

        if self.min_cage_size > self.max_cage_size {
            return Err(KillerError::InvalidOptions(format!(
                "minimum cage size {} exceeds maximum cage size {}",
                self.min_cage_size, self.max_cage_size)));
        }

        if self.max_cage_size > CELL_COUNT {
            return Err(KillerError::InvalidOptions(format!(
                "maximum cage size {} exceeds the number of cells",
                self.max_cage_size)));
        }

        Ok(())
    }
}

/// A Killer Sudoku puzzle: an empty starting grid together with the cages
/// and a lookup table from cells to cages.
///
/// On deserialization, the lookup table is rebuilt from the cages instead of
/// being read, and cages sharing a cell are rejected.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "RawKillerPuzzle")]
pub struct KillerPuzzle {
    grid: Grid,
    cages: Vec<Cage>,
    cage_map: CageIndex
}

#[derive(Deserialize)]
struct RawKillerPuzzle {
    grid: Grid,
    cages: Vec<Cage>
}

impl TryFrom<RawKillerPuzzle> for KillerPuzzle {
    type Error = KillerError;

    fn try_from(raw: RawKillerPuzzle) -> KillerResult<KillerPuzzle> {
        KillerPuzzle::try_new(raw.grid, raw.cages)
    }
}

impl KillerPuzzle {

    /// Creates a new puzzle from its starting grid and cages. The lookup
    /// table is built from the cages.
    pub fn new(grid: Grid, cages: Vec<Cage>) -> KillerPuzzle {
        let cage_map = CageIndex::build(&cages);

        KillerPuzzle {
            grid,
            cages,
            cage_map
        }
    }

    /// Creates a new puzzle like [KillerPuzzle::new], but checks that no cell
    /// is contained in more than one cage.
    ///
    /// # Errors
    ///
    /// `KillerError::OverlappingCages` naming the first shared cell.
    pub fn try_new(grid: Grid, cages: Vec<Cage>) -> KillerResult<KillerPuzzle> {
        let mut seen = HashSet::new();

        for cell in cages.iter().flat_map(|cage| cage.cells().iter()) {
            if !seen.insert(cell.key()) {
                return Err(KillerError::OverlappingCages(
                    cell.cell_id().to_string()));
            }
        }

        Ok(KillerPuzzle::new(grid, cages))
    }

    /// Gets the starting grid of this puzzle.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Gets the cages of this puzzle.
    pub fn cages(&self) -> &[Cage] {
        &self.cages
    }

    /// Gets the lookup table from cell ids to cage ids.
    pub fn cage_map(&self) -> &CageIndex {
        &self.cage_map
    }

    /// Gets the cage with the given id, if there is one.
    pub fn cage(&self, id: &CageId) -> Option<&Cage> {
        self.cages.iter().find(|cage| cage.id() == id)
    }

    /// Gets the cage containing the cell at the given position, if there is
    /// one.
    pub fn cage_at(&self, position: CellPosition) -> Option<&Cage> {
        self.cage_map.cage_of(position)
            .and_then(|id| self.cage(id))
    }

    /// Checks the given player grid against the cages and the standard rules.
    /// See [validation::check_killer_sudoku].
    pub fn check(&self, grid: &Grid) -> KillerCheck {
        validation::check_killer_sudoku(&self.cages, grid)
    }
}

/// The outcome of a conversion by a [KillerGenerator]. It always carries all
/// fields: on failure, the grids are empty, there are no cages, and
/// [KillerConversionResult::error] describes what went wrong.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KillerConversionResult {
    success: bool,
    killer_puzzle: KillerPuzzle,
    killer_initial: Grid,
    killer_final: Grid,
    cages: Vec<Cage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>
}

impl KillerConversionResult {

    fn succeeded(puzzle: KillerPuzzle, solution: Grid)
            -> KillerConversionResult {
        KillerConversionResult {
            success: true,
            killer_initial: puzzle.grid().clone(),
            killer_final: solution,
            cages: puzzle.cages().to_vec(),
            killer_puzzle: puzzle,
            error: None
        }
    }

    fn failed(error: &KillerError) -> KillerConversionResult {
        KillerConversionResult {
            success: false,
            killer_puzzle: KillerPuzzle::default(),
            killer_initial: Grid::new(),
            killer_final: Grid::new(),
            cages: Vec::new(),
            error: Some(error.to_string())
        }
    }

    /// Indicates whether the conversion succeeded.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Gets the generated puzzle.
    pub fn killer_puzzle(&self) -> &KillerPuzzle {
        &self.killer_puzzle
    }

    /// Gets the grid the player starts with, in which every cell is empty.
    pub fn killer_initial(&self) -> &Grid {
        &self.killer_initial
    }

    /// Gets the solved grid the puzzle was generated from, which is retained
    /// to check the player's answers.
    pub fn killer_final(&self) -> &Grid {
        &self.killer_final
    }

    /// Gets the cages of the generated puzzle.
    pub fn cages(&self) -> &[Cage] {
        &self.cages
    }

    /// Gets the description of the failure, if the conversion failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Counts the single-cell cages that were created to complete the
    /// coverage of the grid. Together with
    /// [KillerConversionResult::exhausted_cages], this allows callers to
    /// reject partitions they consider to be of low quality.
    pub fn fallback_singletons(&self) -> usize {
        self.count_origin(CageOrigin::Fallback)
    }

    /// Counts the cages whose growth stopped below the minimum cage size.
    pub fn exhausted_cages(&self) -> usize {
        self.count_origin(CageOrigin::Exhausted)
    }

    fn count_origin(&self, origin: CageOrigin) -> usize {
        self.cages.iter()
            .filter(|cage| cage.origin() == origin)
            .count()
    }

    /// Converts this result into a standard `Result`, which contains the
    /// puzzle on success and the error description on failure.
    pub fn into_result(self) -> Result<KillerPuzzle, String> {
        if self.success {
            Ok(self.killer_puzzle)
        }
        else {
            Err(self.error.unwrap_or_default())
        }
    }
}

/// A generator converts solved grids into Killer puzzles. It uses a random
/// source to decide the shape of the cages and [CageGenerationOptions] to
/// bound their sizes. For most cases, sensible defaults are provided by
/// [KillerGenerator::new_default].
///
/// With a seeded random number generator, the output is fully reproducible:
///
/// ```
/// use killer_cages::Grid;
/// use killer_cages::generator::KillerGenerator;
///
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rows = [[0; 9]; 9];
///
/// for (row, digits) in rows.iter_mut().enumerate() {
///     for (column, digit) in digits.iter_mut().enumerate() {
///         *digit = ((row * 3 + row / 3 + column) % 9 + 1) as u8;
///     }
/// }
///
/// let solution = Grid::from_rows(rows).unwrap();
/// let mut first = KillerGenerator::new(ChaCha8Rng::seed_from_u64(42));
/// let mut second = KillerGenerator::new(ChaCha8Rng::seed_from_u64(42));
///
/// assert_eq!(first.convert(&solution), second.convert(&solution));
/// ```
pub struct KillerGenerator<R: RandomSource> {
    rng: R,
    options: CageGenerationOptions
}

impl KillerGenerator<ThreadRng> {

    /// Creates a new generator with default options that uses a [ThreadRng]
    /// to decide the cages.
    pub fn new_default() -> KillerGenerator<ThreadRng> {
        KillerGenerator::new(rand::thread_rng())
    }
}

fn verify_solution(solution: &Grid) -> KillerResult<()> {
    if let Some(position) = crate::position::all_positions()
            .find(|&position| solution.get(position) == 0) {
        return Err(KillerError::IncompleteGrid {
            column: position.column(),
            row: position.row()
        });
    }

    if !solution.satisfies_standard_rules() {
        return Err(KillerError::InvalidGrid);
    }

    Ok(())
}

fn verify_coverage(puzzle: &KillerPuzzle) -> KillerResult<()> {
    let covered: usize = puzzle.cages().iter().map(Cage::len).sum();

    if covered != CELL_COUNT || !puzzle.cage_map().is_complete() {
        return Err(KillerError::InvariantViolation(format!(
            "cages cover {} cells, {} distinct, instead of {}", covered,
            puzzle.cage_map().len(), CELL_COUNT)));
    }

    Ok(())
}

impl<R: RandomSource> KillerGenerator<R> {

    /// Creates a new generator with default options that uses the given
    /// random source to decide the cages.
    pub fn new(rng: R) -> KillerGenerator<R> {
        KillerGenerator::with_options(rng, CageGenerationOptions::default())
    }

    /// Creates a new generator with the given random source and options.
    pub fn with_options(rng: R, options: CageGenerationOptions)
            -> KillerGenerator<R> {
        KillerGenerator {
            rng,
            options
        }
    }

    /// Gets the options used by this generator.
    pub fn options(&self) -> &CageGenerationOptions {
        &self.options
    }

    /// Replaces the options used by this generator.
    pub fn set_options(&mut self, options: CageGenerationOptions) {
        self.options = options;
    }

    /// Converts the given solved grid into a Killer puzzle.
    ///
    /// The cages partition all 81 cells, are connected, and annotate the sum
    /// of the digits of `solution` they cover. The puzzle's grid is empty.
    ///
    /// # Errors
    ///
    /// * `KillerError::InvalidOptions` if the options of this generator are
    /// inconsistent.
    /// * `KillerError::IncompleteGrid` if `solution` has an empty cell.
    /// * `KillerError::InvalidGrid` if `solution` repeats a digit in a row,
    /// column, or box.
    /// * `KillerError::InvariantViolation` if the cages do not cover the grid
    /// exactly once, which indicates a bug.
    pub fn try_convert(&mut self, solution: &Grid)
            -> KillerResult<KillerPuzzle> {
        self.options.validate()?;
        verify_solution(solution)?;

        let cages = partition::partition(self.options.min_cage_size,
                self.options.max_cage_size, &mut self.rng)
            .into_iter()
            .map(|cage| {
                let sum = cage.digit_sum(solution);
                cage.with_sum(sum)
            })
            .collect();
        let puzzle = KillerPuzzle::new(Grid::new(), cages);
        verify_coverage(&puzzle)?;
        Ok(puzzle)
    }

    /// Converts the given solved grid into a Killer puzzle. This behaves like
    /// [KillerGenerator::try_convert], except that errors are not returned
    /// but reported inside the result. This method never panics.
    pub fn convert(&mut self, solution: &Grid) -> KillerConversionResult {
        match self.try_convert(solution) {
            Ok(puzzle) =>
                KillerConversionResult::succeeded(puzzle, solution.clone()),
            Err(e) => {
                tracing::warn!(error = %e, "killer conversion failed");
                KillerConversionResult::failed(&e)
            }
        }
    }

    /// Parses the given grid code (see [Grid::parse]) and converts the grid
    /// into a Killer puzzle. Malformed codes are reported inside the result
    /// like any other failure.
    pub fn convert_code(&mut self, code: &str) -> KillerConversionResult {
        match Grid::parse(code) {
            Ok(grid) => self.convert(&grid),
            Err(e) => {
                let e = KillerError::from(e);
                tracing::warn!(error = %e, "killer conversion failed");
                KillerConversionResult::failed(&e)
            }
        }
    }
}
