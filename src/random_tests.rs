use crate::{CELL_COUNT, Grid, canonical_solution, irregular_solution};
use crate::cage::{self, Cage, CageOrigin};
use crate::generator::{
    CageGenerationOptions,
    KillerConversionResult,
    KillerGenerator
};
use crate::position;
use crate::validation;

use rand::SeedableRng;

use rand_chacha::ChaCha8Rng;

use std::collections::HashSet;

const SEEDS: u64 = 200;
const THREAD_RNG_RUNS: usize = 50;

fn options(min: usize, max: usize) -> CageGenerationOptions {
    CageGenerationOptions::new()
        .with_min_cage_size(min)
        .with_max_cage_size(max)
}

fn assert_well_formed(result: &KillerConversionResult, solution: &Grid,
        options: &CageGenerationOptions) {
    assert!(result.is_success(), "conversion failed: {:?}", result.error());

    let cages = result.cages();
    let mut covered = HashSet::new();

    for cage in cages {
        assert!(!cage.is_empty());
        assert!(cage::is_connected(cage.cells()));
        assert_eq!(cage::sum_of(cage.cells(), solution), cage.sum());

        for cell in cage.cells() {
            assert!(covered.insert(cell.key()), "cell {} covered twice", cell);
        }

        match cage.origin() {
            CageOrigin::Grown => {
                assert!(cage.len() >= options.min_cage_size());
                assert!(cage.len() <= options.max_cage_size());
            },
            CageOrigin::Exhausted =>
                assert!(cage.len() < options.min_cage_size()),
            CageOrigin::Fallback => assert_eq!(1, cage.len())
        }
    }

    assert_eq!(CELL_COUNT, covered.len());

    let puzzle = result.killer_puzzle();
    assert!(puzzle.grid().is_empty());
    assert!(puzzle.cage_map().is_complete());

    for position in position::all_positions() {
        let id = puzzle.cage_map().cage_of(position).unwrap();
        let owner = cages.iter().find(|c| c.id() == id).unwrap();
        assert!(owner.contains(&position));
    }

    let check = validation::check_killer_sudoku(cages, solution);
    assert!(check.is_valid());
    assert!(check.is_complete());
}

fn run_seeded(solution: &Grid, min: usize, max: usize) {
    let options = options(min, max);

    for seed in 0..SEEDS {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        let mut generator =
            KillerGenerator::with_options(rng, options.clone());
        let result = generator.convert(solution);
        assert_well_formed(&result, solution, &options);
    }
}

#[test]
fn default_sizes_canonical() {
    run_seeded(&canonical_solution(), 2, 3);
}

#[test]
fn default_sizes_irregular() {
    run_seeded(&irregular_solution(), 2, 3);
}

#[test]
fn singletons() {
    run_seeded(&canonical_solution(), 1, 1);
}

#[test]
fn large_cages() {
    run_seeded(&irregular_solution(), 4, 9);
}

#[test]
fn unbounded_cages() {
    run_seeded(&canonical_solution(), 1, CELL_COUNT);
}

#[test]
fn thread_rng() {
    let solution = irregular_solution();
    let options = CageGenerationOptions::default();
    let mut generator = KillerGenerator::new_default();

    for _ in 0..THREAD_RNG_RUNS {
        let result = generator.convert(&solution);
        assert_well_formed(&result, &solution, &options);
    }
}

#[test]
fn same_seed_same_puzzle() {
    let solution = canonical_solution();

    for seed in 0..SEEDS {
        let first = KillerGenerator::new(ChaCha8Rng::seed_from_u64(seed))
            .convert(&solution);
        let second = KillerGenerator::new(ChaCha8Rng::seed_from_u64(seed))
            .convert(&solution);

        assert_eq!(first, second);
    }
}

#[test]
fn different_seeds_differ() {
    let solution = canonical_solution();
    let shapes = (0..20)
        .map(|seed| {
            KillerGenerator::new(ChaCha8Rng::seed_from_u64(seed))
                .try_convert(&solution)
                .unwrap()
                .cages()
                .iter()
                .map(|c| c.cells().to_vec())
                .collect::<Vec<_>>()
        })
        .collect::<HashSet<_>>();

    assert!(shapes.len() > 1);
}

#[test]
fn default_cage_count_in_expected_range() {
    // The number of cages for sizes 2 to 3 concentrates around 37. Averaging
    // over many runs keeps this test robust against individual outliers.
    let solution = canonical_solution();
    let mut total = 0;

    for seed in SEEDS..2 * SEEDS {
        let puzzle = KillerGenerator::new(ChaCha8Rng::seed_from_u64(seed))
            .try_convert(&solution)
            .unwrap();
        total += puzzle.cages().len();
    }

    let average = total as f64 / SEEDS as f64;
    assert!(average >= 27.0 && average <= 41.0,
        "unexpected average number of cages: {}", average);
}

#[test]
fn sums_bounded_by_cell_count() {
    let solution = irregular_solution();

    for seed in 0..SEEDS {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        let puzzle = KillerGenerator::with_options(rng, options(1, 9))
            .try_convert(&solution)
            .unwrap();

        for cage in puzzle.cages() {
            assert!(cage.sum() >= cage.len());
            assert!(cage.sum() <= 9 * cage.len());
        }

        let total: usize = puzzle.cages().iter().map(Cage::sum).sum();
        assert_eq!(405, total);
    }
}
