//! This module contains the partitioning of the grid into cages.
//!
//! Cages are grown one at a time from seed cells by [grow_cage], which adds
//! random unclaimed neighbors until a randomly chosen target size is reached.
//! [partition] runs this growth over all cells in a random seed order and
//! turns every cell that ends up unclaimed into a single-cell cage, so the
//! returned cages always cover all 81 cells exactly once. The sums of the
//! cages are left at 0, they are filled in by the
//! [KillerGenerator](crate::generator::KillerGenerator).

use crate::CELL_COUNT;
use crate::cage::{self, Cage, CageId, CageOrigin};
use crate::position::{self, CellPosition};
use crate::random::RandomSource;

use std::collections::HashSet;

fn available_neighbors(position: CellPosition, used: &HashSet<usize>,
        visited: &HashSet<usize>) -> Vec<CellPosition> {
    position.neighbors()
        .into_iter()
        .filter(|neighbor| {
            let key = neighbor.key();
            !used.contains(&key) && !visited.contains(&key)
        })
        .collect()
}

fn deduplicate(frontier: &mut Vec<CellPosition>) {
    let mut seen = HashSet::with_capacity(frontier.len());
    frontier.retain(|candidate| seen.insert(candidate.key()));
}

/// Grows the cells of one cage outward from `seed`.
///
/// First, a target size is drawn uniformly from `[min_size, max_size]`.
/// Then, as long as the cage is smaller than the target, a uniformly random
/// cell of the frontier (all unclaimed, unvisited neighbors of the cage) is
/// moved into the cage and its own unclaimed neighbors are added to the
/// frontier. If the frontier runs dry before the target is reached, the
/// smaller cage is accepted.
///
/// Growth yields connected cells by construction. The result is nevertheless
/// checked, and `None` is returned if the check fails, in which case the
/// caller should treat the seed as unresolved.
///
/// # Arguments
///
/// * `seed`: The cell to start growing from. It must not be contained in
/// `used`.
/// * `used`: The keys (see [CellPosition::key]) of all cells already claimed
/// by other cages.
/// * `min_size`: The lower bound for the target size. Must be at least 1.
/// * `max_size`: The upper bound for the target size. Must be at least
/// `min_size`.
/// * `rng`: The random source deciding the target size and the order of
/// growth.
pub fn grow_cage<R>(seed: CellPosition, used: &HashSet<usize>,
    min_size: usize, max_size: usize, rng: &mut R)
    -> Option<Vec<CellPosition>>
where
    R: RandomSource
{
    let target_size = rng.between(min_size, max_size);
    let mut cells = vec![seed];
    let mut visited = HashSet::new();
    visited.insert(seed.key());
    let mut frontier = available_neighbors(seed, used, &visited);

    while cells.len() < target_size && !frontier.is_empty() {
        let index = rng.below(frontier.len());
        let next = frontier.remove(index);
        cells.push(next);
        visited.insert(next.key());
        frontier.extend(available_neighbors(next, used, &visited));
        deduplicate(&mut frontier);
    }

    if !cage::is_connected(&cells) {
        tracing::warn!(seed = %seed, size = cells.len(),
            "grown cage is not connected, discarding it");
        return None;
    }

    Some(cells)
}

/// Partitions the 81 cells of the grid into connected cages whose sums are
/// set to 0.
///
/// The seeds are all cells of the grid, visited in a uniformly random order.
/// Every seed that is not yet claimed grows a cage using [grow_cage], whose
/// cells are then claimed. A seed whose cage is discarded stays unclaimed,
/// it is not retried. Finally, every cell that is still unclaimed becomes a
/// cage of its own with [CageOrigin::Fallback].
///
/// Grown cages whose growth stopped below `min_size` are marked with
/// [CageOrigin::Exhausted], all other grown cages with [CageOrigin::Grown].
/// Cage ids are assigned sequentially in creation order.
///
/// # Arguments
///
/// * `min_size`: The minimum size of grown cages. Must be at least 1.
/// * `max_size`: The maximum size of grown cages. Must be at least
/// `min_size`.
/// * `rng`: The random source deciding the seed order and the growth.
pub fn partition<R>(min_size: usize, max_size: usize, rng: &mut R)
    -> Vec<Cage>
where
    R: RandomSource
{
    let mut seeds = position::all_positions().collect::<Vec<_>>();
    rng.shuffle(&mut seeds);

    let mut used = HashSet::with_capacity(CELL_COUNT);
    let mut cages = Vec::new();

    for seed in seeds {
        if used.contains(&seed.key()) {
            continue;
        }

        if let Some(cells) = grow_cage(seed, &used, min_size, max_size, rng) {
            let origin = if cells.len() < min_size {
                CageOrigin::Exhausted
            }
            else {
                CageOrigin::Grown
            };

            used.extend(cells.iter().map(CellPosition::key));
            let id = CageId::sequential(cages.len());
            cages.push(Cage::new_unchecked(id, cells, 0, origin));
        }
    }

    let grown = cages.len();

    for position in position::all_positions() {
        if used.insert(position.key()) {
            let id = CageId::sequential(cages.len());
            cages.push(Cage::new_unchecked(id, vec![position], 0,
                CageOrigin::Fallback));
        }
    }

    let exhausted = cages.iter()
        .filter(|c| c.origin() == CageOrigin::Exhausted)
        .count();
    tracing::debug!(cages = cages.len(), fallback = cages.len() - grown,
        exhausted, "partitioned grid into cages");

    cages
}
