//! Randomized depth-first maze carving
//!
//! The carver performs a depth-first traversal of the interior-cell graph,
//! discovering the visited set lazily and knocking down the wall between
//! each newly reached pair of cells. Backtracking is realized with an
//! explicit stack, so the supported grid size is bounded by memory rather
//! than native call-stack depth. The resulting open-wall graph is a spanning
//! tree of the interior: connected, acyclic, and covering every interior
//! cell reachable from the start.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::io::configuration::START_CELL;
use crate::io::error::Result;
use crate::spatial::Grid;
use crate::spatial::cell::Direction;

/// Build a grid and carve a maze into it from the default start cell
///
/// The same `size` and `seed` always produce the same wall configuration.
///
/// # Errors
///
/// Returns an error if `size` fails grid validation.
pub fn generate(size: usize, seed: u64) -> Result<Grid> {
    let mut grid = Grid::new(size)?;
    let mut rng = StdRng::seed_from_u64(seed);
    carve(&mut grid, START_CELL, &mut rng);
    Ok(grid)
}

/// Carve a maze into `grid` starting from `start`
///
/// Marks `start` visited, then repeatedly extends a passage toward a random
/// unvisited neighbor of the current cell, retreating one cell whenever no
/// candidate remains. A border start is marked visited but never carved into
/// (border cells have no outgoing edges by construction); a start outside
/// the grid is a no-op.
pub fn carve<R: Rng>(grid: &mut Grid, start: [usize; 2], rng: &mut R) {
    let Some(cell) = grid.cell_mut(start) else {
        return;
    };
    cell.visit();
    if cell.is_border() {
        return;
    }

    // The top of the stack is the cell currently being carved from; popping
    // it is the backtrack step.
    let mut stack = vec![start];
    while let Some(&current) = stack.last() {
        if let Some(next) = random_unvisited_neighbor(grid, current, rng) {
            break_walls(grid, current, next);
            if let Some(neighbor) = grid.cell_mut(next) {
                neighbor.visit();
            }
            stack.push(next);
        } else {
            stack.pop();
        }
    }
}

/// Pick a random unvisited, non-border neighbor of `coord`
///
/// The four candidates north, east, south, and west of `coord` are shuffled
/// uniformly with the injected `rng`, then filtered: border cells, visited
/// cells, and coordinates outside the grid are discarded. Returns the first
/// survivor, or `None` when the carver should backtrack.
pub fn random_unvisited_neighbor<R: Rng>(
    grid: &Grid,
    coord: [usize; 2],
    rng: &mut R,
) -> Option<[usize; 2]> {
    let [row, col] = coord;

    // Row 0 wraps to usize::MAX and is rejected by the bounds check below.
    let mut candidates = [
        [row.wrapping_sub(1), col],
        [row, col + 1],
        [row + 1, col],
        [row, col.wrapping_sub(1)],
    ];
    candidates.shuffle(rng);

    candidates.into_iter().find(|&candidate| {
        grid.cell(candidate)
            .is_some_and(|cell| !cell.is_border() && !cell.is_visited())
    })
}

/// Remove the shared wall between the adjacent cells at `a` and `b`
///
/// Opens `a`'s wall facing `b` and `b`'s wall facing `a` in one operation;
/// no other wall on either cell changes.
///
/// # Panics
///
/// Panics if the coordinates are not grid-adjacent or fall outside the
/// grid. Either case is a defect in the caller's traversal, not a runtime
/// condition, so it fails loudly instead of returning an error.
// Invariant violations here are unreachable from a correct carver
#[allow(clippy::panic)]
pub fn break_walls(grid: &mut Grid, a: [usize; 2], b: [usize; 2]) {
    let Some(direction) = Direction::between(a, b) else {
        panic!("cannot break walls between non-adjacent cells {a:?} and {b:?}");
    };

    match grid.cell_mut(a) {
        Some(cell) => cell.open_wall(direction),
        None => panic!("wall break outside the grid at {a:?}"),
    }
    match grid.cell_mut(b) {
        Some(cell) => cell.open_wall(direction.opposite()),
        None => panic!("wall break outside the grid at {b:?}"),
    }
}
