//! Loop-injection pass.
//!
//! After carving, the maze is a spanning tree: one route between any two
//! cells. This pass scans every remaining interior wall and opens it with
//! a fixed independent probability, adding cycles and alternate routes.
//! It only ever adds edges to an already-connected graph, so reachability
//! is preserved and no shortest path gets longer.

use crate::core::{CellCoord, Direction};
use crate::grid::Maze;

use log::debug;
use rand::rngs::StdRng;
use rand::Rng;

/// Open extra passages through remaining interior walls.
///
/// Scans cells in row-major order and directions in N, E, S, W order; each
/// still-present wall with an in-bounds neighbor is opened with the given
/// probability. Boundary walls have no neighbor and are never candidates.
/// An interior wall is seen from both of its cells, giving it two
/// independent chances; opening is idempotent, so the double visit is
/// harmless. Returns the number of passages opened.
pub(crate) fn open_random_passages(
    maze: &mut Maze,
    probability: f64,
    rng: &mut StdRng,
) -> usize {
    if probability <= 0.0 {
        return 0;
    }

    let mut opened = 0;
    for y in 0..maze.height() as i32 {
        for x in 0..maze.width() as i32 {
            let coord = CellCoord::new(x, y);
            for direction in Direction::ALL {
                let neighbor = coord.step(direction);
                if !maze.in_bounds(neighbor) {
                    continue;
                }
                let cell = match maze.get(coord) {
                    Some(cell) => cell,
                    None => continue,
                };
                if cell.is_open(direction) {
                    continue;
                }
                if rng.gen_bool(probability) {
                    maze.open_passage(coord, direction);
                    opened += 1;
                }
            }
        }
    }

    debug!("[Braid] opened {} extra passages (p = {})", opened, probability);
    opened
}
