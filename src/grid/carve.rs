//! Spanning-tree carving pass.
//!
//! Randomized depth-first traversal over the grid: walk to a random
//! unvisited neighbor, opening the shared wall on the way, and backtrack
//! when a cell has none left. The result is a spanning tree of open
//! passages (every cell connected to every other by exactly one simple
//! route) which the braiding pass may then shortcut.
//!
//! The traversal keeps its own stack of coordinates instead of recursing:
//! the backtracker's depth can reach the full cell count (a spiral does),
//! so call-stack recursion would not survive large grids.

use crate::core::{CellCoord, Direction};
use crate::grid::Maze;

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Carve a random spanning tree into a fully walled maze.
///
/// Starts from a uniformly random cell. Every cell ends up visited, and
/// exactly `width * height - 1` passages are opened.
pub(crate) fn carve_passages(maze: &mut Maze, rng: &mut StdRng) {
    let start = CellCoord::new(
        rng.gen_range(0..maze.width() as i32),
        rng.gen_range(0..maze.height() as i32),
    );
    maze.mark_visited(start);

    let mut stack = vec![start];
    while let Some(&current) = stack.last() {
        let mut directions = Direction::ALL;
        directions.shuffle(rng);

        let next = directions.iter().find_map(|&direction| {
            let neighbor = current.step(direction);
            (maze.in_bounds(neighbor) && !maze.is_visited(neighbor))
                .then_some((direction, neighbor))
        });

        match next {
            Some((direction, neighbor)) => {
                maze.open_passage(current, direction);
                maze.mark_visited(neighbor);
                stack.push(neighbor);
            }
            None => {
                // Dead end: backtrack to the previous cell on the walk
                stack.pop();
            }
        }
    }

    debug!(
        "[Carve] spanning tree over {} cells, started at {}",
        maze.cell_count(),
        start
    );
}
