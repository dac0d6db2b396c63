//! Maze storage and generation entry points.

use crate::config::MazeConfig;
use crate::core::{Cell, CellCoord, Direction};
use crate::error::{MazeError, Result};
use crate::graph::PassageGraph;
use crate::pathfinding::ShortestPath;

use super::{braid, carve};

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A generated grid maze.
///
/// Cells are stored in a flat arena indexed by `y * width + x`. The
/// entrance is always the top-left cell `(0, 0)` and the exit the
/// bottom-right cell `(width-1, height-1)`; after generation every cell is
/// reachable from the entrance.
///
/// All wall mutation is private to the generation passes; everything
/// reachable from outside the crate is read-only. Regeneration rebuilds
/// cells, walls, and the passage graph from scratch, and its `&mut self`
/// receiver statically rules out regenerating while a search is borrowing
/// the graph.
#[derive(Clone, Debug)]
pub struct Maze {
    width: usize,
    height: usize,
    extra_opening_probability: f64,
    cells: Vec<Cell>,
    graph: PassageGraph,
}

impl Maze {
    /// Generate a maze from the given configuration.
    ///
    /// Validates the configuration, carves a random spanning tree over the
    /// grid, opens extra passages per `extra_opening_probability`, and
    /// builds the passage graph from the resulting wall state.
    pub fn generate(config: &MazeConfig) -> Result<Self> {
        config.validate()?;
        let mut maze = Self {
            width: config.width,
            height: config.height,
            extra_opening_probability: config.extra_opening_probability,
            cells: Self::walled_cells(config.width, config.height),
            graph: PassageGraph::new(config.width, config.height),
        };
        maze.rebuild(config.seed);
        Ok(maze)
    }

    /// Discard the current layout and generate a fresh one.
    ///
    /// Keeps the dimensions and braid probability from the generating
    /// configuration. Cell snapshots returned before the call describe the
    /// old layout and must be re-fetched.
    pub fn regenerate(&mut self, seed: Option<u64>) {
        self.rebuild(seed);
    }

    fn rebuild(&mut self, seed: Option<u64>) {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        self.cells = Self::walled_cells(self.width, self.height);
        carve::carve_passages(self, &mut rng);
        let opened =
            braid::open_random_passages(self, self.extra_opening_probability, &mut rng);
        self.clear_visited();
        self.graph = PassageGraph::from_maze(self);

        debug!(
            "[Maze] generated {}x{}: {} passages ({} braided)",
            self.width,
            self.height,
            self.graph.edge_count(),
            opened
        );
    }

    fn walled_cells(width: usize, height: usize) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                cells.push(Cell::new(CellCoord::new(x, y)));
            }
        }
        cells
    }

    /// Grid dimensions as `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// The entrance cell, always the top-left corner
    #[inline]
    pub fn entrance(&self) -> CellCoord {
        CellCoord::new(0, 0)
    }

    /// The exit cell, always the bottom-right corner
    #[inline]
    pub fn exit(&self) -> CellCoord {
        CellCoord::new(self.width as i32 - 1, self.height as i32 - 1)
    }

    /// Check if a coordinate lies within the grid
    #[inline]
    pub fn in_bounds(&self, coord: CellCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Convert a coordinate to its flat array index
    #[inline]
    pub fn coord_to_index(&self, coord: CellCoord) -> Option<usize> {
        if self.in_bounds(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Convert a flat array index to its coordinate
    #[inline]
    pub fn index_to_coord(&self, index: usize) -> CellCoord {
        CellCoord::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Get the cell at a coordinate, `None` when out of bounds
    #[inline]
    pub fn get(&self, coord: CellCoord) -> Option<Cell> {
        self.coord_to_index(coord).map(|i| self.cells[i])
    }

    /// Get the cell at a coordinate, failing explicitly when out of bounds
    pub fn cell_at(&self, coord: CellCoord) -> Result<Cell> {
        self.get(coord).ok_or(MazeError::OutOfBounds {
            coord,
            width: self.width,
            height: self.height,
        })
    }

    /// The passage graph built from the current wall state
    #[inline]
    pub fn graph(&self) -> &PassageGraph {
        &self.graph
    }

    /// Shortest path from entrance to exit with the default search budget
    pub fn solve(&self) -> Result<ShortestPath> {
        self.graph.shortest_path(self.entrance(), self.exit())
    }

    /// Open the passage between a cell and its neighbor in `direction`.
    ///
    /// Removes the wall on both sides in one step, which is what keeps the
    /// wall-symmetry invariant: this is the only wall-mutation path in the
    /// crate. Callers guarantee both cells are in bounds.
    pub(crate) fn open_passage(&mut self, coord: CellCoord, direction: Direction) {
        let neighbor = coord.step(direction);
        debug_assert!(self.in_bounds(coord) && self.in_bounds(neighbor));

        if let Some(i) = self.coord_to_index(coord) {
            self.cells[i].open_wall(direction);
        }
        if let Some(j) = self.coord_to_index(neighbor) {
            self.cells[j].open_wall(direction.opposite());
        }
    }

    pub(crate) fn mark_visited(&mut self, coord: CellCoord) {
        if let Some(i) = self.coord_to_index(coord) {
            self.cells[i].visited = true;
        }
    }

    /// Out-of-range coordinates count as visited so carving never steps out
    pub(crate) fn is_visited(&self, coord: CellCoord) -> bool {
        self.coord_to_index(coord)
            .map_or(true, |i| self.cells[i].visited)
    }

    fn clear_visited(&mut self) {
        for cell in &mut self.cells {
            cell.visited = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(width: usize, height: usize) -> Maze {
        let config = MazeConfig::with_dimensions(width, height).with_seed(42);
        Maze::generate(&config).unwrap()
    }

    #[test]
    fn test_dimensions_and_corners() {
        let maze = seeded(7, 4);
        assert_eq!(maze.dimensions(), (7, 4));
        assert_eq!(maze.cell_count(), 28);
        assert_eq!(maze.entrance(), CellCoord::new(0, 0));
        assert_eq!(maze.exit(), CellCoord::new(6, 3));
        assert!(maze.in_bounds(maze.entrance()));
        assert!(maze.in_bounds(maze.exit()));
    }

    #[test]
    fn test_index_round_trip() {
        let maze = seeded(5, 3);
        for index in 0..maze.cell_count() {
            let coord = maze.index_to_coord(index);
            assert_eq!(maze.coord_to_index(coord), Some(index));
            assert_eq!(maze.get(coord).unwrap().coord(), coord);
        }
    }

    #[test]
    fn test_cell_at_out_of_bounds() {
        let maze = seeded(3, 3);
        for coord in [
            CellCoord::new(-1, 0),
            CellCoord::new(0, -1),
            CellCoord::new(3, 0),
            CellCoord::new(0, 3),
        ] {
            assert!(maze.get(coord).is_none());
            assert_eq!(
                maze.cell_at(coord),
                Err(MazeError::OutOfBounds {
                    coord,
                    width: 3,
                    height: 3
                })
            );
        }
    }

    #[test]
    fn test_open_passage_removes_both_sides() {
        let config = MazeConfig::with_dimensions(2, 1).with_seed(1);
        let mut maze = Maze::generate(&config).unwrap();

        // Regenerating resets to fully walled before carving; carve must
        // have opened the single interior wall on both sides.
        maze.regenerate(Some(9));
        let left = maze.get(CellCoord::new(0, 0)).unwrap();
        let right = maze.get(CellCoord::new(1, 0)).unwrap();
        assert!(left.is_open(Direction::East));
        assert!(right.is_open(Direction::West));
    }

    #[test]
    fn test_visited_flags_cleared_after_generation() {
        let maze = seeded(6, 6);
        for index in 0..maze.cell_count() {
            assert!(!maze.cells[index].visited);
        }
    }

    #[test]
    fn test_generate_rejects_invalid_config() {
        let config = MazeConfig::with_dimensions(0, 0);
        assert!(matches!(
            Maze::generate(&config),
            Err(MazeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_single_cell_maze() {
        let maze = seeded(1, 1);
        assert_eq!(maze.entrance(), maze.exit());
        assert_eq!(maze.graph().edge_count(), 0);
        let cell = maze.get(CellCoord::new(0, 0)).unwrap();
        assert_eq!(cell.walls().open_count(), 0);
    }
}
