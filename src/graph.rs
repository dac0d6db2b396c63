//! Undirected adjacency graph over open passages.
//!
//! One node per cell, one edge per open passage between orthogonally
//! adjacent cells. The graph is derived from maze wall state by a single
//! scan and rebuilt whenever the maze regenerates; it never feeds back
//! into the walls.

use crate::core::{CellCoord, Direction};
use crate::error::Result;
use crate::grid::Maze;
use crate::pathfinding::{self, AStarConfig, ShortestPath};

/// Adjacency graph of open passages.
///
/// Neighbor lists are keyed by the flat cell index (`y * width + x`) and
/// have set semantics: inserting an existing edge is a no-op, so building
/// against unchanged wall state any number of times yields the same graph.
/// Degree is at most 4, which keeps a linear containment check cheaper
/// than hashing.
#[derive(Clone, Debug)]
pub struct PassageGraph {
    width: usize,
    height: usize,
    adjacency: Vec<Vec<CellCoord>>,
}

impl PassageGraph {
    /// Create an edgeless graph with one node per cell.
    ///
    /// Mostly useful for building custom graphs in tests and tools;
    /// production graphs come from [`PassageGraph::from_maze`].
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            adjacency: vec![Vec::new(); width * height],
        }
    }

    /// Build the graph from a maze's wall state.
    ///
    /// Scans every cell once; each absent wall with an in-bounds neighbor
    /// becomes one undirected edge.
    pub fn from_maze(maze: &Maze) -> Self {
        let mut graph = Self::new(maze.width(), maze.height());
        graph.scan_walls(maze);
        graph
    }

    /// Rebuild this graph from a maze's wall state, discarding all edges.
    ///
    /// Idempotent: rebuilding against unchanged walls yields an identical
    /// graph. The maze must have the same dimensions this graph was
    /// created with.
    pub fn rebuild(&mut self, maze: &Maze) {
        debug_assert_eq!((self.width, self.height), maze.dimensions());
        for neighbors in &mut self.adjacency {
            neighbors.clear();
        }
        self.scan_walls(maze);
    }

    fn scan_walls(&mut self, maze: &Maze) {
        for index in 0..maze.cell_count() {
            let coord = maze.index_to_coord(index);
            let cell = match maze.get(coord) {
                Some(cell) => cell,
                None => continue,
            };
            for direction in Direction::ALL {
                if !cell.is_open(direction) {
                    continue;
                }
                let neighbor = coord.step(direction);
                if maze.in_bounds(neighbor) {
                    self.add_edge(coord, neighbor);
                }
            }
        }
    }

    /// Add an undirected edge between two nodes.
    ///
    /// Returns `true` if the edge was new. Out-of-range endpoints are
    /// rejected (returns `false`); re-adding an existing edge is a no-op.
    pub fn add_edge(&mut self, a: CellCoord, b: CellCoord) -> bool {
        let (i, j) = match (self.coord_to_index(a), self.coord_to_index(b)) {
            (Some(i), Some(j)) => (i, j),
            _ => return false,
        };
        if self.adjacency[i].contains(&b) {
            return false;
        }
        self.adjacency[i].push(b);
        if !self.adjacency[j].contains(&a) {
            self.adjacency[j].push(a);
        }
        true
    }

    /// Neighbors reachable from a cell by one open passage.
    ///
    /// Empty for out-of-range coordinates.
    #[inline]
    pub fn neighbors(&self, coord: CellCoord) -> &[CellCoord] {
        match self.coord_to_index(coord) {
            Some(index) => &self.adjacency[index],
            None => &[],
        }
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

    /// Number of nodes (one per cell)
    #[inline]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Check if a coordinate names a node of this graph
    #[inline]
    pub fn contains(&self, coord: CellCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    #[inline]
    fn coord_to_index(&self, coord: CellCoord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Shortest path between two cells with the default search budget.
    ///
    /// Distance counts grid steps (unit cost per passage). Returns
    /// [`MazeError::NoPath`](crate::MazeError::NoPath) when the two cells
    /// are not connected.
    pub fn shortest_path(&self, start: CellCoord, goal: CellCoord) -> Result<ShortestPath> {
        pathfinding::astar::AStarSolver::new(self, AStarConfig::default()).find_path(start, goal)
    }
}
