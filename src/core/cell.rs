//! Cell and wall types for the maze grid.
//!
//! Every cell starts fully walled; the generation passes are the only code
//! that removes walls, and every removal goes through the maze's
//! `open_passage` so the two sides of a shared wall can never disagree.

use crate::core::CellCoord;
use serde::{Deserialize, Serialize};

/// The four wall flags of a cell.
///
/// `true` means the wall is present. The default is all walls present.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Walls {
    /// Wall toward the cell above (y - 1)
    pub north: bool,
    /// Wall toward the cell to the right (x + 1)
    pub east: bool,
    /// Wall toward the cell below (y + 1)
    pub south: bool,
    /// Wall toward the cell to the left (x - 1)
    pub west: bool,
}

impl Default for Walls {
    fn default() -> Self {
        Self {
            north: true,
            east: true,
            south: true,
            west: true,
        }
    }
}

impl Walls {
    /// Is the wall in the given direction present?
    #[inline]
    pub fn has(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    /// Number of open (absent) walls
    #[inline]
    pub fn open_count(&self) -> usize {
        Direction::ALL.iter().filter(|&&d| !self.has(d)).count()
    }

    /// Remove the wall in the given direction.
    ///
    /// Removing an already-removed wall is a no-op.
    #[inline]
    pub(crate) fn remove(&mut self, direction: Direction) {
        match direction {
            Direction::North => self.north = false,
            Direction::East => self.east = false,
            Direction::South => self.south = false,
            Direction::West => self.west = false,
        }
    }
}

/// A single cell in the maze grid.
///
/// Identity is the coordinate: cells live in a flat arena indexed by
/// `y * width + x`, and no two cells of one maze share a coordinate.
/// Wall flags are mutated only during generation and are read-only
/// afterward. The `visited` marker is transient carving state and carries
/// no meaning once generation returns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    coord: CellCoord,
    walls: Walls,
    pub(crate) visited: bool,
}

impl Cell {
    /// Create a fully walled, unvisited cell
    #[inline]
    pub(crate) fn new(coord: CellCoord) -> Self {
        Self {
            coord,
            walls: Walls::default(),
            visited: false,
        }
    }

    /// The cell's coordinate
    #[inline]
    pub fn coord(&self) -> CellCoord {
        self.coord
    }

    /// X coordinate (column index)
    #[inline]
    pub fn x(&self) -> i32 {
        self.coord.x
    }

    /// Y coordinate (row index)
    #[inline]
    pub fn y(&self) -> i32 {
        self.coord.y
    }

    /// Read-only snapshot of the four wall flags
    #[inline]
    pub fn walls(&self) -> Walls {
        self.walls
    }

    /// Is there an open passage in the given direction?
    #[inline]
    pub fn is_open(&self, direction: Direction) -> bool {
        !self.walls.has(direction)
    }

    /// Remove the wall in the given direction (this side only).
    ///
    /// Callers must also remove the opposite wall on the neighbor;
    /// the maze's `open_passage` does both in one step.
    #[inline]
    pub(crate) fn open_wall(&mut self, direction: Direction) {
        self.walls.remove(direction);
    }
}

/// A cardinal direction on the grid.
///
/// `ALL` lists the directions in N, E, S, W order, which is the scan order
/// used by the braiding pass and the graph builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward the row above (y - 1)
    North,
    /// Toward the column to the right (x + 1)
    East,
    /// Toward the row below (y + 1)
    South,
    /// Toward the column to the left (x - 1)
    West,
}

impl Direction {
    /// All four directions in N, E, S, W order
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The opposite direction (N <-> S, E <-> W)
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Coordinate delta of one step: North is (0, -1), y grows downward
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }
}
