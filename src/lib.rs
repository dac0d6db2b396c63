//! # Vyuha-Maze: Grid Maze Generation and Solving
//!
//! A library for procedurally generating grid mazes and answering
//! shortest-path queries over them.
//!
//! ## Features
//!
//! - **Spanning-Tree Carving**: Randomized depth-first backtracker with an
//!   explicit stack, so memory stays bounded on large grids
//! - **Loop Injection**: Configurable probability of extra openings,
//!   turning the perfect maze into a braided one with alternate routes
//! - **A\* Pathfinding**: Unit-cost search with a Euclidean heuristic and
//!   a reproducible tie-break
//! - **Deterministic**: A fixed seed reproduces the exact wall layout
//!
//! ## Quick Start
//!
//! ```rust
//! use vyuha_maze::{Maze, MazeConfig};
//!
//! # fn main() -> vyuha_maze::Result<()> {
//! let config = MazeConfig::with_dimensions(12, 8).with_seed(7);
//! let maze = Maze::generate(&config)?;
//!
//! let solution = maze.solve()?;
//! assert_eq!(solution.path.first(), Some(&maze.entrance()));
//! assert_eq!(solution.path.last(), Some(&maze.exit()));
//! assert_eq!(solution.path.len() as u32, solution.distance + 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Coordinate Frame
//!
//! `(0, 0)` is the top-left cell; x grows east (rightward), y grows south
//! (downward). The entrance is always the top-left cell and the exit the
//! bottom-right cell.
//!
//! ## Architecture
//!
//! The library is organized into modules:
//!
//! - [`core`]: Fundamental types ([`CellCoord`], [`Cell`], [`Walls`],
//!   [`Direction`])
//! - [`config`]: Generation configuration
//! - [`grid`]: Maze storage plus the carving and braiding passes
//! - [`graph`]: Adjacency graph derived from wall state
//! - [`pathfinding`]: A* solver and the reference BFS
//! - [`error`]: Crate error type
//!
//! ## Data Flow
//!
//! ```text
//! ┌────────────┐   carve    ┌─────────────┐   braid    ┌─────────────┐
//! │ MazeConfig │──────────► │ Maze        │──────────► │ Maze        │
//! │ (seed, w×h)│            │ (span tree) │            │ (cycles)    │
//! └────────────┘            └─────────────┘            └──────┬──────┘
//!                                                             │ scan walls
//!                                                             ▼
//!                    ┌───────────────┐   A* / BFS   ┌──────────────┐
//!                    │ ShortestPath  │ ◄────────────│ PassageGraph │
//!                    │ (dist + cells)│              │ (adjacency)  │
//!                    └───────────────┘              └──────────────┘
//! ```
//!
//! A renderer or driver sits outside this crate: it reads wall snapshots,
//! the entrance/exit coordinates, and solved paths, and triggers
//! [`Maze::regenerate`]. It never mutates maze state directly.

pub mod config;
pub mod core;
pub mod error;
pub mod graph;
pub mod grid;
pub mod pathfinding;

// Re-export main types at crate root
pub use config::MazeConfig;
pub use core::{Cell, CellCoord, Direction, Walls};
pub use error::{MazeError, Result};
pub use graph::PassageGraph;
pub use grid::Maze;
pub use pathfinding::{bfs_distance, AStarConfig, AStarSolver, ShortestPath};
