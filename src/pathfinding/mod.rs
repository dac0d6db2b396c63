//! Shortest-path search over the passage graph.
//!
//! - [`astar`]: A* solver with Euclidean heuristic and unit step costs
//! - [`bfs`]: reference breadth-first distance for cross-checking

pub mod astar;
pub mod bfs;

pub use astar::{find_path, AStarConfig, AStarSolver, ShortestPath};
pub use bfs::bfs_distance;
