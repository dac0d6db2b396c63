//! A* shortest-path search over the passage graph.
//!
//! Unit step costs, straight-line Euclidean heuristic, and a binary-heap
//! frontier. The heuristic never exceeds the grid-step distance, so it is
//! admissible and consistent: the first time the goal leaves the frontier
//! its recorded distance is exact.

use crate::core::CellCoord;
use crate::error::{MazeError, Result};
use crate::graph::PassageGraph;

use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// A node in the A* frontier
#[derive(Clone, Debug)]
struct AStarNode {
    coord: CellCoord,
    /// Grid steps from the start
    g_cost: u32,
    /// g_cost + heuristic
    f_cost: f32,
    /// Monotone insertion number, the tie-break among equal f_cost
    seq: u64,
}

impl Eq for AStarNode {}

impl PartialEq for AStarNode {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost && self.seq == other.seq
    }
}

impl Ord for AStarNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior; among equal f_cost the
        // earliest-inserted node wins, keeping exploration order
        // reproducible.
        other
            .f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for AStarNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* search configuration
#[derive(Clone, Debug)]
pub struct AStarConfig {
    /// Maximum number of nodes to expand before giving up.
    /// Caps runaway searches on very large grids.
    pub max_iterations: usize,
}

impl Default for AStarConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1_000_000,
        }
    }
}

/// A shortest path between two cells.
///
/// `path` runs from the start to the goal inclusive, so it always holds
/// `distance + 1` cells. `distance` is exact: every passage traversal
/// costs one grid step, and the heuristic only shapes exploration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPath {
    /// Number of grid steps from start to goal
    pub distance: u32,
    /// Ordered cells from start to goal inclusive
    pub path: Vec<CellCoord>,
    /// Number of nodes expanded during the search
    pub nodes_expanded: usize,
}

impl ShortestPath {
    /// Path length in cells (always `distance + 1`)
    pub fn length_cells(&self) -> usize {
        self.path.len()
    }
}

/// A* solver borrowing a passage graph.
///
/// All per-search state (frontier, explored set, g-scores, predecessors)
/// is local to each [`find_path`](AStarSolver::find_path) call, so any
/// number of searches can run against the same graph without cross-call
/// contamination.
pub struct AStarSolver<'a> {
    graph: &'a PassageGraph,
    config: AStarConfig,
}

impl<'a> AStarSolver<'a> {
    /// Create a solver with the given configuration
    pub fn new(graph: &'a PassageGraph, config: AStarConfig) -> Self {
        Self { graph, config }
    }

    /// Create a solver with the default configuration
    pub fn with_defaults(graph: &'a PassageGraph) -> Self {
        Self::new(graph, AStarConfig::default())
    }

    /// Find the shortest path from `start` to `goal`.
    ///
    /// Fails with `OutOfBounds` when either endpoint is not a node of the
    /// graph, `NoPath` when the frontier empties before the goal is
    /// reached, and `IterationLimit` when the expansion budget runs out.
    pub fn find_path(&self, start: CellCoord, goal: CellCoord) -> Result<ShortestPath> {
        trace!("[AStar] find_path: start={} goal={}", start, goal);

        for endpoint in [start, goal] {
            if !self.graph.contains(endpoint) {
                debug!("[AStar] FAILED: endpoint {} outside graph", endpoint);
                return Err(MazeError::OutOfBounds {
                    coord: endpoint,
                    width: self.graph.width(),
                    height: self.graph.height(),
                });
            }
        }

        let mut open_set = BinaryHeap::new();
        let mut explored: HashSet<CellCoord> = HashSet::new();
        let mut came_from: HashMap<CellCoord, CellCoord> = HashMap::new();
        let mut g_scores: HashMap<CellCoord, u32> = HashMap::new();
        let mut seq: u64 = 0;

        open_set.push(AStarNode {
            coord: start,
            g_cost: 0,
            f_cost: heuristic(start, goal),
            seq,
        });
        g_scores.insert(start, 0);

        let mut nodes_expanded = 0;

        while let Some(current) = open_set.pop() {
            // A relaxed node gets pushed again with a better score; the
            // stale entry surfaces later and is skipped here.
            if explored.contains(&current.coord) {
                continue;
            }

            nodes_expanded += 1;
            if nodes_expanded > self.config.max_iterations {
                debug!(
                    "[AStar] FAILED: iteration limit after {} expansions",
                    nodes_expanded
                );
                return Err(MazeError::IterationLimit {
                    expanded: nodes_expanded,
                });
            }

            if current.coord == goal {
                return Ok(self.reconstruct_path(
                    &came_from,
                    start,
                    goal,
                    current.g_cost,
                    nodes_expanded,
                ));
            }

            explored.insert(current.coord);

            for &neighbor in self.graph.neighbors(current.coord) {
                if explored.contains(&neighbor) {
                    continue;
                }

                let tentative_g = current.g_cost + 1;
                let best_g = g_scores.get(&neighbor).copied().unwrap_or(u32::MAX);
                if tentative_g < best_g {
                    came_from.insert(neighbor, current.coord);
                    g_scores.insert(neighbor, tentative_g);

                    seq += 1;
                    open_set.push(AStarNode {
                        coord: neighbor,
                        g_cost: tentative_g,
                        f_cost: tentative_g as f32 + heuristic(neighbor, goal),
                        seq,
                    });
                }
            }
        }

        debug!(
            "[AStar] FAILED: no path after expanding {} nodes",
            nodes_expanded
        );
        Err(MazeError::NoPath {
            from: start,
            to: goal,
        })
    }

    /// Reconstruct the path from the predecessor map.
    ///
    /// Only called after the goal has been popped from the frontier, so
    /// the predecessor chain is guaranteed to reach back to the start.
    fn reconstruct_path(
        &self,
        came_from: &HashMap<CellCoord, CellCoord>,
        start: CellCoord,
        goal: CellCoord,
        distance: u32,
        nodes_expanded: usize,
    ) -> ShortestPath {
        let mut path = Vec::with_capacity(distance as usize + 1);
        let mut current = goal;
        while let Some(&prev) = came_from.get(&current) {
            path.push(current);
            current = prev;
        }
        path.push(start);
        path.reverse();

        trace!(
            "[AStar] SUCCESS: distance={} cells={} nodes_expanded={}",
            distance,
            path.len(),
            nodes_expanded
        );

        ShortestPath {
            distance,
            path,
            nodes_expanded,
        }
    }
}

/// Straight-line Euclidean distance between two cells
#[inline]
fn heuristic(from: CellCoord, to: CellCoord) -> f32 {
    from.euclidean_distance(&to)
}

/// Shortest path with the default configuration
pub fn find_path(graph: &PassageGraph, start: CellCoord, goal: CellCoord) -> Result<ShortestPath> {
    AStarSolver::with_defaults(graph).find_path(start, goal)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Corridor graph: cells (0,0)..(n-1,0) chained west to east
    fn corridor(length: usize) -> PassageGraph {
        let mut graph = PassageGraph::new(length, 1);
        for x in 0..length as i32 - 1 {
            graph.add_edge(CellCoord::new(x, 0), CellCoord::new(x + 1, 0));
        }
        graph
    }

    /// 2x2 graph with all four passages open (two equal-length routes)
    fn open_block() -> PassageGraph {
        let mut graph = PassageGraph::new(2, 2);
        graph.add_edge(CellCoord::new(0, 0), CellCoord::new(1, 0));
        graph.add_edge(CellCoord::new(0, 0), CellCoord::new(0, 1));
        graph.add_edge(CellCoord::new(1, 0), CellCoord::new(1, 1));
        graph.add_edge(CellCoord::new(0, 1), CellCoord::new(1, 1));
        graph
    }

    #[test]
    fn test_corridor_path() {
        let graph = corridor(5);
        let result = find_path(&graph, CellCoord::new(0, 0), CellCoord::new(4, 0)).unwrap();
        assert_eq!(result.distance, 4);
        assert_eq!(result.length_cells(), 5);
        assert_eq!(result.path.first(), Some(&CellCoord::new(0, 0)));
        assert_eq!(result.path.last(), Some(&CellCoord::new(4, 0)));
    }

    #[test]
    fn test_same_start_and_goal() {
        let graph = corridor(3);
        let c = CellCoord::new(1, 0);
        let result = find_path(&graph, c, c).unwrap();
        assert_eq!(result.distance, 0);
        assert_eq!(result.path, vec![c]);
    }

    #[test]
    fn test_disconnected_components_return_no_path() {
        let mut graph = PassageGraph::new(4, 1);
        graph.add_edge(CellCoord::new(0, 0), CellCoord::new(1, 0));
        graph.add_edge(CellCoord::new(2, 0), CellCoord::new(3, 0));

        let result = find_path(&graph, CellCoord::new(0, 0), CellCoord::new(3, 0));
        assert_eq!(
            result,
            Err(MazeError::NoPath {
                from: CellCoord::new(0, 0),
                to: CellCoord::new(3, 0),
            })
        );
    }

    #[test]
    fn test_out_of_bounds_endpoints() {
        let graph = corridor(3);
        let inside = CellCoord::new(0, 0);
        let outside = CellCoord::new(7, 0);

        assert!(matches!(
            find_path(&graph, outside, inside),
            Err(MazeError::OutOfBounds { .. })
        ));
        assert!(matches!(
            find_path(&graph, inside, outside),
            Err(MazeError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_iteration_limit() {
        let graph = corridor(10);
        let solver = AStarSolver::new(&graph, AStarConfig { max_iterations: 3 });
        let result = solver.find_path(CellCoord::new(0, 0), CellCoord::new(9, 0));
        assert!(matches!(result, Err(MazeError::IterationLimit { .. })));
    }

    #[test]
    fn test_equal_routes_resolve_deterministically() {
        let graph = open_block();
        let start = CellCoord::new(0, 0);
        let goal = CellCoord::new(1, 1);

        let first = find_path(&graph, start, goal).unwrap();
        assert_eq!(first.distance, 2);
        for _ in 0..10 {
            assert_eq!(find_path(&graph, start, goal).unwrap(), first);
        }
    }

    #[test]
    fn test_path_steps_are_edges() {
        let graph = open_block();
        let result =
            find_path(&graph, CellCoord::new(0, 0), CellCoord::new(1, 1)).unwrap();
        for pair in result.path.windows(2) {
            assert!(graph.neighbors(pair[0]).contains(&pair[1]));
        }
    }

    #[test]
    fn test_solver_is_reentrant() {
        let graph = corridor(6);
        let solver = AStarSolver::with_defaults(&graph);
        let a = solver
            .find_path(CellCoord::new(0, 0), CellCoord::new(5, 0))
            .unwrap();
        let b = solver
            .find_path(CellCoord::new(5, 0), CellCoord::new(0, 0))
            .unwrap();
        // Earlier searches leave no state behind
        assert_eq!(a.distance, b.distance);
        assert_eq!(
            solver
                .find_path(CellCoord::new(0, 0), CellCoord::new(5, 0))
                .unwrap(),
            a
        );
    }
}
