//! Reference breadth-first search.
//!
//! Unweighted BFS over the same adjacency the A* solver uses. Kept as an
//! independent oracle: on a unit-cost graph its distances are shortest by
//! construction, so tests cross-check A* results against it. Also handy
//! as a cheap reachability probe.

use crate::core::CellCoord;
use crate::graph::PassageGraph;

use std::collections::{HashMap, VecDeque};

/// Unweighted shortest-path distance in grid steps.
///
/// Returns `None` when the goal is unreachable or either endpoint is not
/// a node of the graph.
pub fn bfs_distance(graph: &PassageGraph, start: CellCoord, goal: CellCoord) -> Option<u32> {
    if !graph.contains(start) || !graph.contains(goal) {
        return None;
    }
    if start == goal {
        return Some(0);
    }

    let mut distances: HashMap<CellCoord, u32> = HashMap::new();
    distances.insert(start, 0);
    let mut frontier = VecDeque::new();
    frontier.push_back(start);

    while let Some(current) = frontier.pop_front() {
        let distance = distances[&current];
        for &neighbor in graph.neighbors(current) {
            if distances.contains_key(&neighbor) {
                continue;
            }
            if neighbor == goal {
                return Some(distance + 1);
            }
            distances.insert(neighbor, distance + 1);
            frontier.push_back(neighbor);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corridor_distance() {
        let mut graph = PassageGraph::new(4, 1);
        for x in 0..3 {
            graph.add_edge(CellCoord::new(x, 0), CellCoord::new(x + 1, 0));
        }
        assert_eq!(
            bfs_distance(&graph, CellCoord::new(0, 0), CellCoord::new(3, 0)),
            Some(3)
        );
    }

    #[test]
    fn test_same_cell_is_zero() {
        let graph = PassageGraph::new(2, 2);
        let c = CellCoord::new(1, 1);
        assert_eq!(bfs_distance(&graph, c, c), Some(0));
    }

    #[test]
    fn test_unreachable_is_none() {
        let mut graph = PassageGraph::new(3, 1);
        graph.add_edge(CellCoord::new(0, 0), CellCoord::new(1, 0));
        assert_eq!(
            bfs_distance(&graph, CellCoord::new(0, 0), CellCoord::new(2, 0)),
            None
        );
    }

    #[test]
    fn test_out_of_range_is_none() {
        let graph = PassageGraph::new(2, 2);
        assert_eq!(
            bfs_distance(&graph, CellCoord::new(0, 0), CellCoord::new(9, 9)),
            None
        );
    }
}
