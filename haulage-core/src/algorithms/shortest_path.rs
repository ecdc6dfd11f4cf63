//! This module contains a single source shortest path algorithm for graphs with non-negative
//! edge weights (Dijkstra's algorithm) and a path reconstruction from its result.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/shortest_path_test.rs"]
mod shortest_path_test;

use crate::algorithms::graph::Graph;
use crate::models::{AddressId, Distance};
use crate::utils::{GenericResult, compare_floats};
use rustc_hash::FxHashMap;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Keeps the result of a single source shortest path computation: for every vertex reachable from
/// the source, its predecessor on the shortest path and the distance from the source.
#[derive(Clone, Debug)]
pub struct ShortestPathTree {
    source: AddressId,
    predecessors: FxHashMap<AddressId, AddressId>,
    distances: FxHashMap<AddressId, Distance>,
}

impl ShortestPathTree {
    /// Returns the source vertex.
    pub fn source(&self) -> AddressId {
        self.source
    }

    /// Returns the predecessor of the vertex, if the vertex is reachable and is not the source.
    pub fn predecessor(&self, id: AddressId) -> Option<AddressId> {
        self.predecessors.get(&id).copied()
    }

    /// Returns the predecessor map.
    pub fn predecessors(&self) -> &FxHashMap<AddressId, AddressId> {
        &self.predecessors
    }

    /// Returns shortest distance from the source, if the vertex is reachable.
    pub fn distance(&self, id: AddressId) -> Option<Distance> {
        self.distances.get(&id).copied()
    }
}

/// A frontier entry ordered by tentative distance, then by vertex id.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    distance: Distance,
    vertex: AddressId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_floats(self.distance, other.distance).then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Computes shortest paths from the `source` to every reachable vertex of the `graph`.
///
/// Stale frontier entries are not removed on relaxation: an entry is skipped when popped if a shorter
/// distance has been found for its vertex meanwhile.
pub fn shortest_path_tree(graph: &Graph, source: AddressId) -> ShortestPathTree {
    let mut distances = FxHashMap::default();
    let mut predecessors = FxHashMap::default();
    let mut frontier = BinaryHeap::new();

    distances.insert(source, 0.);
    frontier.push(Reverse(FrontierEntry { distance: 0., vertex: source }));

    while let Some(Reverse(FrontierEntry { distance, vertex })) = frontier.pop() {
        let is_stale = distances.get(&vertex).is_some_and(|&best| distance > best);
        if is_stale {
            continue;
        }

        for &(neighbour, weight) in graph.neighbours(vertex) {
            let candidate = distance + weight;
            let is_improvement = distances.get(&neighbour).is_none_or(|&current| candidate < current);

            if is_improvement {
                distances.insert(neighbour, candidate);
                predecessors.insert(neighbour, vertex);
                frontier.push(Reverse(FrontierEntry { distance: candidate, vertex: neighbour }));
            }
        }
    }

    ShortestPathTree { source, predecessors, distances }
}

/// Reconstructs the path from `start` to `end` walking backward over predecessors.
/// Returns an error when `end` cannot be reached from `start`.
pub fn reconstruct_path(tree: &ShortestPathTree, start: AddressId, end: AddressId) -> GenericResult<Vec<AddressId>> {
    let mut path = vec![];
    let mut current = end;

    while current != start {
        let Some(previous) = tree.predecessor(current) else {
            let trace = path.iter().map(|id: &AddressId| id.to_string()).collect::<Vec<_>>().join(" -> ");
            return Err(format!("no path found from {start} to {end}, current node: {current}, path so far: {trace}")
                .into());
        };

        path.push(current);
        current = previous;
    }

    path.push(start);
    path.reverse();

    Ok(path)
}

/// Returns total weight of the path using the cheapest edge for every hop, or `None` when some hop
/// has no edge in the graph.
pub fn path_distance(graph: &Graph, path: &[AddressId]) -> Option<Distance> {
    path.windows(2).try_fold(0., |total, hop| graph.weight(hop[0], hop[1]).map(|weight| total + weight))
}
