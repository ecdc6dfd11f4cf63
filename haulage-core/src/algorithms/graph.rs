//! Specifies a road network representation.

#[cfg(test)]
#[path = "../../tests/unit/algorithms/graph_test.rs"]
mod graph_test;

use crate::models::{Address, AddressId, Distance};
use rustc_hash::FxHashMap;

/// A directed weighted graph built from the address list.
pub struct Graph {
    adjacency: FxHashMap<AddressId, Vec<(AddressId, Distance)>>,
    vertices: Vec<AddressId>,
}

impl Graph {
    /// Creates a new instance of `Graph` from addresses. Every address becomes a vertex, even the one
    /// without qualifying edges. A connection becomes an edge only when its distance is strictly
    /// positive, others are dropped silently. Parallel edges are kept.
    pub fn new(addresses: &[Address]) -> Self {
        let mut adjacency: FxHashMap<AddressId, Vec<(AddressId, Distance)>> = FxHashMap::default();
        let mut vertices = Vec::with_capacity(addresses.len());

        addresses.iter().for_each(|address| {
            let edges = adjacency.entry(address.id).or_insert_with(|| {
                vertices.push(address.id);
                Vec::default()
            });

            edges.extend(
                address
                    .connections
                    .iter()
                    .filter(|connection| connection.distance > 0. && connection.distance.is_finite())
                    .map(|connection| (connection.to, connection.distance)),
            );
        });

        Self { adjacency, vertices }
    }

    /// Returns outgoing edges of the vertex. Unknown vertex has no edges.
    pub fn neighbours(&self, id: AddressId) -> &[(AddressId, Distance)] {
        self.adjacency.get(&id).map(|edges| edges.as_slice()).unwrap_or(&[])
    }

    /// Returns vertices in order of their first appearance in the address list.
    pub fn vertices(&self) -> &[AddressId] {
        self.vertices.as_slice()
    }

    /// Checks whether the vertex is part of the graph.
    pub fn contains(&self, id: AddressId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Returns amount of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    /// Returns the smallest weight of the edges going from `from` to `to`.
    pub fn weight(&self, from: AddressId, to: AddressId) -> Option<Distance> {
        self.neighbours(from)
            .iter()
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| *weight)
            .min_by(|a, b| a.total_cmp(b))
    }
}
