//! Adjacency structure built from a connection list.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Connection, Cost, Stop};

/// Directed adjacency map: stop -> ordered outgoing (neighbour, cost) edges.
///
/// Built once from a stop list and a connection list and never modified.
///
/// # Invariants
///
/// - Every edge comes from exactly one connection.
/// - Edges out of a stop appear in the order their connections were supplied.
/// - Only stops in the stop list have outgoing edges.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<Stop, Vec<(Stop, Cost)>>,
}

impl Graph {
    /// Build the adjacency structure.
    ///
    /// For each stop, every connection leaving it is appended in input order.
    /// Connections whose origin is not a listed stop produce no edge, and a
    /// stop listed more than once still gets each edge once. Never fails.
    pub fn build(stops: &[Stop], connections: &[Connection]) -> Self {
        let mut adjacency: HashMap<Stop, Vec<(Stop, Cost)>> = HashMap::with_capacity(stops.len());

        for stop in stops {
            if adjacency.contains_key(stop) {
                continue;
            }
            let edges = connections
                .iter()
                .filter(|c| &c.origin == stop)
                .map(|c| (c.destination.clone(), c.cost))
                .collect();
            adjacency.insert(stop.clone(), edges);
        }

        let graph = Self { adjacency };
        debug!(
            stops = graph.len(),
            edges = graph.edge_count(),
            "Built network graph"
        );
        graph
    }

    /// Outgoing edges of `stop`, in connection order.
    ///
    /// Unknown stops have no neighbours.
    pub fn neighbors(&self, stop: &Stop) -> &[(Stop, Cost)] {
        self.adjacency.get(stop).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if `stop` was in the stop list the graph was built from.
    pub fn contains(&self, stop: &Stop) -> bool {
        self.adjacency.contains_key(stop)
    }

    /// Number of distinct stops in the graph.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns true if the graph has no stops.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}
