//! The transport network: stops, connections and the graph built from them.

mod cost;
mod graph;

pub use cost::total_cost;
pub use graph::Graph;

use crate::domain::{Connection, Cost, Stop};

/// A connection list together with the adjacency graph built from it.
///
/// The connection list is kept alongside the graph because route costs are
/// priced from the original connections, not from the traversed edges.
#[derive(Debug, Clone)]
pub struct Network {
    connections: Vec<Connection>,
    graph: Graph,
}

impl Network {
    /// Build a network. The graph is constructed once, here.
    pub fn new(stops: Vec<Stop>, connections: Vec<Connection>) -> Self {
        let graph = Graph::build(&stops, &connections);
        Self {
            connections,
            graph,
        }
    }

    /// Connections in the order supplied.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// The adjacency graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Price a sequence of stops against this network's connections.
    pub fn cost_of(&self, stops: &[Stop]) -> Cost {
        total_cost(stops, &self.connections)
    }
}
