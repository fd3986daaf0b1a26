//! Directed, weighted connections between stops.

use serde::Deserialize;

use super::Stop;

/// Travel cost of a connection or a whole route.
pub type Cost = u64;

/// A directed edge from `origin` to `destination`.
///
/// A connection from A to B says nothing about B to A. Several connections
/// between the same pair are allowed and kept as distinct edges.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Connection {
    /// Stop the connection leaves from
    #[serde(rename = "from")]
    pub origin: Stop,
    /// Stop the connection arrives at
    #[serde(rename = "to")]
    pub destination: Stop,
    /// Cost of travelling this connection
    pub cost: Cost,
}

impl Connection {
    /// Creates a new connection.
    pub fn new(origin: impl Into<Stop>, destination: impl Into<Stop>, cost: Cost) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            cost,
        }
    }

    /// Returns true if this connection runs from `from` to `to`.
    pub fn joins(&self, from: &Stop, to: &Stop) -> bool {
        &self.origin == from && &self.destination == to
    }
}
