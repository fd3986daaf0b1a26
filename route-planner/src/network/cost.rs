//! Route cost aggregation.

use crate::domain::{Connection, Cost, Stop};

/// Sum the cost of each consecutive hop in `stops`.
///
/// Each hop `(a, b)` is priced by the first connection from `a` to `b` in
/// `connections`; later duplicates never contribute. A hop with no matching
/// connection costs nothing. Sequences shorter than two stops cost zero.
/// The total saturates at `Cost::MAX` instead of overflowing.
pub fn total_cost(stops: &[Stop], connections: &[Connection]) -> Cost {
    stops
        .windows(2)
        .map(|hop| hop_cost(&hop[0], &hop[1], connections))
        .fold(0, Cost::saturating_add)
}

/// Cost of the first connection from `from` to `to`, or zero.
fn hop_cost(from: &Stop, to: &Stop, connections: &[Connection]) -> Cost {
    connections
        .iter()
        .find(|c| c.joins(from, to))
        .map(|c| c.cost)
        .unwrap_or(0)
}
