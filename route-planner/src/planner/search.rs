//! Breadth-first path exploration.
//!
//! Walks the graph from an origin with a FIFO queue and stops at the first
//! queue entry that reaches the destination. Costs are carried along for
//! bookkeeping but never compared, so the answer is the first path found,
//! not the cheapest one.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use crate::domain::{Cost, Path, Stop};
use crate::network::Graph;
use crate::rules::RuleEngine;

use super::config::SearchConfig;

/// Counters from one search, for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries taken off the queue and expanded.
    pub expanded: usize,

    /// Entries put on the queue, including the seed.
    pub enqueued: usize,

    /// Entries dropped because their stop was already expanded.
    pub revisits: usize,

    /// Candidates the rules shaped into an empty path.
    pub rejected: usize,
}

/// A pending queue entry: where we are, what it cost, how we got here.
///
/// `cost` saturates at `Cost::MAX`.
#[derive(Debug, Clone)]
struct SearchState {
    stop: Stop,
    cost: Cost,
    path: Path,
}

/// Path explorer over a graph and rule list.
///
/// Holds only borrowed, read-only inputs. Every call to [`Explorer::search`]
/// allocates its own queue and visited set, so one explorer can serve any
/// number of sequential queries.
pub struct Explorer<'a> {
    graph: &'a Graph,
    rules: &'a RuleEngine,
    config: &'a SearchConfig,
}

impl<'a> Explorer<'a> {
    /// Create a new explorer.
    pub fn new(graph: &'a Graph, rules: &'a RuleEngine, config: &'a SearchConfig) -> Self {
        Self {
            graph,
            rules,
            config,
        }
    }

    /// Find a path from `origin` to `destination`.
    ///
    /// The returned path excludes the origin, so `origin == destination`
    /// yields the empty path. Returns `None` when the destination cannot be
    /// reached, including when either stop is not in the network.
    pub fn search(&self, origin: &Stop, destination: &Stop) -> Option<Path> {
        self.search_with_stats(origin, destination).0
    }

    /// [`Explorer::search`], also returning the search counters.
    pub fn search_with_stats(
        &self,
        origin: &Stop,
        destination: &Stop,
    ) -> (Option<Path>, SearchStats) {
        let mut stats = SearchStats::default();
        let mut visited: HashSet<Stop> = HashSet::new();
        let mut queue: VecDeque<SearchState> = VecDeque::new();

        queue.push_back(SearchState {
            stop: origin.clone(),
            cost: 0,
            path: Path::new(),
        });
        stats.enqueued += 1;

        while let Some(state) = queue.pop_front() {
            // Arrival is checked before the visited set, so the seed answers
            // origin == destination without expanding anything.
            if &state.stop == destination {
                debug!(
                    %origin,
                    %destination,
                    path = %state.path,
                    traversal_cost = state.cost,
                    expanded = stats.expanded,
                    enqueued = stats.enqueued,
                    "Route found"
                );
                return (Some(state.path), stats);
            }

            // Visited is marked on expansion, not on enqueue: a stop can sit
            // in the queue several times but is expanded once.
            if !visited.insert(state.stop.clone()) {
                stats.revisits += 1;
                continue;
            }
            stats.expanded += 1;

            trace!(
                stop = %state.stop,
                cost = state.cost,
                path = %state.path,
                neighbors = self.graph.neighbors(&state.stop).len(),
                "Expanding stop"
            );

            for (neighbor, edge_cost) in self.graph.neighbors(&state.stop) {
                let candidate = state.path.extended(neighbor.clone());
                let shaped = self.rules.apply_rules(&candidate);

                if shaped.is_empty() {
                    trace!(%candidate, "Candidate rejected by rules");
                    stats.rejected += 1;
                    continue;
                }

                let path = if self.config.propagates_transforms() {
                    shaped
                } else {
                    candidate
                };

                queue.push_back(SearchState {
                    stop: neighbor.clone(),
                    cost: state.cost.saturating_add(*edge_cost),
                    path,
                });
                stats.enqueued += 1;
            }
        }

        debug!(
            %origin,
            %destination,
            expanded = stats.expanded,
            enqueued = stats.enqueued,
            rejected = stats.rejected,
            "No route found"
        );
        (None, stats)
    }
}
