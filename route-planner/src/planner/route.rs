//! Route query object.

use std::fmt;

use tracing::info;

use crate::domain::{Connection, Cost, Path, Stop};
use crate::network::Network;
use crate::rules::RuleEngine;

use super::config::SearchConfig;
use super::search::Explorer;

/// Error from a route query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Nothing connects the origin to the destination
    #[error("no route available between {origin} and {destination}")]
    NotFound { origin: Stop, destination: Stop },
}

/// A found route and what it costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Where the route starts.
    pub origin: Stop,

    /// Stops after the origin, in travel order.
    pub path: Path,

    /// Total cost of travelling from the origin along the path.
    pub cost: Cost,
}

impl Route {
    /// The full stop sequence, origin first.
    pub fn stops(&self) -> Vec<Stop> {
        self.path.with_origin(&self.origin)
    }
}

/// Renders the full stop sequence, e.g. `A -> B -> D -> E`.
impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Path::from(self.stops()))
    }
}

/// Reusable route planner over one network and rule list.
///
/// The graph is built once in [`RoutePlanner::new`]. Queries never mutate
/// the planner, so a single planner can answer any number of queries and
/// can be shared across threads behind an `Arc`.
///
/// # Examples
///
/// ```
/// use route_planner::domain::{Connection, Stop};
/// use route_planner::planner::RoutePlanner;
/// use route_planner::rules::RuleEngine;
///
/// let planner = RoutePlanner::new(
///     vec![Stop::new("A"), Stop::new("B")],
///     vec![Connection::new("A", "B", 7)],
///     RuleEngine::new(),
/// );
///
/// let route = planner.find_route(&Stop::new("A"), &Stop::new("B")).unwrap();
/// assert_eq!(route.to_string(), "A -> B");
/// assert_eq!(route.cost, 7);
///
/// assert!(planner.find_route(&Stop::new("B"), &Stop::new("A")).is_err());
/// ```
#[derive(Debug)]
pub struct RoutePlanner {
    network: Network,
    rules: RuleEngine,
    config: SearchConfig,
}

impl RoutePlanner {
    /// Create a planner, building the graph from `stops` and `connections`.
    pub fn new(stops: Vec<Stop>, connections: Vec<Connection>, rules: RuleEngine) -> Self {
        Self {
            network: Network::new(stops, connections),
            rules,
            config: SearchConfig::default(),
        }
    }

    /// Replace the search configuration.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// The network this planner searches.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// The rules applied during search.
    pub fn rules(&self) -> &RuleEngine {
        &self.rules
    }

    /// The search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// An explorer borrowing this planner's graph, rules and config.
    pub fn explorer(&self) -> Explorer<'_> {
        Explorer::new(self.network.graph(), &self.rules, &self.config)
    }

    /// Search for a path without pricing it. `None` means no route.
    pub fn search(&self, origin: &Stop, destination: &Stop) -> Option<Path> {
        self.explorer().search(origin, destination)
    }

    /// Find a route from `origin` to `destination` and price it.
    ///
    /// The cost covers every hop from the origin along the path, each hop
    /// priced by its first matching connection.
    pub fn find_route(&self, origin: &Stop, destination: &Stop) -> Result<Route, RouteError> {
        let path = self
            .search(origin, destination)
            .ok_or_else(|| RouteError::NotFound {
                origin: origin.clone(),
                destination: destination.clone(),
            })?;

        let cost = self.network.cost_of(&path.with_origin(origin));
        info!(%origin, %destination, %path, cost, "Route planned");

        Ok(Route {
            origin: origin.clone(),
            path,
            cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(s: &str) -> Stop {
        Stop::new(s)
    }

    fn planner() -> RoutePlanner {
        RoutePlanner::new(
            ["A", "B", "C"].iter().map(|s| stop(s)).collect(),
            vec![Connection::new("A", "B", 4), Connection::new("B", "C", 6)],
            RuleEngine::new(),
        )
    }

    #[test]
    fn route_includes_origin_in_display_and_cost() {
        let route = planner().find_route(&stop("A"), &stop("C")).unwrap();

        assert_eq!(route.path, Path::from(vec![stop("B"), stop("C")]));
        assert_eq!(route.stops(), vec![stop("A"), stop("B"), stop("C")]);
        assert_eq!(route.to_string(), "A -> B -> C");
        assert_eq!(route.cost, 10);
    }

    #[test]
    fn same_origin_and_destination() {
        let route = planner().find_route(&stop("B"), &stop("B")).unwrap();

        assert!(route.path.is_empty());
        assert_eq!(route.cost, 0);
        assert_eq!(route.to_string(), "B");
    }

    #[test]
    fn not_found_error() {
        let err = planner().find_route(&stop("C"), &stop("A")).unwrap_err();

        assert_eq!(
            err,
            RouteError::NotFound {
                origin: stop("C"),
                destination: stop("A"),
            }
        );
        assert_eq!(err.to_string(), "no route available between C and A");
    }

    #[test]
    fn planner_is_reusable() {
        let planner = planner();

        let first = planner.find_route(&stop("A"), &stop("C")).unwrap();
        let second = planner.find_route(&stop("A"), &stop("C")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn planner_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RoutePlanner>();
    }
}
