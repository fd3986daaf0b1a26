//! Route planner using breadth-first search.
//!
//! [`RoutePlanner`] owns the network and rules and answers route queries.
//! [`Explorer`] does the search itself; a candidate path is only queued if
//! the rules admit it.

mod config;
mod route;
mod search;


pub use config::{SearchConfig, TransformPolicy};
pub use route::{Route, RouteError, RoutePlanner};
pub use search::{Explorer, SearchStats};
