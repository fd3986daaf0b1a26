//! Domain types for the route planner.
//!
//! Stops, connections and paths are plain values. None of them know about
//! the graph or the search; they are shared by every other module.

mod connection;
mod error;
mod path;
mod stop;

pub use connection::{Connection, Cost};
pub use error::DomainError;
pub use path::Path;
pub use stop::{InvalidStop, Stop};
