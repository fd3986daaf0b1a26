//! Rule-aware route planner for small transport networks.
//!
//! Answers: "how do I get from this stop to that one, and what will it
//! cost?" over a directed, weighted network, letting a list of business
//! rules gate candidate paths while the search runs.

pub mod config;
pub mod domain;
pub mod network;
pub mod planner;
pub mod rules;
