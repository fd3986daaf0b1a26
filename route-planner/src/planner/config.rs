//! Search configuration for the route planner.

use serde::Deserialize;

/// What the explorer enqueues after a candidate path passes the rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformPolicy {
    /// Rules only gate candidates: a candidate is admitted when the shaped
    /// path is non-empty, but the unshaped candidate is what gets enqueued.
    /// Every route answer in existing deployments depends on this.
    #[default]
    GateOnly,

    /// The shaped path replaces the candidate in the queue.
    Propagate,
}

/// Configuration parameters for route search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// How rule transforms feed back into the search.
    pub transform_policy: TransformPolicy,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(transform_policy: TransformPolicy) -> Self {
        Self { transform_policy }
    }

    /// Returns true if shaped paths are enqueued instead of the candidates.
    pub fn propagates_transforms(&self) -> bool {
        self.transform_policy == TransformPolicy::Propagate
    }
}
