//! Network definitions loaded from JSON.
//!
//! A definition lists the stops, the connections between them, the rules to
//! apply and optionally the search configuration:
//!
//! ```json
//! {
//!   "stops": ["A", "B", "C"],
//!   "connections": [
//!     { "from": "A", "to": "B", "cost": 10 },
//!     { "from": "B", "to": "C", "cost": 30 }
//!   ],
//!   "rules": [
//!     { "kind": "drop_first_when_longer_than", "length": 2 },
//!     { "kind": "drop_trailing_stop", "stop": "C" }
//!   ],
//!   "search": { "transform_policy": "gate_only" }
//! }
//! ```
//!
//! Costs are non-negative integers that fit in a `u64`. Fractional or
//! negative costs such as `2.5` or `-1` are rejected with
//! [`ConfigError::Json`].

use std::collections::HashSet;

use serde::Deserialize;
use tracing::debug;

use crate::domain::{Connection, DomainError, Stop};
use crate::planner::{RoutePlanner, SearchConfig};
use crate::rules::{BuiltinRule, RuleEngine};

/// Errors that can occur when loading a network definition.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Reading the definition file failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The definition is not valid JSON for a network
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The definition parsed but is inconsistent
    #[error("invalid network: {0}")]
    Invalid(#[from] DomainError),
}

/// A rule as written in a network definition.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleSpec {
    /// See [`BuiltinRule::DropFirstWhenLongerThan`]
    DropFirstWhenLongerThan { length: usize },
    /// See [`BuiltinRule::DropTrailingStop`]
    DropTrailingStop { stop: Stop },
}

impl From<RuleSpec> for BuiltinRule {
    fn from(spec: RuleSpec) -> Self {
        match spec {
            RuleSpec::DropFirstWhenLongerThan { length } => {
                BuiltinRule::DropFirstWhenLongerThan(length)
            }
            RuleSpec::DropTrailingStop { stop } => BuiltinRule::DropTrailingStop(stop),
        }
    }
}

/// A complete network definition.
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    /// Stop identifiers, unique.
    pub stops: Vec<Stop>,

    /// Directed connections, in priority order.
    pub connections: Vec<Connection>,

    /// Rules in declaration order.
    #[serde(default)]
    pub rules: Vec<RuleSpec>,

    /// Search configuration.
    #[serde(default)]
    pub search: SearchConfig,
}

impl NetworkConfig {
    /// Parse and validate a definition from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: NetworkConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a definition file.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        debug!(
            path = %path.display(),
            stops = config.stops.len(),
            connections = config.connections.len(),
            rules = config.rules.len(),
            "Loaded network definition"
        );
        Ok(config)
    }

    /// Check that stop identifiers are non-blank and unique.
    ///
    /// Connections may still name stops outside the stop list; the graph
    /// simply ignores edges leaving them.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::with_capacity(self.stops.len());
        for stop in &self.stops {
            Stop::parse(stop.as_str())?;
            if !seen.insert(stop) {
                return Err(DomainError::DuplicateStop(stop.to_string()));
            }
        }
        Ok(())
    }

    /// The rule engine described by this definition.
    pub fn rule_engine(&self) -> RuleEngine {
        self.rules
            .iter()
            .cloned()
            .map(BuiltinRule::from)
            .fold(RuleEngine::new(), |engine, rule| engine.with_rule(rule))
    }

    /// Build a planner for this network.
    pub fn into_planner(self) -> RoutePlanner {
        let rules = self.rule_engine();
        RoutePlanner::new(self.stops, self.connections, rules).with_config(self.search)
    }
}

/// The built-in five-stop sample network.
///
/// Stops A to E with two sample rules: collapse transfers once a path is
/// longer than two stops, and drop a trailing E.
pub fn sample_network() -> NetworkConfig {
    NetworkConfig {
        stops: ["A", "B", "C", "D", "E"]
            .into_iter()
            .map(Stop::from)
            .collect(),
        connections: vec![
            Connection::new("A", "B", 10),
            Connection::new("A", "C", 20),
            Connection::new("B", "D", 30),
            Connection::new("C", "D", 40),
            Connection::new("D", "E", 50),
        ],
        rules: vec![
            RuleSpec::DropFirstWhenLongerThan { length: 2 },
            RuleSpec::DropTrailingStop {
                stop: Stop::new("E"),
            },
        ],
        search: SearchConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::domain::Path;
    use crate::planner::TransformPolicy;

    const SAMPLE_JSON: &str = r#"{
        "stops": ["A", "B", "C", "D", "E"],
        "connections": [
            { "from": "A", "to": "B", "cost": 10 },
            { "from": "A", "to": "C", "cost": 20 },
            { "from": "B", "to": "D", "cost": 30 },
            { "from": "C", "to": "D", "cost": 40 },
            { "from": "D", "to": "E", "cost": 50 }
        ],
        "rules": [
            { "kind": "drop_first_when_longer_than", "length": 2 },
            { "kind": "drop_trailing_stop", "stop": "E" }
        ]
    }"#;

    fn stop(s: &str) -> Stop {
        Stop::new(s)
    }

    #[test]
    fn parse_sample_json() {
        let config = NetworkConfig::from_json(SAMPLE_JSON).unwrap();

        assert_eq!(config.stops.len(), 5);
        assert_eq!(config.connections[2], Connection::new("B", "D", 30));
        assert_eq!(config.rules, sample_network().rules);
        assert_eq!(config.search, SearchConfig::default());
    }

    #[test]
    fn json_matches_builtin_sample() {
        let from_json = NetworkConfig::from_json(SAMPLE_JSON).unwrap().into_planner();
        let builtin = sample_network().into_planner();

        for (from, to) in [("A", "E"), ("D", "E"), ("B", "E"), ("E", "A")] {
            assert_eq!(
                from_json.find_route(&stop(from), &stop(to)),
                builtin.find_route(&stop(from), &stop(to)),
            );
        }
    }

    #[test]
    fn sample_network_routes() {
        let planner = sample_network().into_planner();

        let route = planner.find_route(&stop("A"), &stop("E")).unwrap();
        assert_eq!(route.to_string(), "A -> B -> D -> E");
        assert_eq!(route.cost, 90);

        assert!(planner.find_route(&stop("D"), &stop("E")).is_err());
    }

    #[test]
    fn rules_and_search_are_optional() {
        let json = r#"{
            "stops": ["A", "B"],
            "connections": [{ "from": "A", "to": "B", "cost": 1 }]
        }"#;
        let config = NetworkConfig::from_json(json).unwrap();

        assert!(config.rules.is_empty());
        assert!(config.rule_engine().is_empty());
    }

    #[test]
    fn search_policy_is_read() {
        let json = r#"{
            "stops": ["A"],
            "connections": [],
            "search": { "transform_policy": "propagate" }
        }"#;
        let planner = NetworkConfig::from_json(json).unwrap().into_planner();

        assert_eq!(planner.config().transform_policy, TransformPolicy::Propagate);
        assert_eq!(planner.search(&stop("A"), &stop("A")), Some(Path::new()));
    }

    #[test]
    fn unknown_rule_kind_is_rejected() {
        let json = r#"{ "stops": [], "connections": [], "rules": [{ "kind": "teleport" }] }"#;
        assert!(matches!(
            NetworkConfig::from_json(json),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn fractional_cost_is_rejected() {
        let json = r#"{
            "stops": ["A", "B"],
            "connections": [{ "from": "A", "to": "B", "cost": 2.5 }]
        }"#;
        assert!(matches!(
            NetworkConfig::from_json(json),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn duplicate_stop_is_rejected() {
        let json = r#"{ "stops": ["A", "B", "A"], "connections": [] }"#;
        let err = NetworkConfig::from_json(json).unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Invalid(DomainError::DuplicateStop(ref s)) if s == "A"
        ));
        assert_eq!(err.to_string(), "invalid network: duplicate stop: A");
    }

    #[test]
    fn blank_stop_is_rejected() {
        let json = r#"{ "stops": ["A", " "], "connections": [] }"#;
        assert!(matches!(
            NetworkConfig::from_json(json),
            Err(ConfigError::Invalid(DomainError::InvalidStop(_)))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_JSON.as_bytes()).unwrap();

        let config = NetworkConfig::load(file.path()).unwrap();
        assert_eq!(config.connections.len(), 5);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("network.json");

        let err = NetworkConfig::load(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().starts_with("failed to read"));
    }
}
