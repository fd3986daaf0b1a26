//! Business rules that gate candidate paths during the search.
//!
//! A rule is a predicate plus a transform over a [`Path`]. Rules are tried
//! in declaration order and only the first matching rule's transform runs;
//! see [`RuleEngine::apply_rules`].

mod builtin;
mod engine;

pub use builtin::{BuiltinRule, FnRule};
pub use engine::RuleEngine;

use crate::domain::Path;

/// A route-shaping policy.
///
/// Rules are shared read-only by every query, so they must be `Send + Sync`.
pub trait Rule: Send + Sync {
    /// Returns true if this rule should shape `path`.
    fn applies(&self, path: &Path) -> bool;

    /// Transform `path`. Only called when [`Rule::applies`] returned true.
    fn apply(&self, path: &Path) -> Path;
}
