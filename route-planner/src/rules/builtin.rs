//! Concrete rule implementations.

use std::fmt;

use crate::domain::{Path, Stop};

use super::Rule;

/// Rules that can be described as data (and loaded from configuration).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuiltinRule {
    /// Collapse transfers: once a path is longer than the given length, drop
    /// its first stop.
    DropFirstWhenLongerThan(usize),

    /// Drop the path's last stop when it is the given stop.
    DropTrailingStop(Stop),
}

impl Rule for BuiltinRule {
    fn applies(&self, path: &Path) -> bool {
        match self {
            BuiltinRule::DropFirstWhenLongerThan(length) => path.len() > *length,
            BuiltinRule::DropTrailingStop(stop) => path.last() == Some(stop),
        }
    }

    fn apply(&self, path: &Path) -> Path {
        match self {
            BuiltinRule::DropFirstWhenLongerThan(_) => path.without_first(),
            BuiltinRule::DropTrailingStop(_) => path.without_last(),
        }
    }
}

/// A rule made from a pair of closures.
pub struct FnRule<P, T> {
    predicate: P,
    transform: T,
}

impl<P, T> FnRule<P, T>
where
    P: Fn(&Path) -> bool + Send + Sync,
    T: Fn(&Path) -> Path + Send + Sync,
{
    /// Create a rule from a predicate and a transform.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_planner::domain::{Path, Stop};
    /// use route_planner::rules::{FnRule, Rule};
    ///
    /// let rule = FnRule::new(|p: &Path| p.len() > 1, |p: &Path| p.without_last());
    ///
    /// let path: Path = vec![Stop::new("A"), Stop::new("B")].into();
    /// assert!(rule.applies(&path));
    /// assert_eq!(rule.apply(&path).len(), 1);
    /// ```
    pub fn new(predicate: P, transform: T) -> Self {
        Self {
            predicate,
            transform,
        }
    }
}

impl<P, T> Rule for FnRule<P, T>
where
    P: Fn(&Path) -> bool + Send + Sync,
    T: Fn(&Path) -> Path + Send + Sync,
{
    fn applies(&self, path: &Path) -> bool {
        (self.predicate)(path)
    }

    fn apply(&self, path: &Path) -> Path {
        (self.transform)(path)
    }
}

impl<P, T> fmt::Debug for FnRule<P, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnRule")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(ids: &[&str]) -> Path {
        ids.iter().map(|s| Stop::new(*s)).collect()
    }

    #[test]
    fn drop_first_when_longer_than() {
        let rule = BuiltinRule::DropFirstWhenLongerThan(2);

        assert!(!rule.applies(&path(&["B", "D"])));
        assert!(rule.applies(&path(&["B", "D", "E"])));
        assert_eq!(rule.apply(&path(&["B", "D", "E"])), path(&["D", "E"]));
    }

    #[test]
    fn drop_trailing_stop() {
        let rule = BuiltinRule::DropTrailingStop(Stop::new("E"));

        assert!(rule.applies(&path(&["D", "E"])));
        assert!(!rule.applies(&path(&["E", "D"])));
        assert!(!rule.applies(&Path::new()));
        assert_eq!(rule.apply(&path(&["D", "E"])), path(&["D"]));
        assert!(rule.apply(&path(&["E"])).is_empty());
    }

    #[test]
    fn fn_rule_delegates_to_closures() {
        let rule = FnRule::new(
            |p: &Path| p.first() == Some(&Stop::new("X")),
            |_: &Path| Path::new(),
        );

        assert!(rule.applies(&path(&["X", "Y"])));
        assert!(!rule.applies(&path(&["Y", "X"])));
        assert!(rule.apply(&path(&["X", "Y"])).is_empty());
    }
}
