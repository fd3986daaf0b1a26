//! Paths through the network.

use std::fmt;

use super::Stop;

/// Stops visited in traversal order.
///
/// The search never stores its origin in the path: a path found from `A`
/// to `E` via `B` and `D` is `[B, D, E]`. The empty path is the answer to a
/// query whose origin is its destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    stops: Vec<Stop>,
}

impl Path {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stops in order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Number of stops on the path.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns true if the path has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// First stop, if any.
    pub fn first(&self) -> Option<&Stop> {
        self.stops.first()
    }

    /// Last stop, if any.
    pub fn last(&self) -> Option<&Stop> {
        self.stops.last()
    }

    /// Returns a new path with `stop` appended.
    pub fn extended(&self, stop: Stop) -> Path {
        let mut stops = Vec::with_capacity(self.stops.len() + 1);
        stops.extend_from_slice(&self.stops);
        stops.push(stop);
        Path { stops }
    }

    /// Returns this path without its first stop.
    pub fn without_first(&self) -> Path {
        Path {
            stops: self.stops.iter().skip(1).cloned().collect(),
        }
    }

    /// Returns this path without its last stop.
    pub fn without_last(&self) -> Path {
        let keep = self.stops.len().saturating_sub(1);
        Path {
            stops: self.stops[..keep].to_vec(),
        }
    }

    /// Returns the path with `origin` in front, as a plain sequence of stops.
    pub fn with_origin(&self, origin: &Stop) -> Vec<Stop> {
        std::iter::once(origin.clone())
            .chain(self.stops.iter().cloned())
            .collect()
    }
}

impl From<Vec<Stop>> for Path {
    fn from(stops: Vec<Stop>) -> Self {
        Self { stops }
    }
}

impl FromIterator<Stop> for Path {
    fn from_iter<I: IntoIterator<Item = Stop>>(iter: I) -> Self {
        Self {
            stops: iter.into_iter().collect(),
        }
    }
}

/// Renders `A -> B -> C`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stop) in self.stops.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{stop}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(ids: &[&str]) -> Path {
        ids.iter().map(|s| Stop::new(*s)).collect()
    }

    #[test]
    fn empty_path() {
        let p = Path::new();
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
        assert!(p.first().is_none());
        assert!(p.last().is_none());
        assert_eq!(p.to_string(), "");
    }

    #[test]
    fn extended_leaves_original_untouched() {
        let p = path(&["B"]);
        let q = p.extended(Stop::new("D"));
        assert_eq!(p, path(&["B"]));
        assert_eq!(q, path(&["B", "D"]));
    }

    #[test]
    fn without_first_and_last() {
        let p = path(&["B", "D", "E"]);
        assert_eq!(p.without_first(), path(&["D", "E"]));
        assert_eq!(p.without_last(), path(&["B", "D"]));
        assert!(Path::new().without_first().is_empty());
        assert!(Path::new().without_last().is_empty());
    }

    #[test]
    fn with_origin_prepends() {
        let p = path(&["B", "D"]);
        assert_eq!(
            p.with_origin(&Stop::new("A")),
            vec![Stop::new("A"), Stop::new("B"), Stop::new("D")]
        );
    }

    #[test]
    fn display_uses_arrows() {
        assert_eq!(path(&["A"]).to_string(), "A");
        assert_eq!(path(&["A", "B", "C"]).to_string(), "A -> B -> C");
    }
}
