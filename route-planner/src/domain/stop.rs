//! Stop identifier type.

use std::fmt;

use serde::Deserialize;

/// Error returned when parsing an invalid stop identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop: {reason}")]
pub struct InvalidStop {
    reason: &'static str,
}

/// An opaque stop identifier, unique within a network.
///
/// Stops carry no internal structure. Any string is a valid identifier when
/// building a network programmatically; [`Stop::parse`] is the stricter
/// constructor used for user input.
///
/// # Examples
///
/// ```
/// use route_planner::domain::Stop;
///
/// let a = Stop::new("A");
/// assert_eq!(a.as_str(), "A");
///
/// // User input is trimmed
/// assert_eq!(Stop::parse("  B \n").unwrap().as_str(), "B");
///
/// // Blank input is rejected
/// assert!(Stop::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct Stop(String);

impl Stop {
    /// Create a stop from any identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Stop(id.into())
    }

    /// Parse a stop identifier typed by a user.
    ///
    /// Surrounding whitespace is stripped. The remaining identifier must be
    /// non-empty.
    pub fn parse(s: &str) -> Result<Self, InvalidStop> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidStop {
                reason: "must not be empty",
            });
        }
        Ok(Stop(trimmed.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Stop {
    fn from(s: &str) -> Self {
        Stop::new(s)
    }
}

impl fmt::Debug for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stop({})", self.0)
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
