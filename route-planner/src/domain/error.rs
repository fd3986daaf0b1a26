//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. Route
//! queries themselves never fail with a domain error; an unreachable or
//! unknown stop is reported as "no route" by the planner.

use super::InvalidStop;

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A stop identifier failed validation
    #[error(transparent)]
    InvalidStop(#[from] InvalidStop),

    /// A stop appears more than once in a stop list
    #[error("duplicate stop: {0}")]
    DuplicateStop(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Stop;

    #[test]
    fn error_display() {
        let err: DomainError = Stop::parse("").unwrap_err().into();
        assert_eq!(err.to_string(), "invalid stop: must not be empty");

        let err = DomainError::DuplicateStop("A".into());
        assert_eq!(err.to_string(), "duplicate stop: A");
    }
}
