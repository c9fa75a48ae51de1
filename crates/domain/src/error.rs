//! Unified error type for the domain layer
//!
//! Domain code is pure, so the only failures it reports are invalid input
//! values. Transport failures live with the ports in the engine crate.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for values outside their allowed range.
    ///
    /// # Example
    /// ```ignore
    /// if value == 0 {
    ///     return Err(DomainError::validation("Pokédex id must be positive"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("Pokédex id must be positive");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: Pokédex id must be positive"
        );
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Invalid Pokédex id: abc");
        assert_eq!(err.to_string(), "Parse error: Invalid Pokédex id: abc");
    }
}
