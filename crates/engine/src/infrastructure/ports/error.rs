//! Error types for port operations.

/// Failure of an upstream data source call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The upstream answered 404 for this resource.
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: String },

    /// Network failure or non-success status.
    #[error("Source unavailable: {0}")]
    Unavailable(String),

    /// The body could not be decoded into the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl SourceError {
    /// Create a NotFound error with resource and id context.
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn unavailable(message: impl ToString) -> Self {
        Self::Unavailable(message.to_string())
    }

    pub fn invalid_response(message: impl ToString) -> Self {
        Self::InvalidResponse(message.to_string())
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_resource_and_id() {
        let error = SourceError::not_found("Pokemon", 9999);

        match &error {
            SourceError::NotFound { resource, id } => {
                assert_eq!(*resource, "Pokemon");
                assert_eq!(id, "9999");
            }
            _ => panic!("Expected NotFound variant"),
        }
        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "Pokemon not found: 9999");
    }

    #[test]
    fn unavailable_is_not_not_found() {
        let error = SourceError::unavailable("HTTP 503");
        assert!(!error.is_not_found());
        assert_eq!(error.to_string(), "Source unavailable: HTTP 503");
    }
}
