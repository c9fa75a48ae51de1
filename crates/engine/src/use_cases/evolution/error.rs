//! Evolution resolution errors.

use pokedex_domain::PokedexId;

use crate::infrastructure::ports::SourceError;

/// Failure to resolve relatives because the root record could not be fetched.
///
/// Failures after the root is known never surface here; they degrade the
/// result instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("Pokemon not found: {0}")]
    NotFound(PokedexId),
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),
}

impl ResolveError {
    /// Classify a failed root fetch.
    pub fn from_root_fetch(id: PokedexId, error: SourceError) -> Self {
        if error.is_not_found() {
            Self::NotFound(id)
        } else {
            Self::SourceUnavailable(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_404_is_not_found() {
        let id = PokedexId::new(9999).expect("valid id");
        let error = ResolveError::from_root_fetch(id, SourceError::not_found("Pokemon", id));
        assert_eq!(error, ResolveError::NotFound(id));
    }

    #[test]
    fn other_failures_are_source_unavailable() {
        let id = PokedexId::new(4).expect("valid id");

        let error = ResolveError::from_root_fetch(id, SourceError::unavailable("HTTP 503"));
        assert!(matches!(error, ResolveError::SourceUnavailable(ref m) if m.contains("503")));

        let error = ResolveError::from_root_fetch(id, SourceError::invalid_response("eof"));
        assert!(matches!(error, ResolveError::SourceUnavailable(_)));
    }
}
