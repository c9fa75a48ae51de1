//! Port traits for infrastructure boundaries.
//!
//! These are the only abstractions over I/O in the engine. Ports exist for:
//! - The primary record source (could swap PokéBuild -> a local mirror)
//! - Species and evolution chain lookups
//! - Display enrichment (name and image)

mod error;
mod external;

pub use error::SourceError;
pub use external::{EnrichmentPort, PokemonDataPort, SpeciesPort};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::{MockEnrichmentPort, MockPokemonDataPort, MockSpeciesPort};
