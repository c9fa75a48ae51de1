//! Upstream data source ports.
//!
//! One trait per capability rather than per API: a single client may
//! implement several of them, and the composition root decides which
//! client serves which role.

use async_trait::async_trait;
use pokedex_domain::{ChainLink, DisplayData, PokedexId, PokemonRecord, SpeciesRecord};

use super::error::SourceError;

/// Primary source: full records and generation listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PokemonDataPort: Send + Sync {
    async fn get_pokemon(&self, id: PokedexId) -> Result<PokemonRecord, SourceError>;

    async fn list_generation(&self, generation: u8) -> Result<Vec<PokemonRecord>, SourceError>;
}

/// Species lookups and the evolution chain trees they point to.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpeciesPort: Send + Sync {
    async fn get_species(&self, id: PokedexId) -> Result<SpeciesRecord, SourceError>;

    /// Fetch the chain tree at `url`, as given by [`SpeciesRecord::evolution_chain_url`].
    async fn get_evolution_chain(&self, url: &str) -> Result<ChainLink, SourceError>;
}

/// Name and image for a single Pokémon.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrichmentPort: Send + Sync {
    async fn get_display(&self, id: PokedexId) -> Result<DisplayData, SourceError>;
}
