//! Candidate discovery strategies.
//!
//! The two upstream shapes are hidden behind [`ChainSource`] so the resolver
//! never inspects responses to decide how to traverse them.

use std::sync::Arc;

use async_trait::async_trait;
use pokedex_domain::{flat_link_candidates, EvolutionCandidate, PokemonRecord};

use crate::infrastructure::ports::{SourceError, SpeciesPort};

/// Produces the unenriched relatives of a root record, in discovery order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChainSource: Send + Sync {
    async fn candidates(&self, root: &PokemonRecord)
        -> Result<Vec<EvolutionCandidate>, SourceError>;
}

/// One-hop links embedded in the root record. No I/O.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlatLinkSource;

impl FlatLinkSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChainSource for FlatLinkSource {
    async fn candidates(
        &self,
        root: &PokemonRecord,
    ) -> Result<Vec<EvolutionCandidate>, SourceError> {
        Ok(flat_link_candidates(
            root.id,
            &root.pre_evolutions,
            &root.next_evolutions,
        ))
    }
}

/// Species lookup, then a single chain tree fetch, then a depth-first walk.
pub struct ChainTreeSource {
    species: Arc<dyn SpeciesPort>,
}

impl ChainTreeSource {
    pub fn new(species: Arc<dyn SpeciesPort>) -> Self {
        Self { species }
    }
}

#[async_trait]
impl ChainSource for ChainTreeSource {
    async fn candidates(
        &self,
        root: &PokemonRecord,
    ) -> Result<Vec<EvolutionCandidate>, SourceError> {
        let species = self.species.get_species(root.id).await?;

        let Some(chain_url) = species.evolution_chain_url else {
            tracing::debug!(root = %root.id, "Species has no evolution chain");
            return Ok(Vec::new());
        };

        let chain = self.species.get_evolution_chain(&chain_url).await?;
        Ok(chain.relatives_of(root.id))
    }
}
