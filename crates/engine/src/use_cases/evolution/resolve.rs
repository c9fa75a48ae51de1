//! Evolution chain resolution.
//!
//! Root fetch -> candidate discovery -> concurrent enrichment -> merge.
//! Only the root fetch can fail the call; everything after it degrades.

use std::collections::HashSet;
use std::sync::Arc;

use futures_util::future::join_all;
use pokedex_domain::{
    EvolutionCandidate, EvolutionNode, NamePreference, PokedexId, PokemonRecord,
};

use crate::infrastructure::ports::{EnrichmentPort, PokemonDataPort};

use super::error::ResolveError;
use super::source::ChainSource;

/// Resolves the classified, enriched relatives of a Pokémon.
pub struct EvolutionResolver {
    primary: Arc<dyn PokemonDataPort>,
    chain_source: Arc<dyn ChainSource>,
    enrichment: Arc<dyn EnrichmentPort>,
    name_preference: NamePreference,
}

impl EvolutionResolver {
    pub fn new(
        primary: Arc<dyn PokemonDataPort>,
        chain_source: Arc<dyn ChainSource>,
        enrichment: Arc<dyn EnrichmentPort>,
    ) -> Self {
        Self {
            primary,
            chain_source,
            enrichment,
            name_preference: NamePreference::default(),
        }
    }

    pub fn with_name_preference(mut self, name_preference: NamePreference) -> Self {
        self.name_preference = name_preference;
        self
    }

    /// Fetch the root record and resolve its relatives.
    ///
    /// # Returns
    /// * `Ok(nodes)` - relatives in discovery order, possibly empty
    /// * `Err(ResolveError)` - the root record could not be fetched
    pub async fn resolve(&self, root_id: PokedexId) -> Result<Vec<EvolutionNode>, ResolveError> {
        let root = self
            .primary
            .get_pokemon(root_id)
            .await
            .map_err(|e| ResolveError::from_root_fetch(root_id, e))?;

        Ok(self.resolve_for(&root).await)
    }

    /// Resolve relatives of an already fetched root. Never fails.
    pub async fn resolve_for(&self, root: &PokemonRecord) -> Vec<EvolutionNode> {
        let candidates = match self.chain_source.candidates(root).await {
            Ok(candidates) => distinct_relatives(root.id, candidates),
            Err(e) => {
                tracing::warn!(
                    root = %root.id,
                    error = %e,
                    "Evolution chain unavailable, returning no relatives"
                );
                return Vec::new();
            }
        };

        tracing::debug!(
            root = %root.id,
            candidates = candidates.len(),
            "Evolution candidates discovered"
        );

        let outcomes = join_all(
            candidates
                .iter()
                .map(|candidate| self.enrichment.get_display(candidate.id)),
        )
        .await;

        candidates
            .into_iter()
            .zip(outcomes)
            .map(|(candidate, outcome)| {
                let display = match outcome {
                    Ok(display) => Some(display),
                    Err(e) => {
                        tracing::warn!(
                            root = %root.id,
                            id = %candidate.id,
                            error = %e,
                            "Enrichment failed, node degraded"
                        );
                        None
                    }
                };
                EvolutionNode::merge(candidate, display, self.name_preference)
            })
            .collect()
    }
}

/// Drop the root and any repeated id, keeping the first occurrence.
fn distinct_relatives(
    root: PokedexId,
    candidates: Vec<EvolutionCandidate>,
) -> Vec<EvolutionCandidate> {
    let mut seen = HashSet::from([root]);
    candidates
        .into_iter()
        .filter(|candidate| seen.insert(candidate.id))
        .collect()
}
