//! List Pokédex use case.

use std::sync::Arc;

use pokedex_domain::{distinct_types, PokedexFilter, PokemonRecord};
use serde::Serialize;

use crate::infrastructure::ports::{PokemonDataPort, SourceError};

/// Errors that can occur while listing a generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PokedexError {
    #[error("Generation not found: {0}")]
    GenerationNotFound(u8),
    #[error("Invalid generation: {0}")]
    InvalidGeneration(u8),
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),
}

/// One filtered page of the Pokédex grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PokedexPage {
    pub generation: u8,
    /// Size of the unfiltered generation.
    pub total: usize,
    /// Type dropdown options, drawn from the unfiltered generation.
    pub types: Vec<String>,
    pub pokemon: Vec<PokemonRecord>,
    /// Result count line shown above the grid, "N of M Pokémon found".
    pub summary: String,
}

impl PokedexPage {
    pub fn new(
        generation: u8,
        total: usize,
        types: Vec<String>,
        pokemon: Vec<PokemonRecord>,
    ) -> Self {
        let summary = format!("{} of {} Pokémon found", pokemon.len(), total);
        Self {
            generation,
            total,
            types,
            pokemon,
            summary,
        }
    }
}

pub struct ListPokedex {
    primary: Arc<dyn PokemonDataPort>,
}

impl ListPokedex {
    pub fn new(primary: Arc<dyn PokemonDataPort>) -> Self {
        Self { primary }
    }

    pub async fn execute(
        &self,
        generation: u8,
        filter: &PokedexFilter,
    ) -> Result<PokedexPage, PokedexError> {
        if generation == 0 {
            return Err(PokedexError::InvalidGeneration(generation));
        }

        let all = self
            .primary
            .list_generation(generation)
            .await
            .map_err(|e| match e {
                SourceError::NotFound { .. } => PokedexError::GenerationNotFound(generation),
                other => PokedexError::SourceUnavailable(other.to_string()),
            })?;

        let types = distinct_types(&all);
        let pokemon: Vec<PokemonRecord> = filter.apply(&all).into_iter().cloned().collect();

        tracing::debug!(
            generation,
            total = all.len(),
            matched = pokemon.len(),
            "Pokédex listed"
        );

        Ok(PokedexPage::new(generation, all.len(), types, pokemon))
    }
}
