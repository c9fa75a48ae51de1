//! Pokémon detail use case.
//!
//! One root fetch serves both the detail panel and the evolution tiles.

use std::sync::Arc;

use pokedex_domain::{EvolutionNode, PokedexId, PokemonRecord};
use serde::Serialize;

use crate::infrastructure::ports::PokemonDataPort;
use crate::use_cases::evolution::{EvolutionResolver, ResolveError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PokemonDetail {
    pub pokemon: PokemonRecord,
    pub evolutions: Vec<EvolutionNode>,
}

pub struct GetPokemonDetail {
    primary: Arc<dyn PokemonDataPort>,
    resolver: Arc<EvolutionResolver>,
}

impl GetPokemonDetail {
    pub fn new(primary: Arc<dyn PokemonDataPort>, resolver: Arc<EvolutionResolver>) -> Self {
        Self { primary, resolver }
    }

    pub async fn execute(&self, id: PokedexId) -> Result<PokemonDetail, ResolveError> {
        let pokemon = self
            .primary
            .get_pokemon(id)
            .await
            .map_err(|e| ResolveError::from_root_fetch(id, e))?;

        let evolutions = self.resolver.resolve_for(&pokemon).await;

        Ok(PokemonDetail {
            pokemon,
            evolutions,
        })
    }
}
