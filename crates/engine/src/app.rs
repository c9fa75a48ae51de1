//! Application state and composition.

use std::sync::Arc;

use pokedex_domain::NamePreference;

use crate::infrastructure::{
    config::{EngineConfig, EnrichmentSourceKind, EvolutionSourceKind},
    pokeapi::PokeApiClient,
    pokebuild::PokeBuildClient,
    ports::{EnrichmentPort, PokemonDataPort},
};
use crate::use_cases::evolution::{ChainSource, ChainTreeSource, EvolutionResolver, FlatLinkSource};
use crate::use_cases::pokedex::{GetPokemonDetail, ListPokedex, PokedexUseCases};

/// Main application state.
///
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
    /// Generation listed when a request does not name one.
    pub default_generation: u8,
}

/// Container for all use cases.
pub struct UseCases {
    pub evolution: Arc<EvolutionResolver>,
    pub pokedex: PokedexUseCases,
}

impl App {
    /// Wire use cases over the given ports.
    pub fn new(
        primary: Arc<dyn PokemonDataPort>,
        chain_source: Arc<dyn ChainSource>,
        enrichment: Arc<dyn EnrichmentPort>,
        name_preference: NamePreference,
        default_generation: u8,
    ) -> Self {
        let evolution = Arc::new(
            EvolutionResolver::new(primary.clone(), chain_source, enrichment)
                .with_name_preference(name_preference),
        );

        let pokedex = PokedexUseCases::new(
            Arc::new(ListPokedex::new(primary.clone())),
            Arc::new(GetPokemonDetail::new(primary, evolution.clone())),
        );

        Self {
            use_cases: UseCases { evolution, pokedex },
            default_generation,
        }
    }

    /// Build the HTTP clients named by `config` and wire them up.
    pub fn from_config(config: &EngineConfig) -> Self {
        let pokebuild = Arc::new(PokeBuildClient::new(
            &config.pokebuild_base_url,
            config.http_timeout,
        ));
        let pokeapi = Arc::new(PokeApiClient::new(
            &config.pokeapi_base_url,
            config.http_timeout,
        ));

        let chain_source: Arc<dyn ChainSource> = match config.evolution_source {
            EvolutionSourceKind::Flat => Arc::new(FlatLinkSource::new()),
            EvolutionSourceKind::Tree => Arc::new(ChainTreeSource::new(pokeapi.clone())),
        };

        // The primary source's names win whenever it also serves enrichment.
        let enrichment: Arc<dyn EnrichmentPort> = match config.enrichment_source {
            EnrichmentSourceKind::PokeBuild => pokebuild.clone(),
            EnrichmentSourceKind::PokeApi => pokeapi,
        };
        let name_preference = match config.enrichment_source {
            EnrichmentSourceKind::PokeBuild => NamePreference::Enrichment,
            EnrichmentSourceKind::PokeApi => NamePreference::Chain,
        };

        tracing::info!(
            evolution_source = %config.evolution_source,
            enrichment_source = %config.enrichment_source,
            "Data sources configured"
        );

        Self::new(
            pokebuild,
            chain_source,
            enrichment,
            name_preference,
            config.default_generation,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_keeps_default_generation() {
        let config = EngineConfig {
            evolution_source: EvolutionSourceKind::Tree,
            enrichment_source: EnrichmentSourceKind::PokeApi,
            default_generation: 3,
            ..EngineConfig::default()
        };

        let app = App::from_config(&config);
        assert_eq!(app.default_generation, 3);
    }
}
