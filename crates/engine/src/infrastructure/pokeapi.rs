//! PokeAPI client
//!
//! Species, evolution chain trees and display data from
//! `https://pokeapi.co/api/v2`. Implements `SpeciesPort` and `EnrichmentPort`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use pokedex_domain::common::{non_blank, non_blank_owned};
use pokedex_domain::{
    ChainLink, DisplayData, PokedexId, SpeciesRecord, SpeciesRef, TransitionCondition,
};

use crate::infrastructure::ports::{EnrichmentPort, SourceError, SpeciesPort};

/// Default PokeAPI base URL.
pub const DEFAULT_POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Client for PokeAPI
#[derive(Clone)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl PokeApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        resource: &'static str,
        id: impl ToString,
    ) -> Result<T, SourceError> {
        tracing::debug!(url = %url, "PokeAPI request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(SourceError::unavailable)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::not_found(resource, id));
        }
        if !status.is_success() {
            return Err(SourceError::unavailable(format!("HTTP {status} from {url}")));
        }

        response
            .json()
            .await
            .map_err(SourceError::invalid_response)
    }
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_POKEAPI_BASE_URL, Duration::from_secs(15))
    }
}

#[async_trait]
impl SpeciesPort for PokeApiClient {
    async fn get_species(&self, id: PokedexId) -> Result<SpeciesRecord, SourceError> {
        let url = format!("{}/pokemon-species/{}", self.base_url, id);
        let dto: ApiSpecies = self.get_json(&url, "Species", id).await?;
        convert_species(dto)
    }

    async fn get_evolution_chain(&self, url: &str) -> Result<ChainLink, SourceError> {
        let dto: ApiEvolutionChain = self.get_json(url, "Evolution chain", url).await?;
        convert_chain(dto.chain)
    }
}

#[async_trait]
impl EnrichmentPort for PokeApiClient {
    async fn get_display(&self, id: PokedexId) -> Result<DisplayData, SourceError> {
        let url = format!("{}/pokemon/{}", self.base_url, id);
        let dto: ApiPokemon = self.get_json(&url, "Pokemon", id).await?;
        Ok(convert_display(dto))
    }
}

/// Species id from a resource URL such as `.../pokemon-species/133/`.
pub fn species_id_from_url(url: &str) -> Option<PokedexId> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .and_then(|segment| segment.parse().ok())
}

fn convert_species(dto: ApiSpecies) -> Result<SpeciesRecord, SourceError> {
    let id = PokedexId::new(dto.id).map_err(SourceError::invalid_response)?;
    Ok(SpeciesRecord {
        id,
        name: dto.name,
        evolution_chain_url: dto
            .evolution_chain
            .and_then(|r| non_blank(&r.url).map(str::to_string)),
    })
}

fn convert_chain(node: ApiChainNode) -> Result<ChainLink, SourceError> {
    let id = species_id_from_url(&node.species.url).ok_or_else(|| {
        SourceError::invalid_response(format!(
            "Unparseable species URL: {}",
            node.species.url
        ))
    })?;

    let mut link = ChainLink::new(SpeciesRef::new(id, node.species.name))
        .with_conditions(flatten_details(&node.evolution_details));
    for child in node.evolves_to {
        link = link.with_evolution(convert_chain(child)?);
    }
    Ok(link)
}

/// Flatten every detail entry into conditions, dropping exact repeats.
fn flatten_details(details: &[ApiEvolutionDetail]) -> Vec<TransitionCondition> {
    let mut conditions: Vec<TransitionCondition> = Vec::new();

    for detail in details {
        let entry = [
            detail
                .trigger
                .as_ref()
                .and_then(|t| non_blank(&t.name))
                .map(|name| TransitionCondition::Trigger(name.to_string())),
            detail.min_level.map(TransitionCondition::MinLevel),
            detail
                .item
                .as_ref()
                .and_then(|i| non_blank(&i.name))
                .map(|name| TransitionCondition::Item(name.to_string())),
            detail
                .time_of_day
                .as_deref()
                .and_then(non_blank)
                .map(|period| TransitionCondition::TimeOfDay(period.to_string())),
            detail.min_happiness.map(TransitionCondition::MinFriendship),
        ];

        for condition in entry.into_iter().flatten() {
            if !conditions.contains(&condition) {
                conditions.push(condition);
            }
        }
    }

    conditions
}

fn convert_display(dto: ApiPokemon) -> DisplayData {
    let artwork = dto
        .sprites
        .other
        .and_then(|o| o.official_artwork)
        .and_then(|a| a.front_default);
    let image_url =
        non_blank_owned(artwork).or_else(|| non_blank_owned(dto.sprites.front_default));

    DisplayData {
        name: dto.name,
        image_url,
    }
}

// =============================================================================
// PokeAPI wire types
// =============================================================================

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
    #[serde(default)]
    url: String,
}

#[derive(Debug, Deserialize)]
struct UrlResource {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ApiSpecies {
    id: u32,
    name: String,
    evolution_chain: Option<UrlResource>,
}

#[derive(Debug, Deserialize)]
struct ApiEvolutionChain {
    chain: ApiChainNode,
}

#[derive(Debug, Deserialize)]
struct ApiChainNode {
    species: NamedResource,
    #[serde(default)]
    evolution_details: Vec<ApiEvolutionDetail>,
    #[serde(default)]
    evolves_to: Vec<ApiChainNode>,
}

#[derive(Debug, Deserialize)]
struct ApiEvolutionDetail {
    trigger: Option<NamedResource>,
    min_level: Option<u32>,
    item: Option<NamedResource>,
    time_of_day: Option<String>,
    min_happiness: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ApiPokemon {
    name: String,
    #[serde(default)]
    sprites: ApiSprites,
}

#[derive(Debug, Default, Deserialize)]
struct ApiSprites {
    front_default: Option<String>,
    other: Option<ApiOtherSprites>,
}

#[derive(Debug, Deserialize)]
struct ApiOtherSprites {
    #[serde(rename = "official-artwork")]
    official_artwork: Option<ApiArtwork>,
}

#[derive(Debug, Deserialize)]
struct ApiArtwork {
    front_default: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const EEVEE_CHAIN: &str = r#"{
        "baby_trigger_item": null,
        "id": 67,
        "chain": {
            "is_baby": false,
            "species": {"name": "eevee", "url": "https://pokeapi.co/api/v2/pokemon-species/133/"},
            "evolution_details": [],
            "evolves_to": [
                {
                    "species": {"name": "vaporeon", "url": "https://pokeapi.co/api/v2/pokemon-species/134/"},
                    "evolution_details": [{
                        "item": {"name": "water-stone", "url": "https://pokeapi.co/api/v2/item/84/"},
                        "min_level": null,
                        "min_happiness": null,
                        "time_of_day": "",
                        "trigger": {"name": "use-item", "url": "https://pokeapi.co/api/v2/evolution-trigger/3/"}
                    }],
                    "evolves_to": []
                },
                {
                    "species": {"name": "espeon", "url": "https://pokeapi.co/api/v2/pokemon-species/196/"},
                    "evolution_details": [
                        {
                            "item": null,
                            "min_level": null,
                            "min_happiness": 160,
                            "time_of_day": "day",
                            "trigger": {"name": "level-up", "url": "https://pokeapi.co/api/v2/evolution-trigger/1/"}
                        },
                        {
                            "item": null,
                            "min_level": null,
                            "min_happiness": 160,
                            "time_of_day": "day",
                            "trigger": {"name": "level-up", "url": "https://pokeapi.co/api/v2/evolution-trigger/1/"}
                        }
                    ],
                    "evolves_to": []
                }
            ]
        }
    }"#;

    fn id(value: u32) -> PokedexId {
        PokedexId::new(value).expect("valid id")
    }

    #[test]
    fn species_id_is_parsed_from_resource_url() {
        assert_eq!(
            species_id_from_url("https://pokeapi.co/api/v2/pokemon-species/133/"),
            Some(id(133))
        );
        assert_eq!(
            species_id_from_url("https://pokeapi.co/api/v2/pokemon-species/25"),
            Some(id(25))
        );
        assert_eq!(species_id_from_url("https://pokeapi.co/api/v2/pokemon-species/"), None);
        assert_eq!(species_id_from_url("https://pokeapi.co/api/v2/pokemon-species/0/"), None);
    }

    #[test]
    fn converts_branching_chain() {
        let dto: ApiEvolutionChain = serde_json::from_str(EEVEE_CHAIN).expect("fixture");
        let chain = convert_chain(dto.chain).expect("convert");

        assert_eq!(chain.species.id, id(133));
        assert!(chain.conditions.is_empty());
        assert_eq!(chain.evolves_to.len(), 2);

        let vaporeon = &chain.evolves_to[0];
        assert_eq!(vaporeon.species.name, "vaporeon");
        assert_eq!(
            vaporeon.conditions,
            vec![
                TransitionCondition::Trigger("use-item".into()),
                TransitionCondition::Item("water-stone".into()),
            ]
        );
    }

    #[test]
    fn repeated_detail_entries_are_collapsed() {
        let dto: ApiEvolutionChain = serde_json::from_str(EEVEE_CHAIN).expect("fixture");
        let chain = convert_chain(dto.chain).expect("convert");

        assert_eq!(
            chain.evolves_to[1].conditions,
            vec![
                TransitionCondition::Trigger("level-up".into()),
                TransitionCondition::TimeOfDay("day".into()),
                TransitionCondition::MinFriendship(160),
            ]
        );
    }

    #[test]
    fn converted_chain_walks_like_any_other_tree() {
        let dto: ApiEvolutionChain = serde_json::from_str(EEVEE_CHAIN).expect("fixture");
        let chain = convert_chain(dto.chain).expect("convert");

        let relatives = chain.relatives_of(id(196));
        let ids: Vec<u32> = relatives.iter().map(|c| c.id.get()).collect();
        assert_eq!(ids, vec![133, 134]);
    }

    #[test]
    fn bad_species_url_is_an_invalid_response() {
        let node: ApiChainNode = serde_json::from_str(
            r#"{"species": {"name": "eevee", "url": "not-a-url"}, "evolves_to": []}"#,
        )
        .expect("fixture");
        assert!(matches!(
            convert_chain(node),
            Err(SourceError::InvalidResponse(_))
        ));
    }

    #[test]
    fn species_without_chain_has_no_url() {
        let dto: ApiSpecies =
            serde_json::from_str(r#"{"id": 132, "name": "ditto", "evolution_chain": null}"#)
                .expect("fixture");
        let species = convert_species(dto).expect("convert");
        assert_eq!(species.id, id(132));
        assert_eq!(species.evolution_chain_url, None);

        let dto: ApiSpecies = serde_json::from_str(
            r#"{"id": 133, "name": "eevee", "evolution_chain": {"url": "https://pokeapi.co/api/v2/evolution-chain/67/"}}"#,
        )
        .expect("fixture");
        assert_eq!(
            convert_species(dto).expect("convert").evolution_chain_url.as_deref(),
            Some("https://pokeapi.co/api/v2/evolution-chain/67/")
        );
    }

    #[test]
    fn display_prefers_official_artwork() {
        let dto: ApiPokemon = serde_json::from_str(
            r#"{
                "name": "pikachu",
                "sprites": {
                    "front_default": "https://img/sprite/25.png",
                    "other": {"official-artwork": {"front_default": "https://img/artwork/25.png"}}
                }
            }"#,
        )
        .expect("fixture");
        let display = convert_display(dto);
        assert_eq!(display.name, "pikachu");
        assert_eq!(display.image_url.as_deref(), Some("https://img/artwork/25.png"));
    }

    #[test]
    fn display_falls_back_to_front_sprite() {
        let dto: ApiPokemon = serde_json::from_str(
            r#"{
                "name": "pikachu",
                "sprites": {
                    "front_default": "https://img/sprite/25.png",
                    "other": {"official-artwork": {"front_default": null}}
                }
            }"#,
        )
        .expect("fixture");
        assert_eq!(
            convert_display(dto).image_url.as_deref(),
            Some("https://img/sprite/25.png")
        );

        let bare: ApiPokemon = serde_json::from_str(r#"{"name": "pikachu"}"#).expect("fixture");
        assert_eq!(convert_display(bare).image_url, None);
    }
}
