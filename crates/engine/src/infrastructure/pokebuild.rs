//! PokéBuild API client
//!
//! Primary record source. Implements `PokemonDataPort` and `EnrichmentPort`
//! against `https://pokebuildapi.fr/api/v1`. Records embed one hop of
//! evolution links (`apiPreEvolution` / `apiEvolutions`).

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use pokedex_domain::common::{non_blank, non_blank_owned};
use pokedex_domain::{
    BaseStats, DisplayData, EvolutionRef, PokedexId, PokemonRecord, PokemonType,
};

use crate::infrastructure::ports::{EnrichmentPort, PokemonDataPort, SourceError};

/// Default PokéBuild base URL.
pub const DEFAULT_POKEBUILD_BASE_URL: &str = "https://pokebuildapi.fr/api/v1";

/// Client for the PokéBuild REST API
#[derive(Clone)]
pub struct PokeBuildClient {
    client: Client,
    base_url: String,
}

impl PokeBuildClient {
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
        path: &str,
        resource: &'static str,
        id: impl ToString,
    ) -> Result<T, SourceError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(url = %url, "PokéBuild request");

        let response = self
            .client
            .get(&url)
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

impl Default for PokeBuildClient {
    fn default() -> Self {
        Self::new(DEFAULT_POKEBUILD_BASE_URL, Duration::from_secs(15))
    }
}

#[async_trait]
impl PokemonDataPort for PokeBuildClient {
    async fn get_pokemon(&self, id: PokedexId) -> Result<PokemonRecord, SourceError> {
        let dto: ApiPokemon = self
            .get_json(&format!("/pokemon/{id}"), "Pokemon", id)
            .await?;
        convert_pokemon(dto)
    }

    async fn list_generation(&self, generation: u8) -> Result<Vec<PokemonRecord>, SourceError> {
        let dtos: Vec<ApiPokemon> = self
            .get_json(
                &format!("/pokemon/generation/{generation}"),
                "Generation",
                generation,
            )
            .await?;
        dtos.into_iter().map(convert_pokemon).collect()
    }
}

#[async_trait]
impl EnrichmentPort for PokeBuildClient {
    async fn get_display(&self, id: PokedexId) -> Result<DisplayData, SourceError> {
        let dto: ApiPokemon = self
            .get_json(&format!("/pokemon/{id}"), "Pokemon", id)
            .await?;
        Ok(DisplayData {
            name: dto.name,
            image_url: non_blank(&dto.image).map(str::to_string),
        })
    }
}

fn convert_pokemon(dto: ApiPokemon) -> Result<PokemonRecord, SourceError> {
    let id = PokedexId::new(dto.pokedex_id).map_err(SourceError::invalid_response)?;

    let pre_evolutions = match dto.api_pre_evolution {
        Some(PreEvolutionField::Many(links)) => convert_links(links),
        Some(PreEvolutionField::One(link)) => convert_links(vec![link]),
        // "none" marker or missing
        Some(PreEvolutionField::Marker(_)) | None => Vec::new(),
    };
    let next_evolutions = convert_links(dto.api_evolutions.unwrap_or_default());

    Ok(PokemonRecord {
        id,
        name: dto.name,
        image_url: dto.image,
        stats: dto.stats.unwrap_or_default().into(),
        types: dto
            .api_types
            .unwrap_or_default()
            .into_iter()
            .map(|t| PokemonType {
                name: t.name,
                image_url: non_blank_owned(t.image),
            })
            .collect(),
        generation: dto.api_generation,
        height: dto.height.and_then(value_to_text),
        weight: dto.weight.and_then(value_to_text),
        category: dto.category.and_then(value_to_text),
        pre_evolutions,
        next_evolutions,
    })
}

/// Links with a zero id are dropped rather than failing the whole record.
fn convert_links(links: Vec<ApiLink>) -> Vec<EvolutionRef> {
    links
        .into_iter()
        .filter_map(|link| {
            PokedexId::new(link.pokedex_id)
                .ok()
                .map(|id| EvolutionRef::new(id, link.name))
        })
        .collect()
}

fn value_to_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => non_blank_owned(Some(s)),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// =============================================================================
// PokéBuild wire types
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiPokemon {
    pokedex_id: u32,
    name: String,
    #[serde(default)]
    image: String,
    stats: Option<ApiStats>,
    api_types: Option<Vec<ApiType>>,
    api_generation: Option<u8>,
    api_evolutions: Option<Vec<ApiLink>>,
    api_pre_evolution: Option<PreEvolutionField>,
    height: Option<serde_json::Value>,
    weight: Option<serde_json::Value>,
    category: Option<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
struct ApiStats {
    #[serde(rename = "HP", default)]
    hp: u32,
    #[serde(default)]
    attack: u32,
    #[serde(default)]
    defense: u32,
    #[serde(default)]
    special_attack: u32,
    #[serde(default)]
    special_defense: u32,
    #[serde(default)]
    speed: u32,
}

impl From<ApiStats> for BaseStats {
    fn from(stats: ApiStats) -> Self {
        Self {
            hp: stats.hp,
            attack: stats.attack,
            defense: stats.defense,
            special_attack: stats.special_attack,
            special_defense: stats.special_defense,
            speed: stats.speed,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ApiType {
    name: String,
    image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiLink {
    name: String,
    // The pre-evolution object is served with a misspelt key.
    #[serde(rename = "pokedexId", alias = "pokedexIdd")]
    pokedex_id: u32,
}

/// `apiPreEvolution` is a list, a single object, or the string `"none"`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PreEvolutionField {
    Many(Vec<ApiLink>),
    One(ApiLink),
    Marker(String),
}
