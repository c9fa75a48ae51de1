//! Pokémon records as returned by the upstream data sources.

use serde::{Deserialize, Serialize};

use crate::PokedexId;

/// A full record from the primary data source.
///
/// # Simple Data Struct
///
/// Carries no invariants beyond those of its field types. The two link
/// lists are only populated by sources that embed one-hop evolution links
/// in the record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub id: PokedexId,
    pub name: String,
    pub image_url: String,
    pub stats: BaseStats,
    pub types: Vec<PokemonType>,
    pub generation: Option<u8>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub pre_evolutions: Vec<EvolutionRef>,
    #[serde(default)]
    pub next_evolutions: Vec<EvolutionRef>,
}

impl PokemonRecord {
    pub fn new(id: PokedexId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image_url: String::new(),
            stats: BaseStats::default(),
            types: Vec::new(),
            generation: None,
            height: None,
            weight: None,
            category: None,
            pre_evolutions: Vec::new(),
            next_evolutions: Vec::new(),
        }
    }

    pub fn with_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = names.into_iter().map(PokemonType::new).collect();
        self
    }

    pub fn with_evolution_links(
        mut self,
        pre_evolutions: Vec<EvolutionRef>,
        next_evolutions: Vec<EvolutionRef>,
    ) -> Self {
        self.pre_evolutions = pre_evolutions;
        self.next_evolutions = next_evolutions;
        self
    }

    /// Exact match against any of the record's type names.
    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.iter().any(|t| t.name == type_name)
    }

    /// Case-insensitive substring match on the display name.
    pub fn matches_name(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// The six base stats of a species.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    pub name: String,
    pub image_url: Option<String>,
}

impl PokemonType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_url: None,
        }
    }
}

/// A one-hop evolution link embedded in a primary record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionRef {
    pub id: PokedexId,
    pub name: String,
}

impl EvolutionRef {
    pub fn new(id: PokedexId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Display payload fetched from the enrichment source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayData {
    pub name: String,
    pub image_url: Option<String>,
}

/// Species resource pointing at the evolution chain tree it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    pub id: PokedexId,
    pub name: String,
    pub evolution_chain_url: Option<String>,
}
