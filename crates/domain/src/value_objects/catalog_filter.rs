//! Pokédex listing filter.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::common::non_blank;
use crate::entities::PokemonRecord;

/// Search criteria for the Pokédex grid.
///
/// Every criterion is optional and blank strings count as unset. The set
/// criteria are combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokedexFilter {
    /// Case-insensitive substring of the name.
    pub name: Option<String>,
    /// Exact type name.
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    /// Substring of the decimal id, so `"1"` matches 1, 10 and 151.
    pub id: Option<String>,
}

impl PokedexFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name_term().is_none() && self.type_term().is_none() && self.id_term().is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, record: &PokemonRecord) -> bool {
        let name_ok = self.name_term().map_or(true, |n| record.matches_name(n));
        let type_ok = self.type_term().map_or(true, |t| record.has_type(t));
        let id_ok = self
            .id_term()
            .map_or(true, |i| record.id.get().to_string().contains(i));
        name_ok && type_ok && id_ok
    }

    /// Matching records, in input order.
    pub fn apply<'a>(&self, records: &'a [PokemonRecord]) -> Vec<&'a PokemonRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    fn name_term(&self) -> Option<&str> {
        self.name.as_deref().and_then(non_blank)
    }

    fn type_term(&self) -> Option<&str> {
        self.type_name.as_deref().and_then(non_blank)
    }

    fn id_term(&self) -> Option<&str> {
        self.id.as_deref().and_then(non_blank)
    }
}

/// Sorted, de-duplicated type names across `records`.
pub fn distinct_types(records: &[PokemonRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|r| r.types.iter().map(|t| t.name.clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
