//! Pokédex domain: identifiers, records, evolution chains and the catalog
//! filter. Pure types and algorithms only; all I/O lives in the engine.

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{
    flat_link_candidates, BaseStats, ChainLink, DisplayData, EvolutionCandidate, EvolutionNode,
    EvolutionRef, NamePreference, PokemonRecord, PokemonType, Relation, SpeciesRecord, SpeciesRef,
    TransitionCondition,
};
pub use error::DomainError;
pub use ids::PokedexId;
pub use value_objects::{distinct_types, PokedexFilter};
