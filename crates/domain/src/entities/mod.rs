//! Domain entities.

pub mod evolution;
pub mod pokemon;

pub use evolution::{
    flat_link_candidates, ChainLink, EvolutionCandidate, EvolutionNode, NamePreference, Relation,
    SpeciesRef, TransitionCondition,
};
pub use pokemon::{BaseStats, DisplayData, EvolutionRef, PokemonRecord, PokemonType, SpeciesRecord};
