//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.

pub mod evolution;
pub mod pokedex;

pub use evolution::EvolutionResolver;
pub use pokedex::PokedexUseCases;
