//! Pokédex use cases.
//!
//! Generation listing with client-side filtering, and the detail view that
//! pairs a record with its resolved relatives.

mod detail;
mod list;

use std::sync::Arc;

pub use detail::{GetPokemonDetail, PokemonDetail};
pub use list::{ListPokedex, PokedexError, PokedexPage};

/// Container for Pokédex use cases.
pub struct PokedexUseCases {
    pub list: Arc<ListPokedex>,
    pub detail: Arc<GetPokemonDetail>,
}

impl PokedexUseCases {
    pub fn new(list: Arc<ListPokedex>, detail: Arc<GetPokemonDetail>) -> Self {
        Self { list, detail }
    }
}
