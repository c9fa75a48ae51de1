//! Evolution use cases.
//!
//! Resolves the relatives of a Pokémon from either upstream shape and
//! enriches them for display.

mod error;
mod resolve;
mod source;

pub use error::ResolveError;
pub use resolve::EvolutionResolver;
pub use source::{ChainSource, ChainTreeSource, FlatLinkSource};

#[cfg(test)]
pub use source::MockChainSource;
