//! Value objects.

pub mod catalog_filter;

pub use catalog_filter::{distinct_types, PokedexFilter};
