//! Infrastructure - External dependency implementations.
//!
//! Port traits live in `ports`; everything else here is an adapter
//! or configuration.

pub mod config;
pub mod pokeapi;
pub mod pokebuild;
pub mod ports;
