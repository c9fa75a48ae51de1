//! Pokédex Engine library.
//!
//! Server side of the Pokédex: upstream API adapters, evolution chain
//! resolution and the JSON API.
//!
//! ## Structure
//!
//! - `use_cases/` - Evolution resolution and Pokédex listing/detail
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
