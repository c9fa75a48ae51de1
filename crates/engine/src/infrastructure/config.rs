//! Engine configuration read from the environment.
//!
//! Every setting has a default. A value that is present but unparseable is
//! logged and replaced by the default rather than aborting startup.

use std::time::Duration;

use crate::infrastructure::pokeapi::DEFAULT_POKEAPI_BASE_URL;
use crate::infrastructure::pokebuild::DEFAULT_POKEBUILD_BASE_URL;

// ============================================================================
// Source selection
// ============================================================================

/// Where evolution candidates come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EvolutionSourceKind {
    /// One-hop links embedded in the primary record.
    #[default]
    Flat,
    /// Species -> chain tree lookups.
    Tree,
}

impl std::fmt::Display for EvolutionSourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvolutionSourceKind::Flat => write!(f, "flat"),
            EvolutionSourceKind::Tree => write!(f, "tree"),
        }
    }
}

impl std::str::FromStr for EvolutionSourceKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" | "links" | "pokebuild" => Ok(EvolutionSourceKind::Flat),
            "tree" | "chain" | "pokeapi" => Ok(EvolutionSourceKind::Tree),
            _ => Err(()),
        }
    }
}

/// Which API serves evolution tile names and images.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnrichmentSourceKind {
    #[default]
    PokeBuild,
    PokeApi,
}

impl std::fmt::Display for EnrichmentSourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrichmentSourceKind::PokeBuild => write!(f, "pokebuild"),
            EnrichmentSourceKind::PokeApi => write!(f, "pokeapi"),
        }
    }
}

impl std::str::FromStr for EnrichmentSourceKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pokebuild" | "primary" => Ok(EnrichmentSourceKind::PokeBuild),
            "pokeapi" => Ok(EnrichmentSourceKind::PokeApi),
            _ => Err(()),
        }
    }
}

// ============================================================================
// Engine configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub pokebuild_base_url: String,
    pub pokeapi_base_url: String,
    pub evolution_source: EvolutionSourceKind,
    pub enrichment_source: EnrichmentSourceKind,
    pub http_timeout: Duration,
    pub default_generation: u8,
    pub server_host: String,
    pub server_port: u16,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pokebuild_base_url: DEFAULT_POKEBUILD_BASE_URL.to_string(),
            pokeapi_base_url: DEFAULT_POKEAPI_BASE_URL.to_string(),
            evolution_source: EvolutionSourceKind::default(),
            enrichment_source: EnrichmentSourceKind::default(),
            http_timeout: Duration::from_secs(15),
            default_generation: 1,
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        Self {
            pokebuild_base_url: get("POKEBUILD_BASE_URL").unwrap_or(defaults.pokebuild_base_url),
            pokeapi_base_url: get("POKEAPI_BASE_URL").unwrap_or(defaults.pokeapi_base_url),
            evolution_source: parse_or_default(
                "EVOLUTION_SOURCE",
                get("EVOLUTION_SOURCE"),
                defaults.evolution_source,
            ),
            enrichment_source: parse_or_default(
                "ENRICHMENT_SOURCE",
                get("ENRICHMENT_SOURCE"),
                defaults.enrichment_source,
            ),
            http_timeout: Duration::from_secs(parse_or_default(
                "HTTP_TIMEOUT_SECS",
                get("HTTP_TIMEOUT_SECS"),
                defaults.http_timeout.as_secs(),
            )),
            default_generation: parse_or_default(
                "DEFAULT_GENERATION",
                get("DEFAULT_GENERATION"),
                defaults.default_generation,
            ),
            server_host: get("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_or_default(
                "SERVER_PORT",
                get("SERVER_PORT").or_else(|| get("PORT")),
                defaults.server_port,
            ),
        }
    }
}

fn parse_or_default<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(key, value = %raw, default = %default, "Unparseable setting, using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> EngineConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EngineConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config_from(&[]), EngineConfig::default());
    }

    #[test]
    fn reads_every_setting() {
        let config = config_from(&[
            ("POKEBUILD_BASE_URL", "http://localhost:9000/api/v1"),
            ("POKEAPI_BASE_URL", "http://localhost:9001/api/v2"),
            ("EVOLUTION_SOURCE", "tree"),
            ("ENRICHMENT_SOURCE", "PokeAPI"),
            ("HTTP_TIMEOUT_SECS", "5"),
            ("DEFAULT_GENERATION", "2"),
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "8080"),
        ]);

        assert_eq!(config.pokebuild_base_url, "http://localhost:9000/api/v1");
        assert_eq!(config.pokeapi_base_url, "http://localhost:9001/api/v2");
        assert_eq!(config.evolution_source, EvolutionSourceKind::Tree);
        assert_eq!(config.enrichment_source, EnrichmentSourceKind::PokeApi);
        assert_eq!(config.http_timeout, Duration::from_secs(5));
        assert_eq!(config.default_generation, 2);
        assert_eq!(config.server_host, "127.0.0.1");
        assert_eq!(config.server_port, 8080);
    }

    #[test]
    fn unparseable_values_fall_back_to_defaults() {
        let config = config_from(&[
            ("EVOLUTION_SOURCE", "graph"),
            ("HTTP_TIMEOUT_SECS", "soon"),
            ("DEFAULT_GENERATION", "300"),
            ("SERVER_PORT", "-1"),
        ]);

        assert_eq!(config.evolution_source, EvolutionSourceKind::Flat);
        assert_eq!(config.http_timeout, Duration::from_secs(15));
        assert_eq!(config.default_generation, 1);
        assert_eq!(config.server_port, 3000);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config_from(&[("POKEBUILD_BASE_URL", "   "), ("SERVER_HOST", "")]);
        assert_eq!(config.pokebuild_base_url, DEFAULT_POKEBUILD_BASE_URL);
        assert_eq!(config.server_host, "0.0.0.0");
    }

    #[test]
    fn port_falls_back_to_port_variable() {
        let config = config_from(&[("PORT", "4000")]);
        assert_eq!(config.server_port, 4000);
    }

    #[test]
    fn source_kinds_parse_aliases() {
        assert_eq!("Chain".parse(), Ok(EvolutionSourceKind::Tree));
        assert_eq!(" links ".parse(), Ok(EvolutionSourceKind::Flat));
        assert_eq!("primary".parse(), Ok(EnrichmentSourceKind::PokeBuild));
        assert!("other".parse::<EnrichmentSourceKind>().is_err());
    }
}
