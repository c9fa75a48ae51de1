use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// National Pokédex number.
///
/// Always positive. Both upstream APIs key every resource by this number,
/// so it doubles as the identity used for deduplication during evolution
/// resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PokedexId(u32);

impl PokedexId {
    /// Create a validated id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when `value` is zero.
    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value == 0 {
            return Err(DomainError::validation("Pokédex id must be positive"));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Zero-padded Pokédex number, e.g. `#004`.
    pub fn display_number(self) -> String {
        format!("#{:03}", self.0)
    }
}

impl fmt::Display for PokedexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for PokedexId {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PokedexId> for u32 {
    fn from(value: PokedexId) -> Self {
        value.0
    }
}

impl FromStr for PokedexId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::parse(format!("Invalid Pokédex id: {s}")))?;
        Self::new(value)
    }
}
