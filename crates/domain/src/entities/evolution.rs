//! Evolution chain types and the traversal that turns them into relatives.
//!
//! Two upstream shapes are supported:
//!
//! - **Flat links**: a record embeds one hop of pre-evolution and
//!   next-evolution references. [`flat_link_candidates`] takes their union.
//! - **Chain tree**: a species points at a tree rooted at the base form,
//!   fanning out through `evolves_to`. [`ChainLink::relatives_of`] walks it.
//!
//! Both produce [`EvolutionCandidate`]s in discovery order, never include the
//! queried root, and never repeat an id (first classification wins).

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::non_blank;
use crate::entities::pokemon::{DisplayData, EvolutionRef};
use crate::PokedexId;

/// Position of a relative with respect to the queried root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Ancestor,
    Descendant,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ancestor => write!(f, "ancestor"),
            Self::Descendant => write!(f, "descendant"),
        }
    }
}

/// One requirement gating an evolutionary step.
///
/// A step may carry several of these; all of them apply together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TransitionCondition {
    MinLevel(u32),
    Item(String),
    Trigger(String),
    TimeOfDay(String),
    MinFriendship(u32),
}

impl fmt::Display for TransitionCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinLevel(level) => write!(f, "Level {level}"),
            Self::Item(item) => write!(f, "Use {item}"),
            Self::Trigger(trigger) => write!(f, "Trigger: {trigger}"),
            Self::TimeOfDay(period) => write!(f, "During {period}"),
            Self::MinFriendship(value) => write!(f, "Friendship {value}+"),
        }
    }
}

/// A relative found during traversal, before enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionCandidate {
    pub id: PokedexId,
    /// Name known from the traversal step itself.
    pub name: String,
    pub relation: Relation,
    pub conditions: Vec<TransitionCondition>,
}

/// Which name wins when both the traversal and the enrichment source have one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NamePreference {
    /// Keep the traversal name; use the enrichment name only when it is blank.
    #[default]
    Chain,
    /// Use the enrichment name when one was fetched.
    Enrichment,
}

/// A resolved relative, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionNode {
    pub id: PokedexId,
    pub display_name: String,
    /// Absent when enrichment failed.
    pub image_url: Option<String>,
    pub relation: Relation,
    pub transition_conditions: Vec<TransitionCondition>,
}

impl EvolutionNode {
    /// Merge a candidate with the outcome of its enrichment fetch.
    ///
    /// The display name is never blank: when neither source has one the
    /// padded Pokédex number is used.
    pub fn merge(
        candidate: EvolutionCandidate,
        enrichment: Option<DisplayData>,
        preference: NamePreference,
    ) -> Self {
        let chain_name = non_blank(&candidate.name);
        let enriched_name = enrichment.as_ref().and_then(|d| non_blank(&d.name));

        let display_name = match preference {
            NamePreference::Chain => chain_name.or(enriched_name),
            NamePreference::Enrichment => enriched_name.or(chain_name),
        }
        .map(str::to_string)
        .unwrap_or_else(|| candidate.id.display_number());

        let image_url = enrichment.and_then(|d| d.image_url).filter(|url| non_blank(url).is_some());

        Self {
            id: candidate.id,
            display_name,
            image_url,
            relation: candidate.relation,
            transition_conditions: candidate.conditions,
        }
    }

    /// True when the node carries no image, i.e. enrichment did not succeed.
    pub fn is_degraded(&self) -> bool {
        self.image_url.is_none()
    }
}

/// Union of one-hop links, pre-evolutions first.
///
/// Links pointing back at `root` and repeated ids are dropped; the first
/// occurrence keeps its classification.
pub fn flat_link_candidates(
    root: PokedexId,
    pre_evolutions: &[EvolutionRef],
    next_evolutions: &[EvolutionRef],
) -> Vec<EvolutionCandidate> {
    let mut seen = HashSet::from([root]);
    let tagged = pre_evolutions
        .iter()
        .map(|link| (link, Relation::Ancestor))
        .chain(next_evolutions.iter().map(|link| (link, Relation::Descendant)));

    tagged
        .filter(|(link, _)| seen.insert(link.id))
        .map(|(link, relation)| EvolutionCandidate {
            id: link.id,
            name: link.name.clone(),
            relation,
            conditions: Vec::new(),
        })
        .collect()
}

/// Species reference inside a chain tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRef {
    pub id: PokedexId,
    pub name: String,
}

impl SpeciesRef {
    pub fn new(id: PokedexId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// One node of an evolution chain tree.
///
/// `conditions` describe the edge leading into this node; the tree root has
/// no incoming edge so its conditions are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLink {
    pub species: SpeciesRef,
    pub conditions: Vec<TransitionCondition>,
    pub evolves_to: Vec<ChainLink>,
}

impl ChainLink {
    pub fn new(species: SpeciesRef) -> Self {
        Self {
            species,
            conditions: Vec::new(),
            evolves_to: Vec::new(),
        }
    }

    pub fn with_conditions(mut self, conditions: Vec<TransitionCondition>) -> Self {
        self.conditions = conditions;
        self
    }

    pub fn with_evolution(mut self, child: ChainLink) -> Self {
        self.evolves_to.push(child);
        self
    }

    /// Ids on the path from the tree root down to the first node for
    /// `target`, excluding the target itself. `None` if `target` is absent.
    pub fn path_to(&self, target: PokedexId) -> Option<Vec<PokedexId>> {
        let mut path = Vec::new();
        let mut stack = vec![(self, 0usize)];

        while let Some((link, depth)) = stack.pop() {
            path.truncate(depth);
            if link.species.id == target {
                return Some(path);
            }
            path.push(link.species.id);
            for child in link.evolves_to.iter().rev() {
                stack.push((child, depth + 1));
            }
        }

        None
    }

    /// Every relative of `root` in depth-first pre-order.
    ///
    /// Strict tree ancestors of the root are [`Relation::Ancestor`]; every
    /// other node is [`Relation::Descendant`]. When `root` is not in the tree
    /// at all, nothing is an ancestor.
    pub fn relatives_of(&self, root: PokedexId) -> Vec<EvolutionCandidate> {
        let ancestors: HashSet<PokedexId> = self
            .path_to(root)
            .unwrap_or_default()
            .into_iter()
            .collect();

        let mut seen = HashSet::from([root]);
        let mut candidates = Vec::new();
        let mut stack = vec![(self, 0usize)];

        while let Some((link, depth)) = stack.pop() {
            let id = link.species.id;
            if seen.insert(id) {
                let relation = if ancestors.contains(&id) {
                    Relation::Ancestor
                } else {
                    Relation::Descendant
                };
                let conditions = if depth == 0 {
                    Vec::new()
                } else {
                    link.conditions.clone()
                };
                candidates.push(EvolutionCandidate {
                    id,
                    name: link.species.name.clone(),
                    relation,
                    conditions,
                });
            }
            for child in link.evolves_to.iter().rev() {
                stack.push((child, depth + 1));
            }
        }

        candidates
    }
}
