//! Team data model shared by the parser and formatter

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One structured Pokemon entry from a team export.
///
/// Spread maps keep insertion order, so a formatted entry lists its stats
/// in the order the source text did.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    /// Species or nickname token from the header line
    pub name: String,

    /// Held item, if the header carried one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ability: Option<String>,

    /// Level (1-100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tera_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nature: Option<String>,

    /// EV spread keyed by stat name, values 0-252
    pub evs: IndexMap<String, u8>,

    /// IV spread keyed by stat name, values 0-31
    pub ivs: IndexMap<String, u8>,

    /// Moves in listed order (1-4 for a valid entry)
    pub moves: Vec<String>,
}

impl TeamMember {
    /// Create a bare entry from a header line's name and optional item
    pub fn new(name: impl Into<String>, item: Option<String>) -> Self {
        Self {
            name: name.into(),
            item,
            ability: None,
            level: None,
            tera_type: None,
            nature: None,
            evs: IndexMap::new(),
            ivs: IndexMap::new(),
            moves: Vec::new(),
        }
    }
}

/// Outcome of validating a team export.
///
/// Diagnostics accumulate instead of aborting the parse; the structured
/// team is attached only when there are none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,

    /// Human-readable diagnostics, 1-indexed by source line where applicable
    pub errors: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<Vec<TeamMember>>,
}

impl ValidationResult {
    /// Clean result carrying the parsed team
    pub fn valid(team: Vec<TeamMember>) -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            team: Some(team),
        }
    }

    /// Failed result; the team is withheld, not emptied
    pub fn invalid(errors: Vec<String>) -> Self {
        Self {
            is_valid: false,
            errors,
            team: None,
        }
    }
}
