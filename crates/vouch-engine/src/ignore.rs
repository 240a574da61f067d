//! Traversal relaxations.
//!
//! Callers may switch off whole classes of checks for one evaluation:
//! alternatives, mandatoriness, requirements, or conflicts. Enabling a
//! relaxation can only turn failures into passes, never the reverse.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use vouch_schema::DirectiveError;

/// A single relaxation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Ignore {
    /// Skip alternative resolution: a mandatory absent field fails at once,
    /// with its declared alternatives listed.
    Alternatives,
    /// Treat mandatory absent fields as vacuously valid.
    Mandatory,
    /// Skip requirement checks entirely.
    Requirements,
    /// Skip conflict checks entirely.
    Conflicts,
}

impl Ignore {
    /// All tokens, in check order.
    pub const ALL: [Ignore; 4] = [
        Ignore::Alternatives,
        Ignore::Mandatory,
        Ignore::Requirements,
        Ignore::Conflicts,
    ];

    /// The token's canonical spelling.
    pub fn token(self) -> &'static str {
        match self {
            Ignore::Alternatives => "ALTERNATIVES",
            Ignore::Mandatory => "MANDATORY",
            Ignore::Requirements => "REQUIREMENTS",
            Ignore::Conflicts => "CONFLICTS",
        }
    }
}

impl fmt::Display for Ignore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for Ignore {
    type Err = DirectiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ignore::ALL
            .into_iter()
            .find(|token| token.token() == s)
            .ok_or_else(|| DirectiveError::UnknownIgnoreToken {
                token: s.to_string(),
            })
    }
}

/// Immutable set of relaxations for one evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    alternatives: bool,
    mandatory: bool,
    requirements: bool,
    conflicts: bool,
}

impl IgnoreSet {
    /// The empty set: every check runs.
    pub fn none() -> Self {
        Self::default()
    }

    /// Parse a set from raw tokens, rejecting unknown ones.
    pub fn parse<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Result<Self, DirectiveError> {
        tokens
            .into_iter()
            .map(Ignore::from_str)
            .collect::<Result<Self, _>>()
    }

    /// Whether a relaxation is enabled.
    pub fn contains(&self, token: Ignore) -> bool {
        match token {
            Ignore::Alternatives => self.alternatives,
            Ignore::Mandatory => self.mandatory,
            Ignore::Requirements => self.requirements,
            Ignore::Conflicts => self.conflicts,
        }
    }

    fn insert(&mut self, token: Ignore) {
        match token {
            Ignore::Alternatives => self.alternatives = true,
            Ignore::Mandatory => self.mandatory = true,
            Ignore::Requirements => self.requirements = true,
            Ignore::Conflicts => self.conflicts = true,
        }
    }
}

impl FromIterator<Ignore> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = Ignore>>(iter: I) -> Self {
        let mut set = Self::none();
        for token in iter {
            set.insert(token);
        }
        set
    }
}
