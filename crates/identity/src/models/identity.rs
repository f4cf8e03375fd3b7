use std::fmt;

use serde::{Deserialize, Serialize};

use super::ticker::Ticker;

/// Which strategy produced a match.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchTier {
    /// Registry entry equal to the query.
    Exact,
    /// A registry entry token found inside the query.
    Token,
    /// A whole registry entry found inside the query.
    Substring,
    /// Similarity ratio at or above the configured threshold.
    Fuzzy,
    /// Organization span from the NLP capability.
    NamedEntity,
    /// Capitalized word pattern.
    Heuristic,
    /// Answer from the text-generation capability.
    Generative,
}

impl MatchTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "EXACT",
            Self::Token => "TOKEN",
            Self::Substring => "SUBSTRING",
            Self::Fuzzy => "FUZZY",
            Self::NamedEntity => "NAMED_ENTITY",
            Self::Heuristic => "HEURISTIC",
            Self::Generative => "GENERATIVE",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate produced by one tier.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchCandidate {
    /// Canonical registry spelling, or the extracted text for freeform tiers.
    pub name: String,
    /// Similarity ratio in [0, 1]. Only the fuzzy tier sets it.
    pub score: Option<f64>,
    /// Tier of origin.
    pub tier: MatchTier,
    /// True when `name` is a registry entry.
    pub canonical: bool,
}

impl MatchCandidate {
    /// Candidate backed by a registry entry.
    pub fn canonical(name: impl Into<String>, tier: MatchTier) -> Self {
        Self {
            name: name.into(),
            score: None,
            tier,
            canonical: true,
        }
    }

    /// Candidate extracted from the query or a collaborator response.
    pub fn freeform(name: impl Into<String>, tier: MatchTier) -> Self {
        Self {
            name: name.into(),
            score: None,
            tier,
            canonical: false,
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }
}

/// Final output of a resolution call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedIdentity {
    pub name: String,
    pub tier: MatchTier,
    #[serde(default)]
    pub score: Option<f64>,
    pub canonical: bool,
}

impl From<MatchCandidate> for ResolvedIdentity {
    fn from(candidate: MatchCandidate) -> Self {
        Self {
            name: candidate.name,
            tier: candidate.tier,
            score: candidate.score,
            canonical: candidate.canonical,
        }
    }
}

/// Resolved identity plus the trading symbol, when one could be found.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyIdentity {
    pub name: String,
    pub ticker: Option<Ticker>,
    pub tier: MatchTier,
}
